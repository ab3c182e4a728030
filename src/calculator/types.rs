use crate::config::Defaults;
use crate::model::TimeOfDay;
use thiserror::Error;

/// Erreurs de validation ; le calcul lui-même ne peut pas échouer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("invalid {field} {value:?}, expected HH:MM")]
    InvalidTimeFormat { field: &'static str, value: String },
    #[error("invalid {field} {value:?}, expected a number of hours")]
    InvalidNumber { field: &'static str, value: String },
    #[error("{field} must be > 0")]
    NonPositiveLength { field: &'static str },
    #[error("max overtime must be >= 0")]
    NegativeOvertimeCap,
    #[error("combine must be >= 0 (hours) or empty")]
    NegativeCombine,
    #[error("normal day must be within same day and end after start (got {start} -> {end})")]
    InvalidNormalDay { start: TimeOfDay, end: TimeOfDay },
}

impl CalcError {
    /// Renomme le champ fautif (les helpers de parsing ne le connaissent pas).
    pub fn for_field(self, name: &'static str) -> Self {
        match self {
            CalcError::InvalidTimeFormat { value, .. } => CalcError::InvalidTimeFormat {
                field: name,
                value,
            },
            CalcError::InvalidNumber { value, .. } => CalcError::InvalidNumber { field: name, value },
            CalcError::NonPositiveLength { .. } => CalcError::NonPositiveLength { field: name },
            other => other,
        }
    }
}

/// Entrées brutes du calcul, telles que fournies par la CLI ou le formulaire.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioRequest {
    /// `HH:MM`
    pub release_start: String,
    pub release_hours: f64,
    /// `None` = pas de scénario « combine ».
    pub combine_hours: Option<f64>,
    /// 0 = dérivée de la journée normale.
    pub full_day_hours: f64,
    pub normal_start: String,
    pub normal_end: String,
    pub min_rest_hours: f64,
    pub max_overtime_hours: f64,
}

impl ScenarioRequest {
    /// Requête avec les réglages par défaut pour la journée normale et les limites.
    pub fn new<S: Into<String>>(release_start: S, release_hours: f64) -> Self {
        Self::with_defaults(release_start, release_hours, &Defaults::default())
    }

    pub fn with_defaults<S: Into<String>>(
        release_start: S,
        release_hours: f64,
        defaults: &Defaults,
    ) -> Self {
        Self {
            release_start: release_start.into(),
            release_hours,
            combine_hours: None,
            full_day_hours: 0.0,
            normal_start: defaults.normal_start.clone(),
            normal_end: defaults.normal_end.clone(),
            min_rest_hours: defaults.min_rest_hours,
            max_overtime_hours: defaults.max_overtime_hours,
        }
    }

    pub fn combine(mut self, hours: f64) -> Self {
        self.combine_hours = Some(hours);
        self
    }

    pub fn full_day(mut self, hours: f64) -> Self {
        self.full_day_hours = hours;
        self
    }

    pub fn normal_day<S: Into<String>, E: Into<String>>(mut self, start: S, end: E) -> Self {
        self.normal_start = start.into();
        self.normal_end = end.into();
        self
    }

    pub fn min_rest(mut self, hours: f64) -> Self {
        self.min_rest_hours = hours;
        self
    }

    pub fn max_overtime(mut self, hours: f64) -> Self {
        self.max_overtime_hours = hours;
        self
    }
}
