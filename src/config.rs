use crate::clock::{hours_to_minutes, parse_clock};
use anyhow::{bail, Context, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use std::{fs, path::Path};

/// Valeurs par défaut transmises à la CLI et au formulaire web.
///
/// Un fichier JSON peut n'en redéfinir qu'une partie ; le reste garde les
/// valeurs intégrées.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Defaults {
    pub release_start: String,
    pub release_hours: f64,
    pub normal_start: String,
    pub normal_end: String,
    pub min_rest_hours: f64,
    pub max_overtime_hours: f64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            release_start: "18:30".to_string(),
            release_hours: 4.0,
            normal_start: "09:00".to_string(),
            normal_end: "17:30".to_string(),
            min_rest_hours: 11.0,
            max_overtime_hours: 4.0,
        }
    }
}

impl Defaults {
    pub fn validate(&self) -> Result<()> {
        parse_clock(&self.release_start).context("invalid default release_start")?;
        let start = parse_clock(&self.normal_start).context("invalid default normal_start")?;
        let end = parse_clock(&self.normal_end).context("invalid default normal_end")?;
        if end <= start {
            bail!("default normal day must end after it starts ({start} -> {end})");
        }
        if !self.release_hours.is_finite() || hours_to_minutes(self.release_hours) <= 0 {
            bail!("release_hours must be > 0");
        }
        if !self.min_rest_hours.is_finite() || hours_to_minutes(self.min_rest_hours) <= 0 {
            bail!("min_rest_hours must be > 0");
        }
        if !self.max_overtime_hours.is_finite() || hours_to_minutes(self.max_overtime_hours) < 0 {
            bail!("max_overtime_hours must be >= 0");
        }
        Ok(())
    }
}

/// Rendu d'un nombre d'heures tel qu'on le saisit (`11`, `4.5`).
pub fn hours_input(hours: f64) -> String {
    format!("{hours}")
}

#[cfg(feature = "serde")]
pub fn load_defaults_from_file<P: AsRef<Path>>(path: P) -> Result<Defaults> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    let defaults: Defaults = serde_json::from_slice(&data)
        .with_context(|| format!("parsing config {}", path.display()))?;
    defaults.validate()?;
    Ok(defaults)
}
