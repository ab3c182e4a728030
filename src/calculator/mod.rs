mod scenarios;
mod types;
mod util;

pub use types::{CalcError, ScenarioRequest};

use crate::clock::{hours_to_minutes, parse_clock};
use crate::model::{CalcResult, ScenarioParameters, Span};
use scenarios::Frame;

/// Valide la requête puis calcule les scénarios.
///
/// Aucune sortie partielle : la première erreur de validation interrompt tout.
pub fn compute(request: &ScenarioRequest) -> Result<CalcResult, CalcError> {
    let params = normalize(request)?;
    Ok(calculate(&params))
}

/// Convertit une requête brute en paramètres en minutes, dans l'ordre :
/// release, journée normale, repos, plafond d'heures sup, combine.
pub fn normalize(request: &ScenarioRequest) -> Result<ScenarioParameters, CalcError> {
    let release_start =
        parse_clock(&request.release_start).map_err(|e| e.for_field("release start"))?;
    let release_minutes = positive_minutes(request.release_hours, "release length")?;

    let normal_start =
        parse_clock(&request.normal_start).map_err(|e| e.for_field("normal start"))?;
    let normal_end = parse_clock(&request.normal_end).map_err(|e| e.for_field("normal end"))?;
    if normal_end <= normal_start {
        return Err(CalcError::InvalidNormalDay {
            start: normal_start,
            end: normal_end,
        });
    }

    let min_rest_minutes = positive_minutes(request.min_rest_hours, "min rest")?;

    let max_overtime_minutes = finite_minutes(request.max_overtime_hours, "max overtime")?;
    if max_overtime_minutes < 0 {
        return Err(CalcError::NegativeOvertimeCap);
    }

    let combine_minutes = match request.combine_hours {
        Some(hours) => {
            let minutes = finite_minutes(hours, "combine")?;
            if minutes < 0 {
                return Err(CalcError::NegativeCombine);
            }
            Some(minutes)
        }
        None => None,
    };

    let full_day_override_minutes = finite_minutes(request.full_day_hours, "full day")?.max(0);

    Ok(ScenarioParameters {
        release_start,
        release_minutes,
        combine_minutes,
        normal_start,
        normal_end,
        full_day_override_minutes,
        min_rest_minutes,
        max_overtime_minutes,
    })
}

/// Calcul pur sur des paramètres déjà validés.
pub fn calculate(params: &ScenarioParameters) -> CalcResult {
    let release = params.release_window();
    let full_day_minutes = params.full_day_minutes();
    let normal_day_minutes = params.normal_day_minutes();

    let next_start = util::next_day_start(release.end, params.normal_start, params.min_rest_minutes);
    let next_day = Span::new(next_start, next_start + normal_day_minutes);

    let frame = Frame {
        release,
        next_day,
        full_day_minutes,
        max_overtime_minutes: params.max_overtime_minutes,
    };

    let mut built = Vec::with_capacity(3);
    built.push(scenarios::release_included(&frame));
    built.push(scenarios::release_as_overtime(&frame));
    if let Some(combine) = params.combine_minutes {
        built.push(scenarios::split(&frame, combine));
    }

    #[cfg(feature = "logging")]
    tracing::debug!(
        release = %release,
        full_day_minutes,
        next_day = %next_day,
        scenarios = built.len(),
        "scenarios computed"
    );

    CalcResult {
        release,
        normal_day: Span::new(
            params.normal_start.on_reference_day(),
            params.normal_end.on_reference_day(),
        ),
        full_day_minutes,
        min_rest_minutes: params.min_rest_minutes,
        max_overtime_minutes: params.max_overtime_minutes,
        next_day,
        scenarios: built,
    }
}

// au-delà, l'arithmétique en minutes pourrait déborder
const MAX_HOURS: f64 = 1.0e6;

fn finite_minutes(hours: f64, field: &'static str) -> Result<i64, CalcError> {
    if hours.is_finite() && hours.abs() <= MAX_HOURS {
        Ok(hours_to_minutes(hours))
    } else {
        Err(CalcError::InvalidNumber {
            field,
            value: hours.to_string(),
        })
    }
}

fn positive_minutes(hours: f64, field: &'static str) -> Result<i64, CalcError> {
    let minutes = finite_minutes(hours, field)?;
    if minutes <= 0 {
        return Err(CalcError::NonPositiveLength { field });
    }
    Ok(minutes)
}
