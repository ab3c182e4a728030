//! Arithmétique d'horloge : parsing `HH:MM`, heures décimales, rendu.
//!
//! Tout est exprimé en minutes entières. Les valeurs absolues peuvent sortir
//! de [0, 1440) ; le rendu utilise une division plancher pour le décalage de
//! jour, jamais une division tronquée.

use crate::calculator::CalcError;
use crate::model::{TimeOfDay, MINUTES_PER_DAY};
use chrono::NaiveTime;

/// Parse `HH:MM` (heure 0..=23, minute 0..=59).
pub fn parse_clock(s: &str) -> Result<TimeOfDay, CalcError> {
    let invalid = || CalcError::InvalidTimeFormat {
        field: "time",
        value: s.to_string(),
    };
    let parts: Vec<&str> = s.trim().split(':').collect();
    let [hour, minute] = parts.as_slice() else {
        return Err(invalid());
    };
    let hour: u32 = hour.parse().map_err(|_| invalid())?;
    let minute: u32 = minute.parse().map_err(|_| invalid())?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)?;
    TimeOfDay::from_minutes(minutes_since_midnight(time)).ok_or_else(invalid)
}

fn minutes_since_midnight(time: NaiveTime) -> i64 {
    use chrono::Timelike;
    i64::from(time.hour() * 60 + time.minute())
}

/// Parse un nombre d'heures décimal, `.` ou `,` comme séparateur.
pub fn parse_decimal_hours(s: &str) -> Result<f64, CalcError> {
    let normalized = s.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CalcError::InvalidNumber {
            field: "hours",
            value: s.to_string(),
        }),
    }
}

/// Arrondi à la minute la plus proche (demi-minute arrondie loin de zéro).
pub fn hours_to_minutes(hours: f64) -> i64 {
    (hours * 60.0).round() as i64
}

/// `HH:MM`, suivi de ` (+Nd)` / ` (-Nd)` hors du jour de référence.
pub fn format_clock(minutes: i64) -> String {
    let days = minutes.div_euclid(MINUTES_PER_DAY);
    let in_day = minutes.rem_euclid(MINUTES_PER_DAY);
    let hm = format!("{:02}:{:02}", in_day / 60, in_day % 60);
    if days == 0 {
        hm
    } else {
        format!("{hm} ({days:+}d)")
    }
}

/// Durée `{h}h{mm}m` ; le signe est ignoré.
pub fn format_duration(minutes: i64) -> String {
    let m = minutes.abs();
    format!("{}h{:02}m", m / 60, m % 60)
}

/// Heures décimales à deux chiffres (titres de scénarios).
pub fn format_hours(minutes: i64) -> String {
    format!("{:.2}h", minutes as f64 / 60.0)
}
