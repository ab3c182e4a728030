//! Champs du formulaire, pré-remplissage et validation de la soumission.

use crate::calculator::{compute, ScenarioRequest};
use crate::clock::{format_duration, parse_decimal_hours};
use crate::config::{hours_input, Defaults};
use crate::model::CalcResult;
use crate::report::{ResultRenderer, ShareDescription};
use serde::Deserialize;
use url::form_urlencoded;

/// Champs bruts (query string ou corps de formulaire).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FormFields {
    pub start: String,
    pub length: String,
    pub combine: String,
    pub normal_start: String,
    pub normal_end: String,
    pub min_rest: String,
    pub max_overtime: String,
}

impl FormFields {
    fn trimmed(self) -> Self {
        Self {
            start: self.start.trim().to_string(),
            length: self.length.trim().to_string(),
            combine: self.combine.trim().to_string(),
            normal_start: self.normal_start.trim().to_string(),
            normal_end: self.normal_end.trim().to_string(),
            min_rest: self.min_rest.trim().to_string(),
            max_overtime: self.max_overtime.trim().to_string(),
        }
    }
}

/// Ce que la page affiche.
#[derive(Debug, Clone, Default)]
pub struct PageData {
    pub start: String,
    pub length: String,
    pub combine: String,
    pub normal_start: String,
    pub normal_end: String,
    pub min_rest: String,
    pub max_overtime: String,
    /// Journée pleine affichée : toujours dérivée de la journée normale.
    pub full: String,
    pub version: &'static str,
    pub error: Option<String>,
    pub result: Option<CalcResult>,
    /// Texte des balises meta quand un résultat est présent.
    pub share_description: Option<String>,
}

#[derive(Debug)]
pub enum Submission {
    Redirect(String),
    Invalid(PageData),
}

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Page `GET /` : champs vides remplacés par les défauts, calcul si la
/// release est exploitable. Repos/plafond invalides retombent sur les défauts,
/// un combine invalide est ignoré.
pub fn page_from_query(fields: FormFields, defaults: &Defaults, version: &'static str) -> PageData {
    let fields = fields.trimmed();
    let mut data = PageData {
        start: or_default(&fields.start, &defaults.release_start),
        length: or_default(&fields.length, &hours_input(defaults.release_hours)),
        combine: fields.combine,
        normal_start: or_default(&fields.normal_start, &defaults.normal_start),
        normal_end: or_default(&fields.normal_end, &defaults.normal_end),
        min_rest: or_default(&fields.min_rest, &hours_input(defaults.min_rest_hours)),
        max_overtime: or_default(&fields.max_overtime, &hours_input(defaults.max_overtime_hours)),
        full: "(auto)".to_string(),
        version,
        ..PageData::default()
    };

    let release_hours = match parse_decimal_hours(&data.length) {
        Ok(hours) if hours > 0.0 => hours,
        _ => return data,
    };
    let min_rest_hours = parse_decimal_hours(&data.min_rest)
        .ok()
        .filter(|h| *h > 0.0)
        .unwrap_or(defaults.min_rest_hours);
    let max_overtime_hours = parse_decimal_hours(&data.max_overtime)
        .ok()
        .filter(|h| *h >= 0.0)
        .unwrap_or(defaults.max_overtime_hours);
    let combine_hours = parse_decimal_hours(&data.combine)
        .ok()
        .filter(|h| *h >= 0.0);

    let request = ScenarioRequest {
        release_start: data.start.clone(),
        release_hours,
        combine_hours,
        full_day_hours: 0.0,
        normal_start: data.normal_start.clone(),
        normal_end: data.normal_end.clone(),
        min_rest_hours,
        max_overtime_hours,
    };
    match compute(&request) {
        Ok(result) => {
            data.full = format_duration(result.full_day_minutes);
            data.share_description = Some(ShareDescription.render(&result));
            data.result = Some(result);
        }
        Err(err) => data.error = Some(err.to_string()),
    }
    data
}

/// Soumission `POST /calc`.
pub fn submit(fields: FormFields, defaults: &Defaults, version: &'static str) -> Submission {
    let mut fields = fields.trimmed();
    if fields.normal_end.is_empty() {
        fields.normal_end = defaults.normal_end.clone();
    }

    let mut data = PageData {
        start: fields.start.clone(),
        length: fields.length.clone(),
        combine: fields.combine.clone(),
        normal_start: fields.normal_start.clone(),
        normal_end: fields.normal_end.clone(),
        min_rest: fields.min_rest.clone(),
        max_overtime: fields.max_overtime.clone(),
        version,
        ..PageData::default()
    };
    let invalid = |mut data: PageData, msg: String| {
        data.error = Some(msg);
        Submission::Invalid(data)
    };

    if fields.start.is_empty() {
        return invalid(data, "release start is required (HH:MM)".to_string());
    }
    let release_hours = match parse_decimal_hours(&fields.length) {
        Ok(hours) if hours > 0.0 => hours,
        _ => return invalid(data, "release length must be > 0 (hours, e.g. 4)".to_string()),
    };

    if fields.normal_start.is_empty() {
        fields.normal_start = defaults.normal_start.clone();
    }
    if fields.min_rest.is_empty() {
        fields.min_rest = hours_input(defaults.min_rest_hours);
    }
    if fields.max_overtime.is_empty() {
        fields.max_overtime = hours_input(defaults.max_overtime_hours);
    }

    let min_rest_hours = match parse_decimal_hours(&fields.min_rest) {
        Ok(hours) if hours > 0.0 => hours,
        _ => {
            let msg = format!(
                "min rest must be > 0 (hours, default {})",
                hours_input(defaults.min_rest_hours)
            );
            return invalid(data, msg);
        }
    };
    let max_overtime_hours = match parse_decimal_hours(&fields.max_overtime) {
        Ok(hours) if hours >= 0.0 => hours,
        _ => {
            let msg = format!(
                "max overtime must be >= 0 (hours, default {})",
                hours_input(defaults.max_overtime_hours)
            );
            return invalid(data, msg);
        }
    };
    let combine_hours = if fields.combine.is_empty() {
        None
    } else {
        match parse_decimal_hours(&fields.combine) {
            Ok(hours) if hours >= 0.0 => Some(hours),
            _ => return invalid(data, "combine must be >= 0 (hours) or empty".to_string()),
        }
    };

    let request = ScenarioRequest {
        release_start: fields.start.clone(),
        release_hours,
        combine_hours,
        full_day_hours: 0.0,
        normal_start: fields.normal_start.clone(),
        normal_end: fields.normal_end.clone(),
        min_rest_hours,
        max_overtime_hours,
    };
    if let Err(err) = compute(&request) {
        data.error = Some(err.to_string());
        return Submission::Invalid(data);
    }
    Submission::Redirect(build_calc_url(&fields, defaults))
}

/// `/?start=..&length=..`, les autres champs seulement s'ils diffèrent des défauts.
pub fn build_calc_url(fields: &FormFields, defaults: &Defaults) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("start", &fields.start);
    query.append_pair("length", &fields.length);
    if !fields.combine.is_empty() {
        query.append_pair("combine", &fields.combine);
    }
    let optional = [
        ("normal_start", &fields.normal_start, defaults.normal_start.clone()),
        ("normal_end", &fields.normal_end, defaults.normal_end.clone()),
        ("min_rest", &fields.min_rest, hours_input(defaults.min_rest_hours)),
        (
            "max_overtime",
            &fields.max_overtime,
            hours_input(defaults.max_overtime_hours),
        ),
    ];
    for (name, value, default) in optional {
        if !value.is_empty() && *value != default {
            query.append_pair(name, value);
        }
    }
    format!("/?{}", query.finish())
}
