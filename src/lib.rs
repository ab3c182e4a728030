#![forbid(unsafe_code)]
//! Nightrelcalc — calcul des journées de travail autour d'une release de nuit.
//!
//! - Trois scénarios : release absorbée, release en heures sup, répartition choisie.
//! - Plafond légal d'heures sup et repos minimal avant le lendemain.
//! - Heures d'horloge naïves en minutes entières, sans fuseau ni calendrier.
//! - Rendu texte/JSON/CSV et formulaire web en dehors du calcul.

pub mod calculator;
pub mod clock;
pub mod config;
#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod report;
#[cfg(feature = "web")]
pub mod web;

pub use calculator::{calculate, compute, normalize, CalcError, ScenarioRequest};
pub use clock::{format_clock, format_duration, hours_to_minutes, parse_clock, parse_decimal_hours};
pub use config::Defaults;
pub use model::{
    CalcResult, DayMinute, Scenario, ScenarioKind, ScenarioParameters, Span, TimeOfDay,
};
pub use report::{ResultRenderer, ShareDescription, TextReport};
