use crate::clock;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// Nombre de minutes dans une journée.
pub const MINUTES_PER_DAY: i64 = 1440;

/// Heure d'horloge (minutes depuis minuit, dans [0, 1439]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Construit une heure à partir de minutes, `None` hors de [0, 1439].
    pub fn from_minutes(minutes: i64) -> Option<Self> {
        if (0..MINUTES_PER_DAY).contains(&minutes) {
            u16::try_from(minutes).ok().map(Self)
        } else {
            None
        }
    }

    pub fn minutes(self) -> i64 {
        i64::from(self.0)
    }

    pub fn hour(self) -> u32 {
        u32::from(self.0 / 60)
    }

    pub fn minute(self) -> u32 {
        u32::from(self.0 % 60)
    }

    /// Position absolue de cette heure sur le jour de référence (jour 0).
    pub fn on_reference_day(self) -> DayMinute {
        DayMinute(self.minutes())
    }
}

impl FromStr for TimeOfDay {
    type Err = crate::CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        clock::parse_clock(s)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&clock::format_clock(self.minutes()))
    }
}

#[cfg(feature = "serde")]
impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Minute absolue relative à minuit du jour de référence.
///
/// Peut être négative (veille) ou dépasser 1439 (lendemain et au-delà).
///
/// Sérialisée comme à l'affichage (`HH:MM (+Nd)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayMinute(i64);

impl DayMinute {
    pub const fn new(minutes: i64) -> Self {
        Self(minutes)
    }

    pub fn value(self) -> i64 {
        self.0
    }

    /// Décalage en jours (division plancher).
    pub fn day_offset(self) -> i64 {
        self.0.div_euclid(MINUTES_PER_DAY)
    }

    /// Heure d'horloge dans le jour concerné.
    pub fn time_of_day(self) -> TimeOfDay {
        // rem_euclid est toujours dans [0, 1440)
        TimeOfDay(self.0.rem_euclid(MINUTES_PER_DAY) as u16)
    }
}

impl Add<i64> for DayMinute {
    type Output = DayMinute;

    fn add(self, minutes: i64) -> DayMinute {
        DayMinute(self.0 + minutes)
    }
}

impl Sub<i64> for DayMinute {
    type Output = DayMinute;

    fn sub(self, minutes: i64) -> DayMinute {
        DayMinute(self.0 - minutes)
    }
}

impl Sub for DayMinute {
    type Output = i64;

    fn sub(self, other: DayMinute) -> i64 {
        self.0 - other.0
    }
}

impl fmt::Display for DayMinute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&clock::format_clock(self.0))
    }
}

#[cfg(feature = "serde")]
impl Serialize for DayMinute {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Intervalle [start, end] en minutes absolues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Span {
    pub start: DayMinute,
    pub end: DayMinute,
}

impl Span {
    pub fn new(start: DayMinute, end: DayMinute) -> Self {
        Self { start, end }
    }

    /// Durée en minutes.
    pub fn minutes(&self) -> i64 {
        self.end - self.start
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

/// Paramètres normalisés (tout en minutes), déjà validés.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioParameters {
    pub release_start: TimeOfDay,
    pub release_minutes: i64,
    /// Minutes de release à compter dans la journée pleine (scénario 3).
    pub combine_minutes: Option<i64>,
    pub normal_start: TimeOfDay,
    pub normal_end: TimeOfDay,
    /// 0 = dérivée de la journée normale.
    pub full_day_override_minutes: i64,
    pub min_rest_minutes: i64,
    pub max_overtime_minutes: i64,
}

impl ScenarioParameters {
    pub fn normal_day_minutes(&self) -> i64 {
        self.normal_end.minutes() - self.normal_start.minutes()
    }

    pub fn full_day_minutes(&self) -> i64 {
        if self.full_day_override_minutes > 0 {
            self.full_day_override_minutes
        } else {
            self.normal_day_minutes()
        }
    }

    pub fn release_window(&self) -> Span {
        let start = self.release_start.on_reference_day();
        Span::new(start, start + self.release_minutes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "snake_case"))]
pub enum ScenarioKind {
    /// Journée pleine qui absorbe la release, sans heures sup.
    ReleaseIncluded,
    /// Journée pleine terminée au début de la release, release en heures sup.
    ReleaseAsOvertime,
    /// Répartition choisie par l'utilisateur.
    Split,
}

/// Une alternative de planning calculée.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Scenario {
    pub kind: ScenarioKind,
    pub title: String,
    pub work: Span,
    pub release: Span,
    /// Du début du travail jusqu'à la fin de la release.
    pub total: Span,
    pub included_minutes: i64,
    pub overtime_minutes: i64,
    pub next_day: Span,
}

/// Résultat complet : entrées normalisées + 2 ou 3 scénarios.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CalcResult {
    pub release: Span,
    pub normal_day: Span,
    pub full_day_minutes: i64,
    pub min_rest_minutes: i64,
    pub max_overtime_minutes: i64,
    pub next_day: Span,
    pub scenarios: Vec<Scenario>,
}

impl CalcResult {
    pub fn release_minutes(&self) -> i64 {
        self.release.minutes()
    }

    pub fn normal_day_minutes(&self) -> i64 {
        self.normal_day.minutes()
    }

    pub fn scenario(&self, kind: ScenarioKind) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.kind == kind)
    }
}
