use super::util::clamp_minutes;
use crate::clock::format_hours;
use crate::model::{DayMinute, Scenario, ScenarioKind, Span};

/// Données communes aux trois scénarios.
pub(super) struct Frame {
    pub release: Span,
    pub next_day: Span,
    pub full_day_minutes: i64,
    pub max_overtime_minutes: i64,
}

impl Frame {
    fn release_minutes(&self) -> i64 {
        self.release.minutes()
    }

    fn scenario(
        &self,
        kind: ScenarioKind,
        title: String,
        work: Span,
        included_minutes: i64,
        overtime_minutes: i64,
    ) -> Scenario {
        Scenario {
            kind,
            title,
            work,
            release: self.release,
            total: Span::new(work.start, self.release.end),
            included_minutes,
            overtime_minutes,
            next_day: self.next_day,
        }
    }

    /// Fenêtre de travail de `full_day` minutes dont `included` chevauchent la release.
    fn window_including(&self, included: i64) -> Span {
        let pre_release = self.full_day_minutes - included;
        Span::new(
            self.release.start - pre_release,
            self.release.start + included,
        )
    }
}

/// Journée pleine qui absorbe autant de release que possible.
pub(super) fn release_included(frame: &Frame) -> Scenario {
    let len = frame.release_minutes();
    let full = frame.full_day_minutes;
    // minimum à absorber pour rester sous le plafond d'heures sup
    let required = (len - frame.max_overtime_minutes).max(0);
    let included = full.min(required.max(len.min(full)));
    let overtime = (len - included).max(0);

    frame.scenario(
        ScenarioKind::ReleaseIncluded,
        "Full day (release included) - No Overtime".to_string(),
        frame.window_including(included),
        included,
        overtime,
    )
}

/// Journée pleine qui se termine au début de la release ; la release passe
/// en heures sup, décalée plus tard si le plafond est dépassé.
pub(super) fn release_as_overtime(frame: &Frame) -> Scenario {
    let full = frame.full_day_minutes;
    let mut overtime = frame.release_minutes();
    let mut work_end: DayMinute = frame.release.start;

    if overtime > frame.max_overtime_minutes {
        work_end = frame.release.end - frame.max_overtime_minutes;
        overtime = frame.max_overtime_minutes;
    }

    frame.scenario(
        ScenarioKind::ReleaseAsOvertime,
        "Full day + release (Overtime)".to_string(),
        Span::new(work_end - full, work_end),
        0,
        overtime,
    )
}

/// Répartition choisie : `combine_minutes` de release comptées dans la journée.
pub(super) fn split(frame: &Frame, combine_minutes: i64) -> Scenario {
    let len = frame.release_minutes();
    let full = frame.full_day_minutes;

    let mut included = clamp_minutes(combine_minutes, 0, len.min(full));
    if len - included > frame.max_overtime_minutes {
        included = clamp_minutes(len - frame.max_overtime_minutes, 0, full);
    }

    let title = format!(
        "Full day + {} + {}",
        format_hours(combine_minutes),
        format_hours(len - combine_minutes)
    );
    frame.scenario(
        ScenarioKind::Split,
        title,
        frame.window_including(included),
        included,
        len - included,
    )
}
