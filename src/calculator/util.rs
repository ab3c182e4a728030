use crate::model::{DayMinute, TimeOfDay, MINUTES_PER_DAY};

/// Début du lendemain : après le repos minimal, et jamais avant l'heure
/// normale du jour calendaire suivant la fin de release.
pub(super) fn next_day_start(
    release_end: DayMinute,
    normal_start: TimeOfDay,
    min_rest_minutes: i64,
) -> DayMinute {
    let earliest_by_rest = release_end + min_rest_minutes;
    let next_calendar_day = (release_end.day_offset() + 1) * MINUTES_PER_DAY;
    let baseline = DayMinute::new(next_calendar_day) + normal_start.minutes();
    earliest_by_rest.max(baseline)
}

/// `value` borné à [lo, hi] ; `hi` l'emporte si `lo > hi`.
pub(super) fn clamp_minutes(value: i64, lo: i64, hi: i64) -> i64 {
    value.max(lo).min(hi)
}
