use crate::clock::format_duration;
use crate::model::CalcResult;
use std::fmt::Write;

/// Permet de customiser le rendu d'un résultat (terminal, aperçu de lien...).
pub trait ResultRenderer {
    fn render(&self, result: &CalcResult) -> String;
}

/// Rendu texte de la CLI.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReport;

impl ResultRenderer for TextReport {
    fn render(&self, result: &CalcResult) -> String {
        let mut out = String::new();
        // write! vers une String ne peut pas échouer
        let _ = writeln!(
            out,
            "Release Window: {} -> {} (len {})",
            result.release.start,
            result.release.end,
            format_duration(result.release_minutes())
        );
        let _ = writeln!(
            out,
            "Normal day: {} -> {} (len {})",
            result.normal_day.start,
            result.normal_day.end,
            format_duration(result.normal_day_minutes())
        );
        let _ = writeln!(
            out,
            "Full day used: {}, Min rest: {}, Max overtime (cap): {}\n",
            format_duration(result.full_day_minutes),
            format_duration(result.min_rest_minutes),
            format_duration(result.max_overtime_minutes)
        );

        for s in &result.scenarios {
            let _ = writeln!(out, "{}", s.title);
            let _ = writeln!(out, "  Work Hours:                    {}", s.work);
            let _ = writeln!(out, "  Release Window:                {}", s.release);
            let _ = writeln!(out, "  Total Work:                    {}", s.total);
            let _ = writeln!(
                out,
                "  Release Hours Included in Full {}",
                format_duration(s.included_minutes)
            );
            let _ = writeln!(
                out,
                "  Overtime:                      {}",
                format_duration(s.overtime_minutes)
            );
            let _ = writeln!(out, "  Next Day Hours:                {}\n", s.next_day);
        }
        out
    }
}

/// Résumé d'une ligne pour les aperçus de lien (balise meta description).
#[derive(Debug, Default, Clone, Copy)]
pub struct ShareDescription;

impl ResultRenderer for ShareDescription {
    fn render(&self, result: &CalcResult) -> String {
        let Some(first) = result.scenarios.first() else {
            return format!(
                "Release {} → {} (len {}). Full day {}, min rest {}, max OT {}.",
                result.release.start,
                result.release.end,
                format_duration(result.release_minutes()),
                format_duration(result.full_day_minutes),
                format_duration(result.min_rest_minutes),
                format_duration(result.max_overtime_minutes)
            );
        };
        format!(
            "Release {}→{} ({}). Work {}. Included {}, overtime {}. Next day {}.",
            result.release.start,
            result.release.end,
            format_duration(result.release_minutes()),
            first.work,
            format_duration(first.included_minutes),
            format_duration(first.overtime_minutes),
            first.next_day
        )
    }
}
