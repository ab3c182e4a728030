//! Rendu HTML de la page (formulaire + résultats + sélecteur d'heure).

use super::form::PageData;
use crate::clock::format_duration;
use crate::model::CalcResult;
use std::fmt::Write;

/// Échappe le texte inséré dans le HTML (contenu et attributs).
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_page(data: &PageData) -> String {
    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!doctype html>\n<html>\n<head>\n  <meta charset=\"utf-8\">\n  <title>nightrelcalc</title>\n");
    if let Some(desc) = &data.share_description {
        let desc = escape_html(desc);
        let _ = writeln!(html, "  <meta name=\"description\" content=\"{desc}\">");
        let _ = writeln!(html, "  <meta property=\"og:description\" content=\"{desc}\">");
    }
    html.push_str(STYLE);
    html.push_str("</head>\n<body>\n");

    render_form(&mut html, data);

    if let Some(err) = &data.error {
        let _ = writeln!(html, "  <div class=\"err\">{}</div>", escape_html(err));
    }
    if let Some(result) = &data.result {
        render_result(&mut html, result);
    }

    html.push_str(TIME_PICKER);
    let _ = writeln!(
        html,
        "  <footer>nightrelcalc v{}</footer>\n</body>\n</html>",
        escape_html(data.version)
    );
    html
}

fn time_field(html: &mut String, id: &str, label: &str, value: &str, placeholder: &str, required: bool) {
    let _ = write!(
        html,
        r#"        <div class="field">
          <label for="{id}">{label}</label>
          <div class="time-row">
            <input id="{id}" name="{id}" type="text" class="time-value" value="{value}" placeholder="{placeholder}" pattern="[0-9]{{1,2}}:[0-9]{{2}}"{req} autocomplete="off">
            <button type="button" class="time-picker-btn" data-for="{id}" aria-label="Pick time">&#128336;</button>
          </div>
        </div>
"#,
        value = escape_html(value),
        req = if required { " required" } else { "" },
    );
}

#[allow(clippy::too_many_arguments)]
fn number_field(
    html: &mut String,
    id: &str,
    label: &str,
    value: &str,
    placeholder: &str,
    min: &str,
    step: &str,
    hint: Option<&str>,
) {
    let _ = writeln!(
        html,
        r#"        <div class="field">
          <label for="{id}">{label}</label>
          <input id="{id}" name="{id}" type="number" min="{min}" step="{step}" value="{value}" placeholder="{placeholder}">"#,
        value = escape_html(value),
    );
    if let Some(hint) = hint {
        let _ = writeln!(html, "          <div class=\"hint\">{hint}</div>");
    }
    html.push_str("        </div>\n");
}

fn render_form(html: &mut String, data: &PageData) {
    html.push_str("  <form method=\"POST\" action=\"/calc\">\n    <div class=\"form-grid\">\n");

    html.push_str("      <div class=\"form-section\">\n        <div class=\"form-section-title\">Release</div>\n");
    time_field(html, "start", "Release start", &data.start, "18:30", true);
    number_field(html, "length", "Release length (hours)", &data.length, "4", "0.25", "0.25", Some("e.g. 4, 3.5, 2.25"));
    number_field(html, "combine", "Combine (hours)", &data.combine, "optional", "0", "0.25", None);
    html.push_str("      </div>\n");

    html.push_str("      <div class=\"form-section\">\n        <div class=\"form-section-title\">Work day</div>\n        <div class=\"fields-row\">\n");
    time_field(html, "normal_start", "Normal work start", &data.normal_start, "09:00", false);
    time_field(html, "normal_end", "Normal work end", &data.normal_end, "17:30", false);
    let _ = writeln!(
        html,
        "        </div>\n        <div class=\"hint\">Full day: <span class=\"mono\">{}</span></div>",
        escape_html(&data.full)
    );
    html.push_str("        <div class=\"form-section-title\">Legal limits</div>\n        <div class=\"fields-row\">\n");
    number_field(html, "min_rest", "Min rest after release (hours)", &data.min_rest, "11", "1", "0.5", None);
    number_field(
        html,
        "max_overtime",
        "Max overtime (hours)",
        &data.max_overtime,
        "4",
        "0",
        "0.5",
        Some("Legal cap; work start shifts if OT would exceed this"),
    );
    html.push_str("        </div>\n      </div>\n    </div>\n");

    html.push_str("    <div class=\"form-actions\">\n      <button type=\"submit\">Calculate</button>\n    </div>\n  </form>\n");
}

fn render_result(html: &mut String, result: &CalcResult) {
    let _ = writeln!(
        html,
        r#"  <div class="card">
    <div><b>Release Window</b>: <span class="mono">{}</span> &rarr; <span class="mono">{}</span> (len <span class="mono">{}</span>)</div>
    <div><b>Normal day</b>: <span class="mono">{} &rarr; {}</span> (len <span class="mono">{}</span>)</div>
    <div><b>Full day used</b>: <span class="mono">{}</span>, <b>Min rest</b>: <span class="mono">{}</span>, <b>Max overtime (cap)</b>: <span class="mono">{}</span></div>
  </div>"#,
        result.release.start,
        result.release.end,
        format_duration(result.release_minutes()),
        result.normal_day.start,
        result.normal_day.end,
        format_duration(result.normal_day_minutes()),
        format_duration(result.full_day_minutes),
        format_duration(result.min_rest_minutes),
        format_duration(result.max_overtime_minutes),
    );

    for s in &result.scenarios {
        let rows = [
            ("Work Hours", s.work.to_string()),
            ("Release Window", s.release.to_string()),
            ("Total Work", s.total.to_string()),
            ("Release Hours Included in Full", format_duration(s.included_minutes)),
            ("Overtime", format_duration(s.overtime_minutes)),
            ("Next Day Hours", s.next_day.to_string()),
        ];
        let _ = writeln!(
            html,
            "  <div class=\"card\">\n    <div><b>{}</b></div>\n    <table>",
            escape_html(&s.title)
        );
        for (key, value) in rows {
            let _ = writeln!(
                html,
                "      <tr><td class=\"k\">{key}</td><td class=\"mono\">{}</td></tr>",
                escape_html(&value)
            );
        }
        html.push_str("    </table>\n  </div>\n");
    }
}

const STYLE: &str = r#"  <style>
    body { font-family: system-ui, sans-serif; margin: 0; padding: 24px; max-width: 960px; box-sizing: border-box; }
    * { box-sizing: border-box; }
    .err { color: #b00020; margin: 12px 0; padding: 10px; background: #ffebee; border-radius: 6px; }
    .card { border: 1px solid #e0e0e0; border-radius: 10px; padding: 16px; margin: 16px 0; background: #fafafa; }
    .mono { font-family: ui-monospace, Menlo, Consolas, monospace; }
    table { border-collapse: collapse; width: 100%; margin-top: 10px; }
    td { padding: 8px 10px; border-top: 1px solid #eee; vertical-align: top; }
    .k { width: 320px; color: #444; }
    .hint { color: #666; font-size: 0.9em; margin-top: 4px; }
    footer { margin-top: 40px; color: #666; font-size: 0.9em; text-align: center; }
    .form-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 0 32px; }
    @media (max-width: 640px) { .form-grid { grid-template-columns: 1fr; } }
    .form-section-title { font-size: 0.85em; font-weight: 600; text-transform: uppercase; color: #555; margin: 12px 0; padding-bottom: 6px; border-bottom: 1px solid #e0e0e0; }
    .field { margin-bottom: 14px; }
    .field label { display: block; font-weight: 500; margin-bottom: 4px; }
    .field input { padding: 8px 10px; font-size: 1em; border: 1px solid #ccc; border-radius: 6px; width: 100%; max-width: 140px; }
    .time-row { display: flex; align-items: center; gap: 8px; }
    .time-row input.time-value { max-width: 80px; }
    .time-picker-btn { padding: 6px 12px; background: #f5f5f5; border: 1px solid #ccc; border-radius: 6px; cursor: pointer; }
    .time-picker-overlay { position: fixed; inset: 0; background: rgba(0,0,0,0.4); display: none; align-items: center; justify-content: center; }
    .time-picker-overlay.open { display: flex; }
    .time-picker-modal { background: #fff; border-radius: 10px; padding: 20px; min-width: 200px; }
    .time-picker-row { display: flex; gap: 12px; align-items: center; margin-bottom: 16px; }
    .time-picker-actions { display: flex; gap: 8px; justify-content: flex-end; }
    .fields-row { display: flex; gap: 20px; flex-wrap: wrap; }
    .form-actions { padding-top: 16px; border-top: 1px solid #e0e0e0; }
    button[type="submit"] { padding: 10px 20px; font-size: 1em; background: #1976d2; color: #fff; border: none; border-radius: 6px; cursor: pointer; }
  </style>
"#;

const TIME_PICKER: &str = r#"  <div id="time-picker-overlay" class="time-picker-overlay" role="dialog" aria-modal="true" aria-label="Pick time (24h)">
    <div class="time-picker-modal">
      <div class="time-picker-row">
        <label for="tp-hour">Hour</label><select id="tp-hour"></select>
        <label for="tp-minute">Min</label><select id="tp-minute"></select>
      </div>
      <div class="time-picker-actions">
        <button type="button" id="tp-cancel">Cancel</button>
        <button type="button" id="tp-ok">OK</button>
      </div>
    </div>
  </div>
  <script>
(function() {
  var overlay = document.getElementById('time-picker-overlay');
  var hour = document.getElementById('tp-hour');
  var minute = document.getElementById('tp-minute');
  var target = null;
  function pad2(n) { return (n < 10 ? '0' : '') + n; }
  function fill(sel, n) {
    for (var i = 0; i < n; i++) {
      var o = document.createElement('option');
      o.value = i; o.textContent = pad2(i); sel.appendChild(o);
    }
  }
  fill(hour, 24); fill(minute, 60);
  function parse(s) {
    var m = (s || '').trim().match(/^(\d{1,2}):(\d{2})$/);
    if (!m) return { h: 0, m: 0 };
    var h = parseInt(m[1], 10), mi = parseInt(m[2], 10);
    if (h > 23 || mi > 59) return { h: 0, m: 0 };
    return { h: h, m: mi };
  }
  function open(id) {
    target = document.getElementById(id);
    if (!target) return;
    var t = parse(target.value);
    hour.value = t.h; minute.value = t.m;
    overlay.classList.add('open');
    hour.focus();
  }
  function close() { overlay.classList.remove('open'); target = null; }
  function apply() {
    if (!target) return;
    target.value = pad2(parseInt(hour.value, 10)) + ':' + pad2(parseInt(minute.value, 10));
    close();
  }
  document.querySelectorAll('.time-picker-btn').forEach(function(btn) {
    btn.addEventListener('click', function() { open(btn.getAttribute('data-for')); });
  });
  document.getElementById('tp-ok').addEventListener('click', apply);
  document.getElementById('tp-cancel').addEventListener('click', close);
  overlay.addEventListener('click', function(e) { if (e.target === overlay) close(); });
  document.addEventListener('keydown', function(e) {
    if (!overlay.classList.contains('open')) return;
    if (e.key === 'Escape') { e.preventDefault(); close(); }
    if (e.key === 'Enter') { e.preventDefault(); apply(); }
  });
})();
  </script>
"#;
