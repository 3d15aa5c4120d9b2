//! Plain-text report.

use crate::diff::{DiffResult, Movement};
use crate::errors::PriceWatchError;
use crate::model::{format_price, GroupMap};
use crate::report::style::{EmptySections, ReportStyle};
use chrono::NaiveDate;

/// Render the text report for `date`.
///
/// Layout: the date, a blank line, then the riser section before the
/// faller section. Each section is a `{header} ({count})` line followed by
/// one `{marker} {name} #{group} {price}` line per movement.
pub fn render_text(
    diff: &DiffResult,
    groups: &GroupMap,
    date: NaiveDate,
    style: &ReportStyle,
) -> String {
    let mut lines = vec![date.format(&style.date_format).to_string(), String::new()];

    let risers = Section {
        header: &style.riser_header,
        marker: &style.riser_marker,
        movements: &diff.risers,
    };
    let fallers = Section {
        header: &style.faller_header,
        marker: &style.faller_marker,
        movements: &diff.fallers,
    };

    match style.empty_sections {
        EmptySections::Omit => {
            if diff.is_quiet() {
                lines.push(style.no_movement.clone());
            } else {
                if !risers.movements.is_empty() {
                    risers.push_to(&mut lines, groups, style);
                }
                if !risers.movements.is_empty() && !fallers.movements.is_empty() {
                    lines.push(String::new());
                }
                if !fallers.movements.is_empty() {
                    fallers.push_to(&mut lines, groups, style);
                }
            }
        }
        EmptySections::ShowWithCount => {
            risers.push_to(&mut lines, groups, style);
            lines.push(String::new());
            fallers.push_to(&mut lines, groups, style);
        }
    }

    lines.join("\n")
}

struct Section<'a> {
    header: &'a str,
    marker: &'a str,
    movements: &'a [Movement],
}

impl Section<'_> {
    fn push_to(&self, lines: &mut Vec<String>, groups: &GroupMap, style: &ReportStyle) {
        lines.push(format!("{} ({})", self.header, self.movements.len()));
        for m in self.movements {
            let group = groups
                .label(m.entity.team)
                .unwrap_or(style.unknown_group.as_str());
            lines.push(format!(
                "{} {} #{} {}",
                self.marker,
                m.entity.web_name,
                group,
                format_price(m.entity.now_cost)
            ));
        }
    }
}

/// Serialize the structured diff as pretty JSON.
///
/// # Errors
///
/// - `Serialization`: only if an opaque entity field cannot be encoded
pub fn render_json(diff: &DiffResult) -> Result<String, PriceWatchError> {
    Ok(serde_json::to_string_pretty(diff)?)
}
