//! Report style configuration.

use serde::{Deserialize, Serialize};

/// How a class with no members is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptySections {
    /// Leave empty classes out; a quiet day renders a single no-movement line
    #[default]
    Omit,
    /// Always render both headers, each with its `(n)` count
    ShowWithCount,
}

/// Labels and layout switches for the text report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportStyle {
    pub empty_sections: EmptySections,
    pub riser_header: String,
    pub faller_header: String,
    pub riser_marker: String,
    pub faller_marker: String,
    /// Shown in place of a group label that cannot be resolved
    pub unknown_group: String,
    pub no_movement: String,
    /// `chrono` format string for the header date
    pub date_format: String,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            empty_sections: EmptySections::Omit,
            riser_header: "Price Risers! 📈".to_string(),
            faller_header: "Price Fallers! 📉".to_string(),
            riser_marker: "🟢".to_string(),
            faller_marker: "🔴".to_string(),
            unknown_group: "UNK".to_string(),
            no_movement: "No price changes today.".to_string(),
            date_format: "%d/%m/%Y".to_string(),
        }
    }
}

impl ReportStyle {
    /// Classic layout: both sections always present
    pub fn classic() -> Self {
        Self {
            empty_sections: EmptySections::ShowWithCount,
            ..Self::default()
        }
    }
}
