//! Text / HTML / JSON report rendering.

mod common;

use chrono::NaiveDate;
use common::{named, teams};
use pricewatch_core::diff::diff;
use pricewatch_core::report::{render_html, render_json, render_text, ReportStyle};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 8, 17).unwrap()
}

#[test]
fn test_omit_mode_renders_only_nonempty_sections() {
    let previous = vec![named(1, 100, "Saka", 1), named(2, 125, "Salah", 12)];
    let current = vec![named(1, 101, "Saka", 1), named(2, 125, "Salah", 12)];
    let result = diff(&previous, &current);

    let text = render_text(&result, &teams(), date(), &ReportStyle::default());

    assert_eq!(text, "17/08/2024\n\nPrice Risers! 📈 (1)\n🟢 Saka #ARS £10.1m");
    assert!(!text.contains("Fallers"));
}

#[test]
fn test_omit_mode_quiet_day_renders_no_movement_line() {
    let snapshot = vec![named(1, 100, "Saka", 1)];
    let result = diff(&snapshot, &snapshot);

    let text = render_text(&result, &teams(), date(), &ReportStyle::default());

    assert_eq!(text, "17/08/2024\n\nNo price changes today.");
}

#[test]
fn test_omit_mode_both_sections_separated_by_blank_line() {
    let previous = vec![named(1, 100, "Saka", 1), named(3, 70, "Mount", 14)];
    let current = vec![named(3, 69, "Mount", 14), named(1, 101, "Saka", 1)];
    let result = diff(&previous, &current);

    let text = render_text(&result, &teams(), date(), &ReportStyle::default());
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines,
        vec![
            "17/08/2024",
            "",
            "Price Risers! 📈 (1)",
            "🟢 Saka #ARS £10.1m",
            "",
            "Price Fallers! 📉 (1)",
            "🔴 Mount #MUN £6.9m",
        ]
    );
}

#[test]
fn test_classic_mode_always_renders_both_headers() {
    let snapshot = vec![named(1, 100, "Saka", 1)];
    let result = diff(&snapshot, &snapshot);

    let text = render_text(&result, &teams(), date(), &ReportStyle::classic());

    assert_eq!(
        text,
        "17/08/2024\n\nPrice Risers! 📈 (0)\n\nPrice Fallers! 📉 (0)"
    );
}

#[test]
fn test_unresolvable_group_uses_placeholder() {
    let previous = vec![named(9, 45, "Nobody", 99)];
    let current = vec![named(9, 44, "Nobody", 99)];
    let result = diff(&previous, &current);

    let text = render_text(&result, &teams(), date(), &ReportStyle::default());

    assert!(text.contains("🔴 Nobody #UNK £4.4m"));
}

#[test]
fn test_custom_labels_and_date_format() {
    let previous = vec![named(1, 100, "Saka", 1)];
    let current = vec![named(1, 101, "Saka", 1)];
    let result = diff(&previous, &current);
    let style = ReportStyle {
        riser_header: "Up".to_string(),
        riser_marker: "+".to_string(),
        date_format: "%Y-%m-%d".to_string(),
        ..ReportStyle::default()
    };

    let text = render_text(&result, &teams(), date(), &style);

    assert_eq!(text, "2024-08-17\n\nUp (1)\n+ Saka #ARS £10.1m");
}

#[test]
fn test_html_wraps_text_report() {
    let previous = vec![named(1, 100, "Saka", 1)];
    let current = vec![named(1, 101, "Saka", 1)];
    let text = render_text(
        &diff(&previous, &current),
        &teams(),
        date(),
        &ReportStyle::default(),
    );

    let html = render_html(&text, "FPL price changes");

    assert!(html.contains("<title>FPL price changes</title>"));
    assert!(html.contains("17/08/2024<br>\n<br>\nPrice Risers! 📈 (1)<br>\n"));
    assert!(html.contains("&pound;10.1m"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_json_report_is_structured_diff() {
    let previous = vec![named(1, 100, "Saka", 1)];
    let current = vec![named(1, 98, "Saka", 1)];
    let result = diff(&previous, &current);

    let json = render_json(&result).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["fallers"][0]["delta"], -2);
    assert_eq!(value["fallers"][0]["entity"]["web_name"], "Saka");
    assert_eq!(value["risers"].as_array().unwrap().len(), 0);
}
