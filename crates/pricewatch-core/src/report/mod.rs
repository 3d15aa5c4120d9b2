//! Report rendering for diff results.
//!
//! The renderers are pure: they turn a [`DiffResult`](crate::diff::DiffResult)
//! plus the group labels into text, HTML or JSON. Variant behaviour (label
//! text, whether empty sections are shown) is carried by [`ReportStyle`].

pub mod html;
pub mod style;
pub mod text;

pub use html::render_html;
pub use style::{EmptySections, ReportStyle};
pub use text::{render_json, render_text};
