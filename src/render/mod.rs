//! Rendering of the chart object into a viewable document.

pub mod html;
pub mod svg;

pub use html::render_html_chart;
