use crate::chart::BarChart;
use crate::render::svg::{render_svg_chart, xml_escape};

/// Render a self-contained HTML page with the chart inlined as SVG.
///
/// Important: we avoid `format!()` so the CSS braces need no escaping.
pub fn render_html_chart(chart: &BarChart) -> anyhow::Result<String> {
    let svg = render_svg_chart(chart)?;

    const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>__TITLE__</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; background: #fff; }
  .container { display: flex; justify-content: center; padding: 16px; }
  .container svg { max-width: 100%; height: auto; }
</style>
</head>
<body>
<div class="container">
__SVG__
</div>
</body>
</html>
"#;

    Ok(TEMPLATE
        .replace("__TITLE__", &xml_escape(&chart.title))
        .replace("__SVG__", &svg))
}
