use crate::chart::BarChart;
use plotters::prelude::*;

const FONT: &str = "sans-serif";
const TICK_FONT_PX: u32 = 13;
const DESC_FONT_PX: u32 = 15;
const TICK_LEN_PX: i32 = 5;
const LABEL_GAP_PX: i32 = 4;
const Y_LABEL_AREA_PX: u32 = 70;

/// Draw the chart as an SVG document with plotters.
///
/// plotters only rotates text by multiples of 90°, so the category labels are
/// laid out here from plotters' own pixel mapping and spliced into the output.
pub fn render_svg_chart(chart: &BarChart) -> anyhow::Result<String> {
    let mut svg = String::new();
    let mut labels: Vec<((i32, i32), &str)> = Vec::with_capacity(chart.categories.len());

    {
        let root = SVGBackend::with_string(&mut svg, (chart.width_px, chart.height_px))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let mut plot = ChartBuilder::on(&root)
            .caption(&chart.title, (FONT, 20))
            .margin(16)
            .set_label_area_size(LabelAreaPosition::Left, Y_LABEL_AREA_PX)
            .set_label_area_size(LabelAreaPosition::Bottom, bottom_label_area(chart))
            .build_cartesian_2d(
                chart.x_axis.min..chart.x_axis.max,
                chart.y_axis.min..chart.y_axis.max,
            )?;

        plot.configure_mesh()
            .disable_x_mesh()
            .x_labels(0)
            .x_desc(&chart.x_axis.label)
            .y_desc(&chart.y_axis.label)
            .label_style((FONT, TICK_FONT_PX))
            .axis_desc_style((FONT, DESC_FONT_PX))
            .draw()?;

        for series in &chart.series {
            let color = series.color;
            plot.draw_series(series.bars.iter().map(|bar| {
                let half = bar.width / 2.0;
                Rectangle::new(
                    [(bar.center - half, 0.0), (bar.center + half, bar.value)],
                    color.filled(),
                )
            }))?
            .label(series.name.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 18, y + 6)], color.filled()));
        }

        plot.configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK.mix(0.3))
            .label_font((FONT, TICK_FONT_PX))
            .draw()?;

        for category in &chart.categories {
            let (x, y) = plot.backend_coord(&(category.center, chart.y_axis.min));
            root.draw(&PathElement::new(vec![(x, y), (x, y + TICK_LEN_PX)], BLACK))?;
            labels.push(((x, y + TICK_LEN_PX + LABEL_GAP_PX), category.label.as_str()));
        }

        root.present()?;
    }

    Ok(splice_rotated_labels(svg, &labels, chart.label_rotation_deg))
}

/// Room under the plot for the rotated category labels plus the axis title.
fn bottom_label_area(chart: &BarChart) -> u32 {
    let longest = chart
        .categories
        .iter()
        .map(|c| c.label.chars().count())
        .max()
        .unwrap_or(0) as f64;
    let angle = chart.label_rotation_deg.to_radians();
    // Roughly 0.6 em per glyph for a sans-serif face.
    let run = longest * 0.6 * TICK_FONT_PX as f64;
    let drop = run * angle.sin() + TICK_FONT_PX as f64 * angle.cos();

    (TICK_LEN_PX + LABEL_GAP_PX) as u32 + drop.ceil() as u32 + 2 * DESC_FONT_PX + 8
}

/// Append one right-anchored, rotated `<text>` per label before `</svg>`.
fn splice_rotated_labels(mut svg: String, labels: &[((i32, i32), &str)], deg: f64) -> String {
    let mut texts = String::new();
    for &((x, y), label) in labels {
        texts.push_str(&format!(
            "<text x=\"{x}\" y=\"{y}\" font-family=\"{FONT}\" font-size=\"{TICK_FONT_PX}\" \
             text-anchor=\"end\" dominant-baseline=\"hanging\" \
             transform=\"rotate({r}, {x}, {y})\">{text}</text>\n",
            r = -deg,
            text = xml_escape(label),
        ));
    }

    let at = svg.rfind("</svg>").unwrap_or(svg.len());
    svg.insert_str(at, &texts);
    svg
}

pub(crate) fn xml_escape(s: &str) -> String {
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
