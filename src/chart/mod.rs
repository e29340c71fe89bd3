//! Chart object: everything the renderer draws, computed up front.
//!
//! Positions are in category units on x (category `i` is centred on `i`) and
//! in milliseconds on y. Tick placement and pixel mapping are left to plotters.

pub mod style;

pub use style::ChartStyle;

use crate::model::TimingSeries;
use plotters::style::RGBColor;

/// Fraction of the value span added beyond the tallest (and lowest) bar.
const VALUE_MARGIN: f64 = 0.05;

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub label: String,
    pub center: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub center: f64,
    pub width: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub name: String,
    pub color: RGBColor,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub width_px: u32,
    pub height_px: u32,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub categories: Vec<Category>,
    /// Degrees, counter-clockwise; labels anchor at their right end.
    pub label_rotation_deg: f64,
    pub series: Vec<BarSeries>,
}

impl BarChart {
    pub fn bar_count(&self) -> usize {
        self.series.iter().map(|s| s.bars.len()).sum()
    }

    pub fn category_labels(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.label.as_str()).collect()
    }
}

/// Grouped bar chart: per day, Part 1 left of centre and Part 2 right of it,
/// each offset by half a bar width.
pub fn build_bar_chart(series: &TimingSeries, style: &ChartStyle) -> BarChart {
    let half = style.bar_width / 2.0;

    let categories: Vec<Category> = series
        .labels()
        .into_iter()
        .enumerate()
        .map(|(i, label)| Category {
            label,
            center: i as f64,
        })
        .collect();

    let bars = |values: &[f64], offset: f64| -> Vec<Bar> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| Bar {
                center: i as f64 + offset,
                width: style.bar_width,
                value,
            })
            .collect()
    };

    let bar_series = vec![
        BarSeries {
            name: style.part1.name.clone(),
            color: style.part1.color,
            bars: bars(&series.part1_ms, -half),
        },
        BarSeries {
            name: style.part2.name.clone(),
            color: style.part2.color,
            bars: bars(&series.part2_ms, half),
        },
    ];

    let (y_min, y_max) = value_range(series.part1_ms.iter().chain(&series.part2_ms).copied());

    BarChart {
        title: style.title.clone(),
        width_px: style.width_px,
        height_px: style.height_px,
        x_axis: Axis {
            label: style.x_label.clone(),
            min: -0.5,
            max: series.len().max(1) as f64 - 0.5,
        },
        y_axis: Axis {
            label: style.y_label.clone(),
            min: y_min,
            max: y_max,
        },
        categories,
        label_rotation_deg: style.label_rotation_deg,
        series: bar_series,
    }
}

/// Value axis extent: always includes 0, padded on whichever side has bars.
///
/// No bars, or only zero-height ones, give `0..1`.
fn value_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));

    let span = hi - lo;
    if span <= 0.0 {
        return (0.0, 1.0);
    }

    let pad = span * VALUE_MARGIN;
    let min = if lo < 0.0 { lo - pad } else { 0.0 };
    let max = if hi > 0.0 { hi + pad } else { 0.0 };
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::build_series;
    use crate::timing::parse_timing_str;
    use pretty_assertions::assert_eq;

    fn chart(json: &str) -> BarChart {
        let series = build_series(&parse_timing_str(json).unwrap()).unwrap();
        build_bar_chart(&series, &ChartStyle::default())
    }

    #[test]
    fn two_bars_per_day() {
        let c = chart(
            r#"[
                {"day":3,"times":{"1":[0,0.5],"2":[0,1.2]}},
                {"day":1,"times":{"1":[0,0.3],"2":[0,0.9]}},
                {"day":"x","times":{"1":[0,0.1],"2":[0,0.2]}}
            ]"#,
        );
        assert_eq!(c.bar_count(), 6);
        assert_eq!(c.category_labels(), vec!["Day 3", "Day 1", "Day x"]);
        assert_eq!(c.series[0].name, "Part 1");
        assert_eq!(c.series[1].name, "Part 2");
        assert_ne!(c.series[0].color, c.series[1].color);
    }

    #[test]
    fn bars_sit_either_side_of_centre() {
        let c = chart(
            r#"[
                {"day":1,"times":{"1":[0,0.5],"2":[0,1.2]}},
                {"day":2,"times":{"1":[0,0.3],"2":[0,0.9]}}
            ]"#,
        );
        let left = &c.series[0].bars;
        let right = &c.series[1].bars;
        assert_eq!(left[1], Bar { center: 1.0 - 0.175, width: 0.35, value: 300.0 });
        assert_eq!(right[1], Bar { center: 1.0 + 0.175, width: 0.35, value: 900.0 });

        for (l, r) in left.iter().zip(right) {
            // Adjacent, not overlapping.
            let gap = (r.center - r.width / 2.0) - (l.center + l.width / 2.0);
            assert!(gap.abs() < 1e-12, "gap {}", gap);
        }
    }

    #[test]
    fn y_axis_covers_tallest_bar() {
        let c = chart(r#"[{"day":1,"times":{"1":[0,0.5],"2":[0,1.2]}}]"#);
        assert_eq!(c.y_axis.min, 0.0);
        assert_eq!(c.y_axis.max, 1200.0 + 1200.0 * VALUE_MARGIN);
        assert_eq!(c.x_axis.label, "Days");
        assert_eq!(c.y_axis.label, "Time (ms)");
        assert_eq!(c.title, "Execution Times for Parts 1 and 2");
        assert_eq!(c.label_rotation_deg, 45.0);
    }

    #[test]
    fn negative_values_extend_axis_below_zero() {
        let c = chart(r#"[{"day":1,"times":{"1":[0,0.5],"2":[0,-0.1]}}]"#);
        // span 600 ms, 30 ms padding each side
        assert_eq!(c.y_axis.min, -130.0);
        assert_eq!(c.y_axis.max, 530.0);
    }

    #[test]
    fn empty_chart_has_no_bars() {
        let c = chart("[]");
        assert_eq!(c.bar_count(), 0);
        assert!(c.categories.is_empty());
        assert_eq!(c.series.len(), 2);
        assert_eq!((c.y_axis.min, c.y_axis.max), (0.0, 1.0));
        assert_eq!((c.x_axis.min, c.x_axis.max), (-0.5, 0.5));
    }
}
