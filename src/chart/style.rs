use plotters::style::RGBColor;

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStyle {
    pub name: String,
    pub color: RGBColor,
}

/// Fixed presentation settings for the timing chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub width_px: u32,
    pub height_px: u32,
    /// In category units; a group is two bars wide.
    pub bar_width: f64,
    pub label_rotation_deg: f64,
    pub part1: SeriesStyle,
    pub part2: SeriesStyle,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: "Execution Times for Parts 1 and 2".to_string(),
            x_label: "Days".to_string(),
            y_label: "Time (ms)".to_string(),
            width_px: 1000,
            height_px: 600,
            bar_width: 0.35,
            label_rotation_deg: 45.0,
            part1: SeriesStyle {
                name: "Part 1".to_string(),
                // skyblue
                color: RGBColor(0x87, 0xce, 0xeb),
            },
            part2: SeriesStyle {
                name: "Part 2".to_string(),
                // orange
                color: RGBColor(0xff, 0xa5, 0x00),
            },
        }
    }
}
