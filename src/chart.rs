use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::{Path, PathBuf};

// Font sizes
const TITLE_FONT_SIZE: u32 = 28;
const AXIS_LABEL_FONT_SIZE: u32 = 20;
const TICK_LABEL_FONT_SIZE: u32 = 16;
const LEGEND_FONT_SIZE: u32 = 16;
const DATA_LABEL_FONT_SIZE: u32 = 14;

// Layout tuning
const DEFAULT_MARGIN: u32 = 15;
const DEFAULT_X_LABEL_AREA_SIZE: u32 = 55;
const DEFAULT_Y_LABEL_AREA_SIZE: u32 = 70;

/// Fixed color per tree variant, shared by every chart so side-by-side
/// figures stay comparable
pub const BST_COLOR: RGBColor = RGBColor(211, 47, 47); // Red (BST)
pub const TREAP_COLOR: RGBColor = RGBColor(25, 118, 210); // Blue (Treap)

// Accent colors for rotation-count bars
pub const ORANGE: RGBColor = RGBColor(245, 124, 0);
pub const PURPLE: RGBColor = RGBColor(123, 31, 162);
pub const GREEN: RGBColor = RGBColor(56, 142, 60);

/// How a numeric value label is rendered next to its bar or point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// Plain integer, e.g. `42`
    Integer,
    /// Thousands-separated integer, e.g. `12,345`
    Thousands,
    /// Fixed one-decimal seconds, e.g. `2.1s`
    Seconds,
    /// Fixed one-decimal microseconds, e.g. `120.5μs`
    Micros,
    /// Fixed one decimal, no unit suffix
    Decimal,
}

impl ValueFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            ValueFormat::Integer => format!("{:.0}", value),
            ValueFormat::Thousands => thousands(value.round() as i64),
            ValueFormat::Seconds => format!("{:.1}s", value),
            ValueFormat::Micros => format!("{:.1}μs", value),
            ValueFormat::Decimal => format!("{:.1}", value),
        }
    }
}

/// Format an integer with `,` thousands separators
fn thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if n < 0 {
        out.insert(0, '-');
    }
    out
}

/// One named data series drawn in a single color
#[derive(Debug, Clone)]
pub struct Series {
    pub name: String,
    pub color: RGBColor,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, color: RGBColor, values: Vec<f64>) -> Self {
        Series {
            name: name.into(),
            color,
            values,
        }
    }
}

/// One labeled, individually colored bar
#[derive(Debug, Clone)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: RGBColor,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: f64, color: RGBColor) -> Self {
        Bar {
            label: label.into(),
            value,
            color,
        }
    }
}

/// What a panel plots
#[derive(Debug, Clone)]
pub enum PanelKind {
    /// Connected line-with-markers series over a shared numeric x axis
    Lines {
        x: Vec<f64>,
        series: Vec<Series>,
        annotate: Option<ValueFormat>,
    },
    /// Simple bar chart, one bar per category
    Bars {
        bars: Vec<Bar>,
        annotate: Option<ValueFormat>,
    },
    /// Grouped bar chart: one bar per series within each category
    GroupedBars {
        categories: Vec<String>,
        groups: Vec<Series>,
        annotate: Option<ValueFormat>,
    },
}

/// One panel of a figure
#[derive(Debug, Clone)]
pub struct Panel {
    pub title: String,
    pub x_desc: Option<String>,
    pub y_desc: String,
    pub kind: PanelKind,
}

/// Full description of one rendered figure: output name, pixel size, and
/// side-by-side panels
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub stem: &'static str,
    pub size: (u32, u32),
    pub panels: Vec<Panel>,
}

impl ChartSpec {
    /// Fixed output path for this chart under `output_dir`
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(format!("{}_performance.png", self.stem))
    }
}

/// Render a chart spec to its PNG under `output_dir`, creating the directory
/// if needed, and return the written path.
pub fn render(spec: &ChartSpec, output_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir).context("Failed to create output directory")?;
    let path = spec.output_path(output_dir);

    {
        let root = BitMapBackend::new(&path, spec.size).into_drawing_area();
        root.fill(&WHITE)?;

        let areas = root.split_evenly((1, spec.panels.len()));
        for (area, panel) in areas.iter().zip(&spec.panels) {
            draw_panel(area, panel)?;
        }

        root.present()
            .with_context(|| format!("Failed to write chart to {}", path.display()))?;
    }

    println!("Generated: {}", path.display());
    Ok(path)
}

fn draw_panel(area: &DrawingArea<BitMapBackend, Shift>, panel: &Panel) -> Result<()> {
    match &panel.kind {
        PanelKind::Lines {
            x,
            series,
            annotate,
        } => draw_lines(area, panel, x, series, *annotate),
        PanelKind::Bars { bars, annotate } => draw_bars(area, panel, bars, *annotate),
        PanelKind::GroupedBars {
            categories,
            groups,
            annotate,
        } => draw_grouped_bars(area, panel, categories, groups, *annotate),
    }
}

fn draw_lines(
    area: &DrawingArea<BitMapBackend, Shift>,
    panel: &Panel,
    x: &[f64],
    series: &[Series],
    annotate: Option<ValueFormat>,
) -> Result<()> {
    let x_min = x.iter().copied().fold(f64::MAX, f64::min);
    let x_min = if x.is_empty() { 0.0 } else { x_min };
    let x_max = x.iter().copied().fold(0.0_f64, f64::max).max(x_min + 1.0);
    let pad = ((x_max - x_min) * 0.05).max(1.0);

    let y_max = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0_f64, f64::max)
        * 1.2;

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", TITLE_FONT_SIZE))
        .margin(DEFAULT_MARGIN)
        .x_label_area_size(DEFAULT_X_LABEL_AREA_SIZE)
        .y_label_area_size(DEFAULT_Y_LABEL_AREA_SIZE)
        .build_cartesian_2d((x_min - pad)..(x_max + pad), 0.0..y_max.max(1.0))?;

    let x_desc = panel.x_desc.clone().unwrap_or_default();
    chart
        .configure_mesh()
        .x_label_formatter(&|v| format!("{:.0}", v))
        .x_desc(x_desc)
        .y_desc(panel.y_desc.as_str())
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()?;

    for s in series {
        let color = s.color;
        let points: Vec<(f64, f64)> = x.iter().copied().zip(s.values.iter().copied()).collect();

        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))?
            .label(s.name.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

        chart.draw_series(PointSeries::of_element(
            points.clone(),
            4,
            color.filled(),
            &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
        ))?;

        if let Some(fmt) = annotate {
            for (px, py) in &points {
                chart.draw_series(std::iter::once(Text::new(
                    fmt.format(*py),
                    (*px, *py + y_max * 0.03),
                    ("sans-serif", DATA_LABEL_FONT_SIZE)
                        .into_font()
                        .color(&color)
                        .pos(Pos::new(HPos::Center, VPos::Bottom)),
                )))?;
            }
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", LEGEND_FONT_SIZE))
        .draw()?;

    Ok(())
}

fn draw_bars(
    area: &DrawingArea<BitMapBackend, Shift>,
    panel: &Panel,
    bars: &[Bar],
    annotate: Option<ValueFormat>,
) -> Result<()> {
    let num_bars = bars.len();
    let y_max = bars.iter().map(|b| b.value).fold(0.0_f64, f64::max) * 1.25;

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", TITLE_FONT_SIZE))
        .margin(DEFAULT_MARGIN)
        .x_label_area_size(DEFAULT_X_LABEL_AREA_SIZE)
        .y_label_area_size(DEFAULT_Y_LABEL_AREA_SIZE)
        .build_cartesian_2d(-0.5..(num_bars as f64 - 0.5), 0.0..y_max.max(1.0))?;

    let x_desc = panel.x_desc.clone().unwrap_or_default();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(num_bars)
        .x_label_formatter(&|x| {
            let idx = x.round() as usize;
            if idx < num_bars && (x - idx as f64).abs() < 0.3 {
                bars[idx].label.clone()
            } else {
                String::new()
            }
        })
        .x_desc(x_desc)
        .y_desc(panel.y_desc.as_str())
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()?;

    let bar_width = 0.6;

    for (idx, bar) in bars.iter().enumerate() {
        let x_center = idx as f64;
        let x_left = x_center - bar_width / 2.0;
        let x_right = x_center + bar_width / 2.0;

        chart.draw_series(std::iter::once(Rectangle::new(
            [(x_left, 0.0), (x_right, bar.value)],
            bar.color.filled(),
        )))?;

        if let Some(fmt) = annotate {
            chart.draw_series(std::iter::once(Text::new(
                fmt.format(bar.value),
                (x_center, bar.value + y_max * 0.02),
                ("sans-serif", DATA_LABEL_FONT_SIZE)
                    .into_font()
                    .color(&BLACK)
                    .pos(Pos::new(HPos::Center, VPos::Bottom)),
            )))?;
        }
    }

    Ok(())
}

fn draw_grouped_bars(
    area: &DrawingArea<BitMapBackend, Shift>,
    panel: &Panel,
    categories: &[String],
    groups: &[Series],
    annotate: Option<ValueFormat>,
) -> Result<()> {
    let num_categories = categories.len();
    let num_groups = groups.len();

    let y_max = groups
        .iter()
        .flat_map(|g| g.values.iter().copied())
        .fold(0.0_f64, f64::max)
        * 1.25;

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", TITLE_FONT_SIZE))
        .margin(DEFAULT_MARGIN)
        .x_label_area_size(DEFAULT_X_LABEL_AREA_SIZE)
        .y_label_area_size(DEFAULT_Y_LABEL_AREA_SIZE)
        .build_cartesian_2d(-0.5..(num_categories as f64 - 0.5), 0.0..y_max.max(1.0))?;

    let x_desc = panel.x_desc.clone().unwrap_or_default();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(num_categories)
        .x_label_formatter(&|x| {
            let idx = x.round() as usize;
            if idx < num_categories && (x - idx as f64).abs() < 0.3 {
                categories[idx].clone()
            } else {
                String::new()
            }
        })
        .x_desc(x_desc)
        .y_desc(panel.y_desc.as_str())
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()?;

    let group_width = 0.7;
    let bar_width = group_width / num_groups as f64;

    for (group_idx, group) in groups.iter().enumerate() {
        let color = group.color;

        for (cat_idx, &value) in group.values.iter().enumerate() {
            let x_center = cat_idx as f64;
            let x_offset = (group_idx as f64 - (num_groups as f64 - 1.0) / 2.0) * bar_width;
            let x_left = x_center + x_offset - bar_width / 2.0 + 0.02;
            let x_right = x_center + x_offset + bar_width / 2.0 - 0.02;
            let x_mid = (x_left + x_right) / 2.0;

            chart.draw_series(std::iter::once(Rectangle::new(
                [(x_left, 0.0), (x_right, value)],
                color.filled(),
            )))?;

            if let Some(fmt) = annotate {
                chart.draw_series(std::iter::once(Text::new(
                    fmt.format(value),
                    (x_mid, value + y_max * 0.02),
                    ("sans-serif", DATA_LABEL_FONT_SIZE)
                        .into_font()
                        .color(&BLACK)
                        .pos(Pos::new(HPos::Center, VPos::Bottom)),
                )))?;
            }
        }

        // Zero-size marker so the legend entry gets registered
        chart
            .draw_series(std::iter::once(Circle::new(
                (num_categories as f64 - 1.0, y_max),
                0,
                color.filled(),
            )))?
            .label(group.name.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", LEGEND_FONT_SIZE))
        .draw()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_format() {
        assert_eq!(ValueFormat::Integer.format(42.0), "42");
        assert_eq!(ValueFormat::Integer.format(41.7), "42");
    }

    #[test]
    fn test_thousands_format() {
        assert_eq!(ValueFormat::Thousands.format(0.0), "0");
        assert_eq!(ValueFormat::Thousands.format(999.0), "999");
        assert_eq!(ValueFormat::Thousands.format(1000.0), "1,000");
        assert_eq!(ValueFormat::Thousands.format(1234567.0), "1,234,567");
    }

    #[test]
    fn test_unit_suffix_formats() {
        assert_eq!(ValueFormat::Seconds.format(2.1), "2.1s");
        assert_eq!(ValueFormat::Micros.format(120.53), "120.5μs");
        assert_eq!(ValueFormat::Decimal.format(95.27), "95.3");
    }

    #[test]
    fn test_output_path_is_fixed_per_stem() {
        let spec = ChartSpec {
            stem: "search",
            size: (1000, 600),
            panels: Vec::new(),
        };
        assert_eq!(
            spec.output_path(Path::new("graphs")),
            PathBuf::from("graphs/search_performance.png")
        );
    }
}
