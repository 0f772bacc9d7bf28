//! SVG rendering for bar and pie charts, drawn with `plotters`.

use std::f64::consts::{FRAC_PI_2, TAU};

use anyhow::{Context, Result};
use bs_core::{ChartArrays, PieSlice};
use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;
use plotters::series::Histogram;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::config::{BarChartConfig, ConfigError, PieChartConfig};

const FONT: &str = "sans-serif";
const DEFAULT_COLOR: RGBColor = RGBColor(0x4c, 0x72, 0xb0);

const BAR_CHART_WIDTH: u32 = 900;
const BAR_ROW_HEIGHT: u32 = 28;
const BAR_CHART_PADDING: u32 = 160;

const PIE_SIZE: u32 = 640;
const PIE_RADIUS: f64 = 220.0;
const PIE_ANNOTATION_RADIUS: f64 = 0.6;

/// Parses a `#rrggbb` color.
pub fn parse_color(value: &str) -> Result<RGBColor, ConfigError> {
    let invalid = || ConfigError::InvalidColor(value.to_string());
    let hex = value
        .strip_prefix('#')
        .filter(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
        .ok_or_else(invalid)?;
    let channel = |at: usize| u8::from_str_radix(&hex[at..at + 2], 16).map_err(|_| invalid());
    Ok(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}

/// Renders a horizontal bar chart.
///
/// Bars are laid out bottom-up from the reversed arrays, so with the usual
/// longest-first input the slowest unit ends up on top.
pub fn bar_chart(chart: &ChartArrays, style: &BarChartConfig) -> Result<String> {
    let color = parse_color(&style.color)?;
    let bars = chart.reversed();
    let rows = u32::try_from(bars.len()).context("too many units to chart")?;
    let height = rows
        .saturating_mul(BAR_ROW_HEIGHT)
        .saturating_add(BAR_CHART_PADDING);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (BAR_CHART_WIDTH, height)).into_drawing_area();
        draw_bars(&root, &bars, style, color)?;
        root.present()?;
    }
    Ok(svg)
}

fn draw_bars<DB>(
    root: &DrawingArea<DB, Shift>,
    bars: &ChartArrays,
    style: &BarChartConfig,
    color: RGBColor,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let labels = bars.labels();
    let max = bars.values().iter().copied().fold(0.0_f64, f64::max);

    let mut chart = ChartBuilder::on(root)
        .caption(&style.title, (FONT, 20))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(240)
        .build_cartesian_2d(0.0..max * 1.05, (0..bars.len()).into_segmented())?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(bars.len())
        .y_label_formatter(&|v| match v {
            SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
                labels.get(*i).cloned().unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        })
        .x_label_formatter(&|v| format!("{v:.1}"))
        .x_desc(style.x_label.as_str())
        .y_desc(style.y_label.as_str())
        .label_style((FONT, 12))
        .draw()?;

    chart.draw_series(
        Histogram::horizontal(&chart)
            .style(color.filled())
            .margin(4)
            .data(bars.values().iter().enumerate().map(|(i, &value)| (i, value))),
    )?;

    Ok(())
}

/// Renders a pie chart, starting at twelve o'clock and going clockwise.
///
/// Slices at or below the label threshold are drawn without label or
/// percentage.
pub fn pie_chart(chart: &ChartArrays, style: &PieChartConfig) -> Result<String> {
    let palette = if style.colors.is_empty() {
        vec![DEFAULT_COLOR]
    } else {
        style
            .colors
            .iter()
            .map(|color| parse_color(color))
            .collect::<Result<Vec<_>, _>>()?
    };
    let slices = chart.pie_slices();

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (PIE_SIZE, PIE_SIZE)).into_drawing_area();
        draw_pie(&root, &slices, &palette, &style.title)?;
        root.present()?;
    }
    Ok(svg)
}

#[allow(clippy::cast_possible_truncation)]
fn draw_pie<DB>(
    root: &DrawingArea<DB, Shift>,
    slices: &[PieSlice],
    palette: &[RGBColor],
    title: &str,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    let area = root.titled(title, (FONT, 20))?;

    let (width, height) = area.dim_in_pixel();
    let center = (i32::try_from(width / 2)?, i32::try_from(height / 2)?);

    let sizes: Vec<f64> = slices.iter().map(|s| s.value).collect();
    let colors: Vec<RGBColor> = palette.iter().copied().cycle().take(slices.len()).collect();
    let labels: Vec<&str> = slices.iter().map(|s| s.label.as_str()).collect();

    let mut pie = Pie::new(&center, &PIE_RADIUS, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.label_style((FONT, 14).into_font().color(&BLACK));
    area.draw(&pie)?;

    // Percentages sit on top of the wedges, along each bisector.
    let annotation_style = (FONT, 14)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    let distance = PIE_RADIUS * PIE_ANNOTATION_RADIUS;
    let mut start = -FRAC_PI_2;
    for slice in slices {
        let sweep = slice.percentage / 100.0 * TAU;
        if !slice.annotation.is_empty() {
            let middle = start + sweep / 2.0;
            let at = (
                center.0 + (distance * middle.cos()).round() as i32,
                center.1 + (distance * middle.sin()).round() as i32,
            );
            area.draw(&Text::new(slice.annotation.as_str(), at, annotation_style.clone()))?;
        }
        start += sweep;
    }

    Ok(())
}
