//! Chart panel renderer.
//!
//! Renders one PNG with a fixed 2x3 panel over the cleaned table: sales by
//! genre, top platforms, the yearly trend, top publishers, the sales
//! distribution and the regional split. Panels whose source columns are
//! missing stay blank apart from their caption. The image is fully written
//! and closed before the function returns.

use crate::analysis::explore;
use crate::config::ChartStyle;
use anyhow::{Context as _, Result};
use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontStyle};
use polars::prelude::DataFrame;
use std::path::Path;

const GENRE_BAR: RGBColor = RGBColor(135, 206, 235);
const PLATFORM_BAR: RGBColor = RGBColor(255, 127, 80);
const TREND_LINE: RGBColor = RGBColor(46, 139, 87);
const PUBLISHER_BAR: RGBColor = RGBColor(128, 0, 128);
const HIST_FILL: RGBColor = RGBColor(255, 165, 0);
const PIE_COLORS: [RGBColor; 4] = [
    RGBColor(255, 153, 153),
    RGBColor(102, 179, 255),
    RGBColor(153, 255, 153),
    RGBColor(255, 204, 153),
];

const HISTOGRAM_BINS: usize = 50;
const TOP_BARS: usize = 10;

type Panel<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

pub fn render_panel(df: &DataFrame, style: &ChartStyle, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE).context("failed to prepare chart canvas")?;
    let panels = root.split_evenly((2, 3));

    draw_genre_sales(&panels[0], df, style).context("genre sales panel")?;
    draw_platform_sales(&panels[1], df, style).context("platform sales panel")?;
    draw_yearly_sales(&panels[2], df, style).context("yearly sales panel")?;
    draw_publisher_sales(&panels[3], df, style).context("publisher sales panel")?;
    draw_sales_histogram(&panels[4], df, style).context("sales distribution panel")?;
    draw_regional_share(&panels[5], df, style).context("regional share panel")?;

    root.present().context("failed to write chart image")?;
    Ok(())
}

fn draw_genre_sales(area: &Panel<'_>, df: &DataFrame, style: &ChartStyle) -> Result<()> {
    let title = "Global sales by genre";
    match explore::sum_by(
        df,
        crate::analysis::columns::GENRE,
        crate::analysis::columns::GLOBAL_SALES,
    )? {
        Some(data) if !data.is_empty() => vertical_bars(
            area,
            title,
            "Genre",
            "Sales (millions)",
            &data,
            &GENRE_BAR,
            style,
        ),
        _ => blank_panel(area, title, style),
    }
}

fn draw_platform_sales(area: &Panel<'_>, df: &DataFrame, style: &ChartStyle) -> Result<()> {
    let title = "Top 10 platforms by sales";
    match explore::sum_by(
        df,
        crate::analysis::columns::PLATFORM,
        crate::analysis::columns::GLOBAL_SALES,
    )? {
        Some(mut data) if !data.is_empty() => {
            data.truncate(TOP_BARS);
            horizontal_bars(
                area,
                title,
                "Sales (millions)",
                "Platform",
                &data,
                &PLATFORM_BAR,
                style,
            )
        }
        _ => blank_panel(area, title, style),
    }
}

fn draw_publisher_sales(area: &Panel<'_>, df: &DataFrame, style: &ChartStyle) -> Result<()> {
    let title = "Top 10 publishers by sales";
    match explore::sum_by(
        df,
        crate::analysis::columns::PUBLISHER,
        crate::analysis::columns::GLOBAL_SALES,
    )? {
        Some(mut data) if !data.is_empty() => {
            data.truncate(TOP_BARS);
            vertical_bars(
                area,
                title,
                "Publisher",
                "Sales (millions)",
                &data,
                &PUBLISHER_BAR,
                style,
            )
        }
        _ => blank_panel(area, title, style),
    }
}

fn draw_yearly_sales(area: &Panel<'_>, df: &DataFrame, style: &ChartStyle) -> Result<()> {
    let title = "Global sales by year";
    let Some(series) = explore::sum_by_year(df)? else {
        return blank_panel(area, title, style);
    };
    if series.is_empty() {
        return blank_panel(area, title, style);
    }

    let min_year = series.first().map(|(y, _)| *y).unwrap_or(0);
    let max_year = series.last().map(|(y, _)| *y).unwrap_or(0);
    let max_sales = series.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max).max(1.0);

    let mut chart = ChartBuilder::on(area)
        .caption(title, caption_font(style))
        .margin(12)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(min_year..max_year + 1, 0f64..max_sales * 1.1)?;
    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("Sales (millions)")
        .label_style(("sans-serif", style.label_px as i32))
        .draw()?;

    chart.draw_series(AreaSeries::new(
        series.iter().map(|(y, v)| (*y, *v)),
        0.0,
        &TREND_LINE.mix(0.25),
    ))?;
    chart.draw_series(LineSeries::new(
        series.iter().map(|(y, v)| (*y, *v)),
        TREND_LINE.stroke_width(2),
    ))?;
    Ok(())
}

fn draw_sales_histogram(area: &Panel<'_>, df: &DataFrame, style: &ChartStyle) -> Result<()> {
    let title = "Distribution of global sales";
    let Some(values) = explore::sales_below_p95(df)? else {
        return blank_panel(area, title, style);
    };
    if values.is_empty() {
        return blank_panel(area, title, style);
    }

    let bins = bin_values(&values, HISTOGRAM_BINS);
    let max_count = bins.iter().map(|(_, _, c)| *c).max().unwrap_or(0).max(1);
    let lo = bins.first().map(|(x0, _, _)| *x0).unwrap_or(0.0);
    let hi = bins.last().map(|(_, x1, _)| *x1).unwrap_or(1.0);

    let mut chart = ChartBuilder::on(area)
        .caption(title, caption_font(style))
        .margin(12)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(lo..hi, 0u32..max_count + max_count / 10 + 1)?;
    chart
        .configure_mesh()
        .x_desc("Sales (millions)")
        .y_desc("Titles")
        .label_style(("sans-serif", style.label_px as i32))
        .draw()?;

    chart.draw_series(bins.iter().map(|(x0, x1, count)| {
        Rectangle::new([(*x0, 0u32), (*x1, *count)], HIST_FILL.filled())
    }))?;
    Ok(())
}

fn draw_regional_share(area: &Panel<'_>, df: &DataFrame, style: &ChartStyle) -> Result<()> {
    let title = "Regional sales share";
    let Some(regions) = explore::regional_totals(df)? else {
        return blank_panel(area, title, style);
    };
    let total: f64 = regions.iter().map(|(_, v)| v).sum();
    if total <= 0.0 {
        return blank_panel(area, title, style);
    }

    let inner = area.titled(title, caption_font(style))?;
    let (w, h) = inner.dim_in_pixel();
    let center = (w as i32 / 2, h as i32 / 2);
    let radius = f64::from(w.min(h)) * 0.35;
    let sizes: Vec<f64> = regions.iter().map(|(_, v)| *v).collect();
    let labels: Vec<String> = regions.iter().map(|(name, _)| name.clone()).collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &PIE_COLORS, &labels);
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", style.label_px as i32).into_font());
    pie.percentages(("sans-serif", style.label_px as i32).into_font().color(&BLACK));
    inner.draw(&pie)?;
    Ok(())
}

fn vertical_bars(
    area: &Panel<'_>,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    data: &[(String, f64)],
    color: &RGBColor,
    style: &ChartStyle,
) -> Result<()> {
    let max_v = data.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max).max(1.0);

    let mut chart = ChartBuilder::on(area)
        .caption(title, caption_font(style))
        .margin(12)
        .x_label_area_size(70)
        .y_label_area_size(70)
        .build_cartesian_2d((0u32..data.len() as u32).into_segmented(), 0f64..max_v * 1.1)?;

    let formatter = |seg: &SegmentValue<u32>| segment_label(seg, data);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .x_labels(data.len())
        .x_label_formatter(&formatter)
        .label_style(("sans-serif", style.label_px as i32))
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(color.filled())
            .margin(6)
            .data(data.iter().enumerate().map(|(i, (_, v))| (i as u32, *v))),
    )?;
    Ok(())
}

fn horizontal_bars(
    area: &Panel<'_>,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    data: &[(String, f64)],
    color: &RGBColor,
    style: &ChartStyle,
) -> Result<()> {
    let max_v = data.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max).max(1.0);

    let mut chart = ChartBuilder::on(area)
        .caption(title, caption_font(style))
        .margin(12)
        .x_label_area_size(50)
        .y_label_area_size(110)
        .build_cartesian_2d(0f64..max_v * 1.1, (0u32..data.len() as u32).into_segmented())?;

    let formatter = |seg: &SegmentValue<u32>| segment_label(seg, data);
    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .y_labels(data.len())
        .y_label_formatter(&formatter)
        .label_style(("sans-serif", style.label_px as i32))
        .draw()?;

    chart.draw_series(
        Histogram::horizontal(&chart)
            .style(color.filled())
            .margin(6)
            .data(data.iter().enumerate().map(|(i, (_, v))| (i as u32, *v))),
    )?;
    Ok(())
}

fn blank_panel(area: &Panel<'_>, title: &str, style: &ChartStyle) -> Result<()> {
    area.titled(title, caption_font(style))?;
    Ok(())
}

fn caption_font(style: &ChartStyle) -> FontDesc<'static> {
    ("sans-serif", style.caption_px as i32)
        .into_font()
        .style(FontStyle::Bold)
}

fn segment_label(seg: &SegmentValue<u32>, data: &[(String, f64)]) -> String {
    let idx = match seg {
        SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => *i as usize,
        SegmentValue::Last => return String::new(),
    };
    data.get(idx)
        .map(|(name, _)| shorten(name, 14))
        .unwrap_or_default()
}

fn shorten(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        name.to_string()
    } else {
        let cut: String = name.chars().take(max.saturating_sub(2)).collect();
        format!("{cut}..")
    }
}

/// Equal-width binning over the value range. Collapses to a single unit
/// bin when all values coincide.
fn bin_values(values: &[f64], bins: usize) -> Vec<(f64, f64, u32)> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if values.is_empty() || !(max > min) {
        return vec![(min, min + 1.0, values.len() as u32)];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0u32; bins];
    for v in values {
        let idx = (((v - min) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }
    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| (min + i as f64 * width, min + (i + 1) as f64 * width, count))
        .collect()
}
