//! SVG geometry for the series and pie renderers.
//!
//! Everything is computed in a fixed view box; the frontend only turns the
//! resulting shapes into SVG elements and lets the browser scale them.

use std::f64::consts::PI;

use super::format::{abbreviate, truncate_label};
use super::payload::SeriesPoint;

pub const VIEW_WIDTH: f64 = 400.0;
pub const VIEW_HEIGHT: f64 = 200.0;

/// Plot area margins: top, right, bottom, left.
const MARGIN: (f64, f64, f64, f64) = (10.0, 10.0, 28.0, 44.0);
const TICKS: usize = 4;

/// Pie colours, cycled by slice index.
pub const PALETTE: [&str; 5] = [
    "var(--chart-1)",
    "var(--chart-2)",
    "var(--chart-3)",
    "var(--chart-4)",
    "var(--chart-5)",
];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub y: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub x: f64,
    pub text: String,
    pub full: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub value: f64,
}

/// Plot frame shared by bar, line and area charts.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesFrame {
    min: f64,
    max: f64,
    count: usize,
}

impl SeriesFrame {
    pub fn new(points: &[SeriesPoint]) -> Self {
        let min = points.iter().map(|p| p.value).fold(0.0_f64, f64::min);
        let mut max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
        if max <= min {
            max = min + 1.0;
        }
        Self {
            min,
            max,
            count: points.len(),
        }
    }

    fn plot_left(&self) -> f64 {
        MARGIN.3
    }

    fn plot_width(&self) -> f64 {
        VIEW_WIDTH - MARGIN.1 - MARGIN.3
    }

    fn plot_top(&self) -> f64 {
        MARGIN.0
    }

    fn plot_height(&self) -> f64 {
        VIEW_HEIGHT - MARGIN.0 - MARGIN.2
    }

    /// Y coordinate of the value axis origin.
    pub fn baseline(&self) -> f64 {
        self.y_of(0.0)
    }

    pub fn y_of(&self, value: f64) -> f64 {
        let ratio = (value - self.min) / (self.max - self.min);
        self.plot_top() + self.plot_height() * (1.0 - ratio)
    }

    /// Horizontal centre of the category band at `index`.
    pub fn x_of(&self, index: usize) -> f64 {
        let band = self.band_width();
        self.plot_left() + band * index as f64 + band / 2.0
    }

    fn band_width(&self) -> f64 {
        self.plot_width() / self.count.max(1) as f64
    }

    pub fn ticks(&self) -> Vec<Tick> {
        (0..=TICKS)
            .map(|i| {
                let value = self.min + (self.max - self.min) * i as f64 / TICKS as f64;
                Tick {
                    y: self.y_of(value),
                    label: abbreviate(round_tick(value)),
                }
            })
            .collect()
    }

    pub fn axis_labels(&self, points: &[SeriesPoint]) -> Vec<AxisLabel> {
        points
            .iter()
            .enumerate()
            .map(|(i, p)| AxisLabel {
                x: self.x_of(i),
                text: truncate_label(&p.label),
                full: p.label.clone(),
            })
            .collect()
    }

    pub fn axis_label_y(&self) -> f64 {
        VIEW_HEIGHT - MARGIN.2 / 2.0 + 4.0
    }

    pub fn left(&self) -> f64 {
        self.plot_left()
    }

    pub fn right(&self) -> f64 {
        self.plot_left() + self.plot_width()
    }

    pub fn bars(&self, points: &[SeriesPoint]) -> Vec<BarRect> {
        let band = self.band_width();
        let width = band * 0.7;
        let baseline = self.baseline();
        points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let top = self.y_of(p.value);
                BarRect {
                    x: self.x_of(i) - width / 2.0,
                    y: top.min(baseline),
                    width,
                    height: (baseline - top).abs(),
                    label: p.label.clone(),
                    value: p.value,
                }
            })
            .collect()
    }

    /// `d` attribute of the polyline through every point.
    pub fn line_path(&self, points: &[SeriesPoint]) -> String {
        points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let command = if i == 0 { 'M' } else { 'L' };
                format!("{}{:.2},{:.2}", command, self.x_of(i), self.y_of(p.value))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `d` attribute of the line closed down to the baseline.
    pub fn area_path(&self, points: &[SeriesPoint]) -> String {
        if points.is_empty() {
            return String::new();
        }
        let baseline = self.baseline();
        format!(
            "{} L{:.2},{:.2} L{:.2},{:.2} Z",
            self.line_path(points),
            self.x_of(points.len() - 1),
            baseline,
            self.x_of(0),
            baseline
        )
    }
}

fn round_tick(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Fraction of the total in `[0, 1]`.
    pub share: f64,
    pub color: &'static str,
    pub path: String,
    /// Anchor of the percentage caption.
    pub caption_at: (f64, f64),
}

pub const PIE_CENTER: (f64, f64) = (100.0, 100.0);
pub const PIE_RADIUS: f64 = 80.0;

/// Slices in data order, starting at twelve o'clock and running clockwise.
/// Non-positive values take no space.
pub fn pie_slices(points: &[SeriesPoint]) -> Vec<PieSlice> {
    let total: f64 = points.iter().map(|p| p.value.max(0.0)).sum();
    let (cx, cy) = PIE_CENTER;
    let mut start = -PI / 2.0;

    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let share = if total > 0.0 { p.value.max(0.0) / total } else { 0.0 };
            let sweep = share * 2.0 * PI;
            let end = start + sweep;
            let path = slice_path(cx, cy, PIE_RADIUS, start, end, share);
            let middle = start + sweep / 2.0;
            let caption_at = (
                cx + PIE_RADIUS * 1.15 * middle.cos(),
                cy + PIE_RADIUS * 1.15 * middle.sin(),
            );
            start = end;
            PieSlice {
                label: p.label.clone(),
                value: p.value,
                share,
                color: palette_color(i),
                path,
                caption_at,
            }
        })
        .collect()
}

fn slice_path(cx: f64, cy: f64, r: f64, start: f64, end: f64, share: f64) -> String {
    if share <= 0.0 {
        return String::new();
    }
    if share >= 1.0 {
        // A single arc cannot close on itself; draw two halves.
        return format!(
            "M{:.2},{:.2} A{r:.2},{r:.2} 0 1 1 {:.2},{:.2} A{r:.2},{r:.2} 0 1 1 {:.2},{:.2} Z",
            cx,
            cy - r,
            cx,
            cy + r,
            cx,
            cy - r,
        );
    }
    let large_arc = if end - start > PI { 1 } else { 0 };
    format!(
        "M{:.2},{:.2} L{:.2},{:.2} A{r:.2},{r:.2} 0 {} 1 {:.2},{:.2} Z",
        cx,
        cy,
        cx + r * start.cos(),
        cy + r * start.sin(),
        large_arc,
        cx + r * end.cos(),
        cy + r * end.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(values: &[(&str, f64)]) -> Vec<SeriesPoint> {
        values
            .iter()
            .map(|(l, v)| SeriesPoint {
                label: l.to_string(),
                value: *v,
            })
            .collect()
    }

    #[test]
    fn bars_grow_from_the_baseline() {
        let pts = points(&[("a", 10.0), ("b", 5.0)]);
        let frame = SeriesFrame::new(&pts);
        let bars = frame.bars(&pts);
        assert_eq!(bars.len(), 2);
        let baseline = frame.baseline();
        assert!((bars[0].y + bars[0].height - baseline).abs() < 1e-9);
        assert!((bars[0].height - 2.0 * bars[1].height).abs() < 1e-9);
        assert!(bars[0].x < bars[1].x);
    }

    #[test]
    fn ticks_span_zero_to_max() {
        let pts = points(&[("a", 2000.0)]);
        let ticks = SeriesFrame::new(&pts).ticks();
        assert_eq!(ticks.len(), 5);
        assert_eq!(ticks[0].label, "0");
        assert_eq!(ticks[4].label, "2.0K");
        assert!(ticks[0].y > ticks[4].y);
    }

    #[test]
    fn all_zero_series_still_has_a_scale() {
        let pts = points(&[("a", 0.0), ("b", 0.0)]);
        let frame = SeriesFrame::new(&pts);
        assert!(frame.y_of(0.0).is_finite());
        assert!(frame.bars(&pts).iter().all(|b| b.height == 0.0));
    }

    #[test]
    fn paths_visit_every_point() {
        let pts = points(&[("a", 1.0), ("b", 3.0), ("c", 2.0)]);
        let frame = SeriesFrame::new(&pts);
        let line = frame.line_path(&pts);
        assert!(line.starts_with('M'));
        assert_eq!(line.matches('L').count(), 2);
        let area = frame.area_path(&pts);
        assert!(area.ends_with('Z'));
        assert_eq!(frame.area_path(&[]), "");
    }

    #[test]
    fn axis_labels_are_truncated_but_keep_the_full_text() {
        let pts = points(&[("Una etiqueta muy larga", 1.0)]);
        let labels = SeriesFrame::new(&pts).axis_labels(&pts);
        assert_eq!(labels[0].text, "Una etiqueta...");
        assert_eq!(labels[0].full, "Una etiqueta muy larga");
    }

    #[test]
    fn pie_shares_and_palette_cycle() {
        let pts = points(&[("a", 1.0), ("b", 1.0), ("c", 2.0), ("d", 0.0), ("e", 0.0), ("f", 0.0)]);
        let slices = pie_slices(&pts);
        assert_eq!(slices[0].share, 0.25);
        assert_eq!(slices[2].share, 0.5);
        assert_eq!(slices[5].color, slices[0].color);
        assert_ne!(slices[1].color, slices[0].color);
        assert!(slices[3].path.is_empty());
        let total: f64 = slices.iter().map(|s| s.share).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn single_slice_draws_a_full_circle() {
        let slices = pie_slices(&points(&[("solo", 7.0)]));
        assert_eq!(slices[0].share, 1.0);
        assert_eq!(slices[0].path.matches('A').count(), 2);
    }
}
