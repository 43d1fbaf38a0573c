//! Probability chart widget
//!
//! Draws one `ChartModel`:
//! - The sampled curve as a Braille line
//! - An optional dashed vertical marker at the selected time
//! - A legend with the curve and marker labels

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Widget},
};

use cosmic_core::panel::ChartModel;

use crate::theme;

/// Vertical resolution of the dashed marker line.
const MARKER_SEGMENTS: usize = 40;

/// Chart widget for a single probability panel.
pub struct ProbabilityChart<'a> {
    model: &'a ChartModel,
}

impl<'a> ProbabilityChart<'a> {
    pub fn new(model: &'a ChartModel) -> Self {
        Self { model }
    }

    /// X range covering the series and the marker.
    fn x_bounds(&self) -> [f64; 2] {
        let (mut lo, mut hi) = self.model.series.x_bounds().unwrap_or((0.0, 1.0));
        if let Some(marker) = &self.model.marker {
            lo = lo.min(marker.x);
            hi = hi.max(marker.x);
        }
        if hi <= lo {
            hi = lo + 1.0;
        }
        [lo, hi]
    }

    /// Y range from the data with 5% headroom; never collapses to a point.
    fn y_bounds(&self) -> [f64; 2] {
        let (lo, hi) = self.model.series.y_bounds().unwrap_or((0.0, 1.0));
        let lo = lo.min(0.0);
        let range = hi - lo;
        if range <= 0.0 {
            return [lo, lo + 1.0];
        }
        [lo, hi + range * 0.05]
    }
}

/// Axis tick text: scientific notation once values get large or tiny.
pub fn axis_label(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 {
        "0".to_string()
    } else if !(1e-2..1e4).contains(&magnitude) {
        format!("{value:.1e}")
    } else {
        format!("{value:.2}")
    }
}

fn labels(bounds: [f64; 2]) -> Vec<Span<'static>> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    [bounds[0], mid, bounds[1]]
        .into_iter()
        .map(|v| Span::styled(axis_label(v), theme::muted()))
        .collect()
}

impl Widget for ProbabilityChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let x_bounds = self.x_bounds();
        let y_bounds = self.y_bounds();

        let marker_points: Vec<(f64, f64)> = match &self.model.marker {
            Some(marker) => (0..=MARKER_SEGMENTS)
                .filter(|i| i % 2 == 0)
                .map(|i| {
                    let frac = i as f64 / MARKER_SEGMENTS as f64;
                    (marker.x, y_bounds[0] + frac * (y_bounds[1] - y_bounds[0]))
                })
                .collect(),
            None => Vec::new(),
        };

        let mut datasets = vec![Dataset::default()
            .name(self.model.series_label)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(theme::accent())
            .data(self.model.series.as_slice())];

        if let Some(marker) = &self.model.marker {
            datasets.push(
                Dataset::default()
                    .name(marker.label.as_str())
                    .marker(symbols::Marker::Dot)
                    .graph_type(GraphType::Scatter)
                    .style(theme::marker())
                    .data(&marker_points),
            );
        }

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title(format!(" {} ", self.model.title))
                    .title_style(theme::panel_title(true))
                    .borders(Borders::ALL)
                    .border_style(theme::muted())
                    .style(theme::base()),
            )
            .x_axis(
                Axis::default()
                    .title(Span::styled(self.model.x_label, theme::text()))
                    .style(theme::muted())
                    .bounds(x_bounds)
                    .labels(labels(x_bounds)),
            )
            .y_axis(
                Axis::default()
                    .title(Span::styled(self.model.y_label, theme::text()))
                    .style(theme::muted())
                    .bounds(y_bounds)
                    .labels(labels(y_bounds)),
            )
            .legend_position(Some(LegendPosition::TopRight))
            .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

        chart.render(area, buf);
    }
}
