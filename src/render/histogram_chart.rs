use crate::evaluation::Histogram;
use crate::render::frame::{Frame, TickVisibility};
use crate::render::svg::{Color, LineStyle, SvgWriter};
use crate::render::{Chart, RenderError};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

/// Outline ("step") histogram.
#[derive(Debug, Clone)]
pub struct HistogramChart {
    histogram: Histogram,
    x_label: String,
    y_label: String,
    reference: Option<f64>,
}

impl HistogramChart {
    pub fn new(histogram: Histogram) -> Self {
        Self {
            histogram,
            x_label: "Rate".into(),
            y_label: "Occurences".into(),
            reference: None,
        }
    }

    pub fn labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = x.into();
        self.y_label = y.into();
        self
    }

    /// Dotted red vertical line, e.g. at the true rate.
    pub fn reference_line(mut self, x: f64) -> Self {
        self.reference = Some(x);
        self
    }

    fn step_outline(&self, frame: &Frame) -> Vec<(f64, f64)> {
        let edges = self.histogram.edges();
        let counts = self.histogram.counts();
        let mut pts = Vec::with_capacity(counts.len() * 2 + 2);
        pts.push(frame.map_clipped(edges[0], 0.0));
        for (i, &c) in counts.iter().enumerate() {
            pts.push(frame.map_clipped(edges[i], c as f64));
            pts.push(frame.map_clipped(edges[i + 1], c as f64));
        }
        pts.push(frame.map_clipped(edges[edges.len() - 1], 0.0));
        pts
    }
}

impl Chart for HistogramChart {
    fn render(&self) -> Result<String, RenderError> {
        let edges = self.histogram.edges();
        let (Some(&lo), Some(&hi)) = (edges.first(), edges.last()) else {
            return Err(RenderError::Empty("histogram edges"));
        };
        let y_hi = (self.histogram.max_count() as f64 * 1.05).max(1.0);
        let frame = Frame::new(
            70.0,
            40.0,
            WIDTH as f64 - 100.0,
            HEIGHT as f64 - 100.0,
            (lo, hi),
            (0.0, y_hi),
        );

        let mut w = SvgWriter::new(WIDTH, HEIGHT);
        frame.draw_axes(&mut w, TickVisibility::default());
        frame.axis_labels(&mut w, &self.x_label, &self.y_label);
        w.polyline(&self.step_outline(&frame), Color::Default);

        if let Some(r) = self.reference {
            frame.vline(&mut w, r, Color::Red, LineStyle::Dotted);
        }
        Ok(w.finish())
    }
}
