use crate::evaluation::{CurvePoint, LearningCurve};
use crate::render::frame::{Frame, TickVisibility};
use crate::render::svg::{Anchor, Color, LineStyle, SvgWriter};
use crate::render::{Chart, RenderError};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;
const CAP: f64 = 3.0;

#[derive(Debug, Clone)]
struct ErrorSeries {
    label: String,
    color: Color,
    points: Vec<CurvePoint>,
}

/// Learning curves drawn as lines with vertical `mean ± std` bars.
#[derive(Debug, Clone)]
pub struct ErrorBarChart {
    title: String,
    x_label: String,
    y_label: String,
    series: Vec<ErrorSeries>,
    reference: Option<f64>,
    legend: bool,
}

impl ErrorBarChart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            series: Vec::new(),
            reference: None,
            legend: false,
        }
    }

    pub fn labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = x.into();
        self.y_label = y.into();
        self
    }

    pub fn series(mut self, label: impl Into<String>, color: Color, curve: &LearningCurve) -> Self {
        self.series.push(ErrorSeries {
            label: label.into(),
            color,
            points: curve.points().to_vec(),
        });
        self
    }

    /// Dotted red horizontal line, e.g. at the true rate.
    pub fn reference_line(mut self, y: f64) -> Self {
        self.reference = Some(y);
        self
    }

    pub fn with_legend(mut self) -> Self {
        self.legend = true;
        self
    }

    fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let points = self.series.iter().flat_map(|s| s.points.iter());
        let mut x = (f64::INFINITY, f64::NEG_INFINITY);
        let mut y = (f64::INFINITY, f64::NEG_INFINITY);
        for p in points {
            x = (x.0.min(p.trials as f64), x.1.max(p.trials as f64));
            if p.mean.is_finite() && p.std_dev.is_finite() {
                y = (y.0.min(p.mean - p.std_dev), y.1.max(p.mean + p.std_dev));
            }
        }
        if let Some(r) = self.reference {
            y = (y.0.min(r), y.1.max(r));
        }
        if !x.0.is_finite() || !y.0.is_finite() {
            return None;
        }
        let x_pad = ((x.1 - x.0) * 0.05).max(1.0);
        let y_pad = ((y.1 - y.0) * 0.05).max(0.01);
        Some(((x.0 - x_pad, x.1 + x_pad), (y.0 - y_pad, y.1 + y_pad)))
    }

    fn draw_legend(&self, w: &mut SvgWriter, frame: &Frame) {
        let x = frame.right() - 110.0;
        let mut y = frame.top + 18.0;
        for s in &self.series {
            w.line(x, y - 4.0, x + 22.0, y - 4.0, s.color, LineStyle::Solid);
            w.text(x + 28.0, y, 11.0, Anchor::Start, &s.label);
            y += 16.0;
        }
    }
}

impl Chart for ErrorBarChart {
    fn render(&self) -> Result<String, RenderError> {
        let (x_range, y_range) = self.bounds().ok_or(RenderError::Empty("error bar series"))?;
        let frame = Frame::new(
            70.0,
            40.0,
            WIDTH as f64 - 100.0,
            HEIGHT as f64 - 100.0,
            x_range,
            y_range,
        );

        let mut w = SvgWriter::new(WIDTH, HEIGHT);
        frame.draw_axes(&mut w, TickVisibility::default());
        frame.title(&mut w, &self.title, 14.0);
        frame.axis_labels(&mut w, &self.x_label, &self.y_label);

        for s in &self.series {
            let line: Vec<(f64, f64)> = s
                .points
                .iter()
                .map(|p| (frame.map_x(p.trials as f64), frame.map_y(p.mean)))
                .collect();
            w.polyline(&line, s.color);

            for p in &s.points {
                let px = frame.map_x(p.trials as f64);
                let lo = frame.map_y(p.mean - p.std_dev);
                let hi = frame.map_y(p.mean + p.std_dev);
                w.line(px, lo, px, hi, s.color, LineStyle::Solid);
                w.line(px - CAP, lo, px + CAP, lo, s.color, LineStyle::Solid);
                w.line(px - CAP, hi, px + CAP, hi, s.color, LineStyle::Solid);
            }
        }

        if let Some(r) = self.reference {
            frame.hline(&mut w, r, Color::Red, LineStyle::Dotted);
        }
        if self.legend {
            self.draw_legend(&mut w, &frame);
        }
        Ok(w.finish())
    }
}
