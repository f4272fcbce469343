use crate::render::svg::{Anchor, Color, LineStyle, SvgWriter};

const TICK_LEN: f64 = 4.0;
const TICK_FONT: f64 = 10.0;

/// Plot rectangle in pixels plus the data ranges it maps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickVisibility {
    pub x: bool,
    pub y: bool,
}

impl Default for TickVisibility {
    fn default() -> Self {
        Self { x: true, y: true }
    }
}

impl Frame {
    pub fn new(
        left: f64,
        top: f64,
        width: f64,
        height: f64,
        x_range: (f64, f64),
        y_range: (f64, f64),
    ) -> Self {
        Self {
            left,
            top,
            width,
            height,
            x_range: widen(x_range),
            y_range: widen(y_range),
        }
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn map_x(&self, v: f64) -> f64 {
        let (lo, hi) = self.x_range;
        self.left + (v - lo) / (hi - lo) * self.width
    }

    pub fn map_y(&self, v: f64) -> f64 {
        let (lo, hi) = self.y_range;
        self.bottom() - (v - lo) / (hi - lo) * self.height
    }

    /// Maps a data point, clipping `y` (including infinities) to the visible range.
    pub fn map_clipped(&self, x: f64, y: f64) -> (f64, f64) {
        let (lo, hi) = self.y_range;
        let y = if y.is_nan() { lo } else { y.clamp(lo, hi) };
        (self.map_x(x), self.map_y(y))
    }

    pub fn hline(&self, w: &mut SvgWriter, y: f64, color: Color, style: LineStyle) {
        let py = self.map_y(y);
        w.line(self.left, py, self.right(), py, color, style);
    }

    pub fn vline(&self, w: &mut SvgWriter, x: f64, color: Color, style: LineStyle) {
        let px = self.map_x(x);
        w.line(px, self.top, px, self.bottom(), color, style);
    }

    pub fn draw_axes(&self, w: &mut SvgWriter, ticks: TickVisibility) {
        w.rect_outline(self.left, self.top, self.width, self.height);

        if ticks.x {
            let (lo, hi) = self.x_range;
            let step_ticks = nice_ticks(lo, hi, 6);
            let decimals = tick_decimals(&step_ticks);
            for t in step_ticks {
                let px = self.map_x(t);
                w.line(px, self.bottom(), px, self.bottom() + TICK_LEN, Color::Grey, LineStyle::Solid);
                w.text(
                    px,
                    self.bottom() + TICK_LEN + TICK_FONT + 1.0,
                    TICK_FONT,
                    Anchor::Middle,
                    &format!("{t:.decimals$}"),
                );
            }
        }

        if ticks.y {
            let (lo, hi) = self.y_range;
            let step_ticks = nice_ticks(lo, hi, 5);
            let decimals = tick_decimals(&step_ticks);
            for t in step_ticks {
                let py = self.map_y(t);
                w.line(self.left - TICK_LEN, py, self.left, py, Color::Grey, LineStyle::Solid);
                w.text(
                    self.left - TICK_LEN - 2.0,
                    py + TICK_FONT / 3.0,
                    TICK_FONT,
                    Anchor::End,
                    &format!("{t:.decimals$}"),
                );
            }
        }
    }

    pub fn title(&self, w: &mut SvgWriter, title: &str, size: f64) {
        w.text(self.left + self.width / 2.0, self.top - 8.0, size, Anchor::Middle, title);
    }

    pub fn axis_labels(&self, w: &mut SvgWriter, x_label: &str, y_label: &str) {
        w.text(
            self.left + self.width / 2.0,
            self.bottom() + 38.0,
            12.0,
            Anchor::Middle,
            x_label,
        );
        w.vertical_text(self.left - 48.0, self.top + self.height / 2.0, 12.0, y_label);
    }
}

fn widen((lo, hi): (f64, f64)) -> (f64, f64) {
    if hi > lo { (lo, hi) } else { (lo - 0.5, lo + 0.5) }
}

/// Round-number tick positions covering `[lo, hi]`, about `target` of them.
pub fn nice_ticks(lo: f64, hi: f64, target: usize) -> Vec<f64> {
    if !(lo.is_finite() && hi.is_finite()) || hi <= lo || target == 0 {
        return Vec::new();
    }
    let raw = (hi - lo) / target as f64;
    let exp = raw.log10().floor() as i32;
    let nice = nice_multiplier(raw / 10f64.powi(exp));

    // k * nice * 10^exp, dividing for negative exponents keeps 0.6 as 0.6
    let tick = |k: f64| {
        if exp >= 0 {
            k * nice * 10f64.powi(exp)
        } else {
            k * nice / 10f64.powi(-exp)
        }
    };
    let step = tick(1.0);
    let first = (lo / step - 1e-9).ceil() as i64;
    let last = (hi / step + 1e-9).floor() as i64;
    (first..=last).map(|k| tick(k as f64)).collect()
}

fn nice_multiplier(residual: f64) -> f64 {
    if residual < 1.5 {
        1.0
    } else if residual < 3.0 {
        2.0
    } else if residual < 7.0 {
        5.0
    } else {
        10.0
    }
}

fn tick_decimals(ticks: &[f64]) -> usize {
    match ticks {
        [a, b, ..] => (-(b - a).log10().floor()).max(0.0) as usize,
        _ => 1,
    }
}
