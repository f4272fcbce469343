use crate::render::frame::{Frame, TickVisibility};
use crate::render::svg::{Color, LineStyle, SvgWriter};
use crate::render::{Chart, RenderError};

const PANEL_W: f64 = 180.0;
const PANEL_H: f64 = 130.0;
const MARGIN_L: f64 = 45.0;
const MARGIN_T: f64 = 30.0;
const GAP_X: f64 = 20.0;
const GAP_Y: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Marker {
    pub(crate) x: f64,
    pub(crate) color: Color,
    pub(crate) style: LineStyle,
}

/// One subplot: a density curve plus vertical markers.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityPanel {
    pub title: String,
    pub curve: Vec<(f64, f64)>,
    pub(crate) markers: Vec<Marker>,
}

impl DensityPanel {
    pub fn new(title: impl Into<String>, curve: Vec<(f64, f64)>) -> Self {
        Self {
            title: title.into(),
            curve,
            markers: Vec::new(),
        }
    }

    pub fn marker(mut self, x: f64, color: Color, style: LineStyle) -> Self {
        if x.is_finite() {
            self.markers.push(Marker { x, color, style });
        }
        self
    }
}

/// Square grid of density panels sharing x in `[0, 1]` and a fixed y limit.
#[derive(Debug, Clone)]
pub struct DensityGrid {
    panels: Vec<DensityPanel>,
    y_max: f64,
}

impl DensityGrid {
    pub fn new(y_max: f64) -> Self {
        Self {
            panels: Vec::new(),
            y_max,
        }
    }

    pub fn push(&mut self, panel: DensityPanel) {
        self.panels.push(panel);
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Side of the smallest square holding every panel.
    pub fn side(&self) -> usize {
        (self.panels.len() as f64).sqrt().ceil() as usize
    }

    /// Only the bottom panel of each column shows x ticks; only the first column shows y ticks.
    fn tick_visibility(&self, index: usize) -> TickVisibility {
        let cols = self.side();
        TickVisibility {
            x: index + cols >= self.panels.len(),
            y: index % cols == 0,
        }
    }
}

impl Chart for DensityGrid {
    fn render(&self) -> Result<String, RenderError> {
        if self.panels.is_empty() {
            return Err(RenderError::Empty("density panels"));
        }
        let cols = self.side();
        let rows = self.panels.len().div_ceil(cols);
        let width = MARGIN_L + cols as f64 * (PANEL_W + GAP_X);
        let height = MARGIN_T + rows as f64 * (PANEL_H + GAP_Y);

        let mut w = SvgWriter::new(width.ceil() as u32, height.ceil() as u32);
        for (i, panel) in self.panels.iter().enumerate() {
            let (row, col) = (i / cols, i % cols);
            let frame = Frame::new(
                MARGIN_L + col as f64 * (PANEL_W + GAP_X),
                MARGIN_T + row as f64 * (PANEL_H + GAP_Y),
                PANEL_W,
                PANEL_H,
                (0.0, 1.0),
                (0.0, self.y_max),
            );
            frame.draw_axes(&mut w, self.tick_visibility(i));
            frame.title(&mut w, &panel.title, 11.0);

            let line: Vec<(f64, f64)> = panel
                .curve
                .iter()
                .map(|&(x, y)| frame.map_clipped(x, y))
                .collect();
            w.polyline(&line, Color::Default);

            for m in &panel.markers {
                frame.vline(&mut w, m.x, m.color, m.style);
            }
        }
        Ok(w.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(n: usize) -> DensityGrid {
        let mut g = DensityGrid::new(13.0);
        for i in 0..n {
            g.push(DensityPanel::new(format!("N={i}"), vec![(0.0, 1.0), (1.0, 1.0)]));
        }
        g
    }

    #[test]
    fn side_is_ceil_sqrt() {
        assert_eq!(grid(16).side(), 4);
        assert_eq!(grid(5).side(), 3);
        assert_eq!(grid(1).side(), 1);
    }

    #[test]
    fn only_outer_panels_show_ticks() {
        let g = grid(16);
        assert!(!g.tick_visibility(0).x);
        assert!(g.tick_visibility(0).y);
        assert!(!g.tick_visibility(11).x);
        assert!(g.tick_visibility(12).x);
        assert!(g.tick_visibility(12).y);
        assert!(!g.tick_visibility(13).y);
    }

    #[test]
    fn partial_last_row_shows_ticks_above_gaps() {
        let g = grid(5);
        // 3x3 grid: panels 3 and 4 are on the second row, panel 2 has nothing below it
        assert!(g.tick_visibility(2).x);
        assert!(g.tick_visibility(4).x);
        assert!(!g.tick_visibility(1).x);
    }

    #[test]
    fn non_finite_markers_are_skipped() {
        let p = DensityPanel::new("N=0", vec![])
            .marker(f64::NAN, Color::Black, LineStyle::Dotted)
            .marker(0.5, Color::Black, LineStyle::Solid);
        assert_eq!(p.markers.len(), 1);
    }

    #[test]
    fn renders_every_panel_title() {
        let svg = grid(16).render().unwrap();
        assert!(svg.contains(">N=0</text>"));
        assert!(svg.contains(">N=15</text>"));
        assert_eq!(svg.matches("<polyline").count(), 16);
    }

    #[test]
    fn empty_grid_is_an_error() {
        assert!(DensityGrid::new(13.0).render().is_err());
    }
}
