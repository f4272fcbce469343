use std::fmt::{self, Write};

/// Stroke colours used across charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Default,
    Blue,
    Green,
    Red,
    Black,
    Grey,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Default => "#1f77b4",
            Color::Blue => "#0000ff",
            Color::Green => "#008000",
            Color::Red => "#ff0000",
            Color::Black => "#000000",
            Color::Grey => "#555555",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dotted,
}

impl LineStyle {
    fn dasharray(&self) -> &'static str {
        match self {
            LineStyle::Solid => "",
            LineStyle::Dotted => " stroke-dasharray=\"2,3\"",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Append-only SVG document.
pub struct SvgWriter {
    buf: String,
}

impl SvgWriter {
    pub fn new(width: u32, height: u32) -> Self {
        let mut w = Self { buf: String::new() };
        w.buf.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        w.emit(format_args!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
        ));
        w.buf.push_str("  <style>\n");
        w.buf.push_str("    text { font-family: sans-serif; fill: #222; }\n");
        w.buf.push_str("  </style>\n");
        w.buf.push_str("  <rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n");
        w
    }

    // Writing into a String cannot fail.
    fn emit(&mut self, args: fmt::Arguments<'_>) {
        let _ = self.buf.write_fmt(args);
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, style: LineStyle) {
        self.emit(format_args!(
            "  <line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{}\" stroke-width=\"1.2\"{}/>\n",
            color.as_str(),
            style.dasharray()
        ));
    }

    pub fn polyline(&mut self, points: &[(f64, f64)], color: Color) {
        if points.is_empty() {
            return;
        }
        let mut coords = String::with_capacity(points.len() * 16);
        for (i, (x, y)) in points.iter().enumerate() {
            if i > 0 {
                coords.push(' ');
            }
            let _ = write!(coords, "{x:.2},{y:.2}");
        }
        self.emit(format_args!(
            "  <polyline points=\"{coords}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1.5\"/>\n",
            color.as_str()
        ));
    }

    pub fn rect_outline(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.emit(format_args!(
            "  <rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{width:.2}\" height=\"{height:.2}\" fill=\"none\" stroke=\"#333\" stroke-width=\"1\"/>\n"
        ));
    }

    pub fn text(&mut self, x: f64, y: f64, size: f64, anchor: Anchor, content: &str) {
        self.emit(format_args!(
            "  <text x=\"{x:.2}\" y=\"{y:.2}\" font-size=\"{size}\" text-anchor=\"{}\">{}</text>\n",
            anchor.as_str(),
            escape(content)
        ));
    }

    /// Text rotated a quarter turn counter-clockwise around its anchor point.
    pub fn vertical_text(&mut self, x: f64, y: f64, size: f64, content: &str) {
        self.emit(format_args!(
            "  <text x=\"{x:.2}\" y=\"{y:.2}\" font-size=\"{size}\" text-anchor=\"middle\" transform=\"rotate(-90 {x:.2} {y:.2})\">{}</text>\n",
            escape(content)
        ));
    }

    pub fn finish(mut self) -> String {
        self.buf.push_str("</svg>\n");
        self.buf
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
