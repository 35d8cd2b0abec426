//! Folder Outline
//!
//! Builds the silhouette of the open panel: a rounded rectangle with a
//! raised tab on the top-left, like a manila folder.

use std::fmt;

/// One drawing command of a closed outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    /// Clockwise circular arc ending at (x, y)
    ArcTo { radius: f64, x: f64, y: f64 },
    Close,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Segment::MoveTo(x, y) => write!(f, "M {} {}", x, y),
            Segment::LineTo(x, y) => write!(f, "L {} {}", x, y),
            Segment::ArcTo { radius, x, y } => write!(f, "A {r} {r} 0 0 1 {} {}", x, y, r = radius),
            Segment::Close => write!(f, "Z"),
        }
    }
}

/// Closed path made of line and arc segments
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outline {
    segments: Vec<Segment>,
}

impl Outline {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    fn push(&mut self, segment: Segment) -> &mut Self {
        self.segments.push(segment);
        self
    }

    /// SVG path data (`d` attribute)
    pub fn to_svg_path(&self) -> String {
        self.segments
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Dimensions of the folder shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FolderShape {
    pub width: f64,
    pub height: f64,
    pub tab_width: f64,
    pub tab_height: f64,
    pub radius: f64,
}

impl FolderShape {
    /// Trace the outline clockwise from the bottom of the left edge
    pub fn outline(&self) -> Outline {
        let Self { width: w, height: h, tab_width: tw, tab_height: th, radius: r } = *self;
        let mut outline = Outline::default();

        outline
            .push(Segment::MoveTo(0.0, h - r))
            .push(Segment::LineTo(0.0, r))
            .push(Segment::ArcTo { radius: r, x: r, y: 0.0 })
            .push(Segment::LineTo(tw - r, 0.0))
            .push(Segment::ArcTo { radius: r, x: tw, y: r })
            .push(Segment::LineTo(tw, th - r))
            .push(Segment::LineTo(tw, th))
            .push(Segment::LineTo(w - r, th))
            .push(Segment::ArcTo { radius: r, x: w, y: th + r })
            .push(Segment::LineTo(w, h - r))
            .push(Segment::ArcTo { radius: r, x: w - r, y: h })
            .push(Segment::LineTo(r, h))
            .push(Segment::ArcTo { radius: r, x: 0.0, y: h - r })
            .push(Segment::Close);

        outline
    }
}
