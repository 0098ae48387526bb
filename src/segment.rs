//! Decompose SVG path data into absolute geometric segments.
//!
//! Relative commands, the horizontal / vertical shortcuts and the smooth
//! (mirrored control point) curve variants are all resolved here, so that
//! every `Segment` carries its full start, end and control coordinates.

use log::trace;
use lyon_geom::{
    point, vector, Angle, ArcFlags, CubicBezierSegment, LineSegment, Point,
    QuadraticBezierSegment, SvgArc,
};
use svgtypes::{PathParser, PathSegment};

use crate::Error;

/// One geometric primitive of a path, in absolute coordinates.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum Segment {
    /// A moveto. Nothing is drawn.
    Move(Point<f64>),
    Line(LineSegment<f64>),
    CubicCurve(CubicBezierSegment<f64>),
    QuadraticCurve(QuadraticBezierSegment<f64>),
    Arc(SvgArc<f64>),
    /// A closepath, drawn from the current point back to the subpath start.
    Close(LineSegment<f64>),
}

impl Segment {
    /// The point the pen rests on after this segment.
    pub fn end(&self) -> Point<f64> {
        match self {
            Segment::Move(to) => *to,
            Segment::Line(line) | Segment::Close(line) => line.to,
            Segment::CubicCurve(curve) => curve.to,
            Segment::QuadraticCurve(curve) => curve.to,
            Segment::Arc(arc) => arc.to,
        }
    }
}

/// Tracks where the pen is while walking through a path expression.
#[derive(Debug)]
struct Pen {
    /// The current point.
    current: Point<f64>,

    /// Start of the current subpath, where a closepath returns to.
    subpath_start: Point<f64>,

    /// The previously emitted segment, used to mirror control points.
    prev: Option<Segment>,
}

impl Pen {
    fn new() -> Self {
        Self {
            current: point(0.0, 0.0),
            subpath_start: point(0.0, 0.0),
            prev: None,
        }
    }

    /// Resolve a coordinate pair against the current point.
    fn resolve(&self, abs: bool, x: f64, y: f64) -> Point<f64> {
        if abs {
            point(x, y)
        } else {
            point(self.current.x + x, self.current.y + y)
        }
    }

    /// First control point of a smooth cubic curve: the previous cubic's
    /// second control point mirrored about the current point.
    fn mirrored_cubic_ctrl(&self) -> Point<f64> {
        match self.prev {
            Some(Segment::CubicCurve(prev)) => self.current + (self.current - prev.ctrl2),
            _ => self.current,
        }
    }

    /// Control point of a smooth quadratic curve.
    fn mirrored_quadratic_ctrl(&self) -> Point<f64> {
        match self.prev {
            Some(Segment::QuadraticCurve(prev)) => self.current + (self.current - prev.ctrl),
            _ => self.current,
        }
    }

    /// Move the pen to the end of `segment` and hand it back.
    fn advance(&mut self, segment: Segment) -> Segment {
        self.current = segment.end();
        if let Segment::Move(to) = segment {
            self.subpath_start = to;
        }
        self.prev = Some(segment);
        segment
    }

    fn line_to(&mut self, to: Point<f64>) -> Segment {
        self.advance(Segment::Line(LineSegment {
            from: self.current,
            to,
        }))
    }
}

fn parse_path_segment(segment: &PathSegment, pen: &mut Pen) -> Segment {
    match *segment {
        PathSegment::MoveTo { abs, x, y } => {
            trace!("parse_path_segment: MoveTo");
            let to = pen.resolve(abs, x, y);
            pen.advance(Segment::Move(to))
        }
        PathSegment::LineTo { abs, x, y } => {
            trace!("parse_path_segment: LineTo");
            let to = pen.resolve(abs, x, y);
            pen.line_to(to)
        }
        PathSegment::HorizontalLineTo { abs, x } => {
            trace!("parse_path_segment: HorizontalLineTo");
            let to = if abs {
                point(x, pen.current.y)
            } else {
                point(pen.current.x + x, pen.current.y)
            };
            pen.line_to(to)
        }
        PathSegment::VerticalLineTo { abs, y } => {
            trace!("parse_path_segment: VerticalLineTo");
            let to = if abs {
                point(pen.current.x, y)
            } else {
                point(pen.current.x, pen.current.y + y)
            };
            pen.line_to(to)
        }
        PathSegment::CurveTo {
            abs,
            x1,
            y1,
            x2,
            y2,
            x,
            y,
        } => {
            trace!("parse_path_segment: CurveTo");
            let curve = CubicBezierSegment {
                from: pen.current,
                ctrl1: pen.resolve(abs, x1, y1),
                ctrl2: pen.resolve(abs, x2, y2),
                to: pen.resolve(abs, x, y),
            };
            pen.advance(Segment::CubicCurve(curve))
        }
        PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => {
            trace!("parse_path_segment: SmoothCurveTo");
            let curve = CubicBezierSegment {
                from: pen.current,
                ctrl1: pen.mirrored_cubic_ctrl(),
                ctrl2: pen.resolve(abs, x2, y2),
                to: pen.resolve(abs, x, y),
            };
            pen.advance(Segment::CubicCurve(curve))
        }
        PathSegment::Quadratic { abs, x1, y1, x, y } => {
            trace!("parse_path_segment: Quadratic");
            let curve = QuadraticBezierSegment {
                from: pen.current,
                ctrl: pen.resolve(abs, x1, y1),
                to: pen.resolve(abs, x, y),
            };
            pen.advance(Segment::QuadraticCurve(curve))
        }
        PathSegment::SmoothQuadratic { abs, x, y } => {
            trace!("parse_path_segment: SmoothQuadratic");
            let curve = QuadraticBezierSegment {
                from: pen.current,
                ctrl: pen.mirrored_quadratic_ctrl(),
                to: pen.resolve(abs, x, y),
            };
            pen.advance(Segment::QuadraticCurve(curve))
        }
        PathSegment::EllipticalArc {
            abs,
            rx,
            ry,
            x_axis_rotation,
            large_arc,
            sweep,
            x,
            y,
        } => {
            trace!("parse_path_segment: EllipticalArc");
            let arc = SvgArc {
                from: pen.current,
                to: pen.resolve(abs, x, y),
                radii: vector(rx, ry),
                x_rotation: Angle::degrees(x_axis_rotation),
                flags: ArcFlags { large_arc, sweep },
            };
            pen.advance(Segment::Arc(arc))
        }
        PathSegment::ClosePath { .. } => {
            trace!("parse_path_segment: ClosePath");
            let close = LineSegment {
                from: pen.current,
                to: pen.subpath_start,
            };
            pen.advance(Segment::Close(close))
        }
    }
}

/// Parse a path expression (the `d` attribute) into absolute segments, in
/// drawing order.
pub fn parse_segments(expr: &str) -> Result<Vec<Segment>, Error> {
    trace!("parse_segments");
    let mut pen = Pen::new();
    let mut segments = Vec::new();
    for segment in PathParser::from(expr) {
        let segment = segment
            .map_err(|e| Error::PathParse(format!("Could not parse path segment: {}", e)))?;
        segments.push(parse_path_segment(&segment, &mut pen));
    }
    trace!("parse_segments: Return {} segments", segments.len());
    Ok(segments)
}
