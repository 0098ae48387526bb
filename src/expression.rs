//! Translate ellipses and path segments into LaTeX expressions.
//!
//! All values are substituted as text, nothing is simplified or evaluated.

use log::trace;
use lyon_geom::{CubicBezierSegment, LineSegment};

use crate::document::Element;
use crate::segment::{parse_segments, Segment};
use crate::Error;

/// Render a coordinate the way it is substituted into expressions.
///
/// This is the shortest representation that round-trips, with a fractional
/// part kept on integral values (`1.0`, not `1`). Very large and very small
/// magnitudes use exponent form with a signed exponent of at least two
/// digits (`1e+16`, `2.5e-07`).
pub fn format_coordinate(value: f64) -> String {
    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

/// Substituted for ellipse attributes that are not present.
const MISSING_ATTRIBUTE: &str = "None";

/// Build the implicit equation of an ellipse element.
///
/// The `cx`, `cy`, `rx` and `ry` attributes are substituted verbatim. A
/// missing attribute leaves a `None` placeholder.
pub fn to_ellipse_expression(element: &Element) -> String {
    let cx = element.attribute("cx").unwrap_or(MISSING_ATTRIBUTE);
    let cy = element.attribute("cy").unwrap_or(MISSING_ATTRIBUTE);
    let rx = element.attribute("rx").unwrap_or(MISSING_ATTRIBUTE);
    let ry = element.attribute("ry").unwrap_or(MISSING_ATTRIBUTE);
    format!(
        "\\left(\\frac{{x-{}}}{{{}}}\\right)^{{2}}+\\left(\\frac{{y-{}}}{{{}}}\\right)^{{2}}=1",
        cx, rx, cy, ry
    )
}

/// Endpoint notation for a line. Zero-length lines yield `None`.
pub fn line_expression(line: &LineSegment<f64>) -> Option<String> {
    if line.from == line.to {
        return None;
    }
    Some(format!(
        "\\left([{},{}],[{},{}]\\right)",
        format_coordinate(line.from.x),
        format_coordinate(line.from.y),
        format_coordinate(line.to.x),
        format_coordinate(line.to.y),
    ))
}

/// Cubic Bernstein blend of one axis, as a polynomial in `t`.
fn bernstein(from: f64, ctrl1: f64, ctrl2: f64, to: f64) -> String {
    format!(
        "(1-t)^{{3}}({})+3t(1-t)^{{2}}({})+3t^{{2}}(1-t)({})+t^{{3}}({})",
        format_coordinate(from),
        format_coordinate(ctrl1),
        format_coordinate(ctrl2),
        format_coordinate(to),
    )
}

/// Parametric `(x(t),y(t))` expression of a cubic Bézier curve.
pub fn cubic_expression(curve: &CubicBezierSegment<f64>) -> String {
    let bx = bernstein(curve.from.x, curve.ctrl1.x, curve.ctrl2.x, curve.to.x);
    let by = bernstein(curve.from.y, curve.ctrl1.y, curve.ctrl2.y, curve.to.y);
    format!("({},{})", bx, by)
}

/// Expression for a single segment, if it is one we can express.
pub fn segment_expression(segment: &Segment) -> Option<String> {
    match segment {
        Segment::Line(line) => line_expression(line),
        Segment::CubicCurve(curve) => Some(cubic_expression(curve)),
        Segment::Move(_)
        | Segment::QuadraticCurve(_)
        | Segment::Arc(_)
        | Segment::Close(_) => None,
    }
}

/// Build the expressions for a path element, one per drawable segment.
///
/// A path without a `d` attribute yields no expressions.
pub fn to_path_expressions(element: &Element) -> Result<Vec<String>, Error> {
    let expr = match element.attribute("d") {
        Some(expr) => expr,
        None => return Ok(Vec::new()),
    };
    let expressions: Vec<String> = parse_segments(expr)?
        .iter()
        .filter_map(segment_expression)
        .collect();
    trace!("to_path_expressions: Return {} expressions", expressions.len());
    Ok(expressions)
}
