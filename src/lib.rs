//! Convert SVG shapes into implicit / parametric LaTeX expressions that can be
//! pasted into a graphing calculator such as Desmos.
//!
//! Two kinds of elements are translated:
//!
//! - `<ellipse>` becomes the implicit equation
//!   `((x-cx)/rx)^2 + ((y-cy)/ry)^2 = 1`.
//! - `<path>` becomes one expression per drawn segment: straight lines as a
//!   pair of endpoints, cubic Bézier curves as a parametric curve in `t`.
//!
//! Everything else (arcs, quadratic curves, other element kinds, styling and
//! transforms) is ignored. Elements are matched by tag name suffix, so
//! namespace prefixed tags like `svg:path` work too.
//!
//! You can optionally get serde 1 support for the document tree by enabling
//! the `serde` feature.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

use std::io::Write;

use log::{debug, trace};

pub mod document;
mod error;
pub mod expression;
pub mod segment;

pub use crate::document::{parse_document, parse_file, Element};
pub use crate::error::Error;
pub use crate::expression::{to_ellipse_expression, to_path_expressions};

/// How an element is treated during traversal.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum ElementKind {
    Ellipse,
    Path,
    /// Not translated, but its children are still visited.
    Other,
}

/// Classify a tag name.
pub fn classify(name: &str) -> ElementKind {
    if name.ends_with("ellipse") {
        ElementKind::Ellipse
    } else if name.ends_with("path") {
        ElementKind::Path
    } else {
        ElementKind::Other
    }
}

/// Walk the tree below `element` in pre-order and pass every expression to
/// `emit`, in document order.
///
/// Expressions are handed out as soon as they are built, so whatever was
/// emitted before a path parse error stays emitted.
pub fn visit_expressions<F>(element: &Element, emit: &mut F) -> Result<(), Error>
where
    F: FnMut(String) -> Result<(), Error>,
{
    match classify(&element.name) {
        ElementKind::Ellipse => {
            trace!("visit_expressions: Ellipse");
            emit(to_ellipse_expression(element))?;
        }
        ElementKind::Path => {
            trace!("visit_expressions: Path");
            for expression in to_path_expressions(element)? {
                emit(expression)?;
            }
        }
        ElementKind::Other => {}
    }
    for child in &element.children {
        visit_expressions(child, emit)?;
    }
    Ok(())
}

/// Write the expressions for the tree below `element`, one per line.
pub fn write_expressions<W: Write>(element: &Element, out: &mut W) -> Result<(), Error> {
    let mut count = 0_usize;
    visit_expressions(element, &mut |expression: String| -> Result<(), Error> {
        writeln!(out, "{}", expression)?;
        count += 1;
        Ok(())
    })?;
    debug!("write_expressions: Wrote {} expressions", count);
    Ok(())
}

/// Collect the expressions for the tree below `element`.
pub fn expressions(element: &Element) -> Result<Vec<String>, Error> {
    let mut expressions = Vec::new();
    visit_expressions(element, &mut |expression: String| -> Result<(), Error> {
        expressions.push(expression);
        Ok(())
    })?;
    Ok(expressions)
}

/// Parse an SVG string into a list of expressions.
pub fn parse(svg: &str) -> Result<Vec<String>, Error> {
    trace!("parse");
    let root = parse_document(svg)?;
    let found = expressions(&root)?;
    trace!("parse: Found {} expressions", found.len());
    Ok(found)
}
