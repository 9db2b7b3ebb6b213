//! Face extraction.
//!
//! Traverses the junction graph and enumerates its bounded faces, the
//! elementary rectangles of the figure. A face is the minimal rectangle
//! closing at a top-left junction: all four sides are unbroken chains of
//! primitive edges, and nothing intrudes into its interior. T-junctions on
//! a face's boundary are fine (three rectangles meeting at one point);
//! an edge *entering* the interior is what disqualifies a candidate.

use std::collections::HashSet;

use crate::error::MalformedFigure;
use crate::geometry::{Point, Rect};
use crate::graph::FigureGraph;

/// One elementary (non-subdivided) rectangle of the decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Face {
    /// Corner coordinates, borders included.
    pub bounds: Rect,
}

impl Face {
    pub fn top_left(&self) -> Point {
        Point::new(self.bounds.top, self.bounds.left)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.bounds.top, self.bounds.right)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.bounds.bottom, self.bounds.left)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.bounds.bottom, self.bounds.right)
    }
}

/// Primitive-edge key with endpoints in row-major order, for the coverage set.
type EdgeKey = (Point, Point);

/// Enumerate the elementary rectangles of the graph.
///
/// Faces come out in row-major order of their top-left corners, but the
/// order is an implementation detail; callers must not depend on it.
///
/// # Errors
///
/// [`MalformedFigure::UnclosedRegion`] if any primitive edge lies on no
/// face boundary, meaning the edge set does not partition the figure into
/// rectangles (dangling borders, non-rectangular regions). Either every
/// face is returned or the error is; no partial decompositions.
pub fn extract_faces(graph: &FigureGraph) -> Result<Vec<Face>, MalformedFigure> {
    let mut faces = Vec::new();
    let mut covered: HashSet<EdgeKey> = HashSet::new();

    for a in graph.junctions() {
        if graph.right_of(a).is_none() || graph.down_of(a).is_none() {
            continue;
        }
        if let Some(face) = close_minimal(graph, a) {
            mark_boundary(graph, &face, &mut covered);
            faces.push(face);
        }
    }

    for edge in graph.edges() {
        if !covered.contains(&(edge.a, edge.b)) {
            return Err(MalformedFigure::UnclosedRegion {
                row: edge.a.row,
                col: edge.a.col,
            });
        }
    }

    Ok(faces)
}

/// Find the minimal rectangle with `a` as its top-left corner, if one closes.
///
/// Candidate bottom rows walk the down chain from `a` and candidate right
/// columns walk the right chain, nearest first, so the first candidate
/// that closes cleanly is the elementary face.
fn close_minimal(graph: &FigureGraph, a: Point) -> Option<Face> {
    for bottom in chain_rows(graph, a) {
        for right in chain_cols(graph, a) {
            let rect = Rect::new(a.row, a.col, bottom, right);
            if closes(graph, &rect) && nothing_intrudes(graph, &rect) {
                return Some(Face { bounds: rect });
            }
        }
    }
    None
}

/// Rows of successive junctions on the down chain from `a`.
fn chain_rows(graph: &FigureGraph, a: Point) -> Vec<usize> {
    let mut rows = Vec::new();
    let mut at = a;
    while let Some(next) = graph.down_of(at) {
        rows.push(next.row);
        at = next;
    }
    rows
}

/// Columns of successive junctions on the right chain from `a`.
fn chain_cols(graph: &FigureGraph, a: Point) -> Vec<usize> {
    let mut cols = Vec::new();
    let mut at = a;
    while let Some(next) = graph.right_of(at) {
        cols.push(next.col);
        at = next;
    }
    cols
}

/// True if all four corners exist and all four sides are unbroken chains.
fn closes(graph: &FigureGraph, rect: &Rect) -> bool {
    let tl = Point::new(rect.top, rect.left);
    let tr = Point::new(rect.top, rect.right);
    let bl = Point::new(rect.bottom, rect.left);
    let br = Point::new(rect.bottom, rect.right);

    graph.is_junction(tr)
        && graph.is_junction(bl)
        && graph.is_junction(br)
        && h_chain_reaches(graph, tl, rect.right)
        && h_chain_reaches(graph, bl, rect.right)
        && v_chain_reaches(graph, tl, rect.bottom)
        && v_chain_reaches(graph, tr, rect.bottom)
}

/// Walk right links from `from`; true if the chain lands exactly on `col`.
fn h_chain_reaches(graph: &FigureGraph, from: Point, col: usize) -> bool {
    let mut at = from;
    while let Some(next) = graph.right_of(at) {
        if next.col == col {
            return true;
        }
        if next.col > col {
            return false;
        }
        at = next;
    }
    false
}

/// Walk down links from `from`; true if the chain lands exactly on `row`.
fn v_chain_reaches(graph: &FigureGraph, from: Point, row: usize) -> bool {
    let mut at = from;
    while let Some(next) = graph.down_of(at) {
        if next.row == row {
            return true;
        }
        if next.row > row {
            return false;
        }
        at = next;
    }
    false
}

/// True if no junction or edge intrudes into the rectangle's interior.
///
/// Rejects a junction strictly inside the open interior, and any junction
/// strictly between two corners on a side that sends an edge inward (a
/// top-side junction with a down edge, and so on). Either means the
/// candidate is subdivided further and not elementary.
fn nothing_intrudes(graph: &FigureGraph, rect: &Rect) -> bool {
    for j in graph.junctions() {
        let inside_rows = rect.top < j.row && j.row < rect.bottom;
        let inside_cols = rect.left < j.col && j.col < rect.right;

        if inside_rows && inside_cols {
            return false;
        }
        if j.row == rect.top && inside_cols && graph.down_of(j).is_some() {
            return false;
        }
        if j.row == rect.bottom && inside_cols && graph.up_of(j).is_some() {
            return false;
        }
        if j.col == rect.left && inside_rows && graph.right_of(j).is_some() {
            return false;
        }
        if j.col == rect.right && inside_rows && graph.left_of(j).is_some() {
            return false;
        }
    }
    true
}

/// Record every primitive edge on the face's boundary into `covered`.
fn mark_boundary(graph: &FigureGraph, face: &Face, covered: &mut HashSet<EdgeKey>) {
    let rect = &face.bounds;

    let mut at = face.top_left();
    while at.col < rect.right {
        let next = match graph.right_of(at) {
            Some(next) => next,
            None => break,
        };
        covered.insert((at, next));
        at = next;
    }

    let mut at = face.bottom_left();
    while at.col < rect.right {
        let next = match graph.right_of(at) {
            Some(next) => next,
            None => break,
        };
        covered.insert((at, next));
        at = next;
    }

    let mut at = face.top_left();
    while at.row < rect.bottom {
        let next = match graph.down_of(at) {
            Some(next) => next,
            None => break,
        };
        covered.insert((at, next));
        at = next;
    }

    let mut at = face.top_right();
    while at.row < rect.bottom {
        let next = match graph.down_of(at) {
            Some(next) => next,
            None => break,
        };
        covered.insert((at, next));
        at = next;
    }
}
