//! Junction graph construction.
//!
//! Scans the grid for `+` junctions and walks the `-`/`|` runs between
//! them, producing the planar graph the face extractor traverses. Each
//! edge is *primitive*: it connects two junctions with no junction in
//! between, so a long border shows up as a chain of primitive edges.

use std::collections::BTreeMap;

use crate::error::MalformedFigure;
use crate::geometry::{Orientation, Point};
use crate::grid::Grid;

/// A primitive border segment between two adjacent junctions.
///
/// `a` is always the top (vertical) or left (horizontal) endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub a: Point,
    pub b: Point,
    pub orientation: Orientation,
}

/// Neighbor links of a junction, one per direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Links {
    right: Option<Point>,
    down: Option<Point>,
    left: Option<Point>,
    up: Option<Point>,
}

/// The planar graph of a figure: junctions plus primitive edges.
///
/// Read-only once built. Junctions iterate in row-major order.
#[derive(Debug, Clone)]
pub struct FigureGraph {
    links: BTreeMap<Point, Links>,
    edges: Vec<Edge>,
}

impl FigureGraph {
    /// Scan the grid and build the junction graph.
    ///
    /// From each `+`, a rightward run of `-` ending in another `+` emits a
    /// horizontal edge, and a downward run of `|` ending in another `+`
    /// emits a vertical edge. Adjacent junctions (`++`) connect directly.
    ///
    /// # Errors
    ///
    /// [`MalformedFigure::DanglingEdge`] if a run leaves a junction but is
    /// interrupted before reaching another junction, and
    /// [`MalformedFigure::IsolatedJunction`] if any junction ends up
    /// without both a horizontal and a vertical edge.
    pub fn build(grid: &Grid) -> Result<Self, MalformedFigure> {
        let mut links: BTreeMap<Point, Links> = BTreeMap::new();
        for row in 0..grid.height() {
            for col in 0..grid.width() {
                if grid.get(row, col) == Some('+') {
                    links.insert(Point::new(row, col), Links::default());
                }
            }
        }

        let junctions: Vec<Point> = links.keys().copied().collect();
        let mut edges = Vec::new();

        for &p in &junctions {
            if let Some(q) = walk(grid, p, Orientation::Horizontal)? {
                if let Some(l) = links.get_mut(&p) {
                    l.right = Some(q);
                }
                if let Some(l) = links.get_mut(&q) {
                    l.left = Some(p);
                }
                edges.push(Edge {
                    a: p,
                    b: q,
                    orientation: Orientation::Horizontal,
                });
            }
            if let Some(q) = walk(grid, p, Orientation::Vertical)? {
                if let Some(l) = links.get_mut(&p) {
                    l.down = Some(q);
                }
                if let Some(l) = links.get_mut(&q) {
                    l.up = Some(p);
                }
                edges.push(Edge {
                    a: p,
                    b: q,
                    orientation: Orientation::Vertical,
                });
            }
        }

        for (&p, l) in &links {
            let has_horizontal = l.right.is_some() || l.left.is_some();
            let has_vertical = l.down.is_some() || l.up.is_some();
            if !has_horizontal || !has_vertical {
                return Err(MalformedFigure::IsolatedJunction {
                    row: p.row,
                    col: p.col,
                });
            }
        }

        Ok(Self { links, edges })
    }

    /// All junctions in row-major order.
    pub fn junctions(&self) -> impl Iterator<Item = Point> + '_ {
        self.links.keys().copied()
    }

    /// All primitive edges, in discovery order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// True if `p` is a junction of this figure.
    pub fn is_junction(&self, p: Point) -> bool {
        self.links.contains_key(&p)
    }

    /// The junction directly connected to the right of `p`, if any.
    pub fn right_of(&self, p: Point) -> Option<Point> {
        self.links.get(&p).and_then(|l| l.right)
    }

    /// The junction directly connected below `p`, if any.
    pub fn down_of(&self, p: Point) -> Option<Point> {
        self.links.get(&p).and_then(|l| l.down)
    }

    /// The junction directly connected to the left of `p`, if any.
    pub fn left_of(&self, p: Point) -> Option<Point> {
        self.links.get(&p).and_then(|l| l.left)
    }

    /// The junction directly connected above `p`, if any.
    pub fn up_of(&self, p: Point) -> Option<Point> {
        self.links.get(&p).and_then(|l| l.up)
    }
}

/// Walk right (through `-`) or down (through `|`) from a junction.
///
/// Returns the next junction if the run reaches one, `None` if there is no
/// run in that direction, and an error for a run that starts but is
/// interrupted by the wrong character or the grid boundary.
fn walk(
    grid: &Grid,
    from: Point,
    orientation: Orientation,
) -> Result<Option<Point>, MalformedFigure> {
    let (body, step): (char, fn(Point, usize) -> Point) = match orientation {
        Orientation::Horizontal => ('-', |p, i| Point::new(p.row, p.col + i)),
        Orientation::Vertical => ('|', |p, i| Point::new(p.row + i, p.col)),
    };

    let mut i = 1;
    loop {
        let at = step(from, i);
        match grid.get(at.row, at.col) {
            Some('+') => return Ok(Some(at)),
            Some(c) if c == body => i += 1,
            _ => {
                if i > 1 {
                    return Err(MalformedFigure::DanglingEdge {
                        row: from.row,
                        col: from.col,
                    });
                }
                return Ok(None);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(text: &str) -> FigureGraph {
        FigureGraph::build(&Grid::parse(text).unwrap()).unwrap()
    }

    #[test]
    fn single_rectangle_has_four_junctions_and_four_edges() {
        let g = graph("+--+\n|  |\n+--+");
        assert_eq!(g.junctions().count(), 4);
        assert_eq!(g.edges().len(), 4);

        let horizontal = g
            .edges()
            .iter()
            .filter(|e| e.orientation == Orientation::Horizontal)
            .count();
        assert_eq!(horizontal, 2);
    }

    #[test]
    fn junctions_are_row_major() {
        let g = graph("+--+\n|  |\n+--+");
        let points: Vec<Point> = g.junctions().collect();
        assert_eq!(
            points,
            vec![
                Point::new(0, 0),
                Point::new(0, 3),
                Point::new(2, 0),
                Point::new(2, 3),
            ]
        );
    }

    #[test]
    fn links_are_symmetric() {
        let g = graph("+--+\n|  |\n+--+");
        let tl = Point::new(0, 0);
        let tr = Point::new(0, 3);
        assert_eq!(g.right_of(tl), Some(tr));
        assert_eq!(g.left_of(tr), Some(tl));
        assert_eq!(g.down_of(tl), Some(Point::new(2, 0)));
        assert_eq!(g.up_of(Point::new(2, 0)), Some(tl));
    }

    #[test]
    fn shared_border_yields_primitive_edges() {
        // Two cells side by side: the top border is two primitive edges
        // meeting at the middle junction.
        let g = graph("+--+--+\n|  |  |\n+--+--+");
        assert_eq!(g.junctions().count(), 6);
        let mid = Point::new(0, 3);
        assert_eq!(g.left_of(mid), Some(Point::new(0, 0)));
        assert_eq!(g.right_of(mid), Some(Point::new(0, 6)));
    }

    #[test]
    fn adjacent_junctions_connect_directly() {
        let g = graph("++\n++");
        assert_eq!(g.edges().len(), 4);
        assert_eq!(g.right_of(Point::new(0, 0)), Some(Point::new(0, 1)));
    }

    #[test]
    fn interrupted_run_is_a_dangling_edge() {
        let grid = Grid::parse("+--x+\n|   |\n+---+").unwrap();
        let err = FigureGraph::build(&grid).unwrap_err();
        assert_eq!(err, MalformedFigure::DanglingEdge { row: 0, col: 0 });
    }

    #[test]
    fn truncated_row_breaks_the_figure() {
        // The middle row lost its right border; padding restores the
        // width but not the `|`, so the right edge run dangles.
        let grid = Grid::parse("+--+\n|\n+--+").unwrap();
        assert!(FigureGraph::build(&grid).is_err());
    }

    #[test]
    fn spurious_junction_is_isolated() {
        // A `+` with borders on no vertical side.
        let grid = Grid::parse("+-+-+\n|   |\n+---+").unwrap();
        let err = FigureGraph::build(&grid).unwrap_err();
        assert_eq!(err, MalformedFigure::IsolatedJunction { row: 0, col: 2 });
    }

    #[test]
    fn figure_without_junctions_is_empty_graph() {
        let g = FigureGraph::build(&Grid::parse("hello").unwrap()).unwrap();
        assert_eq!(g.junctions().count(), 0);
        assert!(g.edges().is_empty());
    }
}
