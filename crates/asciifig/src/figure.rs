use asciifig_core::{Face, FigureGraph, Grid, MalformedFigure, extract_faces, render_face};

/// A parsed and decomposed figure.
///
/// Construction runs the whole pipeline (grid, junction graph, face
/// extraction), so a `Figure` either holds the complete decomposition or
/// never exists; there are no partial results. Rendering is deferred to
/// [`rectangles`](Figure::rectangles).
#[derive(Debug, Clone)]
pub struct Figure {
    grid: Grid,
    faces: Vec<Face>,
}

impl Figure {
    /// Parse figure text and decompose it into elementary rectangles.
    ///
    /// # Errors
    ///
    /// [`MalformedFigure`] if the text is not a well-formed figure of
    /// axis-aligned rectangles; see the variants for what each stage
    /// rejects.
    pub fn parse(text: &str) -> Result<Self, MalformedFigure> {
        let grid = Grid::parse(text)?;
        let graph = FigureGraph::build(&grid)?;
        let faces = extract_faces(&graph)?;
        Ok(Self { grid, faces })
    }

    /// The character grid the figure was parsed from.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The elementary rectangles, as corner records.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Render each elementary rectangle as figure text, lazily.
    ///
    /// The iterator is re-iterable (call again for a fresh pass) and
    /// yields exactly `faces().len()` rectangles. Emission order is
    /// unspecified.
    pub fn rectangles(&self) -> impl Iterator<Item = String> + '_ {
        self.faces.iter().map(|face| render_face(&self.grid, face))
    }

    /// Render all rectangles in parallel.
    ///
    /// Faces are independent, so rendering distributes over a rayon
    /// thread pool. Output order matches [`faces`](Figure::faces).
    #[cfg(feature = "parallel")]
    pub fn par_rectangles(&self) -> Vec<String> {
        use rayon::prelude::*;

        self.faces
            .par_iter()
            .map(|face| render_face(&self.grid, face))
            .collect()
    }
}
