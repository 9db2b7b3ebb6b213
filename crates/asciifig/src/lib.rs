//! asciifig: Decompose ASCII-art rectangle figures into elementary rectangles.
//!
//! This is the public API facade crate for asciifig-rs. It re-exports the
//! types from asciifig-core and adds [`Figure`], which ties the pipeline
//! together:
//!
//! ```
//! use asciifig::Figure;
//!
//! let figure = Figure::parse(concat!(
//!     "+--+--+\n",
//!     "|  |  |\n",
//!     "+--+--+\n",
//! ))?;
//! assert_eq!(figure.faces().len(), 2);
//!
//! let rects: Vec<String> = figure.rectangles().collect();
//! assert_eq!(rects[0], "+--+\n|  |\n+--+\n");
//! # Ok::<(), asciifig::MalformedFigure>(())
//! ```
//!
//! # Architecture
//!
//! - **asciifig-core**: data types and algorithms (grid, junction graph,
//!   face extraction, rendering, kata utilities)
//! - **asciifig** (this crate): public API tying the pipeline together
//! - **asciifig-cli**: command-line frontend

mod figure;

pub use asciifig_core::{
    Edge, Face, FigureGraph, Grid, MalformedFigure, Orientation, Point, Rect, extract_faces,
    render_face,
};
pub use asciifig_core::{ocr, permute, poker, shortener, stocks, wordsearch, wrap};
pub use figure::Figure;
