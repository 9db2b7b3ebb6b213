//! asciifig-core: Figure decomposition algorithms and kata utilities.
//!
//! This crate provides the foundational types and algorithms of
//! asciifig-rs. The figure pipeline flows strictly one way:
//!
//! text → [`Grid`] → [`FigureGraph`] → [`Face`]s → rendered rectangles
//!
//! Alongside the pipeline live the self-contained kata utilities ([`ocr`],
//! [`wrap`], [`poker`], [`wordsearch`], [`permute`], [`stocks`],
//! [`shortener`]); they share no state with the pipeline or each other.

pub mod error;
pub mod faces;
pub mod geometry;
pub mod graph;
pub mod grid;
pub mod ocr;
pub mod permute;
pub mod poker;
pub mod render;
pub mod shortener;
pub mod stocks;
pub mod wordsearch;
pub mod wrap;

pub use error::MalformedFigure;
pub use faces::{Face, extract_faces};
pub use geometry::{Orientation, Point, Rect};
pub use graph::{Edge, FigureGraph};
pub use grid::Grid;
pub use render::render_face;
