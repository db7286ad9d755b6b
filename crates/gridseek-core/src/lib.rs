//! **gridseek-core** — grid model and geometry primitives.
//!
//! This crate provides the foundational types used across the *gridseek*
//! workspace: the [`Coord`] grid coordinate, the closed set of [`CellState`]
//! values, and the bounds-checked rectangular [`Grid`] that scenarios are
//! generated into and searches run over.

pub mod geom;
pub mod grid;

pub use geom::Coord;
pub use grid::{CellState, Grid, GridError};
