//! **searchlab-core** — coordinate types shared by the searchlab crates.
//!
//! [`Position`] addresses a maze cell or a board square; [`Range`] is the
//! half-open rectangle used for bounds checks and row-major scans.

pub mod geom;

pub use geom::{Position, Range, RangeIter};
