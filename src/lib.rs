//! Convert raw voxel dumps into VTK structured grids
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod encoding;
mod error;
mod grid;
mod reader;
mod scalar;
mod structured;

pub mod vtk;

// Inline anything important for a nice public API
#[doc(inline)]
pub use encoding::SourceEncoding;

#[doc(inline)]
pub use grid::{Extents, VoxelGrid};

#[doc(inline)]
pub use reader::read_raw_file;

#[doc(inline)]
pub use scalar::{Precision, Scalar};

#[doc(inline)]
pub use structured::StructuredGrid;

#[doc(inline)]
pub use error::{Error, Result};
