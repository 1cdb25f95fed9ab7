//! Conversion and write operations for VTK structured grid output
//!
//! The container is reached exclusively through an ordered write session:
//! open the dataset, define the IJK zone, emit the four data blocks (X, Y, Z,
//! P), then close. Each step consumes the previous state, so the sequence is
//! enforced by the types rather than caller discipline.
//!
//! ```rust, no_run
//! use rawtovtk::vtk::{VtkFormat, ZoneSession};
//! use rawtovtk::{read_raw_file, Extents, SourceEncoding, StructuredGrid, VoxelGrid};
//!
//! let grid: VoxelGrid<f32> = read_raw_file(
//!     "./data/cube_2x2x2_uint8.raw",
//!     Extents::new(2, 2, 2),
//!     SourceEncoding::Uint8,
//! )
//! .unwrap();
//!
//! let (extents, x, y, z, p) = StructuredGrid::materialise(grid, 1).into_parts();
//!
//! ZoneSession::open("./cube.vtk", VtkFormat::LegacyBinary)
//!     .unwrap()
//!     .define_zone(extents)
//!     .write_coordinates(x, y, z)
//!     .unwrap()
//!     .write_scalars(p)
//!     .unwrap()
//!     .close()
//!     .unwrap();
//! ```
//!
//! For one-shot conversions without the session protocol, [GridToVtk] maps a
//! [StructuredGrid](crate::StructuredGrid) straight to a `vtkio::model::Vtk`
//! for further processing, and [write_vtk] persists it.

// Split into subfiles for development, but anything important is re-exported
mod builder;
mod convert;
mod session;

pub use builder::GridToVtkBuilder;
pub use convert::GridToVtk;
pub use session::{write_vtk, ZoneComplete, ZoneDefinition, ZoneScalars, ZoneSession};

// external crates
use clap::ValueEnum;

/// Supported output container variants
///
/// The classic binary format is the default; the XML variant is the modern
/// self-describing container.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VtkFormat {
    /// Classic binary `.vtk`
    #[default]
    LegacyBinary,
    /// Classic ASCII text `.vtk`
    LegacyAscii,
    /// Modern XML `.vts`
    Xml,
}

impl VtkFormat {
    /// Conventional file extension for the format
    pub fn extension(&self) -> &'static str {
        match self {
            VtkFormat::LegacyBinary => "vtk",
            VtkFormat::LegacyAscii => "vtk",
            VtkFormat::Xml => "vts",
        }
    }
}

impl std::fmt::Display for VtkFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            VtkFormat::LegacyBinary => "legacy-binary",
            VtkFormat::LegacyAscii => "legacy-ascii",
            VtkFormat::Xml => "xml",
        };
        write!(f, "{name}")
    }
}
