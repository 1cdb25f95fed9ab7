//! Ordered write session for structured zone output
//!
//! The write protocol is a strict sequence: open the dataset, define the zone
//! extents, emit the X, Y, Z coordinate blocks, emit the P scalar block,
//! close. Each step consumes the previous state and returns the next, so an
//! out-of-order call simply does not type-check. [close](ZoneComplete::close)
//! only exists once all four blocks are in.
//!
//! There is no partial-write recovery: if a step fails the session is dropped
//! and whatever was created on disk is left as-is.

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::grid::Extents;
use crate::scalar::Scalar;
use crate::structured::StructuredGrid;
use crate::vtk::{GridToVtk, VtkFormat};

// external crates
use log::debug;
use vtkio::model::Vtk;

/// Write a Vtk model to file in the requested format
///
/// ```rust, no_run
/// # use rawtovtk::vtk::{write_vtk, GridToVtk, VtkFormat};
/// # use rawtovtk::{Extents, StructuredGrid, VoxelGrid};
/// # let grid = VoxelGrid::from_parts(Extents::new(2, 2, 2), vec![0.0_f32; 8]).unwrap();
/// let vtk = GridToVtk::new().convert(&StructuredGrid::materialise(grid, 1));
///
/// // Write to "output.vtk" using the old ASCII text format
/// write_vtk(vtk, "./output.vtk", VtkFormat::LegacyAscii).unwrap();
/// ```
pub fn write_vtk<P: AsRef<Path>>(vtk: Vtk, path: P, format: VtkFormat) -> Result<()> {
    let mut sink = init_writer(path)?;
    write_into(vtk, &mut sink, format)?;
    Ok(sink.flush()?)
}

/// Initialise a writer from anything that can be turned into a path
fn init_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}

/// Serialise the model into an already open sink
fn write_into(vtk: Vtk, sink: &mut BufWriter<File>, format: VtkFormat) -> Result<()> {
    match format {
        VtkFormat::LegacyBinary => vtk.write_legacy(sink)?,
        VtkFormat::LegacyAscii => {
            let mut text = String::new();
            vtk.write_legacy_ascii(&mut text)?;
            sink.write_all(text.as_bytes())?;
        }
        VtkFormat::Xml => vtk.write_xml(sink)?,
    }
    Ok(())
}

/// An open dataset awaiting its zone definition
///
/// Opening creates the output file immediately, so an unwritable path fails
/// here rather than after the grid has been assembled.
pub struct ZoneSession {
    sink: BufWriter<File>,
    format: VtkFormat,
    converter: GridToVtk,
}

impl ZoneSession {
    /// Create the output file and start a write session
    pub fn open<P: AsRef<Path>>(path: P, format: VtkFormat) -> Result<Self> {
        Self::open_with(path, format, GridToVtk::default())
    }

    /// Start a session with explicit converter configuration
    pub fn open_with<P: AsRef<Path>>(
        path: P,
        format: VtkFormat,
        converter: GridToVtk,
    ) -> Result<Self> {
        Ok(Self {
            sink: init_writer(path)?,
            format,
            converter,
        })
    }

    /// Declare the ordered zone extents (IMax, JMax, KMax)
    pub fn define_zone(self, extents: Extents) -> ZoneDefinition {
        debug!("Defined ordered zone {extents}");
        ZoneDefinition {
            session: self,
            extents,
        }
    }
}

/// A defined zone awaiting its coordinate blocks
pub struct ZoneDefinition {
    session: ZoneSession,
    extents: Extents,
}

impl ZoneDefinition {
    /// Emit the X, Y and Z coordinate blocks, in that order
    ///
    /// Every block must have exactly `IMax*JMax*KMax` values to match the
    /// zone definition.
    pub fn write_coordinates<T: Scalar>(
        self,
        x: Vec<T>,
        y: Vec<T>,
        z: Vec<T>,
    ) -> Result<ZoneScalars<T>> {
        let expected = self.extents.number_of_voxels();
        for block in [&x, &y, &z] {
            if block.len() != expected {
                return Err(Error::UnexpectedArrayLength {
                    expected,
                    found: block.len(),
                });
            }
        }
        Ok(ZoneScalars {
            session: self.session,
            extents: self.extents,
            x,
            y,
            z,
        })
    }
}

/// Coordinate blocks written, awaiting the scalar block
pub struct ZoneScalars<T: Scalar> {
    session: ZoneSession,
    extents: Extents,
    x: Vec<T>,
    y: Vec<T>,
    z: Vec<T>,
}

impl<T: Scalar> ZoneScalars<T> {
    /// Emit the P scalar block
    pub fn write_scalars(self, values: Vec<T>) -> Result<ZoneComplete<T>> {
        let grid = StructuredGrid::from_parts(self.extents, self.x, self.y, self.z, values)?;
        Ok(ZoneComplete {
            session: self.session,
            grid,
        })
    }
}

/// All four blocks written; the only remaining operation is close
pub struct ZoneComplete<T: Scalar> {
    session: ZoneSession,
    grid: StructuredGrid<T>,
}

impl<T: Scalar> ZoneComplete<T> {
    /// Finalise and flush the dataset
    pub fn close(self) -> Result<()> {
        let ZoneSession {
            mut sink,
            format,
            converter,
        } = self.session;

        let vtk = converter.convert(&self.grid);
        write_into(vtk, &mut sink, format)?;
        Ok(sink.flush()?)
    }
}
