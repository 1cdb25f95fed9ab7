//! Read operations for raw headerless voxel files
//!
//! The file is a flat binary dump with no header: exactly `width*height*depth`
//! elements of the declared encoding, x varying fastest, in native byte
//! ordering. Decoding normalises every element into the working type through
//! a tagged dispatch on [SourceEncoding].

// standard library
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

// crate modules
use crate::encoding::SourceEncoding;
use crate::error::{Error, Result};
use crate::grid::{Extents, VoxelGrid};
use crate::scalar::Scalar;

// external crates
use log::debug;

/// Decode a raw voxel file into a [VoxelGrid]
///
/// The file size is checked against `extents` and `encoding` before any
/// decoding; a file shorter than `width*height*depth` elements is rejected,
/// while trailing bytes beyond the expected length are ignored.
///
/// ```rust
/// # use rawtovtk::{read_raw_file, Extents, SourceEncoding, VoxelGrid};
/// // Read the example 2x2x2 cube
/// let grid: VoxelGrid<f32> = read_raw_file(
///     "./data/cube_2x2x2_uint8.raw",
///     Extents::new(2, 2, 2),
///     SourceEncoding::Uint8,
/// )
/// .unwrap();
///
/// assert_eq!(grid.number_of_voxels(), 8);
/// assert_eq!(grid.values()[5], 6.0);
/// ```
pub fn read_raw_file<T: Scalar, P: AsRef<Path>>(
    path: P,
    extents: Extents,
    encoding: SourceEncoding,
) -> Result<VoxelGrid<T>> {
    let expected = extents.expected_byte_length(encoding);
    let mut reader = init_reader(path)?;

    let found = reader.get_ref().metadata()?.len();
    if found < expected {
        return Err(Error::UnexpectedByteLength { expected, found });
    }

    debug!("Decoding {expected} bytes of {encoding} as a {extents} grid");
    let values = parse_values(&mut reader, encoding, extents.number_of_voxels())?;
    VoxelGrid::from_parts(extents, values)
}

/// Initialise a reader from anything that can be turned into a path
fn init_reader(path: impl AsRef<Path>) -> Result<BufReader<File>> {
    let file = File::open(path)?;
    Ok(BufReader::new(file))
}

/// Decode `count` elements, casting each into the working type
///
/// Element-for-element reinterpretation via `from_ne_bytes`, so a source
/// encoding matching the working type is decoded with no precision loss.
fn parse_values<T: Scalar>(
    reader: &mut BufReader<File>,
    encoding: SourceEncoding,
    count: usize,
) -> Result<Vec<T>> {
    let mut values = Vec::with_capacity(count);

    match encoding {
        SourceEncoding::Uint8 => {
            let mut buffer = [0u8; 1];
            for _ in 0..count {
                reader.read_exact(&mut buffer)?;
                values.push(T::from_u8(buffer[0]));
            }
        }
        SourceEncoding::Uint16 => {
            let mut buffer = [0u8; 2];
            for _ in 0..count {
                reader.read_exact(&mut buffer)?;
                values.push(T::from_u16(u16::from_ne_bytes(buffer)));
            }
        }
        SourceEncoding::Uint32 => {
            let mut buffer = [0u8; 4];
            for _ in 0..count {
                reader.read_exact(&mut buffer)?;
                values.push(T::from_u32(u32::from_ne_bytes(buffer)));
            }
        }
        SourceEncoding::Float32 => {
            let mut buffer = [0u8; 4];
            for _ in 0..count {
                reader.read_exact(&mut buffer)?;
                values.push(T::from_f32(f32::from_ne_bytes(buffer)));
            }
        }
        SourceEncoding::Float64 => {
            let mut buffer = [0u8; 8];
            for _ in 0..count {
                reader.read_exact(&mut buffer)?;
                values.push(T::from_f64(f64::from_ne_bytes(buffer)));
            }
        }
    }

    Ok(values)
}
