//! Working numeric type abstraction
//!
//! The raw file may hold any of the supported source encodings, but all
//! in-memory computation happens in a single floating point width chosen at
//! run time. The [Scalar] trait is that working type, implemented for `f32`
//! and `f64` only.

// external crates
use clap::ValueEnum;
use vtkio::model::IOBuffer;

/// Working floating point precision selected at run time
///
/// Threaded from the command line down to the writer through a single generic
/// parameter, so the precision declared to the container and the width of the
/// buffers handed to it can never disagree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Precision {
    /// 32-bit working type
    #[default]
    Single,
    /// 64-bit working type
    Double,
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Precision::Single => "single",
            Precision::Double => "double",
        };
        write!(f, "{name}")
    }
}

/// In-memory working type for decoded voxel data
///
/// Conversions from the source encodings follow the standard numeric casts,
/// with no range validation or clamping. Unsigned-to-float is exact for the
/// supported widths.
pub trait Scalar:
    Copy + Default + PartialEq + std::fmt::Debug + std::fmt::Display + 'static
{
    /// Widen an unsigned 8-bit source element
    fn from_u8(value: u8) -> Self;

    /// Widen an unsigned 16-bit source element
    fn from_u16(value: u16) -> Self;

    /// Convert an unsigned 32-bit source element
    fn from_u32(value: u32) -> Self;

    /// Convert a 32-bit float source element
    fn from_f32(value: f32) -> Self;

    /// Convert a 64-bit float source element
    fn from_f64(value: f64) -> Self;

    /// Convert a grid index into a coordinate value
    fn from_index(value: usize) -> Self;

    /// Move values into the matching vtkio buffer variant
    fn buffer(values: Vec<Self>) -> IOBuffer;
}

impl Scalar for f32 {
    fn from_u8(value: u8) -> Self {
        value as f32
    }

    fn from_u16(value: u16) -> Self {
        value as f32
    }

    fn from_u32(value: u32) -> Self {
        value as f32
    }

    fn from_f32(value: f32) -> Self {
        value
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn from_index(value: usize) -> Self {
        value as f32
    }

    fn buffer(values: Vec<Self>) -> IOBuffer {
        IOBuffer::F32(values)
    }
}

impl Scalar for f64 {
    fn from_u8(value: u8) -> Self {
        value as f64
    }

    fn from_u16(value: u16) -> Self {
        value as f64
    }

    fn from_u32(value: u32) -> Self {
        value as f64
    }

    fn from_f32(value: f32) -> Self {
        value as f64
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn from_index(value: usize) -> Self {
        value as f64
    }

    fn buffer(values: Vec<Self>) -> IOBuffer {
        IOBuffer::F64(values)
    }
}
