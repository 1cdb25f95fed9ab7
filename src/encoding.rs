//! Source element encodings for raw voxel files

// external crates
use clap::ValueEnum;

/// On-disk element type of a raw voxel file
///
/// The encoding determines the per-element byte width used for the expected
/// file size check, and the numeric conversion applied when decoding into the
/// working type. Values are assumed to be in native byte order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceEncoding {
    /// Unsigned 8-bit integer
    #[default]
    Uint8,
    /// Unsigned 16-bit integer
    Uint16,
    /// Unsigned 32-bit integer
    Uint32,
    /// 32-bit IEEE float
    Float32,
    /// 64-bit IEEE float
    Float64,
}

impl SourceEncoding {
    /// Size of a single encoded element in bytes
    pub fn byte_length(&self) -> usize {
        match self {
            SourceEncoding::Uint8 => 1,
            SourceEncoding::Uint16 => 2,
            SourceEncoding::Uint32 => 4,
            SourceEncoding::Float32 => 4,
            SourceEncoding::Float64 => 8,
        }
    }
}

impl std::fmt::Display for SourceEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            SourceEncoding::Uint8 => "uint8",
            SourceEncoding::Uint16 => "uint16",
            SourceEncoding::Uint32 => "uint32",
            SourceEncoding::Float32 => "float32",
            SourceEncoding::Float64 => "float64",
        };
        write!(f, "{name}")
    }
}
