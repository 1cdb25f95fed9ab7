//! Result and Error types for the rawtovtk crate

/// Type alias for `Result<T, rawtovtk::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `rawtovtk` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// Failure at the vtkio container boundary
    #[error("vtkio error")]
    VtkioError(#[from] vtkio::Error),

    /// Source file too short for the declared extents and encoding
    #[error("unexpected file byte length (expected {expected:?}, found {found:?})")]
    UnexpectedByteLength { expected: u64, found: u64 },

    /// Data block length does not match the declared zone extents
    #[error("unexpected array length (expected {expected:?}, found {found:?})")]
    UnexpectedArrayLength { expected: usize, found: usize },

    /// Downsampling stride must be at least 1
    #[error("downsample stride must be at least 1")]
    ZeroStride,
}
