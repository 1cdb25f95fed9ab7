//! Dense voxel grid container and spatial downsampling

// crate modules
use crate::encoding::SourceEncoding;
use crate::error::{Error, Result};
use crate::scalar::Scalar;

// external crates
use log::warn;

/// Logical grid extents in voxels
///
/// The flattened storage order is fixed with `x` varying fastest, then `y`,
/// then `z`, i.e. `index = z*height*width + y*width + x`. Axis lengths are
/// never zero; a degenerate axis is clamped to 1 on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extents {
    /// Number of voxels along x (fastest varying)
    pub width: usize,
    /// Number of voxels along y
    pub height: usize,
    /// Number of voxels along z (slowest varying)
    pub depth: usize,
}

impl Extents {
    /// New extents, with degenerate axis lengths clamped to 1
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            depth: depth.max(1),
        }
    }

    /// Total number of voxels in the grid
    pub fn number_of_voxels(&self) -> usize {
        self.width * self.height * self.depth
    }

    /// Expected raw file size for an element encoding
    pub fn expected_byte_length(&self, encoding: SourceEncoding) -> u64 {
        (self.number_of_voxels() * encoding.byte_length()) as u64
    }

    /// Reduced extents after downsampling by `step`
    ///
    /// Integer division per axis, with any axis shorter than the stride
    /// clamped to a single sample rather than zero. `step` must be at
    /// least 1.
    pub fn reduced(&self, step: usize) -> Extents {
        Extents {
            width: (self.width / step).max(1),
            height: (self.height / step).max(1),
            depth: (self.depth / step).max(1),
        }
    }

    /// Flattened storage index for the voxel at (x, y, z)
    pub fn flatten(&self, x: usize, y: usize, z: usize) -> usize {
        z * self.height * self.width + y * self.width + x
    }
}

impl Default for Extents {
    fn default() -> Self {
        Self::new(1, 1, 1)
    }
}

impl std::fmt::Display for Extents {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.depth)
    }
}

/// Dense 3D scalar field in the working numeric type
///
/// Holds exactly `width*height*depth` values in the flattened order described
/// on [Extents]. Construction is checked, so a grid in hand always satisfies
/// that invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct VoxelGrid<T> {
    extents: Extents,
    values: Vec<T>,
}

impl<T: Scalar> VoxelGrid<T> {
    /// Build a grid, checking the value count against the extents
    pub fn from_parts(extents: Extents, values: Vec<T>) -> Result<Self> {
        let expected = extents.number_of_voxels();
        if values.len() != expected {
            return Err(Error::UnexpectedArrayLength {
                expected,
                found: values.len(),
            });
        }
        Ok(Self { extents, values })
    }

    /// Logical extents of the grid
    pub fn extents(&self) -> Extents {
        self.extents
    }

    /// Flattened voxel values
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Consume the grid, keeping only the flattened values
    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    /// Total number of voxels in the grid
    pub fn number_of_voxels(&self) -> usize {
        self.extents.number_of_voxels()
    }

    /// Point-sampled copy of the grid keeping every `step`-th voxel per axis
    ///
    /// Strictly picks the sample at `(x*step, y*step, z*step)` for every
    /// reduced index, never averaging or interpolating neighbours. A `step`
    /// of 1 returns an identical copy.
    ///
    /// ```rust
    /// # use rawtovtk::{Extents, VoxelGrid};
    /// let values = (0..64).map(|v| v as f32).collect();
    /// let grid = VoxelGrid::from_parts(Extents::new(4, 4, 4), values).unwrap();
    ///
    /// let reduced = grid.downsample(2).unwrap();
    /// assert_eq!(reduced.extents(), Extents::new(2, 2, 2));
    /// assert_eq!(reduced.values()[0], 0.0);
    /// ```
    pub fn downsample(&self, step: usize) -> Result<VoxelGrid<T>> {
        if step == 0 {
            return Err(Error::ZeroStride);
        }
        if step == 1 {
            return Ok(self.clone());
        }

        if self.extents.width < step || self.extents.height < step || self.extents.depth < step {
            warn!("Warning: axis extent shorter than stride {step}, keeping a single sample");
        }

        let reduced = self.extents.reduced(step);
        let mut values = Vec::with_capacity(reduced.number_of_voxels());
        for z in 0..reduced.depth {
            for y in 0..reduced.height {
                for x in 0..reduced.width {
                    values.push(self.values[self.extents.flatten(x * step, y * step, z * step)]);
                }
            }
        }

        VoxelGrid::from_parts(reduced, values)
    }
}

impl<T: Scalar> std::fmt::Display for VoxelGrid<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "VoxelGrid {{ extents: {}, voxels: {} }}",
            self.extents,
            self.number_of_voxels()
        )
    }
}
