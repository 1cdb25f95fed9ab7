//! Materialised structured grid with synthesised coordinates

// crate modules
use crate::error::{Error, Result};
use crate::grid::{Extents, VoxelGrid};
use crate::scalar::Scalar;

/// Four positionally aligned point arrays over an IJK-ordered grid
///
/// The X, Y, Z coordinate arrays and the P scalar array all have length
/// `width*height*depth` in the same flattened order as [VoxelGrid], so the
/// same index across all four refers to the same physical point.
///
/// Coordinates are synthesised, not measured: `X[i] = x_index * step` and
/// likewise for Y and Z, so the spacing reflects the original voxel spacing
/// even after downsampling.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredGrid<T> {
    extents: Extents,
    x: Vec<T>,
    y: Vec<T>,
    z: Vec<T>,
    scalars: Vec<T>,
}

impl<T: Scalar> StructuredGrid<T> {
    /// Synthesise coordinates from grid indices scaled by the stride
    ///
    /// Iterates in the storage order (z outer, y middle, x inner), so the
    /// coordinate arrays are filled positionally aligned with the scalars.
    ///
    /// ```rust
    /// # use rawtovtk::{Extents, StructuredGrid, VoxelGrid};
    /// let values = (1..=8).map(|v| v as f32).collect();
    /// let grid = VoxelGrid::from_parts(Extents::new(2, 2, 2), values).unwrap();
    ///
    /// let structured = StructuredGrid::materialise(grid, 1);
    /// // Flattened index 5 is the point at (x=1, y=0, z=1)
    /// assert_eq!(structured.x()[5], 1.0);
    /// assert_eq!(structured.y()[5], 0.0);
    /// assert_eq!(structured.z()[5], 1.0);
    /// assert_eq!(structured.scalars()[5], 6.0);
    /// ```
    pub fn materialise(grid: VoxelGrid<T>, step: usize) -> Self {
        let extents = grid.extents();
        let count = extents.number_of_voxels();

        let mut x = Vec::with_capacity(count);
        let mut y = Vec::with_capacity(count);
        let mut z = Vec::with_capacity(count);
        for k in 0..extents.depth {
            for j in 0..extents.height {
                for i in 0..extents.width {
                    x.push(T::from_index(i * step));
                    y.push(T::from_index(j * step));
                    z.push(T::from_index(k * step));
                }
            }
        }

        Self {
            extents,
            x,
            y,
            z,
            scalars: grid.into_values(),
        }
    }

    /// Assemble from already materialised arrays, checking every length
    pub fn from_parts(
        extents: Extents,
        x: Vec<T>,
        y: Vec<T>,
        z: Vec<T>,
        scalars: Vec<T>,
    ) -> Result<Self> {
        let expected = extents.number_of_voxels();
        for array in [&x, &y, &z, &scalars] {
            if array.len() != expected {
                return Err(Error::UnexpectedArrayLength {
                    expected,
                    found: array.len(),
                });
            }
        }
        Ok(Self {
            extents,
            x,
            y,
            z,
            scalars,
        })
    }

    /// Logical extents of the grid
    pub fn extents(&self) -> Extents {
        self.extents
    }

    /// Synthesised X coordinates
    pub fn x(&self) -> &[T] {
        &self.x
    }

    /// Synthesised Y coordinates
    pub fn y(&self) -> &[T] {
        &self.y
    }

    /// Synthesised Z coordinates
    pub fn z(&self) -> &[T] {
        &self.z
    }

    /// Scalar field values
    pub fn scalars(&self) -> &[T] {
        &self.scalars
    }

    /// Number of points in each of the four arrays
    pub fn number_of_points(&self) -> usize {
        self.extents.number_of_voxels()
    }

    /// Break the grid back into extents and the four data blocks
    pub fn into_parts(self) -> (Extents, Vec<T>, Vec<T>, Vec<T>, Vec<T>) {
        (self.extents, self.x, self.y, self.z, self.scalars)
    }
}
