// internal modules
use crate::grid::Extents;
use crate::scalar::Scalar;
use crate::structured::StructuredGrid;
use crate::vtk::GridToVtkBuilder;

// external crates
use vtkio::model::{
    Attribute, Attributes, ByteOrder, DataArray, DataSet, ElementType, Extent, IOBuffer,
    StructuredGridPiece, Version, Vtk,
};

/// Convert a materialised grid to vtk types for writing
///
/// All of the logic for mapping the four data blocks onto the VTK structured
/// grid model is implemented here. The zone extents become the grid
/// dimensions, the coordinate blocks become the point buffer, and the scalar
/// block is attached as point data under [scalar_name](GridToVtk::scalar_name).
///
/// The fields remain public for direct use, but for convenience and style
/// preference a builder pattern is also implemented and recommended.
///
/// ```rust
/// # use rawtovtk::vtk::GridToVtk;
/// # use vtkio::model::ByteOrder;
/// // Change the byte ordering to little endian
/// let converter = GridToVtk::builder()
///     .byte_order(ByteOrder::LittleEndian)
///     .build();
/// ```
///
/// The working numeric width of the output buffers always matches the
/// precision of the grid being converted; it is not configurable separately.
#[derive(Debug, Clone, PartialEq)]
pub struct GridToVtk {
    /// Dataset title written to the container header
    pub title: String,
    /// Name of the scalar point variable
    pub scalar_name: String,
    /// Byte ordering as big or little endian
    pub byte_order: ByteOrder,
}

// Public API
impl GridToVtk {
    /// Start with the default configuration
    pub fn new() -> GridToVtk {
        Default::default()
    }

    /// Get an instance of the [GridToVtkBuilder]
    pub fn builder() -> GridToVtkBuilder {
        GridToVtkBuilder::default()
    }

    /// Convert a [StructuredGrid] to a vtkio::Vtk object
    ///
    /// Once the configuration is set through either the builder or changing
    /// the fields directly, convert any [StructuredGrid] into a Vtk ready for
    /// writing or further processing.
    pub fn convert<T: Scalar>(&self, grid: &StructuredGrid<T>) -> Vtk {
        Vtk {
            version: Version::Auto,
            title: self.title.clone(),
            byte_order: self.byte_order,
            file_path: None,
            data: DataSet::inline(StructuredGridPiece {
                extent: Self::extent(grid.extents()),
                points: Self::points(grid),
                data: self.attributes(grid),
            }),
        }
    }
}

impl Default for GridToVtk {
    fn default() -> Self {
        GridToVtkBuilder::default().build()
    }
}

// Conversion internals
impl GridToVtk {
    /// Number of grid points along each logical axis
    fn extent(extents: Extents) -> Extent {
        Extent::Dims([
            extents.width as u32,
            extents.height as u32,
            extents.depth as u32,
        ])
    }

    /// Interleave the coordinate blocks into the flat point buffer
    fn points<T: Scalar>(grid: &StructuredGrid<T>) -> IOBuffer {
        let mut points = Vec::with_capacity(3 * grid.number_of_points());
        for i in 0..grid.number_of_points() {
            points.push(grid.x()[i]);
            points.push(grid.y()[i]);
            points.push(grid.z()[i]);
        }
        T::buffer(points)
    }

    /// Attach the scalar block as named point data
    fn attributes<T: Scalar>(&self, grid: &StructuredGrid<T>) -> Attributes {
        let mut attributes = Attributes::new();
        attributes.point.push(Attribute::DataArray(DataArray {
            name: self.scalar_name.clone(),
            elem: ElementType::Scalars {
                num_comp: 1,
                lookup_table: None,
            },
            data: T::buffer(grid.scalars().to_vec()),
        }));
        attributes
    }
}
