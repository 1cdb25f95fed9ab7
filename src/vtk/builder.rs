// internal modules
use crate::vtk::GridToVtk;

// external crates
use vtkio::model::ByteOrder;

/// Builder implementation for GridToVtk configuration
///
/// The fields of [GridToVtk] are left public for direct use but the module
/// also implements a builder.
///
/// For those not familiar, the builder allows for chained setter calls for a
/// functional approach that could be considered more readable. Any number of
/// parameters can be set this way (including none).
///
/// To get the final [GridToVtk] from the builder, call
/// [build()](GridToVtkBuilder::build).
///
/// ```rust
/// # use rawtovtk::vtk::GridToVtk;
/// # use vtkio::model::ByteOrder;
/// // Make a new builder, change some values
/// let converter = GridToVtk::builder()
///     .title("Foot scan, downsampled")
///     .scalar_name("P")
///     .byte_order(ByteOrder::LittleEndian)
///     .build();
/// ```
pub struct GridToVtkBuilder {
    /// Dataset title written to the container header
    title: String,
    /// Name of the scalar point variable
    scalar_name: String,
    /// Byte ordering as big or little endian
    byte_order: ByteOrder,
}

impl GridToVtkBuilder {
    /// Create a new instance of the builder with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the [GridToVtk] type
    pub fn build(self) -> GridToVtk {
        GridToVtk {
            title: self.title,
            scalar_name: self.scalar_name,
            byte_order: self.byte_order,
        }
    }

    /// Dataset title written to the container header
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Name of the scalar point variable
    ///
    /// Defaults to "P". Plotting tools display the scalar field under this
    /// name.
    pub fn scalar_name(mut self, name: impl Into<String>) -> Self {
        self.scalar_name = name.into();
        self
    }

    /// Set the byte ordering
    ///
    /// Note that Visit being Visit only reads big endian, even though most
    /// systems are little endian. Big endian is therefore the default for
    /// convenience but is completely up to the user.
    pub fn byte_order(mut self, order: ByteOrder) -> Self {
        self.byte_order = order;
        self
    }
}

impl Default for GridToVtkBuilder {
    fn default() -> Self {
        Self {
            title: "Raw voxel grid".to_string(),
            scalar_name: "P".to_string(),
            byte_order: ByteOrder::BigEndian,
        }
    }
}
