//! Integration tests for the decode, downsample and materialise stages

use std::io::Write;

use rawtovtk::{read_raw_file, Error, Extents, SourceEncoding, StructuredGrid, VoxelGrid};
use rstest::{fixture, rstest};
use tempfile::NamedTempFile;

/// Write raw bytes to a scratch file that lives for the duration of the test
fn raw_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

#[fixture]
fn cube() -> VoxelGrid<f32> {
    read_raw_file(
        "./data/cube_2x2x2_uint8.raw",
        Extents::new(2, 2, 2),
        SourceEncoding::Uint8,
    )
    .unwrap()
}

#[rstest]
fn decoded_grid_has_expected_shape(cube: VoxelGrid<f32>) {
    assert_eq!(cube.extents(), Extents::new(2, 2, 2));
    assert_eq!(cube.number_of_voxels(), 8);
    assert_eq!(cube.values().len(), 8);
}

#[test]
fn degenerate_extents_are_clamped_to_one() {
    let extents = Extents::new(0, 4, 0);
    assert_eq!(extents, Extents::new(1, 4, 1));
    assert_eq!(extents.number_of_voxels(), 4);
}

#[test]
fn uint8_decodes_exactly_into_both_precisions() {
    let bytes = (0..=255).collect::<Vec<u8>>();
    let file = raw_file(&bytes);
    let extents = Extents::new(256, 1, 1);

    let single: VoxelGrid<f32> = read_raw_file(file.path(), extents, SourceEncoding::Uint8).unwrap();
    let double: VoxelGrid<f64> = read_raw_file(file.path(), extents, SourceEncoding::Uint8).unwrap();

    for (i, byte) in bytes.iter().enumerate() {
        assert_eq!(single.values()[i], *byte as f32);
        assert_eq!(double.values()[i], *byte as f64);
    }
}

#[test]
fn uint16_decodes_with_native_endianness() {
    let values = [0_u16, 1, 258, 65535];
    let bytes = values
        .iter()
        .flat_map(|v| v.to_ne_bytes())
        .collect::<Vec<u8>>();
    let file = raw_file(&bytes);

    let grid: VoxelGrid<f32> =
        read_raw_file(file.path(), Extents::new(4, 1, 1), SourceEncoding::Uint16).unwrap();
    assert_eq!(grid.values(), [0.0, 1.0, 258.0, 65535.0]);
}

#[test]
fn uint32_decodes_exactly_into_double() {
    let values = [0_u32, 7, 4_000_000_000];
    let bytes = values
        .iter()
        .flat_map(|v| v.to_ne_bytes())
        .collect::<Vec<u8>>();
    let file = raw_file(&bytes);

    let grid: VoxelGrid<f64> =
        read_raw_file(file.path(), Extents::new(3, 1, 1), SourceEncoding::Uint32).unwrap();
    assert_eq!(grid.values(), [0.0, 7.0, 4.0e9]);
}

#[test]
fn float32_source_is_byte_identical_in_single_precision() {
    let values = [1.5_f32, -2.25, 3.0e7, f32::MIN_POSITIVE];
    let bytes = values
        .iter()
        .flat_map(|v| v.to_ne_bytes())
        .collect::<Vec<u8>>();
    let file = raw_file(&bytes);

    let grid: VoxelGrid<f32> =
        read_raw_file(file.path(), Extents::new(4, 1, 1), SourceEncoding::Float32).unwrap();
    for (decoded, original) in grid.values().iter().zip(values.iter()) {
        assert_eq!(decoded.to_bits(), original.to_bits());
    }
}

#[test]
fn float64_source_is_byte_identical_in_double_precision() {
    let values = [1.5_f64, -2.25e-100];
    let bytes = values
        .iter()
        .flat_map(|v| v.to_ne_bytes())
        .collect::<Vec<u8>>();
    let file = raw_file(&bytes);

    let grid: VoxelGrid<f64> =
        read_raw_file(file.path(), Extents::new(2, 1, 1), SourceEncoding::Float64).unwrap();
    for (decoded, original) in grid.values().iter().zip(values.iter()) {
        assert_eq!(decoded.to_bits(), original.to_bits());
    }
}

#[test]
fn missing_file_fails_with_io_error() {
    let result: Result<VoxelGrid<f32>, Error> = read_raw_file(
        "./data/does_not_exist.raw",
        Extents::new(2, 2, 2),
        SourceEncoding::Uint8,
    );
    assert!(matches!(result, Err(Error::IOError(_))));
}

#[test]
fn short_file_is_rejected() {
    let result: Result<VoxelGrid<f32>, Error> = read_raw_file(
        "./data/cube_2x2x2_uint8.raw",
        Extents::new(2, 2, 3),
        SourceEncoding::Uint8,
    );
    assert!(matches!(
        result,
        Err(Error::UnexpectedByteLength {
            expected: 12,
            found: 8
        })
    ));
}

#[test]
fn trailing_bytes_are_ignored() {
    let grid: VoxelGrid<f32> = read_raw_file(
        "./data/cube_2x2x2_uint8.raw",
        Extents::new(2, 2, 1),
        SourceEncoding::Uint8,
    )
    .unwrap();
    assert_eq!(grid.values(), [1.0, 2.0, 3.0, 4.0]);
}

#[rstest]
#[case(8, 1, 8)] // identity
#[case(8, 2, 4)] // exact division
#[case(5, 2, 2)] // remainder discarded
#[case(2, 4, 1)] // extent shorter than stride
#[case(1, 10, 1)] // degenerate axis
fn reduced_extents_follow_integer_division(
    #[case] extent: usize,
    #[case] step: usize,
    #[case] expected: usize,
) {
    let reduced = Extents::new(extent, extent, extent).reduced(step);
    assert_eq!(reduced, Extents::new(expected, expected, expected));
}

#[test]
fn downsample_is_point_sampling_not_averaging() {
    let extents = Extents::new(4, 4, 4);
    let values = (0..64).map(|v| v as f32).collect();
    let grid = VoxelGrid::from_parts(extents, values).unwrap();

    let reduced = grid.downsample(2).unwrap();
    assert_eq!(reduced.extents(), Extents::new(2, 2, 2));

    for z in 0..2 {
        for y in 0..2 {
            for x in 0..2 {
                let picked = reduced.values()[reduced.extents().flatten(x, y, z)];
                let original = grid.values()[extents.flatten(x * 2, y * 2, z * 2)];
                assert_eq!(picked, original);
            }
        }
    }
}

#[rstest]
fn downsample_step_one_is_identity(cube: VoxelGrid<f32>) {
    assert_eq!(cube.downsample(1).unwrap(), cube);
}

#[rstest]
fn downsample_step_zero_is_rejected(cube: VoxelGrid<f32>) {
    assert!(matches!(cube.downsample(0), Err(Error::ZeroStride)));
}

#[rstest]
fn downsample_keeps_first_sample_on_short_axes(cube: VoxelGrid<f32>) {
    let reduced = cube.downsample(2).unwrap();
    assert_eq!(reduced.extents(), Extents::new(1, 1, 1));
    assert_eq!(reduced.values(), [1.0]);
}

#[rstest]
fn materialised_coordinates_equal_indices_at_step_one(cube: VoxelGrid<f32>) {
    let structured = StructuredGrid::materialise(cube, 1);

    // flattened index 5 is the point at (x=1, y=0, z=1)
    assert_eq!(structured.x()[5], 1.0);
    assert_eq!(structured.y()[5], 0.0);
    assert_eq!(structured.z()[5], 1.0);
    assert_eq!(structured.scalars()[5], 6.0);
}

#[rstest]
fn materialised_coordinates_scale_with_stride(cube: VoxelGrid<f32>) {
    let structured = StructuredGrid::materialise(cube, 4);

    assert_eq!(structured.x(), [0.0, 4.0, 0.0, 4.0, 0.0, 4.0, 0.0, 4.0]);
    assert_eq!(structured.y(), [0.0, 0.0, 4.0, 4.0, 0.0, 0.0, 4.0, 4.0]);
    assert_eq!(structured.z(), [0.0, 0.0, 0.0, 0.0, 4.0, 4.0, 4.0, 4.0]);
}

#[rstest]
fn materialised_arrays_are_aligned(cube: VoxelGrid<f32>) {
    let structured = StructuredGrid::materialise(cube, 1);
    let count = structured.number_of_points();

    assert_eq!(count, 8);
    assert_eq!(structured.x().len(), count);
    assert_eq!(structured.y().len(), count);
    assert_eq!(structured.z().len(), count);
    assert_eq!(structured.scalars().len(), count);
}

#[test]
fn structured_grid_rejects_misaligned_arrays() {
    let result = StructuredGrid::from_parts(
        Extents::new(2, 2, 2),
        vec![0.0_f32; 8],
        vec![0.0; 8],
        vec![0.0; 7],
        vec![0.0; 8],
    );
    assert!(matches!(
        result,
        Err(Error::UnexpectedArrayLength {
            expected: 8,
            found: 7
        })
    ));
}
