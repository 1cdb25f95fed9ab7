//! Command line interface for raw voxel to VTK conversion

// standard library
use std::path::{Path, PathBuf};
use std::process::ExitCode;

// crate modules
use rawtovtk::vtk::{VtkFormat, ZoneSession};
use rawtovtk::{
    read_raw_file, Error, Extents, Precision, Result, Scalar, SourceEncoding, StructuredGrid,
    VoxelGrid,
};

// external crates
use clap::Parser;
use log::{error, info};

/// Convert raw binary voxel files to VTK structured grids
///
/// The input is a headerless dump of scalar samples in native byte order,
/// x varying fastest, then y, then z. The output is written next to the
/// input with the extension swapped for the container format's.
#[derive(Parser)]
#[command(name = "rawtovtk", version, about, verbatim_doc_comment, arg_required_else_help(true))]
struct Cli {
    /// Path to the raw voxel file
    file: PathBuf,

    /// Grid width in voxels (fastest varying axis)
    #[arg(short = 'x', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Grid height in voxels
    #[arg(short = 'y', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Grid depth in voxels (slowest varying axis)
    #[arg(short = 'z', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    depth: u32,

    /// Element type of the raw input data
    #[arg(short = 't', long = "type", value_enum, default_value_t)]
    encoding: SourceEncoding,

    /// Keep every n-th voxel along each axis
    #[arg(short = 's', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    downsample: u32,

    /// Working floating point precision
    #[arg(short = 'p', long, value_enum, default_value_t)]
    precision: Precision,

    /// Output container format
    #[arg(short = 'f', long, value_enum, default_value_t)]
    format: VtkFormat,

    /// Verbose logging output, may be repeated
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    stderrlog::new()
        .quiet(cli.quiet)
        .verbosity(cli.verbose as usize + 2)
        .init()
        .ok();

    let result = match cli.precision {
        Precision::Single => run::<f32>(&cli),
        Precision::Double => run::<f64>(&cli),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::from(exit_code(&e))
        }
    }
}

/// Decode, downsample, materialise, write
fn run<T: Scalar>(cli: &Cli) -> Result<()> {
    let step = cli.downsample as usize;
    let extents = Extents::new(cli.width as usize, cli.height as usize, cli.depth as usize);

    let grid: VoxelGrid<T> = read_raw_file(&cli.file, extents, cli.encoding)?;
    info!("Loaded {grid}");

    let grid = if step > 1 { grid.downsample(step)? } else { grid };

    let outfile = output_path(&cli.file, cli.format);
    let (extents, x, y, z, p) = StructuredGrid::materialise(grid, step).into_parts();

    ZoneSession::open(&outfile, cli.format)?
        .define_zone(extents)
        .write_coordinates(x, y, z)?
        .write_scalars(p)?
        .close()?;

    info!("Wrote {}", outfile.display());
    Ok(())
}

/// Replace the input extension with the container format's
fn output_path(input: &Path, format: VtkFormat) -> PathBuf {
    input.with_extension(format.extension())
}

/// Distinct exit codes per failure kind
///
/// Usage errors exit with clap's own code (2) before any of this runs.
fn exit_code(error: &Error) -> u8 {
    match error {
        Error::IOError(_) => 3,
        Error::UnexpectedByteLength { .. } => 4,
        Error::VtkioError(_) => 5,
        _ => 1,
    }
}
