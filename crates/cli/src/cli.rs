//! Command-line interface over the LAS adapter.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use railcloud_core::{PointCloud, PointXYZ, PointXYZI};
use railcloud_io::{BoundsMode, LasHeader, RawBounds};

use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "railcloud")]
#[command(about = "Read, filter and classify LAS/LAZ point clouds", version)]
pub struct Cli {
    /// Path to YAML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the scale, offset and record layout of a file
    Header {
        /// Input LAS/LAZ file
        input: PathBuf,
    },

    /// Read a file and report how many points were loaded
    Read {
        /// Input LAS/LAZ file
        input: PathBuf,
        #[command(flatten)]
        read: ReadArgs,
    },

    /// Mark points above a height as cable and write a classified copy
    Classify {
        /// Input LAS/LAZ file
        input: PathBuf,
        /// Output LAS/LAZ file
        output: PathBuf,
        /// Points with z strictly above this value get full intensity
        #[arg(short, long, default_value_t = 0.0)]
        threshold: f64,
        #[command(flatten)]
        read: ReadArgs,
    },
}

#[derive(clap::Args)]
struct ReadArgs {
    /// Maximum number of records to scan
    #[arg(long)]
    max_points: Option<u64>,

    /// Raw-coordinate box to keep
    #[arg(long, num_args = 4, value_names = ["MIN_X", "MAX_X", "MIN_Y", "MAX_Y"], allow_negative_numbers = true)]
    bounds: Option<Vec<i64>>,

    /// Compare the upper X bound against Y, as older tooling did
    #[arg(long)]
    legacy_bounds: bool,
}

impl ReadArgs {
    fn resolve(&self, config: &CliConfig) -> (u64, Option<RawBounds>) {
        let max_points = self.max_points.unwrap_or(config.read.max_points);
        let mut bounds = match self.bounds.as_deref() {
            Some(&[min_x, max_x, min_y, max_y]) => Some(RawBounds::new(min_x, max_x, min_y, max_y)),
            _ => config.read.bounds,
        };
        if self.legacy_bounds {
            bounds = bounds.map(|b| b.with_mode(BoundsMode::Legacy));
        }
        (max_points, bounds)
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .format_timestamp_secs()
        .init();

    let config = match &cli.config {
        Some(path) => {
            let cfg = CliConfig::from_yaml(path)?;
            info!("Loaded config from: {}", path.display());
            cfg
        }
        None => CliConfig::default(),
    };

    match cli.command {
        Commands::Header { input } => cmd_header(&input),
        Commands::Read { input, read } => cmd_read(&input, &read, &config),
        Commands::Classify {
            input,
            output,
            threshold,
            read,
        } => cmd_classify(&input, &output, threshold, &read, &config),
    }
}

fn cmd_header(input: &Path) -> Result<()> {
    let header = railcloud_io::read_las_header(input)
        .with_context(|| format!("Failed to read header of {}", input.display()))?;
    print_header(input, &header);
    Ok(())
}

fn cmd_read(input: &Path, args: &ReadArgs, config: &CliConfig) -> Result<()> {
    let (cloud, header) = load(input, args, config)?;
    print_header(input, &header);

    let aabb = cloud.aabb();
    println!("  Points read: {}", cloud.len());
    if !aabb.is_empty() {
        println!("  Min: {:?}", aabb.min);
        println!("  Max: {:?}", aabb.max);
    }
    Ok(())
}

fn cmd_classify(
    input: &Path,
    output: &Path,
    threshold: f64,
    args: &ReadArgs,
    config: &CliConfig,
) -> Result<()> {
    let (cloud, input_header) = load(input, args, config)?;
    let header = config.write.header.unwrap_or(input_header);

    let marked = mark_above(&cloud, threshold);
    let cable_count = marked.iter().filter(|p| p.has_signal()).count();
    info!(
        "{} of {} points above z = {}",
        cable_count,
        marked.len(),
        threshold
    );

    railcloud_io::write_las(output, &header, &marked)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!(
        "Wrote {} points ({} cable) to {}",
        marked.len(),
        cable_count,
        output.display()
    );
    Ok(())
}

fn load(
    input: &Path,
    args: &ReadArgs,
    config: &CliConfig,
) -> Result<(PointCloud<PointXYZ>, LasHeader)> {
    let (max_points, bounds) = args.resolve(config);
    debug!("Reading {} (max points {}, bounds {:?})", input.display(), max_points, bounds);
    let result = match bounds {
        Some(bounds) => railcloud_io::read_las_bounded(input, &bounds, max_points),
        None => railcloud_io::read_las(input, max_points),
    };
    result.with_context(|| format!("Failed to read {}", input.display()))
}

/// Full intensity for points strictly above `threshold`, none otherwise.
fn mark_above(cloud: &PointCloud<PointXYZ>, threshold: f64) -> PointCloud<PointXYZI> {
    cloud
        .iter()
        .map(|p| {
            let intensity = if p.z > threshold { 1.0 } else { 0.0 };
            PointXYZI::new(p.x, p.y, p.z, intensity)
        })
        .collect()
}

fn print_header(input: &Path, header: &LasHeader) {
    println!("{}", input.display());
    println!("  Scale: {:?}", header.scale);
    println!("  Offset: {:?}", header.offset);
    println!("  Point format: {}", header.point_format);
    println!("  Record length: {}", header.point_record_length);
}
