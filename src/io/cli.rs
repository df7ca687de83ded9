//! Command-line interface for filling a masked hole in an image

use crate::algorithm::filler::{FillReport, FillerConfig, build_filler, fill_all_holes};
use crate::io::configuration::{
    DEFAULT_EPSILON, DEFAULT_Z_FACTOR, OUTPUT_EXTENSION, OUTPUT_SUFFIX, SUGGESTED_SECTION_COUNT,
};
use crate::io::error::Result;
use crate::io::image::{export_grid_as_png, load_masked_grid};
use crate::io::progress::StageProgress;
use crate::spatial::Connectivity;
use crate::spatial::grid::count_holes;
use clap::{ArgAction, Parser, ValueEnum};
use log::info;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Boundary connectivity accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConnectivityArg {
    /// Edge-sharing neighbors only
    Four,
    /// Edge- and corner-sharing neighbors
    Eight,
}

impl From<ConnectivityArg> for Connectivity {
    fn from(arg: ConnectivityArg) -> Self {
        match arg {
            ConnectivityArg::Four => Self::FourConnected,
            ConnectivityArg::Eight => Self::EightConnected,
        }
    }
}

#[derive(Parser)]
#[command(name = "holefill")]
#[command(
    author,
    version,
    about = "Fill a masked hole in an image by inverse-distance weighted interpolation"
)]
/// Command-line arguments for the hole filling tool
pub struct Cli {
    /// Input image path
    #[arg(short, long, value_name = "IMAGE")]
    pub image: PathBuf,

    /// Mask image path; dark pixels mark the hole
    #[arg(short, long, value_name = "MASK")]
    pub mask: PathBuf,

    /// Output image path (defaults to <image>_filled.png)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Pixel connectivity used to detect the hole boundary
    #[arg(short, long, value_enum, default_value_t = ConnectivityArg::Eight)]
    pub connectivity: ConnectivityArg,

    /// Decay exponent of the distance weighting
    #[arg(short, long, default_value_t = DEFAULT_Z_FACTOR, allow_negative_numbers = true)]
    pub z_factor: i32,

    /// Stabilizing constant of the distance weighting
    #[arg(short, long, default_value_t = DEFAULT_EPSILON, allow_negative_numbers = true)]
    pub epsilon: f32,

    /// Cluster the boundary into this many sections (accelerated filler);
    /// a bare flag picks the suggested count
    #[arg(short, long, value_name = "COUNT")]
    #[allow(clippy::option_option)]
    pub sections: Option<Option<usize>>,

    /// Keep filling until every masked region is filled
    #[arg(short, long)]
    pub all_holes: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Filler configuration described by the arguments
    pub fn filler_config(&self) -> FillerConfig {
        FillerConfig {
            connectivity: self.connectivity.into(),
            z_factor: self.z_factor,
            epsilon: self.epsilon,
            sections: self
                .sections
                .map(|count| count.unwrap_or(SUGGESTED_SECTION_COUNT)),
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log level, overridable through `RUST_LOG`
    pub const fn log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "info",
            (false, 2) => "debug",
            (false, _) => "trace",
        }
    }

    /// Resolved output path
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.image))
    }
}

/// Output path beside the input: `<stem>_filled.png`
pub fn default_output_path(input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!(
        "{}{}.{}",
        stem.to_string_lossy(),
        OUTPUT_SUFFIX,
        OUTPUT_EXTENSION
    );

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}

/// Orchestrates loading, filling and exporting one image
pub struct HoleFillApp {
    cli: Cli,
    progress: StageProgress,
}

impl HoleFillApp {
    /// Create the application from parsed arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            let name = cli
                .image
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            StageProgress::new(name)
        } else {
            StageProgress::hidden()
        };

        Self { cli, progress }
    }

    /// Run the fill described by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The filler configuration is invalid (checked before any file is read)
    /// - The image or mask cannot be loaded, or their sizes differ
    /// - The output cannot be written
    pub fn run(&mut self) -> Result<Vec<FillReport>> {
        let start_time = Instant::now();
        let config = self.cli.filler_config();
        let filler = build_filler(&config)?;

        self.progress.stage("loading");
        let mut grid = load_masked_grid(&self.cli.image, &self.cli.mask)?;

        self.progress.stage("filling");
        let reports = if self.cli.all_holes {
            fill_all_holes(filler.as_ref(), &mut grid)
        } else {
            let report = filler.fill(&mut grid);
            if report.is_empty() {
                Vec::new()
            } else {
                vec![report]
            }
        };

        let remaining = count_holes(&grid);
        if remaining > 0 {
            info!("{remaining} masked pixels left unfilled");
        }

        let output_path = self.cli.output_path();
        self.progress.stage("saving");
        export_grid_as_png(&grid, &output_path)?;

        let filled: usize = reports.iter().map(|r| r.hole_pixels).sum();
        info!(
            "filled {filled} pixels in {} holes, wrote {} in {:.2?}",
            reports.len(),
            output_path.display(),
            start_time.elapsed()
        );
        self.progress.finish(format!("done ({filled} pixels filled)"));

        Ok(reports)
    }
}
