//! Tests for command-line parsing and the end-to-end run

#[cfg(test)]
mod tests {
    use clap::Parser;
    use holefill::HoleFillError;
    use holefill::io::cli::{Cli, ConnectivityArg, HoleFillApp, default_output_path};
    use holefill::io::configuration::{DEFAULT_EPSILON, DEFAULT_Z_FACTOR, SUGGESTED_SECTION_COUNT};
    use holefill::spatial::Connectivity;
    use image::{Rgb, RgbImage};
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    // Tests CLI parsing with only the required paths
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["holefill", "-i", "photo.png", "-m", "mask.png"]);

        assert_eq!(cli.image, PathBuf::from("photo.png"));
        assert_eq!(cli.mask, PathBuf::from("mask.png"));
        assert_eq!(cli.output, None);
        assert_eq!(cli.connectivity, ConnectivityArg::Eight);
        assert_eq!(cli.z_factor, DEFAULT_Z_FACTOR);
        assert!((cli.epsilon - DEFAULT_EPSILON).abs() < f32::EPSILON);
        assert_eq!(cli.sections, None);
        assert!(!cli.all_holes);
        assert!(!cli.quiet);
    }

    // Tests CLI parsing with all available arguments
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "holefill",
            "--image",
            "in.png",
            "--mask",
            "hole.png",
            "--output",
            "out/result.png",
            "--connectivity",
            "four",
            "--z-factor",
            "2",
            "--epsilon",
            "0.001",
            "--sections",
            "150",
            "--all-holes",
            "--quiet",
        ]);

        assert_eq!(cli.output, Some(PathBuf::from("out/result.png")));
        let config = cli.filler_config();
        assert_eq!(config.connectivity, Connectivity::FourConnected);
        assert_eq!(config.z_factor, 2);
        assert!((config.epsilon - 0.001).abs() < f32::EPSILON);
        assert_eq!(config.sections, Some(150));
        assert!(cli.all_holes);
        assert!(!cli.should_show_progress());
    }

    // Tests a bare sections flag selects the suggested section count
    #[test]
    fn test_bare_sections_flag_uses_suggested_count() {
        let cli = Cli::parse_from(["holefill", "-i", "a.png", "-m", "b.png", "-s", "-q"]);
        assert_eq!(cli.sections, Some(None));
        assert_eq!(cli.filler_config().sections, Some(SUGGESTED_SECTION_COUNT));
        assert!(cli.quiet);

        let trailing = Cli::parse_from(["holefill", "-i", "a.png", "-m", "b.png", "--sections"]);
        assert_eq!(trailing.filler_config().sections, Some(150));

        let explicit = Cli::parse_from(["holefill", "-i", "a.png", "-m", "b.png", "-s", "12"]);
        assert_eq!(explicit.filler_config().sections, Some(12));

        let absent = Cli::parse_from(["holefill", "-i", "a.png", "-m", "b.png"]);
        assert_eq!(absent.filler_config().sections, None);
    }

    // Tests negative values reach validation instead of being read as flags
    #[test]
    fn test_cli_accepts_negative_numbers() {
        let cli = Cli::parse_from(["holefill", "-i", "a.png", "-m", "b.png", "-z", "-3"]);
        assert_eq!(cli.z_factor, -3);
        assert!(cli.filler_config().validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let quiet = Cli::parse_from(["holefill", "-i", "a", "-m", "b", "-q", "-vv"]);
        assert_eq!(quiet.log_level(), "error");
        let default = Cli::parse_from(["holefill", "-i", "a", "-m", "b"]);
        assert_eq!(default.log_level(), "warn");
        let debug = Cli::parse_from(["holefill", "-i", "a", "-m", "b", "-vv"]);
        assert_eq!(debug.log_level(), "debug");
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("data/photo.jpg")),
            PathBuf::from("data/photo_filled.png")
        );
        assert_eq!(
            default_output_path(Path::new("photo.png")),
            PathBuf::from("photo_filled.png")
        );
    }

    // Tests invalid configuration fails before any file is touched
    #[test]
    fn test_run_rejects_config_before_loading() {
        let cli = Cli::parse_from([
            "holefill",
            "-i",
            "does/not/exist.png",
            "-m",
            "does/not/exist.png",
            "-e",
            "0",
            "-q",
        ]);
        let result = HoleFillApp::new(cli).run();
        assert!(matches!(
            result,
            Err(HoleFillError::InvalidParameter {
                parameter: "epsilon",
                ..
            })
        ));
    }

    // Tests a full run fills every masked pixel and writes the output
    #[test]
    fn test_run_end_to_end() {
        let Ok(dir) = TempDir::new() else {
            return;
        };
        let image_path = dir.path().join("photo.png");
        let mask_path = dir.path().join("mask.png");

        let img = RgbImage::from_pixel(8, 8, Rgb([102, 102, 102]));
        let mut mask = RgbImage::from_pixel(8, 8, Rgb([255, 255, 255]));
        for (x, y) in [(2, 2), (3, 2), (6, 6)] {
            mask.put_pixel(x, y, Rgb([0, 0, 0]));
        }
        assert!(img.save(&image_path).is_ok());
        assert!(mask.save(&mask_path).is_ok());

        let args = [
            "holefill",
            "-i",
            image_path.to_str().unwrap_or_default(),
            "-m",
            mask_path.to_str().unwrap_or_default(),
            "--all-holes",
            "-s",
            "4",
            "-q",
        ];
        let Ok(reports) = HoleFillApp::new(Cli::parse_from(args)).run() else {
            unreachable!("end-to-end run failed");
        };
        assert_eq!(reports.len(), 2);

        let output = dir.path().join("photo_filled.png");
        let Ok(filled) = image::open(&output).map(|img| img.to_luma8()) else {
            unreachable!("output image missing");
        };
        assert!(filled.pixels().all(|p| p.0 == [102]));
    }
}
