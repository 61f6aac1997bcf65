//! Tests for command-line parsing and the driver run

#[cfg(test)]
mod tests {
    use clap::Parser;
    use gaussmask::io::cli::{Cli, Runner, summarize};
    use gaussmask::io::configuration::{
        DEFAULT_COVARIANCE, DEFAULT_GRANULARITY, DEFAULT_SEED, DEFAULT_SIZE,
    };
    use gaussmask::{GridBounds, NoiseError};
    use image::{GrayImage, Luma};
    use ndarray::{ArrayD, IxDyn};
    use std::path::PathBuf;

    // Tests CLI parsing with only the required directory argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "images"]);

        assert_eq!(cli.target, PathBuf::from("images"));
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!((cli.width, cli.height), DEFAULT_SIZE);
        assert_eq!(cli.covariance, DEFAULT_COVARIANCE.concat());
        assert!((cli.granularity - DEFAULT_GRANULARITY).abs() < f64::EPSILON);
        assert_eq!(cli.bounds(), GridBounds::FirstAxis);
        assert!(!cli.overlays);
        assert!(cli.should_show_progress());
    }

    // Tests the short size flags are the upper-case initials
    // Verified by restoring the lower-case width flag
    #[test]
    fn test_cli_short_size_flags() {
        let cli = Cli::parse_from(["program", "images", "-W", "30", "-H", "20"]);

        assert_eq!((cli.width, cli.height), (30, 20));
        assert!(Cli::try_parse_from(["program", "images", "-w", "30"]).is_err());
    }

    // Tests CLI parsing with all available arguments
    // Verified by dropping the value delimiter
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "data",
            "--width",
            "64",
            "--height",
            "32",
            "--covariance",
            "4,-1,-1,9",
            "--seed",
            "7",
            "--granularity",
            "0.5",
            "--fig-width",
            "3",
            "--fig-height",
            "2",
            "--density-output",
            "out/d.png",
            "--mask-output",
            "out/m.png",
            "--full-bounds",
            "--overlays",
            "--quiet",
        ]);

        assert_eq!((cli.width, cli.height), (64, 32));
        assert_eq!(cli.covariance, vec![4.0, -1.0, -1.0, 9.0]);
        assert_eq!(cli.seed, 7);
        assert_eq!(cli.density_output, PathBuf::from("out/d.png"));
        assert_eq!(cli.mask_output, PathBuf::from("out/m.png"));
        assert_eq!(cli.bounds(), GridBounds::Full);
        assert!(cli.overlays);
        assert!(!cli.should_show_progress());

        let config = cli.config().unwrap();
        assert_eq!(config.size.shape(), (64, 32));
        assert_eq!(config.figsize, (3.0, 2.0));
        assert_eq!(config.seed, 7);
    }

    // Tests invalid covariance arguments fail during configuration
    // Verified by skipping covariance validation
    #[test]
    fn test_cli_invalid_covariance() {
        let cli = Cli::parse_from(["program", "data", "--covariance", "1,2,2,1"]);

        assert!(matches!(
            cli.config(),
            Err(NoiseError::InvalidCovariance { .. })
        ));
    }

    // Tests the driver writes both figures and streams overlays
    // Verified by skipping the mask heatmap
    #[test]
    fn test_runner_writes_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let images = dir.path().join("images");
        std::fs::create_dir_all(&images).unwrap();
        GrayImage::from_pixel(9, 9, Luma([50]))
            .save(images.join("a.png"))
            .unwrap();
        let density = dir.path().join("density.png");
        let mask = dir.path().join("mask.png");

        let cli = Cli::parse_from([
            "program".into(),
            images.into_os_string(),
            "--width".into(),
            "16".into(),
            "--height".into(),
            "16".into(),
            "--granularity".into(),
            "0.5".into(),
            "--fig-width".into(),
            "2".into(),
            "--fig-height".into(),
            "1".into(),
            "--density-output".into(),
            density.clone().into_os_string(),
            "--mask-output".into(),
            mask.clone().into_os_string(),
            "--overlays".into(),
            "--quiet".into(),
        ]);

        Runner::new(cli).run().unwrap();

        assert!(std::fs::metadata(&density).unwrap().len() > 0);
        assert!(std::fs::metadata(&mask).unwrap().len() > 0);
    }

    // Tests summaries report shape and value range
    // Verified by swapping minimum and maximum
    #[test]
    fn test_summarize() {
        let picture = ArrayD::from_shape_vec(IxDyn(&[2, 2]), vec![-1.5, 0.0, 2.0, 300.25]).unwrap();

        let summary = summarize(&picture);

        assert!(summary.contains("[2, 2]"));
        assert!(summary.contains("-1.500..300.250"));
    }
}
