use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use pitch_release_core::detection::infrastructure::grass_contour_detector::GrassContourDetector;
use pitch_release_core::pipeline::pipeline_logger::StdoutPipelineLogger;
use pitch_release_core::pipeline::release_artifacts::ReleaseArtifacts;
use pitch_release_core::pipeline::release_log::ReleaseLog;
use pitch_release_core::pipeline::scan_batch_use_case::{BatchReport, ScanBatchUseCase};
use pitch_release_core::pipeline::scan_video_use_case::ScanVideoUseCase;
use pitch_release_core::shared::constants::VIDEO_EXTENSION;
use pitch_release_core::shared::detection_config::DetectionConfig;
use pitch_release_core::video::infrastructure::ffmpeg_reader::FfmpegReader;
use pitch_release_core::video::infrastructure::image_file_writer::ImageFileWriter;

/// Finds the frame at which the pitcher releases the ball, for every video
/// in a directory.
#[derive(Parser, Debug)]
#[command(name = "pitch-release")]
struct Cli {
    /// Directory containing the pitch videos.
    video_dir: PathBuf,

    /// Result log, one line per video (overwritten).
    #[arg(long, default_value = "log.txt")]
    log: PathBuf,

    /// Save the mask and annotated frame of each release to this directory.
    #[arg(long)]
    out_img_dir: Option<PathBuf>,

    /// Extension of the video files to scan.
    #[arg(long, default_value = VIDEO_EXTENSION)]
    extension: String,

    /// JSON file with detection thresholds (missing fields use defaults).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Minimum ball area in pixels (overrides the config file).
    #[arg(long)]
    min_area: Option<f64>,

    /// Maximum ball area in pixels (overrides the config file).
    #[arg(long)]
    max_area: Option<f64>,

    /// Allowed distance of the bounding-box aspect ratio from 1.0.
    #[arg(long)]
    aspect_tolerance: Option<f64>,

    /// Log progress every N frames.
    #[arg(long, default_value = "25")]
    progress_every: usize,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(report) if report.failed() > 0 => process::exit(1),
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn run() -> Result<BatchReport, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;
    let config = build_config(&cli)?;

    let artifacts = cli
        .out_img_dir
        .as_ref()
        .map(|dir| ReleaseArtifacts::new(dir, Box::new(ImageFileWriter::new())));
    let scanner = ScanVideoUseCase::new(
        Box::new(FfmpegReader::new()),
        Box::new(GrassContourDetector::from_config(&config)),
        artifacts,
        Box::new(StdoutPipelineLogger::new(cli.progress_every)),
    );

    let mut release_log = ReleaseLog::create(&cli.log)?;
    let report = ScanBatchUseCase::new(scanner, cli.extension.as_str())
        .execute(&cli.video_dir, &mut release_log)?;

    log::info!(
        "Done: {} released, {} not found, {} failed. Results in {}",
        report.found(),
        report.not_found(),
        report.failed(),
        cli.log.display()
    );
    Ok(report)
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.video_dir.is_dir() {
        return Err(format!("Video directory not found: {}", cli.video_dir.display()).into());
    }
    if cli.extension.is_empty() || cli.extension.starts_with('.') {
        return Err(format!(
            "Extension must be given without a leading dot, got '{}'",
            cli.extension
        )
        .into());
    }
    if let Some(dir) = &cli.out_img_dir {
        if dir.is_file() {
            return Err(format!("Output image path is a file: {}", dir.display()).into());
        }
    }
    Ok(())
}

fn build_config(cli: &Cli) -> Result<DetectionConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => DetectionConfig::default(),
    };
    if let Some(min_area) = cli.min_area {
        config.min_area = min_area;
    }
    if let Some(max_area) = cli.max_area {
        config.max_area = max_area;
    }
    if let Some(tolerance) = cli.aspect_tolerance {
        config.aspect_ratio_tolerance = tolerance;
    }
    config.validate()?;
    Ok(config)
}

fn load_config(path: &Path) -> Result<DetectionConfig, Box<dyn std::error::Error>> {
    let config = DetectionConfig::load(path)?;
    log::info!("Loaded detection config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("pitch-release").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["videos"]);
        assert_eq!(cli.video_dir, PathBuf::from("videos"));
        assert_eq!(cli.log, PathBuf::from("log.txt"));
        assert_eq!(cli.extension, "mp4");
        assert!(cli.out_img_dir.is_none());
        assert_eq!(build_config(&cli).unwrap(), DetectionConfig::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "min_area": 300.0, "max_area": 800.0 }"#).unwrap();

        let cli = parse(&[
            "videos",
            "--config",
            path.to_str().unwrap(),
            "--max-area",
            "900",
            "--aspect-tolerance",
            "0.25",
        ]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.min_area, 300.0);
        assert_eq!(config.max_area, 900.0);
        assert_eq!(config.aspect_ratio_tolerance, 0.25);
    }

    #[test]
    fn test_inverted_area_flags_are_rejected() {
        let cli = parse(&["videos", "--min-area", "900", "--max-area", "100"]);
        assert!(build_config(&cli).is_err());
    }

    #[test]
    fn test_validate_rejects_missing_directory() {
        let cli = parse(&["/nonexistent/videos"]);
        assert!(validate(&cli).is_err());
    }

    #[test]
    fn test_validate_rejects_dotted_extension() {
        let dir = tempfile::tempdir().unwrap();
        let cli = parse(&[dir.path().to_str().unwrap(), "--extension", ".mp4"]);
        assert!(validate(&cli).is_err());
    }
}
