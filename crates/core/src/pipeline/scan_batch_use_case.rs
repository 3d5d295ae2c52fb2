use std::io::Write;
use std::path::{Path, PathBuf};

use crate::pipeline::release_log::ReleaseLog;
use crate::pipeline::scan_error::ScanError;
use crate::pipeline::scan_video_use_case::{ScanOutcome, ScanVideoUseCase};
use crate::video::infrastructure::video_directory::{list_videos, video_base_name};

/// Result of one video within a batch.
#[derive(Debug)]
pub struct VideoReport {
    pub name: String,
    pub path: PathBuf,
    pub outcome: Result<ScanOutcome, ScanError>,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub videos: Vec<VideoReport>,
}

impl BatchReport {
    pub fn found(&self) -> usize {
        self.count(|o| matches!(o, Ok(ScanOutcome::Found { .. })))
    }

    pub fn not_found(&self) -> usize {
        self.count(|o| matches!(o, Ok(ScanOutcome::Exhausted { .. })))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| o.is_err())
    }

    fn count(&self, pred: impl Fn(&Result<ScanOutcome, ScanError>) -> bool) -> usize {
        self.videos.iter().filter(|v| pred(&v.outcome)).count()
    }
}

/// Scans every video of a directory in base-name order, one after another,
/// recording each outcome in the result log.
///
/// A video that cannot be opened is reported and skipped; failing to list
/// the directory or to write the log ends the batch.
pub struct ScanBatchUseCase {
    scanner: ScanVideoUseCase,
    extension: String,
}

impl ScanBatchUseCase {
    pub fn new(scanner: ScanVideoUseCase, extension: impl Into<String>) -> Self {
        Self {
            scanner,
            extension: extension.into(),
        }
    }

    pub fn execute<W: Write>(
        &mut self,
        video_dir: &Path,
        release_log: &mut ReleaseLog<W>,
    ) -> Result<BatchReport, ScanError> {
        let videos =
            list_videos(video_dir, &self.extension).map_err(|source| ScanError::ListVideos {
                path: video_dir.to_path_buf(),
                source,
            })?;
        log::info!(
            "Found {} .{} videos in {}",
            videos.len(),
            self.extension,
            video_dir.display()
        );

        let mut report = BatchReport::default();
        for path in videos {
            let name = video_base_name(&path);
            log::info!("Processing {}", path.display());

            let outcome = self.scanner.execute(&path);
            match &outcome {
                Ok(result) => release_log.record(&name, result)?,
                Err(e) => log::error!("{e}"),
            }
            report.videos.push(VideoReport {
                name,
                path,
                outcome,
            });
        }

        self.scanner.logger().summary();
        Ok(report)
    }
}
