use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::pipeline::scan_error::ScanError;
use crate::pipeline::scan_video_use_case::ScanOutcome;

/// Append-only text sink with one line per scanned video.
///
/// Every line is flushed as soon as it is written. The underlying writer is
/// closed when the log is dropped, whichever way the batch ends.
pub struct ReleaseLog<W: Write> {
    writer: W,
}

impl ReleaseLog<BufWriter<File>> {
    /// Creates (or truncates) the log file at `path`.
    pub fn create(path: &Path) -> Result<Self, ScanError> {
        let file = File::create(path).map_err(|source| ScanError::CreateLog {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> ReleaseLog<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn record(&mut self, video_name: &str, outcome: &ScanOutcome) -> Result<(), ScanError> {
        writeln!(self.writer, "{}", format_line(video_name, outcome)).map_err(ScanError::WriteLog)?;
        self.writer.flush().map_err(ScanError::WriteLog)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

pub fn format_line(video_name: &str, outcome: &ScanOutcome) -> String {
    match outcome {
        ScanOutcome::Found { frame } => {
            format!("Ball released at frame {frame} for video {video_name}")
        }
        ScanOutcome::Exhausted { .. } => {
            format!("Ball release not found for video {video_name}")
        }
    }
}
