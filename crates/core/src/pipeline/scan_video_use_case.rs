use std::path::Path;
use std::time::Instant;

use crate::detection::domain::ball_detector::BallDetector;
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::pipeline::release_artifacts::ReleaseArtifacts;
use crate::pipeline::scan_error::ScanError;
use crate::video::domain::video_reader::VideoReader;
use crate::video::infrastructure::video_directory::video_base_name;

/// Terminal state of one video scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The ball was first detected in this frame (1-based).
    Found { frame: usize },
    /// Every frame was scanned without a detection. Frames that failed to
    /// decode are included in the count.
    Exhausted { frames_scanned: usize },
}

impl ScanOutcome {
    pub fn release_frame(&self) -> Option<usize> {
        match *self {
            ScanOutcome::Found { frame } => Some(frame),
            ScanOutcome::Exhausted { .. } => None,
        }
    }
}

/// Scans one video front to back and stops at the first frame in which the
/// detector reports a released ball.
///
/// Frames are numbered from 1 in decode order. A frame that fails to decode
/// keeps its number and is skipped. Frames after the first detection are
/// never decoded.
pub struct ScanVideoUseCase {
    reader: Box<dyn VideoReader>,
    detector: Box<dyn BallDetector>,
    artifacts: Option<ReleaseArtifacts>,
    logger: Box<dyn PipelineLogger>,
}

impl ScanVideoUseCase {
    pub fn new(
        reader: Box<dyn VideoReader>,
        detector: Box<dyn BallDetector>,
        artifacts: Option<ReleaseArtifacts>,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self {
            reader,
            detector,
            artifacts,
            logger,
        }
    }

    pub fn execute(&mut self, video_path: &Path) -> Result<ScanOutcome, ScanError> {
        let metadata = self
            .reader
            .open(video_path)
            .map_err(|e| ScanError::OpenVideo {
                path: video_path.to_path_buf(),
                reason: e.to_string(),
            })?;
        let video_name = video_base_name(video_path);
        let total = metadata.total_frames;

        let mut outcome = ScanOutcome::Exhausted { frames_scanned: 0 };
        for (position, item) in self.reader.frames().enumerate() {
            let frame_number = position + 1;
            outcome = ScanOutcome::Exhausted {
                frames_scanned: frame_number,
            };
            let frame = match item {
                Ok(frame) => frame,
                Err(e) => {
                    log::warn!("{video_name}: skipping frame {frame_number}: {e}");
                    continue;
                }
            };

            let start = Instant::now();
            let detection = self.detector.detect(&frame);
            self.logger
                .timing("detect", start.elapsed().as_secs_f64() * 1000.0);
            self.logger.progress(frame_number, total);

            if detection.found() {
                if let Some(artifacts) = &self.artifacts {
                    let start = Instant::now();
                    if let Err(e) = artifacts.save(&video_name, frame_number, &frame, &detection) {
                        log::warn!(
                            "{video_name}: failed to save artifacts for frame {frame_number}: {e}"
                        );
                    }
                    self.logger
                        .timing("artifacts", start.elapsed().as_secs_f64() * 1000.0);
                }
                outcome = ScanOutcome::Found {
                    frame: frame_number,
                };
                break;
            }
        }
        self.reader.close();

        match outcome {
            ScanOutcome::Found { frame } => self
                .logger
                .info(&format!("{video_name}: ball released at frame {frame}")),
            ScanOutcome::Exhausted { frames_scanned } => self.logger.info(&format!(
                "{video_name}: no release found in {frames_scanned} frames"
            )),
        }
        Ok(outcome)
    }

    pub fn logger(&self) -> &dyn PipelineLogger {
        self.logger.as_ref()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::detection::domain::ball_detector::Detection;
    use crate::shared::frame::Frame;
    use crate::shared::mask::Mask;
    use crate::shared::region::Region;
    use crate::shared::video_metadata::VideoMetadata;
    use crate::pipeline::pipeline_logger::NullPipelineLogger;
    use crate::video::domain::image_writer::ImageWriter;
    use image::RgbImage;
    use std::collections::HashSet;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    // --- Stubs ---

    /// Yields `count` tiny frames; `broken` positions (0-based) fail to decode.
    pub struct StubReader {
        pub count: usize,
        pub broken: HashSet<usize>,
        pub fail_open: bool,
        pub decoded: Arc<Mutex<usize>>,
    }

    impl StubReader {
        pub fn new(count: usize) -> Self {
            Self {
                count,
                broken: HashSet::new(),
                fail_open: false,
                decoded: Arc::new(Mutex::new(0)),
            }
        }
    }

    impl VideoReader for StubReader {
        fn open(&mut self, path: &Path) -> Result<VideoMetadata, Box<dyn std::error::Error>> {
            if self.fail_open {
                return Err("cannot open".into());
            }
            Ok(VideoMetadata {
                width: 4,
                height: 4,
                fps: 30.0,
                total_frames: self.count,
                codec: "stub".to_string(),
                source_path: Some(path.to_path_buf()),
            })
        }

        fn frames(
            &mut self,
        ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_> {
            let broken = self.broken.clone();
            let decoded = self.decoded.clone();
            Box::new((0..self.count).map(move |i| -> Result<Frame, Box<dyn std::error::Error>> {
                *decoded.lock().unwrap() += 1;
                if broken.contains(&i) {
                    Err("corrupt packet".into())
                } else {
                    Ok(Frame::new(vec![0; 4 * 4 * 3], 4, 4, i))
                }
            }))
        }

        fn close(&mut self) {}
    }

    /// Reports a ball in the frames whose decode index is listed; records
    /// every index it classifies.
    pub struct StubDetector {
        pub hits: HashSet<usize>,
        pub seen: Arc<Mutex<Vec<usize>>>,
    }

    impl StubDetector {
        pub fn new(hits: &[usize]) -> Self {
            Self {
                hits: hits.iter().copied().collect(),
                seen: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl BallDetector for StubDetector {
        fn detect(&self, frame: &Frame) -> Detection {
            self.seen.lock().unwrap().push(frame.index());
            let accepted = if self.hits.contains(&frame.index()) {
                vec![Region::new(vec![(0, 0), (2, 0), (2, 2), (0, 2)])]
            } else {
                vec![]
            };
            Detection {
                mask: Mask::new(frame.width(), frame.height()),
                accepted,
                centroids: vec![],
            }
        }
    }

    #[derive(Clone, Default)]
    struct StubImageWriter {
        written: Arc<Mutex<Vec<PathBuf>>>,
    }

    impl ImageWriter for StubImageWriter {
        fn write_rgb(
            &self,
            path: &Path,
            _image: &RgbImage,
        ) -> Result<(), Box<dyn std::error::Error>> {
            self.written.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }

        fn write_mask(&self, path: &Path, _mask: &Mask) -> Result<(), Box<dyn std::error::Error>> {
            self.written.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }
    }

    struct FailingImageWriter;

    impl ImageWriter for FailingImageWriter {
        fn write_rgb(&self, _: &Path, _: &RgbImage) -> Result<(), Box<dyn std::error::Error>> {
            Err("disk full".into())
        }

        fn write_mask(&self, _: &Path, _: &Mask) -> Result<(), Box<dyn std::error::Error>> {
            Err("disk full".into())
        }
    }

    fn use_case(reader: StubReader, detector: StubDetector) -> ScanVideoUseCase {
        ScanVideoUseCase::new(
            Box::new(reader),
            Box::new(detector),
            None,
            Box::new(NullPipelineLogger),
        )
    }

    // --- Tests ---

    #[test]
    fn test_stops_at_first_detection() {
        let reader = StubReader::new(5);
        let decoded = reader.decoded.clone();
        // decode index 2 is frame number 3
        let detector = StubDetector::new(&[2]);
        let seen = detector.seen.clone();

        let outcome = use_case(reader, detector)
            .execute(Path::new("pitch.mp4"))
            .unwrap();

        assert_eq!(outcome, ScanOutcome::Found { frame: 3 });
        assert_eq!(outcome.release_frame(), Some(3));
        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
        assert_eq!(*decoded.lock().unwrap(), 3);
    }

    #[test]
    fn test_first_frame_is_numbered_one() {
        let outcome = use_case(StubReader::new(3), StubDetector::new(&[0]))
            .execute(Path::new("pitch.mp4"))
            .unwrap();
        assert_eq!(outcome, ScanOutcome::Found { frame: 1 });
    }

    #[test]
    fn test_reports_earliest_of_several_hits() {
        let outcome = use_case(StubReader::new(8), StubDetector::new(&[4, 6]))
            .execute(Path::new("pitch.mp4"))
            .unwrap();
        assert_eq!(outcome, ScanOutcome::Found { frame: 5 });
    }

    #[test]
    fn test_exhausted_when_nothing_found() {
        let detector = StubDetector::new(&[]);
        let seen = detector.seen.clone();
        let outcome = use_case(StubReader::new(5), detector)
            .execute(Path::new("pitch.mp4"))
            .unwrap();
        assert_eq!(outcome, ScanOutcome::Exhausted { frames_scanned: 5 });
        assert_eq!(outcome.release_frame(), None);
        assert_eq!(seen.lock().unwrap().len(), 5);
    }

    #[test]
    fn test_empty_video_is_exhausted() {
        let outcome = use_case(StubReader::new(0), StubDetector::new(&[]))
            .execute(Path::new("pitch.mp4"))
            .unwrap();
        assert_eq!(outcome, ScanOutcome::Exhausted { frames_scanned: 0 });
    }

    #[test]
    fn test_decode_failure_is_skipped_and_keeps_numbering() {
        let mut reader = StubReader::new(5);
        reader.broken.insert(1);
        let detector = StubDetector::new(&[3]);
        let seen = detector.seen.clone();

        let outcome = use_case(reader, detector)
            .execute(Path::new("pitch.mp4"))
            .unwrap();

        assert_eq!(outcome, ScanOutcome::Found { frame: 4 });
        assert_eq!(*seen.lock().unwrap(), vec![0, 2, 3]);
    }

    #[test]
    fn test_rejected_frame_before_release_keeps_release_number() {
        let mut reader = StubReader::new(3);
        reader.broken.insert(1);
        let outcome = use_case(reader, StubDetector::new(&[2]))
            .execute(Path::new("pitch.mp4"))
            .unwrap();
        assert_eq!(outcome, ScanOutcome::Found { frame: 3 });
    }

    #[test]
    fn test_trailing_decode_failures_count_as_scanned() {
        let mut reader = StubReader::new(5);
        reader.broken.extend([3, 4]);
        let outcome = use_case(reader, StubDetector::new(&[]))
            .execute(Path::new("pitch.mp4"))
            .unwrap();
        assert_eq!(outcome, ScanOutcome::Exhausted { frames_scanned: 5 });
    }

    #[test]
    fn test_open_failure_is_reported() {
        let mut reader = StubReader::new(5);
        reader.fail_open = true;
        let err = use_case(reader, StubDetector::new(&[]))
            .execute(Path::new("missing.mp4"))
            .unwrap_err();
        assert!(matches!(err, ScanError::OpenVideo { ref path, .. } if path == Path::new("missing.mp4")));
    }

    #[test]
    fn test_artifacts_written_for_detection_frame_only() {
        let writer = StubImageWriter::default();
        let written = writer.written.clone();
        let mut uc = ScanVideoUseCase::new(
            Box::new(StubReader::new(5)),
            Box::new(StubDetector::new(&[2])),
            Some(ReleaseArtifacts::new("/tmp/out", Box::new(writer))),
            Box::new(NullPipelineLogger),
        );
        uc.execute(Path::new("/videos/pitch_9.mp4")).unwrap();

        let written = written.lock().unwrap();
        assert_eq!(
            *written,
            vec![
                PathBuf::from("/tmp/out/pitch_9_3_mask.jpg"),
                PathBuf::from("/tmp/out/pitch_9_3_mask_contour.jpg"),
            ]
        );
    }

    #[test]
    fn test_artifact_failure_does_not_abort_scan() {
        let dir = tempfile::tempdir().unwrap();
        let mut uc = ScanVideoUseCase::new(
            Box::new(StubReader::new(5)),
            Box::new(StubDetector::new(&[1])),
            Some(ReleaseArtifacts::new(dir.path(), Box::new(FailingImageWriter))),
            Box::new(NullPipelineLogger),
        );
        let outcome = uc.execute(Path::new("pitch.mp4")).unwrap();
        assert_eq!(outcome, ScanOutcome::Found { frame: 2 });
    }

    #[test]
    fn test_scanner_is_reusable_across_videos() {
        let detector = StubDetector::new(&[0]);
        let seen = detector.seen.clone();
        let mut uc = use_case(StubReader::new(2), detector);
        uc.execute(Path::new("a.mp4")).unwrap();
        uc.execute(Path::new("b.mp4")).unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![0, 0]);
    }
}
