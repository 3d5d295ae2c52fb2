pub mod pipeline_logger;
pub mod release_artifacts;
pub mod release_log;
pub mod scan_batch_use_case;
pub mod scan_error;
pub mod scan_video_use_case;
