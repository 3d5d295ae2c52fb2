pub mod constants;
pub mod detection_config;
pub mod frame;
pub mod mask;
pub mod region;
pub mod video_metadata;
