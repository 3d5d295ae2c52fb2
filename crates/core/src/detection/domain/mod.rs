pub mod ball_classifier;
pub mod ball_detector;
