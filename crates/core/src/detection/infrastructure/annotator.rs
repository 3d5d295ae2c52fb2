use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};

use crate::detection::domain::ball_detector::Detection;
use crate::shared::frame::Frame;

const BORDER_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const CENTROID_COLOR: Rgb<u8> = Rgb([0, 0, 255]);

/// Half-width of the 5 px border stroke.
const BORDER_RADIUS: i32 = 2;
const CENTROID_RADIUS: i32 = 7;

/// Renders a detection onto a copy of its frame: accepted borders in red,
/// candidate centroids as filled blue dots.
pub fn annotate(frame: &Frame, detection: &Detection) -> RgbImage {
    let mut canvas = frame.to_rgb_image();

    for &(cx, cy) in &detection.centroids {
        draw_filled_circle_mut(&mut canvas, (cx, cy), CENTROID_RADIUS, CENTROID_COLOR);
    }

    for region in &detection.accepted {
        let points = region.points();
        for (i, &(x, y)) in points.iter().enumerate() {
            let (nx, ny) = points[(i + 1) % points.len()];
            draw_line_segment_mut(
                &mut canvas,
                (x as f32, y as f32),
                (nx as f32, ny as f32),
                BORDER_COLOR,
            );
            draw_filled_circle_mut(&mut canvas, (x, y), BORDER_RADIUS, BORDER_COLOR);
        }
    }

    canvas
}
