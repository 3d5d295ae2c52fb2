use image::GrayImage;

use crate::shared::constants::GRASS;

/// Binary grass mask: [`GRASS`] inside the green band, `NON_GRASS` elsewhere.
/// Same dimensions as the frame it was built from.
pub type Mask = GrayImage;

/// Whether the pixel at `(x, y)` is grass. `None` outside the mask.
pub fn is_grass_at(mask: &Mask, x: i32, y: i32) -> Option<bool> {
    if x < 0 || y < 0 {
        return None;
    }
    mask.get_pixel_checked(x as u32, y as u32)
        .map(|p| p.0[0] == GRASS)
}
