use image::imageops;
use imageproc::contours::find_contours;

use crate::shared::constants::NON_GRASS;
use crate::shared::mask::Mask;
use crate::shared::region::Region;

/// Traces every border of the nonzero components of `mask`, outer and hole
/// borders alike, keeping all border pixels.
///
/// Pixels outside the mask count as zero: tracing runs on a copy framed by a
/// one-pixel zero border, so components touching the image edge still get
/// an outer border, and `mask` itself is left untouched. Regions come back in
/// tracing order (raster order of their starting pixel), which carries no
/// spatial meaning for callers.
pub fn extract_regions(mask: &Mask) -> Vec<Region> {
    let mut framed = Mask::from_pixel(
        mask.width() + 2,
        mask.height() + 2,
        image::Luma([NON_GRASS]),
    );
    imageops::replace(&mut framed, mask, 1, 1);

    find_contours::<i32>(&framed)
        .into_iter()
        .map(|contour| {
            Region::new(
                contour
                    .points
                    .iter()
                    .map(|p| (p.x - 1, p.y - 1))
                    .collect(),
            )
        })
        .collect()
}
