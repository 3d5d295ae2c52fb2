/// Converts one RGB pixel to 8-bit HSV: H in `0..180`, S and V in `0..=255`.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> [u8; 3] {
    let v = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = (v - min) as f32;

    let s = if v == 0 {
        0.0
    } else {
        diff * 255.0 / v as f32
    };

    let (r, g, b) = (r as f32, g as f32, b as f32);
    let mut h = if diff == 0.0 {
        0.0
    } else if v as f32 == r {
        60.0 * (g - b) / diff
    } else if v as f32 == g {
        120.0 + 60.0 * (b - r) / diff
    } else {
        240.0 + 60.0 * (r - g) / diff
    };
    if h < 0.0 {
        h += 360.0;
    }

    let h = (h / 2.0).round() as u32 % 180;
    [h as u8, s.round() as u8, v]
}

/// Inclusive per-channel range test.
pub fn in_range(hsv: [u8; 3], lower: [u8; 3], upper: [u8; 3]) -> bool {
    (0..3).all(|c| lower[c] <= hsv[c] && hsv[c] <= upper[c])
}
