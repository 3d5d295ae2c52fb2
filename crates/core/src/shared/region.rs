/// Axis-aligned bounding box in pixels; `width`/`height` are inclusive extents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BoundingBox {
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// Raw spatial moments of a closed polygon, sign-normalised so `m00 >= 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Moments {
    pub m00: f64,
    pub m10: f64,
    pub m01: f64,
}

impl Moments {
    /// Centroid truncated toward zero, or `None` for a massless polygon.
    pub fn centroid(&self) -> Option<(i32, i32)> {
        if self.m00 == 0.0 {
            return None;
        }
        Some(((self.m10 / self.m00) as i32, (self.m01 / self.m00) as i32))
    }
}

/// A candidate blob: the traced border of one connected mask component.
///
/// The border is treated as a closed polygon through every point, so area
/// and moments follow Green's theorem rather than pixel counting.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    points: Vec<(i32, i32)>,
}

impl Region {
    pub fn new(points: Vec<(i32, i32)>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[(i32, i32)] {
        &self.points
    }

    /// Unsigned polygon area.
    pub fn area(&self) -> f64 {
        self.moments().m00
    }

    pub fn moments(&self) -> Moments {
        let n = self.points.len();
        let (mut a00, mut a10, mut a01) = (0.0f64, 0.0f64, 0.0f64);
        for i in 0..n {
            let (xi, yi) = self.points[i];
            let (xj, yj) = self.points[(i + 1) % n];
            let (xi, yi, xj, yj) = (xi as f64, yi as f64, xj as f64, yj as f64);
            let cross = xi * yj - xj * yi;
            a00 += cross;
            a10 += cross * (xi + xj);
            a01 += cross * (yi + yj);
        }
        let sign = if a00 < 0.0 { -1.0 } else { 1.0 };
        Moments {
            m00: sign * a00 / 2.0,
            m10: sign * a10 / 6.0,
            m01: sign * a01 / 6.0,
        }
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let (&(x0, y0), rest) = self.points.split_first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (x0, y0, x0, y0);
        for &(x, y) in rest {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        Some(BoundingBox {
            x: min_x,
            y: min_y,
            width: max_x - min_x + 1,
            height: max_y - min_y + 1,
        })
    }
}
