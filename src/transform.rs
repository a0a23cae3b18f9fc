use kurbo::Point;

/// Mirrors top-down screen coordinates into PostScript's bottom-up page space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlipY {
    height: f64,
}

impl FlipY {
    pub fn new(height: u32) -> Self {
        Self {
            height: f64::from(height),
        }
    }

    pub fn height(self) -> f64 {
        self.height
    }

    pub fn flip(self, y: f64) -> f64 {
        self.height - y
    }

    /// Lower edge of a top-down box once mirrored: `H - y - h`.
    pub fn flip_box(self, y: f64, h: f64) -> f64 {
        self.height - y - h
    }

    pub fn flip_point(self, p: Point) -> Point {
        Point::new(p.x, self.flip(p.y))
    }
}
