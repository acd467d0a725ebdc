//! Mapping between model space and the canvas.
//!
//! Model space is centred on the origin with y pointing up; the canvas has
//! its origin in the top-left corner with y pointing down (the convention of
//! window cursor positions). The window shows `dimension` model units.

use crate::simulation::states::Vec2d;

#[derive(Debug, Clone)]
pub struct ViewTransform {
    pub width: f64, // canvas width, pixels
    pub height: f64, // canvas height, pixels
    pub dimension: [f64; 2], // visible model extent
}

impl ViewTransform {
    pub fn new(width: f64, height: f64, dimension: [f64; 2]) -> Self {
        Self { width, height, dimension }
    }

    /// Pixels per model unit along x
    pub fn x_ratio(&self) -> f64 {
        self.width / self.dimension[0]
    }

    /// Pixels per model unit along y
    pub fn y_ratio(&self) -> f64 {
        self.height / self.dimension[1]
    }

    /// Model position -> canvas pixel
    pub fn to_canvas(&self, x: &Vec2d) -> [f64; 2] {
        [
            x.a() * self.x_ratio() + self.width / 2.0,
            self.height / 2.0 - x.b() * self.y_ratio(),
        ]
    }

    /// Canvas pixel -> model position
    pub fn to_model(&self, c: [f64; 2]) -> Vec2d {
        Vec2d::new(
            (c[0] - self.width / 2.0) / self.x_ratio(),
            (self.height / 2.0 - c[1]) / self.y_ratio(),
        )
    }

    /// Canvas pixel -> renderer coordinates (origin at the centre, y up)
    pub fn canvas_to_centered(&self, c: [f64; 2]) -> [f64; 2] {
        [c[0] - self.width / 2.0, self.height / 2.0 - c[1]]
    }

    /// Model position -> renderer coordinates
    pub fn to_centered(&self, x: &Vec2d) -> [f64; 2] {
        [x.a() * self.x_ratio(), x.b() * self.y_ratio()]
    }

    /// Whether `x` lands on the canvas (edges included)
    pub fn contains(&self, x: &Vec2d) -> bool {
        let [cx, cy] = self.to_canvas(x);
        cx >= 0.0 && cx <= self.width && cy >= 0.0 && cy <= self.height
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(500.0, 500.0, [50.0, 50.0])
    }
}
