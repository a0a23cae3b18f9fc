use std::io::Read;

use kurbo::{Circle, Point};

use crate::error::{EpsError, EpsResult};

/// RGB color, each channel in `0..=1`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// Axis-aligned bar in screen space (top-left origin, y down).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,  // >= 0
    pub height: i32, // >= 0
}

impl Rectangle {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Human-readable text, centered horizontally on `x`.
///
/// The text is written into a PostScript string literal as-is. Parentheses and
/// backslashes are not escaped, so a label containing them yields a malformed
/// document. Callers that cannot rule those characters out must not pass them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

impl TextLabel {
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
        }
    }
}

/// Square bounding box of a circle (top-left corner plus side length).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CircleBox {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl CircleBox {
    pub const fn new(x: f64, y: f64, size: f64) -> Self {
        Self { x, y, size }
    }

    pub fn from_circle(c: Circle) -> Self {
        Self {
            x: c.center.x - c.radius,
            y: c.center.y - c.radius,
            size: c.radius * 2.0,
        }
    }

    pub fn radius(self) -> f64 {
        self.size / 2.0
    }

    pub fn center(self) -> Point {
        let r = self.radius();
        Point::new(self.x + r, self.y + r)
    }

    pub fn to_circle(self) -> Circle {
        Circle::new(self.center(), self.radius())
    }
}

/// Concentric pair drawn as one ring: the outer disc minus the inner disc.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Ring {
    pub outer: CircleBox,
    pub inner: CircleBox,
}

impl Ring {
    pub const fn new(outer: CircleBox, inner: CircleBox) -> Self {
        Self { outer, inner }
    }

    pub fn from_circles(outer: Circle, inner: Circle) -> Self {
        Self {
            outer: CircleBox::from_circle(outer),
            inner: CircleBox::from_circle(inner),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hexagon {
    pub points: [Point; 6], // screen space, in drawing order
}

impl Hexagon {
    pub const fn new(points: [Point; 6]) -> Self {
        Self { points }
    }
}

fn default_foreground() -> Rgb {
    Rgb::BLACK
}

fn default_background() -> Rgb {
    Rgb::WHITE
}

/// Finished symbol geometry, immutable once built.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    width: u32,
    height: u32,
    #[serde(default)]
    title: String,
    #[serde(default = "default_foreground")]
    foreground: Rgb,
    #[serde(default = "default_background")]
    background: Rgb,
    #[serde(default)]
    rectangles: Vec<Rectangle>,
    #[serde(default)]
    labels: Vec<TextLabel>,
    #[serde(default)]
    rings: Vec<Ring>,
    #[serde(default)]
    hexagons: Vec<Hexagon>,
}

impl Scene {
    pub fn builder(width: u32, height: u32) -> SceneBuilder {
        SceneBuilder {
            scene: Scene {
                width,
                height,
                title: String::new(),
                foreground: Rgb::BLACK,
                background: Rgb::WHITE,
                rectangles: Vec::new(),
                labels: Vec::new(),
                rings: Vec::new(),
                hexagons: Vec::new(),
            },
        }
    }

    pub fn from_json_reader(reader: impl Read) -> EpsResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn foreground(&self) -> Rgb {
        self.foreground
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn hexagons(&self) -> &[Hexagon] {
        &self.hexagons
    }
}

/// Accumulates shapes in caller order. Rectangle order is significant: only
/// adjacent rectangles sharing height and y are merged into one row.
#[derive(Clone, Debug)]
pub struct SceneBuilder {
    scene: Scene,
}

impl SceneBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.scene.title = title.into();
        self
    }

    pub fn foreground(mut self, color: Rgb) -> Self {
        self.scene.foreground = color;
        self
    }

    pub fn background(mut self, color: Rgb) -> Self {
        self.scene.background = color;
        self
    }

    pub fn rectangle(mut self, rect: Rectangle) -> Self {
        self.scene.rectangles.push(rect);
        self
    }

    pub fn rectangles(mut self, rects: impl IntoIterator<Item = Rectangle>) -> Self {
        self.scene.rectangles.extend(rects);
        self
    }

    pub fn label(mut self, label: TextLabel) -> Self {
        self.scene.labels.push(label);
        self
    }

    pub fn ring(mut self, ring: Ring) -> Self {
        self.scene.rings.push(ring);
        self
    }

    /// Pairs a flat outer/inner box sequence: `(0, 1)`, `(2, 3)`, ...
    pub fn circle_boxes(mut self, boxes: impl IntoIterator<Item = CircleBox>) -> EpsResult<Self> {
        let boxes: Vec<CircleBox> = boxes.into_iter().collect();
        if boxes.len() % 2 != 0 {
            return Err(EpsError::validation(format!(
                "circle boxes come in outer/inner pairs, got {} boxes",
                boxes.len()
            )));
        }
        self.scene.rings.extend(
            boxes
                .chunks_exact(2)
                .map(|pair| Ring::new(pair[0], pair[1])),
        );
        Ok(self)
    }

    pub fn hexagon(mut self, hex: Hexagon) -> Self {
        self.scene.hexagons.push(hex);
        self
    }

    pub fn build(self) -> Scene {
        self.scene
    }
}
