#![forbid(unsafe_code)]

pub mod eps;
pub mod error;
pub mod format;
pub mod options;
pub mod scene;
pub mod sink;
pub mod transform;

pub use eps::{EpsWriter, render_to_string, write_eps_file};
pub use error::{EpsError, EpsResult};
pub use format::{Fixed2, fixed2};
pub use kurbo::{Circle, Point};
pub use options::{EpsOptions, RingMapping};
pub use scene::{CircleBox, Hexagon, Rectangle, Rgb, Ring, Scene, SceneBuilder, TextLabel};
pub use sink::FileSink;
pub use transform::FlipY;
