//! EPS document assembly.
//!
//! Sections are streamed in a fixed order: header, operator prelude, background
//! fill, rectangles, labels, rings, hexagons, footer. Each shape section is
//! skipped entirely when its sequence is empty.

pub mod prelude;
pub mod rows;
pub mod shapes;

use std::{
    io::{self, Write},
    path::Path,
};

use crate::{
    error::EpsResult,
    options::EpsOptions,
    scene::{Rgb, Scene},
    sink::FileSink,
    transform::FlipY,
};

use prelude::write_color;
use rows::RowMerger;

/// Streams one scene as an EPS document. Holds only a borrow of the scene.
#[derive(Clone, Debug)]
pub struct EpsWriter<'a> {
    scene: &'a Scene,
    options: EpsOptions,
}

impl<'a> EpsWriter<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Self {
            scene,
            options: EpsOptions::default(),
        }
    }

    pub fn with_options(mut self, options: EpsOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &EpsOptions {
        &self.options
    }

    #[tracing::instrument(skip_all, fields(width = self.scene.width(), height = self.scene.height()))]
    pub fn write_to<W: Write>(&self, w: &mut W) -> EpsResult<()> {
        self.options.validate()?;

        let scene = self.scene;
        let flip = FlipY::new(scene.height());
        let fg = scene.foreground();

        prelude::write_header(w, scene, &self.options)?;
        prelude::write_operators(w)?;
        prelude::write_background(w, scene)?;

        let rows = RowMerger::new(scene.rectangles()).write(w, flip, fg)?;

        // The background fill and every rectangle row leave `h y` on the stack.
        let mut row_open = true;

        if !scene.labels().is_empty() {
            begin_section(w, &mut row_open, fg)?;
            for label in scene.labels() {
                shapes::write_label(w, label, flip, &self.options)?;
            }
        }

        if !scene.rings().is_empty() {
            begin_section(w, &mut row_open, fg)?;
            for ring in scene.rings() {
                shapes::write_ring(w, ring, flip, self.options.ring_mapping)?;
            }
        }

        if !scene.hexagons().is_empty() {
            begin_section(w, &mut row_open, fg)?;
            for hex in scene.hexagons() {
                shapes::write_hexagon(w, hex, flip)?;
            }
        }

        write!(w, "\nshowpage\n")?;
        w.flush()?;

        tracing::debug!(
            rectangles = scene.rectangles().len(),
            rows,
            labels = scene.labels().len(),
            rings = scene.rings().len(),
            hexagons = scene.hexagons().len(),
            "eps document written"
        );
        Ok(())
    }

    pub fn to_eps_string(&self) -> EpsResult<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        // Every fragment is ASCII except caller text, which came in as UTF-8.
        String::from_utf8(buf).map_err(|e| anyhow::Error::new(e).into())
    }

    /// Writes to `path`. A regular-file destination is only replaced once the
    /// whole document is on disk; on failure it is left as it was.
    pub fn write_file(&self, path: impl AsRef<Path>) -> EpsResult<()> {
        let mut sink = FileSink::create(path.as_ref())?;
        match self.write_to(&mut sink) {
            Ok(()) => sink.finish()?,
            Err(err) => {
                let err = err.with_path(sink.path());
                sink.discard();
                return Err(err);
            }
        }
        tracing::debug!(path = %path.as_ref().display(), "eps file written");
        Ok(())
    }
}

/// Drops a pending row state with `TE`, then resets the drawing color.
fn begin_section<W: Write>(w: &mut W, row_open: &mut bool, color: Rgb) -> io::Result<()> {
    if std::mem::take(row_open) {
        writeln!(w, "TE")?;
    }
    write_color(w, color)
}

pub fn render_to_string(scene: &Scene) -> EpsResult<String> {
    EpsWriter::new(scene).to_eps_string()
}

pub fn write_eps_file(scene: &Scene, path: impl AsRef<Path>) -> EpsResult<()> {
    EpsWriter::new(scene).write_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{CircleBox, Rectangle, Ring, TextLabel};

    #[test]
    fn empty_scene_has_only_background_and_footer() {
        let scene = Scene::builder(50, 20).build();
        let out = render_to_string(&scene).unwrap();
        assert!(out.ends_with("20.00 0.00 TB 0.00 50.00 TR\n\nshowpage\n"));
        assert!(!out.contains("TE\n"));
    }

    #[test]
    fn sections_follow_fixed_order() {
        let scene = Scene::builder(40, 40)
            .ring(Ring::new(
                CircleBox::new(0.0, 0.0, 10.0),
                CircleBox::new(2.0, 2.0, 6.0),
            ))
            .label(TextLabel::new(20.0, 38.0, "X"))
            .rectangle(Rectangle::new(0, 0, 2, 30))
            .build();
        let out = render_to_string(&scene).unwrap();
        let rect = out.find("30.00 10.00 TB 0.00 2.00 TR\n").unwrap();
        let text = out.find("matrix currentmatrix").unwrap();
        let ring = out.find(" TC\n").unwrap();
        let end = out.find("showpage").unwrap();
        assert!(rect < text && text < ring && ring < end);
    }

    #[test]
    fn te_only_drops_an_open_row_state() {
        let hex = crate::scene::Hexagon::new([kurbo::Point::ZERO; 6]);
        let scene = Scene::builder(40, 40)
            .ring(Ring::new(
                CircleBox::new(0.0, 0.0, 10.0),
                CircleBox::new(2.0, 2.0, 6.0),
            ))
            .hexagon(hex)
            .build();
        let out = render_to_string(&scene).unwrap();
        // One TE for the background state before the rings, none before the hexagons.
        assert_eq!(out.matches("\nTE\n").count(), 1);
        let ring = out.find(" TC\n").unwrap();
        let hexes = out.find(" TH\n").unwrap();
        assert!(out[ring..hexes].contains("setrgbcolor"));
        assert!(!out[ring..hexes].contains("TE"));
    }

    #[test]
    fn invalid_options_fail_before_writing() {
        let scene = Scene::builder(1, 1).build();
        let opts = EpsOptions {
            font_size: -1.0,
            ..EpsOptions::default()
        };
        let mut buf = Vec::new();
        assert!(
            EpsWriter::new(&scene)
                .with_options(opts)
                .write_to(&mut buf)
                .is_err()
        );
        assert!(buf.is_empty());
    }
}
