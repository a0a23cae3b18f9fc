use std::io::{self, Write};

use crate::{
    format::Fixed2,
    options::EpsOptions,
    scene::{Rgb, Scene},
};

/// Operator macros shared by every section. Stack contracts:
///
/// - `TL`: `width x1 y1 x2 y2`, stroked line.
/// - `TC`: `cx1 cy1 r1 cx2 cy2 r2`, outer disc minus inner disc (nonzero winding).
/// - `TH`: six `x y` pairs, filled closed hexagon.
/// - `TB`: `h y`, duplicated so the row state survives each `TR`.
/// - `TR`: `h y x w` (after `TB`), box from `(x, y)` of size `w` x `h`, filled.
/// - `TE`: drops the row state left by `TB`.
pub const OPERATORS: &str = "\
/TL { setlinewidth moveto lineto stroke } bind def
/TC { newpath 6 3 roll 0 360 arc closepath 360 0 arcn closepath fill } bind def
/TH { 0 setlinewidth moveto lineto lineto lineto lineto lineto closepath fill } bind def
/TB { 2 copy } bind def
/TR { newpath 4 1 roll exch moveto 1 index 0 rlineto 0 exch rlineto neg 0 rlineto closepath fill } bind def
/TE { pop pop } bind def
newpath
";

pub fn write_header<W: Write>(w: &mut W, scene: &Scene, options: &EpsOptions) -> io::Result<()> {
    let title = if scene.title().is_empty() {
        options.default_title.as_str()
    } else {
        scene.title()
    };

    writeln!(w, "%!PS-Adobe-3.0 EPSF-3.0")?;
    writeln!(w, "%%Creator: {}", options.creator)?;
    writeln!(w, "%%Title: {title}")?;
    writeln!(w, "%%Pages: 0")?;
    writeln!(w, "%%BoundingBox: 0 0 {} {}", scene.width(), scene.height())?;
    writeln!(w, "%%EndComments")
}

pub fn write_operators<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(OPERATORS.as_bytes())
}

pub fn write_color<W: Write>(w: &mut W, c: Rgb) -> io::Result<()> {
    writeln!(
        w,
        "{} {} {} setrgbcolor",
        Fixed2(c.r),
        Fixed2(c.g),
        Fixed2(c.b)
    )
}

/// Whole-canvas fill. Dimensions are integer literals with a `.00` suffix.
pub fn write_background<W: Write>(w: &mut W, scene: &Scene) -> io::Result<()> {
    write_color(w, scene.foreground())?;
    write_color(w, scene.background())?;
    writeln!(
        w,
        "{}.00 0.00 TB 0.00 {}.00 TR",
        scene.height(),
        scene.width()
    )
}
