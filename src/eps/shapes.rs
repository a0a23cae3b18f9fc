use std::io::{self, Write};

use crate::{
    format::Fixed2,
    options::{EpsOptions, RingMapping},
    scene::{Hexagon, Ring, TextLabel},
    transform::FlipY,
};

/// Centered label. The text goes into the string literal unescaped.
pub fn write_label<W: Write>(
    w: &mut W,
    label: &TextLabel,
    flip: FlipY,
    options: &EpsOptions,
) -> io::Result<()> {
    writeln!(w, "matrix currentmatrix")?;
    writeln!(w, "/{} findfont", options.font_name)?;
    writeln!(w, "{} scalefont setfont", Fixed2(options.font_size))?;
    writeln!(
        w,
        " 0 0 moveto {} {} translate 0.00 rotate 0 0 moveto",
        Fixed2(label.x),
        Fixed2(flip.flip(label.y))
    )?;
    writeln!(w, " ({}) stringwidth", label.text)?;
    writeln!(w, "pop")?;
    writeln!(w, "-2 div 0 rmoveto")?;
    writeln!(w, " ({}) show", label.text)?;
    writeln!(w, "setmatrix")
}

/// `TC` operands for one ring: outer `(a, b, r)` then inner `(a, b, r)`.
pub fn ring_operands(ring: &Ring, flip: FlipY, mapping: RingMapping) -> [f64; 6] {
    let (o, i) = (ring.outer, ring.inner);
    let (ro, ri) = (o.radius(), i.radius());
    match mapping {
        RingMapping::Legacy => [
            flip.flip(o.x) + ro,
            o.y + ro,
            ro,
            i.x + ri,
            flip.flip(i.y) + ri,
            ri,
        ],
        RingMapping::Mirrored => {
            let (co, ci) = (flip.flip_point(o.center()), flip.flip_point(i.center()));
            [co.x, co.y, ro, ci.x, ci.y, ri]
        }
    }
}

pub fn write_ring<W: Write>(
    w: &mut W,
    ring: &Ring,
    flip: FlipY,
    mapping: RingMapping,
) -> io::Result<()> {
    let [a1, b1, r1, a2, b2, r2] = ring_operands(ring, flip, mapping);
    writeln!(
        w,
        "{} {} {} {} {} {} TC",
        Fixed2(a1),
        Fixed2(b1),
        Fixed2(r1),
        Fixed2(a2),
        Fixed2(b2),
        Fixed2(r2)
    )
}

pub fn write_hexagon<W: Write>(w: &mut W, hex: &Hexagon, flip: FlipY) -> io::Result<()> {
    for p in hex.points.iter().map(|&p| flip.flip_point(p)) {
        write!(w, "{} {} ", Fixed2(p.x), Fixed2(p.y))?;
    }
    writeln!(w, " TH")
}
