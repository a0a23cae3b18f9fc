use std::{
    io::{self, Write},
    ops::Range,
};

use crate::{
    eps::prelude::write_color,
    format::Fixed2,
    scene::{Rectangle, Rgb},
    transform::FlipY,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RowKey {
    pub height: i32,
    pub y: i32,
}

impl RowKey {
    pub fn of(rect: &Rectangle) -> Self {
        Self {
            height: rect.height,
            y: rect.y,
        }
    }
}

/// A maximal run of adjacent rectangles sharing one `RowKey`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub key: RowKey,
    pub range: Range<usize>, // indices into the rectangle slice
}

/// Groups rectangles into rows by adjacency only. Input order is never changed:
/// equal keys separated by another key start a new row.
#[derive(Clone, Copy, Debug)]
pub struct RowMerger<'a> {
    rects: &'a [Rectangle],
}

impl<'a> RowMerger<'a> {
    pub fn new(rects: &'a [Rectangle]) -> Self {
        Self { rects }
    }

    pub fn rows(&self) -> Vec<Row> {
        let mut rows: Vec<Row> = Vec::new();
        for (i, rect) in self.rects.iter().enumerate() {
            let key = RowKey::of(rect);
            if let Some(row) = rows.last_mut().filter(|row| row.key == key) {
                row.range.end = i + 1;
                continue;
            }
            rows.push(Row {
                key,
                range: i..i + 1,
            });
        }
        rows
    }

    /// Emits every row as `TE`, a color line, the shared `h y` header and one
    /// `TB x w TR` per rectangle. Returns the number of rows written.
    pub fn write<W: Write>(&self, w: &mut W, flip: FlipY, color: Rgb) -> io::Result<usize> {
        let rows = self.rows();
        for row in &rows {
            writeln!(w, "TE")?;
            write_color(w, color)?;
            let height = f64::from(row.key.height);
            write!(
                w,
                "{} {} ",
                Fixed2(height),
                Fixed2(flip.flip_box(f64::from(row.key.y), height))
            )?;
            for rect in &self.rects[row.range.clone()] {
                writeln!(w, "TB {} {} TR", Fixed2::from(rect.x), Fixed2::from(rect.width))?;
            }
        }
        Ok(rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: i32, y: i32, width: i32, height: i32) -> Rectangle {
        Rectangle::new(x, y, width, height)
    }

    #[test]
    fn empty_input_has_no_rows() {
        assert!(RowMerger::new(&[]).rows().is_empty());
        let mut buf = Vec::new();
        let n = RowMerger::new(&[])
            .write(&mut buf, FlipY::new(10), Rgb::BLACK)
            .unwrap();
        assert_eq!(n, 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn adjacent_equal_keys_share_a_row() {
        let rects = [r(0, 0, 10, 5), r(10, 0, 5, 5), r(0, 5, 3, 5)];
        let rows = RowMerger::new(&rects).rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].range, 0..2);
        assert_eq!(rows[1].range, 2..3);
    }

    #[test]
    fn separated_equal_keys_do_not_merge() {
        let rects = [r(0, 0, 10, 5), r(0, 9, 1, 1), r(10, 0, 5, 5)];
        let rows = RowMerger::new(&rects).rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].key, rows[2].key);
    }

    #[test]
    fn same_y_different_height_splits() {
        let rects = [r(0, 0, 1, 5), r(1, 0, 1, 6)];
        assert_eq!(RowMerger::new(&rects).rows().len(), 2);
    }

    #[test]
    fn writes_shared_header_once_per_row() {
        let rects = [r(0, 0, 10, 5), r(10, 0, 5, 5)];
        let mut buf = Vec::new();
        let n = RowMerger::new(&rects)
            .write(&mut buf, FlipY::new(20), Rgb::BLACK)
            .unwrap();
        assert_eq!(n, 1);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "TE\n\
             0.00 0.00 0.00 setrgbcolor\n\
             5.00 15.00 TB 0.00 10.00 TR\n\
             TB 10.00 5.00 TR\n"
        );
    }
}
