use std::fmt;

/// Fixed two-decimal rendering used for every coordinate, radius and color channel.
///
/// Always `.` as the separator; Rust formatting does not consult the host locale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fixed2(pub f64);

impl fmt::Display for Fixed2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<i32> for Fixed2 {
    fn from(v: i32) -> Self {
        Self(f64::from(v))
    }
}

impl From<f64> for Fixed2 {
    fn from(v: f64) -> Self {
        Self(v)
    }
}

pub fn fixed2(v: impl Into<Fixed2>) -> String {
    v.into().to_string()
}
