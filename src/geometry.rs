//! Screen-space rectangles and how containers split them between children.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in screen coordinates. The origin is the top-left
/// corner and `y` grows downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The x coordinate of the right edge. Widened so it can't overflow.
    pub const fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// The y coordinate of the bottom edge. Widened so it can't overflow.
    pub const fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Whether both far edges can be represented as `i32` coordinates.
    pub const fn fits(&self) -> bool {
        self.right() <= i32::MAX as i64 && self.bottom() <= i32::MAX as i64
    }

    /// The centre point, relative to the top-left corner.
    pub const fn local_centre(&self) -> (i32, i32) {
        (self.width / 2, self.height / 2)
    }
}

impl From<[i32; 4]> for Rect {
    fn from([x, y, width, height]: [i32; 4]) -> Self {
        Self::new(x, y, width, height)
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

/// How a container lays out its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    /// Children sit side by side, sharing the container's width.
    Horizontal,
    /// Children are stacked, sharing the container's height.
    Vertical,
}

impl Split {
    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Horizontal => "horizontal",
            Split::Vertical => "vertical",
        }
    }
}

/// Divides `rect` along `split` between children weighted by `ratios`.
///
/// Each child's start and end are taken from the running ratio total, so the
/// returned rectangles tile `rect` exactly with no gaps left by rounding.
pub fn split_rect(rect: Rect, split: Split, ratios: &[u32]) -> Vec<Rect> {
    let total: u64 = ratios.iter().map(|&ratio| u64::from(ratio)).sum();
    if total == 0 {
        return vec![rect; ratios.len()];
    }

    let length = match split {
        Split::Horizontal => rect.width,
        Split::Vertical => rect.height,
    };
    let length = i64::from(length);
    let offset_at = |cumulative: u64| (length * cumulative as i64 / total as i64) as i32;

    let mut cumulative = 0;
    ratios
        .iter()
        .map(|&ratio| {
            let start = offset_at(cumulative);
            cumulative += u64::from(ratio);
            let end = offset_at(cumulative);

            match split {
                Split::Horizontal => Rect::new(rect.x + start, rect.y, end - start, rect.height),
                Split::Vertical => Rect::new(rect.x, rect.y + start, rect.width, end - start),
            }
        })
        .collect()
}
