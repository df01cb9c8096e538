use serde::{Deserialize, Serialize};

/// How [`RawBounds::contains`] compares a record against the box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsMode {
    /// `min_x <= X <= max_x` and `min_y <= Y <= max_y`.
    #[default]
    Strict,
    /// The comparison older tooling used: `X >= min_x`, `Y <= max_x`,
    /// `min_y <= Y <= max_y`. The upper X bound is checked against Y.
    Legacy,
}

/// A horizontal box in stored integer coordinates.
///
/// Bounds are inclusive and compared against raw (pre-transform) X/Y values,
/// so they must be expressed in the units of the file being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBounds {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
    #[serde(default)]
    pub mode: BoundsMode,
}

impl RawBounds {
    pub fn new(min_x: i64, max_x: i64, min_y: i64, max_y: i64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
            mode: BoundsMode::Strict,
        }
    }

    pub fn with_mode(mut self, mode: BoundsMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        let (x, y) = (i64::from(x), i64::from(y));
        let y_ok = y >= self.min_y && y <= self.max_y;
        match self.mode {
            BoundsMode::Strict => x >= self.min_x && x <= self.max_x && y_ok,
            BoundsMode::Legacy => x >= self.min_x && y <= self.max_x && y_ok,
        }
    }
}
