use serde::{Deserialize, Serialize};

use crate::model::Point;

/// Data units of padding added on every side of the points.
pub const RANGE_MARGIN: f64 = 1.0;

/// Data-space bounding box of a question's points, padded by [`RANGE_MARGIN`].
///
/// Recomputed on every render; never stored alongside the question.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataRange {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl DataRange {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// True if `point` lies strictly inside the range.
    #[must_use]
    pub fn strictly_contains(&self, point: Point) -> bool {
        point.x > self.min_x && point.x < self.max_x && point.y > self.min_y && point.y < self.max_y
    }

    /// `i / steps` of the way from `min_x` to `max_x`.
    #[must_use]
    pub fn lerp_x(&self, i: usize, steps: usize) -> f64 {
        self.min_x + fraction(i, steps) * self.width()
    }

    /// `i / steps` of the way from `max_y` down to `min_y`.
    #[must_use]
    pub fn lerp_y_down(&self, i: usize, steps: usize) -> f64 {
        self.max_y - fraction(i, steps) * self.height()
    }
}

/// The margin around the origin; used when there is nothing to enclose.
impl Default for DataRange {
    fn default() -> Self {
        Self {
            min_x: -RANGE_MARGIN,
            max_x: RANGE_MARGIN,
            min_y: -RANGE_MARGIN,
            max_y: RANGE_MARGIN,
        }
    }
}

/// Bounding box of `points` widened by one margin on every side.
///
/// Returns `None` for an empty slice. Both spans are at least
/// `2 * RANGE_MARGIN`, even when every point shares an x or y value. At
/// large magnitudes the margin grows so the padding survives rounding.
#[must_use]
pub fn compute_range(points: &[Point]) -> Option<DataRange> {
    let (first, rest) = points.split_first()?;
    let init = DataRange {
        min_x: first.x,
        max_x: first.x,
        min_y: first.y,
        max_y: first.y,
    };
    let bounds = rest.iter().fold(init, |acc, point| DataRange {
        min_x: acc.min_x.min(point.x),
        max_x: acc.max_x.max(point.x),
        min_y: acc.min_y.min(point.y),
        max_y: acc.max_y.max(point.y),
    });

    let (min_x, max_x) = pad(bounds.min_x, bounds.max_x);
    let (min_y, max_y) = pad(bounds.min_y, bounds.max_y);
    Some(DataRange {
        min_x,
        max_x,
        min_y,
        max_y,
    })
}

/// Widen `[lo, hi]` by the margin, or by a few ulps of the larger end when
/// that is bigger.
fn pad(lo: f64, hi: f64) -> (f64, f64) {
    let magnitude = lo.abs().max(hi.abs());
    let margin = RANGE_MARGIN.max(magnitude * f64::EPSILON * 4.0);
    (lo - margin, hi + margin)
}

#[allow(clippy::cast_precision_loss)]
fn fraction(i: usize, steps: usize) -> f64 {
    if steps == 0 {
        return 0.0;
    }
    i as f64 / steps as f64
}
