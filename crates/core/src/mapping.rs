use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::range::DataRange;

/// Size of the drawing surface in view units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum ViewportError {
    #[error("viewport dimensions must be finite and positive")]
    InvalidSize,
    #[error("padding {padding} leaves no room to plot in a {width}x{height} viewport")]
    PaddingTooLarge {
        width: f64,
        height: f64,
        padding: f64,
    },
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            padding: 40.0,
        }
    }
}

impl Viewport {
    /// Build a viewport that leaves a non-empty plotting area.
    ///
    /// # Errors
    ///
    /// Returns `ViewportError::InvalidSize` for non-positive or non-finite input.
    /// Returns `ViewportError::PaddingTooLarge` if the padding swallows the plot area.
    pub fn new(width: f64, height: f64, padding: f64) -> Result<Self, ViewportError> {
        let viewport = Self {
            width,
            height,
            padding,
        };
        viewport.validate()?;
        Ok(viewport)
    }

    /// # Errors
    ///
    /// See [`Viewport::new`].
    pub fn validate(&self) -> Result<(), ViewportError> {
        let finite = [self.width, self.height, self.padding]
            .iter()
            .all(|value| value.is_finite());
        if !finite || self.width <= 0.0 || self.height <= 0.0 || self.padding < 0.0 {
            return Err(ViewportError::InvalidSize);
        }
        if self.padding * 2.0 >= self.width || self.padding * 2.0 >= self.height {
            return Err(ViewportError::PaddingTooLarge {
                width: self.width,
                height: self.height,
                padding: self.padding,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.width - self.padding
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.height - self.padding
    }

    #[must_use]
    pub fn plot_width(&self) -> f64 {
        self.width - self.padding * 2.0
    }

    #[must_use]
    pub fn plot_height(&self) -> f64 {
        self.height - self.padding * 2.0
    }
}

/// A position on the view surface. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewPoint {
    pub x: f64,
    pub y: f64,
}

impl ViewPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Affine map from a data range onto a viewport's plotting area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    range: DataRange,
    viewport: Viewport,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(range: DataRange, viewport: Viewport) -> Self {
        Self { range, viewport }
    }

    #[must_use]
    pub fn range(&self) -> &DataRange {
        &self.range
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Map a data-space coordinate. No clamping: values outside the range
    /// land outside the plotting area.
    #[must_use]
    pub fn to_view(&self, x: f64, y: f64) -> ViewPoint {
        let range = &self.range;
        let viewport = &self.viewport;
        let tx = (x - range.min_x) / range.width();
        let ty = (y - range.min_y) / range.height();
        ViewPoint {
            x: viewport.left() + tx * viewport.plot_width(),
            y: viewport.top() + (1.0 - ty) * viewport.plot_height(),
        }
    }
}

/// Map `(x, y)` from `range` into `viewport`; see [`CoordinateMapper::to_view`].
#[must_use]
pub fn to_view(x: f64, y: f64, range: &DataRange, viewport: &Viewport) -> ViewPoint {
    CoordinateMapper::new(*range, *viewport).to_view(x, y)
}
