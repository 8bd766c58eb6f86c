#![forbid(unsafe_code)]

pub mod catalog;
pub mod format;
pub mod mapping;
pub mod model;
pub mod range;
pub mod render;
pub mod stats;

pub use format::{format_num, round_display};
pub use mapping::{CoordinateMapper, ViewPoint, Viewport, ViewportError, to_view};
pub use model::{Coordinate, Model, Point, Question, QuestionError, QuestionId};
pub use range::{DataRange, RANGE_MARGIN, compute_range};
pub use render::{Plot, Primitive, Shape, StyleTag, render, render_question};
pub use stats::{SolutionRow, WorkedSolution, compute_solution};
