//! Pure rendering: a question plus its data range becomes a flat list of
//! drawing instructions. Hosts materialize the list however they like
//! (SVG, canvas, terminal) and replace their previous output wholesale.

use std::fmt::Write as _;

use serde::Serialize;

use crate::format::format_num;
use crate::mapping::{CoordinateMapper, ViewPoint, Viewport};
use crate::model::{CurveSampling, Point, Question};
use crate::range::DataRange;

/// Intervals between horizontal grid lines.
pub const GRID_DIVISIONS: usize = 4;
/// Tick marks (and labels) per axis.
pub const AXIS_TICKS: usize = 5;
/// Length of a tick mark in view units.
pub const TICK_LENGTH: f64 = 5.0;
/// Radius of a point marker in view units.
pub const POINT_RADIUS: f64 = 6.0;

/// Style tag the host maps onto its own visual style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleTag {
    Grid,
    Axis,
    AxisLabel,
    Model,
    Point,
}

impl StyleTag {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            StyleTag::Grid => "grid",
            StyleTag::Axis => "axis",
            StyleTag::AxisLabel => "axis-label",
            StyleTag::Model => "model",
            StyleTag::Point => "point",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Data carried by a point marker so the host can attach hover behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointMarker {
    pub index: usize,
    pub datum: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Line {
        from: ViewPoint,
        to: ViewPoint,
    },
    Path {
        points: Vec<ViewPoint>,
    },
    Circle {
        center: ViewPoint,
        radius: f64,
        marker: PointMarker,
    },
    Text {
        at: ViewPoint,
        anchor: TextAnchor,
        content: String,
    },
}

impl Shape {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Line { .. } => "line",
            Shape::Path { .. } => "path",
            Shape::Circle { .. } => "circle",
            Shape::Text { .. } => "text",
        }
    }
}

/// One drawing instruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Primitive {
    pub shape: Shape,
    pub style: StyleTag,
}

impl Primitive {
    fn line(from: ViewPoint, to: ViewPoint, style: StyleTag) -> Self {
        Self {
            shape: Shape::Line { from, to },
            style,
        }
    }

    fn text(at: ViewPoint, anchor: TextAnchor, content: String) -> Self {
        Self {
            shape: Shape::Text {
                at,
                anchor,
                content,
            },
            style: StyleTag::AxisLabel,
        }
    }
}

/// SVG path data (`M x y L x y ...`) through `points`.
#[must_use]
pub fn path_data(points: &[ViewPoint]) -> String {
    let mut out = String::new();
    for (i, point) in points.iter().enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{command} {} {}", point.x, point.y);
    }
    out
}

/// The complete drawable output for one question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plot {
    pub viewport: Viewport,
    pub range: DataRange,
    pub primitives: Vec<Primitive>,
}

impl Plot {
    pub fn with_style(&self, style: StyleTag) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(move |p| p.style == style)
    }

    /// Point markers in point order.
    pub fn markers(&self) -> impl Iterator<Item = (ViewPoint, PointMarker)> + '_ {
        self.primitives.iter().filter_map(|p| match p.shape {
            Shape::Circle { center, marker, .. } => Some((center, marker)),
            _ => None,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

/// Render `question` against `range` into `viewport`.
#[must_use]
pub fn render(question: &Question, range: &DataRange, viewport: &Viewport) -> Plot {
    let mapper = CoordinateMapper::new(*range, *viewport);
    let mut primitives = Vec::new();

    push_grid(&mut primitives, viewport);
    push_axes(&mut primitives, &mapper);
    push_model(&mut primitives, question, &mapper);
    push_points(&mut primitives, question.points(), &mapper);

    Plot {
        viewport: *viewport,
        range: *range,
        primitives,
    }
}

/// Render `question` with the range derived from its current points.
#[must_use]
pub fn render_question(question: &Question, viewport: &Viewport) -> Plot {
    render(question, &question.range(), viewport)
}

#[allow(clippy::cast_precision_loss)]
fn push_grid(out: &mut Vec<Primitive>, viewport: &Viewport) {
    let step = viewport.plot_height() / GRID_DIVISIONS as f64;
    for i in 0..=GRID_DIVISIONS {
        let y = viewport.top() + i as f64 * step;
        out.push(Primitive::line(
            ViewPoint::new(viewport.left(), y),
            ViewPoint::new(viewport.right(), y),
            StyleTag::Grid,
        ));
    }
}

fn push_axes(out: &mut Vec<Primitive>, mapper: &CoordinateMapper) {
    let viewport = mapper.viewport();
    let range = mapper.range();
    let overhang = viewport.padding / 4.0;

    out.push(Primitive::line(
        ViewPoint::new(viewport.left(), overhang),
        ViewPoint::new(viewport.left(), viewport.height - overhang),
        StyleTag::Axis,
    ));
    out.push(Primitive::line(
        ViewPoint::new(viewport.left(), viewport.bottom()),
        ViewPoint::new(viewport.width - overhang, viewport.bottom()),
        StyleTag::Axis,
    ));

    let intervals = AXIS_TICKS - 1;
    for i in 0..AXIS_TICKS {
        let value = range.lerp_y_down(i, intervals);
        let y = mapper.to_view(range.min_x, value).y;
        out.push(Primitive::line(
            ViewPoint::new(viewport.left() - TICK_LENGTH, y),
            ViewPoint::new(viewport.left(), y),
            StyleTag::Axis,
        ));
        out.push(Primitive::text(
            ViewPoint::new(viewport.left() - 2.0 * TICK_LENGTH, y + 4.0),
            TextAnchor::End,
            format_num(value),
        ));
    }

    for i in 0..AXIS_TICKS {
        let value = range.lerp_x(i, intervals);
        let x = mapper.to_view(value, range.min_y).x;
        out.push(Primitive::line(
            ViewPoint::new(x, viewport.bottom()),
            ViewPoint::new(x, viewport.bottom() + TICK_LENGTH),
            StyleTag::Axis,
        ));
        out.push(Primitive::text(
            ViewPoint::new(x, viewport.bottom() + 4.0 * TICK_LENGTH),
            TextAnchor::Middle,
            format_num(value),
        ));
    }
}

/// Samples whose prediction overflows are dropped from the curve.
fn push_model(out: &mut Vec<Primitive>, question: &Question, mapper: &CoordinateMapper) {
    let model = question.model();
    let range = mapper.range();
    let at = |x: f64| mapper.to_view(x, model.predict(x));

    match model.sampling() {
        CurveSampling::Straight => {
            let (from, to) = (at(range.min_x), at(range.max_x));
            if from.is_finite() && to.is_finite() {
                out.push(Primitive::line(from, to, StyleTag::Model));
            }
        }
        CurveSampling::Polyline { segments } => {
            let points: Vec<ViewPoint> = (0..=segments)
                .map(|i| at(range.lerp_x(i, segments)))
                .filter(ViewPoint::is_finite)
                .collect();
            if points.len() >= 2 {
                out.push(Primitive {
                    shape: Shape::Path { points },
                    style: StyleTag::Model,
                });
            }
        }
    }
}

fn push_points(out: &mut Vec<Primitive>, points: &[Point], mapper: &CoordinateMapper) {
    for (index, datum) in points.iter().enumerate() {
        out.push(Primitive {
            shape: Shape::Circle {
                center: mapper.to_view(datum.x, datum.y),
                radius: POINT_RADIUS,
                marker: PointMarker {
                    index,
                    datum: *datum,
                },
            },
            style: StyleTag::Point,
        });
    }
}
