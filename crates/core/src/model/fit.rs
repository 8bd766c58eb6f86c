use serde::{Deserialize, Serialize};

/// Parabolas are drawn as a polyline with this many segments.
pub const PARABOLA_SEGMENTS: usize = 120;

/// Which family a `Model` belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    Horizontal,
    Linear,
    Parabola,
}

/// How a model family is traced on the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveSampling {
    /// Exactly linear; the two range endpoints describe the whole curve.
    Straight,
    /// Nonlinear; sampled at `segments + 1` evenly spaced x values.
    Polyline { segments: usize },
}

/// Per-family properties. Adding a model family means adding a row here
/// and an arm in `Model::kind`, `Model::predict` and `Model::equation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelTraits {
    pub label: &'static str,
    pub sampling: CurveSampling,
}

impl ModelKind {
    #[must_use]
    pub const fn traits(self) -> ModelTraits {
        match self {
            ModelKind::Horizontal => ModelTraits {
                label: "horizontal",
                sampling: CurveSampling::Straight,
            },
            ModelKind::Linear => ModelTraits {
                label: "linear",
                sampling: CurveSampling::Straight,
            },
            ModelKind::Parabola => ModelTraits {
                label: "parabola",
                sampling: CurveSampling::Polyline {
                    segments: PARABOLA_SEGMENTS,
                },
            },
        }
    }
}

/// The fixed model a question asks the learner to score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Model {
    Horizontal { c: f64 },
    Linear { m: f64, b: f64 },
    Parabola { a: f64, b: f64, c: f64 },
}

impl Model {
    #[must_use]
    pub fn kind(&self) -> ModelKind {
        match self {
            Model::Horizontal { .. } => ModelKind::Horizontal,
            Model::Linear { .. } => ModelKind::Linear,
            Model::Parabola { .. } => ModelKind::Parabola,
        }
    }

    #[must_use]
    pub fn sampling(&self) -> CurveSampling {
        self.kind().traits().sampling
    }

    /// Evaluate the model at `x`.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        match *self {
            Model::Horizontal { c } => c,
            Model::Linear { m, b } => m * x + b,
            Model::Parabola { a, b, c } => a * x * x + b * x + c,
        }
    }

    /// Human-readable equation, e.g. `y = 0.5x² − 1x + 1`.
    #[must_use]
    pub fn equation(&self) -> String {
        match *self {
            Model::Horizontal { c } => format!("y = {c}"),
            Model::Linear { m, b } => format!("y = {m}x {}", signed_term(b, "")),
            Model::Parabola { a, b, c } => format!(
                "y = {a}x² {} {}",
                signed_term(b, "x"),
                signed_term(c, "")
            ),
        }
    }

    #[must_use]
    pub fn coefficients(&self) -> Vec<f64> {
        match *self {
            Model::Horizontal { c } => vec![c],
            Model::Linear { m, b } => vec![m, b],
            Model::Parabola { a, b, c } => vec![a, b, c],
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.coefficients().iter().all(|value| value.is_finite())
    }
}

/// Evaluate `model` at `x`.
#[must_use]
pub fn predict(model: &Model, x: f64) -> f64 {
    model.predict(x)
}

/// Canonical equation text for `model`.
#[must_use]
pub fn format_equation(model: &Model) -> String {
    model.equation()
}

fn signed_term(value: f64, suffix: &str) -> String {
    if value < 0.0 {
        format!("\u{2212} {}{suffix}", value.abs())
    } else {
        format!("+ {value}{suffix}")
    }
}
