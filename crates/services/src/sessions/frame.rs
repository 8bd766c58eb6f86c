use fit_core::format::format_num;
use fit_core::model::{Point, Question, QuestionId};
use fit_core::render::Plot;
use fit_core::stats::WorkedSolution;

/// Editable fields for one point, in point order.
#[derive(Debug, Clone, PartialEq)]
pub struct PointControl {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

impl PointControl {
    #[must_use]
    pub fn new(index: usize, point: Point) -> Self {
        Self {
            index,
            x: point.x,
            y: point.y,
        }
    }

    /// One-based label shown above the inputs.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Point {}", self.index + 1)
    }

    #[must_use]
    pub fn x_text(&self) -> String {
        format_num(self.x)
    }

    #[must_use]
    pub fn y_text(&self) -> String {
        format_num(self.y)
    }
}

/// Entry in the question selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOption {
    pub index: usize,
    pub id: QuestionId,
    pub title: String,
}

/// Everything the host needs to draw the current question.
///
/// Rebuilt from scratch after every session event, so it always matches
/// the latest point state.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionFrame {
    pub index: usize,
    pub question_count: usize,
    pub question_id: QuestionId,
    pub title: String,
    pub equation: String,
    pub prompt: String,
    pub plot: Plot,
    pub controls: Vec<PointControl>,
    pub solution: Option<WorkedSolution>,
}

impl SessionFrame {
    pub(crate) fn build(
        index: usize,
        question_count: usize,
        question: &Question,
        plot: Plot,
        solution: Option<WorkedSolution>,
    ) -> Self {
        let controls = question
            .points()
            .iter()
            .enumerate()
            .map(|(i, point)| PointControl::new(i, *point))
            .collect();

        Self {
            index,
            question_count,
            question_id: question.id(),
            title: question.title().to_string(),
            equation: question.equation(),
            prompt: question.prompt().to_string(),
            plot,
            controls,
            solution,
        }
    }

    #[must_use]
    pub fn solution_visible(&self) -> bool {
        self.solution.is_some()
    }

    #[must_use]
    pub fn reveal_label(&self) -> &'static str {
        if self.solution_visible() {
            "Hide Answer"
        } else {
            "Reveal Answer"
        }
    }

    #[must_use]
    pub fn can_prev(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn can_next(&self) -> bool {
        self.index + 1 < self.question_count
    }
}
