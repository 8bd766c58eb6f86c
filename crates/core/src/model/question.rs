use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Coordinate, Model, Point, QuestionId, is_coordinate_value};
use crate::range::{DataRange, compute_range};

/// Smallest number of points a question may plot.
pub const MIN_POINTS: usize = 3;
/// Largest number of points a question may plot.
pub const MAX_POINTS: usize = 4;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question title cannot be empty")]
    EmptyTitle,

    #[error("question must have between {MIN_POINTS} and {MAX_POINTS} points, got {len}")]
    PointCount { len: usize },

    #[error("point {index} has a non-finite or out-of-range coordinate")]
    PointOutOfBounds { index: usize },

    #[error("model coefficients must be finite")]
    NonFiniteModel,
}

/// Serialized form of a question; validated into `Question` on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: QuestionId,
    pub title: String,
    pub model: Model,
    pub points: Vec<Point>,
    #[serde(default, alias = "text")]
    pub prompt: String,
}

/// One exercise: a fixed model scored against a handful of editable points.
///
/// The point count and model family never change after construction; only
/// the point coordinates do, through [`Question::set_coordinate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "QuestionRecord", into = "QuestionRecord")]
pub struct Question {
    id: QuestionId,
    title: String,
    model: Model,
    points: Vec<Point>,
    prompt: String,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyTitle` if the title is blank.
    /// Returns `QuestionError::PointCount` unless there are 3 or 4 points.
    /// Returns `QuestionError::PointOutOfBounds` for coordinates that are not
    /// finite or exceed `MAX_COORDINATE`, and `NonFiniteModel` for NaN or
    /// infinite coefficients.
    pub fn new(
        id: QuestionId,
        title: impl Into<String>,
        model: Model,
        points: Vec<Point>,
        prompt: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(QuestionError::EmptyTitle);
        }
        if !(MIN_POINTS..=MAX_POINTS).contains(&points.len()) {
            return Err(QuestionError::PointCount { len: points.len() });
        }
        if let Some(index) = points.iter().position(|point| !point.in_bounds()) {
            return Err(QuestionError::PointOutOfBounds { index });
        }
        if !model.is_finite() {
            return Err(QuestionError::NonFiniteModel);
        }

        Ok(Self {
            id,
            title,
            model,
            points,
            prompt: prompt.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn model(&self) -> &Model {
        &self.model
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn equation(&self) -> String {
        self.model.equation()
    }

    /// Padded bounding box of the current points.
    #[must_use]
    pub fn range(&self) -> DataRange {
        compute_range(&self.points).unwrap_or_default()
    }

    /// Overwrite one coordinate of point `index`.
    ///
    /// Returns `false` (and changes nothing) if `index` is out of bounds or
    /// `value` is not finite or exceeds `MAX_COORDINATE`.
    pub fn set_coordinate(&mut self, index: usize, coordinate: Coordinate, value: f64) -> bool {
        if !is_coordinate_value(value) {
            return false;
        }
        match self.points.get_mut(index) {
            Some(point) => {
                point.set(coordinate, value);
                true
            }
            None => false,
        }
    }
}

impl TryFrom<QuestionRecord> for Question {
    type Error = QuestionError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        Question::new(
            record.id,
            record.title,
            record.model,
            record.points,
            record.prompt,
        )
    }
}

impl From<Question> for QuestionRecord {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            title: question.title,
            model: question.model,
            points: question.points,
            prompt: question.prompt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_points() -> Vec<Point> {
        vec![
            Point::new(0.0, -2.2),
            Point::new(1.0, 1.0),
            Point::new(2.0, -0.2),
        ]
    }

    #[test]
    fn new_rejects_wrong_point_counts() {
        let model = Model::Horizontal { c: -1.0 };
        let err = Question::new(QuestionId::new(1), "Q", model, vec![Point::new(0.0, 0.0); 2], "")
            .unwrap_err();
        assert_eq!(err, QuestionError::PointCount { len: 2 });

        let err = Question::new(QuestionId::new(1), "Q", model, vec![Point::new(0.0, 0.0); 5], "")
            .unwrap_err();
        assert_eq!(err, QuestionError::PointCount { len: 5 });
    }

    #[test]
    fn new_rejects_blank_title_and_non_finite_data() {
        let model = Model::Horizontal { c: -1.0 };
        assert_eq!(
            Question::new(QuestionId::new(1), "   ", model, three_points(), "").unwrap_err(),
            QuestionError::EmptyTitle
        );

        let mut points = three_points();
        points[1].y = f64::NAN;
        assert_eq!(
            Question::new(QuestionId::new(1), "Q", model, points, "").unwrap_err(),
            QuestionError::PointOutOfBounds { index: 1 }
        );

        let mut points = three_points();
        points[2].x = -1e301;
        assert_eq!(
            Question::new(QuestionId::new(1), "Q", model, points, "").unwrap_err(),
            QuestionError::PointOutOfBounds { index: 2 }
        );

        let model = Model::Linear {
            m: f64::INFINITY,
            b: 0.0,
        };
        assert_eq!(
            Question::new(QuestionId::new(1), "Q", model, three_points(), "").unwrap_err(),
            QuestionError::NonFiniteModel
        );
    }

    #[test]
    fn set_coordinate_mutates_in_place_and_keeps_order() {
        let mut question = Question::new(
            QuestionId::new(1),
            "Q1",
            Model::Horizontal { c: -1.0 },
            three_points(),
            "",
        )
        .unwrap();

        assert!(question.set_coordinate(0, Coordinate::Y, -1.0));
        assert_eq!(question.points()[0], Point::new(0.0, -1.0));
        assert_eq!(question.points()[1], Point::new(1.0, 1.0));

        assert!(!question.set_coordinate(3, Coordinate::X, 1.0));
        assert!(!question.set_coordinate(1, Coordinate::X, f64::NAN));
        assert!(!question.set_coordinate(1, Coordinate::X, f64::MAX));
        assert_eq!(question.points()[1], Point::new(1.0, 1.0));
        assert_eq!(question.point_count(), 3);
    }

    #[test]
    fn deserialize_validates_record() {
        let json = r#"{
            "id": 2,
            "title": "Q2",
            "model": {"type": "linear", "m": 0.5, "b": 1},
            "points": [{"x": 0, "y": 2.0}, {"x": 2, "y": 0.8}, {"x": 4, "y": 4.8}],
            "text": "Compute the MSE."
        }"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.id(), QuestionId::new(2));
        assert_eq!(question.prompt(), "Compute the MSE.");
        assert_eq!(question.point_count(), 3);

        let json = r#"{
            "id": 3,
            "title": "Q3",
            "model": {"type": "horizontal", "c": 1},
            "points": [{"x": 0, "y": 2.0}]
        }"#;
        assert!(serde_json::from_str::<Question>(json).is_err());
    }
}
