use crate::model::{Model, Point, Question, QuestionError, QuestionId};

/// The four exercises shipped with the explorer.
///
/// # Errors
///
/// Returns `QuestionError` if a builtin record fails validation.
pub fn builtin_questions() -> Result<Vec<Question>, QuestionError> {
    Ok(vec![
        Question::new(
            QuestionId::new(1),
            "Q1 \u{2014} Horizontal (3 pts)",
            Model::Horizontal { c: -1.0 },
            vec![
                Point::new(0.0, -2.2),
                Point::new(1.0, 1.0),
                Point::new(2.0, -0.2),
            ],
            "Compute the MSE of the model y = -1 for the plotted points.",
        )?,
        Question::new(
            QuestionId::new(2),
            "Q2 \u{2014} Linear (3 pts)",
            Model::Linear { m: 0.5, b: 1.0 },
            vec![
                Point::new(0.0, 2.0),
                Point::new(2.0, 0.8),
                Point::new(4.0, 4.8),
            ],
            "Compute the MSE of the model y = 0.5x + 1 for the plotted points.",
        )?,
        Question::new(
            QuestionId::new(3),
            "Q3 \u{2014} Linear (4 pts)",
            Model::Linear { m: -0.8, b: 3.0 },
            vec![
                Point::new(0.0, 4.0),
                Point::new(1.0, 0.8),
                Point::new(2.0, 2.5),
                Point::new(3.0, 0.0),
            ],
            "Compute the MSE of the model y = -0.8x + 3 for the plotted points.",
        )?,
        Question::new(
            QuestionId::new(4),
            "Q4 \u{2014} Parabola (4 pts)",
            Model::Parabola {
                a: 0.5,
                b: -1.0,
                c: 1.0,
            },
            vec![
                Point::new(-1.0, 4.0),
                Point::new(0.0, -0.5),
                Point::new(1.0, 1.8),
                Point::new(2.0, 4.5),
            ],
            "Compute the MSE of the model y = 0.5x^2 - x + 1 for the plotted points.",
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelKind;

    #[test]
    fn builtin_catalog_shape() {
        let questions = builtin_questions().unwrap();
        let shape: Vec<(u64, ModelKind, usize)> = questions
            .iter()
            .map(|q| (q.id().value(), q.model().kind(), q.point_count()))
            .collect();
        assert_eq!(
            shape,
            [
                (1, ModelKind::Horizontal, 3),
                (2, ModelKind::Linear, 3),
                (3, ModelKind::Linear, 4),
                (4, ModelKind::Parabola, 4),
            ]
        );
    }
}
