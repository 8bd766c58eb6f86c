use serde::Serialize;

use crate::format::format_num;
use crate::model::{Model, Point, Question};

/// One line of the worked solution, in full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolutionRow {
    pub x: f64,
    pub y: f64,
    pub yhat: f64,
    pub residual: f64,
    pub residual_squared: f64,
}

impl SolutionRow {
    #[must_use]
    pub fn new(model: &Model, point: Point) -> Self {
        let yhat = model.predict(point.x);
        let residual = point.y - yhat;
        Self {
            x: point.x,
            y: point.y,
            yhat,
            residual,
            residual_squared: residual * residual,
        }
    }

    /// Display cells in column order: x, y, ŷ, y − ŷ, (y − ŷ)².
    #[must_use]
    pub fn cells(&self) -> [String; 5] {
        [
            format_num(self.x),
            format_num(self.y),
            format_num(self.yhat),
            format_num(self.residual),
            format_num(self.residual_squared),
        ]
    }
}

/// Column headers matching [`SolutionRow::cells`].
pub const SOLUTION_HEADERS: [&str; 5] = ["x", "y", "ŷ", "y \u{2212} ŷ", "(y \u{2212} ŷ)²"];

/// Step-by-step MSE computation for one question.
///
/// Aggregates are computed from unrounded residuals; only the display
/// helpers round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkedSolution {
    pub rows: Vec<SolutionRow>,
    pub sum_squared_residuals: f64,
    pub n: usize,
    pub mse: f64,
}

impl WorkedSolution {
    /// Build the solution for `model` over `points`, preserving point order.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_points(model: &Model, points: &[Point]) -> Self {
        let rows: Vec<SolutionRow> = points
            .iter()
            .map(|point| SolutionRow::new(model, *point))
            .collect();
        let sum_squared_residuals = rows.iter().map(|row| row.residual_squared).sum::<f64>();
        let n = rows.len();
        let mse = if n == 0 {
            0.0
        } else {
            sum_squared_residuals / n as f64
        };

        Self {
            rows,
            sum_squared_residuals,
            n,
            mse,
        }
    }

    #[must_use]
    pub fn sum_line(&self) -> String {
        format!(
            "Sum of squared residuals = {}",
            format_num(self.sum_squared_residuals)
        )
    }

    #[must_use]
    pub fn n_line(&self) -> String {
        format!("n = {}", self.n)
    }

    #[must_use]
    pub fn mse_line(&self) -> String {
        format!(
            "MSE = {} / {} = {}",
            format_num(self.sum_squared_residuals),
            self.n,
            format_num(self.mse)
        )
    }
}

/// Worked solution for the question's current points.
#[must_use]
pub fn compute_solution(question: &Question) -> WorkedSolution {
    WorkedSolution::from_points(question.model(), question.points())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_questions;
    use crate::model::Coordinate;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn q1_horizontal_worked_solution() {
        let q1 = builtin_questions().unwrap().remove(0);
        let solution = compute_solution(&q1);

        let residuals: Vec<f64> = solution.rows.iter().map(|r| r.residual).collect();
        assert!(close(residuals[0], -1.2));
        assert!(close(residuals[1], 2.0));
        assert!(close(residuals[2], 0.8));

        let squared: Vec<f64> = solution.rows.iter().map(|r| r.residual_squared).collect();
        assert!(close(squared[0], 1.44));
        assert!(close(squared[1], 4.0));
        assert!(close(squared[2], 0.64));

        assert!(close(solution.sum_squared_residuals, 6.08));
        assert_eq!(solution.n, 3);
        assert!(close(solution.mse, 6.08 / 3.0));
        assert_eq!(format_num(solution.mse), "2.027");
        assert_eq!(solution.mse_line(), "MSE = 6.08 / 3 = 2.027");
    }

    #[test]
    fn q2_linear_worked_solution() {
        let q2 = builtin_questions().unwrap().remove(1);
        let solution = compute_solution(&q2);

        let predictions: Vec<f64> = solution.rows.iter().map(|r| r.yhat).collect();
        assert_eq!(predictions, [1.0, 2.0, 3.0]);
        assert!(close(solution.rows[0].residual, 1.0));
        assert!(close(solution.rows[1].residual, -1.2));
        assert!(close(solution.rows[2].residual, 1.8));
        assert!(close(solution.sum_squared_residuals, 5.68));
        assert_eq!(format_num(solution.mse), "1.893");
    }

    #[test]
    fn edited_point_changes_residual_and_mse() {
        let mut q1 = builtin_questions().unwrap().remove(0);
        assert!(q1.set_coordinate(0, Coordinate::Y, -1.0));

        let solution = compute_solution(&q1);
        assert_eq!(solution.rows[0].residual, 0.0);
        assert!(close(solution.mse, 4.64 / 3.0));
        assert_eq!(format_num(solution.mse), "1.547");
    }

    #[test]
    fn mse_is_zero_only_for_exact_fit() {
        let model = Model::Linear { m: 2.0, b: -1.0 };
        let exact = [Point::new(0.0, -1.0), Point::new(1.0, 1.0), Point::new(2.0, 3.0)];
        let solution = WorkedSolution::from_points(&model, &exact);
        assert_eq!(solution.mse, 0.0);
        assert!(solution.rows.iter().all(|r| r.residual == 0.0));

        let off = [Point::new(0.0, -1.0), Point::new(1.0, 1.0), Point::new(2.0, 3.001)];
        let solution = WorkedSolution::from_points(&model, &off);
        assert!(solution.mse > 0.0);
    }

    #[test]
    fn mse_is_never_negative() {
        for question in builtin_questions().unwrap() {
            let solution = compute_solution(&question);
            assert!(solution.mse >= 0.0, "{:?}", question.id());
            assert_eq!(solution.n, question.point_count());
        }
    }

    #[test]
    fn aggregation_uses_full_precision() {
        // each residual rounds to 0.000 on display, the sum does not
        let model = Model::Horizontal { c: 0.0 };
        let points = [
            Point::new(0.0, 0.0004),
            Point::new(1.0, 0.0004),
            Point::new(2.0, 0.0004),
        ];
        let solution = WorkedSolution::from_points(&model, &points);
        assert_eq!(solution.rows[0].cells()[3], "0");
        assert!(solution.mse > 0.0);
        assert!(close(solution.mse, 0.0004 * 0.0004));
    }

    #[test]
    fn cells_follow_header_order() {
        let row = SolutionRow::new(&Model::Linear { m: 0.5, b: 1.0 }, Point::new(2.0, 0.8));
        assert_eq!(row.cells(), ["2", "0.8", "2", "-1.2", "1.44"]);
        assert_eq!(SOLUTION_HEADERS.len(), row.cells().len());
    }
}
