use fit_core::stats::{SOLUTION_HEADERS, WorkedSolution};

/// Worked solution laid out as display strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolutionTableVm {
    pub headers: [&'static str; 5],
    pub rows: Vec<[String; 5]>,
    pub sum_line: String,
    pub n_line: String,
    pub mse_line: String,
}

impl From<&WorkedSolution> for SolutionTableVm {
    fn from(solution: &WorkedSolution) -> Self {
        Self {
            headers: SOLUTION_HEADERS,
            rows: solution.rows.iter().map(|row| row.cells()).collect(),
            sum_line: solution.sum_line(),
            n_line: solution.n_line(),
            mse_line: solution.mse_line(),
        }
    }
}
