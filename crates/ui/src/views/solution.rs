use dioxus::prelude::*;
use fit_core::stats::WorkedSolution;

use crate::vm::SolutionTableVm;

/// Worked solution table; renders nothing while the answer is hidden.
#[component]
pub fn SolutionPanel(equation: String, solution: Option<WorkedSolution>) -> Element {
    let Some(solution) = solution else {
        return rsx! {};
    };
    let table = SolutionTableVm::from(&solution);

    rsx! {
        div { class: "solution",
            strong { "Worked Solution" }
            div { class: "solution-model",
                "Model: "
                strong { "{equation}" }
            }
            table {
                thead {
                    tr {
                        for header in table.headers {
                            th { "{header}" }
                        }
                    }
                }
                tbody {
                    for (i, row) in table.rows.iter().enumerate() {
                        tr { key: "{i}",
                            for cell in row.iter() {
                                td { "{cell}" }
                            }
                        }
                    }
                }
            }
            div { class: "mse",
                strong { "MSE Calculation" }
                p { "{table.sum_line}" }
                p { "{table.n_line}" }
                p {
                    strong { "{table.mse_line}" }
                }
            }
        }
    }
}
