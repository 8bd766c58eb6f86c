mod plot_vm;
mod solution_vm;

pub use plot_vm::{SvgNodeVm, map_plot_nodes, view_box};
pub use solution_vm::SolutionTableVm;
