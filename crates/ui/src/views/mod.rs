mod controls;
mod explorer;
mod plot;
mod solution;

#[cfg(test)]
mod view_smoke;

pub use controls::{PointControls, PointEdit};
pub use explorer::{Explorer, ExplorerProps};
pub use plot::{PlotSvg, PlotSvgProps};
pub use solution::SolutionPanel;
