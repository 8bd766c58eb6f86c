pub mod app;
pub mod context;
pub mod export;
pub mod views;
pub mod vm;

pub use app::App;
pub use context::AppContext;
pub use export::{render_explorer, render_page, render_plot};
