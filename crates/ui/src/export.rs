//! Server-side rendering of the explorer into standalone HTML.

use dioxus::prelude::*;
use fit_core::render::Plot;
use services::SessionService;

use crate::views::{Explorer, ExplorerProps, PlotSvg, PlotSvgProps};

pub const STYLE: &str = include_str!("../assets/style.css");

/// Render a plot to an `<svg>` fragment.
#[must_use]
pub fn render_plot(plot: &Plot) -> String {
    let mut dom = VirtualDom::new_with_props(PlotSvg, PlotSvgProps { plot: plot.clone() });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render the explorer body for the session's current frame.
#[must_use]
pub fn render_explorer(session: &SessionService) -> String {
    let mut dom = VirtualDom::new_with_props(
        Explorer,
        ExplorerProps {
            session: session.clone(),
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// A complete HTML document with inline styles.
#[must_use]
pub fn render_page(session: &SessionService) -> String {
    let body = render_explorer(session);
    let title = &session.frame().title;
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}
