use dioxus::prelude::*;
use fit_core::render::Plot;

use crate::vm::{SvgNodeVm, map_plot_nodes, view_box};

#[derive(Props, Clone, PartialEq)]
pub struct PlotSvgProps {
    pub plot: Plot,
}

/// Materializes a rendered plot as an inline SVG. Each primitive becomes one
/// element whose class is its style tag.
#[component]
pub fn PlotSvg(props: PlotSvgProps) -> Element {
    let plot = props.plot;
    let nodes = map_plot_nodes(&plot);
    let view_box = view_box(&plot);

    rsx! {
        svg {
            class: "graph",
            "xmlns": "http://www.w3.org/2000/svg",
            width: "{plot.viewport.width}",
            height: "{plot.viewport.height}",
            view_box: "{view_box}",
            for (i, node) in nodes.into_iter().enumerate() {
                SvgNode { key: "{i}", node }
            }
        }
    }
}

#[component]
fn SvgNode(node: SvgNodeVm) -> Element {
    match node {
        SvgNodeVm::Line {
            class,
            x1,
            y1,
            x2,
            y2,
        } => rsx! {
            line {
                class: "{class}",
                x1: "{x1}",
                y1: "{y1}",
                x2: "{x2}",
                y2: "{y2}",
            }
        },
        SvgNodeVm::Path { class, d } => rsx! {
            path { class: "{class}", d: "{d}" }
        },
        SvgNodeVm::Circle {
            class,
            cx,
            cy,
            r,
            index,
            data_x,
            data_y,
            hover,
        } => rsx! {
            circle {
                class: "{class}",
                cx: "{cx}",
                cy: "{cy}",
                r: "{r}",
                "data-index": "{index}",
                "data-x": "{data_x}",
                "data-y": "{data_y}",
                // Hover text; the host owns any richer tooltip.
                title { "{hover}" }
            }
        },
        SvgNodeVm::Text {
            class,
            x,
            y,
            anchor,
            content,
        } => rsx! {
            text {
                class: "{class}",
                x: "{x}",
                y: "{y}",
                text_anchor: "{anchor}",
                "{content}"
            }
        },
    }
}
