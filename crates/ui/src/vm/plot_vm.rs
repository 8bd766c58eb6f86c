use fit_core::render::{Plot, Primitive, Shape, path_data};

/// String-ready form of a drawing primitive, one variant per SVG element.
#[derive(Clone, Debug, PartialEq)]
pub enum SvgNodeVm {
    Line {
        class: &'static str,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Path {
        class: &'static str,
        d: String,
    },
    Circle {
        class: &'static str,
        cx: f64,
        cy: f64,
        r: f64,
        index: usize,
        data_x: f64,
        data_y: f64,
        hover: String,
    },
    Text {
        class: &'static str,
        x: f64,
        y: f64,
        anchor: &'static str,
        content: String,
    },
}

impl From<&Primitive> for SvgNodeVm {
    fn from(primitive: &Primitive) -> Self {
        let class = primitive.style.class();
        match &primitive.shape {
            Shape::Line { from, to } => SvgNodeVm::Line {
                class,
                x1: from.x,
                y1: from.y,
                x2: to.x,
                y2: to.y,
            },
            Shape::Path { points } => SvgNodeVm::Path {
                class,
                d: path_data(points),
            },
            Shape::Circle {
                center,
                radius,
                marker,
            } => SvgNodeVm::Circle {
                class,
                cx: center.x,
                cy: center.y,
                r: *radius,
                index: marker.index,
                data_x: marker.datum.x,
                data_y: marker.datum.y,
                hover: marker.datum.label(),
            },
            Shape::Text {
                at,
                anchor,
                content,
            } => SvgNodeVm::Text {
                class,
                x: at.x,
                y: at.y,
                anchor: anchor.as_str(),
                content: content.clone(),
            },
        }
    }
}

#[must_use]
pub fn map_plot_nodes(plot: &Plot) -> Vec<SvgNodeVm> {
    plot.primitives.iter().map(SvgNodeVm::from).collect()
}

#[must_use]
pub fn view_box(plot: &Plot) -> String {
    format!("0 0 {} {}", plot.viewport.width, plot.viewport.height)
}
