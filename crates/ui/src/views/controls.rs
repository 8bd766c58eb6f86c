use dioxus::prelude::*;
use fit_core::model::Coordinate;
use services::PointControl;

/// A value typed into one of the point inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct PointEdit {
    pub index: usize,
    pub coordinate: Coordinate,
    pub raw: String,
}

/// One x/y input pair per point, in point order.
#[component]
pub fn PointControls(controls: Vec<PointControl>, on_edit: EventHandler<PointEdit>) -> Element {
    rsx! {
        div { class: "point-controls",
            for control in controls {
                PointControlRow { key: "{control.index}", control: control.clone(), on_edit }
            }
        }
    }
}

#[component]
fn PointControlRow(control: PointControl, on_edit: EventHandler<PointEdit>) -> Element {
    let index = control.index;

    rsx! {
        div { class: "point-control",
            label { "{control.label()}" }
            div { class: "point-fields",
                div { class: "point-field",
                    small { "x" }
                    input {
                        r#type: "number",
                        step: "0.1",
                        placeholder: "x",
                        value: "{control.x_text()}",
                        "data-idx": "{index}",
                        "data-coord": "x",
                        onchange: move |evt| {
                            on_edit.call(PointEdit {
                                index,
                                coordinate: Coordinate::X,
                                raw: evt.value(),
                            });
                        },
                    }
                }
                div { class: "point-field",
                    small { "y" }
                    input {
                        r#type: "number",
                        step: "0.1",
                        placeholder: "y",
                        value: "{control.y_text()}",
                        "data-idx": "{index}",
                        "data-coord": "y",
                        onchange: move |evt| {
                            on_edit.call(PointEdit {
                                index,
                                coordinate: Coordinate::Y,
                                raw: evt.value(),
                            });
                        },
                    }
                }
            }
        }
    }
}
