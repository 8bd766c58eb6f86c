use dioxus::prelude::*;
use services::{QuestionOption, SessionService};

use super::controls::{PointControls, PointEdit};
use super::plot::PlotSvg;
use super::solution::SolutionPanel;

#[derive(Props, Clone)]
pub struct ExplorerProps {
    pub session: SessionService,
}

// The session is seeded once; later prop changes are ignored.
impl PartialEq for ExplorerProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

/// The interactive page: selector, plot, point inputs and worked solution.
///
/// Every event goes through the session and the whole page is rebuilt
/// from the session's latest frame.
#[component]
pub fn Explorer(props: ExplorerProps) -> Element {
    let mut session = use_signal(|| props.session.clone());
    let frame = session.read().frame().clone();
    let options = session.read().options();

    rsx! {
        div { class: "explorer",
            QuestionNav {
                options,
                index: frame.index,
                can_prev: frame.can_prev(),
                can_next: frame.can_next(),
                on_select: move |index: usize| {
                    session.write().select_question(index);
                },
                on_prev: move |_| {
                    session.write().prev();
                },
                on_next: move |_| {
                    session.write().next();
                },
            }
            p { class: "question-text", "{frame.prompt}" }
            div { class: "equation", "{frame.equation}" }
            PlotSvg { plot: frame.plot.clone() }
            PointControls {
                controls: frame.controls.clone(),
                on_edit: move |edit: PointEdit| {
                    session.write().edit_point(edit.index, edit.coordinate, &edit.raw);
                },
            }
            button {
                class: "btn reveal",
                r#type: "button",
                onclick: move |_| {
                    session.write().toggle_reveal();
                },
                "{frame.reveal_label()}"
            }
            SolutionPanel {
                equation: frame.equation.clone(),
                solution: frame.solution.clone(),
            }
        }
    }
}

#[component]
fn QuestionNav(
    options: Vec<QuestionOption>,
    index: usize,
    can_prev: bool,
    can_next: bool,
    on_select: EventHandler<usize>,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "question-nav",
            button {
                class: "btn",
                r#type: "button",
                disabled: !can_prev,
                onclick: move |_| on_prev.call(()),
                "Prev"
            }
            select {
                class: "question-select",
                value: "{index}",
                onchange: move |evt| {
                    if let Ok(selected) = evt.value().parse::<usize>() {
                        on_select.call(selected);
                    }
                },
                for opt in options {
                    option {
                        key: "{opt.id}",
                        value: "{opt.index}",
                        selected: opt.index == index,
                        "{opt.title}"
                    }
                }
            }
            button {
                class: "btn",
                r#type: "button",
                disabled: !can_next,
                onclick: move |_| on_next.call(()),
                "Next"
            }
        }
    }
}
