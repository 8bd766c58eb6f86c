use fit_core::model::Coordinate;
use services::SessionService;

use crate::export::{render_explorer, render_page, render_plot};

fn session() -> SessionService {
    SessionService::builtin().expect("builtin catalog")
}

#[test]
fn plot_svg_renders_one_element_per_primitive() {
    let session = session();
    let plot = &session.frame().plot;
    let html = render_plot(plot);

    assert!(html.contains("<svg"), "missing svg root in {html}");
    assert_eq!(html.matches("<circle").count(), 3);
    assert_eq!(html.matches("<line").count(), 5 + 12 + 1);
    assert_eq!(html.matches("<text").count(), 10);
    assert!(html.contains("class=\"model\""), "missing model in {html}");
    assert!(html.contains("data-x=\"0\""), "missing marker data in {html}");
    assert!(html.contains("(0, -2.2)"), "missing hover text in {html}");
}

#[test]
fn parabola_renders_as_path() {
    let mut session = session();
    session.select_question(3);
    let html = render_plot(&session.frame().plot);

    assert_eq!(html.matches("<path").count(), 1);
    assert!(html.contains("d=\"M 40 "), "missing path data in {html}");
    assert_eq!(html.matches("<circle").count(), 4);
}

#[test]
fn explorer_smoke_renders_hidden_state() {
    let html = render_explorer(&session());

    assert!(html.contains("Q1 \u{2014} Horizontal (3 pts)"), "missing title in {html}");
    assert!(html.contains("y = -1"), "missing equation in {html}");
    assert!(html.contains("Reveal Answer"), "missing reveal button in {html}");
    assert!(html.contains("Point 3"), "missing point controls in {html}");
    assert!(html.contains("value=\"-2.2\""), "missing point value in {html}");
    assert!(!html.contains("Worked Solution"), "solution leaked in {html}");
}

#[test]
fn explorer_smoke_renders_revealed_solution() {
    let mut session = session();
    session.toggle_reveal();
    let html = render_explorer(&session);

    assert!(html.contains("Hide Answer"), "missing hide label in {html}");
    assert!(html.contains("Worked Solution"), "missing solution in {html}");
    assert!(html.contains("MSE = 6.08 / 3 = 2.027"), "missing mse in {html}");
    assert!(html.contains("n = 3"), "missing n in {html}");
}

#[test]
fn explorer_smoke_reflects_edits() {
    let mut session = session();
    session.toggle_reveal();
    assert!(session.edit_point(0, Coordinate::Y, "-1").is_applied());
    let html = render_explorer(&session);

    assert!(html.contains("MSE = 4.64 / 3 = 1.547"), "stale mse in {html}");
}

#[test]
fn page_wraps_explorer_with_styles() {
    let html = render_page(&session());
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<style>"));
    assert!(html.contains(".graph .model"));
    assert!(html.contains("<svg"));
}
