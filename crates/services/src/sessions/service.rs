use fit_core::mapping::Viewport;
use fit_core::model::{Coordinate, Question, is_coordinate_value, parse_coordinate_value};
use fit_core::render::render_question;
use fit_core::stats::compute_solution;
use tracing::{debug, warn};

use super::frame::{QuestionOption, SessionFrame};
use super::state::SessionState;
use crate::catalog::Catalog;
use crate::error::SessionError;

/// Why an edit left the point unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditRejection {
    /// The input was not a finite real number.
    InvalidValue,
    /// The current question has no point with this index.
    UnknownPoint { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    Rejected(EditRejection),
}

impl EditOutcome {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, EditOutcome::Applied)
    }
}

/// Interactive exploration of a catalog, one question at a time.
///
/// Owns the catalog and the session state. Every operation runs to
/// completion and leaves a fresh [`SessionFrame`] behind, so the plot and
/// the worked solution never lag behind the points.
#[derive(Debug, Clone)]
pub struct SessionService {
    catalog: Catalog,
    state: SessionState,
    viewport: Viewport,
    frame: SessionFrame,
}

impl SessionService {
    /// Start on the first question with the solution hidden.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self::with_viewport_unchecked(catalog, Viewport::default())
    }

    /// Start a session drawing into `viewport`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Viewport` if the viewport has no plotting area.
    pub fn with_viewport(catalog: Catalog, viewport: Viewport) -> Result<Self, SessionError> {
        viewport.validate()?;
        Ok(Self::with_viewport_unchecked(catalog, viewport))
    }

    /// Start a session on the builtin catalog.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Catalog` if the builtin catalog fails validation.
    pub fn builtin() -> Result<Self, SessionError> {
        Ok(Self::new(Catalog::builtin()?))
    }

    fn with_viewport_unchecked(catalog: Catalog, viewport: Viewport) -> Self {
        let state = SessionState::default();
        let frame = build_frame(&catalog, state, &viewport);
        Self {
            catalog,
            state,
            viewport,
            frame,
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.catalog.len()
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.catalog.questions()[self.state.current_index()]
    }

    /// Latest render of the current question.
    #[must_use]
    pub fn frame(&self) -> &SessionFrame {
        &self.frame
    }

    #[must_use]
    pub fn options(&self) -> Vec<QuestionOption> {
        self.catalog
            .questions()
            .iter()
            .enumerate()
            .map(|(index, question)| QuestionOption {
                index,
                id: question.id(),
                title: question.title().to_string(),
            })
            .collect()
    }

    /// Show question `index` (clamped to the catalog) with the solution hidden.
    pub fn select_question(&mut self, index: usize) -> &SessionFrame {
        let count = self.question_count();
        if index >= count {
            debug!(index, count, "question index clamped");
        }
        self.state.select(index, count);
        debug!(index = self.state.current_index(), "question selected");
        self.refresh()
    }

    /// Step back one question; stays put on the first.
    pub fn prev(&mut self) -> &SessionFrame {
        self.state.prev(self.question_count());
        debug!(index = self.state.current_index(), "previous question");
        self.refresh()
    }

    /// Step forward one question; stays put on the last.
    pub fn next(&mut self) -> &SessionFrame {
        self.state.next(self.question_count());
        debug!(index = self.state.current_index(), "next question");
        self.refresh()
    }

    /// Apply a learner-typed value to one coordinate of point `index`.
    ///
    /// Anything that is not a finite real within `MAX_COORDINATE` is ignored
    /// and the previous value is kept.
    pub fn edit_point(&mut self, index: usize, coordinate: Coordinate, raw: &str) -> EditOutcome {
        match parse_coordinate_value(raw) {
            Some(value) => self.set_point(index, coordinate, value),
            None => {
                debug!(index, %coordinate, raw, "ignored non-numeric point edit");
                EditOutcome::Rejected(EditRejection::InvalidValue)
            }
        }
    }

    /// Overwrite one coordinate of point `index` on the current question.
    pub fn set_point(&mut self, index: usize, coordinate: Coordinate, value: f64) -> EditOutcome {
        if !is_coordinate_value(value) {
            debug!(index, %coordinate, value, "ignored out-of-range point edit");
            return EditOutcome::Rejected(EditRejection::InvalidValue);
        }

        let current = self.state.current_index();
        let Some(question) = self.catalog.get_mut(current) else {
            return EditOutcome::Rejected(EditRejection::UnknownPoint { index });
        };
        if !question.set_coordinate(index, coordinate, value) {
            warn!(
                index,
                points = question.point_count(),
                "edit targets a point the question does not have"
            );
            return EditOutcome::Rejected(EditRejection::UnknownPoint { index });
        }

        debug!(question = current, index, %coordinate, value, "point edited");
        self.refresh();
        EditOutcome::Applied
    }

    /// Show or hide the worked solution for the current question.
    pub fn toggle_reveal(&mut self) -> &SessionFrame {
        let visible = self.state.toggle_solution();
        debug!(visible, "solution toggled");
        self.refresh()
    }

    fn refresh(&mut self) -> &SessionFrame {
        self.frame = build_frame(&self.catalog, self.state, &self.viewport);
        &self.frame
    }
}

fn build_frame(catalog: &Catalog, state: SessionState, viewport: &Viewport) -> SessionFrame {
    let index = state.current_index();
    let question = &catalog.questions()[index];
    let plot = render_question(question, viewport);
    let solution = state
        .solution_visible()
        .then(|| compute_solution(question));
    SessionFrame::build(index, catalog.len(), question, plot, solution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_edit_keeps_frame() {
        let mut session = SessionService::builtin().unwrap();
        let before = session.frame().clone();
        assert_eq!(
            session.edit_point(0, Coordinate::X, "abc"),
            EditOutcome::Rejected(EditRejection::InvalidValue)
        );
        assert_eq!(
            session.edit_point(7, Coordinate::X, "1"),
            EditOutcome::Rejected(EditRejection::UnknownPoint { index: 7 })
        );
        assert_eq!(session.frame(), &before);
    }

    #[test]
    fn frame_tracks_selected_question() {
        let mut session = SessionService::builtin().unwrap();
        let frame = session.select_question(3);
        assert_eq!(frame.index, 3);
        assert_eq!(frame.controls.len(), 4);
        assert!(!frame.can_next());
        assert!(frame.can_prev());
        assert_eq!(frame.equation, "y = 0.5x² \u{2212} 1x + 1");
    }
}
