/// Which question is on screen and whether its answer is revealed.
///
/// Starts at `(0, false)`; only [`super::SessionService`] mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionState {
    current_index: usize,
    solution_visible: bool,
}

impl SessionState {
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn solution_visible(&self) -> bool {
        self.solution_visible
    }

    /// Move to `index` clamped into `[0, count)` and hide the solution.
    pub(crate) fn select(&mut self, index: usize, count: usize) {
        self.current_index = index.min(count.saturating_sub(1));
        self.solution_visible = false;
    }

    pub(crate) fn prev(&mut self, count: usize) {
        self.select(self.current_index.saturating_sub(1), count);
    }

    pub(crate) fn next(&mut self, count: usize) {
        self.select(self.current_index.saturating_add(1), count);
    }

    /// Flip visibility and return the new value.
    pub(crate) fn toggle_solution(&mut self) -> bool {
        self.solution_visible = !self.solution_visible;
        self.solution_visible
    }
}
