use fit_core::mapping::Viewport;
use services::{Catalog, SessionError, SessionService};

/// Startup configuration handed to the UI by the composition root
/// (`crates/app`).
#[derive(Clone, Debug)]
pub struct AppContext {
    catalog: Catalog,
    viewport: Viewport,
    start_index: usize,
}

impl AppContext {
    #[must_use]
    pub fn new(catalog: Catalog, viewport: Viewport) -> Self {
        Self {
            catalog,
            viewport,
            start_index: 0,
        }
    }

    #[must_use]
    pub fn with_start_index(mut self, index: usize) -> Self {
        self.start_index = index;
        self
    }

    /// A fresh session over this context's catalog.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Viewport` if the configured viewport is unusable.
    pub fn start_session(&self) -> Result<SessionService, SessionError> {
        let mut session = SessionService::with_viewport(self.catalog.clone(), self.viewport)?;
        if self.start_index > 0 {
            session.select_question(self.start_index);
        }
        Ok(session)
    }
}
