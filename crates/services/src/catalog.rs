//! Question catalogs: the builtin set or a JSON file of question records.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use fit_core::catalog::builtin_questions;
use fit_core::model::Question;
use tracing::info;

use crate::error::CatalogError;

/// An ordered, non-empty list of questions with unique ids.
///
/// The number of questions, each question's model family and each
/// question's point count are fixed for the catalog's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` for no questions and
    /// `CatalogError::DuplicateId` if two questions share an id.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(CatalogError::DuplicateId(question.id()));
            }
        }
        Ok(Self { questions })
    }

    /// The four builtin exercises.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Question` if a builtin record is invalid.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(builtin_questions()?)
    }

    /// Parse a JSON array of question records.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Json` for malformed input or records that fail
    /// question validation, plus the errors of [`Catalog::new`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        Self::new(questions)
    }

    /// Read and parse a JSON catalog file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, plus the
    /// errors of [`Catalog::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        info!(path = %path.display(), questions = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// # Errors
    ///
    /// Returns `CatalogError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&self.questions)?)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Question> {
        self.questions.get_mut(index)
    }
}
