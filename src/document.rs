//! Fetch state for a single displayed document.

use std::fmt::Display;

/// Outcome of the most recent fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchOutcome {
    /// No request has been issued.
    #[default]
    Idle,
    /// A request is in flight.
    Pending,
    /// The response body.
    Success(String),
    /// One line describing why the fetch failed.
    Failure(String),
}

/// Identifies one call to [`DocumentState::begin`].
///
/// Only the ticket of the latest request may resolve the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Ticket(u64);

/// Tracks the requested URL and the current fetch outcome.
///
/// At most one outcome is current at a time. Starting a new request
/// supersedes the previous one, and results that arrive for a superseded
/// request are discarded instead of overwriting newer state.
#[derive(Debug, Clone, Default)]
pub struct DocumentState {
    generation: u64,
    url: Option<String>,
    outcome: FetchOutcome,
}

impl DocumentState {
    /// Creates an idle state with no URL.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a request for `url` as pending.
    ///
    /// Blank URLs issue no request: the state is left untouched and `None`
    /// is returned.
    pub fn begin(&mut self, url: &str) -> Option<Ticket> {
        if url.trim().is_empty() {
            return None;
        }

        self.generation += 1;
        self.url = Some(url.to_string());
        self.outcome = FetchOutcome::Pending;

        Some(Ticket(self.generation))
    }

    /// Applies a fetch result.
    ///
    /// Returns `false` and leaves the state unchanged when `ticket` belongs
    /// to a superseded request.
    pub fn resolve<E: Display>(&mut self, ticket: Ticket, result: Result<String, E>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }

        self.outcome = match result {
            Ok(text) => FetchOutcome::Success(text),
            Err(err) => FetchOutcome::Failure(err.to_string()),
        };

        true
    }

    /// URL of the latest request.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn outcome(&self) -> &FetchOutcome {
        &self.outcome
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.outcome, FetchOutcome::Pending)
    }

    /// Error message of a failed fetch.
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            FetchOutcome::Failure(message) => Some(message),
            _ => None,
        }
    }

    /// Fetched body; empty unless the latest fetch succeeded.
    pub fn content(&self) -> &str {
        match &self.outcome {
            FetchOutcome::Success(text) => text,
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        // Arrange & Act
        let state = DocumentState::new();

        // Assert
        assert_eq!(state.outcome(), &FetchOutcome::Idle);
        assert_eq!(state.url(), None);
        assert!(!state.is_loading());
        assert_eq!(state.content(), "");
    }

    #[test]
    fn test_begin_blank_url_issues_no_request() {
        // Arrange
        let mut state = DocumentState::new();

        // Act
        let ticket = state.begin("   ");

        // Assert
        assert!(ticket.is_none(), "Blank URL should not start a request");
        assert_eq!(state.outcome(), &FetchOutcome::Idle);
        assert_eq!(state.url(), None);
    }

    #[test]
    fn test_begin_marks_pending() {
        // Arrange
        let mut state = DocumentState::new();

        // Act
        let ticket = state.begin("https://example.com/doc.md");

        // Assert
        assert!(ticket.is_some());
        assert!(state.is_loading());
        assert_eq!(state.url(), Some("https://example.com/doc.md"));
    }

    #[test]
    fn test_resolve_success() {
        // Arrange
        let mut state = DocumentState::new();
        let ticket = state.begin("https://example.com/doc.md").expect("Should start");

        // Act
        let applied = state.resolve::<String>(ticket, Ok("# Title".to_string()));

        // Assert
        assert!(applied);
        assert_eq!(state.content(), "# Title");
        assert_eq!(state.error(), None);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_resolve_failure_clears_content() {
        // Arrange
        let mut state = DocumentState::new();
        let first = state.begin("https://example.com/a.md").expect("Should start");
        let _ = state.resolve::<String>(first, Ok("old content".to_string()));
        let second = state.begin("https://example.com/b.md").expect("Should start");

        // Act
        let applied = state.resolve(second, Err("HTTP error! status: 404"));

        // Assert
        assert!(applied);
        assert_eq!(state.error(), Some("HTTP error! status: 404"));
        assert_eq!(state.content(), "", "Failure should leave no content");
    }

    #[test]
    fn test_stale_result_is_discarded() {
        // Arrange
        let mut state = DocumentState::new();
        let stale = state.begin("https://example.com/slow.md").expect("Should start");
        let latest = state.begin("https://example.com/fast.md").expect("Should start");
        let _ = state.resolve::<String>(latest, Ok("fast".to_string()));

        // Act
        let applied = state.resolve::<String>(stale, Ok("slow".to_string()));

        // Assert
        assert!(!applied, "Superseded result should be ignored");
        assert_eq!(state.content(), "fast");
        assert_eq!(state.url(), Some("https://example.com/fast.md"));
    }

    #[test]
    fn test_stale_result_does_not_end_pending() {
        // Arrange
        let mut state = DocumentState::new();
        let stale = state.begin("https://example.com/a.md").expect("Should start");
        let _latest = state.begin("https://example.com/b.md").expect("Should start");

        // Act
        let applied = state.resolve(stale, Err("connection reset"));

        // Assert
        assert!(!applied);
        assert!(state.is_loading(), "Latest request is still in flight");
        assert_eq!(state.error(), None);
    }
}
