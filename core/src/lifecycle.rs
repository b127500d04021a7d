//! Async task lifecycle vocabulary
//!
//! Every remote operation moves through exactly three phases:
//! pending → fulfilled | rejected. This module makes that state machine
//! explicit instead of scattering loading/error bookkeeping across reducers:
//! [`Phase`] is the transition input, [`AsyncState`] is the canonical
//! `(data, loading, error)` triple for a resource, and [`TaskStatus`] is the
//! data-less `(loading, error)` pair for operations whose payload is merged
//! elsewhere.

/// Outcome of one step of an asynchronous operation's lifecycle
///
/// Rejections carry the normalized, user-facing message rather than a
/// structured error: the message is all the slices store and all the dialogs
/// show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase<T> {
    /// The operation started; no result yet
    Pending,
    /// The operation completed with a payload
    Fulfilled(T),
    /// The operation failed with a normalized message
    Rejected(String),
}

/// Canonical slice state for one remote resource
///
/// Invariant: after a completed request cycle exactly one of `error` or fresh
/// `data` holds; `loading` is true only between `Pending` and settlement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AsyncState<T> {
    /// The last successfully fetched payload
    pub data: T,
    /// Whether an operation for this resource is in flight
    pub loading: bool,
    /// Normalized message from the last rejection, if any
    pub error: Option<String>,
}

impl<T: Default> AsyncState<T> {
    /// The single transition function for the three-phase lifecycle
    pub fn apply(&mut self, phase: Phase<T>) {
        match phase {
            Phase::Pending => {
                self.loading = true;
                self.error = None;
            },
            Phase::Fulfilled(data) => {
                self.loading = false;
                self.data = data;
            },
            Phase::Rejected(message) => {
                self.loading = false;
                self.error = Some(message);
            },
        }
    }

    /// Return to the initial state: empty data, not loading, no error
    pub fn reset(&mut self) {
        self.data = T::default();
        self.loading = false;
        self.error = None;
    }
}

/// Lifecycle flags for an operation that stores no payload of its own
///
/// Used for creation operations whose result is merged into another resource's
/// list rather than kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStatus {
    /// Whether the operation is in flight
    pub loading: bool,
    /// Normalized message from the last rejection, if any
    pub error: Option<String>,
}

impl TaskStatus {
    /// Mark the operation in flight and clear any stale error
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Mark the operation settled successfully
    pub const fn succeed(&mut self) {
        self.loading = false;
    }

    /// Mark the operation settled with a failure message
    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Return to the initial state
    pub fn reset(&mut self) {
        self.loading = false;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_sets_loading_and_clears_error() {
        let mut state = AsyncState::<Vec<u32>> {
            data: vec![1],
            loading: false,
            error: Some("stale".to_string()),
        };

        state.apply(Phase::Pending);

        assert!(state.loading);
        assert_eq!(state.error, None);
        // Data from the previous cycle is kept until settlement
        assert_eq!(state.data, vec![1]);
    }

    #[test]
    fn fulfilled_replaces_data() {
        let mut state = AsyncState::<Vec<u32>>::default();
        state.apply(Phase::Pending);
        state.apply(Phase::Fulfilled(vec![3, 2, 1]));

        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.data, vec![3, 2, 1]);
    }

    #[test]
    fn rejected_records_message_and_keeps_data() {
        let mut state = AsyncState::<Vec<u32>> {
            data: vec![5],
            loading: true,
            error: None,
        };

        state.apply(Phase::Rejected("boom".to_string()));

        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert_eq!(state.data, vec![5]);
    }

    #[test]
    fn reset_restores_initial_state_regardless_of_prior() {
        let mut state = AsyncState::<Vec<u32>> {
            data: vec![9, 8],
            loading: true,
            error: Some("boom".to_string()),
        };

        state.reset();

        assert_eq!(state, AsyncState::default());
    }

    #[test]
    fn task_status_cycle() {
        let mut status = TaskStatus::default();

        status.begin();
        assert!(status.loading);

        status.fail("nope".to_string());
        assert!(!status.loading);
        assert_eq!(status.error.as_deref(), Some("nope"));

        status.begin();
        assert_eq!(status.error, None);

        status.succeed();
        assert!(!status.loading);

        status.fail("again".to_string());
        status.reset();
        assert_eq!(status, TaskStatus::default());
    }
}
