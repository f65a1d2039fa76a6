//! Global Application State Store
//!
//! The todo state lives in a single `RwSignal`; `SignalState` lets the
//! sync client mutate it directly.

use leptos::prelude::*;
use todo_sync::{HttpApi, StateCell, TodoClient, TodoState};

/// `StateCell` over a Leptos signal.
///
/// Reads and writes return `None` once the signal has been disposed, so a
/// request that resolves after the UI is gone is dropped quietly.
#[derive(Clone, Copy)]
pub struct SignalState(pub RwSignal<TodoState>);

impl StateCell for SignalState {
    fn update<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> Option<R> {
        self.0.try_update(f)
    }

    fn read<R>(&self, f: impl FnOnce(&TodoState) -> R) -> Option<R> {
        self.0.try_with_untracked(f)
    }
}

/// Client type used by the app
pub type AppClient = TodoClient<HttpApi, SignalState>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_signal_state_reads_its_writes() {
        let signal = RwSignal::new(TodoState::new(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()));
        let cell = SignalState(signal);

        cell.update(|s| s.draft.title = "from the client".to_string());

        assert_eq!(
            signal.with_untracked(|s| s.draft.title.clone()),
            "from the client"
        );
        assert_eq!(cell.read(|s| s.tasks.len()), Some(0));
    }
}
