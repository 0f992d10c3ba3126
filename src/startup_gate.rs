use std::sync::Mutex;

use crate::MAIN_WINDOW_LABEL;

/// One-shot holder for the startup handler. The handler runs at most once
/// per gate, no matter how many times the gate is fired.
pub(crate) struct StartupGate<T> {
    handler: Mutex<Option<Box<dyn FnOnce(T) + Send>>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GateOutcome {
    Invoked,
    AlreadySpent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ActivationDecision {
    RunStartupEntry,
    Ignore,
}

pub(crate) fn decide_activation(window_label: &str, focused: bool) -> ActivationDecision {
    if focused && window_label == MAIN_WINDOW_LABEL {
        ActivationDecision::RunStartupEntry
    } else {
        ActivationDecision::Ignore
    }
}

impl<T> StartupGate<T> {
    pub(crate) fn new(handler: impl FnOnce(T) + Send + 'static) -> Self {
        Self {
            handler: Mutex::new(Some(Box::new(handler))),
        }
    }

    /// The handler is taken out and the lock released before it is invoked,
    /// so a synchronous re-fire from inside the handler observes a spent
    /// gate instead of deadlocking or running twice.
    pub(crate) fn fire(&self, payload: T) -> GateOutcome {
        let handler = match self.handler.lock() {
            Ok(mut armed) => armed.take(),
            Err(_) => None,
        };

        match handler {
            Some(handler) => {
                handler(payload);
                GateOutcome::Invoked
            }
            None => GateOutcome::AlreadySpent,
        }
    }

    pub(crate) fn is_spent(&self) -> bool {
        self.handler
            .lock()
            .map(|armed| armed.is_none())
            .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    };

    use super::{decide_activation, ActivationDecision, GateOutcome, StartupGate};

    #[test]
    fn fire_invokes_handler_exactly_once_across_repeated_activations() {
        let invocations = Arc::new(AtomicUsize::new(0));
        let counted = invocations.clone();
        let gate = StartupGate::new(move |()| {
            counted.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(gate.fire(()), GateOutcome::Invoked);
        assert_eq!(gate.fire(()), GateOutcome::AlreadySpent);
        assert_eq!(gate.fire(()), GateOutcome::AlreadySpent);
        assert_eq!(invocations.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn gate_is_spent_before_handler_body_runs() {
        let reentrant_outcome = Arc::new(Mutex::new(None));
        let observed = reentrant_outcome.clone();
        let gate = Arc::new_cyclic(|weak: &std::sync::Weak<StartupGate<()>>| {
            let weak = weak.clone();
            StartupGate::new(move |()| {
                let gate = weak.upgrade().expect("gate alive while handler runs");
                assert!(gate.is_spent());
                *observed.lock().expect("outcome lock") = Some(gate.fire(()));
            })
        });

        assert_eq!(gate.fire(()), GateOutcome::Invoked);
        assert_eq!(
            *reentrant_outcome.lock().expect("outcome lock"),
            Some(GateOutcome::AlreadySpent)
        );
    }

    #[test]
    fn handler_receives_the_payload_of_the_winning_fire() {
        let received = Arc::new(Mutex::new(None));
        let sink = received.clone();
        let gate = StartupGate::new(move |payload: String| {
            *sink.lock().expect("payload lock") = Some(payload);
        });

        assert_eq!(gate.fire("main-window-handle".to_string()), GateOutcome::Invoked);
        assert_eq!(gate.fire("late-handle".to_string()), GateOutcome::AlreadySpent);
        assert_eq!(
            received.lock().expect("payload lock").as_deref(),
            Some("main-window-handle")
        );
    }

    #[test]
    fn is_spent_transitions_once_from_armed_to_spent() {
        let gate = StartupGate::new(|()| {});
        assert!(!gate.is_spent());
        gate.fire(());
        assert!(gate.is_spent());
        gate.fire(());
        assert!(gate.is_spent());
    }

    #[test]
    fn decide_activation_only_accepts_focus_gain_on_the_main_window() {
        assert_eq!(
            decide_activation("main", true),
            ActivationDecision::RunStartupEntry
        );
        assert_eq!(decide_activation("main", false), ActivationDecision::Ignore);
        assert_eq!(decide_activation("modal-1", true), ActivationDecision::Ignore);
        assert_eq!(decide_activation("modal-1", false), ActivationDecision::Ignore);
    }
}
