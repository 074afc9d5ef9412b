// Memento: capture an object's state in an opaque snapshot so it can be
// rolled back later without exposing the object's internals.
//
// The caretaker only sees `Memento::metadata`. The payload is private and
// tagged, and `Originator::restore` matches on the tag instead of asking for
// the concrete type at runtime.

use crate::trace::Trace;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;

const RANDOM_STATE_LEN: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Payload {
    Originator(String),
    Foreign,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memento {
    metadata: String,
    payload: Payload,
}

impl Memento {
    /// A snapshot produced by something other than [`Originator`].
    /// Restoring from it leaves the originator untouched.
    pub fn foreign(metadata: impl Into<String>) -> Self {
        Self {
            metadata: metadata.into(),
            payload: Payload::Foreign,
        }
    }

    pub fn metadata(&self) -> &str {
        &self.metadata
    }
}

// ============================================================================
// Originator
// ============================================================================

#[derive(Debug)]
pub struct Originator {
    state: String,
}

impl Originator {
    pub fn new(state: impl Into<String>, trace: &mut Trace) -> Self {
        let state = state.into();
        trace.line(format!("Originator: My initial state is: {}", state));
        Self { state }
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn do_something(&mut self, trace: &mut Trace) {
        trace.line("Originator: I'm doing something important.");
        self.state = generate_random_string(RANDOM_STATE_LEN);
        trace.line(format!(
            "Originator: and my state has changed to: {}",
            self.state
        ));
    }

    pub fn save(&self) -> Memento {
        Memento {
            metadata: "some metadata".to_string(),
            payload: Payload::Originator(self.state.clone()),
        }
    }

    pub fn restore(&mut self, memento: &Memento, trace: &mut Trace) {
        match &memento.payload {
            Payload::Originator(state) => {
                self.state = state.clone();
                trace.line(format!("Originator: My state has changed to: {}", self.state));
            }
            Payload::Foreign => {
                tracing::warn!(metadata = memento.metadata(), "incompatible memento");
                trace.line("Originator: My state not changed, because I got not correct memento");
            }
        }
    }
}

fn generate_random_string(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

// ============================================================================
// Caretaker
// ============================================================================

pub struct Caretaker {
    mementos: Vec<Memento>,
    originator: Rc<RefCell<Originator>>,
}

impl Caretaker {
    pub fn new(originator: Rc<RefCell<Originator>>) -> Self {
        Self {
            mementos: Vec::new(),
            originator,
        }
    }

    pub fn backup(&mut self, trace: &mut Trace) {
        trace.blank();
        trace.line("Caretaker: Saving Originator's state...");
        let memento = self.originator.borrow().save();
        trace.line(format!("Caretaker: Memento's metadata: {}", memento.metadata()));
        self.mementos.push(memento);
    }

    /// Stores a snapshot that did not come from this caretaker's originator.
    pub fn push(&mut self, memento: Memento) {
        self.mementos.push(memento);
    }

    /// Rolls back one step; does nothing when there is no history.
    pub fn undo(&mut self, trace: &mut Trace) {
        let Some(memento) = self.mementos.pop() else {
            tracing::debug!("undo with empty history");
            return;
        };
        trace.line("Caretaker: Restoring state");
        self.originator.borrow_mut().restore(&memento, trace);
    }

    pub fn show_history(&self, trace: &mut Trace) {
        trace.line("Caretaker: Here's the list of mementos:");
        for memento in &self.mementos {
            trace.line(memento.metadata());
        }
    }

    pub fn len(&self) -> usize {
        self.mementos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mementos.is_empty()
    }
}

pub fn demo() -> Trace {
    let mut trace = Trace::new();

    let originator = Rc::new(RefCell::new(Originator::new("initial state", &mut trace)));
    let mut caretaker = Caretaker::new(Rc::clone(&originator));

    caretaker.backup(&mut trace);
    originator.borrow_mut().do_something(&mut trace);

    trace.blank();
    caretaker.show_history(&mut trace);

    trace.blank();
    caretaker.undo(&mut trace);

    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared_originator(state: &str) -> Rc<RefCell<Originator>> {
        let mut trace = Trace::new();
        Rc::new(RefCell::new(Originator::new(state, &mut trace)))
    }

    #[test]
    fn test_save_mutate_restore_round_trip() {
        let mut trace = Trace::new();
        let mut originator = Originator::new("initial state", &mut trace);

        let snapshot = originator.save();
        originator.do_something(&mut trace);
        assert_ne!(originator.state(), "initial state");
        assert_eq!(originator.state().len(), RANDOM_STATE_LEN);

        originator.restore(&snapshot, &mut trace);
        assert_eq!(originator.state(), "initial state");
        assert!(trace.contains("Originator: My state has changed to: initial state"));
    }

    #[test]
    fn test_foreign_memento_is_rejected() {
        let mut trace = Trace::new();
        let mut originator = Originator::new("kept", &mut trace);

        originator.restore(&Memento::foreign("from elsewhere"), &mut trace);
        assert_eq!(originator.state(), "kept");
        assert!(trace.contains("Originator: My state not changed, because I got not correct memento"));
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let originator = shared_originator("s");
        let mut caretaker = Caretaker::new(Rc::clone(&originator));
        let mut trace = Trace::new();

        caretaker.undo(&mut trace);
        assert!(trace.is_empty());
        assert_eq!(originator.borrow().state(), "s");
    }

    #[test]
    fn test_undo_is_lifo_one_step_at_a_time() {
        let originator = shared_originator("first");
        let mut caretaker = Caretaker::new(Rc::clone(&originator));
        let mut trace = Trace::new();

        caretaker.backup(&mut trace);
        originator.borrow_mut().do_something(&mut trace);
        let second = originator.borrow().state().to_string();
        caretaker.backup(&mut trace);
        originator.borrow_mut().do_something(&mut trace);
        assert_eq!(caretaker.len(), 2);

        caretaker.undo(&mut trace);
        assert_eq!(originator.borrow().state(), second);
        caretaker.undo(&mut trace);
        assert_eq!(originator.borrow().state(), "first");
        assert!(caretaker.is_empty());
    }

    #[test]
    fn test_caretaker_pops_foreign_memento() {
        let originator = shared_originator("mine");
        let mut caretaker = Caretaker::new(Rc::clone(&originator));
        caretaker.push(Memento::foreign("someone else"));

        let mut trace = Trace::new();
        caretaker.undo(&mut trace);
        assert_eq!(originator.borrow().state(), "mine");
        assert!(caretaker.is_empty());
    }

    #[test]
    fn test_show_history_lists_metadata() {
        let originator = shared_originator("x");
        let mut caretaker = Caretaker::new(originator);
        let mut trace = Trace::new();
        caretaker.backup(&mut trace);

        let mut history = Trace::new();
        caretaker.show_history(&mut history);
        assert_eq!(
            history.lines(),
            ["Caretaker: Here's the list of mementos:", "some metadata"]
        );
    }

    #[test]
    fn test_demo_ends_restored() {
        let trace = demo();
        assert_eq!(
            trace.lines().last().map(String::as_str),
            Some("Originator: My state has changed to: initial state")
        );
    }
}
