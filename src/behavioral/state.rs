// State: the context forwards requests to its current state object, and the
// state objects decide when to swap themselves for another one.

use crate::trace::Trace;

/// A state runs detached from its `Context`: while `handle1`/`handle2` execute,
/// `context.state_name()` is `None` and nested `request1`/`request2` calls on
/// the context are ignored. Calling `transition_to` is the only way a state
/// should act on the context.
pub trait State {
    fn name(&self) -> &'static str;
    fn handle1(&mut self, context: &mut Context, trace: &mut Trace);
    fn handle2(&mut self, context: &mut Context, trace: &mut Trace);
}

pub struct Context {
    state: Option<Box<dyn State>>,
}

impl Context {
    pub fn new(state: Box<dyn State>, trace: &mut Trace) -> Self {
        let mut context = Self { state: None };
        context.transition_to(state, trace);
        context
    }

    /// Installs `state`. The previous state is dropped here, unless it is the
    /// one currently handling a request, in which case it is dropped as soon
    /// as that request returns.
    pub fn transition_to(&mut self, state: Box<dyn State>, trace: &mut Trace) {
        trace.line(format!("Context: Transition to {}.", state.name()));
        tracing::debug!(to = state.name(), "state transition");
        self.state = Some(state);
    }

    pub fn state_name(&self) -> Option<&'static str> {
        self.state.as_ref().map(|state| state.name())
    }

    pub fn request1(&mut self, trace: &mut Trace) {
        self.dispatch(trace, |state, context, trace| state.handle1(context, trace));
    }

    pub fn request2(&mut self, trace: &mut Trace) {
        self.dispatch(trace, |state, context, trace| state.handle2(context, trace));
    }

    // The active state is taken out while it runs so it can borrow the
    // context mutably. If it did not transition, it goes back in.
    fn dispatch<F>(&mut self, trace: &mut Trace, handle: F)
    where
        F: FnOnce(&mut dyn State, &mut Context, &mut Trace),
    {
        let Some(mut current) = self.state.take() else {
            tracing::warn!("request on a context without state");
            return;
        };
        handle(current.as_mut(), self, trace);
        if self.state.is_none() {
            self.state = Some(current);
        }
    }
}

// ============================================================================
// Concrete states
// ============================================================================

#[derive(Debug, Default)]
pub struct ConcreteStateA;

impl State for ConcreteStateA {
    fn name(&self) -> &'static str {
        "ConcreteStateA"
    }

    fn handle1(&mut self, context: &mut Context, trace: &mut Trace) {
        trace.line("ConcreteStateA handles request1.");
        trace.line("ConcreteStateA wants to change the state of the context.");
        context.transition_to(Box::new(ConcreteStateB), trace);
    }

    fn handle2(&mut self, _context: &mut Context, trace: &mut Trace) {
        trace.line("ConcreteStateA handles request2.");
    }
}

#[derive(Debug, Default)]
pub struct ConcreteStateB;

impl State for ConcreteStateB {
    fn name(&self) -> &'static str {
        "ConcreteStateB"
    }

    fn handle1(&mut self, _context: &mut Context, trace: &mut Trace) {
        trace.line("ConcreteStateB handles request1.");
    }

    fn handle2(&mut self, context: &mut Context, trace: &mut Trace) {
        trace.line("ConcreteStateB handles request2.");
        trace.line("ConcreteStateB wants to change the state of the context.");
        context.transition_to(Box::new(ConcreteStateA), trace);
    }
}

pub fn demo() -> Trace {
    let mut trace = Trace::new();

    let mut context = Context::new(Box::new(ConcreteStateA), &mut trace);
    trace.blank();
    context.request1(&mut trace);
    trace.blank();
    context.request2(&mut trace);

    trace
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_round_trip_a_b_a() {
        let mut trace = Trace::new();
        let mut context = Context::new(Box::new(ConcreteStateA), &mut trace);
        assert_eq!(context.state_name(), Some("ConcreteStateA"));

        context.request1(&mut trace);
        assert_eq!(context.state_name(), Some("ConcreteStateB"));

        context.request2(&mut trace);
        assert_eq!(context.state_name(), Some("ConcreteStateA"));
    }

    #[test]
    fn test_non_transitioning_requests_keep_state() {
        let mut trace = Trace::new();
        let mut context = Context::new(Box::new(ConcreteStateA), &mut trace);
        context.request2(&mut trace);
        context.request2(&mut trace);
        assert_eq!(context.state_name(), Some("ConcreteStateA"));
    }

    #[test]
    fn test_demo_trace() {
        let trace = demo();
        assert_eq!(
            trace.lines(),
            [
                "Context: Transition to ConcreteStateA.",
                "",
                "ConcreteStateA handles request1.",
                "ConcreteStateA wants to change the state of the context.",
                "Context: Transition to ConcreteStateB.",
                "",
                "ConcreteStateB handles request2.",
                "ConcreteStateB wants to change the state of the context.",
                "Context: Transition to ConcreteStateA.",
            ]
        );
    }

    /// Counts drops so the release of replaced states can be checked.
    struct Counted {
        drops: Rc<Cell<usize>>,
        next: Option<Box<dyn State>>,
    }

    impl Drop for Counted {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    impl State for Counted {
        fn name(&self) -> &'static str {
            "Counted"
        }

        fn handle1(&mut self, context: &mut Context, trace: &mut Trace) {
            if let Some(next) = self.next.take() {
                context.transition_to(next, trace);
            }
        }

        fn handle2(&mut self, _context: &mut Context, _trace: &mut Trace) {}
    }

    #[test]
    fn test_replaced_state_released_exactly_once() {
        let drops = Rc::new(Cell::new(0));
        let mut trace = Trace::new();
        let mut context = Context::new(
            Box::new(Counted {
                drops: Rc::clone(&drops),
                next: Some(Box::new(ConcreteStateB)),
            }),
            &mut trace,
        );

        context.request2(&mut trace);
        assert_eq!(drops.get(), 0);

        context.request1(&mut trace);
        assert_eq!(drops.get(), 1);
        assert_eq!(context.state_name(), Some("ConcreteStateB"));

        drop(context);
        assert_eq!(drops.get(), 1);
    }

    /// Tries to re-enter the context from inside its own handler.
    struct Reentrant {
        seen_name: Rc<Cell<Option<&'static str>>>,
    }

    impl State for Reentrant {
        fn name(&self) -> &'static str {
            "Reentrant"
        }

        fn handle1(&mut self, context: &mut Context, trace: &mut Trace) {
            self.seen_name.set(context.state_name());
            context.request2(trace);
        }

        fn handle2(&mut self, _context: &mut Context, trace: &mut Trace) {
            trace.line("Reentrant handles request2.");
        }
    }

    #[test]
    fn test_nested_request_from_handler_is_ignored() {
        let seen_name = Rc::new(Cell::new(Some("unset")));
        let mut trace = Trace::new();
        let mut context = Context::new(
            Box::new(Reentrant {
                seen_name: Rc::clone(&seen_name),
            }),
            &mut trace,
        );

        context.request1(&mut trace);

        assert_eq!(seen_name.get(), None);
        assert!(!trace.contains("Reentrant handles request2."));
        assert_eq!(context.state_name(), Some("Reentrant"));

        context.request2(&mut trace);
        assert!(trace.contains("Reentrant handles request2."));
    }

    #[test]
    fn test_direct_transition_drops_previous_immediately() {
        let drops = Rc::new(Cell::new(0));
        let mut trace = Trace::new();
        let mut context = Context::new(
            Box::new(Counted {
                drops: Rc::clone(&drops),
                next: None,
            }),
            &mut trace,
        );
        context.transition_to(Box::new(ConcreteStateA), &mut trace);
        assert_eq!(drops.get(), 1);
    }
}
