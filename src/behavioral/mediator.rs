// Mediator: components never call each other directly. They report events to
// a coordinator, and the coordinator decides who reacts.

use crate::trace::Trace;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    A,
    B,
    C,
    D,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Component1,
    Component2,
}

pub trait Mediator {
    fn notify(&self, sender: Sender, event: Event, trace: &mut Trace);
}

// ============================================================================
// Components
// ============================================================================

/// Non-owning handle to the mediator. The mediator owns the components,
/// so the link back has to be weak.
#[derive(Default)]
pub struct BaseComponent {
    mediator: RefCell<Option<Weak<dyn Mediator>>>,
}

impl BaseComponent {
    pub fn set_mediator(&self, mediator: Weak<dyn Mediator>) {
        *self.mediator.borrow_mut() = Some(mediator);
    }

    fn notify(&self, sender: Sender, event: Event, trace: &mut Trace) {
        let mediator = self.mediator.borrow().as_ref().and_then(Weak::upgrade);
        match mediator {
            Some(mediator) => mediator.notify(sender, event, trace),
            None => tracing::debug!(?sender, ?event, "no mediator attached"),
        }
    }
}

#[derive(Default)]
pub struct Component1 {
    base: BaseComponent,
}

impl Component1 {
    pub fn set_mediator(&self, mediator: Weak<dyn Mediator>) {
        self.base.set_mediator(mediator);
    }

    pub fn do_a(&self, trace: &mut Trace) {
        trace.line("Component1 does A.");
        self.base.notify(Sender::Component1, Event::A, trace);
    }

    pub fn do_b(&self, trace: &mut Trace) {
        trace.line("Component1 does B.");
        self.base.notify(Sender::Component1, Event::B, trace);
    }
}

#[derive(Default)]
pub struct Component2 {
    base: BaseComponent,
}

impl Component2 {
    pub fn set_mediator(&self, mediator: Weak<dyn Mediator>) {
        self.base.set_mediator(mediator);
    }

    pub fn do_c(&self, trace: &mut Trace) {
        trace.line("Component2 does C.");
        self.base.notify(Sender::Component2, Event::C, trace);
    }

    pub fn do_d(&self, trace: &mut Trace) {
        trace.line("Component2 does D.");
        self.base.notify(Sender::Component2, Event::D, trace);
    }
}

// ============================================================================
// Concrete mediator
// ============================================================================

pub struct ConcreteMediator {
    component1: Rc<Component1>,
    component2: Rc<Component2>,
}

impl ConcreteMediator {
    /// Builds the mediator and registers it with both components.
    pub fn new(component1: Rc<Component1>, component2: Rc<Component2>) -> Rc<Self> {
        let mediator = Rc::new(Self {
            component1,
            component2,
        });
        let handle: Weak<dyn Mediator> = Rc::downgrade(&mediator) as Weak<dyn Mediator>;
        mediator.component1.set_mediator(handle.clone());
        mediator.component2.set_mediator(handle);
        mediator
    }
}

impl Mediator for ConcreteMediator {
    fn notify(&self, sender: Sender, event: Event, trace: &mut Trace) {
        tracing::debug!(?sender, ?event, "mediator notified");
        match event {
            Event::A => {
                trace.line("Mediator reacts on A and triggers following operations:");
                self.component2.do_c(trace);
            }
            Event::D => {
                trace.line("Mediator reacts on D and triggers following operations:");
                self.component1.do_b(trace);
                self.component2.do_c(trace);
            }
            Event::B | Event::C => {}
        }
    }
}

pub fn demo() -> Trace {
    let mut trace = Trace::new();

    let c1 = Rc::new(Component1::default());
    let c2 = Rc::new(Component2::default());
    let _mediator = ConcreteMediator::new(Rc::clone(&c1), Rc::clone(&c2));

    trace.line("Client triggers operation A.");
    c1.do_a(&mut trace);
    trace.blank();
    trace.line("Client triggers operation D.");
    c2.do_d(&mut trace);

    trace
}
