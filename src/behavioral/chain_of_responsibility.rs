// Chain of Responsibility: a request travels along linked handlers until one
// of them takes it, or falls off the end of the chain.

use crate::trace::Trace;
use std::cell::RefCell;
use std::rc::Rc;

// ============================================================================
// Handler role and the shared link
// ============================================================================

pub trait Handler {
    /// Links `next` after this handler and returns it, so chains read
    /// left to right: `monkey.set_next(squirrel).set_next(dog)`.
    fn set_next(&self, next: Rc<dyn Handler>) -> Rc<dyn Handler>;

    fn handle(&self, request: &str) -> Option<String>;
}

/// The forwarding half every concrete handler embeds.
#[derive(Default)]
pub struct Link {
    next: RefCell<Option<Rc<dyn Handler>>>,
}

impl Link {
    pub fn set(&self, next: Rc<dyn Handler>) -> Rc<dyn Handler> {
        *self.next.borrow_mut() = Some(Rc::clone(&next));
        next
    }

    pub fn forward(&self, request: &str) -> Option<String> {
        match self.next.borrow().as_ref() {
            Some(next) => next.handle(request),
            None => {
                tracing::debug!(request, "end of chain reached");
                None
            }
        }
    }
}

// ============================================================================
// Concrete handlers
// ============================================================================

fn eat(animal: &str, request: &str) -> String {
    format!("{}: I'll eat the {}.", animal, request)
}

#[derive(Default)]
pub struct MonkeyHandler {
    link: Link,
}

impl Handler for MonkeyHandler {
    fn set_next(&self, next: Rc<dyn Handler>) -> Rc<dyn Handler> {
        self.link.set(next)
    }

    fn handle(&self, request: &str) -> Option<String> {
        if request == "Banana" {
            Some(eat("Monkey", request))
        } else {
            self.link.forward(request)
        }
    }
}

#[derive(Default)]
pub struct SquirrelHandler {
    link: Link,
}

impl Handler for SquirrelHandler {
    fn set_next(&self, next: Rc<dyn Handler>) -> Rc<dyn Handler> {
        self.link.set(next)
    }

    fn handle(&self, request: &str) -> Option<String> {
        if request == "Nut" {
            Some(eat("Squirrel", request))
        } else {
            self.link.forward(request)
        }
    }
}

#[derive(Default)]
pub struct DogHandler {
    link: Link,
}

impl Handler for DogHandler {
    fn set_next(&self, next: Rc<dyn Handler>) -> Rc<dyn Handler> {
        self.link.set(next)
    }

    fn handle(&self, request: &str) -> Option<String> {
        if request == "MeatBall" {
            Some(eat("Dog", request))
        } else {
            self.link.forward(request)
        }
    }
}

// ============================================================================
// Client
// ============================================================================

pub const FOODS: [&str; 3] = ["Nut", "Banana", "Cup of coffee"];

pub fn client_code(handler: &dyn Handler, trace: &mut Trace) {
    for food in FOODS {
        trace.line(format!("Client: Who wants a {}?", food));
        match handler.handle(food) {
            Some(result) => trace.line(format!("\t{}", result)),
            None => trace.line(format!("\t{} was left untouched.", food)),
        }
    }
}

pub fn demo() -> Trace {
    let mut trace = Trace::new();

    let monkey: Rc<dyn Handler> = Rc::new(MonkeyHandler::default());
    let squirrel: Rc<dyn Handler> = Rc::new(SquirrelHandler::default());
    let dog: Rc<dyn Handler> = Rc::new(DogHandler::default());
    monkey.set_next(Rc::clone(&squirrel)).set_next(dog);

    trace.line("Chain: Monkey -> Squirrel -> Dog");
    trace.blank();
    client_code(monkey.as_ref(), &mut trace);

    trace.blank();
    trace.line("Subchain: Squirrel -> Dog");
    trace.blank();
    client_code(squirrel.as_ref(), &mut trace);

    trace
}

// ============================================================================
// Tests
// ============================================================================
