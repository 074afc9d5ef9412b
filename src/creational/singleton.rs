// Singleton, in two flavours.
//
// `Singleton::instance` is the classic process-wide instance behind a
// `static OnceLock`: created lazily on first access, and the first caller
// decides its value.
//
// `SingletonCell` keeps the "one lazily created instance" guarantee without a
// global. The owner constructs the cell and passes it to whoever needs it.

use crate::trace::Trace;
use std::cell::{Cell, OnceCell};
use std::sync::OnceLock;
use tracing::debug;

/// Not `Clone` or `Copy`, and only this module can construct one.
#[derive(Debug)]
pub struct Singleton {
    value: String,
}

impl Singleton {
    fn new(value: &str) -> Self {
        debug!(value, "creating singleton");
        Self { value: value.to_string() }
    }

    pub fn instance(value: &str) -> &'static Singleton {
        static INSTANCE: OnceLock<Singleton> = OnceLock::new();
        INSTANCE.get_or_init(|| Singleton::new(value))
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn some_business_logic(&self) -> String {
        format!("Singleton: Running business logic with value {}.", self.value)
    }
}

#[derive(Debug, Default)]
pub struct SingletonCell {
    instance: OnceCell<Singleton>,
    creations: Cell<usize>,
}

impl SingletonCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the instance on the first call; later calls ignore `value`.
    pub fn get(&self, value: &str) -> &Singleton {
        self.instance.get_or_init(|| {
            self.creations.set(self.creations.get() + 1);
            Singleton::new(value)
        })
    }

    pub fn creations(&self) -> usize {
        self.creations.get()
    }
}

pub fn demo() -> Trace {
    let mut trace = Trace::new();

    let first = Singleton::instance("FOO");
    let second = Singleton::instance("BAR");
    trace.line(format!("Client: First lookup sees value {}.", first.value()));
    trace.line(format!("Client: Second lookup sees value {}.", second.value()));
    trace.line(format!(
        "Client: Both lookups return the same instance: {}",
        std::ptr::eq(first, second)
    ));
    trace.line(second.some_business_logic());
    trace.blank();

    let cell = SingletonCell::new();
    let a = cell.get("injected");
    let b = cell.get("ignored");
    trace.line(format!(
        "SingletonCell: {} creation(s), same instance: {}",
        cell.creations(),
        std::ptr::eq(a, b)
    ));
    trace.line(b.some_business_logic());

    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_identity() {
        let a = Singleton::instance("one");
        let b = Singleton::instance("two");
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.value(), b.value());
    }

    #[test]
    fn test_later_value_is_ignored() {
        let first = Singleton::instance("first").value().to_string();
        assert_eq!(Singleton::instance("something else").value(), first);
    }

    #[test]
    fn test_cell_creates_once() {
        let cell = SingletonCell::new();
        assert_eq!(cell.creations(), 0);

        let a = cell.get("first");
        let b = cell.get("second");

        assert!(std::ptr::eq(a, b));
        assert_eq!(b.value(), "first");
        assert_eq!(cell.creations(), 1);
    }

    #[test]
    fn test_separate_cells_are_separate_instances() {
        let left = SingletonCell::new();
        let right = SingletonCell::new();
        assert!(!std::ptr::eq(left.get("x"), right.get("x")));
    }

    #[test]
    fn test_demo() {
        let trace = demo();
        let value = Singleton::instance("unused").value();
        assert_eq!(trace.lines()[0], format!("Client: First lookup sees value {}.", value));
        assert_eq!(trace.lines()[1], format!("Client: Second lookup sees value {}.", value));
        assert!(trace.contains("Client: Both lookups return the same instance: true"));
        assert!(trace.contains("SingletonCell: 1 creation(s), same instance: true"));
    }
}
