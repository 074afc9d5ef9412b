// Facade: one simple entry point that drives several subsystems in the
// right order.
//
// Subsystems handed in by the caller are borrowed; missing ones are created
// and owned by the facade. `Cow` covers both cases with one field type.

use crate::trace::Trace;
use std::borrow::Cow;

#[derive(Debug, Clone, Default)]
pub struct Subsystem1;

impl Subsystem1 {
    pub fn operation1(&self) -> String {
        "Subsystem1: Ready!".to_string()
    }

    pub fn operation_n(&self) -> String {
        "Subsystem1: Go!".to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Subsystem2;

impl Subsystem2 {
    pub fn operation1(&self) -> String {
        "Subsystem2: Get ready!".to_string()
    }

    pub fn operation_z(&self) -> String {
        "Subsystem2: Fire!".to_string()
    }
}

pub struct Facade<'a> {
    subsystem1: Cow<'a, Subsystem1>,
    subsystem2: Cow<'a, Subsystem2>,
}

impl<'a> Facade<'a> {
    pub fn new(subsystem1: Option<&'a Subsystem1>, subsystem2: Option<&'a Subsystem2>) -> Self {
        Self {
            subsystem1: subsystem1.map_or_else(|| Cow::Owned(Subsystem1), Cow::Borrowed),
            subsystem2: subsystem2.map_or_else(|| Cow::Owned(Subsystem2), Cow::Borrowed),
        }
    }

    /// Whether each subsystem was supplied by the caller.
    pub fn borrows(&self) -> (bool, bool) {
        (
            matches!(self.subsystem1, Cow::Borrowed(_)),
            matches!(self.subsystem2, Cow::Borrowed(_)),
        )
    }

    pub fn operation(&self, trace: &mut Trace) {
        trace.line("Facade initializes subsystems:");
        trace.line(self.subsystem1.operation1());
        trace.line(self.subsystem2.operation1());
        trace.line("Facade orders subsystems to perform the action:");
        trace.line(self.subsystem1.operation_n());
        trace.line(self.subsystem2.operation_z());
    }
}

pub fn client_code(facade: &Facade, trace: &mut Trace) {
    facade.operation(trace);
}

pub fn demo() -> Trace {
    let mut trace = Trace::new();

    let subsystem1 = Subsystem1;
    let facade = Facade::new(Some(&subsystem1), None);
    client_code(&facade, &mut trace);

    trace
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_operation_order() {
        let mut trace = Trace::new();
        Facade::new(None, None).operation(&mut trace);
        assert_eq!(
            trace.into_lines(),
            vec![
                "Facade initializes subsystems:",
                "Subsystem1: Ready!",
                "Subsystem2: Get ready!",
                "Facade orders subsystems to perform the action:",
                "Subsystem1: Go!",
                "Subsystem2: Fire!",
            ]
        );
    }

    #[test]
    fn test_supplied_subsystems_are_borrowed() {
        let s1 = Subsystem1;
        let s2 = Subsystem2;
        assert_eq!(Facade::new(Some(&s1), Some(&s2)).borrows(), (true, true));
        assert_eq!(Facade::new(Some(&s1), None).borrows(), (true, false));
        assert_eq!(Facade::new(None, None).borrows(), (false, false));
    }

    #[test]
    fn test_demo() {
        assert_eq!(demo().len(), 6);
    }
}
