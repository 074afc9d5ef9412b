// Bridge: the abstraction hierarchy and the implementation hierarchy vary
// independently. The abstraction only talks to `Implementation`.

use crate::trace::Trace;

pub trait Implementation {
    fn operation_implementation(&self) -> String;
}

pub struct ConcreteImplementationA;

impl Implementation for ConcreteImplementationA {
    fn operation_implementation(&self) -> String {
        "ConcreteImplementationA: Here's the result on the platform A.".to_string()
    }
}

pub struct ConcreteImplementationB;

impl Implementation for ConcreteImplementationB {
    fn operation_implementation(&self) -> String {
        "ConcreteImplementationB: Here's the result on the platform B.".to_string()
    }
}

/// The abstraction side of the bridge.
pub trait Operation {
    fn operation(&self) -> String;
}

pub struct Abstraction<'a> {
    implementation: &'a dyn Implementation,
}

impl<'a> Abstraction<'a> {
    pub fn new(implementation: &'a dyn Implementation) -> Self {
        Self { implementation }
    }
}

impl Operation for Abstraction<'_> {
    fn operation(&self) -> String {
        format!(
            "Abstraction: Base operation with:\n{}",
            self.implementation.operation_implementation()
        )
    }
}

pub struct ExtendedAbstraction<'a> {
    implementation: &'a dyn Implementation,
}

impl<'a> ExtendedAbstraction<'a> {
    pub fn new(implementation: &'a dyn Implementation) -> Self {
        Self { implementation }
    }
}

impl Operation for ExtendedAbstraction<'_> {
    fn operation(&self) -> String {
        format!(
            "ExtendedAbstraction: Extended operation with:\n{}",
            self.implementation.operation_implementation()
        )
    }
}

pub fn client_code(abstraction: &dyn Operation, trace: &mut Trace) {
    for line in abstraction.operation().lines() {
        trace.line(line);
    }
}

pub fn demo() -> Trace {
    let mut trace = Trace::new();

    let implementation_a = ConcreteImplementationA;
    client_code(&Abstraction::new(&implementation_a), &mut trace);
    trace.blank();

    let implementation_b = ConcreteImplementationB;
    client_code(&ExtendedAbstraction::new(&implementation_b), &mut trace);

    trace
}
