// Prototype: copy an existing object without knowing its concrete type.
// A registry keeps preconfigured prototypes and hands out clones of them.

use crate::trace::Trace;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrototypeKind {
    Prototype1,
    Prototype2,
}

pub trait Prototype {
    /// Returns an independent copy; mutating it never affects `self`.
    fn clone_prototype(&self) -> Box<dyn Prototype>;
    fn name(&self) -> &str;
    fn field(&self) -> f32;
    fn method(&mut self, field: f32, trace: &mut Trace);
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConcretePrototype1 {
    name: String,
    field: f32,
}

impl ConcretePrototype1 {
    pub fn new(name: impl Into<String>, field: f32) -> Self {
        Self { name: name.into(), field }
    }
}

impl Prototype for ConcretePrototype1 {
    fn clone_prototype(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self) -> f32 {
        self.field
    }

    fn method(&mut self, field: f32, trace: &mut Trace) {
        self.field = field;
        trace.line(format!("call method from {} with field: {}", self.name, self.field));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConcretePrototype2 {
    name: String,
    field: f32,
}

impl ConcretePrototype2 {
    pub fn new(name: impl Into<String>, field: f32) -> Self {
        Self { name: name.into(), field }
    }
}

impl Prototype for ConcretePrototype2 {
    fn clone_prototype(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self) -> f32 {
        self.field
    }

    fn method(&mut self, field: f32, trace: &mut Trace) {
        self.field = field;
        trace.line(format!("call method from {} with field: {}", self.name, self.field));
    }
}

pub struct PrototypeFactory {
    prototypes: HashMap<PrototypeKind, Box<dyn Prototype>>,
}

impl PrototypeFactory {
    pub fn new() -> Self {
        let mut prototypes: HashMap<PrototypeKind, Box<dyn Prototype>> = HashMap::new();
        prototypes.insert(
            PrototypeKind::Prototype1,
            Box::new(ConcretePrototype1::new("PROTOTYPE_1 ", 50.0)),
        );
        prototypes.insert(
            PrototypeKind::Prototype2,
            Box::new(ConcretePrototype2::new("PROTOTYPE_2 ", 60.0)),
        );
        Self { prototypes }
    }

    /// Both kinds are registered in `new`, so a lookup only fails for a
    /// factory whose registry was emptied with `remove`.
    pub fn create_prototype(&self, kind: PrototypeKind) -> Option<Box<dyn Prototype>> {
        self.prototypes.get(&kind).map(|p| p.clone_prototype())
    }

    pub fn remove(&mut self, kind: PrototypeKind) -> Option<Box<dyn Prototype>> {
        self.prototypes.remove(&kind)
    }
}

impl Default for PrototypeFactory {
    fn default() -> Self {
        Self::new()
    }
}

pub fn client_code(factory: &PrototypeFactory, trace: &mut Trace) {
    trace.line("Let's create a Prototype 1");
    if let Some(mut prototype) = factory.create_prototype(PrototypeKind::Prototype1) {
        prototype.method(90.0, trace);
    }
    trace.blank();

    trace.line("Let's create a Prototype 2");
    if let Some(mut prototype) = factory.create_prototype(PrototypeKind::Prototype2) {
        prototype.method(10.0, trace);
    }
}

pub fn demo() -> Trace {
    let mut trace = Trace::new();
    client_code(&PrototypeFactory::new(), &mut trace);
    trace
}
