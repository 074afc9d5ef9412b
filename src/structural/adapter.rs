// Adapter: make an object with an incompatible interface usable where a
// `Target` is expected.
//
// Two flavours. `ClassAdapter` owns its adaptee outright, which is what
// inheriting from both sides amounts to once inheritance is gone.
// `ObjectAdapter` wraps an adaptee that somebody else owns.

use crate::trace::Trace;

pub trait Target {
    fn request(&self) -> String {
        "Target: The default target's behavior.".to_string()
    }
}

pub struct DefaultTarget;

impl Target for DefaultTarget {}

#[derive(Debug, Default)]
pub struct Adaptee;

impl Adaptee {
    pub fn specific_request(&self) -> String {
        ".eetpadA eht fo roivaheb laicepS".to_string()
    }
}

fn translate(raw: &str) -> String {
    let reversed: String = raw.chars().rev().collect();
    format!("Adapter: (TRANSLATED) {}", reversed)
}

#[derive(Debug, Default)]
pub struct ClassAdapter {
    adaptee: Adaptee,
}

impl ClassAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The adaptee's own interface stays reachable.
    pub fn adaptee(&self) -> &Adaptee {
        &self.adaptee
    }
}

impl Target for ClassAdapter {
    fn request(&self) -> String {
        translate(&self.adaptee.specific_request())
    }
}

pub struct ObjectAdapter<'a> {
    adaptee: &'a Adaptee,
}

impl<'a> ObjectAdapter<'a> {
    pub fn new(adaptee: &'a Adaptee) -> Self {
        Self { adaptee }
    }
}

impl Target for ObjectAdapter<'_> {
    fn request(&self) -> String {
        translate(&self.adaptee.specific_request())
    }
}

pub fn client_code(target: &dyn Target, trace: &mut Trace) {
    trace.line(target.request());
}

fn walkthrough(adapter: &dyn Target, adaptee: &Adaptee, trace: &mut Trace) {
    trace.line("Client: I can work just fine with the Target objects:");
    client_code(&DefaultTarget, trace);
    trace.blank();
    trace.line("Client: The Adaptee class has a weird interface. See, I don't understand it:");
    trace.line(format!("Adaptee: {}", adaptee.specific_request()));
    trace.blank();
    trace.line("Client: But I can work with it via the Adapter:");
    client_code(adapter, trace);
}

pub fn demo() -> Trace {
    let mut trace = Trace::new();

    trace.line("== Object adapter ==");
    let adaptee = Adaptee;
    walkthrough(&ObjectAdapter::new(&adaptee), &adaptee, &mut trace);
    trace.blank();

    trace.line("== Class adapter ==");
    let adapter = ClassAdapter::new();
    walkthrough(&adapter, adapter.adaptee(), &mut trace);

    trace
}
