// Decorator: wrappers that implement the same interface as what they wrap
// and add behavior around it. They stack to any depth.

use crate::trace::Trace;

pub trait Component {
    fn operation(&self) -> String;
}

pub struct ConcreteComponent;

impl Component for ConcreteComponent {
    fn operation(&self) -> String {
        "ConcreteComponent".to_string()
    }
}

pub struct ConcreteDecoratorA<'a> {
    component: &'a dyn Component,
}

impl<'a> ConcreteDecoratorA<'a> {
    pub fn new(component: &'a dyn Component) -> Self {
        Self { component }
    }
}

impl Component for ConcreteDecoratorA<'_> {
    fn operation(&self) -> String {
        format!("ConcreteDecoratorA({})", self.component.operation())
    }
}

pub struct ConcreteDecoratorB<'a> {
    component: &'a dyn Component,
}

impl<'a> ConcreteDecoratorB<'a> {
    pub fn new(component: &'a dyn Component) -> Self {
        Self { component }
    }
}

impl Component for ConcreteDecoratorB<'_> {
    fn operation(&self) -> String {
        format!("ConcreteDecoratorB({})", self.component.operation())
    }
}

pub fn client_code(component: &dyn Component, trace: &mut Trace) {
    trace.line(format!("RESULT: {}", component.operation()));
}

pub fn demo() -> Trace {
    let mut trace = Trace::new();

    let simple = ConcreteComponent;
    trace.line("Client: I've got a simple component:");
    client_code(&simple, &mut trace);
    trace.blank();

    let decorator1 = ConcreteDecoratorA::new(&simple);
    let decorator2 = ConcreteDecoratorB::new(&decorator1);
    trace.line("Client: Now I've got a decorated component:");
    client_code(&decorator2, &mut trace);

    trace
}
