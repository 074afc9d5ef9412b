// Visitor: double dispatch. The element picks the visitor method for its own
// concrete type, the visitor decides what that method does.
// New visitors are cheap; a new element type means touching every visitor.

use crate::trace::Trace;

pub trait Visitor {
    fn visit_concrete_component_a(&self, element: &ConcreteComponentA) -> String;
    fn visit_concrete_component_b(&self, element: &ConcreteComponentB) -> String;
}

pub trait Component {
    fn accept(&self, visitor: &dyn Visitor) -> String;
}

// ============================================================================
// Elements
// ============================================================================

pub struct ConcreteComponentA;

impl ConcreteComponentA {
    pub fn exclusive_method_of_concrete_component_a(&self) -> &'static str {
        "A"
    }
}

impl Component for ConcreteComponentA {
    fn accept(&self, visitor: &dyn Visitor) -> String {
        visitor.visit_concrete_component_a(self)
    }
}

pub struct ConcreteComponentB;

impl ConcreteComponentB {
    pub fn special_method_of_concrete_component_b(&self) -> &'static str {
        "B"
    }
}

impl Component for ConcreteComponentB {
    fn accept(&self, visitor: &dyn Visitor) -> String {
        visitor.visit_concrete_component_b(self)
    }
}

// ============================================================================
// Visitors
// ============================================================================

pub struct ConcreteVisitor1;

impl Visitor for ConcreteVisitor1 {
    fn visit_concrete_component_a(&self, element: &ConcreteComponentA) -> String {
        format!("{} + ConcreteVisitor1", element.exclusive_method_of_concrete_component_a())
    }

    fn visit_concrete_component_b(&self, element: &ConcreteComponentB) -> String {
        format!("{} + ConcreteVisitor1", element.special_method_of_concrete_component_b())
    }
}

pub struct ConcreteVisitor2;

impl Visitor for ConcreteVisitor2 {
    fn visit_concrete_component_a(&self, element: &ConcreteComponentA) -> String {
        format!("{} + ConcreteVisitor2", element.exclusive_method_of_concrete_component_a())
    }

    fn visit_concrete_component_b(&self, element: &ConcreteComponentB) -> String {
        format!("{} + ConcreteVisitor2", element.special_method_of_concrete_component_b())
    }
}

pub fn client_code(components: &[Box<dyn Component>], visitor: &dyn Visitor, trace: &mut Trace) {
    for component in components {
        trace.line(component.accept(visitor));
    }
}

pub fn demo() -> Trace {
    let mut trace = Trace::new();
    let components: Vec<Box<dyn Component>> =
        vec![Box::new(ConcreteComponentA), Box::new(ConcreteComponentB)];

    trace.line("The client code works with all visitors via the base Visitor interface:");
    client_code(&components, &ConcreteVisitor1, &mut trace);
    trace.blank();
    trace.line("It allows the same client code to work with different types of visitors:");
    client_code(&components, &ConcreteVisitor2, &mut trace);

    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_element_type() {
        assert_eq!(ConcreteComponentA.accept(&ConcreteVisitor1), "A + ConcreteVisitor1");
        assert_eq!(ConcreteComponentB.accept(&ConcreteVisitor2), "B + ConcreteVisitor2");
    }

    /// A visitor added without touching the elements.
    struct Counter;

    impl Visitor for Counter {
        fn visit_concrete_component_a(&self, _element: &ConcreteComponentA) -> String {
            "saw A".to_string()
        }
        fn visit_concrete_component_b(&self, _element: &ConcreteComponentB) -> String {
            "saw B".to_string()
        }
    }

    #[test]
    fn test_new_visitor_over_same_elements() {
        let components: Vec<Box<dyn Component>> =
            vec![Box::new(ConcreteComponentB), Box::new(ConcreteComponentA)];
        let mut trace = Trace::new();
        client_code(&components, &Counter, &mut trace);
        assert_eq!(trace.lines(), ["saw B", "saw A"]);
    }

    #[test]
    fn test_demo() {
        let trace = demo();
        assert_eq!(trace.lines()[1], "A + ConcreteVisitor1");
        assert_eq!(trace.lines()[6], "B + ConcreteVisitor2");
    }
}
