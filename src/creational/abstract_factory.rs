// Abstract Factory: one factory per product family. Everything a factory
// returns belongs to the same variant, so the products can work together.

use crate::trace::Trace;

pub trait AbstractProductA {
    fn useful_function_a(&self) -> String;
}

pub trait AbstractProductB {
    fn useful_function_b(&self) -> String;

    /// Collaborates with a product A. The factory guarantees that the
    /// collaborator comes from the same family.
    fn another_useful_function_b(&self, collaborator: &dyn AbstractProductA) -> String;
}

pub trait AbstractFactory {
    fn create_product_a(&self) -> Box<dyn AbstractProductA>;
    fn create_product_b(&self) -> Box<dyn AbstractProductB>;
}

// ============================================================================
// Family 1
// ============================================================================

pub struct ConcreteProductA1;

impl AbstractProductA for ConcreteProductA1 {
    fn useful_function_a(&self) -> String {
        "ConcreteProductA1.".to_string()
    }
}

pub struct ConcreteProductB1;

impl AbstractProductB for ConcreteProductB1 {
    fn useful_function_b(&self) -> String {
        "ConcreteProductB1.".to_string()
    }

    fn another_useful_function_b(&self, collaborator: &dyn AbstractProductA) -> String {
        format!(
            "The result of the B1 collaborating with the ({})",
            collaborator.useful_function_a()
        )
    }
}

pub struct ConcreteFactory1;

impl AbstractFactory for ConcreteFactory1 {
    fn create_product_a(&self) -> Box<dyn AbstractProductA> {
        Box::new(ConcreteProductA1)
    }

    fn create_product_b(&self) -> Box<dyn AbstractProductB> {
        Box::new(ConcreteProductB1)
    }
}

// ============================================================================
// Family 2
// ============================================================================

pub struct ConcreteProductA2;

impl AbstractProductA for ConcreteProductA2 {
    fn useful_function_a(&self) -> String {
        "ConcreteProductA2.".to_string()
    }
}

pub struct ConcreteProductB2;

impl AbstractProductB for ConcreteProductB2 {
    fn useful_function_b(&self) -> String {
        "ConcreteProductB2.".to_string()
    }

    fn another_useful_function_b(&self, collaborator: &dyn AbstractProductA) -> String {
        format!(
            "The result of the B2 collaborating with the ({})",
            collaborator.useful_function_a()
        )
    }
}

pub struct ConcreteFactory2;

impl AbstractFactory for ConcreteFactory2 {
    fn create_product_a(&self) -> Box<dyn AbstractProductA> {
        Box::new(ConcreteProductA2)
    }

    fn create_product_b(&self) -> Box<dyn AbstractProductB> {
        Box::new(ConcreteProductB2)
    }
}

pub fn client_code(factory: &dyn AbstractFactory, trace: &mut Trace) {
    let product_a = factory.create_product_a();
    let product_b = factory.create_product_b();

    trace.line(product_a.useful_function_a());
    trace.line(product_b.useful_function_b());
    trace.line(product_b.another_useful_function_b(product_a.as_ref()));
}

pub fn demo() -> Trace {
    let mut trace = Trace::new();

    trace.line("Client: Testing client code with the first factory type:");
    client_code(&ConcreteFactory1, &mut trace);
    trace.blank();
    trace.line("Client: Testing client code with the second factory type:");
    client_code(&ConcreteFactory2, &mut trace);

    trace
}
