// Factory Method: the creator's logic is fixed, only the creation step is
// left to implementors.

use crate::trace::Trace;

pub trait Product {
    fn operation(&self) -> String;
}

pub struct ConcreteProduct1;

impl Product for ConcreteProduct1 {
    fn operation(&self) -> String {
        "{Result of the ConcreteProduct1}".to_string()
    }
}

pub struct ConcreteProduct2;

impl Product for ConcreteProduct2 {
    fn operation(&self) -> String {
        "{Result of the ConcreteProduct2}".to_string()
    }
}

pub trait Creator {
    fn factory_method(&self) -> Box<dyn Product>;

    fn some_operation(&self) -> String {
        let product = self.factory_method();
        format!(
            "Creator: The same creator's code has just worked with {}",
            product.operation()
        )
    }
}

pub struct ConcreteCreator1;

impl Creator for ConcreteCreator1 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct1)
    }
}

pub struct ConcreteCreator2;

impl Creator for ConcreteCreator2 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct2)
    }
}

pub fn client_code(creator: &dyn Creator, trace: &mut Trace) {
    trace.line("Client: I'm not aware of the creator's class, but it still works.");
    trace.line(creator.some_operation());
}

pub fn demo() -> Trace {
    let mut trace = Trace::new();

    trace.line("App: Launched with the ConcreteCreator1.");
    client_code(&ConcreteCreator1, &mut trace);
    trace.blank();
    trace.line("App: Launched with the ConcreteCreator2.");
    client_code(&ConcreteCreator2, &mut trace);

    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creators_differ_only_in_product() {
        assert_eq!(
            ConcreteCreator1.some_operation(),
            "Creator: The same creator's code has just worked with {Result of the ConcreteProduct1}"
        );
        assert_eq!(
            ConcreteCreator2.some_operation(),
            "Creator: The same creator's code has just worked with {Result of the ConcreteProduct2}"
        );
    }

    #[test]
    fn test_demo() {
        let trace = demo();
        assert_eq!(trace.len(), 7);
        assert!(trace.contains("App: Launched with the ConcreteCreator2."));
    }
}
