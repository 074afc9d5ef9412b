// Builder: assemble a product one step at a time. A director knows a few
// standard step sequences, but clients are free to call the steps themselves.

use crate::trace::Trace;
use itertools::Itertools;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Product1 {
    parts: Vec<String>,
}

impl Product1 {
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn list_parts(&self) -> String {
        format!("Product parts: {}", self.parts.iter().join(", "))
    }
}

pub trait Builder {
    fn produce_part_a(&mut self);
    fn produce_part_b(&mut self);
    fn produce_part_c(&mut self);
}

#[derive(Debug, Default)]
pub struct ConcreteBuilder1 {
    product: Product1,
}

impl ConcreteBuilder1 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.product = Product1::default();
    }

    /// Hands over the finished product and starts again from a blank one.
    pub fn get_product(&mut self) -> Product1 {
        std::mem::take(&mut self.product)
    }
}

impl Builder for ConcreteBuilder1 {
    fn produce_part_a(&mut self) {
        self.product.parts.push("PartA1".to_string());
    }

    fn produce_part_b(&mut self) {
        self.product.parts.push("PartB1".to_string());
    }

    fn produce_part_c(&mut self) {
        self.product.parts.push("PartC1".to_string());
    }
}

pub struct Director;

impl Director {
    pub fn build_minimal_viable_product(&self, builder: &mut dyn Builder) {
        builder.produce_part_a();
    }

    pub fn build_full_featured_product(&self, builder: &mut dyn Builder) {
        builder.produce_part_a();
        builder.produce_part_b();
        builder.produce_part_c();
    }
}

pub fn client_code(director: &Director, trace: &mut Trace) {
    let mut builder = ConcreteBuilder1::new();

    trace.line("Standard basic product:");
    director.build_minimal_viable_product(&mut builder);
    trace.line(builder.get_product().list_parts());
    trace.blank();

    trace.line("Standard full featured product:");
    director.build_full_featured_product(&mut builder);
    trace.line(builder.get_product().list_parts());
    trace.blank();

    // The builder works without a director too
    trace.line("Custom product:");
    builder.produce_part_a();
    builder.produce_part_c();
    trace.line(builder.get_product().list_parts());
}

pub fn demo() -> Trace {
    let mut trace = Trace::new();
    client_code(&Director, &mut trace);
    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_director_sequences() {
        let mut builder = ConcreteBuilder1::new();
        Director.build_minimal_viable_product(&mut builder);
        assert_eq!(builder.get_product().parts(), ["PartA1"]);

        Director.build_full_featured_product(&mut builder);
        assert_eq!(
            builder.get_product().list_parts(),
            "Product parts: PartA1, PartB1, PartC1"
        );
    }

    #[test]
    fn test_get_product_resets_builder() {
        let mut builder = ConcreteBuilder1::new();
        builder.produce_part_b();
        let first = builder.get_product();
        let second = builder.get_product();

        assert_eq!(first.parts(), ["PartB1"]);
        assert_eq!(second, Product1::default());
    }

    #[test]
    fn test_explicit_reset_discards_parts() {
        let mut builder = ConcreteBuilder1::new();
        builder.produce_part_a();
        builder.reset();
        builder.produce_part_c();
        assert_eq!(builder.get_product().list_parts(), "Product parts: PartC1");
    }

    #[test]
    fn test_client_code_custom_product() {
        let trace = demo();
        assert_eq!(
            trace.lines().last().map(String::as_str),
            Some("Product parts: PartA1, PartC1")
        );
    }
}
