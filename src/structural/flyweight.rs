// Flyweight: many cars, few distinct (brand, model, color) triples.
//
// The intrinsic triple lives in a shared `Flyweight` handed out by
// `FlyweightFactory`; the per-car owner and plates stay with the caller in a
// `CarContext`. The registry is a `BTreeMap` keyed by the triple itself, so
// listings come out in order.

use crate::trace::Trace;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flyweight {
    brand: String,
    model: String,
    color: String,
}

impl Flyweight {
    pub fn new(brand: &str, model: &str, color: &str) -> Self {
        Self {
            brand: brand.to_string(),
            model: model.to_string(),
            color: color.to_string(),
        }
    }

    /// Display label, `brand_model_color`. Not unique when fields contain `_`.
    pub fn key(&self) -> String {
        format!("{}_{}_{}", self.brand, self.model, self.color)
    }

    fn registry_key(&self) -> RegistryKey {
        (self.brand.clone(), self.model.clone(), self.color.clone())
    }

    pub fn operation(&self, context: &CarContext, trace: &mut Trace) {
        trace.line(format!(
            "Flyweight: Displaying shared ({}) and unique ({}) states.",
            self, context
        ));
    }
}

impl fmt::Display for Flyweight {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[ {} , {} , {} ]", self.brand, self.model, self.color)
    }
}

/// Extrinsic state, unique to one car.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarContext {
    pub owner: String,
    pub plates: String,
}

impl CarContext {
    pub fn new(owner: impl Into<String>, plates: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            plates: plates.into(),
        }
    }
}

impl fmt::Display for CarContext {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[ {} , {} ]", self.owner, self.plates)
    }
}

type RegistryKey = (String, String, String);

#[derive(Debug, Default)]
pub struct FlyweightFactory {
    flyweights: BTreeMap<RegistryKey, Rc<Flyweight>>,
}

impl FlyweightFactory {
    pub fn new<'s>(shared_states: impl IntoIterator<Item = (&'s str, &'s str, &'s str)>) -> Self {
        let flyweights = shared_states
            .into_iter()
            .map(|(brand, model, color)| {
                let flyweight = Flyweight::new(brand, model, color);
                (flyweight.registry_key(), Rc::new(flyweight))
            })
            .collect();
        Self { flyweights }
    }

    /// Returns the shared flyweight for the triple, creating it on a miss.
    pub fn get_flyweight(
        &mut self,
        brand: &str,
        model: &str,
        color: &str,
        trace: &mut Trace,
    ) -> Rc<Flyweight> {
        let wanted = Flyweight::new(brand, model, color);
        let key = wanted.registry_key();
        match self.flyweights.get(&key) {
            Some(existing) => {
                debug!(brand, model, color, "flyweight cache hit");
                trace.line("FlyweightFactory: Reusing existing flyweight.");
                Rc::clone(existing)
            }
            None => {
                debug!(brand, model, color, "flyweight cache miss");
                trace.line("FlyweightFactory: Can't find a flyweight, creating new one.");
                let created = Rc::new(wanted);
                self.flyweights.insert(key, Rc::clone(&created));
                created
            }
        }
    }

    pub fn list_flyweights(&self, trace: &mut Trace) {
        trace.line(format!(
            "FlyweightFactory: I have {} flyweights:",
            self.flyweights.len()
        ));
        for flyweight in self.flyweights.values() {
            trace.line(flyweight.key());
        }
    }

    pub fn len(&self) -> usize {
        self.flyweights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flyweights.is_empty()
    }
}

pub fn add_car_to_database(
    factory: &mut FlyweightFactory,
    context: &CarContext,
    brand: &str,
    model: &str,
    color: &str,
    trace: &mut Trace,
) -> Rc<Flyweight> {
    trace.line("Client: Adding a car to database.");
    let flyweight = factory.get_flyweight(brand, model, color, trace);
    flyweight.operation(context, trace);
    flyweight
}

const SHARED_STATES: [(&str, &str, &str); 5] = [
    ("Chevrolet", "Camaro2018", "pink"),
    ("Mercedes Benz", "C300", "black"),
    ("Mercedes Benz", "C500", "red"),
    ("BMW", "M5", "red"),
    ("BMW", "X6", "white"),
];

pub fn demo() -> Trace {
    let mut trace = Trace::new();

    let mut factory = FlyweightFactory::new(SHARED_STATES);
    factory.list_flyweights(&mut trace);
    trace.blank();

    let context = CarContext::new("James Doe", "CL234IR");
    add_car_to_database(&mut factory, &context, "BMW", "M5", "red", &mut trace);
    trace.blank();
    add_car_to_database(&mut factory, &context, "BMW", "X1", "red", &mut trace);
    trace.blank();

    factory.list_flyweights(&mut trace);
    trace
}
