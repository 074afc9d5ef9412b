// Strategy: the context delegates one step of its work to a swappable
// algorithm object.

use crate::trace::Trace;

pub trait Strategy {
    fn do_algorithm(&self, data: &str) -> String;
}

pub struct ConcreteStrategyA;

impl Strategy for ConcreteStrategyA {
    fn do_algorithm(&self, data: &str) -> String {
        let mut chars: Vec<char> = data.chars().collect();
        chars.sort_unstable();
        chars.into_iter().collect()
    }
}

pub struct ConcreteStrategyB;

impl Strategy for ConcreteStrategyB {
    fn do_algorithm(&self, data: &str) -> String {
        let mut chars: Vec<char> = data.chars().collect();
        chars.sort_unstable_by(|a, b| b.cmp(a));
        chars.into_iter().collect()
    }
}

// Plain closures work as strategies too
impl<F> Strategy for F
where
    F: Fn(&str) -> String,
{
    fn do_algorithm(&self, data: &str) -> String {
        self(data)
    }
}

#[derive(Default)]
pub struct Context {
    strategy: Option<Box<dyn Strategy>>,
}

impl Context {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Self {
            strategy: Some(strategy),
        }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn Strategy>) {
        self.strategy = Some(strategy);
    }

    pub fn clear_strategy(&mut self) {
        self.strategy = None;
    }

    pub fn do_some_business_logic(&self, trace: &mut Trace) -> Option<String> {
        match &self.strategy {
            Some(strategy) => {
                trace.line("Context: Sorting data using the strategy (not sure how it'll do it)");
                let result = strategy.do_algorithm("aecbd");
                trace.line(result.clone());
                Some(result)
            }
            None => {
                trace.line("Context: Strategy isn't set");
                None
            }
        }
    }
}

pub fn demo() -> Trace {
    let mut trace = Trace::new();

    let mut context = Context::new(Box::new(ConcreteStrategyA));
    trace.line("Client: Strategy is set to normal sorting.");
    context.do_some_business_logic(&mut trace);

    trace.blank();
    trace.line("Client: Strategy is set to reverse sorting.");
    context.set_strategy(Box::new(ConcreteStrategyB));
    context.do_some_business_logic(&mut trace);

    trace
}
