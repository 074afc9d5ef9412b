// Command: requests wrapped as objects, so an invoker can run them without
// knowing what they do or who does the real work.

use crate::trace::Trace;
use std::rc::Rc;

pub trait Command {
    fn execute(&self, trace: &mut Trace);
}

// ============================================================================
// Example: Command carrying its own payload
// ============================================================================

pub struct SimpleCommand {
    payload: String,
}

impl SimpleCommand {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl Command for SimpleCommand {
    fn execute(&self, trace: &mut Trace) {
        trace.line(format!(
            "SimpleCommand: See, I can do simple things like printing ({}).",
            self.payload
        ));
    }
}

// ============================================================================
// Example: Command delegating to a receiver
// ============================================================================

/// Holds the business logic; commands only know which of its methods to call.
#[derive(Debug, Default)]
pub struct Receiver;

impl Receiver {
    pub fn do_something(&self, a: &str, trace: &mut Trace) {
        trace.line(format!("Receiver: Working on ({}).", a));
    }

    pub fn do_something_else(&self, b: &str, trace: &mut Trace) {
        trace.line(format!("Receiver: Also working on ({}).", b));
    }
}

pub struct ComplexCommand {
    receiver: Rc<Receiver>,
    a: String,
    b: String,
}

impl ComplexCommand {
    pub fn new(receiver: Rc<Receiver>, a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            receiver,
            a: a.into(),
            b: b.into(),
        }
    }
}

impl Command for ComplexCommand {
    fn execute(&self, trace: &mut Trace) {
        trace.line("ComplexCommand: Complex stuff should be done by a receiver object.");
        self.receiver.do_something(&self.a, trace);
        self.receiver.do_something_else(&self.b, trace);
    }
}

// ============================================================================
// Invoker
// ============================================================================

#[derive(Default)]
pub struct Invoker {
    on_start: Option<Box<dyn Command>>,
    on_finish: Option<Box<dyn Command>>,
}

impl Invoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_on_start(&mut self, command: Box<dyn Command>) {
        self.on_start = Some(command);
    }

    pub fn set_on_finish(&mut self, command: Box<dyn Command>) {
        self.on_finish = Some(command);
    }

    pub fn do_something_important(&self, trace: &mut Trace) {
        trace.line("Invoker: Does anybody want something done before I begin?");
        if let Some(command) = &self.on_start {
            command.execute(trace);
        }
        trace.line("Invoker: ...doing something really important...");
        trace.line("Invoker: Does anybody want something done after I finish?");
        if let Some(command) = &self.on_finish {
            command.execute(trace);
        }
    }
}

pub fn demo() -> Trace {
    let mut trace = Trace::new();

    let mut invoker = Invoker::new();
    invoker.set_on_start(Box::new(SimpleCommand::new("Say Hi!")));
    let receiver = Rc::new(Receiver);
    invoker.set_on_finish(Box::new(ComplexCommand::new(
        receiver,
        "Send email",
        "Save report",
    )));
    invoker.do_something_important(&mut trace);

    trace
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_invocation_order() {
        assert_eq!(
            demo().into_lines(),
            vec![
                "Invoker: Does anybody want something done before I begin?",
                "SimpleCommand: See, I can do simple things like printing (Say Hi!).",
                "Invoker: ...doing something really important...",
                "Invoker: Does anybody want something done after I finish?",
                "ComplexCommand: Complex stuff should be done by a receiver object.",
                "Receiver: Working on (Send email).",
                "Receiver: Also working on (Save report).",
            ]
        );
    }

    #[test]
    fn test_empty_invoker_only_does_its_own_work() {
        let mut trace = Trace::new();
        Invoker::new().do_something_important(&mut trace);
        assert_eq!(trace.len(), 3);
    }

    #[test]
    fn test_receiver_outlives_command() {
        let receiver = Rc::new(Receiver);
        {
            let command = ComplexCommand::new(Rc::clone(&receiver), "a", "b");
            let mut trace = Trace::new();
            command.execute(&mut trace);
            assert_eq!(Rc::strong_count(&receiver), 2);
        }
        assert_eq!(Rc::strong_count(&receiver), 1);
    }

    #[test]
    fn test_only_finish_command() {
        let mut invoker = Invoker::new();
        invoker.set_on_finish(Box::new(SimpleCommand::new("bye")));
        let mut trace = Trace::new();
        invoker.do_something_important(&mut trace);

        assert_eq!(
            trace.lines().last().map(String::as_str),
            Some("SimpleCommand: See, I can do simple things like printing (bye).")
        );
        assert_eq!(trace.len(), 4);
    }
}
