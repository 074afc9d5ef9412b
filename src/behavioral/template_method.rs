// Template Method: a fixed skeleton calls required steps and optional hooks
// that implementors fill in.
//
// The skeleton lives in a blanket extension trait. Implementors only provide
// `Steps`, so they cannot reorder or replace `template_method`.

use crate::trace::Trace;

pub trait Steps {
    fn required_operation1(&self, trace: &mut Trace);
    fn required_operation2(&self, trace: &mut Trace);

    fn hook1(&self, _trace: &mut Trace) {}
    fn hook2(&self, _trace: &mut Trace) {}
}

pub trait TemplateMethod: Steps {
    fn template_method(&self, trace: &mut Trace) {
        base_operation1(trace);
        self.required_operation1(trace);
        base_operation2(trace);
        self.hook1(trace);
        self.required_operation2(trace);
        base_operation3(trace);
        self.hook2(trace);
    }
}

impl<T: Steps + ?Sized> TemplateMethod for T {}

fn base_operation1(trace: &mut Trace) {
    trace.line("AbstractClass says: I am doing the bulk of the work");
}

fn base_operation2(trace: &mut Trace) {
    trace.line("AbstractClass says: But I let subclasses override some operations");
}

fn base_operation3(trace: &mut Trace) {
    trace.line("AbstractClass says: But I am doing the bulk of the work anyway");
}

pub struct ConcreteClass1;

impl Steps for ConcreteClass1 {
    fn required_operation1(&self, trace: &mut Trace) {
        trace.line("ConcreteClass1 says: Implemented Operation1");
    }

    fn required_operation2(&self, trace: &mut Trace) {
        trace.line("ConcreteClass1 says: Implemented Operation2");
    }
}

pub struct ConcreteClass2;

impl Steps for ConcreteClass2 {
    fn required_operation1(&self, trace: &mut Trace) {
        trace.line("ConcreteClass2 says: Implemented Operation1");
    }

    fn required_operation2(&self, trace: &mut Trace) {
        trace.line("ConcreteClass2 says: Implemented Operation2");
    }

    fn hook1(&self, trace: &mut Trace) {
        trace.line("ConcreteClass2 says: Overridden Hook1");
    }
}

pub fn client_code(class: &dyn Steps, trace: &mut Trace) {
    class.template_method(trace);
}

pub fn demo() -> Trace {
    let mut trace = Trace::new();

    trace.line("Same client code can work with different subclasses:");
    client_code(&ConcreteClass1, &mut trace);
    trace.blank();
    trace.line("Same client code can work with different subclasses:");
    client_code(&ConcreteClass2, &mut trace);

    trace
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_skeleton_without_hooks() {
        let mut trace = Trace::new();
        ConcreteClass1.template_method(&mut trace);
        assert_eq!(
            trace.into_lines(),
            vec![
                "AbstractClass says: I am doing the bulk of the work",
                "ConcreteClass1 says: Implemented Operation1",
                "AbstractClass says: But I let subclasses override some operations",
                "ConcreteClass1 says: Implemented Operation2",
                "AbstractClass says: But I am doing the bulk of the work anyway",
            ]
        );
    }

    #[test]
    fn test_hook_runs_between_base2_and_required2() {
        let mut trace = Trace::new();
        client_code(&ConcreteClass2, &mut trace);

        let base2 = trace
            .position("AbstractClass says: But I let subclasses override some operations")
            .unwrap();
        let hook = trace.position("ConcreteClass2 says: Overridden Hook1").unwrap();
        let required2 = trace.position("ConcreteClass2 says: Implemented Operation2").unwrap();
        assert!(base2 < hook && hook < required2);
        assert_eq!(trace.len(), 6);
    }

    struct BothHooks;

    impl Steps for BothHooks {
        fn required_operation1(&self, trace: &mut Trace) {
            trace.line("r1");
        }
        fn required_operation2(&self, trace: &mut Trace) {
            trace.line("r2");
        }
        fn hook1(&self, trace: &mut Trace) {
            trace.line("h1");
        }
        fn hook2(&self, trace: &mut Trace) {
            trace.line("h2");
        }
    }

    #[test]
    fn test_hook2_runs_last() {
        let mut trace = Trace::new();
        BothHooks.template_method(&mut trace);
        assert_eq!(trace.lines().last().map(String::as_str), Some("h2"));
        assert_eq!(trace.len(), 7);
    }
}
