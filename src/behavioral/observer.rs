// Observer: a subject keeps a list of subscribers and tells each of them
// whenever its message changes.

use crate::trace::Trace;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

pub trait Observer {
    fn update(&mut self, message: &str, trace: &mut Trace);
}

pub type ObserverHandle = Rc<RefCell<dyn Observer>>;

// ============================================================================
// Subject
// ============================================================================

#[derive(Default)]
pub struct Subject {
    observers: RefCell<Vec<ObserverHandle>>,
    message: RefCell<String>,
    next_number: Cell<usize>,
}

impl Subject {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn attach(&self, observer: ObserverHandle) {
        self.observers.borrow_mut().push(observer);
    }

    /// Removes `observer` if attached. Detaching twice is harmless.
    pub fn detach(&self, observer: &ObserverHandle) {
        self.observers
            .borrow_mut()
            .retain(|attached| !Rc::ptr_eq(attached, observer));
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    pub fn how_many_observers(&self, trace: &mut Trace) {
        trace.line(format!(
            "There are {} observers in the list.",
            self.observer_count()
        ));
    }

    /// Updates every observer attached when the pass starts, in attach order.
    /// Observers detached during the pass still hear this message.
    pub fn notify(&self, trace: &mut Trace) {
        self.how_many_observers(trace);
        let snapshot: Vec<ObserverHandle> = self.observers.borrow().clone();
        let message = self.message.borrow().clone();
        for observer in snapshot {
            observer.borrow_mut().update(&message, trace);
        }
    }

    pub fn create_message(&self, message: impl Into<String>, trace: &mut Trace) {
        *self.message.borrow_mut() = message.into();
        self.notify(trace);
    }

    pub fn some_business_logic(&self, trace: &mut Trace) {
        *self.message.borrow_mut() = "change message".to_string();
        self.notify(trace);
        trace.line("I'm about to do something important");
    }

    fn issue_number(&self) -> usize {
        let number = self.next_number.get() + 1;
        self.next_number.set(number);
        number
    }
}

// ============================================================================
// Concrete observer
// ============================================================================

pub struct ConcreteObserver {
    number: usize,
    message_from_subject: String,
    subject: Weak<Subject>,
}

impl ConcreteObserver {
    /// Creates an observer already attached to `subject`.
    pub fn new(subject: &Rc<Subject>, trace: &mut Trace) -> Rc<RefCell<Self>> {
        let number = subject.issue_number();
        let observer = Rc::new(RefCell::new(Self {
            number,
            message_from_subject: String::new(),
            subject: Rc::downgrade(subject),
        }));
        let handle: ObserverHandle = observer.clone();
        subject.attach(handle);
        trace.line(format!("Hi, I'm the Observer \"{}\".", number));
        observer
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn last_message(&self) -> &str {
        &self.message_from_subject
    }

    pub fn print_info(&self, trace: &mut Trace) {
        trace.line(format!(
            "Observer \"{}\": a new message is available --> {}",
            self.number, self.message_from_subject
        ));
    }

    pub fn remove_me_from_the_list(observer: &Rc<RefCell<Self>>, trace: &mut Trace) {
        let number = observer.borrow().number;
        let subject = observer.borrow().subject.upgrade();
        match subject {
            Some(subject) => {
                let handle: ObserverHandle = observer.clone();
                subject.detach(&handle);
                trace.line(format!("Observer \"{}\" removed from the list.", number));
            }
            None => tracing::debug!(number, "subject already gone"),
        }
    }
}

impl Observer for ConcreteObserver {
    fn update(&mut self, message: &str, trace: &mut Trace) {
        self.message_from_subject = message.to_string();
        self.print_info(trace);
    }
}

pub fn demo() -> Trace {
    let mut trace = Trace::new();

    let subject = Subject::new();
    let observer1 = ConcreteObserver::new(&subject, &mut trace);
    let observer2 = ConcreteObserver::new(&subject, &mut trace);
    let observer3 = ConcreteObserver::new(&subject, &mut trace);

    subject.create_message("Hello World! :D", &mut trace);
    ConcreteObserver::remove_me_from_the_list(&observer3, &mut trace);

    subject.create_message("The weather is hot today! :p", &mut trace);
    let observer4 = ConcreteObserver::new(&subject, &mut trace);

    ConcreteObserver::remove_me_from_the_list(&observer2, &mut trace);
    let observer5 = ConcreteObserver::new(&subject, &mut trace);

    subject.create_message("My new car is great! ;)", &mut trace);
    ConcreteObserver::remove_me_from_the_list(&observer5, &mut trace);
    ConcreteObserver::remove_me_from_the_list(&observer4, &mut trace);
    ConcreteObserver::remove_me_from_the_list(&observer1, &mut trace);

    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records which observer saw which message, in call order.
    struct Recorder {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Observer for Recorder {
        fn update(&mut self, message: &str, _trace: &mut Trace) {
            self.log.borrow_mut().push(format!("{}:{}", self.name, message));
        }
    }

    fn recorder(name: &'static str, log: &Rc<RefCell<Vec<String>>>) -> ObserverHandle {
        Rc::new(RefCell::new(Recorder {
            name,
            log: Rc::clone(log),
        }))
    }

    #[test]
    fn test_notify_in_attach_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let subject = Subject::new();
        let o1 = recorder("o1", &log);
        let o2 = recorder("o2", &log);
        let o3 = recorder("o3", &log);
        subject.attach(o1);
        subject.attach(Rc::clone(&o2));
        subject.attach(o3);

        let mut trace = Trace::new();
        subject.create_message("m1", &mut trace);
        subject.detach(&o2);
        subject.create_message("m2", &mut trace);

        assert_eq!(
            *log.borrow(),
            vec!["o1:m1", "o2:m1", "o3:m1", "o1:m2", "o3:m2"]
        );
    }

    #[test]
    fn test_detach_is_idempotent() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let subject = Subject::new();
        let o1 = recorder("o1", &log);
        let stranger = recorder("stranger", &log);
        subject.attach(Rc::clone(&o1));

        subject.detach(&stranger);
        subject.detach(&o1);
        subject.detach(&o1);
        assert_eq!(subject.observer_count(), 0);
    }

    /// Detaches itself from the subject while being notified.
    struct Quitter {
        subject: Weak<Subject>,
        me: Option<ObserverHandle>,
        calls: usize,
    }

    impl Observer for Quitter {
        fn update(&mut self, _message: &str, _trace: &mut Trace) {
            self.calls += 1;
            if let (Some(subject), Some(me)) = (self.subject.upgrade(), self.me.take()) {
                subject.detach(&me);
            }
        }
    }

    #[test]
    fn test_detach_during_notify_does_not_disturb_current_pass() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let subject = Subject::new();
        let quitter = Rc::new(RefCell::new(Quitter {
            subject: Rc::downgrade(&subject),
            me: None,
            calls: 0,
        }));
        let handle: ObserverHandle = quitter.clone();
        quitter.borrow_mut().me = Some(Rc::clone(&handle));
        subject.attach(handle);
        subject.attach(recorder("after", &log));

        let mut trace = Trace::new();
        subject.create_message("once", &mut trace);
        assert_eq!(*log.borrow(), vec!["after:once"]);
        assert_eq!(subject.observer_count(), 1);

        subject.create_message("twice", &mut trace);
        assert_eq!(quitter.borrow().calls, 1);
    }

    #[test]
    fn test_concrete_observers_are_numbered_per_subject() {
        let mut trace = Trace::new();
        let subject = Subject::new();
        let first = ConcreteObserver::new(&subject, &mut trace);
        let second = ConcreteObserver::new(&subject, &mut trace);

        assert_eq!(first.borrow().number(), 1);
        assert_eq!(second.borrow().number(), 2);

        subject.some_business_logic(&mut trace);
        assert_eq!(second.borrow().last_message(), "change message");
        assert_eq!(
            trace.lines().last().map(String::as_str),
            Some("I'm about to do something important")
        );
    }

    #[test]
    fn test_demo_counts() {
        let trace = demo();
        assert!(trace.contains("There are 3 observers in the list."));
        assert!(trace.contains("There are 2 observers in the list."));
        assert!(trace.contains("Observer \"5\": a new message is available --> My new car is great! ;)"));
        assert!(!trace.contains("Observer \"2\": a new message is available --> My new car is great! ;)"));
    }
}
