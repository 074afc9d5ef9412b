// Composite: leaves and branches share one interface, so client code can
// walk a tree without caring which is which.

use crate::trace::Trace;
use itertools::Itertools;
use std::rc::Rc;

pub trait Component {
    /// No-op for leaves.
    fn add(&mut self, _component: Rc<dyn Component>) {}

    /// No-op for leaves.
    fn remove(&mut self, _component: &Rc<dyn Component>) {}

    fn is_composite(&self) -> bool {
        false
    }

    fn operation(&self) -> String;
}

#[derive(Debug, Default)]
pub struct Leaf;

impl Component for Leaf {
    fn operation(&self) -> String {
        "Leaf".to_string()
    }
}

#[derive(Default)]
pub struct Composite {
    children: Vec<Rc<dyn Component>>,
}

impl Composite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Component for Composite {
    fn add(&mut self, component: Rc<dyn Component>) {
        self.children.push(component);
    }

    /// Removes the first child that is this exact component.
    fn remove(&mut self, component: &Rc<dyn Component>) {
        if let Some(index) = self.children.iter().position(|c| Rc::ptr_eq(c, component)) {
            self.children.remove(index);
        }
    }

    fn is_composite(&self) -> bool {
        true
    }

    fn operation(&self) -> String {
        if self.children.is_empty() {
            return "Branch()".to_string();
        }
        format!(
            "Branch( {} )",
            self.children.iter().map(|c| c.operation()).join(" + ")
        )
    }
}

pub fn client_code(component: &dyn Component, trace: &mut Trace) {
    trace.line(format!("RESULT: {}", component.operation()));
}

/// Only a composite target accepts the new child.
pub fn client_code2(target: &mut dyn Component, component: Rc<dyn Component>, trace: &mut Trace) {
    if target.is_composite() {
        target.add(component);
    }
    trace.line(format!("RESULT: {}", target.operation()));
}

pub fn demo() -> Trace {
    let mut trace = Trace::new();

    trace.line("Client: I've got a simple component:");
    client_code(&Leaf, &mut trace);
    trace.blank();

    let mut branch1 = Composite::new();
    branch1.add(Rc::new(Leaf));
    branch1.add(Rc::new(Leaf));
    let mut branch2 = Composite::new();
    branch2.add(Rc::new(Leaf));

    let mut tree = Composite::new();
    tree.add(Rc::new(branch1));
    tree.add(Rc::new(branch2));

    trace.line("Client: Now I've got a composite tree:");
    client_code(&tree, &mut trace);
    trace.blank();

    trace.line("Client: I don't need to check the components classes even when managing the tree:");
    client_code2(&mut tree, Rc::new(Leaf), &mut trace);

    trace
}
