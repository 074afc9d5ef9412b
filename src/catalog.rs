//! The catalog itself: every pattern, its category, and a way to run it.

use crate::error::{CatalogError, Result};
use crate::trace::Trace;
use crate::{behavioral, creational, structural};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Behavioral,
    Creational,
    Structural,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Behavioral,
        Category::Creational,
        Category::Structural,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Behavioral => "behavioral",
            Category::Creational => "creational",
            Category::Structural => "structural",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    ChainOfResponsibility,
    Command,
    Iterator,
    Mediator,
    Memento,
    Observer,
    State,
    Strategy,
    TemplateMethod,
    Visitor,
    AbstractFactory,
    Builder,
    FactoryMethod,
    Prototype,
    Singleton,
    Adapter,
    Bridge,
    Composite,
    Decorator,
    Facade,
    Flyweight,
    Proxy,
}

impl Pattern {
    pub const ALL: [Pattern; 22] = [
        Pattern::ChainOfResponsibility,
        Pattern::Command,
        Pattern::Iterator,
        Pattern::Mediator,
        Pattern::Memento,
        Pattern::Observer,
        Pattern::State,
        Pattern::Strategy,
        Pattern::TemplateMethod,
        Pattern::Visitor,
        Pattern::AbstractFactory,
        Pattern::Builder,
        Pattern::FactoryMethod,
        Pattern::Prototype,
        Pattern::Singleton,
        Pattern::Adapter,
        Pattern::Bridge,
        Pattern::Composite,
        Pattern::Decorator,
        Pattern::Facade,
        Pattern::Flyweight,
        Pattern::Proxy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::ChainOfResponsibility => "chain-of-responsibility",
            Pattern::Command => "command",
            Pattern::Iterator => "iterator",
            Pattern::Mediator => "mediator",
            Pattern::Memento => "memento",
            Pattern::Observer => "observer",
            Pattern::State => "state",
            Pattern::Strategy => "strategy",
            Pattern::TemplateMethod => "template-method",
            Pattern::Visitor => "visitor",
            Pattern::AbstractFactory => "abstract-factory",
            Pattern::Builder => "builder",
            Pattern::FactoryMethod => "factory-method",
            Pattern::Prototype => "prototype",
            Pattern::Singleton => "singleton",
            Pattern::Adapter => "adapter",
            Pattern::Bridge => "bridge",
            Pattern::Composite => "composite",
            Pattern::Decorator => "decorator",
            Pattern::Facade => "facade",
            Pattern::Flyweight => "flyweight",
            Pattern::Proxy => "proxy",
        }
    }

    pub fn category(self) -> Category {
        use Pattern::*;
        match self {
            ChainOfResponsibility | Command | Iterator | Mediator | Memento | Observer | State
            | Strategy | TemplateMethod | Visitor => Category::Behavioral,
            AbstractFactory | Builder | FactoryMethod | Prototype | Singleton => {
                Category::Creational
            }
            Adapter | Bridge | Composite | Decorator | Facade | Flyweight | Proxy => {
                Category::Structural
            }
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Pattern::ChainOfResponsibility => {
                "Pass a request along a chain of handlers until one deals with it"
            }
            Pattern::Command => "Turn a request into a stand-alone object",
            Pattern::Iterator => "Traverse a collection without exposing its representation",
            Pattern::Mediator => "Route component collaboration through one coordinator",
            Pattern::Memento => "Save and restore state without revealing it",
            Pattern::Observer => "Notify subscribers about events on the subject",
            Pattern::State => "Change behavior when internal state changes",
            Pattern::Strategy => "Swap interchangeable algorithms at runtime",
            Pattern::TemplateMethod => "Fix an algorithm skeleton, let subclasses fill steps",
            Pattern::Visitor => "Add operations to a closed element set",
            Pattern::AbstractFactory => "Produce families of compatible products",
            Pattern::Builder => "Construct complex objects step by step",
            Pattern::FactoryMethod => "Defer the creation step to implementors",
            Pattern::Prototype => "Copy existing objects without knowing their types",
            Pattern::Singleton => "Exactly one lazily created instance",
            Pattern::Adapter => "Make an incompatible interface fit the expected one",
            Pattern::Bridge => "Split abstraction from implementation",
            Pattern::Composite => "Treat trees and leaves uniformly",
            Pattern::Decorator => "Wrap objects to add behavior",
            Pattern::Facade => "One simple entry point to a set of subsystems",
            Pattern::Flyweight => "Share intrinsic state between many objects",
            Pattern::Proxy => "Guard and log access to a real subject",
        }
    }

    /// Runs the pattern's demo and returns its narration.
    pub fn run(self) -> Trace {
        tracing::info!(pattern = self.name(), "running demo");
        match self {
            Pattern::ChainOfResponsibility => behavioral::chain_of_responsibility::demo(),
            Pattern::Command => behavioral::command::demo(),
            Pattern::Iterator => behavioral::iterator::demo(),
            Pattern::Mediator => behavioral::mediator::demo(),
            Pattern::Memento => behavioral::memento::demo(),
            Pattern::Observer => behavioral::observer::demo(),
            Pattern::State => behavioral::state::demo(),
            Pattern::Strategy => behavioral::strategy::demo(),
            Pattern::TemplateMethod => behavioral::template_method::demo(),
            Pattern::Visitor => behavioral::visitor::demo(),
            Pattern::AbstractFactory => creational::abstract_factory::demo(),
            Pattern::Builder => creational::builder::demo(),
            Pattern::FactoryMethod => creational::factory_method::demo(),
            Pattern::Prototype => creational::prototype::demo(),
            Pattern::Singleton => creational::singleton::demo(),
            Pattern::Adapter => structural::adapter::demo(),
            Pattern::Bridge => structural::bridge::demo(),
            Pattern::Composite => structural::composite::demo(),
            Pattern::Decorator => structural::decorator::demo(),
            Pattern::Facade => structural::facade::demo(),
            Pattern::Flyweight => structural::flyweight::demo(),
            Pattern::Proxy => structural::proxy::demo(),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalize(s);
        Pattern::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| CatalogError::unknown_pattern(s, suggest(&wanted)))
    }
}

pub fn patterns_in(category: Category) -> impl Iterator<Item = Pattern> {
    Pattern::ALL
        .into_iter()
        .filter(move |p| p.category() == category)
}

fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

// =============================================================================
// Suggestions for mistyped names
// =============================================================================

const MAX_SUGGESTION_DISTANCE: usize = 3;

fn suggest(name: &str) -> Option<String> {
    Pattern::ALL
        .into_iter()
        .map(|p| (levenshtein_distance(name, p.name()), p))
        .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, p)| p.name().to_string())
}

pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    if a.is_empty() {
        return b.chars().count();
    }
    if b.is_empty() {
        return a.chars().count();
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b_chars.len()).collect();
    let mut current = vec![0; b_chars.len() + 1];

    for i in 1..=a_chars.len() {
        current[0] = i;
        for j in 1..=b_chars.len() {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            current[j] = (previous[j] + 1)
                .min(current[j - 1] + 1)
                .min(previous[j - 1] + cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b_chars.len()]
}
