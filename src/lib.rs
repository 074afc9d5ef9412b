//! # Design Pattern Catalog
//!
//! Conceptual examples of the classical object-oriented design patterns,
//! one module per pattern. Every demo narrates what it is doing into a
//! [`Trace`] instead of printing, so the narration is a plain return value.
//!
//! ## Patterns Covered
//!
//! 1. **Behavioral** - Chain of Responsibility, Command, Iterator, Mediator,
//!    Memento, Observer, State, Strategy, Template Method, Visitor
//! 2. **Creational** - Abstract Factory, Builder, Factory Method, Prototype,
//!    Singleton
//! 3. **Structural** - Adapter, Bridge, Composite, Decorator, Facade,
//!    Flyweight, Proxy
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run -- list
//! cargo run -- run observer state
//! cargo run -- run --all --format json
//! ```

pub mod behavioral;
pub mod catalog;
pub mod config;
pub mod creational;
pub mod error;
pub mod structural;
pub mod trace;

pub use catalog::{Category, Pattern};
pub use config::{CatalogConfig, OutputFormat};
pub use error::{CatalogError, Result};
pub use trace::Trace;
