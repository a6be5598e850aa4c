//! Reference resolution for the pageflow browser-test language
//!
//! Parsing produces a model full of symbolic references: to a step's named
//! elements, to another page's elements or URL, to reusable steps, and to
//! data sets. This crate links that model, replacing every reference with
//! the literal value it denotes so that code generation needs no further
//! lookups.
//!
//! # Overview
//!
//! - [`reference`] recognises the reference syntax inside a string.
//! - [`resolve_page`] settles the parent references between a page's own
//!   identifiers by fixed-point iteration.
//! - [`resolve_element`] and [`resolve_imported_url`] resolve a single value.
//! - [`StatementResolver`] resolves the identifier and value of one action
//!   or assertion.
//! - [`resolve_step_import`] and [`resolve_data_import`] expand a step's
//!   imports.
//! - [`StepResolver`] resolves a step; [`TestResolver`] resolves a test.
//!
//! Lookups go through the provider traits of `pageflow_provider`. Failures
//! are returned as a [`ResolutionError`](error::ResolutionError) whose
//! context names the test, step, and statement responsible.
//!
//! # Example
//!
//! ```rust
//! use pageflow_model::{Action, Configuration, Page, Statement, Step, Test};
//! use pageflow_provider::{DataSets, Pages, Steps};
//! use pageflow_resolver::resolve_test;
//!
//! let pages = Pages::new([(
//!     "login",
//!     Page::new("login", "http://example.com/login", [("form", "$\".form\"")]),
//! )]);
//!
//! let submit = Statement::from(Action::interaction(
//!     "submit $login.elements.form",
//!     "submit",
//!     "$login.elements.form",
//! ));
//! let test = Test::new(
//!     "login.yml",
//!     Configuration::new(["chrome"], "$login.url"),
//!     [("submit the form", Step::new(vec![submit], vec![]))],
//! );
//!
//! let resolved = resolve_test(&test, &pages, &Steps::default(), &DataSets::default())?;
//!
//! assert_eq!(resolved.configuration().url(), "http://example.com/login");
//! let step = resolved.step("submit the form").expect("step is kept");
//! assert_eq!(step.actions()[0].identifier(), Some("$\".form\""));
//! # Ok::<(), pageflow_resolver::error::ResolutionError>(())
//! ```

pub mod error;
pub mod reference;
mod resolver;
mod util;

#[cfg(test)]
mod test;

pub use crate::resolver::{
    ComponentResolver, StatementResolver, StepResolver, TestResolver, element_component,
    resolve_configuration, resolve_data_import, resolve_element, resolve_imported_url,
    resolve_page, resolve_page_element, resolve_step_import, resolve_test, url_component,
};
