//! Reference resolvers, from a single string value up to a whole test.
//!
//! Data flows top to bottom: the test resolver expands each step's imports
//! and hands the step to the step resolver, which hands each statement to the
//! statement resolver, which resolves element and URL references. Element
//! references into a page resolve that page's parent references first.
//!
//! Every resolver borrows its input and returns `Cow::Borrowed` of that same
//! input when nothing changes, so an already resolved value can be detected
//! by pointer identity.

mod resolve_element;
mod resolve_page;
mod resolve_statement;
mod resolve_step;
mod resolve_step_import;
mod resolve_url;

pub use resolve_element::{resolve_element, resolve_page_element};
pub use resolve_page::resolve_page;
pub use resolve_statement::{ComponentResolver, StatementResolver, element_component, url_component};
pub use resolve_step::StepResolver;
pub use resolve_step_import::{resolve_data_import, resolve_step_import};
pub use resolve_test::{TestResolver, resolve_test};
pub use resolve_url::{resolve_configuration, resolve_imported_url};
