//! Model types for the pageflow browser-test language
//!
//! Every value in this crate is immutable once constructed. Operations that
//! "change" a value (for example [`Step::with_data`]) consume it and return a
//! newly constructed value.

mod data_set;
mod page;
mod statement;
mod step;

pub use data_set::{DataSet, DataSetCollection};
pub use page::Page;
pub use statement::{Action, ActionKind, Assertion, AssertionKind, ResolvedStatement, Statement};
pub use step::{IdentifierMap, Step};
pub use test::{Configuration, Test};
