//! Shared utilities for the pageflow browser-test language

pub mod error;
