//! Types shared between the showcase client core and its frontends.

pub mod domain;
pub mod error;
pub mod protocol;
