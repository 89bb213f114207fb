//! Terminal presentation helpers

pub mod display;
