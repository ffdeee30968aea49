//! Burger Core Types
//!
//! This crate provides the dynamic [`Value`] that flows through every
//! validated assignment. Validators inspect a `Value` and decide whether it
//! may be stored.

mod value;

pub use value::*;
