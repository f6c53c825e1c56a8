//! TCALC - Terminal Calculator Library
//!
//! A terminal calculator with live expression evaluation, built in Rust.

pub mod application;
pub mod domain;
pub mod presentation;

pub use application::*;
pub use domain::*;
