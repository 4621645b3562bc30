//! Shared test utilities

#![allow(dead_code)]

pub mod lookup;

pub use lookup::*;
