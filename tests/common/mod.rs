//! Shared integration test helpers.

#![allow(dead_code)]

pub mod fake_oracle;
pub mod fixtures;
pub mod harness;
