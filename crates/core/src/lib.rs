//! Domain types and pure logic for the InkFlow backend.
//!
//! This crate has no database or HTTP dependencies.

pub mod dashboard;
pub mod error;
pub mod pricing;
pub mod project;
pub mod project_status;
pub mod types;
