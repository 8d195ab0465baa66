//! Line-oriented interpreter over an in-memory collection of 3D figures.
//!
//! `ADD` builds figures, `REM field op value` removes every figure matching a
//! condition, `PRINT` reports what is left.
pub mod cli;
pub mod collection;
pub mod command;
pub mod condition;
pub mod error;
pub mod factory;
pub mod figure;
pub mod report;
pub mod source;
