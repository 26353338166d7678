//! # Application Layer
//!
//! The tool adapter: capability advertisement, dispatch, path normalization and the
//! per-tool executors that frame external process output.

pub mod adapter;
pub mod executors;
pub mod paths;
pub mod tools;
