//! Top-list copier library - shared modules for all binaries.

pub mod copier;
pub mod matcher;
pub mod models;
pub mod normalize;
pub mod progress;
pub mod run;
pub mod safety;
pub mod scanner;
pub mod titles;
