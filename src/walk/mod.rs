//! Walk-filter-act pipeline
//!
//! A run visits every entry under a root once, in lexical depth-first order.
//! `FileFilter` decides which entries are eligible and `ActionPlan` decides,
//! from the configuration alone, what happens to each eligible file.

mod config;
mod filter;
mod pipeline;
mod plan;

pub use config::RunConfig;
pub use filter::{EntryInfo, FileFilter, dotted_extension};
pub use pipeline::{Pipeline, run};
pub use plan::{Action, ActionPlan};
