//! Task module
//!
//! This module contains the to-do variant: task content, the completion
//! filter and task statistics.

mod filter;
mod model;

pub use filter::{select_visible, Filter, TaskCounts};
pub use model::*;
