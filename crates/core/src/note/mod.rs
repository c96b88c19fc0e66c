//! Note module
//!
//! This module contains the note-taking variant: titled notes and their
//! display helpers.

mod model;

pub use model::*;
