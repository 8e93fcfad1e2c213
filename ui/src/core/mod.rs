//! Platform-agnostic pieces of the page: content, form logic and motion state.

pub mod content;
pub mod lead;
pub mod motion;
pub mod timing;
