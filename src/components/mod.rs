//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and results while reading shared state
//! passed in as props from the pages.

pub mod history_list;
pub mod nav_bar;
pub mod summary_card;
