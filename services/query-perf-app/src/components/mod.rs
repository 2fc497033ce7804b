//! UI components

pub mod pill_cell;
pub mod query_table;
pub mod tooltip;
