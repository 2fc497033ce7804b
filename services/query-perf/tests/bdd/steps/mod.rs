//! BDD step definitions for the query performance dashboard

pub mod dashboard_steps;
pub mod pill_steps;
