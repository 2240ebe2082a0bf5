//! HTTP request handlers, one module per screen of the planner.

pub mod dashboard;
pub mod planning;
pub mod settings;
pub mod tasks;
