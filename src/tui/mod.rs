//! Terminal front end: hot-seat play around a single shared screen.

pub mod app;
pub mod controller;
pub mod ui;
