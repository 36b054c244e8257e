//! Client data layer for the Ripple social network.
//!
//! Repositories wrap the REST backend behind one request chokepoint,
//! view-models drive each screen through a shared loading/data/error state
//! machine, and the session is injected rather than global.

pub mod api;
pub mod cli;
pub mod config;
pub mod models;
pub mod repository;
pub mod session;
pub mod ui;
pub mod validation;
