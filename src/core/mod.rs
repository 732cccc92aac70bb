//! Core types shared across the crate.

mod route;

pub use route::RoutePath;
