// Library exports for testing
pub mod activity;
pub mod aggregate;
pub mod analyze;
pub mod classify;
pub mod error;
pub mod logging;
pub mod renderer;
pub mod stats;
pub mod stats_builder;
pub mod timefmt;
pub mod window;
