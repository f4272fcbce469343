pub mod config;
pub mod core;
pub mod estimators;
pub mod evaluation;
pub mod logging;
pub mod render;
pub mod streams;
pub mod tasks;
pub mod ui;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
