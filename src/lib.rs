// Library exports for the binary and the integration tests

pub mod cli;
pub mod common;
pub mod input;
pub mod math;
pub mod session;
