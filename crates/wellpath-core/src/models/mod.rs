pub mod context;
pub mod intake;
pub mod lab;
pub mod metrics;
