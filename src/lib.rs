pub mod cli;
pub mod config;
pub mod input;
pub mod label;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
