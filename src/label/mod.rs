pub mod classify;
pub mod parser;

pub use classify::{classify, weight_table};
pub use parser::LabelParser;
