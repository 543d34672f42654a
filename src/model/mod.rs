pub mod attrs;
pub mod error;
pub mod vocab;

pub use attrs::{FieldLayout, ParsedAttributes, SortKey};
pub use error::CoreError;
pub use vocab::{Vocabulary, WeightTable};
