pub mod builder;
pub mod index;
pub mod loader;
pub mod merge;
pub mod query;
pub mod source;
pub mod tokenizer;

pub use builder::{build, IndexBuilder};
pub use index::{Index, Occurrence, OccurrenceList};
pub use query::MAX_RESULTS;
pub use tokenizer::{normalize, NoiseWords};
