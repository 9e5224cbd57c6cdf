pub mod context;

pub use context::{CharMap, CONTEXT_RADIUS};
