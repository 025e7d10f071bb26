pub mod doc;
pub mod id;
pub mod model;

pub use doc::{DocError, Document};
pub use id::Id;
pub use model::*;
