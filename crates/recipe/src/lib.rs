mod catalog;
mod checklist;
mod error;
mod types;

pub use catalog::*;
pub use checklist::*;
pub use error::*;
pub use types::*;
