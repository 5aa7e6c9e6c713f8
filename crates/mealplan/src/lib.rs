mod card;
mod error;
mod rotation;
mod schedule;
mod slot;
mod weekday;

pub use card::*;
pub use error::*;
pub use rotation::*;
pub use schedule::*;
pub use slot::*;
pub use weekday::{WEEK, parse_weekday, weekday_from_index, weekday_index};

pub use time::Weekday;
