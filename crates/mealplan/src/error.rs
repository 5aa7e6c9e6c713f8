use std::path::PathBuf;

use time::Weekday;

use crate::Meal;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown weekday '{0}'")]
    UnknownWeekday(String),

    #[error("weekday index {0} is out of range 0-6")]
    InvalidWeekday(u8),

    #[error("{0} is scheduled more than once")]
    DuplicateDay(Weekday),

    #[error("{0} is missing from the weekly schedule")]
    MissingDay(Weekday),

    #[error("{day} {meal} references unknown recipe '{recipe_id}'")]
    UnknownRecipe {
        day: Weekday,
        meal: Meal,
        recipe_id: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
