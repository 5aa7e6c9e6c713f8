pub mod catalog;
pub mod server;
pub mod week;

pub use catalog::{check, images, recipes};
pub use server::serve;
pub use week::week;
