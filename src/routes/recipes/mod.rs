pub mod detail;
pub mod index;
