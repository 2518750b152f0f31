pub mod model;

pub use model::{DbPage, JsonPage};
