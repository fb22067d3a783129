pub mod repository;

#[allow(unused_imports)]
pub use repository::*;
