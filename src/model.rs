pub mod budget;
pub mod catalog;
pub mod engine;
pub mod interest;
pub mod offer;
pub mod platform;
pub mod summary;
pub mod util;
