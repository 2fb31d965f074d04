pub mod input;
pub mod persist;
pub mod resolver;
