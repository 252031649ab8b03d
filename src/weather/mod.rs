pub mod condition;
pub mod matcher;
