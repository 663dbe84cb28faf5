pub mod base;
pub mod legend;
pub mod query;
pub mod range;
pub mod source;
pub mod tree;
