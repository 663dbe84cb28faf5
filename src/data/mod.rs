pub mod feature;
pub mod fit;
