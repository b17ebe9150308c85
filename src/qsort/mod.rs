pub mod normal;
pub mod pivot;
