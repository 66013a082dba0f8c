pub mod alignment;
pub mod gaps;
