pub mod segment;
pub mod simulate;
