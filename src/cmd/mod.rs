pub mod batch;
pub mod ride;
pub mod score;
