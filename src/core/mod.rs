pub mod error;
pub mod link_math;
pub mod node;
