pub mod comparison;
pub mod topology;
