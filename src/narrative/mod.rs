pub mod novation;
