//! Core data types for the SCL engine

pub mod checkpoint;
pub mod context;
pub mod liability;
pub mod weight_table;
