pub mod traits;

// Rate source implementations
pub mod generative;
pub mod static_table;
