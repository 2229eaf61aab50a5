// Measurement table
pub mod latency;

// Cache-boundary reference lines
pub mod reference;

// Domain-specific error types
pub mod errors;
