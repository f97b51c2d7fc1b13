// Order and security value objects consumed by fee models
pub mod types;

// Pluggable fee calculation
pub mod fees;
