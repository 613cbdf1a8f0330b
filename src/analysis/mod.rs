pub mod endorsement;
pub mod filter;
pub mod map;
pub mod metrics;
pub mod priority;
