pub mod filter;
pub mod issue;
pub mod map;
pub mod metrics;
pub mod report;
pub mod session;
pub mod view;
