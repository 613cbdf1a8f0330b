pub mod auth;
pub mod catalog;
pub mod endorsement;
pub mod metrics;
pub mod report;
pub mod settings;
pub mod view;
