pub mod admin;
pub mod connection_settings;
pub mod consumer;
pub mod queries;
pub mod topic;
