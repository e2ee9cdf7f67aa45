#![allow(clippy::too_many_arguments)]

pub mod app_config;
pub mod error;
pub mod kafka_api;
pub mod startup;
