pub mod booking;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod graphql;
pub mod logging;
pub mod packages;
pub mod registry;
pub mod search;
pub mod seed;
pub mod server;
pub mod taxonomy;
