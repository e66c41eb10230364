// Library for tests to access modules

pub mod config;
pub mod engine;
pub mod error;
pub mod health_repo;
pub mod models;
pub mod network_repo;
pub mod parsers;
pub mod platform;
pub mod port_scanner;
pub mod probe_runner;
pub mod routes;
pub mod version;
