// Library exports for Earl
// This allows integration tests and external code to use Earl modules

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod gallery;
pub mod navigation;
pub mod routes;
pub mod state;
pub mod theme;
pub mod upload;
