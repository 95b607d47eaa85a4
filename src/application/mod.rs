/// Authentication and session caching
pub mod auth;
/// Client exposing the resource services
pub mod client;
/// Application configuration module
pub mod config;
/// Resource service interfaces
pub mod interfaces;
