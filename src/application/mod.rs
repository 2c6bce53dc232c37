/// Authenticated session and digest retrieval
pub mod auth;
/// SharePoint REST client facade
pub mod client;
/// Application configuration module
pub mod config;
/// Relative paths of the REST endpoints
pub mod endpoints;
/// Service traits, one per operation family
pub mod interfaces;
/// NTLM message codec
pub mod ntlm;
/// Permission checks on a dedicated session
pub mod permissions;
/// Service implementations for the client
pub mod services;
