//! Poké Teams API Library
//!
//! Team composition and trainer ownership for Pokémon trainers: domain
//! rules, persistence adapters, upstream integrations and the HTTP layer.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;
