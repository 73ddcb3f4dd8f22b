// src/api/handlers/mod.rs
pub mod auth;
pub mod generator;
