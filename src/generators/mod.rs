// src/generators/mod.rs
pub mod password;
pub mod strength;
