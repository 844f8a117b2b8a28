pub mod models;
pub mod security;
