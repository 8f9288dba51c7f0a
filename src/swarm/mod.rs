pub mod config;
pub mod engine;
pub mod neighborhood;
pub mod objective;
pub mod particle;
