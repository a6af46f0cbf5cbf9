pub mod app;
pub mod config;
pub mod engine;
pub mod events;
pub mod grid;
pub mod neighbors;
pub mod render;
pub mod seed;
pub mod term;

mod parse_util;
