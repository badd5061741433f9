pub mod actions;
pub mod config;
pub mod data;
pub mod fractals;
pub mod navigation;
pub mod util;
pub mod viewport;
