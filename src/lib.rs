pub mod api;
pub mod bot;
pub mod config;
pub mod middleware;
pub mod model;
pub mod render;
pub mod util;
