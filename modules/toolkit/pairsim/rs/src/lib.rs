pub use config::{Config, ConfigBuilder};
pub use engine::Engine;
pub use result::Summary;
pub use worker::normalize;

mod config;
mod engine;
mod result;
mod worker;
