pub mod buff;
pub mod config;
mod error;
pub mod fetcher;
pub mod locale;
pub mod persist;
pub mod pipeline;
pub mod recipe;

pub use config::Config;
pub use error::Error;
pub use pipeline::run;
