mod app;
mod config;
mod render;
mod server;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use render::{PlottersError, RenderError};
pub use server::ServerError;
pub use validation::ValidationError;
