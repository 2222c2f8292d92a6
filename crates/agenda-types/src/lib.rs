pub mod model;
pub mod briefing;
pub mod event;
pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

pub use error::AppError;
pub type Result<T> = std::result::Result<T, AppError>;
