pub mod bookmarks;
pub mod dump;
pub mod error;
pub mod health;
pub mod help;
pub mod tags;

pub use error::AppError;
