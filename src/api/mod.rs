mod error;
pub mod render;
mod server;
pub mod services;
pub mod state;

pub use error::ApiError;
pub use server::{StartupError, router, run};
