pub mod client;
pub mod config;
pub mod details;
pub mod error;
pub mod evolution;
pub mod format;
pub mod model;
pub mod server;
pub mod view;
pub mod weakness;

#[cfg(test)]
mod testing;

pub use client::*;
pub use config::*;
pub use details::*;
pub use error::*;
pub use server::AppState;
pub use view::*;
