pub mod config;
pub mod database;
pub mod logger;
pub mod mocks;
pub mod server;

pub use config::{AppConfig, CargoEnv};
pub use database::Database;
pub use logger::Logger;
pub use server::ApplicationServer;

