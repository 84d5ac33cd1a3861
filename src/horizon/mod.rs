pub mod client;
pub mod manager;

pub use client::{AccountRecord, Error, HorizonClient};
pub use manager::HorizonManager;
