pub mod camera;
pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod input;
pub mod reload;
pub mod scene;
pub mod spawner;

pub use error::GameError;
