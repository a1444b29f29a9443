pub mod category;
pub mod config;
pub mod item;

pub use category::{Category, NewCategory};
pub use config::{CacheConfig, Config, DatabaseConfig, LoggingConfig};
pub use item::{Item, NewItem};
