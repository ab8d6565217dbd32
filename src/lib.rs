pub mod config;
pub mod database;
pub mod error;
pub mod realign;
pub mod row;
pub mod schema;
pub mod table;

// Re-export commonly used types for tests and consumers
pub use config::*;
pub use database::*;
pub use error::*;
pub use realign::*;
pub use row::*;
pub use schema::*;
pub use table::*;
