pub mod config;
pub mod error;
pub mod event;
pub mod state;

pub use config::*;
pub use error::*;
pub use event::*;
pub use state::*;
