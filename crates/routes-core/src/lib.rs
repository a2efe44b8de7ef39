pub mod actions;
pub mod config;
pub mod context_menu;
pub mod error;
pub mod menu;
pub mod model;
pub mod projection;
pub mod scheduler;
pub mod scroll;
pub mod services;
pub mod stream;

pub use actions::*;
pub use error::*;
pub use menu::*;
pub use model::*;
pub use services::*;
