pub mod environments;
pub mod error;
pub mod host;
pub mod loader;
pub mod menus;
pub mod store;
pub mod ui;

pub use environments::*;
pub use error::*;
pub use host::*;
pub use loader::*;
pub use menus::*;
pub use store::*;
pub use ui::*;
