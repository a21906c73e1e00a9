//! Command implementations

mod config;
mod list;
mod menu;
mod repair;
mod restore;
mod show;
mod status;

pub use config::config;
pub use list::list;
pub use menu::menu;
pub use repair::repair;
pub use restore::restore;
pub use show::show;
pub use status::status;
