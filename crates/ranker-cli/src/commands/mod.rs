//! Command implementations.

pub mod config;
pub mod resume;
pub mod show;
pub mod start;

pub use self::config::execute_config;
pub use self::resume::execute_resume;
pub use self::show::execute_show;
pub use self::start::execute_start;
