//! Command implementations.

pub mod detect;
pub mod import;
pub mod members;

pub use self::detect::execute_detect;
pub use self::import::execute_import;
pub use self::members::execute_members;
