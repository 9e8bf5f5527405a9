//! Built-in time sources

pub mod script;
pub mod system;

pub use script::ScriptedSource;
pub use system::SystemSource;
