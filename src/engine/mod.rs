// Sequencing engine - independent of the command-line front end

pub mod core;
pub mod select;

pub use self::core::*;
pub use select::SourceSelection;
