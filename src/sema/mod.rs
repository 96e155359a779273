pub mod builtins;
mod check;
mod scope;

pub use check::*;
pub use scope::*;
