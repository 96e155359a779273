mod command;
mod expr;
mod op;
mod ty;

pub mod token;

pub use command::*;
pub use expr::*;
pub use op::*;
pub use ty::*;

pub(crate) fn tabs(tab_lvl: usize) -> String {
    "\t".repeat(tab_lvl)
}
