mod declarations;
mod format;
mod program;

pub use program::*;
