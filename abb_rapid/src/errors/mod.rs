mod rapid_error;

pub use rapid_error::*;
