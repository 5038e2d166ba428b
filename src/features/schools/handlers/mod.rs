pub mod school_handler;

pub use school_handler::{add_school, list_schools};
