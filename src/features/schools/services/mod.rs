mod proximity;
mod school_service;

pub use proximity::{rank_by_proximity, RankedSchool};
pub use school_service::SchoolService;
