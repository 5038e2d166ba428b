mod school;

pub use school::{CreateSchool, School};
