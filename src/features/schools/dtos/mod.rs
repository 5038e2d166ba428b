pub mod school_dto;

pub use school_dto::{
    AddSchoolResponseDto, CreateSchoolDto, ListSchoolsQuery, RankedSchoolDto, SchoolResponseDto,
};
