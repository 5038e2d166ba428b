use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppJsonRejection, AppQuery, AppQueryRejection};
use crate::features::schools::dtos::school_dto::{COORDINATES_INVALID, SCHOOL_ADDED};
use crate::features::schools::dtos::{
    AddSchoolResponseDto, CreateSchoolDto, ListSchoolsQuery, RankedSchoolDto,
};
use crate::features::schools::services::SchoolService;
use crate::shared::types::ErrorResponse;

/// Add a school
///
/// All four fields are required; latitude and longitude must be numbers
/// inside their valid ranges.
#[utoipa::path(
    post,
    path = "/addSchool",
    request_body = CreateSchoolDto,
    responses(
        (status = 201, description = "School added successfully", body = AddSchoolResponseDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "schools"
)]
pub async fn add_school(
    State(service): State<Arc<SchoolService>>,
    payload: std::result::Result<AppJson<CreateSchoolDto>, AppJsonRejection>,
) -> Result<(StatusCode, Json<AddSchoolResponseDto>)> {
    // No JSON document means every field is missing
    let dto = match payload {
        Ok(AppJson(dto)) => dto,
        Err(rejection) if rejection.is_missing_body() => CreateSchoolDto::default(),
        Err(rejection) => return Err(rejection.into()),
    };

    let data = dto.into_create_school()?;
    let school = service.create(data).await?;

    Ok((
        StatusCode::CREATED,
        Json(AddSchoolResponseDto {
            message: SCHOOL_ADDED.to_string(),
            school,
        }),
    ))
}

/// List all schools ordered by distance from the given point
///
/// Each entry carries a `distance` field in kilometres. No pagination.
#[utoipa::path(
    get,
    path = "/listSchools",
    params(ListSchoolsQuery),
    responses(
        (status = 200, description = "Schools sorted nearest first", body = Vec<RankedSchoolDto>),
        (status = 400, description = "Missing or invalid coordinates", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "schools"
)]
pub async fn list_schools(
    State(service): State<Arc<SchoolService>>,
    query: std::result::Result<AppQuery<ListSchoolsQuery>, AppQueryRejection>,
) -> Result<Json<Vec<RankedSchoolDto>>> {
    let AppQuery(query) =
        query.map_err(|_| AppError::Validation(COORDINATES_INVALID.to_string()))?;
    let origin = query.origin()?;
    let schools = service.list_by_proximity(origin).await?;
    Ok(Json(schools))
}
