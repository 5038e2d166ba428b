use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::schools::models::{CreateSchool, School};
use crate::features::schools::services::RankedSchool;
use crate::shared::geo::{
    Coordinates, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE,
};

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";
pub const COORDINATES_REQUIRED: &str = "Latitude and Longitude are required";
pub const COORDINATES_INVALID: &str = "Latitude and Longitude must be valid coordinates";
pub const SCHOOL_ADDED: &str = "School added successfully";

/// Request DTO for adding a school.
///
/// Every field is optional at the decoding stage so that a missing or null
/// field can be answered with the fixed "All fields are required" message.
/// Coordinates must be JSON numbers; strings are rejected while decoding.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSchoolDto {
    #[schema(example = "Springfield Elementary")]
    pub name: Option<String>,

    #[schema(example = "742 Evergreen Terrace")]
    pub address: Option<String>,

    #[validate(range(
        min = MIN_LATITUDE,
        max = MAX_LATITUDE,
        message = "Latitude must be between -90 and 90"
    ))]
    pub latitude: Option<f64>,

    #[validate(range(
        min = MIN_LONGITUDE,
        max = MAX_LONGITUDE,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: Option<f64>,
}

impl CreateSchoolDto {
    /// Name and address must be non-empty, coordinates present (0 counts)
    fn has_required_fields(&self) -> bool {
        self.name.as_deref().is_some_and(|s| !s.is_empty())
            && self.address.as_deref().is_some_and(|s| !s.is_empty())
            && self.latitude.is_some()
            && self.longitude.is_some()
    }

    /// Check presence, then ranges, and produce the insert model
    pub fn into_create_school(self) -> Result<CreateSchool> {
        if !self.has_required_fields() {
            return Err(AppError::Validation(ALL_FIELDS_REQUIRED.to_string()));
        }

        self.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        match self {
            CreateSchoolDto {
                name: Some(name),
                address: Some(address),
                latitude: Some(latitude),
                longitude: Some(longitude),
            } => Ok(CreateSchool {
                name,
                address,
                latitude,
                longitude,
            }),
            _ => Err(AppError::Validation(ALL_FIELDS_REQUIRED.to_string())),
        }
    }
}

/// Response DTO for school
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchoolResponseDto {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}

impl From<School> for SchoolResponseDto {
    fn from(s: School) -> Self {
        Self {
            id: s.id,
            name: s.name,
            address: s.address,
            latitude: s.latitude,
            longitude: s.longitude,
            created_at: s.created_at,
        }
    }
}

/// Response body for a successful `POST /addSchool`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddSchoolResponseDto {
    pub message: String,
    pub school: SchoolResponseDto,
}

/// School entry returned by `GET /listSchools`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RankedSchoolDto {
    #[serde(flatten)]
    pub school: SchoolResponseDto,
    /// Great-circle distance from the query point in kilometres
    pub distance: f64,
}

impl From<RankedSchool> for RankedSchoolDto {
    fn from(r: RankedSchool) -> Self {
        Self {
            school: r.school.into(),
            distance: r.distance,
        }
    }
}

/// Query params for listing schools by proximity
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListSchoolsQuery {
    /// Latitude of the query point in decimal degrees
    pub latitude: Option<String>,
    /// Longitude of the query point in decimal degrees
    pub longitude: Option<String>,
}

impl ListSchoolsQuery {
    /// Resolve the query point, rejecting missing, empty or unusable values
    pub fn origin(&self) -> Result<Coordinates> {
        let (latitude, longitude) = match (&self.latitude, &self.longitude) {
            (Some(lat), Some(lon)) if !lat.is_empty() && !lon.is_empty() => (lat, lon),
            _ => return Err(AppError::Validation(COORDINATES_REQUIRED.to_string())),
        };

        let invalid = || AppError::Validation(COORDINATES_INVALID.to_string());
        let origin = Coordinates::new(
            latitude.trim().parse().map_err(|_| invalid())?,
            longitude.trim().parse().map_err(|_| invalid())?,
        );

        if !origin.is_valid() {
            return Err(invalid());
        }

        Ok(origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_dto() -> CreateSchoolDto {
        CreateSchoolDto {
            name: Some("Springfield Elementary".to_string()),
            address: Some("742 Evergreen Terrace".to_string()),
            latitude: Some(44.05),
            longitude: Some(-123.09),
        }
    }

    fn query(lat: Option<&str>, lon: Option<&str>) -> ListSchoolsQuery {
        ListSchoolsQuery {
            latitude: lat.map(String::from),
            longitude: lon.map(String::from),
        }
    }

    fn validation_message(err: AppError) -> String {
        match err {
            AppError::Validation(msg) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_complete_dto_converts() {
        let school = full_dto().into_create_school().unwrap();
        assert_eq!(school.name, "Springfield Elementary");
        assert_eq!(school.latitude, 44.05);
        assert_eq!(school.longitude, -123.09);
    }

    #[test]
    fn test_zero_coordinates_are_accepted() {
        let dto = CreateSchoolDto {
            latitude: Some(0.0),
            longitude: Some(0.0),
            ..full_dto()
        };
        assert!(dto.into_create_school().is_ok());
    }

    #[test]
    fn test_each_missing_field_is_rejected() {
        let cases = [
            CreateSchoolDto {
                name: None,
                ..full_dto()
            },
            CreateSchoolDto {
                address: None,
                ..full_dto()
            },
            CreateSchoolDto {
                latitude: None,
                ..full_dto()
            },
            CreateSchoolDto {
                longitude: None,
                ..full_dto()
            },
            CreateSchoolDto {
                name: Some(String::new()),
                ..full_dto()
            },
        ];

        for dto in cases {
            let err = dto.into_create_school().unwrap_err();
            assert_eq!(validation_message(err), ALL_FIELDS_REQUIRED);
        }
    }

    #[test]
    fn test_out_of_range_coordinates_are_rejected() {
        let dto = CreateSchoolDto {
            latitude: Some(91.0),
            ..full_dto()
        };
        let msg = validation_message(dto.into_create_school().unwrap_err());
        assert!(msg.contains("Latitude must be between -90 and 90"));

        let dto = CreateSchoolDto {
            longitude: Some(-180.5),
            ..full_dto()
        };
        let msg = validation_message(dto.into_create_school().unwrap_err());
        assert!(msg.contains("Longitude must be between -180 and 180"));
    }

    #[test]
    fn test_string_coordinates_do_not_deserialize() {
        let body = r#"{"name":"A","address":"B","latitude":"12.5","longitude":3}"#;
        assert!(serde_json::from_str::<CreateSchoolDto>(body).is_err());
    }

    #[test]
    fn test_query_origin_parses() {
        let origin = query(Some("12.5"), Some(" -3 ")).origin().unwrap();
        assert_eq!(origin, Coordinates::new(12.5, -3.0));
    }

    #[test]
    fn test_query_origin_requires_both_params() {
        for q in [
            query(None, Some("1")),
            query(Some("1"), None),
            query(Some(""), Some("1")),
            query(None, None),
        ] {
            assert_eq!(validation_message(q.origin().unwrap_err()), COORDINATES_REQUIRED);
        }
    }

    #[test]
    fn test_query_origin_rejects_garbage() {
        for q in [
            query(Some("abc"), Some("1")),
            query(Some("1"), Some("NaN")),
            query(Some("95"), Some("1")),
        ] {
            assert_eq!(validation_message(q.origin().unwrap_err()), COORDINATES_INVALID);
        }
    }

    #[test]
    fn test_ranked_dto_serializes_flat() {
        let dto = RankedSchoolDto {
            school: SchoolResponseDto {
                id: Uuid::nil(),
                name: "A".to_string(),
                address: "B".to_string(),
                latitude: 1.0,
                longitude: 2.0,
                created_at: Utc::now(),
            },
            distance: 3.5,
        };

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["name"], "A");
        assert_eq!(value["distance"], 3.5);
        assert!(value.get("school").is_none());
        assert!(value.get("createdAt").is_some());
    }
}
