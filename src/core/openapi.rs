use utoipa::{Modify, OpenApi};

use crate::features::home::handlers as home_handlers;
use crate::features::schools::{dtos as schools_dtos, handlers as schools_handlers};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Home
        home_handlers::welcome,
        // Schools
        schools_handlers::school_handler::add_school,
        schools_handlers::school_handler::list_schools,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            // Schools
            schools_dtos::CreateSchoolDto,
            schools_dtos::SchoolResponseDto,
            schools_dtos::AddSchoolResponseDto,
            schools_dtos::RankedSchoolDto,
        )
    ),
    tags(
        (name = "home", description = "Welcome endpoint"),
        (name = "schools", description = "School records and proximity search"),
    ),
    info(
        title = "School Locator API",
        version = "0.1.0",
        description = "Store schools and list them by distance",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
