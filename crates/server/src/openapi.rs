//! OpenAPI document. The `*Doc` types mirror the JSON shapes of the entity
//! models and request bodies so the entity crates stay free of utoipa.

use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc {
    /// e.g. `Medspa not found`
    pub detail: String,
}

#[derive(ToSchema)]
pub struct MedspaDoc {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub email_address: String,
    #[schema(format = DateTime)]
    pub created_at: String,
    #[schema(format = DateTime)]
    pub updated_at: String,
}

#[derive(ToSchema)]
pub struct NewMedspaDoc {
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub email_address: String,
}

#[derive(ToSchema)]
pub struct MedspaPatchDoc {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub email_address: Option<String>,
}

#[derive(ToSchema)]
pub struct ServiceDoc {
    pub id: i32,
    pub medspa_id: i32,
    pub name: String,
    pub description: String,
    /// Two decimal places.
    #[schema(example = "450.00")]
    pub price: String,
    /// Minutes.
    pub duration: i32,
    #[schema(format = DateTime)]
    pub created_at: String,
    #[schema(format = DateTime)]
    pub updated_at: String,
}

#[derive(ToSchema)]
pub struct NewServiceDoc {
    pub medspa_id: i32,
    pub name: String,
    pub description: String,
    /// Number or decimal string.
    #[schema(example = "450.00")]
    pub price: String,
    pub duration: i32,
}

#[derive(ToSchema)]
pub struct ServicePatchDoc {
    pub medspa_id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub duration: Option<i32>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatusDoc {
    Scheduled,
    Completed,
    Cancelled,
}

#[derive(ToSchema)]
pub struct AppointmentDoc {
    pub id: i32,
    pub medspa_id: i32,
    #[schema(format = DateTime)]
    pub start_time: String,
    #[schema(example = "300.00")]
    pub total_price: String,
    pub total_duration: i32,
    pub status: AppointmentStatusDoc,
    #[schema(format = DateTime)]
    pub created_at: String,
    #[schema(format = DateTime)]
    pub updated_at: String,
}

/// Appointment fields plus the booked services.
#[derive(ToSchema)]
pub struct AppointmentDetailDoc {
    pub id: i32,
    pub medspa_id: i32,
    #[schema(format = DateTime)]
    pub start_time: String,
    pub total_price: String,
    pub total_duration: i32,
    pub status: AppointmentStatusDoc,
    #[schema(format = DateTime)]
    pub created_at: String,
    #[schema(format = DateTime)]
    pub updated_at: String,
    pub services: Vec<ServiceDoc>,
}

#[derive(ToSchema)]
pub struct AppointmentCreateDoc {
    pub medspa_id: i32,
    /// Service ids; services of other medspas are ignored.
    pub services: Vec<i32>,
}

#[derive(ToSchema)]
pub struct AppointmentUpdateDoc {
    pub medspa_id: Option<i32>,
    pub status: Option<AppointmentStatusDoc>,
    /// Replaces the booked services and recomputes the totals.
    pub services: Option<Vec<i32>>,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Medspa API", description = "Medspas, their services and appointments"),
    paths(
        crate::routes::root,
        crate::routes::health,
        crate::routes::medspas::list,
        crate::routes::medspas::get,
        crate::routes::medspas::create,
        crate::routes::medspas::update,
        crate::routes::medspas::delete,
        crate::routes::services::list,
        crate::routes::services::get,
        crate::routes::services::create,
        crate::routes::services::update,
        crate::routes::services::delete,
        crate::routes::appointments::list,
        crate::routes::appointments::get,
        crate::routes::appointments::create,
        crate::routes::appointments::update,
        crate::routes::appointments::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            MedspaDoc,
            NewMedspaDoc,
            MedspaPatchDoc,
            ServiceDoc,
            NewServiceDoc,
            ServicePatchDoc,
            AppointmentStatusDoc,
            AppointmentDoc,
            AppointmentDetailDoc,
            AppointmentCreateDoc,
            AppointmentUpdateDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "medspas"),
        (name = "services"),
        (name = "appointments")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_resource() {
        let doc = ApiDoc::openapi();
        for path in ["/medspas", "/medspas/{id}", "/services", "/services/{id}", "/appointments", "/appointments/{id}"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
