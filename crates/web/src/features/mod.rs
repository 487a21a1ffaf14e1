use std::time::Duration;

use axum::{
    Router,
    http::{Method, header},
};
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::middleware::auth::ApiKeys;

pub mod announcements;
pub mod auth;
pub mod contacts;
pub mod events;
pub mod gallery;
pub mod hostels;
pub mod legs;
pub mod standings;
pub mod years;


use auth::services::AdminCredentials;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::handlers::login,
        years::handlers::list_years,
        years::handlers::get_current_year,
        years::handlers::get_year,
        years::handlers::create_year,
        years::handlers::update_year,
        years::handlers::delete_year,
        years::handlers::set_current_year,
        hostels::handlers::list_hostels,
        hostels::handlers::create_hostel,
        hostels::handlers::update_hostel,
        hostels::handlers::delete_hostel,
        legs::handlers::list_legs,
        legs::handlers::get_leg,
        legs::handlers::update_leg,
        events::handlers::list_year_events,
        events::handlers::list_events,
        events::handlers::get_event,
        events::handlers::create_event,
        events::handlers::update_event,
        events::handlers::delete_event,
        events::handlers::update_scores,
        events::handlers::get_event_winner,
        standings::handlers::get_leaderboard,
        standings::handlers::get_hostel_standing,
        standings::handlers::get_leg_leader,
        announcements::handlers::list_announcements,
        announcements::handlers::create_announcement,
        announcements::handlers::update_announcement,
        announcements::handlers::delete_announcement,
        gallery::handlers::list_gallery_items,
        gallery::handlers::create_gallery_item,
        gallery::handlers::delete_gallery_item,
        contacts::handlers::list_contacts,
        contacts::handlers::create_contact,
        contacts::handlers::update_contact,
        contacts::handlers::delete_contact,
    ),
    components(
        schemas(
            auth::handlers::LoginRequest,
            auth::handlers::LoginResponse,
            storage::dto::year::CreateYearRequest,
            storage::dto::year::UpdateYearRequest,
            storage::dto::hostel::CreateHostelRequest,
            storage::dto::hostel::UpdateHostelRequest,
            storage::dto::leg::UpdateLegRequest,
            storage::dto::leg::UpdateLegTheme,
            storage::dto::event::CreateEventRequest,
            storage::dto::event::UpdateEventRequest,
            storage::dto::event::UpdateScoresRequest,
            storage::dto::announcement::CreateAnnouncementRequest,
            storage::dto::announcement::UpdateAnnouncementRequest,
            storage::dto::gallery::CreateGalleryItemRequest,
            storage::dto::contact::CreateContactRequest,
            storage::dto::contact::UpdateContactRequest,
            storage::dto::standings::LegScore,
            storage::dto::standings::HostelScore,
            storage::dto::standings::Leaderboard,
            storage::dto::standings::LegEvent,
            storage::dto::standings::LegEvents,
            storage::dto::standings::EventWinnerResponse,
            storage::models::CompetitionYear,
            storage::models::YearIndex,
            storage::models::Hostel,
            storage::models::Leg,
            storage::models::LegTheme,
            storage::models::Event,
            storage::models::Score,
            storage::models::Status,
            storage::models::Announcement,
            storage::models::AnnouncementKind,
            storage::models::GalleryItem,
            storage::models::ContactPerson,
        )
    ),
    tags(
        (name = "auth", description = "Admin login"),
        (name = "years", description = "Competition years"),
        (name = "hostels", description = "Competing hostels of a year"),
        (name = "legs", description = "The three legs of a year"),
        (name = "events", description = "Events and their scores"),
        (name = "standings", description = "Leaderboard derived from event scores"),
        (name = "announcements", description = "News feed"),
        (name = "gallery", description = "Photo gallery"),
        (name = "contacts", description = "Organiser contacts"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

fn api_routes(api_keys: ApiKeys, admin: AdminCredentials) -> Router<Database> {
    Router::new()
        .nest("/auth", auth::routes::routes(api_keys.clone(), admin))
        .nest("/years", years::routes::routes(api_keys.clone()))
        .nest("/years/:year/hostels", hostels::routes::routes(api_keys.clone()))
        .nest("/years/:year/legs", legs::routes::routes(api_keys.clone()))
        .nest(
            "/years/:year/legs/:leg_id/events",
            events::routes::routes(api_keys.clone()),
        )
        .nest("/years/:year/events", events::routes::year_routes())
        .nest("/years/:year/standings", standings::routes::routes())
        .nest(
            "/years/:year/announcements",
            announcements::routes::routes(api_keys.clone()),
        )
        .nest("/years/:year/gallery", gallery::routes::routes(api_keys.clone()))
        .nest("/years/:year/contacts", contacts::routes::routes(api_keys))
}

/// The whole application: API under `/api`, Swagger UI and CORS
pub fn router(db: Database, api_keys: ApiKeys, admin: AdminCredentials) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .nest("/api", api_routes(api_keys, admin))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(db)
}
