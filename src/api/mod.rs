// src/api/mod.rs — HTTP API for the records service

pub mod auth;
pub mod handlers;
pub mod types;

use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::infra::config::Config;
use crate::registry::Registry;
use crate::service::{EnrollmentService, GradeService, Notifier, PlanningService};

/// Shared state for API handlers.
#[derive(Clone)]
pub struct ApiState {
    pub registry: Arc<Registry>,
    pub planning: PlanningService,
    pub enrollment: EnrollmentService,
    pub grades: GradeService,
    pub token: Option<String>,
}

impl ApiState {
    pub fn new(registry: Arc<Registry>, config: &Config) -> Self {
        let notifier = Notifier::new(config.notifications.enabled);
        Self {
            planning: PlanningService::new(registry.clone()),
            enrollment: EnrollmentService::new(registry.clone(), notifier),
            grades: GradeService::new(registry.clone(), config.grading.max_value),
            registry,
            token: config.server.token.clone(),
        }
    }
}

/// Build the axum router with all API routes.
pub fn build_router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any);

    Router::new()
        .route("/api/v1/health", get(handlers::health))
        .route("/api/v1/students", post(handlers::create_student))
        .route("/api/v1/students", get(handlers::list_students))
        .route("/api/v1/students/{id}", get(handlers::get_student))
        .route("/api/v1/students/{id}", delete(handlers::delete_student))
        .route("/api/v1/students/{id}/grades", get(handlers::student_grades))
        .route("/api/v1/trainers", post(handlers::create_trainer))
        .route("/api/v1/trainers", get(handlers::list_trainers))
        .route("/api/v1/trainers/{id}", get(handlers::get_trainer))
        .route("/api/v1/trainers/{id}", delete(handlers::delete_trainer))
        .route("/api/v1/courses", post(handlers::create_course))
        .route("/api/v1/courses", get(handlers::list_courses))
        .route("/api/v1/courses/{id}", get(handlers::get_course))
        .route("/api/v1/courses/{id}", delete(handlers::delete_course))
        .route("/api/v1/groups", post(handlers::create_group))
        .route("/api/v1/groups", get(handlers::list_groups))
        .route("/api/v1/specialties", post(handlers::create_specialty))
        .route("/api/v1/specialties", get(handlers::list_specialties))
        .route("/api/v1/enrollments", post(handlers::create_enrollment))
        .route("/api/v1/enrollments", get(handlers::list_enrollments))
        .route("/api/v1/enrollments/{id}", delete(handlers::delete_enrollment))
        .route("/api/v1/grades", post(handlers::create_grade))
        .route("/api/v1/grades/{id}", put(handlers::update_grade))
        .route("/api/v1/planning/sessions", post(handlers::schedule_session))
        .route("/api/v1/planning/sessions", get(handlers::list_sessions))
        .route("/api/v1/planning/sessions/{id}", delete(handlers::delete_session))
        .route("/api/v1/planning/groups/{id}", get(handlers::group_schedule))
        .route("/api/v1/planning/trainers/{id}", get(handlers::trainer_schedule))
        .route("/api/v1/planning/students/{id}", get(handlers::student_schedule))
        .layer(cors)
        .with_state(state)
}

/// Start the API server on the configured port (blocking).
pub async fn start_server(config: &Config, state: ApiState) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{}", config.server.port);

    let router = build_router(state);

    tracing::info!("API server listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_state() -> ApiState {
        ApiState::new(Arc::new(Registry::new()), &Config::default())
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = build_router(test_state());
        let req = Request::builder()
            .uri("/api/v1/health")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
