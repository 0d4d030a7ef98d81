use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use agrireg_core::ProducerId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_producers).post(create_producer))
        .route(
            "/:id",
            get(get_producer).put(update_producer).delete(delete_producer),
        )
}

pub async fn create_producer(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreateProducerBody>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return errors::invalid_body(e.body_text()),
    };

    match services.register_producer(body.into()) {
        Ok(producer) => (StatusCode::CREATED, Json(producer)).into_response(),
        Err(e) => errors::registration_error_to_response(e),
    }
}

/// Lists all producers, or looks one up when `?document=` is given.
pub async fn list_producers(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListProducersQuery>,
) -> axum::response::Response {
    if let Some(document) = query.document {
        return match services.producer_by_document(&document) {
            Ok(producer) => (StatusCode::OK, Json(producer)).into_response(),
            Err(e) => errors::store_error_to_response(e),
        };
    }

    match services.producers_list() {
        Ok(items) => (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_producer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.producer_get(id) {
        Ok(producer) => (StatusCode::OK, Json(producer)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn update_producer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::UpdateProducerBody>, JsonRejection>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return errors::invalid_body(e.body_text()),
    };

    match services.update_producer_profile(body.into_request(id)) {
        Ok(producer) => (StatusCode::OK, Json(producer)).into_response(),
        Err(e) => errors::profile_update_error_to_response(e),
    }
}

pub async fn delete_producer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.producer_delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

fn parse_id(raw: &str) -> Result<ProducerId, axum::response::Response> {
    raw.parse::<ProducerId>()
        .map_err(|e| errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", e.to_string()))
}
