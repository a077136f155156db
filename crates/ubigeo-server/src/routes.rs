use crate::error::ApiError;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use ubigeo_core::api::{DepartmentView, DistrictView, PlaceRef, ProvinceView, SearchResponse};
use ubigeo_core::{parse_limit, DbStats, UbigeoDb, UbigeoSearch};

/// The loaded database, shared read-only by every request.
pub type SharedDb = Arc<UbigeoDb>;

/// Query string of `/buscar`.
///
/// `limit` is kept as text so an unparseable value falls back to the
/// default instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub limit: Option<String>,
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    stats: DbStats,
}

pub fn router(db: SharedDb) -> Router {
    Router::new()
        .route("/departamentos", get(list_departments))
        .route("/departamentos/{code}", get(get_department))
        .route("/provincias/{code}", get(get_province))
        .route("/distritos/{code}", get(get_district))
        .route("/buscar", get(search))
        .route("/health", get(health))
        .layer(middleware::from_fn(log_request))
        .with_state(db)
}

async fn list_departments(State(db): State<SharedDb>) -> Json<Vec<PlaceRef>> {
    Json(db.list_departments())
}

async fn get_department(
    State(db): State<SharedDb>,
    code: Result<Path<String>, PathRejection>,
) -> Result<Json<DepartmentView>, ApiError> {
    let Path(code) = code?;
    Ok(Json(db.get_department(&code)?))
}

async fn get_province(
    State(db): State<SharedDb>,
    code: Result<Path<String>, PathRejection>,
) -> Result<Json<ProvinceView>, ApiError> {
    let Path(code) = code?;
    Ok(Json(db.get_province(&code)?))
}

async fn get_district(
    State(db): State<SharedDb>,
    code: Result<Path<String>, PathRejection>,
) -> Result<Json<DistrictView>, ApiError> {
    let Path(code) = code?;
    Ok(Json(db.get_district(&code)?))
}

async fn search(
    State(db): State<SharedDb>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(params) = params?;
    let limit = parse_limit(params.limit.as_deref());
    let query = params.q.as_deref().unwrap_or_default();
    Ok(Json(db.search(query, Some(limit))?))
}

async fn health(State(db): State<SharedDb>) -> Json<Health> {
    Json(Health {
        status: "ok",
        stats: db.stats(),
    })
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let start = Instant::now();

    let res = next.run(req).await;

    tracing::info!(
        %method,
        %path,
        status = res.status().as_u16(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "request"
    );
    res
}
