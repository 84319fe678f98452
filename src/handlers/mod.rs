/// HTTP request handlers
use crate::domain::{DisplaySettings, GeneralFilter, Health, LikeState, Mission, MissionType};
use crate::errors::ApiError;
use crate::filters::{resolve_view, Exploration, FilterOptions, FilterState, ViewMetadata};
use crate::services::{CatalogService, LikeService, SessionContext};
use axum::{
    extract::{Path, Query, State},
    http::{header::AUTHORIZATION, HeaderMap},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService>,
    pub like_service: Arc<LikeService>,
    pub display: DisplaySettings,
}

/// Successful response wrapper
#[derive(Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub ok: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self { ok: true, data }
    }
}

#[derive(Serialize)]
pub struct ExplorerPage {
    #[serde(flatten)]
    pub exploration: Exploration,
    pub display: DisplaySettings,
}

#[derive(Serialize)]
pub struct ViewHeading {
    #[serde(flatten)]
    pub view: ViewMetadata,
    pub specific_mode: bool,
}

#[derive(Serialize)]
pub struct MissionDetail {
    pub mission: Mission,
}

#[derive(Serialize)]
pub struct MissionTypeEntry {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub target_based: bool,
}

#[derive(Serialize)]
pub struct GeneralFilterEntry {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Serialize)]
pub struct Classifications {
    pub types: Vec<MissionTypeEntry>,
    pub filters: Vec<GeneralFilterEntry>,
}

#[derive(Serialize)]
pub struct Refreshed {
    pub count: usize,
}

#[derive(Serialize)]
pub struct UpdateLike {
    pub update_id: String,
    #[serde(flatten)]
    pub state: LikeState,
}

/// Health check handler
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        now: Utc::now(),
    })
}

/// Explorer query: filtered missions plus heading
pub async fn list_missions(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<AppState>,
) -> Json<SuccessResponse<ExplorerPage>> {
    let exploration = state.catalog_service.explore(&params).await;
    Json(SuccessResponse::new(ExplorerPage {
        exploration,
        display: state.display,
    }))
}

/// Explorer heading only
pub async fn get_view(
    Query(params): Query<HashMap<String, String>>,
) -> Json<SuccessResponse<ViewHeading>> {
    let filter_state = FilterState::derive(&params);
    Json(SuccessResponse::new(ViewHeading {
        view: resolve_view(&filter_state.criteria),
        specific_mode: filter_state.specific_mode,
    }))
}

/// Filter panel dropdown options
pub async fn get_options(State(state): State<AppState>) -> Json<SuccessResponse<FilterOptions>> {
    Json(SuccessResponse::new(state.catalog_service.options().await))
}

/// Single mission by name
pub async fn get_mission(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<SuccessResponse<MissionDetail>>, ApiError> {
    let mission = state.catalog_service.find(&name).await?;
    Ok(Json(SuccessResponse::new(MissionDetail { mission })))
}

/// Classification tables behind the type-browsing links
pub async fn list_classifications() -> Json<SuccessResponse<Classifications>> {
    let types = MissionType::ALL
        .into_iter()
        .map(|t| MissionTypeEntry {
            slug: t.slug(),
            name: t.display_name(),
            description: t.description(),
            target_based: t.is_target_based(),
        })
        .collect();
    let filters = GeneralFilter::ALL
        .into_iter()
        .map(|f| GeneralFilterEntry {
            slug: f.slug(),
            name: f.display_name(),
            description: f.description(),
        })
        .collect();
    Json(SuccessResponse::new(Classifications { types, filters }))
}

/// Force a catalog refetch
pub async fn refresh_catalog(State(state): State<AppState>) -> Json<SuccessResponse<Refreshed>> {
    let catalog = state.catalog_service.refresh().await;
    Json(SuccessResponse::new(Refreshed {
        count: catalog.len(),
    }))
}

/// Locally known like state of an update
pub async fn get_like(
    Path(update_id): Path<String>,
    State(state): State<AppState>,
) -> Json<SuccessResponse<UpdateLike>> {
    let like = state.like_service.get(&update_id).await;
    Json(SuccessResponse::new(UpdateLike {
        update_id,
        state: like,
    }))
}

/// Toggle a like on behalf of the bearer token holder
pub async fn toggle_like(
    Path(update_id): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SuccessResponse<UpdateLike>>, ApiError> {
    let authorization = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    let session = SessionContext::from_authorization(authorization);

    let like = state.like_service.toggle(&update_id, &session).await?;
    Ok(Json(SuccessResponse::new(UpdateLike {
        update_id,
        state: like,
    })))
}
