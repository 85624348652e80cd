use crate::core::error::PanelError;
use crate::core::state::AppState;
use crate::models::admin::{ListResponse, RecordResponse, RemoveResponse, SearchQuery};
use crate::models::{
    badge::{Badge, NewBadge},
    inventory::{InventoryItem, NewInventoryItem},
    wanted::{NewWantedPerson, WantedPerson},
};
use crate::security::access_gate::Authorized;
use crate::stores::collection::{Collection, Record};
use crate::validation::request::{JsonBody, QueryParams};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{debug, info};

fn list_records<T: Record>(collection: &Collection<T>, query: &SearchQuery) -> Result<Response, PanelError> {
    let items = collection.search(&query.q)?;

    debug!(key = collection.key(), term = %query.q, hits = items.len(), "Collection listed");

    Ok((
        StatusCode::OK,
        Json(ListResponse {
            success: true,
            total: collection.len(),
            items,
        }),
    )
        .into_response())
}

fn add_record<T: Record>(
    collection: &Collection<T>,
    draft: T::Draft,
    username: &str,
) -> Result<Response, PanelError> {
    let item = collection.add(draft)?;

    info!(key = collection.key(), id = item.id(), username, "Record added");

    Ok((StatusCode::CREATED, Json(RecordResponse { success: true, item })).into_response())
}

fn remove_record<T: Record>(
    collection: &Collection<T>,
    id: &str,
    username: &str,
) -> Result<Response, PanelError> {
    let removed = collection.remove(id)?.is_some();

    if removed {
        info!(key = collection.key(), id, username, "Record removed");
    } else {
        debug!(key = collection.key(), id, "Remove of absent record ignored");
    }

    Ok((
        StatusCode::OK,
        Json(RemoveResponse {
            success: true,
            removed,
            remaining: collection.len(),
        }),
    )
        .into_response())
}

/// GET /badges?q=<term>
pub async fn badges_list_handler(
    _auth: Authorized,
    State(state): State<Arc<AppState>>,
    QueryParams(query): QueryParams<SearchQuery>,
) -> Result<Response, PanelError> {
    list_records(&state.badges, &query)
}

/// POST /badges
pub async fn badges_add_handler(
    Authorized(session): Authorized,
    State(state): State<Arc<AppState>>,
    JsonBody(draft): JsonBody<NewBadge>,
) -> Result<Response, PanelError> {
    add_record::<Badge>(&state.badges, draft, &session.username)
}

/// DELETE /badges/{id}
pub async fn badges_remove_handler(
    Authorized(session): Authorized,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, PanelError> {
    remove_record(&state.badges, &id, &session.username)
}

/// GET /inventory?q=<term>
pub async fn inventory_list_handler(
    _auth: Authorized,
    State(state): State<Arc<AppState>>,
    QueryParams(query): QueryParams<SearchQuery>,
) -> Result<Response, PanelError> {
    list_records(&state.inventory, &query)
}

/// POST /inventory
pub async fn inventory_add_handler(
    Authorized(session): Authorized,
    State(state): State<Arc<AppState>>,
    JsonBody(draft): JsonBody<NewInventoryItem>,
) -> Result<Response, PanelError> {
    add_record::<InventoryItem>(&state.inventory, draft, &session.username)
}

/// DELETE /inventory/{id}
pub async fn inventory_remove_handler(
    Authorized(session): Authorized,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, PanelError> {
    remove_record(&state.inventory, &id, &session.username)
}

/// GET /wanted?q=<term>
pub async fn wanted_list_handler(
    _auth: Authorized,
    State(state): State<Arc<AppState>>,
    QueryParams(query): QueryParams<SearchQuery>,
) -> Result<Response, PanelError> {
    list_records(&state.wanted, &query)
}

/// POST /wanted
pub async fn wanted_add_handler(
    Authorized(session): Authorized,
    State(state): State<Arc<AppState>>,
    JsonBody(draft): JsonBody<NewWantedPerson>,
) -> Result<Response, PanelError> {
    add_record::<WantedPerson>(&state.wanted, draft, &session.username)
}

/// DELETE /wanted/{id}
pub async fn wanted_remove_handler(
    Authorized(session): Authorized,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, PanelError> {
    remove_record(&state.wanted, &id, &session.username)
}
