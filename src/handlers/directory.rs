use crate::models::admin::{ListResponse, SearchQuery};
use crate::models::directory::{self, BotCommand, Member, MemberFilter};
use crate::models::rank::Rank;
use crate::security::access_gate::Authorized;
use crate::validation::request::QueryParams;
use axum::response::Json;

/// GET /ranks
pub async fn ranks_handler(_auth: Authorized) -> Json<ListResponse<&'static Rank>> {
    let items: Vec<&'static Rank> = Rank::all().iter().collect();
    Json(ListResponse {
        success: true,
        total: items.len(),
        items,
    })
}

/// GET /users?q=<term>&rank=<rank id|all>&online=<bool>
pub async fn users_handler(
    _auth: Authorized,
    QueryParams(filter): QueryParams<MemberFilter>,
) -> Json<ListResponse<&'static Member>> {
    let items = directory::members(&filter);
    Json(ListResponse {
        success: true,
        total: directory::members(&MemberFilter::default()).len(),
        items,
    })
}

/// GET /commands?q=<term>
pub async fn commands_handler(
    _auth: Authorized,
    QueryParams(query): QueryParams<SearchQuery>,
) -> Json<ListResponse<&'static BotCommand>> {
    let items = directory::commands(&query.q);
    Json(ListResponse {
        success: true,
        total: directory::commands("").len(),
        items,
    })
}
