use crate::models::rank::Rank;
use crate::models::user::Session;
use crate::security::access_gate::Notice;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleUpdate {
    #[serde(default)]
    pub role_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionUpdate {
    pub mongo_uri: String,
    pub discord_token: String,
}

#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// Body sent when the access gate turns a request away
#[derive(Debug, Serialize, Deserialize)]
pub struct GateRejection {
    pub success: bool,
    pub error: String,
    pub notice: Notice,
    pub redirect: String,
}

#[derive(Serialize)]
pub struct ListResponse<T: Serialize> {
    pub success: bool,
    pub total: usize,
    pub items: Vec<T>,
}

#[derive(Serialize)]
pub struct RecordResponse<T: Serialize> {
    pub success: bool,
    pub item: T,
}

#[derive(Serialize)]
pub struct RemoveResponse {
    pub success: bool,
    pub removed: bool,
    pub remaining: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub success: bool,
    pub user: Session,
    pub rank: Option<&'static Rank>,
    pub rank_image: &'static str,
}

impl SessionResponse {
    pub fn new(user: Session) -> Self {
        let rank = user.rank();
        let rank_image = user.rank_image();
        Self {
            success: true,
            user,
            rank,
            rank_image,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleResponse {
    pub success: bool,
    pub role_id: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionResponse {
    pub success: bool,
    pub mongo_uri: Option<String>,
    pub discord_token: Option<String>,
}
