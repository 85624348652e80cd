use crate::models::rank::{self, Rank};
use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_AVATAR: &str = "/placeholder-avatar.png";

/// The logged-in operator
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub username: String,
    pub roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank_id: Option<String>,
}

impl Session {
    pub fn has_role(&self, role_id: &str) -> bool {
        self.roles.iter().any(|role| role == role_id)
    }

    /// False when the session carries no rank
    pub fn has_minimum_rank(&self, required_rank_id: &str) -> bool {
        self.rank_id
            .as_deref()
            .is_some_and(|rank_id| rank::has_minimum_rank(rank_id, required_rank_id))
    }

    pub fn rank(&self) -> Option<&'static Rank> {
        self.rank_id.as_deref().and_then(Rank::find)
    }

    pub fn rank_image(&self) -> &'static str {
        Rank::image_for(self.rank_id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(rank_id: Option<&str>) -> Session {
        Session {
            id: "1".to_string(),
            username: "operador".to_string(),
            roles: vec!["42".to_string()],
            avatar: None,
            rank_id: rank_id.map(str::to_string),
        }
    }

    #[test]
    fn test_has_role() {
        let s = session(None);
        assert!(s.has_role("42"));
        assert!(!s.has_role("43"));
    }

    #[test]
    fn test_minimum_rank_without_rank() {
        assert!(!session(None).has_minimum_rank("rank1"));
    }

    #[test]
    fn test_minimum_rank() {
        let s = session(Some("rank4"));
        assert!(s.has_minimum_rank("rank4"));
        assert!(s.has_minimum_rank("rank2"));
        assert!(!s.has_minimum_rank("rank5"));
        assert_eq!(s.rank().map(|r| r.name), Some("Experto"));
        assert_eq!(s.rank_image(), "/ranks/rank4.png");
    }

    #[test]
    fn test_reads_stored_shape() {
        let raw = r#"{"id":"1026983591978221588","username":"abc","roles":["99"],"avatar":"/placeholder-avatar.png","rankId":"rank2"}"#;
        let s: Session = serde_json::from_str(raw).unwrap();
        assert_eq!(s.rank_id.as_deref(), Some("rank2"));
        assert_eq!(s.avatar.as_deref(), Some(PLACEHOLDER_AVATAR));
    }

    #[test]
    fn test_reads_legacy_shape_without_rank() {
        let raw = r#"{"id":"1234567890","username":"abc","roles":["99"]}"#;
        let s: Session = serde_json::from_str(raw).unwrap();
        assert!(s.rank_id.is_none());
        assert_eq!(s.rank_image(), "/ranks/rank1.png");
    }
}
