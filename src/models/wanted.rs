use crate::core::error::ValidationError;
use crate::stores::collection::Record;
use crate::validation::forms::{require, require_range, Validate};
use serde::{Deserialize, Serialize};

pub const MIN_STARS: u8 = 1;
pub const MAX_STARS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    Baja,
    Media,
    Alta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WantedPerson {
    pub id: String,
    pub name: String,
    pub last_name: String,
    pub crime: String,
    pub stars: u8,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl WantedPerson {
    /// Two-letter fallback shown when there is no picture
    pub fn initials(&self) -> String {
        self.name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWantedPerson {
    pub name: String,
    pub last_name: String,
    pub crime: String,
    #[serde(default = "default_stars")]
    pub stars: i64,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub image_url: Option<String>,
}

fn default_stars() -> i64 {
    MIN_STARS as i64
}

impl Validate for NewWantedPerson {
    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("lastName", &self.last_name)?;
        require("crime", &self.crime)?;
        require_range("stars", self.stars, MIN_STARS as i64, MAX_STARS as i64)
    }
}

impl Record for WantedPerson {
    type Draft = NewWantedPerson;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: NewWantedPerson) -> Self {
        WantedPerson {
            id,
            name: draft.name,
            last_name: draft.last_name,
            crime: draft.crime,
            stars: draft.stars.clamp(MIN_STARS as i64, MAX_STARS as i64) as u8,
            priority: draft.priority,
            image_url: draft.image_url.filter(|url| !url.trim().is_empty()),
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.last_name.as_str(), self.crime.as_str()]
    }
}

pub fn sample_wanted() -> Vec<WantedPerson> {
    vec![
        WantedPerson {
            id: "1".to_string(),
            name: "John".to_string(),
            last_name: "Doe".to_string(),
            crime: "Robo a mano armada".to_string(),
            stars: 3,
            priority: Priority::Media,
            image_url: Some("/placeholder-avatar.png".to_string()),
        },
        WantedPerson {
            id: "2".to_string(),
            name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            crime: "Homicidio".to_string(),
            stars: 5,
            priority: Priority::Alta,
            image_url: Some("/placeholder-avatar.png".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(json: &str) -> NewWantedPerson {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_defaults() {
        let d = draft(r#"{"name":"Ana","lastName":"Ruiz","crime":"Fraude"}"#);
        assert_eq!(d.stars, 1);
        assert_eq!(d.priority, Priority::Baja);
        assert!(d.image_url.is_none());
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_required_fields() {
        let d = draft(r#"{"name":"Ana","lastName":"","crime":"Fraude"}"#);
        assert_eq!(d.validate(), Err(ValidationError::MissingField("lastName")));

        let d = draft(r#"{"name":"Ana","lastName":"Ruiz","crime":" "}"#);
        assert_eq!(d.validate(), Err(ValidationError::MissingField("crime")));
    }

    #[test]
    fn test_stars_range() {
        let d = draft(r#"{"name":"A","lastName":"B","crime":"C","stars":6}"#);
        assert!(d.validate().is_err());

        let d = draft(r#"{"name":"A","lastName":"B","crime":"C","stars":0}"#);
        assert!(d.validate().is_err());

        let d = draft(r#"{"name":"A","lastName":"B","crime":"C","stars":5,"priority":"Alta"}"#);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_priority_wire_names() {
        let json = serde_json::to_value(&sample_wanted()[1]).unwrap();
        assert_eq!(json["priority"], "Alta");
        assert_eq!(json["lastName"], "Smith");
    }

    #[test]
    fn test_blank_image_dropped() {
        let d = draft(r#"{"name":"A","lastName":"B","crime":"C","imageUrl":""}"#);
        let person = WantedPerson::from_draft("9".to_string(), d);
        assert!(person.image_url.is_none());
        assert_eq!(person.initials(), "AB");
    }
}
