use crate::core::error::ValidationError;
use crate::stores::collection::Record;
use crate::validation::forms::{require, Validate};
use serde::{Deserialize, Serialize};

pub const BADGE_PLACEHOLDER_IMAGE: &str = "/src/assets/badge-placeholder.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Epic,
    Legendary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub rarity: Rarity,
    pub image_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBadge {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default = "default_image_url")]
    pub image_url: String,
}

fn default_image_url() -> String {
    BADGE_PLACEHOLDER_IMAGE.to_string()
}

impl Validate for NewBadge {
    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)
    }
}

impl Record for Badge {
    type Draft = NewBadge;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: NewBadge) -> Self {
        Badge {
            id,
            name: draft.name,
            description: draft.description,
            rarity: draft.rarity,
            image_url: draft.image_url,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

pub fn sample_badges() -> Vec<Badge> {
    let badge = |id: &str, name: &str, description: &str, rarity| Badge {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        rarity,
        image_url: BADGE_PLACEHOLDER_IMAGE.to_string(),
    };

    vec![
        badge("1", "Veterano", "Miembro del servidor por más de un año", Rarity::Rare),
        badge("2", "Colaborador", "Ha contribuido significativamente al servidor", Rarity::Epic),
        badge("3", "Leyenda", "Reconocido por su excepcional contribución", Rarity::Legendary),
        badge("4", "Recién llegado", "Nuevo miembro del servidor", Rarity::Common),
    ]
}
