use crate::core::error::ValidationError;
use crate::models::badge::BADGE_PLACEHOLDER_IMAGE;
use crate::stores::collection::Record;
use crate::validation::forms::{require, require_range, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub quantity: u32,
    pub image_url: String,
    /// Not exclusive: several items may be equipped at once
    pub is_equipped: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInventoryItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default = "default_image_url")]
    pub image_url: String,
}

fn default_quantity() -> i64 {
    1
}

fn default_image_url() -> String {
    BADGE_PLACEHOLDER_IMAGE.to_string()
}

impl Validate for NewInventoryItem {
    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require_range("quantity", self.quantity, 1, u32::MAX as i64)
    }
}

impl Record for InventoryItem {
    type Draft = NewInventoryItem;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: NewInventoryItem) -> Self {
        InventoryItem {
            id,
            name: draft.name,
            description: draft.description,
            // validated to fit
            quantity: draft.quantity.clamp(1, u32::MAX as i64) as u32,
            image_url: draft.image_url,
            is_equipped: false,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

pub fn sample_inventory() -> Vec<InventoryItem> {
    let item = |id: &str, name: &str, description: &str, quantity, is_equipped| InventoryItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        quantity,
        image_url: BADGE_PLACEHOLDER_IMAGE.to_string(),
        is_equipped,
    };

    vec![
        item("1", "Poción de XP", "Aumenta la experiencia ganada por 1 hora", 3, false),
        item("2", "Borde personalizado", "Un borde especial para tu perfil", 1, true),
        item("3", "Token de cambio de nombre", "Permite cambiar tu nombre de usuario", 2, false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::search::matches_any;

    #[test]
    fn test_new_item_is_never_equipped() {
        let draft: NewInventoryItem = serde_json::from_str(r#"{"name":"Gema","quantity":4}"#).unwrap();
        let item = InventoryItem::from_draft("10".to_string(), draft);
        assert!(!item.is_equipped);
        assert_eq!(item.quantity, 4);
    }

    #[test]
    fn test_quantity_defaults_to_one() {
        let draft: NewInventoryItem = serde_json::from_str(r#"{"name":"Gema"}"#).unwrap();
        assert_eq!(draft.quantity, 1);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_quantity_must_be_positive() {
        let draft: NewInventoryItem = serde_json::from_str(r#"{"name":"Gema","quantity":0}"#).unwrap();
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::OutOfRange { field: "quantity", .. })
        ));

        let draft: NewInventoryItem = serde_json::from_str(r#"{"name":"Gema","quantity":-3}"#).unwrap();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(&sample_inventory()[1]).unwrap();
        assert_eq!(json["isEquipped"], true);
        assert_eq!(json["imageUrl"], BADGE_PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_multiple_equipped_allowed() {
        let mut items = sample_inventory();
        items[0].is_equipped = true;
        assert_eq!(items.iter().filter(|i| i.is_equipped).count(), 2);
    }

    #[test]
    fn test_search_covers_name_and_description() {
        let hits = |term: &str| -> Vec<String> {
            sample_inventory()
                .into_iter()
                .filter(|i| matches_any(term, &i.search_fields()))
                .map(|i| i.id)
                .collect()
        };

        assert_eq!(hits("poción"), vec!["1"]);
        assert_eq!(hits("PERFIL"), vec!["2"]);
        assert_eq!(hits("nombre"), vec!["3"]);
        assert!(hits("equipped").is_empty());
    }
}
