use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

use super::durability::Durability;
use super::oxygen::OxygenReserve;

/// Effect payload carried by item data. Zero fields mean "no such effect".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemEffect {
    pub oxygen_restore: f32,
    pub repair: u32,
}

/// Static description of an item the inventory can hand us.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub consumable: bool,
    #[serde(default)]
    pub effect: ItemEffect,
}

impl ItemDef {
    pub fn consumable(id: u32, name: impl Into<String>, effect: ItemEffect) -> Self {
        Self {
            id,
            name: name.into(),
            consumable: true,
            effect,
        }
    }
}

/// One effect that actually changed survivor state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AppliedEffect {
    /// Amount requested by the item; the reserve clamps at max.
    OxygenRestored(f32),
    HelmetRepaired(u32),
}

/// Apply an item's effects to one survivor's trackers.
///
/// Oxygen refills always land (clamped). Repairs are refused on a broken
/// helmet and then do not count. An empty result means "no effect"; whether
/// the item is still consumed is the caller's decision.
pub fn resolve_effect(
    effect: &ItemEffect,
    oxygen: &mut OxygenReserve,
    durability: &mut Durability,
) -> Vec<AppliedEffect> {
    let mut applied = Vec::new();
    if effect.oxygen_restore.is_finite() && effect.oxygen_restore > 0.0 {
        oxygen.refill(effect.oxygen_restore);
        applied.push(AppliedEffect::OxygenRestored(effect.oxygen_restore));
    }
    if effect.repair > 0 && durability.repair(effect.repair) {
        applied.push(AppliedEffect::HelmetRepaired(effect.repair));
    }
    applied
}

/// Item definitions keyed by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCatalog {
    items: BTreeMap<u32, ItemDef>,
}

impl ItemCatalog {
    pub fn new(items: impl IntoIterator<Item = ItemDef>) -> Self {
        Self {
            items: items.into_iter().map(|item| (item.id, item)).collect(),
        }
    }

    pub fn get(&self, id: u32) -> Option<&ItemDef> {
        self.items.get(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDef> {
        self.items.values()
    }

    /// Parse a JSON array of item definitions. Duplicate ids are rejected.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let defs: Vec<ItemDef> = serde_json::from_str(json)?;
        let mut items = BTreeMap::new();
        for def in defs {
            if !def.effect.oxygen_restore.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "item {} has non-finite oxygen_restore",
                    def.id
                )));
            }
            let id = def.id;
            if items.insert(id, def).is_some() {
                return Err(ConfigError::Invalid(format!("duplicate item id {id}")));
            }
        }
        Ok(Self { items })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

impl Default for ItemCatalog {
    /// The canisters and patch kit the station ships with.
    fn default() -> Self {
        Self::new([
            ItemDef::consumable(
                1,
                "Small Oxygen Canister",
                ItemEffect {
                    oxygen_restore: 25.0,
                    repair: 0,
                },
            ),
            ItemDef::consumable(
                2,
                "Oxygen Canister",
                ItemEffect {
                    oxygen_restore: 50.0,
                    repair: 0,
                },
            ),
            ItemDef::consumable(
                3,
                "Large Oxygen Canister",
                ItemEffect {
                    oxygen_restore: 100.0,
                    repair: 0,
                },
            ),
            ItemDef::consumable(
                4,
                "Helmet Patch Kit",
                ItemEffect {
                    oxygen_restore: 0.0,
                    repair: 1,
                },
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::oxygen::Ambient;

    fn canister(amount: f32) -> ItemEffect {
        ItemEffect {
            oxygen_restore: amount,
            repair: 0,
        }
    }

    #[test]
    fn refill_clamps_at_max() {
        let mut oxygen = OxygenReserve::default();
        oxygen.tick(1.0, 10.0, Ambient::Hostile);
        let mut helmet = Durability::default();
        let applied = resolve_effect(&canister(25.0), &mut oxygen, &mut helmet);
        assert_eq!(applied, vec![AppliedEffect::OxygenRestored(25.0)]);
        assert_eq!(oxygen.level(), 100.0);
    }

    #[test]
    fn patch_kit_repairs() {
        let mut oxygen = OxygenReserve::default();
        let mut helmet = Durability::default();
        helmet.damage(1);
        let kit = ItemEffect {
            oxygen_restore: 0.0,
            repair: 1,
        };
        let applied = resolve_effect(&kit, &mut oxygen, &mut helmet);
        assert_eq!(applied, vec![AppliedEffect::HelmetRepaired(1)]);
        assert_eq!(helmet.current(), 3);
    }

    #[test]
    fn patch_kit_refused_on_broken_helmet() {
        let mut oxygen = OxygenReserve::default();
        let mut helmet = Durability::default();
        helmet.damage(3);
        let kit = ItemEffect {
            oxygen_restore: 10.0,
            repair: 1,
        };
        let applied = resolve_effect(&kit, &mut oxygen, &mut helmet);
        assert_eq!(applied, vec![AppliedEffect::OxygenRestored(10.0)]);
        assert!(helmet.is_broken());
    }

    #[test]
    fn empty_effect_reports_nothing() {
        let mut oxygen = OxygenReserve::default();
        let mut helmet = Durability::default();
        assert!(resolve_effect(&ItemEffect::default(), &mut oxygen, &mut helmet).is_empty());
    }

    #[test]
    fn default_catalog_has_canisters() {
        let catalog = ItemCatalog::default();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get(2).unwrap().effect.oxygen_restore, 50.0);
        assert_eq!(catalog.get(4).unwrap().effect.repair, 1);
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn catalog_parses_json() {
        let json = r#"[
            {"id": 10, "name": "Flask", "consumable": true, "effect": {"oxygen_restore": 12.5}},
            {"id": 11, "name": "Wrench"}
        ]"#;
        let catalog = ItemCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.get(10).unwrap().effect.oxygen_restore, 12.5);
        let wrench = catalog.get(11).unwrap();
        assert!(!wrench.consumable);
        assert_eq!(wrench.effect, ItemEffect::default());
    }

    #[test]
    fn catalog_rejects_duplicate_ids() {
        let json = r#"[{"id": 1, "name": "A"}, {"id": 1, "name": "B"}]"#;
        assert!(matches!(
            ItemCatalog::from_json_str(json),
            Err(ConfigError::Invalid(_))
        ));
    }
}
