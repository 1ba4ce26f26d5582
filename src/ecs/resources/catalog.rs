use bevy_ecs::resource::Resource;

use crate::model::ItemCatalog;

/// Item definitions available to `use_catalog_item`.
#[derive(Resource, Debug, Clone, Default)]
pub struct EcsItemCatalog(pub ItemCatalog);
