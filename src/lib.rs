pub mod config;
pub mod ecs;
pub mod model;

pub use config::{ConfigError, SurvivalConfig};
pub use model::{
    Ambient, AppliedEffect, DamageOutcome, DeathCause, DrainTable, Durability, HelmetState,
    HitCounter, ImpactClassifier, ImpactSample, ItemCatalog, ItemDef, ItemEffect, LifeState,
    OxygenReserve, Vitality,
};
