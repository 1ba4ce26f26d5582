//! Engine-free survival trackers. Everything here is synchronous and total:
//! bad inputs are clamped or ignored, never surfaced as errors.

pub mod consumable;
pub mod durability;
pub mod impact;
pub mod oxygen;
pub mod vitality;

pub use consumable::{AppliedEffect, ItemCatalog, ItemDef, ItemEffect, resolve_effect};
pub use durability::{DamageOutcome, DrainTable, Durability, HelmetState};
pub use impact::{HitCounter, ImpactClassifier, ImpactSample, QualifiedImpact};
pub use oxygen::{Ambient, OxygenReserve, OxygenTick};
pub use vitality::{DeathCause, LifeState, Vitality};
