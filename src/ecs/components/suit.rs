//! Per-survivor tracker components. Each wraps a `model` tracker so the
//! trackers stay engine-free; systems reach the tracker through `.0`.

use bevy_ecs::component::Component;

use crate::model::{Ambient, Durability, HitCounter, ImpactClassifier, OxygenReserve, Vitality};

#[derive(Component, Debug, Clone, Default)]
pub struct Helmet(pub Durability);

/// Collision debounce paired with this survivor's helmet.
#[derive(Component, Debug, Clone, Default)]
pub struct ImpactSensor(pub ImpactClassifier);

/// Weapon hits taken since the visor last cracked. Owned by the target, so
/// hits on one survivor never count toward another's visor.
#[derive(Component, Debug, Clone, Default)]
pub struct VisorHitCounter(pub HitCounter);

#[derive(Component, Debug, Clone, Default)]
pub struct OxygenTank(pub OxygenReserve);

#[derive(Component, Debug, Clone, Default)]
pub struct Vitals(pub Vitality);

/// Ambient air around the survivor, written by the environment collaborator.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Surroundings(pub Ambient);
