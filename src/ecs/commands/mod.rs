pub mod applicator;
mod apply_consumable;
mod apply_impact;
mod apply_lifecycle;
mod apply_weapon;

use bevy_ecs::entity::Entity;
use bevy_ecs::message::Message;
use glam::Vec3;

use crate::model::{Ambient, ItemDef};

pub use applicator::apply_survival_commands;
pub(crate) use applicator::ApplyCtx;
pub(crate) use apply_consumable::apply_use_consumable;

/// An inbound request from a collaborator, addressed to one survivor.
///
/// Collaborators write these via `MessageWriter<SurvivalCommand>` (or the
/// `SurvivalWorldExt` helpers). The applicator in `SimPhase::Apply` drains
/// them before the oxygen tick reads the drain tier.
#[derive(Message, Clone, Debug)]
pub struct SurvivalCommand {
    pub target: Entity,
    pub kind: SurvivalCommandKind,
}

impl SurvivalCommand {
    pub fn new(target: Entity, kind: SurvivalCommandKind) -> Self {
        Self { target, kind }
    }

    /// Physical contact from the movement collaborator.
    pub fn impact(target: Entity, velocity: Vec3, normal: Vec3, source: impl Into<String>) -> Self {
        Self::new(
            target,
            SurvivalCommandKind::Impact {
                velocity,
                normal,
                source: source.into(),
            },
        )
    }

    /// Projectile hit. `direction` points from the shooter toward the target.
    pub fn weapon_hit(target: Entity, damage: f32, direction: Vec3) -> Self {
        Self::new(target, SurvivalCommandKind::WeaponHit { damage, direction })
    }

    pub fn use_consumable(target: Entity, item: ItemDef) -> Self {
        Self::new(target, SurvivalCommandKind::UseConsumable { item })
    }

    pub fn set_ambient(target: Entity, ambient: Ambient) -> Self {
        Self::new(target, SurvivalCommandKind::SetAmbient { ambient })
    }

    pub fn respawn(target: Entity) -> Self {
        Self::new(target, SurvivalCommandKind::Respawn)
    }
}

#[derive(Clone, Debug)]
pub enum SurvivalCommandKind {
    // -- Physics --
    Impact {
        velocity: Vec3,
        normal: Vec3,
        source: String,
    },

    // -- Weapons --
    WeaponHit {
        damage: f32,
        direction: Vec3,
    },

    // -- Inventory --
    UseConsumable {
        item: ItemDef,
    },

    // -- Environment --
    SetAmbient {
        ambient: Ambient,
    },

    // -- Lifecycle --
    Respawn,
}
