use bevy_ecs::entity::Entity;
use bevy_ecs::message::Message;
use glam::Vec3;

use crate::model::{AppliedEffect, DeathCause};

/// Reactive events emitted by the applicator and the per-tick systems.
///
/// Presentation and locomotion collaborators read these; `SurvivalLog`
/// journals them. `HelmetShattered` and `Died` fire at most once per
/// survivor lifetime. `OxygenDepleted` fires once per depletion.
#[derive(Message, Clone, Debug, PartialEq)]
pub enum SurvivalEvent {
    // -- Helmet --
    HelmetDamaged {
        entity: Entity,
        durability: u32,
        stage: u32,
    },
    HelmetShattered {
        entity: Entity,
        stage: u32,
    },
    HelmetRepaired {
        entity: Entity,
        durability: u32,
        stage: u32,
    },

    // -- Oxygen --
    OxygenRefilled {
        entity: Entity,
        amount: f32,
        level: f32,
    },
    OxygenDepleted {
        entity: Entity,
    },

    // -- Vitals --
    Died {
        entity: Entity,
        cause: DeathCause,
    },
    Respawned {
        entity: Entity,
    },

    // -- Requests to collaborators --
    Knockback {
        entity: Entity,
        impulse: Vec3,
    },
    ConsumableUsed {
        entity: Entity,
        item_id: u32,
        effects: Vec<AppliedEffect>,
    },
}

impl SurvivalEvent {
    pub fn entity(&self) -> Entity {
        match self {
            SurvivalEvent::HelmetDamaged { entity, .. }
            | SurvivalEvent::HelmetShattered { entity, .. }
            | SurvivalEvent::HelmetRepaired { entity, .. }
            | SurvivalEvent::OxygenRefilled { entity, .. }
            | SurvivalEvent::OxygenDepleted { entity }
            | SurvivalEvent::Died { entity, .. }
            | SurvivalEvent::Respawned { entity }
            | SurvivalEvent::Knockback { entity, .. }
            | SurvivalEvent::ConsumableUsed { entity, .. } => *entity,
        }
    }
}
