//! Call surface for collaborators that hold a `&mut World` between ticks.
//!
//! Physical reports (impacts, weapon hits, ambient changes, respawns) are
//! queued as `SurvivalCommand` messages and take effect in the next tick's
//! Apply phase. Consumable use resolves immediately because the inventory
//! needs the answer to decide whether to shrink the stack.

use bevy_ecs::entity::Entity;
use bevy_ecs::message::Messages;
use bevy_ecs::world::World;
use glam::Vec3;
use serde::Serialize;

use crate::ecs::clock::SimClock;
use crate::ecs::commands::{ApplyCtx, SurvivalCommand, apply_use_consumable};
use crate::ecs::components::{Helmet, OxygenTank, Surroundings, Vitals};
use crate::ecs::resources::EcsItemCatalog;
use crate::model::{Ambient, ItemDef};

/// Read-only snapshot of one survivor, for overlays and HUDs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurvivalStatus {
    pub durability: u32,
    pub max_durability: u32,
    pub stage: u32,
    pub broken: bool,
    pub oxygen: f32,
    pub max_oxygen: f32,
    pub health: f32,
    pub max_health: f32,
    pub dead: bool,
    pub ambient: Ambient,
}

pub trait SurvivalWorldExt {
    fn report_impact(
        &mut self,
        target: Entity,
        velocity: Vec3,
        normal: Vec3,
        source: impl Into<String>,
    );
    fn report_weapon_hit(&mut self, target: Entity, damage: f32, direction: Vec3);
    fn set_ambient(&mut self, target: Entity, ambient: Ambient);
    fn respawn(&mut self, target: Entity);

    /// Returns whether the item should be removed from the stack.
    fn use_consumable(&mut self, target: Entity, item: &ItemDef) -> bool;
    /// Like `use_consumable`, looking the item up in `EcsItemCatalog`.
    /// Unknown ids are never consumed.
    fn use_catalog_item(&mut self, target: Entity, item_id: u32) -> bool;

    fn durability_stage(&self, target: Entity) -> Option<u32>;
    fn oxygen_fraction(&self, target: Entity) -> Option<f32>;
    /// `false` for entities that are not survivors.
    fn is_dead(&self, target: Entity) -> bool;
    fn survival_status(&self, target: Entity) -> Option<SurvivalStatus>;
}

fn queue(world: &mut World, command: SurvivalCommand) {
    if let Some(mut messages) = world.get_resource_mut::<Messages<SurvivalCommand>>() {
        messages.write(command);
    } else {
        tracing::warn!(
            "SurvivalCommand not registered; dropping command for {:?}",
            command.target
        );
    }
}

impl SurvivalWorldExt for World {
    fn report_impact(
        &mut self,
        target: Entity,
        velocity: Vec3,
        normal: Vec3,
        source: impl Into<String>,
    ) {
        queue(self, SurvivalCommand::impact(target, velocity, normal, source));
    }

    fn report_weapon_hit(&mut self, target: Entity, damage: f32, direction: Vec3) {
        queue(self, SurvivalCommand::weapon_hit(target, damage, direction));
    }

    fn set_ambient(&mut self, target: Entity, ambient: Ambient) {
        queue(self, SurvivalCommand::set_ambient(target, ambient));
    }

    fn respawn(&mut self, target: Entity) {
        queue(self, SurvivalCommand::respawn(target));
    }

    fn use_consumable(&mut self, target: Entity, item: &ItemDef) -> bool {
        let now = self
            .get_resource::<SimClock>()
            .map(|clock| clock.elapsed)
            .unwrap_or_default();
        let mut ctx = ApplyCtx::new(now);
        let consumed = apply_use_consumable(&mut ctx, self, target, item);
        ctx.flush(self);
        consumed
    }

    fn use_catalog_item(&mut self, target: Entity, item_id: u32) -> bool {
        let item = self
            .get_resource::<EcsItemCatalog>()
            .and_then(|catalog| catalog.0.get(item_id).cloned());
        match item {
            Some(item) => self.use_consumable(target, &item),
            None => {
                tracing::debug!("unknown item id {}", item_id);
                false
            }
        }
    }

    fn durability_stage(&self, target: Entity) -> Option<u32> {
        self.get::<Helmet>(target).map(|helmet| helmet.0.stage())
    }

    fn oxygen_fraction(&self, target: Entity) -> Option<f32> {
        self.get::<OxygenTank>(target).map(|tank| tank.0.fraction())
    }

    fn is_dead(&self, target: Entity) -> bool {
        self.get::<Vitals>(target)
            .is_some_and(|vitals| vitals.0.is_dead())
    }

    fn survival_status(&self, target: Entity) -> Option<SurvivalStatus> {
        let helmet = &self.get::<Helmet>(target)?.0;
        let tank = &self.get::<OxygenTank>(target)?.0;
        let vitals = &self.get::<Vitals>(target)?.0;
        let ambient = self
            .get::<Surroundings>(target)
            .map(|s| s.0)
            .unwrap_or_default();
        Some(SurvivalStatus {
            durability: helmet.current(),
            max_durability: helmet.max(),
            stage: helmet.stage(),
            broken: helmet.is_broken(),
            oxygen: tank.level(),
            max_oxygen: tank.max(),
            health: vitals.health(),
            max_health: vitals.max(),
            dead: vitals.is_dead(),
            ambient,
        })
    }
}
