use bevy_ecs::message::Messages;
use bevy_ecs::world::World;

use crate::config::SurvivalConfig;
use crate::ecs::clock::SimClock;
use crate::ecs::events::SurvivalEvent;
use crate::model::ImpactSample;

use super::{SurvivalCommand, SurvivalCommandKind};
use super::apply_consumable;
use super::apply_impact;
use super::apply_lifecycle;
use super::apply_weapon;

/// Context passed to all `apply_*` sub-functions: the tick's timestamp and
/// the reactive events produced so far.
pub(crate) struct ApplyCtx {
    pub now: f64,
    pub events: Vec<SurvivalEvent>,
}

impl ApplyCtx {
    pub(crate) fn new(now: f64) -> Self {
        Self {
            now,
            events: Vec::new(),
        }
    }

    /// Queue a reactive event for emission after all commands are processed.
    pub(crate) fn emit(&mut self, event: SurvivalEvent) {
        self.events.push(event);
    }

    /// Write queued events into the world's message buffer.
    pub(crate) fn flush(self, world: &mut World) {
        if self.events.is_empty() {
            return;
        }
        if let Some(mut messages) = world.get_resource_mut::<Messages<SurvivalEvent>>() {
            messages.write_batch(self.events);
        } else {
            tracing::warn!(
                "SurvivalEvent not registered; dropping {} events",
                self.events.len()
            );
        }
    }
}

/// Exclusive system that drains all pending `SurvivalCommand` messages,
/// applies them to survivor trackers, and emits `SurvivalEvent` messages.
///
/// Runs in `SimPhase::Apply`, before the oxygen tick.
pub fn apply_survival_commands(world: &mut World) {
    let commands: Vec<SurvivalCommand> = {
        let Some(mut messages) = world.get_resource_mut::<Messages<SurvivalCommand>>() else {
            return;
        };
        messages.drain().collect()
    };

    if commands.is_empty() {
        return;
    }

    let Some(config) = world.remove_resource::<SurvivalConfig>() else {
        tracing::warn!(
            "SurvivalConfig missing; dropping {} commands",
            commands.len()
        );
        return;
    };
    let now = world
        .get_resource::<SimClock>()
        .map(|clock| clock.elapsed)
        .unwrap_or_default();
    let mut ctx = ApplyCtx::new(now);

    for cmd in commands {
        let target = cmd.target;
        match cmd.kind {
            SurvivalCommandKind::Impact {
                velocity,
                normal,
                source,
            } => {
                let sample = ImpactSample {
                    velocity,
                    normal,
                    source,
                };
                apply_impact::apply_impact(&mut ctx, world, target, &sample);
            }
            SurvivalCommandKind::WeaponHit { damage, direction } => {
                apply_weapon::apply_weapon_hit(&mut ctx, world, &config, target, damage, direction);
            }
            SurvivalCommandKind::UseConsumable { item } => {
                apply_consumable::apply_use_consumable(&mut ctx, world, target, &item);
            }
            SurvivalCommandKind::SetAmbient { ambient } => {
                apply_lifecycle::apply_set_ambient(world, target, ambient);
            }
            SurvivalCommandKind::Respawn => {
                apply_lifecycle::apply_respawn(&mut ctx, world, target);
            }
        }
    }

    world.insert_resource(config);
    ctx.flush(world);
}
