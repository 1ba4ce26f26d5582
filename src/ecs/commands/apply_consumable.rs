use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::components::{Helmet, OxygenTank, Vitals};
use crate::ecs::events::SurvivalEvent;
use crate::model::{AppliedEffect, ItemDef, resolve_effect};

use super::applicator::ApplyCtx;

/// Use an item on a survivor. Returns whether the item should be consumed.
///
/// Only consumable-flagged items are accepted, and dead survivors use
/// nothing. A consumable with no applicable effect still reports `true`:
/// the inventory removes it from the stack either way.
pub(crate) fn apply_use_consumable(
    ctx: &mut ApplyCtx,
    world: &mut World,
    target: Entity,
    item: &ItemDef,
) -> bool {
    if !item.consumable {
        tracing::debug!("{} is not consumable", item.name);
        return false;
    }

    let mut query = world.query::<(&Vitals, &mut OxygenTank, &mut Helmet)>();
    let Ok((vitals, mut tank, mut helmet)) = query.get_mut(world, target) else {
        tracing::warn!("{:?} cannot use {}: not a survivor", target, item.name);
        return false;
    };
    if vitals.0.is_dead() {
        return false;
    }

    let effects = resolve_effect(&item.effect, &mut tank.0, &mut helmet.0);
    if effects.is_empty() {
        tracing::debug!("{} had no effect on {:?}", item.name, target);
    }

    for effect in &effects {
        match *effect {
            AppliedEffect::OxygenRestored(amount) => {
                tracing::debug!("{:?} restored {} oxygen from {}", target, amount, item.name);
                ctx.emit(SurvivalEvent::OxygenRefilled {
                    entity: target,
                    amount,
                    level: tank.0.level(),
                });
            }
            AppliedEffect::HelmetRepaired(_) => {
                tracing::debug!("{:?} patched helmet with {}", target, item.name);
                ctx.emit(SurvivalEvent::HelmetRepaired {
                    entity: target,
                    durability: helmet.0.current(),
                    stage: helmet.0.stage(),
                });
            }
        }
    }

    ctx.emit(SurvivalEvent::ConsumableUsed {
        entity: target,
        item_id: item.id,
        effects,
    });
    true
}
