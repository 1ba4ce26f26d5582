use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use glam::Vec3;

use crate::config::SurvivalConfig;
use crate::ecs::components::{Helmet, VisorHitCounter, Vitals};
use crate::ecs::events::SurvivalEvent;

use super::applicator::ApplyCtx;
use super::apply_impact::crack_helmet;

/// Projectile hit: health damage and knockback every time, plus one visor
/// crack each time the target's hit counter reaches its threshold.
pub(crate) fn apply_weapon_hit(
    ctx: &mut ApplyCtx,
    world: &mut World,
    config: &SurvivalConfig,
    target: Entity,
    damage: f32,
    direction: Vec3,
) {
    let mut query = world.query::<(&mut Vitals, &mut VisorHitCounter, &mut Helmet)>();
    let Ok((mut vitals, mut hits, mut helmet)) = query.get_mut(world, target) else {
        tracing::warn!("Weapon hit on {:?} which is not a survivor; dropped", target);
        return;
    };

    if let Some(cause) = vitals.0.take_damage(damage) {
        tracing::info!("{:?} died: {:?}", target, cause);
        ctx.emit(SurvivalEvent::Died {
            entity: target,
            cause,
        });
    }

    let impulse = direction.normalize_or_zero() * config.weapon.knockback_force;
    ctx.emit(SurvivalEvent::Knockback {
        entity: target,
        impulse,
    });

    if hits.0.register_hit() {
        tracing::debug!("Visor of {:?} cracked by sustained fire", target);
        crack_helmet(ctx, target, &mut helmet.0, 1);
    }
}
