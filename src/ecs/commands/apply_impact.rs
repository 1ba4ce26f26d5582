use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::components::{Helmet, ImpactSensor};
use crate::ecs::events::SurvivalEvent;
use crate::model::{DamageOutcome, Durability, ImpactSample};

use super::applicator::ApplyCtx;

/// Classify a contact and, if it qualifies, crack the helmet by one.
pub(crate) fn apply_impact(
    ctx: &mut ApplyCtx,
    world: &mut World,
    target: Entity,
    sample: &ImpactSample,
) {
    let mut query = world.query::<(&mut ImpactSensor, &mut Helmet)>();
    let Ok((mut sensor, mut helmet)) = query.get_mut(world, target) else {
        tracing::warn!("Impact on {:?} which has no helmet; dropped", target);
        return;
    };

    let Some(hit) = sensor.0.classify(sample, ctx.now) else {
        return;
    };
    tracing::debug!(
        "Helmet impact on {:?}: speed {:.2} against {}",
        target,
        hit.speed,
        sample.source
    );
    crack_helmet(ctx, target, &mut helmet.0, 1);
}

/// Damage a helmet and emit the matching event. Shared by collisions and
/// the weapon hit counter.
pub(crate) fn crack_helmet(
    ctx: &mut ApplyCtx,
    entity: Entity,
    helmet: &mut Durability,
    amount: u32,
) {
    match helmet.damage(amount) {
        DamageOutcome::Ignored => {}
        DamageOutcome::Damaged { durability, stage } => {
            ctx.emit(SurvivalEvent::HelmetDamaged {
                entity,
                durability,
                stage,
            });
        }
        DamageOutcome::Shattered { stage } => {
            tracing::info!("Helmet of {:?} shattered; oxygen leak begins", entity);
            ctx.emit(SurvivalEvent::HelmetDamaged {
                entity,
                durability: 0,
                stage,
            });
            ctx.emit(SurvivalEvent::HelmetShattered { entity, stage });
        }
    }
}
