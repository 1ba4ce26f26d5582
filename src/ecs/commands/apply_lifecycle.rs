use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::components::{
    Helmet, ImpactSensor, Locomotion, OxygenTank, Spectating, Surroundings, VisorHitCounter,
    Vitals,
};
use crate::ecs::events::SurvivalEvent;
use crate::model::Ambient;

use super::applicator::ApplyCtx;

/// Record which air the survivor is breathing from now on.
pub(crate) fn apply_set_ambient(world: &mut World, target: Entity, ambient: Ambient) {
    let Some(mut surroundings) = world.get_mut::<Surroundings>(target) else {
        tracing::warn!("SetAmbient for {:?} which is not a survivor; dropped", target);
        return;
    };
    surroundings.0 = ambient;
}

/// Re-initialize a survivor: every tracker back to its starting value and
/// both terminal latches cleared.
pub(crate) fn apply_respawn(ctx: &mut ApplyCtx, world: &mut World, target: Entity) {
    let mut query = world.query::<(
        &mut Helmet,
        &mut ImpactSensor,
        &mut VisorHitCounter,
        &mut OxygenTank,
        &mut Vitals,
        &mut Locomotion,
    )>();
    let Ok((mut helmet, mut sensor, mut hits, mut tank, mut vitals, mut locomotion)) =
        query.get_mut(world, target)
    else {
        tracing::warn!("Respawn for {:?} which is not a survivor; dropped", target);
        return;
    };

    helmet.0.reset();
    sensor.0.reset();
    hits.0.reset();
    tank.0.reset();
    vitals.0.reset();
    locomotion.enabled = true;

    world.entity_mut(target).remove::<Spectating>();
    tracing::info!("{:?} respawned", target);
    ctx.emit(SurvivalEvent::Respawned { entity: target });
}
