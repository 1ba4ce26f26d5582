use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::config::SurvivalConfig;
use crate::ecs::components::*;
use crate::model::Ambient;

/// Spawn a survivor using the world's `SurvivalConfig`, or the defaults when
/// none is installed.
pub fn spawn_survivor(world: &mut World, name: impl Into<String>) -> Entity {
    let config = world
        .get_resource::<SurvivalConfig>()
        .cloned()
        .unwrap_or_default();
    spawn_survivor_with(world, name, &config)
}

/// Spawn a survivor with every tracker at its starting value, standing in
/// hostile air.
pub fn spawn_survivor_with(
    world: &mut World,
    name: impl Into<String>,
    config: &SurvivalConfig,
) -> Entity {
    world
        .spawn((
            Survivor { name: name.into() },
            Helmet(config.new_durability()),
            ImpactSensor(config.new_impact_classifier()),
            VisorHitCounter(config.new_hit_counter()),
            OxygenTank(config.new_oxygen()),
            Vitals(config.new_vitality()),
            Surroundings(Ambient::Hostile),
            Locomotion::default(),
        ))
        .id()
}
