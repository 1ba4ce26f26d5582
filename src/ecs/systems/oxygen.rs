//! Oxygen system.
//!
//! One system per tick (Update phase, `SurvivalSet::Oxygen`):
//! - `drain_oxygen`: drain at the helmet's tier in vacuum, regenerate in a
//!   safe room. Runs after the applicator so this tick's impacts already set
//!   the tier.

use bevy_app::{App, Plugin};
use bevy_ecs::entity::Entity;
use bevy_ecs::message::MessageWriter;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res};

use crate::config::SurvivalConfig;
use crate::ecs::clock::SimClock;
use crate::ecs::components::{Helmet, OxygenTank, Surroundings, Vitals};
use crate::ecs::events::SurvivalEvent;
use crate::ecs::schedule::{SurvivalSet, SurvivalTick};

pub struct OxygenPlugin;

impl Plugin for OxygenPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(SurvivalTick, drain_oxygen.in_set(SurvivalSet::Oxygen));
    }
}

pub(crate) fn drain_oxygen(
    clock: Res<SimClock>,
    config: Res<SurvivalConfig>,
    mut survivors: Query<(Entity, &Helmet, &mut OxygenTank, &Surroundings, &Vitals)>,
    mut events: MessageWriter<SurvivalEvent>,
) {
    let dt = clock.dt();
    for (entity, helmet, mut tank, surroundings, vitals) in &mut survivors {
        // Corpses keep whatever air they died with.
        if vitals.0.is_dead() {
            continue;
        }
        let rate = helmet.0.drain_rate(&config.helmet.drain_rates);
        let tick = tank.0.tick(dt, rate, surroundings.0);
        if tick.depleted {
            tracing::info!("{:?} has run out of oxygen", entity);
            events.write(SurvivalEvent::OxygenDepleted { entity });
        }
    }
}
