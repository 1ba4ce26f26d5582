//! Vitals system.
//!
//! One system per tick (Update phase, `SurvivalSet::Vitals`):
//! - `check_starvation`: an empty tank kills instantly. Ordered after the
//!   oxygen tick so depletion and death land in the same tick.

use bevy_app::{App, Plugin};
use bevy_ecs::entity::Entity;
use bevy_ecs::message::MessageWriter;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::Query;

use crate::ecs::components::{OxygenTank, Vitals};
use crate::ecs::events::SurvivalEvent;
use crate::ecs::schedule::{SurvivalSet, SurvivalTick};

pub struct VitalsPlugin;

impl Plugin for VitalsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(SurvivalTick, check_starvation.in_set(SurvivalSet::Vitals));
    }
}

pub(crate) fn check_starvation(
    mut survivors: Query<(Entity, &OxygenTank, &mut Vitals)>,
    mut events: MessageWriter<SurvivalEvent>,
) {
    for (entity, tank, mut vitals) in &mut survivors {
        if vitals.0.is_dead() {
            continue;
        }
        if let Some(cause) = vitals.0.check_starvation(tank.0.level()) {
            tracing::info!("{:?} died: {:?}", entity, cause);
            events.write(SurvivalEvent::Died { entity, cause });
        }
    }
}
