//! Reaction systems (Reactions phase):
//! - `handle_deaths`: stop locomotion and switch to the spectator view
//! - `journal_events`: append every `SurvivalEvent` to `SurvivalLog`

use bevy_app::{App, Plugin};
use bevy_ecs::message::MessageReader;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Commands, Query, Res, ResMut};

use crate::ecs::clock::SimClock;
use crate::ecs::components::{Locomotion, Spectating, Vitals};
use crate::ecs::events::SurvivalEvent;
use crate::ecs::resources::{LogEntry, SurvivalLog};
use crate::ecs::schedule::{SimPhase, SurvivalTick};

pub struct ReactionsPlugin;

impl Plugin for ReactionsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            SurvivalTick,
            (handle_deaths, journal_events).in_set(SimPhase::Reactions),
        );
    }
}

fn handle_deaths(
    mut events: MessageReader<SurvivalEvent>,
    mut bodies: Query<(&Vitals, &mut Locomotion)>,
    mut commands: Commands,
) {
    for event in events.read() {
        let SurvivalEvent::Died { entity, .. } = event else {
            continue;
        };
        let Ok((vitals, mut locomotion)) = bodies.get_mut(*entity) else {
            continue;
        };
        // Respawned later in the same tick.
        if !vitals.0.is_dead() {
            continue;
        }
        locomotion.enabled = false;
        commands.entity(*entity).insert(Spectating);
    }
}

fn journal_events(
    mut events: MessageReader<SurvivalEvent>,
    clock: Res<SimClock>,
    mut log: ResMut<SurvivalLog>,
) {
    for event in events.read() {
        log.entries.push(LogEntry {
            tick: clock.tick_count,
            elapsed: clock.elapsed,
            event: event.clone(),
        });
    }
}
