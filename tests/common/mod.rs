#![allow(dead_code)]

use bevy_app::App;
use bevy_ecs::entity::Entity;
use glam::Vec3;
use suit_sim::config::SurvivalConfig;
use suit_sim::ecs::{SurvivalEvent, SurvivalLog, build_survival_app, spawn_survivor};

/// Full survival app with a one-second tick so rates read as per-tick values.
pub fn one_second_app() -> App {
    build_survival_app(SurvivalConfig {
        tick_seconds: 1.0,
        ..SurvivalConfig::default()
    })
}

pub fn app_with_survivor(config: SurvivalConfig) -> (App, Entity) {
    let mut app = build_survival_app(config);
    let survivor = spawn_survivor(app.world_mut(), "Player");
    (app, survivor)
}

/// Head-on wall contact at `speed` (positive means closing).
pub fn wall_hit(speed: f32) -> (Vec3, Vec3) {
    (Vec3::new(0.0, 0.0, -speed), Vec3::Z)
}

pub fn journal(app: &App, entity: Entity) -> Vec<SurvivalEvent> {
    app.world()
        .resource::<SurvivalLog>()
        .for_entity(entity)
        .map(|entry| entry.event.clone())
        .collect()
}

pub fn count_deaths(app: &App, entity: Entity) -> usize {
    journal(app, entity)
        .iter()
        .filter(|e| matches!(e, SurvivalEvent::Died { .. }))
        .count()
}
