use bevy_app::App;
use bevy_ecs::message::MessageRegistry;
use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs};

use super::clock::SimClock;
use super::commands::{SurvivalCommand, apply_survival_commands};
use super::events::SurvivalEvent;
use super::plugin::SurvivalPlugin;
use super::resources::{EcsItemCatalog, SurvivalLog};
use super::schedule::{SimPhase, configure_survival_schedule};
use crate::config::SurvivalConfig;

/// Build a headless app with the full survival simulation installed.
///
/// Manual tick control:
/// ```no_run
/// # use suit_sim::config::SurvivalConfig;
/// # use suit_sim::ecs::{build_survival_app, spawn_survivor, SurvivalTick};
/// let mut app = build_survival_app(SurvivalConfig::default());
/// let _player = spawn_survivor(app.world_mut(), "Player");
/// for _ in 0..50 {  // one second at the default 50 Hz step
///     app.world_mut().run_schedule(SurvivalTick);
/// }
/// ```
pub fn build_survival_app(config: SurvivalConfig) -> App {
    build_survival_app_with_executor(config, ExecutorKind::SingleThreaded)
}

/// Build the full survival app with a specific executor kind.
pub fn build_survival_app_with_executor(config: SurvivalConfig, executor: ExecutorKind) -> App {
    let mut app = build_base_app_with_executor(config, executor);
    app.add_plugins(SurvivalPlugin);
    app
}

/// Clock, resources, message types and the command applicator, without the
/// per-tick tracker systems. Tests add individual plugins on top.
pub fn build_base_app(config: SurvivalConfig) -> App {
    build_base_app_with_executor(config, ExecutorKind::SingleThreaded)
}

pub fn build_base_app_with_executor(config: SurvivalConfig, executor: ExecutorKind) -> App {
    let mut app = App::empty();

    // Core resources
    app.insert_resource(SimClock::new(config.tick_seconds));
    app.insert_resource(SurvivalLog::new());
    app.insert_resource(EcsItemCatalog::default());
    app.insert_resource(config);

    // Register message types
    MessageRegistry::register_message::<SurvivalCommand>(app.world_mut());
    MessageRegistry::register_message::<SurvivalEvent>(app.world_mut());

    // Build schedule with message rotation + applicator
    let mut schedule = configure_survival_schedule(executor);
    schedule.add_systems(bevy_ecs::message::message_update_system.in_set(SimPhase::PreUpdate));
    schedule.add_systems(apply_survival_commands.in_set(SimPhase::Apply));
    app.add_schedule(schedule);
    app
}
