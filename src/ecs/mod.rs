pub mod api;
pub mod app;
pub mod clock;
pub mod commands;
pub mod components;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod schedule;
pub mod spawn;
pub mod systems;
pub mod test_helpers;

pub use api::{SurvivalStatus, SurvivalWorldExt};
pub use app::{
    build_base_app, build_base_app_with_executor, build_survival_app,
    build_survival_app_with_executor,
};
pub use clock::SimClock;
pub use commands::{SurvivalCommand, SurvivalCommandKind, apply_survival_commands};
pub use components::{
    Helmet, ImpactSensor, Locomotion, OxygenTank, Spectating, Surroundings, Survivor,
    VisorHitCounter, Vitals,
};
pub use events::SurvivalEvent;
pub use plugin::SurvivalPlugin;
pub use resources::{EcsItemCatalog, LogEntry, SurvivalLog};
pub use schedule::{SimPhase, SurvivalSet, SurvivalTick, configure_survival_schedule};
pub use spawn::{spawn_survivor, spawn_survivor_with};
