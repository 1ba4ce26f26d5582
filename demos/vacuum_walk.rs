//! Walk one survivor through a short EVA: bump into a few bulkheads, take
//! turret fire, drink a canister, duck into a safe room.
//!
//! Run with `RUST_LOG=debug cargo run --example vacuum_walk`.

use glam::Vec3;
use suit_sim::config::SurvivalConfig;
use suit_sim::ecs::test_helpers::tick_n;
use suit_sim::ecs::{
    SurvivalEvent, SurvivalLog, SurvivalWorldExt, build_survival_app,
    spawn_survivor,
};
use suit_sim::model::Ambient;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut app = build_survival_app(SurvivalConfig::default());
    let player = spawn_survivor(app.world_mut(), "Player");

    // Clumsy spacewalk: a bulkhead every second.
    for _ in 0..2 {
        app.world_mut().report_impact(
            player,
            Vec3::new(0.0, 0.0, -7.5),
            Vec3::Z,
            "bulkhead",
        );
        tick_n(&mut app, 50);
    }

    // Turret burst.
    for _ in 0..3 {
        app.world_mut()
            .report_weapon_hit(player, 12.0, Vec3::new(1.0, 0.0, 0.5));
        tick_n(&mut app, 5);
    }

    tick_n(&mut app, 200);
    let used = app.world_mut().use_catalog_item(player, 1);
    tracing::info!("drank small canister: {}", used);

    app.world_mut().set_ambient(player, Ambient::SafeRoom);
    tick_n(&mut app, 100);

    if let Some(status) = app.world().survival_status(player) {
        tracing::info!(
            "durability {}/{} (stage {}), oxygen {:.1}/{:.0}, health {:.0}, dead: {}",
            status.durability,
            status.max_durability,
            status.stage,
            status.oxygen,
            status.max_oxygen,
            status.health,
            status.dead
        );
    }

    let log = app.world().resource::<SurvivalLog>();
    let knockbacks = log.count(|e| matches!(e, SurvivalEvent::Knockback { .. }));
    tracing::info!("{} events journaled, {} knockbacks", log.entries.len(), knockbacks);
}
