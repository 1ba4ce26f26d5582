mod common;

use glam::Vec3;
use suit_sim::config::SurvivalConfig;
use suit_sim::ecs::test_helpers::{journal_count, tick_n};
use suit_sim::ecs::{
    Helmet, Locomotion, OxygenTank, SimClock, Spectating, SurvivalEvent, SurvivalLog,
    SurvivalTick, SurvivalWorldExt, Vitals, spawn_survivor,
};
use suit_sim::model::{Ambient, DeathCause};

use common::{count_deaths, journal, one_second_app, wall_hit};

#[test]
fn tier_ten_suffocates_on_tenth_tick() {
    let mut app = one_second_app();
    let player = spawn_survivor(app.world_mut(), "Player");
    app.world_mut()
        .get_mut::<Helmet>(player)
        .unwrap()
        .0
        .damage(2);

    tick_n(&mut app, 9);
    let status = app.world().survival_status(player).unwrap();
    assert_eq!(status.oxygen, 10.0);
    assert!(!status.dead);

    app.world_mut().run_schedule(SurvivalTick);
    let status = app.world().survival_status(player).unwrap();
    assert_eq!(status.oxygen, 0.0);
    assert!(status.dead);

    let log = app.world().resource::<SurvivalLog>();
    let ticks: Vec<(u64, &SurvivalEvent)> = log
        .entries
        .iter()
        .map(|entry| (entry.tick, &entry.event))
        .collect();
    assert_eq!(
        ticks,
        vec![
            (9, &SurvivalEvent::OxygenDepleted { entity: player }),
            (
                9,
                &SurvivalEvent::Died {
                    entity: player,
                    cause: DeathCause::Suffocation
                }
            ),
        ]
    );
}

#[test]
fn death_stops_locomotion_and_spectates() {
    let mut app = one_second_app();
    let player = spawn_survivor(app.world_mut(), "Player");
    app.world_mut().report_weapon_hit(player, 150.0, Vec3::X);
    app.world_mut().run_schedule(SurvivalTick);

    assert!(app.world().is_dead(player));
    assert!(!app.world().get::<Locomotion>(player).unwrap().enabled);
    assert!(app.world().get::<Spectating>(player).is_some());
    assert_eq!(app.world().survival_status(player).unwrap().health, 0.0);
}

#[test]
fn lethal_hit_and_empty_tank_same_tick_dies_once() {
    let mut app = one_second_app();
    let player = spawn_survivor(app.world_mut(), "Player");
    // Broken helmet, 20 units left: this tick empties the tank.
    {
        let mut helmet = app.world_mut().get_mut::<Helmet>(player).unwrap();
        helmet.0.damage(3);
    }
    app.world_mut()
        .get_mut::<OxygenTank>(player)
        .unwrap()
        .0
        .tick(4.0, 20.0, Ambient::Hostile);
    app.world_mut().report_weapon_hit(player, 500.0, Vec3::X);
    app.world_mut().run_schedule(SurvivalTick);

    assert!(app.world().is_dead(player));
    assert_eq!(count_deaths(&app, player), 1);
    let events = journal(&app, player);
    assert!(events.contains(&SurvivalEvent::Died {
        entity: player,
        cause: DeathCause::Damage
    }));
    assert!(!events.contains(&SurvivalEvent::Died {
        entity: player,
        cause: DeathCause::Suffocation
    }));
    // Corpse keeps its last 20 units; the tank never reports empty.
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, SurvivalEvent::OxygenDepleted { .. }))
    );
    assert_eq!(app.world().survival_status(player).unwrap().oxygen, 20.0);

    // No second death on later ticks.
    tick_n(&mut app, 3);
    assert_eq!(count_deaths(&app, player), 1);
}

#[test]
fn hit_before_starvation_check_wins_the_death() {
    let mut app = one_second_app();
    let player = spawn_survivor(app.world_mut(), "Player");
    // Tank emptied outside the schedule: this tick's starvation check would kill.
    app.world_mut()
        .get_mut::<OxygenTank>(player)
        .unwrap()
        .0
        .tick(1.0, 100.0, Ambient::Hostile);
    app.world_mut().report_weapon_hit(player, 500.0, Vec3::X);
    app.world_mut().run_schedule(SurvivalTick);

    let deaths: Vec<(u64, SurvivalEvent)> = app
        .world()
        .resource::<SurvivalLog>()
        .entries
        .iter()
        .filter(|entry| matches!(entry.event, SurvivalEvent::Died { .. }))
        .map(|entry| (entry.tick, entry.event.clone()))
        .collect();
    assert_eq!(
        deaths,
        vec![(
            0,
            SurvivalEvent::Died {
                entity: player,
                cause: DeathCause::Damage
            }
        )]
    );
    assert_eq!(app.world().get::<Vitals>(player).unwrap().0.health(), 0.0);
}

#[test]
fn lethal_hit_then_respawn_same_tick_leaves_survivor_playable() {
    let mut app = one_second_app();
    let player = spawn_survivor(app.world_mut(), "Player");
    app.world_mut().report_weapon_hit(player, 500.0, Vec3::X);
    app.world_mut().respawn(player);
    app.world_mut().run_schedule(SurvivalTick);

    assert!(!app.world().is_dead(player));
    assert!(app.world().get::<Locomotion>(player).unwrap().enabled);
    assert!(app.world().get::<Spectating>(player).is_none());
    assert_eq!(count_deaths(&app, player), 1);
    assert!(journal(&app, player).contains(&SurvivalEvent::Respawned { entity: player }));
}

#[test]
fn dead_survivor_ignores_everything() {
    let mut app = one_second_app();
    let player = spawn_survivor(app.world_mut(), "Player");
    app.world_mut().report_weapon_hit(player, 100.0, Vec3::X);
    app.world_mut().run_schedule(SurvivalTick);
    assert_eq!(count_deaths(&app, player), 1);

    app.world_mut().report_weapon_hit(player, 100.0, Vec3::X);
    let (velocity, normal) = wall_hit(30.0);
    app.world_mut()
        .report_impact(player, velocity, normal, "floor");
    tick_n(&mut app, 5);

    let status = app.world().survival_status(player).unwrap();
    assert_eq!(status.health, 0.0);
    assert!(status.dead);
    assert_eq!(count_deaths(&app, player), 1);
    assert!(!app.world_mut().use_catalog_item(player, 3));
}

#[test]
fn starvation_death_is_reported_once() {
    let mut app = one_second_app();
    let player = spawn_survivor(app.world_mut(), "Player");
    app.world_mut()
        .get_mut::<Helmet>(player)
        .unwrap()
        .0
        .damage(3);
    tick_n(&mut app, 12);

    assert!(app.world().is_dead(player));
    assert_eq!(count_deaths(&app, player), 1);
    assert_eq!(
        journal_count(&app, |e| matches!(e, SurvivalEvent::OxygenDepleted { .. })),
        1
    );
    // Suffocation is instant: health untouched.
    assert_eq!(app.world().get::<Vitals>(player).unwrap().0.health(), 100.0);
}

#[test]
fn safe_room_restores_air() {
    let mut app = one_second_app();
    let player = spawn_survivor(app.world_mut(), "Player");
    app.world_mut()
        .get_mut::<Helmet>(player)
        .unwrap()
        .0
        .damage(3);
    tick_n(&mut app, 3);
    assert_eq!(app.world().oxygen_fraction(player), Some(0.4));

    app.world_mut().set_ambient(player, Ambient::SafeRoom);
    tick_n(&mut app, 2);
    assert_eq!(app.world().oxygen_fraction(player), Some(0.8));
    tick_n(&mut app, 10);
    assert_eq!(app.world().oxygen_fraction(player), Some(1.0));

    app.world_mut().set_ambient(player, Ambient::Hostile);
    app.world_mut().run_schedule(SurvivalTick);
    assert_eq!(app.world().oxygen_fraction(player), Some(0.8));
}

#[test]
fn respawn_clears_latches() {
    let mut app = one_second_app();
    let player = spawn_survivor(app.world_mut(), "Player");
    app.world_mut()
        .get_mut::<Helmet>(player)
        .unwrap()
        .0
        .damage(3);
    tick_n(&mut app, 5);
    assert!(app.world().is_dead(player));

    app.world_mut().respawn(player);
    app.world_mut().run_schedule(SurvivalTick);

    let status = app.world().survival_status(player).unwrap();
    assert_eq!(status.durability, 3);
    assert!(!status.broken);
    assert_eq!(status.oxygen, 100.0);
    assert_eq!(status.health, 100.0);
    assert!(!status.dead);
    assert!(app.world().get::<Locomotion>(player).unwrap().enabled);
    assert!(app.world().get::<Spectating>(player).is_none());
    assert!(journal(&app, player).contains(&SurvivalEvent::Respawned { entity: player }));

    // Fresh lifetime: can die again, and that death is reported.
    app.world_mut().report_weapon_hit(player, 100.0, Vec3::X);
    app.world_mut().run_schedule(SurvivalTick);
    assert_eq!(count_deaths(&app, player), 2);
}

#[test]
fn variable_delta_drains_proportionally() {
    let mut app = one_second_app();
    let player = spawn_survivor(app.world_mut(), "Player");
    app.world_mut()
        .get_mut::<Helmet>(player)
        .unwrap()
        .0
        .damage(1);

    app.world_mut().resource_mut::<SimClock>().set_delta(0.5);
    app.world_mut().run_schedule(SurvivalTick);
    assert_eq!(app.world().survival_status(player).unwrap().oxygen, 97.5);

    app.world_mut().resource_mut::<SimClock>().set_delta(-3.0);
    app.world_mut().run_schedule(SurvivalTick);
    assert_eq!(app.world().survival_status(player).unwrap().oxygen, 97.5);
}

#[test]
fn commands_for_non_survivors_are_dropped() {
    let mut app = one_second_app();
    let rock = app.world_mut().spawn_empty().id();
    app.world_mut().report_weapon_hit(rock, 10.0, Vec3::X);
    app.world_mut().set_ambient(rock, Ambient::SafeRoom);
    app.world_mut().respawn(rock);
    app.world_mut().run_schedule(SurvivalTick);
    assert!(app.world().resource::<SurvivalLog>().entries.is_empty());
}
