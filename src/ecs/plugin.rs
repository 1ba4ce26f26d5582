use bevy_app::{App, Plugin};

use super::systems::oxygen::OxygenPlugin;
use super::systems::reactions::ReactionsPlugin;
use super::systems::vitals::VitalsPlugin;

/// Aggregate plugin that installs the per-tick survival systems.
pub struct SurvivalPlugin;

impl Plugin for SurvivalPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((OxygenPlugin, VitalsPlugin, ReactionsPlugin));
    }
}
