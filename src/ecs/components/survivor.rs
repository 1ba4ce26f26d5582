use bevy_ecs::component::Component;

/// Identity component present on every entity the survival systems track.
#[derive(Component, Debug, Clone)]
pub struct Survivor {
    pub name: String,
}

/// Whether the movement collaborator may drive this body. Cleared on death.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locomotion {
    pub enabled: bool,
}

impl Default for Locomotion {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Marker: the camera collaborator should show the spectator view.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Spectating;
