pub mod suit;
pub mod survivor;

pub use suit::{Helmet, ImpactSensor, OxygenTank, Surroundings, VisorHitCounter, Vitals};
pub use survivor::{Locomotion, Spectating, Survivor};
