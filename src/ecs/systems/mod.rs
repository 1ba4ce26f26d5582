pub mod oxygen;
pub mod reactions;
pub mod vitals;
