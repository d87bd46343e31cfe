pub mod delivery;
pub mod message;
