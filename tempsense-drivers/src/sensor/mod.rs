//! Temperature sensor drivers

pub mod ds1631;

pub use ds1631::Ds1631;
