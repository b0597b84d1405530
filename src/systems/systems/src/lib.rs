pub mod flight_controls;
pub mod shared;
