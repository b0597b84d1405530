pub mod flight_controls;
