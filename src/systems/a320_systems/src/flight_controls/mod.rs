//! The redundancy management and control law arbitration logic of an A320
//! Elevator/Aileron Computer (ELAC).
//!
//! Two identical ELACs share the pitch and roll axes. Each unit continuously
//! consolidates its air data, inertial and radio altimeter sources, monitors its
//! hydraulic supplies and servo loops, and negotiates with the opposite unit over a
//! cross-talk bus which computer commands which surface and under which control law.

pub mod parameters;
pub mod runtime;
