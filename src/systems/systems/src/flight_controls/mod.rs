//! Building blocks shared by the electronic flight control computers: boolean logic
//! nodes with explicit time bases, first-order signal filters, and the parameter
//! types used to carry validity alongside every value.

pub mod filters;
pub mod logic;
pub mod parameters;
pub mod utils;
