use std::ops::{Add, Div, Mul};

pub mod arinc429;

/// The Mach number, as a ratio of the true airspeed to the local speed of sound.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct MachNumber(pub f64);

impl From<f64> for MachNumber {
    fn from(value: f64) -> Self {
        MachNumber(value)
    }
}

impl From<MachNumber> for f64 {
    fn from(value: MachNumber) -> Self {
        value.0
    }
}

impl Add for MachNumber {
    type Output = MachNumber;

    fn add(self, rhs: MachNumber) -> Self::Output {
        MachNumber(self.0 + rhs.0)
    }
}

impl Mul<f64> for MachNumber {
    type Output = MachNumber;

    fn mul(self, rhs: f64) -> Self::Output {
        MachNumber(self.0 * rhs)
    }
}

impl Div<f64> for MachNumber {
    type Output = MachNumber;

    fn div(self, rhs: f64) -> Self::Output {
        MachNumber(self.0 / rhs)
    }
}
