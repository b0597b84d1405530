use crate::shared::arinc429::{Arinc429Word, SignStatus};

/// The four ARINC 429 sign/status matrix states, decoded from the two SSM bits of a
/// received label.
pub trait SignStatusMatrix {
    /// Whether the parameter is in failure warning.
    fn is_fw(&self) -> bool;

    /// Whether the parameter is in normal operation.
    fn is_no(&self) -> bool;

    /// Whether the parameter is in functional test.
    fn is_ft(&self) -> bool;

    /// Whether the parameter carries no computed data.
    fn is_ncd(&self) -> bool;
}

pub trait Value<T> {
    fn value(&self) -> T;
}

/// A parameter as received over an ARINC 429 bus: a payload and the two SSM bits of
/// the label it arrived on.
#[derive(Clone, Debug, PartialEq)]
pub struct Arinc429Parameter<T> {
    value: T,
    ssm1: bool,
    ssm2: bool,
}

impl<T> Arinc429Parameter<T> {
    /// Creates a parameter in normal operation.
    pub fn new(value: T) -> Self {
        Self {
            value,
            ssm1: true,
            ssm2: true,
        }
    }

    /// Creates a parameter with no computed data.
    pub fn new_ncd(value: T) -> Self {
        Self {
            value,
            ssm1: true,
            ssm2: false,
        }
    }

    /// Creates a parameter in failure warning.
    pub fn new_inv(value: T) -> Self {
        Self {
            value,
            ssm1: false,
            ssm2: false,
        }
    }
}

impl<T: Default> Default for Arinc429Parameter<T> {
    /// Missing parameters default to failure warning.
    fn default() -> Self {
        Self::new_inv(Default::default())
    }
}

impl<T: Copy> Value<T> for Arinc429Parameter<T> {
    fn value(&self) -> T {
        self.value
    }
}

impl<T> SignStatusMatrix for Arinc429Parameter<T> {
    fn is_fw(&self) -> bool {
        !self.ssm1 && !self.ssm2
    }

    fn is_no(&self) -> bool {
        self.ssm1 && self.ssm2
    }

    fn is_ft(&self) -> bool {
        !self.ssm1 && self.ssm2
    }

    fn is_ncd(&self) -> bool {
        self.ssm1 && !self.ssm2
    }
}

impl Arinc429Parameter<f64> {
    /// Reads a single bit out of a discretes word payload. `bit` is the ARINC bit
    /// number, counted from 1. Negative payloads decode as an all-zero word, payloads
    /// beyond the representable range as a word of all ones.
    pub fn bit(&self, bit: u8) -> bool {
        let rounded = (self.value as f32).round();
        let word = if rounded >= 4.2949673E9 {
            u32::MAX
        } else if rounded >= 0. {
            rounded as u32
        } else {
            0
        };
        (word >> (bit - 1)) & 1 != 0
    }
}

impl<T: Copy> From<Arinc429Word<T>> for Arinc429Parameter<T> {
    fn from(word: Arinc429Word<T>) -> Self {
        match word.ssm() {
            SignStatus::NormalOperation => Self::new(word.value()),
            SignStatus::NoComputedData => Self::new_ncd(word.value()),
            SignStatus::FunctionalTest => Self {
                value: word.value(),
                ssm1: false,
                ssm2: true,
            },
            SignStatus::FailureWarning => Self::new_inv(word.value()),
        }
    }
}

/// A discrete input wire. The failure states are inverted compared to an ARINC
/// parameter, as an unpowered sender reads as ground on both status lines.
#[derive(Clone, Debug, PartialEq)]
pub struct DiscreteParameter {
    value: bool,
    ssm1: bool,
    ssm2: bool,
}

impl DiscreteParameter {
    pub fn new(value: bool) -> Self {
        Self {
            value,
            ssm1: false,
            ssm2: false,
        }
    }

    pub fn new_inv(value: bool) -> Self {
        Self {
            value,
            ssm1: true,
            ssm2: true,
        }
    }
}

impl Default for DiscreteParameter {
    fn default() -> Self {
        Self::new_inv(false)
    }
}

impl Value<bool> for DiscreteParameter {
    fn value(&self) -> bool {
        self.value
    }
}

impl SignStatusMatrix for DiscreteParameter {
    fn is_fw(&self) -> bool {
        self.ssm1 && self.ssm2
    }

    fn is_no(&self) -> bool {
        !self.ssm1 && !self.ssm2
    }

    fn is_ft(&self) -> bool {
        self.ssm1 && !self.ssm2
    }

    fn is_ncd(&self) -> bool {
        !self.ssm1 && self.ssm2
    }
}
