#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SignStatus {
    FailureWarning,
    FunctionalTest,
    NoComputedData,
    NormalOperation,
}

impl From<SignStatus> for u64 {
    fn from(value: SignStatus) -> Self {
        match value {
            SignStatus::FailureWarning => 0b00,
            SignStatus::FunctionalTest => 0b01,
            SignStatus::NoComputedData => 0b10,
            SignStatus::NormalOperation => 0b11,
        }
    }
}

impl From<u32> for SignStatus {
    fn from(value: u32) -> Self {
        match value {
            0b00 => SignStatus::FailureWarning,
            0b01 => SignStatus::FunctionalTest,
            0b10 => SignStatus::NoComputedData,
            0b11 => SignStatus::NormalOperation,
            _ => panic!("Unknown SSM value: {}.", value),
        }
    }
}

/// A single bus word as transmitted to or received from the host: a float payload
/// accompanied by its SSM.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arinc429Word<T: Copy> {
    value: T,
    ssm: SignStatus,
}

impl<T: Copy> Arinc429Word<T> {
    pub fn new(value: T, ssm: SignStatus) -> Self {
        Self { value, ssm }
    }

    pub fn new_norm(value: T) -> Self {
        Self {
            value,
            ssm: SignStatus::NormalOperation,
        }
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn ssm(&self) -> SignStatus {
        self.ssm
    }

    pub fn is_normal(&self) -> bool {
        matches!(self.ssm, SignStatus::NormalOperation)
    }
}

pub fn from_arinc429(value: f64) -> (f64, SignStatus) {
    let bits = value.to_bits();

    let value = (bits >> 32) as u32;
    let status = bits as u32;

    (f32::from_bits(value) as f64, status.into())
}

pub fn to_arinc429(value: f64, ssm: SignStatus) -> f64 {
    let value = value as f32;
    let status: u64 = ssm.into();

    let bits = (value.to_bits() as u64) << 32 | status;

    f64::from_bits(bits)
}

/// Assembles a discretes word from individual bits. ARINC bits 11 through 29 are available,
/// packed so that bit n of the word ends up as binary digit n - 1 of the payload.
pub struct Arinc429DiscretesWordBuilder {
    value: [bool; 19],
}

impl Arinc429DiscretesWordBuilder {
    pub fn new() -> Self {
        Self { value: [false; 19] }
    }

    pub fn set(&mut self, bit: usize, value: bool) {
        self.value[bit - 11] = value
    }

    pub fn build(&self, ssm: SignStatus) -> Arinc429Word<f64> {
        let mut word = 0u32;
        for (i, &bit) in self.value.iter().enumerate() {
            if bit {
                word |= 1 << (i + 10);
            }
        }
        Arinc429Word::new(word as f64, ssm)
    }
}

impl Default for Arinc429DiscretesWordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
