use super::parameters::SignStatusMatrix;

/// The coarse validity view the flight control computers take of an incoming
/// parameter: anything short of failure warning is usable.
pub trait EfcsSsm {
    fn is_val(&self) -> bool;
    fn is_inv(&self) -> bool;
}

impl<T: SignStatusMatrix> EfcsSsm for T {
    fn is_val(&self) -> bool {
        !self.is_fw()
    }

    fn is_inv(&self) -> bool {
        self.is_fw()
    }
}
