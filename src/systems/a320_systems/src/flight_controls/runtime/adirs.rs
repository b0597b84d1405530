use std::ops::{Add, Div};
use std::time::Duration;

use systems::flight_controls::filters::LagFilter;
use systems::flight_controls::parameters::{SignStatusMatrix, Value};
use systems::shared::MachNumber;
use uom::si::angle::degree;
use uom::si::f64::*;

use crate::flight_controls::parameters::*;

/// Consolidates the three redundant sources of a triplex parameter into a single
/// value. With no failed source the first two are averaged, with one failed source the
/// remaining two are averaged, with two failed sources the survivor is used directly,
/// and with all three failed the value collapses to zero.
fn fuse<T>(values: [T; 3], faults: [bool; 3]) -> T
where
    T: Copy + Default + Add<Output = T> + Div<f64, Output = T>,
{
    let average = |a: T, b: T| (a + b) / 2.;
    match faults {
        [true, false, false] => average(values[1], values[2]),
        [false, true, false] => average(values[0], values[2]),
        [false, false, _] => average(values[0], values[1]),
        [false, true, true] => values[0],
        [true, false, true] => values[1],
        [true, true, false] => values[2],
        [true, true, true] => T::default(),
    }
}

pub(super) trait AirDataConsolidation {
    fn computed_speed(&self) -> Velocity;
    fn true_speed(&self) -> Velocity;
    fn mach(&self) -> MachNumber;
    fn alpha(&self) -> Angle;
    fn alpha_filtered(&self) -> Angle;
    fn double_adr_fault(&self) -> bool;
    fn triple_adr_fault(&self) -> bool;
}

/// Monitors the three ADRs and maintains the fused air data the rest of the computer
/// works with. An ADR counts as faulty as soon as any of its monitored labels arrives
/// in failure warning.
pub(super) struct AirDataConsolidationActivation {
    alpha_filter: LagFilter,
    computed_speed: Velocity,
    true_speed: Velocity,
    mach: MachNumber,
    alpha: Angle,
    alpha_filtered: Angle,
    double_adr_fault: bool,
    triple_adr_fault: bool,
}

impl AirDataConsolidationActivation {
    const ALPHA_FILTER_C1: f64 = 0.5;

    pub fn new() -> Self {
        Self {
            alpha_filter: LagFilter::new(Self::ALPHA_FILTER_C1),
            computed_speed: Velocity::default(),
            true_speed: Velocity::default(),
            mach: MachNumber::default(),
            alpha: Angle::default(),
            alpha_filtered: Angle::default(),
            double_adr_fault: false,
            triple_adr_fault: false,
        }
    }

    pub fn update(
        &mut self,
        delta: Duration,
        signals: &(impl ComputedSpeed + TrueSpeed + MachParameter + AlphaParameter),
    ) {
        let faults = [1, 2, 3].map(|index| {
            signals.mach(index).is_fw()
                || signals.computed_speed(index).is_fw()
                || signals.true_speed(index).is_fw()
                || signals.alpha(index).is_fw()
        });
        self.double_adr_fault =
            (faults[0] && faults[1]) || (faults[0] && faults[2]) || (faults[1] && faults[2]);
        self.triple_adr_fault = faults[0] && faults[1] && faults[2];

        self.computed_speed = fuse(
            [1, 2, 3].map(|index| signals.computed_speed(index).value()),
            faults,
        );
        self.true_speed = fuse(
            [1, 2, 3].map(|index| signals.true_speed(index).value()),
            faults,
        );
        self.mach = fuse([1, 2, 3].map(|index| signals.mach(index).value()), faults);
        self.alpha = fuse([1, 2, 3].map(|index| signals.alpha(index).value()), faults);
        self.alpha_filtered = Angle::new::<degree>(
            self.alpha_filter
                .update(self.alpha.get::<degree>(), delta),
        );
    }

    pub fn reset(&mut self) {
        self.alpha_filter.reset();
        self.computed_speed = Velocity::default();
        self.true_speed = Velocity::default();
        self.mach = MachNumber::default();
        self.alpha = Angle::default();
        self.alpha_filtered = Angle::default();
        self.double_adr_fault = false;
        self.triple_adr_fault = false;
    }
}

impl AirDataConsolidation for AirDataConsolidationActivation {
    fn computed_speed(&self) -> Velocity {
        self.computed_speed
    }

    fn true_speed(&self) -> Velocity {
        self.true_speed
    }

    fn mach(&self) -> MachNumber {
        self.mach
    }

    fn alpha(&self) -> Angle {
        self.alpha
    }

    fn alpha_filtered(&self) -> Angle {
        self.alpha_filtered
    }

    fn double_adr_fault(&self) -> bool {
        self.double_adr_fault
    }

    fn triple_adr_fault(&self) -> bool {
        self.triple_adr_fault
    }
}

pub(super) trait InertialDataConsolidation {
    fn pitch_attitude(&self) -> Angle;
    fn roll_attitude(&self) -> Angle;
    fn body_pitch_rate(&self) -> AngularVelocity;
    fn body_yaw_rate(&self) -> AngularVelocity;
    fn longitudinal_acceleration(&self) -> Ratio;
    fn lateral_acceleration(&self) -> Ratio;
    fn normal_acceleration(&self) -> Ratio;
    fn pitch_attitude_rate(&self) -> AngularVelocity;
    fn roll_attitude_rate(&self) -> AngularVelocity;
    fn double_ir_fault(&self) -> bool;
    fn triple_ir_fault(&self) -> bool;
}

/// Monitors the three IRs and maintains the fused inertial data. An IR counts as
/// faulty when any of its monitored labels leaves normal operation. The body pitch
/// rate is fused but deliberately not part of the health check.
pub(super) struct InertialDataConsolidationActivation {
    pitch_attitude: Angle,
    roll_attitude: Angle,
    body_pitch_rate: AngularVelocity,
    body_yaw_rate: AngularVelocity,
    longitudinal_acceleration: Ratio,
    lateral_acceleration: Ratio,
    normal_acceleration: Ratio,
    pitch_attitude_rate: AngularVelocity,
    roll_attitude_rate: AngularVelocity,
    double_ir_fault: bool,
    triple_ir_fault: bool,
}

impl InertialDataConsolidationActivation {
    pub fn new() -> Self {
        Self {
            pitch_attitude: Angle::default(),
            roll_attitude: Angle::default(),
            body_pitch_rate: AngularVelocity::default(),
            body_yaw_rate: AngularVelocity::default(),
            longitudinal_acceleration: Ratio::default(),
            lateral_acceleration: Ratio::default(),
            normal_acceleration: Ratio::default(),
            pitch_attitude_rate: AngularVelocity::default(),
            roll_attitude_rate: AngularVelocity::default(),
            double_ir_fault: false,
            triple_ir_fault: false,
        }
    }

    pub fn update(
        &mut self,
        signals: &(impl PitchAttitude
              + RollAttitude
              + BodyPitchRate
              + BodyYawRate
              + LongitudinalAcceleration
              + LateralAcceleration
              + NormalAcceleration
              + PitchAttitudeRate
              + RollAttitudeRate),
    ) {
        let faults = [1, 2, 3].map(|index| {
            !signals.pitch_attitude(index).is_no()
                || !signals.roll_attitude(index).is_no()
                || !signals.body_yaw_rate(index).is_no()
                || !signals.longitudinal_acceleration(index).is_no()
                || !signals.lateral_acceleration(index).is_no()
                || !signals.normal_acceleration(index).is_no()
                || !signals.pitch_attitude_rate(index).is_no()
                || !signals.roll_attitude_rate(index).is_no()
        });
        self.double_ir_fault =
            (faults[0] && faults[1]) || (faults[0] && faults[2]) || (faults[1] && faults[2]);
        self.triple_ir_fault = faults[0] && faults[1] && faults[2];

        self.pitch_attitude = fuse(
            [1, 2, 3].map(|index| signals.pitch_attitude(index).value()),
            faults,
        );
        self.roll_attitude = fuse(
            [1, 2, 3].map(|index| signals.roll_attitude(index).value()),
            faults,
        );
        self.body_pitch_rate = fuse(
            [1, 2, 3].map(|index| signals.body_pitch_rate(index).value()),
            faults,
        );
        self.body_yaw_rate = fuse(
            [1, 2, 3].map(|index| signals.body_yaw_rate(index).value()),
            faults,
        );
        self.longitudinal_acceleration = fuse(
            [1, 2, 3].map(|index| signals.longitudinal_acceleration(index).value()),
            faults,
        );
        self.lateral_acceleration = fuse(
            [1, 2, 3].map(|index| signals.lateral_acceleration(index).value()),
            faults,
        );
        self.normal_acceleration = fuse(
            [1, 2, 3].map(|index| signals.normal_acceleration(index).value()),
            faults,
        );
        self.pitch_attitude_rate = fuse(
            [1, 2, 3].map(|index| signals.pitch_attitude_rate(index).value()),
            faults,
        );
        self.roll_attitude_rate = fuse(
            [1, 2, 3].map(|index| signals.roll_attitude_rate(index).value()),
            faults,
        );
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl InertialDataConsolidation for InertialDataConsolidationActivation {
    fn pitch_attitude(&self) -> Angle {
        self.pitch_attitude
    }

    fn roll_attitude(&self) -> Angle {
        self.roll_attitude
    }

    fn body_pitch_rate(&self) -> AngularVelocity {
        self.body_pitch_rate
    }

    fn body_yaw_rate(&self) -> AngularVelocity {
        self.body_yaw_rate
    }

    fn longitudinal_acceleration(&self) -> Ratio {
        self.longitudinal_acceleration
    }

    fn lateral_acceleration(&self) -> Ratio {
        self.lateral_acceleration
    }

    fn normal_acceleration(&self) -> Ratio {
        self.normal_acceleration
    }

    fn pitch_attitude_rate(&self) -> AngularVelocity {
        self.pitch_attitude_rate
    }

    fn roll_attitude_rate(&self) -> AngularVelocity {
        self.roll_attitude_rate
    }

    fn double_ir_fault(&self) -> bool {
        self.double_ir_fault
    }

    fn triple_ir_fault(&self) -> bool {
        self.triple_ir_fault
    }
}
