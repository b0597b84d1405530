//! Hand-rolled stand-ins for the upstream activations, so each monitor can be
//! tested against exactly the consolidated values it consumes.

use systems::shared::MachNumber;
use uom::si::angle::degree;
use uom::si::f64::*;
use uom::si::length::foot;

use super::adirs::{AirDataConsolidation, InertialDataConsolidation};
use super::engagement::Engagement;
use super::laws::{LateralLawCapability, LawResolution, PitchLawCapability};
use super::phases::FlightPhases;
use super::protections::{
    AlphaLimits, AlphaProtection, ApDisconnectProtection, HighSpeedProtection, LandingPhase,
};
use super::radio::RadioHeightConsolidation;
use super::sidestick::SidestickPriority;
use super::surfaces::ElevatorCommands;
use super::{LateralControlLaw, PitchControlLaw};

#[derive(Default)]
pub(super) struct FakeAirData {
    pub computed_speed: Velocity,
    pub true_speed: Velocity,
    pub mach: MachNumber,
    pub alpha: Angle,
    pub alpha_filtered: Angle,
    pub double_adr_fault: bool,
    pub triple_adr_fault: bool,
}

impl AirDataConsolidation for FakeAirData {
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

#[derive(Default)]
pub(super) struct FakeInertial {
    pub pitch_attitude: Angle,
    pub roll_attitude: Angle,
    pub body_pitch_rate: AngularVelocity,
    pub body_yaw_rate: AngularVelocity,
    pub longitudinal_acceleration: Ratio,
    pub lateral_acceleration: Ratio,
    pub normal_acceleration: Ratio,
    pub pitch_attitude_rate: AngularVelocity,
    pub roll_attitude_rate: AngularVelocity,
    pub double_ir_fault: bool,
    pub triple_ir_fault: bool,
}

impl FakeInertial {
    pub fn level_flight() -> Self {
        Self {
            pitch_attitude: Angle::new::<degree>(2.),
            ..Default::default()
        }
    }
}

impl InertialDataConsolidation for FakeInertial {
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

#[derive(Default)]
pub(super) struct FakeRadio {
    pub radio_height: Length,
    pub ra_1_invalid: bool,
    pub ra_2_invalid: bool,
    pub dual_ra_failure: bool,
}

impl FakeRadio {
    pub fn at_height(feet: f64) -> Self {
        Self {
            radio_height: Length::new::<foot>(feet),
            ..Default::default()
        }
    }
}

impl RadioHeightConsolidation for FakeRadio {
    fn radio_height(&self) -> Length {
        self.radio_height
    }

    fn ra_1_invalid(&self) -> bool {
        self.ra_1_invalid
    }

    fn ra_2_invalid(&self) -> bool {
        self.ra_2_invalid
    }

    fn dual_ra_failure(&self) -> bool {
        self.dual_ra_failure
    }
}

#[derive(Default)]
pub(super) struct FakePhases {
    pub on_ground: bool,
    pub in_flight: bool,
    pub tracking_mode_on: bool,
    pub ground_spoilers_out: bool,
}

impl FakePhases {
    pub fn flying() -> Self {
        Self {
            in_flight: true,
            ..Default::default()
        }
    }

    pub fn on_ground() -> Self {
        Self {
            on_ground: true,
            ..Default::default()
        }
    }
}

impl FlightPhases for FakePhases {
    fn on_ground(&self) -> bool {
        self.on_ground
    }

    fn in_flight(&self) -> bool {
        self.in_flight
    }

    fn tracking_mode_on(&self) -> bool {
        self.tracking_mode_on
    }

    fn ground_spoilers_out(&self) -> bool {
        self.ground_spoilers_out
    }
}

#[derive(Default)]
pub(super) struct FakeEngagement {
    pub is_unit_1: bool,
    pub left_aileron_avail: bool,
    pub right_aileron_avail: bool,
    pub left_elevator_avail: bool,
    pub right_elevator_avail: bool,
    pub ths_avail: bool,
    pub can_engage_in_pitch: bool,
    pub has_priority_in_pitch: bool,
    pub engaged_in_pitch: bool,
    pub can_engage_in_roll: bool,
    pub has_priority_in_roll: bool,
    pub engaged_in_roll: bool,
    pub left_aileron_crosscommand_active: bool,
    pub right_aileron_crosscommand_active: bool,
}

impl FakeEngagement {
    /// All surfaces healthy and powered, neither axis claimed.
    pub fn fully_available() -> Self {
        Self {
            left_aileron_avail: true,
            right_aileron_avail: true,
            left_elevator_avail: true,
            right_elevator_avail: true,
            ths_avail: true,
            can_engage_in_pitch: true,
            can_engage_in_roll: true,
            ..Default::default()
        }
    }

    /// All surfaces healthy with both axes claimed by this computer.
    pub fn engaged_everywhere() -> Self {
        Self {
            is_unit_1: true,
            has_priority_in_pitch: true,
            engaged_in_pitch: true,
            has_priority_in_roll: true,
            engaged_in_roll: true,
            ..Self::fully_available()
        }
    }
}

impl Engagement for FakeEngagement {
    fn is_unit_1(&self) -> bool {
        self.is_unit_1
    }

    fn left_aileron_avail(&self) -> bool {
        self.left_aileron_avail
    }

    fn right_aileron_avail(&self) -> bool {
        self.right_aileron_avail
    }

    fn left_elevator_avail(&self) -> bool {
        self.left_elevator_avail
    }

    fn right_elevator_avail(&self) -> bool {
        self.right_elevator_avail
    }

    fn ths_avail(&self) -> bool {
        self.ths_avail
    }

    fn can_engage_in_pitch(&self) -> bool {
        self.can_engage_in_pitch
    }

    fn has_priority_in_pitch(&self) -> bool {
        self.has_priority_in_pitch
    }

    fn engaged_in_pitch(&self) -> bool {
        self.engaged_in_pitch
    }

    fn can_engage_in_roll(&self) -> bool {
        self.can_engage_in_roll
    }

    fn has_priority_in_roll(&self) -> bool {
        self.has_priority_in_roll
    }

    fn engaged_in_roll(&self) -> bool {
        self.engaged_in_roll
    }

    fn left_aileron_crosscommand_active(&self) -> bool {
        self.left_aileron_crosscommand_active
    }

    fn right_aileron_crosscommand_active(&self) -> bool {
        self.right_aileron_crosscommand_active
    }
}

pub(super) struct FakeLateralCapability {
    pub capability: LateralControlLaw,
}

impl FakeLateralCapability {
    pub fn normal() -> Self {
        Self::of(LateralControlLaw::NormalLaw)
    }

    pub fn of(capability: LateralControlLaw) -> Self {
        Self { capability }
    }
}

impl LateralLawCapability for FakeLateralCapability {
    fn lateral_law_capability(&self) -> LateralControlLaw {
        self.capability
    }
}

pub(super) struct FakePitchCapability {
    pub capability: PitchControlLaw,
    pub abnormal_condition: bool,
    pub abnormal_condition_was_active: bool,
}

impl FakePitchCapability {
    pub fn normal() -> Self {
        Self::of(PitchControlLaw::NormalLaw)
    }

    pub fn of(capability: PitchControlLaw) -> Self {
        Self {
            capability,
            abnormal_condition: false,
            abnormal_condition_was_active: false,
        }
    }
}

impl PitchLawCapability for FakePitchCapability {
    fn pitch_law_capability(&self) -> PitchControlLaw {
        self.capability
    }

    fn abnormal_condition(&self) -> bool {
        self.abnormal_condition
    }

    fn abnormal_condition_was_active(&self) -> bool {
        self.abnormal_condition_was_active
    }
}

pub(super) struct FakeLawResolution {
    pub active_pitch_law: PitchControlLaw,
    pub active_lateral_law: LateralControlLaw,
}

impl FakeLawResolution {
    pub fn normal() -> Self {
        Self {
            active_pitch_law: PitchControlLaw::NormalLaw,
            active_lateral_law: LateralControlLaw::NormalLaw,
        }
    }

    pub fn degraded() -> Self {
        Self {
            active_pitch_law: PitchControlLaw::DirectLaw,
            active_lateral_law: LateralControlLaw::DirectLaw,
        }
    }

    pub fn none() -> Self {
        Self {
            active_pitch_law: PitchControlLaw::None,
            active_lateral_law: LateralControlLaw::None,
        }
    }
}

impl LawResolution for FakeLawResolution {
    fn active_pitch_law(&self) -> PitchControlLaw {
        self.active_pitch_law
    }

    fn active_lateral_law(&self) -> LateralControlLaw {
        self.active_lateral_law
    }
}

#[derive(Default)]
pub(super) struct FakeSidestick {
    pub left_stick_disabled: bool,
    pub right_stick_disabled: bool,
    pub left_stick_priority_locked: bool,
    pub right_stick_priority_locked: bool,
    pub roll_command: Ratio,
    pub pitch_command: Ratio,
}

impl SidestickPriority for FakeSidestick {
    fn left_stick_disabled(&self) -> bool {
        self.left_stick_disabled
    }

    fn right_stick_disabled(&self) -> bool {
        self.right_stick_disabled
    }

    fn left_stick_priority_locked(&self) -> bool {
        self.left_stick_priority_locked
    }

    fn right_stick_priority_locked(&self) -> bool {
        self.right_stick_priority_locked
    }

    fn roll_command(&self) -> Ratio {
        self.roll_command
    }

    fn pitch_command(&self) -> Ratio {
        self.pitch_command
    }
}

pub(super) struct FakeAlphaLimits {
    pub alpha_max: Angle,
    pub alpha_prot: Angle,
    pub alpha_prot_threshold: Angle,
}

impl AlphaLimits for FakeAlphaLimits {
    fn alpha_max(&self) -> Angle {
        self.alpha_max
    }

    fn alpha_prot(&self) -> Angle {
        self.alpha_prot
    }

    fn alpha_prot_threshold(&self) -> Angle {
        self.alpha_prot_threshold
    }
}

#[derive(Default)]
pub(super) struct FakeHighSpeedProtection {
    pub active: bool,
}

impl HighSpeedProtection for FakeHighSpeedProtection {
    fn high_speed_protection_active(&self) -> bool {
        self.active
    }

    fn lo_threshold(&self) -> Velocity {
        Velocity::default()
    }

    fn hi_threshold(&self) -> Velocity {
        Velocity::default()
    }
}

#[derive(Default)]
pub(super) struct FakeAlphaProtection {
    pub active: bool,
}

impl AlphaProtection for FakeAlphaProtection {
    fn alpha_protection_active(&self) -> bool {
        self.active
    }
}

#[derive(Default)]
pub(super) struct FakeLandingPhase {
    pub below_100_ft_on_approach: bool,
}

impl LandingPhase for FakeLandingPhase {
    fn below_100_ft_on_approach(&self) -> bool {
        self.below_100_ft_on_approach
    }
}

#[derive(Default)]
pub(super) struct FakeApDisconnect {
    pub active: bool,
}

impl ApDisconnectProtection for FakeApDisconnect {
    fn protection_ap_disconnect(&self) -> bool {
        self.active
    }
}

#[derive(Default)]
pub(super) struct FakeElevator {
    pub elevator_command: Angle,
    pub dual_pressurization_active: bool,
    pub ths_rate_command: AngularVelocity,
    pub trim_limit_up: Angle,
    pub trim_limit_down: Angle,
}

impl ElevatorCommands for FakeElevator {
    fn elevator_command(&self) -> Angle {
        self.elevator_command
    }

    fn left_elevator_order(&self) -> Angle {
        self.elevator_command
    }

    fn right_elevator_order(&self) -> Angle {
        self.elevator_command
    }

    fn left_elevator_damping_mode(&self) -> bool {
        false
    }

    fn right_elevator_damping_mode(&self) -> bool {
        false
    }

    fn dual_pressurization_active(&self) -> bool {
        self.dual_pressurization_active
    }

    fn ths_rate_command(&self) -> AngularVelocity {
        self.ths_rate_command
    }

    fn trim_limit_up(&self) -> Angle {
        self.trim_limit_up
    }

    fn trim_limit_down(&self) -> Angle {
        self.trim_limit_down
    }
}
