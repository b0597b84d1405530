//! The monitors and arbitration logic of a single ELAC channel. Each concern lives
//! in its own activation which is stepped once per tick, feeding the consolidated
//! values forward in dependency order.

use std::time::Duration;

use systems::flight_controls::parameters::{SignStatusMatrix, Value};
use systems::shared::arinc429::{Arinc429DiscretesWordBuilder, Arinc429Word, SignStatus};
use uom::si::angle::degree;
use uom::si::f64::*;
use uom::si::ratio::ratio;

use crate::flight_controls::parameters::*;

mod adirs;
mod autopilot;
mod engagement;
#[cfg(test)]
mod fixtures;
mod hydraulics;
mod laws;
mod phases;
mod protections;
mod radio;
mod sidestick;
mod surfaces;

use self::adirs::{AirDataConsolidationActivation, InertialDataConsolidationActivation};
use self::autopilot::{
    ApAuthorisation, ApAuthorisationActivation, FmgcSourceSelection, FmgcSourceSelectionActivation,
};
use self::engagement::{Engagement, EngagementActivation};
use self::hydraulics::HydraulicPressurisedActivation;
use self::laws::{
    LateralLawCapability, LateralLawCapabilityActivation, LawResolution, LawResolutionActivation,
    PitchLawCapability, PitchLawCapabilityActivation,
};
use self::phases::{FlightPhases, FlightPhasesActivation};
use self::protections::{
    AlphaLimits, AlphaLimitsActivation, AlphaProtection, AlphaProtectionActivation,
    ApDisconnectMonitorActivation, HighSpeedProtection, HighSpeedProtectionActivation,
    LandingPhaseActivation,
};
use self::radio::RadioAltimeterConsolidationActivation;
use self::sidestick::{SidestickPriority, SidestickPriorityActivation};
use self::surfaces::{
    AileronCommandActivation, AileronCommands, ElevatorCommandActivation, ElevatorCommands,
    ThsCommand, ThsCommandActivation,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PitchControlLaw {
    NormalLaw,
    AlternateLaw1,
    AlternateLaw2,
    DirectLaw,
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LateralControlLaw {
    NormalLaw,
    DirectLaw,
    None,
}

#[derive(Clone, Copy, Default)]
pub struct LateralLawOutputs {
    pub aileron_command: Angle,
    pub yaw_damper_command: Angle,
}

#[derive(Clone, Copy, Default)]
pub struct PitchLawOutputs {
    pub elevator_command: Angle,
    pub ths_rate_command: AngularVelocity,
    pub trim_limit_up: Angle,
    pub trim_limit_down: Angle,
}

/// The output of each control law for the current tick. The laws themselves run
/// outside this runtime; the runtime decides which of their outputs is flown.
#[derive(Clone, Copy, Default)]
pub struct ControlLawOutputs {
    pub lateral_normal: LateralLawOutputs,
    pub lateral_direct: LateralLawOutputs,
    pub pitch_normal: PitchLawOutputs,
    pub pitch_alternate: PitchLawOutputs,
    pub pitch_direct: PitchLawOutputs,
}

pub struct A320ElacRuntime {
    elapsed: Duration,
    air_data: AirDataConsolidationActivation,
    inertial: InertialDataConsolidationActivation,
    radio_altimeter: RadioAltimeterConsolidationActivation,
    phases: FlightPhasesActivation,
    hydraulics: HydraulicPressurisedActivation,
    sidestick: SidestickPriorityActivation,
    engagement: EngagementActivation,
    lateral_capability: LateralLawCapabilityActivation,
    pitch_capability: PitchLawCapabilityActivation,
    law_resolution: LawResolutionActivation,
    alpha_limits: AlphaLimitsActivation,
    high_speed_protection: HighSpeedProtectionActivation,
    alpha_protection: AlphaProtectionActivation,
    landing: LandingPhaseActivation,
    ap_disconnect: ApDisconnectMonitorActivation,
    ap_authorisation: ApAuthorisationActivation,
    fmgc_selection: FmgcSourceSelectionActivation,
    ailerons: AileronCommandActivation,
    elevators: ElevatorCommandActivation,
    ths: ThsCommandActivation,
}

impl A320ElacRuntime {
    const PITCH_STICK_GAIN_DEG: f64 = 16.;
    const ROLL_STICK_GAIN_DEG: f64 = 20.;
    const RUDDER_PEDAL_GAIN_DEG: f64 = 30.;

    pub fn new() -> Self {
        Self {
            elapsed: Duration::from_secs(0),
            air_data: AirDataConsolidationActivation::new(),
            inertial: InertialDataConsolidationActivation::new(),
            radio_altimeter: RadioAltimeterConsolidationActivation::new(),
            phases: FlightPhasesActivation::new(),
            hydraulics: HydraulicPressurisedActivation::new(),
            sidestick: SidestickPriorityActivation::new(),
            engagement: EngagementActivation::new(),
            lateral_capability: LateralLawCapabilityActivation::new(),
            pitch_capability: PitchLawCapabilityActivation::new(),
            law_resolution: LawResolutionActivation::new(),
            alpha_limits: AlphaLimitsActivation::new(),
            high_speed_protection: HighSpeedProtectionActivation::new(),
            alpha_protection: AlphaProtectionActivation::new(),
            landing: LandingPhaseActivation::new(),
            ap_disconnect: ApDisconnectMonitorActivation::new(),
            ap_authorisation: ApAuthorisationActivation::new(),
            fmgc_selection: FmgcSourceSelectionActivation::new(),
            ailerons: AileronCommandActivation::new(),
            elevators: ElevatorCommandActivation::new(),
            ths: ThsCommandActivation::new(),
        }
    }

    pub fn update(
        &mut self,
        delta: Duration,
        parameters: &A320ElacParameterTable,
        law_outputs: &ControlLawOutputs,
    ) {
        if !parameters.computer_running() {
            self.reset();
            return;
        }
        self.elapsed += delta;

        self.air_data.update(delta, parameters);
        self.inertial.update(parameters);
        self.radio_altimeter
            .update(delta, self.elapsed, parameters, &self.air_data);
        self.phases
            .update(self.elapsed, parameters, &self.inertial, &self.radio_altimeter);
        self.hydraulics.update(delta, parameters);
        self.sidestick.update(delta, parameters);
        self.engagement.update(parameters, &self.hydraulics);
        self.lateral_capability.update(parameters);
        self.pitch_capability.update(
            delta,
            parameters,
            &self.air_data,
            &self.inertial,
            &self.radio_altimeter,
            &self.phases,
            &self.engagement,
            &self.lateral_capability,
        );
        self.law_resolution.update(
            parameters,
            &self.engagement,
            &self.pitch_capability,
            &self.lateral_capability,
        );
        self.alpha_limits
            .update(delta, self.elapsed, parameters, &self.air_data, &self.phases);
        self.high_speed_protection.update(
            parameters,
            &self.air_data,
            &self.inertial,
            &self.law_resolution,
        );
        self.alpha_protection.update(
            self.elapsed,
            parameters,
            &self.air_data,
            &self.radio_altimeter,
            &self.phases,
            &self.sidestick,
            &self.law_resolution,
            &self.alpha_limits,
        );
        self.landing.update(&self.phases, &self.radio_altimeter);
        self.ap_disconnect.update(
            self.elapsed,
            &self.air_data,
            &self.inertial,
            &self.phases,
            &self.law_resolution,
            &self.alpha_limits,
            &self.landing,
            &self.high_speed_protection,
            &self.alpha_protection,
        );
        self.ap_authorisation.update(
            parameters,
            &self.inertial,
            &self.sidestick,
            &self.engagement,
            &self.ap_disconnect,
        );
        self.fmgc_selection.update(parameters);
        self.ailerons.update(
            delta,
            parameters,
            &self.inertial,
            &self.phases,
            &self.engagement,
            &self.law_resolution,
            law_outputs,
        );
        self.elevators.update(
            parameters,
            &self.air_data,
            &self.engagement,
            &self.law_resolution,
            law_outputs,
        );
        self.ths.update(
            delta,
            parameters,
            &self.phases,
            &self.engagement,
            &self.law_resolution,
            &self.pitch_capability,
            &self.elevators,
        );
    }

    fn reset(&mut self) {
        self.elapsed = Duration::from_secs(0);
        self.air_data.reset();
        self.inertial.reset();
        self.radio_altimeter.reset();
        self.phases.reset();
        self.hydraulics.reset();
        self.sidestick.reset();
        self.engagement.reset();
        self.lateral_capability.reset();
        self.pitch_capability.reset();
        self.law_resolution.reset();
        self.alpha_limits.reset();
        self.high_speed_protection.reset();
        self.alpha_protection.reset();
        self.landing.reset();
        self.ap_disconnect.reset();
        self.ap_authorisation.reset();
        self.fmgc_selection.reset();
        self.ailerons.reset();
        self.elevators.reset();
        self.ths.reset();
    }

    pub fn on_ground(&self) -> bool {
        self.phases.on_ground()
    }

    pub fn in_flight(&self) -> bool {
        self.phases.in_flight()
    }

    pub fn active_pitch_law(&self) -> PitchControlLaw {
        self.law_resolution.active_pitch_law()
    }

    pub fn active_lateral_law(&self) -> LateralControlLaw {
        self.law_resolution.active_lateral_law()
    }

    pub fn pitch_law_capability(&self) -> PitchControlLaw {
        self.pitch_capability.pitch_law_capability()
    }

    pub fn lateral_law_capability(&self) -> LateralControlLaw {
        self.lateral_capability.lateral_law_capability()
    }

    pub fn engaged_in_pitch(&self) -> bool {
        self.engagement.engaged_in_pitch()
    }

    pub fn engaged_in_roll(&self) -> bool {
        self.engagement.engaged_in_roll()
    }

    pub fn alpha_max(&self) -> Angle {
        self.alpha_limits.alpha_max()
    }

    pub fn alpha_prot(&self) -> Angle {
        self.alpha_limits.alpha_prot()
    }

    pub fn alpha_protection_active(&self) -> bool {
        self.alpha_protection.alpha_protection_active()
    }

    pub fn high_speed_protection_active(&self) -> bool {
        self.high_speed_protection.high_speed_protection_active()
    }

    // Analog servo orders. A surface this computer does not actively drive is
    // ordered to zero, which releases the servo to the opposite computer.

    pub fn left_aileron_position_order(&self) -> Angle {
        if self.ailerons.left_aileron_active_mode() {
            self.ailerons.left_aileron_command()
        } else {
            Angle::default()
        }
    }

    pub fn right_aileron_position_order(&self) -> Angle {
        if self.ailerons.right_aileron_active_mode() {
            self.ailerons.right_aileron_command()
        } else {
            Angle::default()
        }
    }

    pub fn left_elevator_position_order(&self) -> Angle {
        self.elevators.left_elevator_order()
    }

    pub fn right_elevator_position_order(&self) -> Angle {
        self.elevators.right_elevator_order()
    }

    pub fn ths_position_order(&self) -> Angle {
        self.ths.ths_position_order()
    }

    // Discrete outputs.

    pub fn pitch_axis_ok(&self) -> bool {
        self.engagement.can_engage_in_pitch()
    }

    pub fn left_aileron_ok(&self) -> bool {
        self.engagement.left_aileron_avail()
    }

    pub fn right_aileron_ok(&self) -> bool {
        self.engagement.right_aileron_avail()
    }

    pub fn digital_output_validated(&self) -> bool {
        true
    }

    pub fn ap_1_authorised(&self) -> bool {
        self.ap_authorisation.ap_authorised()
    }

    pub fn ap_2_authorised(&self) -> bool {
        self.ap_authorisation.ap_authorised()
    }

    pub fn ap_1_control(&self) -> bool {
        self.fmgc_selection.ap_1_control()
    }

    pub fn ap_2_control(&self) -> bool {
        self.fmgc_selection.ap_2_control()
    }

    pub fn any_ap_engaged(&self) -> bool {
        self.fmgc_selection.any_ap_engaged()
    }

    // The commands of the FMGC in control, handed to the laws.

    pub fn fmgc_roll_command(&self) -> Angle {
        self.fmgc_selection.selected_roll_command()
    }

    pub fn fmgc_pitch_command(&self) -> Angle {
        self.fmgc_selection.selected_pitch_command()
    }

    pub fn fmgc_yaw_command(&self) -> Angle {
        self.fmgc_selection.selected_yaw_command()
    }

    pub fn left_aileron_active_mode(&self) -> bool {
        self.ailerons.left_aileron_active_mode()
    }

    pub fn right_aileron_active_mode(&self) -> bool {
        self.ailerons.right_aileron_active_mode()
    }

    pub fn left_elevator_damping_mode(&self) -> bool {
        self.elevators.left_elevator_damping_mode()
    }

    pub fn right_elevator_damping_mode(&self) -> bool {
        self.elevators.right_elevator_damping_mode()
    }

    pub fn ths_active(&self) -> bool {
        self.ths.ths_active()
    }

    pub fn battery_power_supply_required(&self) -> bool {
        self.hydraulics.battery_power_supply_required()
    }

    // Bus outputs.

    pub fn discrete_status_word_1(&self, parameters: &A320ElacParameterTable) -> Arinc429Word<f64> {
        let pitch_law = self.law_resolution.active_pitch_law();
        let lateral_law = self.law_resolution.active_lateral_law();
        let lateral_normal_or_abnormal = lateral_law == LateralControlLaw::NormalLaw
            || self.pitch_capability.abnormal_condition();
        let sec_1_word_1 = parameters.sec_discrete_status_word_1(1);

        let mut word = Arinc429DiscretesWordBuilder::new();
        word.set(11, parameters.left_aileron_servo_failed().value());
        word.set(12, parameters.right_aileron_servo_failed().value());
        word.set(13, parameters.left_elevator_servo_failed().value());
        word.set(14, parameters.right_elevator_servo_failed().value());
        word.set(15, self.engagement.left_aileron_avail());
        word.set(16, self.engagement.right_aileron_avail());
        word.set(17, self.engagement.left_elevator_avail());
        word.set(18, self.engagement.right_elevator_avail());
        word.set(19, self.engagement.engaged_in_pitch());
        word.set(20, self.engagement.engaged_in_roll());
        word.set(21, !self.engagement.can_engage_in_pitch());
        word.set(22, !self.engagement.can_engage_in_roll());
        word.set(
            23,
            matches!(
                pitch_law,
                PitchControlLaw::NormalLaw | PitchControlLaw::AlternateLaw2
            ),
        );
        word.set(
            24,
            matches!(
                pitch_law,
                PitchControlLaw::AlternateLaw1 | PitchControlLaw::AlternateLaw2
            ),
        );
        word.set(25, pitch_law == PitchControlLaw::DirectLaw);
        word.set(26, lateral_law == LateralControlLaw::NormalLaw);
        word.set(27, lateral_law == LateralControlLaw::DirectLaw);
        word.set(
            28,
            lateral_normal_or_abnormal || (!sec_1_word_1.bit(16) && sec_1_word_1.is_no()),
        );
        word.set(29, lateral_normal_or_abnormal);
        word.build(SignStatus::NormalOperation)
    }

    pub fn discrete_status_word_2(&self, parameters: &A320ElacParameterTable) -> Arinc429Word<f64> {
        let pitch_capability = self.pitch_capability.pitch_law_capability();
        let lateral_capability = self.lateral_capability.lateral_law_capability();

        let mut word = Arinc429DiscretesWordBuilder::new();
        word.set(
            11,
            matches!(
                pitch_capability,
                PitchControlLaw::NormalLaw | PitchControlLaw::DirectLaw
            ),
        );
        word.set(
            12,
            matches!(
                pitch_capability,
                PitchControlLaw::AlternateLaw1
                    | PitchControlLaw::AlternateLaw2
                    | PitchControlLaw::DirectLaw
            ),
        );
        word.set(13, lateral_capability == LateralControlLaw::NormalLaw);
        word.set(14, lateral_capability == LateralControlLaw::DirectLaw);
        word.set(17, self.sidestick.left_stick_disabled());
        word.set(18, self.sidestick.right_stick_disabled());
        word.set(19, self.sidestick.left_stick_priority_locked());
        word.set(20, self.sidestick.right_stick_priority_locked());
        word.set(21, self.ailerons.droop_active());
        word.set(
            22,
            !parameters.ap_disengaged(1).value() || !parameters.ap_disengaged(2).value(),
        );
        word.set(23, self.alpha_protection.alpha_protection_active());
        word.build(SignStatus::NormalOperation)
    }

    fn position_feedback_word(failed: bool, position: Angle) -> Arinc429Word<f64> {
        if failed {
            Arinc429Word::new(0., SignStatus::NoComputedData)
        } else {
            Arinc429Word::new_norm(position.get::<degree>())
        }
    }

    pub fn left_aileron_position_word(
        &self,
        parameters: &A320ElacParameterTable,
    ) -> Arinc429Word<f64> {
        Self::position_feedback_word(
            parameters.left_aileron_servo_failed().value(),
            parameters.left_aileron_position(),
        )
    }

    pub fn right_aileron_position_word(
        &self,
        parameters: &A320ElacParameterTable,
    ) -> Arinc429Word<f64> {
        Self::position_feedback_word(
            parameters.right_aileron_servo_failed().value(),
            parameters.right_aileron_position(),
        )
    }

    pub fn left_elevator_position_word(
        &self,
        parameters: &A320ElacParameterTable,
    ) -> Arinc429Word<f64> {
        Self::position_feedback_word(
            parameters.left_elevator_servo_failed().value(),
            parameters.left_elevator_position(),
        )
    }

    pub fn right_elevator_position_word(
        &self,
        parameters: &A320ElacParameterTable,
    ) -> Arinc429Word<f64> {
        Self::position_feedback_word(
            parameters.right_elevator_servo_failed().value(),
            parameters.right_elevator_position(),
        )
    }

    pub fn ths_position_word(&self, parameters: &A320ElacParameterTable) -> Arinc429Word<f64> {
        Self::position_feedback_word(
            parameters.ths_motor_fault().value(),
            parameters.ths_position(),
        )
    }

    pub fn left_sidestick_pitch_command_word(
        &self,
        parameters: &A320ElacParameterTable,
    ) -> Arinc429Word<f64> {
        Arinc429Word::new_norm(
            Self::PITCH_STICK_GAIN_DEG * parameters.capt_pitch_stick_pos().get::<ratio>(),
        )
    }

    pub fn right_sidestick_pitch_command_word(
        &self,
        parameters: &A320ElacParameterTable,
    ) -> Arinc429Word<f64> {
        Arinc429Word::new_norm(
            Self::PITCH_STICK_GAIN_DEG * parameters.fo_pitch_stick_pos().get::<ratio>(),
        )
    }

    pub fn left_sidestick_roll_command_word(
        &self,
        parameters: &A320ElacParameterTable,
    ) -> Arinc429Word<f64> {
        Arinc429Word::new_norm(
            Self::ROLL_STICK_GAIN_DEG * parameters.capt_roll_stick_pos().get::<ratio>(),
        )
    }

    pub fn right_sidestick_roll_command_word(
        &self,
        parameters: &A320ElacParameterTable,
    ) -> Arinc429Word<f64> {
        Arinc429Word::new_norm(
            Self::ROLL_STICK_GAIN_DEG * parameters.fo_roll_stick_pos().get::<ratio>(),
        )
    }

    pub fn rudder_pedal_position_word(
        &self,
        parameters: &A320ElacParameterTable,
    ) -> Arinc429Word<f64> {
        Arinc429Word::new_norm(
            Self::RUDDER_PEDAL_GAIN_DEG * parameters.rudder_pedal_pos().get::<ratio>(),
        )
    }

    /// The order for the single aileron this computer cannot drive itself, so the
    /// opposite computer can cross-command the surface.
    pub fn aileron_command_word(&self) -> Arinc429Word<f64> {
        let left_avail = self.engagement.left_aileron_avail();
        let right_avail = self.engagement.right_aileron_avail();
        if (!left_avail || !right_avail) && self.engagement.engaged_in_roll() {
            let command = if left_avail {
                self.ailerons.right_aileron_command()
            } else {
                self.ailerons.left_aileron_command()
            };
            Arinc429Word::new_norm(command.get::<degree>())
        } else {
            Arinc429Word::new(0., SignStatus::NoComputedData)
        }
    }

    pub fn roll_spoiler_command_word(&self) -> Arinc429Word<f64> {
        if self.engagement.engaged_in_roll() {
            Arinc429Word::new_norm(self.ailerons.roll_spoiler_command().get::<degree>())
        } else {
            Arinc429Word::new(0., SignStatus::NoComputedData)
        }
    }

    pub fn yaw_damper_command_word(&self) -> Arinc429Word<f64> {
        if self.law_resolution.active_lateral_law() == LateralControlLaw::NormalLaw {
            Arinc429Word::new_norm(self.ailerons.yaw_damper_command().get::<degree>())
        } else {
            Arinc429Word::new(0., SignStatus::NoComputedData)
        }
    }

    pub fn elevator_dual_pressurization_command_word(&self) -> Arinc429Word<f64> {
        if self.elevators.dual_pressurization_active() {
            Arinc429Word::new_norm(self.elevators.elevator_command().get::<degree>())
        } else {
            Arinc429Word::new(0., SignStatus::NoComputedData)
        }
    }
}

impl Default for A320ElacRuntime {
    fn default() -> Self {
        Self::new()
    }
}
