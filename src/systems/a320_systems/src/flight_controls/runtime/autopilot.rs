use systems::flight_controls::parameters::{SignStatusMatrix, Value};
use uom::si::angle::degree;
use uom::si::f64::*;
use uom::si::ratio::ratio;

use super::adirs::InertialDataConsolidation;
use super::engagement::Engagement;
use super::protections::ApDisconnectProtection;
use super::sidestick::SidestickPriority;
use crate::flight_controls::parameters::*;

pub(super) trait ApAuthorisation {
    fn ap_authorised(&self) -> bool;
}

pub(super) trait FmgcSourceSelection {
    fn ap_1_control(&self) -> bool;
    fn ap_2_control(&self) -> bool;
    fn any_ap_engaged(&self) -> bool;
    fn selected_roll_command(&self) -> Angle;
    fn selected_pitch_command(&self) -> Angle;
    fn selected_yaw_command(&self) -> Angle;
}

/// Selects which FMGC's commands are flown. An FMGC is in control when its autopilot
/// engage discrete is set and both its roll and pitch command words are valid; FMGC 1
/// wins when both are in control, and the FMGC 2 data passes through otherwise.
pub(super) struct FmgcSourceSelectionActivation {
    ap_1_control: bool,
    ap_2_control: bool,
    selected_roll_command: Angle,
    selected_pitch_command: Angle,
    selected_yaw_command: Angle,
}

impl FmgcSourceSelectionActivation {
    pub fn new() -> Self {
        Self {
            ap_1_control: false,
            ap_2_control: false,
            selected_roll_command: Angle::default(),
            selected_pitch_command: Angle::default(),
            selected_yaw_command: Angle::default(),
        }
    }

    pub fn update(&mut self, signals: &(impl ApDisengaged + FmgcCommands)) {
        self.ap_1_control = !signals.ap_disengaged(1).value()
            && signals.fmgc_roll_command(1).is_no()
            && signals.fmgc_pitch_command(1).is_no();
        self.ap_2_control = !signals.ap_disengaged(2).value()
            && signals.fmgc_roll_command(2).is_no()
            && signals.fmgc_pitch_command(2).is_no();

        let source = if self.ap_1_control { 1 } else { 2 };
        self.selected_roll_command = signals.fmgc_roll_command(source).value();
        self.selected_pitch_command = signals.fmgc_pitch_command(source).value();
        self.selected_yaw_command = signals.fmgc_yaw_command(source).value();
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl FmgcSourceSelection for FmgcSourceSelectionActivation {
    fn ap_1_control(&self) -> bool {
        self.ap_1_control
    }

    fn ap_2_control(&self) -> bool {
        self.ap_2_control
    }

    fn any_ap_engaged(&self) -> bool {
        self.ap_1_control || self.ap_2_control
    }

    fn selected_roll_command(&self) -> Angle {
        self.selected_roll_command
    }

    fn selected_pitch_command(&self) -> Angle {
        self.selected_pitch_command
    }

    fn selected_yaw_command(&self) -> Angle {
        self.selected_yaw_command
    }
}

/// Tells the FMGCs whether the autopilots may be engaged: no meaningful pilot input
/// on sticks or pedals, a reasonable attitude, this computer healthy on the axes it
/// owns, and no protection demanding the autopilots stay off.
pub(super) struct ApAuthorisationActivation {
    ap_authorised: bool,
}

impl ApAuthorisationActivation {
    pub fn new() -> Self {
        Self {
            ap_authorised: false,
        }
    }

    pub fn update(
        &mut self,
        signals: &impl RudderPedalPosition,
        ir: &impl InertialDataConsolidation,
        sidestick: &impl SidestickPriority,
        engagement: &impl Engagement,
        protection: &impl ApDisconnectProtection,
    ) {
        let pitch = ir.pitch_attitude().get::<degree>();
        let roll = ir.roll_attitude().get::<degree>();
        self.ap_authorised = sidestick.pitch_command().get::<ratio>().abs() <= 0.5
            && sidestick.roll_command().get::<ratio>().abs() <= 0.5
            && signals.rudder_pedal_pos().get::<ratio>().abs() <= 0.4
            && pitch <= 25.
            && pitch >= -13.
            && roll.abs() <= 45.
            && (!engagement.has_priority_in_pitch() || engagement.can_engage_in_pitch())
            && (!engagement.has_priority_in_roll() || engagement.can_engage_in_roll())
            && !protection.protection_ap_disconnect();
    }

    pub fn reset(&mut self) {
        self.ap_authorised = false;
    }
}

impl ApAuthorisation for ApAuthorisationActivation {
    fn ap_authorised(&self) -> bool {
        self.ap_authorised
    }
}
