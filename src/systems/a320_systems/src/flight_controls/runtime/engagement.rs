use systems::flight_controls::parameters::{SignStatusMatrix, Value};

use super::hydraulics::HydraulicPressurised;
use crate::flight_controls::parameters::*;

pub(super) trait Engagement {
    fn is_unit_1(&self) -> bool;
    fn left_aileron_avail(&self) -> bool;
    fn right_aileron_avail(&self) -> bool;
    fn left_elevator_avail(&self) -> bool;
    fn right_elevator_avail(&self) -> bool;
    fn ths_avail(&self) -> bool;
    fn can_engage_in_pitch(&self) -> bool;
    fn has_priority_in_pitch(&self) -> bool;
    fn engaged_in_pitch(&self) -> bool;
    fn can_engage_in_roll(&self) -> bool;
    fn has_priority_in_roll(&self) -> bool;
    fn engaged_in_roll(&self) -> bool;
    fn left_aileron_crosscommand_active(&self) -> bool;
    fn right_aileron_crosscommand_active(&self) -> bool;
}

/// Decides whether this computer takes the pitch and roll axes. Which surfaces each
/// unit can drive depends on its hydraulic supplies: ELAC 1 works the blue elevator
/// servos and the blue left/green right aileron servos, ELAC 2 the green/yellow
/// elevators and the green left/blue right ailerons. ELAC 2 owns the pitch axis by
/// default and ELAC 1 the roll axis, each yielding to the other when it loses its own
/// axis. A unit without roll priority can still drive a single aileron on behalf of
/// the opposite computer when that computer has lost the matching servo.
pub(super) struct EngagementActivation {
    is_unit_1: bool,
    left_aileron_avail: bool,
    right_aileron_avail: bool,
    left_elevator_avail: bool,
    right_elevator_avail: bool,
    ths_avail: bool,
    can_engage_in_pitch: bool,
    has_priority_in_pitch: bool,
    engaged_in_pitch: bool,
    can_engage_in_roll: bool,
    has_priority_in_roll: bool,
    engaged_in_roll: bool,
    left_aileron_crosscommand_active: bool,
    right_aileron_crosscommand_active: bool,
}

impl EngagementActivation {
    pub fn new() -> Self {
        Self {
            is_unit_1: false,
            left_aileron_avail: false,
            right_aileron_avail: false,
            left_elevator_avail: false,
            right_elevator_avail: false,
            ths_avail: false,
            can_engage_in_pitch: false,
            has_priority_in_pitch: false,
            engaged_in_pitch: false,
            can_engage_in_roll: false,
            has_priority_in_roll: false,
            engaged_in_roll: false,
            left_aileron_crosscommand_active: false,
            right_aileron_crosscommand_active: false,
        }
    }

    pub fn update(
        &mut self,
        signals: &(impl ElacIdentSide1
              + SurfaceServoFailures
              + ThsDiscretes
              + OppElacDiscretes
              + OppElacBus),
        hydraulics: &impl HydraulicPressurised,
    ) {
        self.is_unit_1 = signals.elac_ident_side1().value();
        let blue = hydraulics.blue_pressurised();
        let green = hydraulics.green_pressurised();
        let yellow = hydraulics.yellow_pressurised();

        self.left_elevator_avail = !signals.left_elevator_servo_failed().value()
            && if self.is_unit_1 { blue } else { green };
        self.right_elevator_avail = !signals.right_elevator_servo_failed().value()
            && if self.is_unit_1 { blue } else { yellow };
        let ths_motor_fault = signals.ths_motor_fault().value();
        self.ths_avail = !ths_motor_fault && (yellow || green);

        let pitch_hydraulics_capability = if self.is_unit_1 {
            blue
        } else {
            (yellow && green) || (!blue && (green || yellow))
        };
        self.can_engage_in_pitch = !signals.right_elevator_servo_failed().value()
            && !signals.left_elevator_servo_failed().value()
            && !ths_motor_fault
            && pitch_hydraulics_capability;
        self.has_priority_in_pitch = !self.is_unit_1 || signals.opp_axis_pitch_failure().value();
        self.engaged_in_pitch = self.can_engage_in_pitch && self.has_priority_in_pitch;

        self.left_aileron_avail = !signals.left_aileron_servo_failed().value()
            && if self.is_unit_1 { blue } else { green };
        self.right_aileron_avail = !signals.right_aileron_servo_failed().value()
            && if self.is_unit_1 { green } else { blue };
        self.can_engage_in_roll = self.left_aileron_avail || self.right_aileron_avail;
        let opp_left_lost = signals.opp_left_aileron_lost().value();
        let opp_right_lost = signals.opp_right_aileron_lost().value();
        self.has_priority_in_roll = self.is_unit_1 || (opp_left_lost && opp_right_lost);

        if !self.is_unit_1
            && !self.has_priority_in_roll
            && signals.opp_aileron_command().is_no()
        {
            self.left_aileron_crosscommand_active = opp_left_lost && self.left_aileron_avail;
            self.right_aileron_crosscommand_active = opp_right_lost && self.right_aileron_avail;
        } else {
            self.left_aileron_crosscommand_active = false;
            self.right_aileron_crosscommand_active = false;
        }

        self.engaged_in_roll = self.can_engage_in_roll && self.has_priority_in_roll;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Engagement for EngagementActivation {
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
