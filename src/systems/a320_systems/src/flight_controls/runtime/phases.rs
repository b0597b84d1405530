use std::time::Duration;

use systems::flight_controls::parameters::Value;
use uom::si::angle::degree;
use uom::si::f64::*;
use uom::si::length::foot;

use super::adirs::InertialDataConsolidation;
use super::radio::RadioHeightConsolidation;
use crate::flight_controls::parameters::*;

pub(super) trait FlightPhases {
    fn on_ground(&self) -> bool;
    fn in_flight(&self) -> bool;
    fn tracking_mode_on(&self) -> bool;
    fn ground_spoilers_out(&self) -> bool;
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum GroundFlightState {
    Ground,
    Flight,
    FlightToGroundTransition,
}

/// Determines whether the aircraft is on the ground and drives the debounced
/// ground/flight discrete. Touchdown is only committed after the aircraft has been
/// continuously on the ground for several seconds with a low pitch attitude, so a
/// bounced landing or a firm derotation does not flicker the flight controls back
/// into their ground behavior.
pub(super) struct FlightPhasesActivation {
    state: GroundFlightState,
    on_ground_time: Duration,
    on_ground: bool,
    in_flight: bool,
    tracking_mode_on: bool,
    ground_spoilers_out: bool,
}

impl FlightPhasesActivation {
    const TOUCHDOWN_CONFIRMATION_TIME: Duration = Duration::from_secs(5);

    pub fn new() -> Self {
        Self {
            state: GroundFlightState::Ground,
            on_ground_time: Duration::ZERO,
            on_ground: false,
            in_flight: false,
            tracking_mode_on: false,
            ground_spoilers_out: false,
        }
    }

    pub fn update(
        &mut self,
        elapsed: Duration,
        signals: &(impl MainGearPressed + GroundSpoilersActive + SimStatus),
        ir: &impl InertialDataConsolidation,
        ra: &impl RadioHeightConsolidation,
    ) {
        let ra_low = ra.radio_height() < Length::new::<foot>(50.) && !ra.dual_ra_failure();
        let lgciu_1_on_ground = signals.left_main_gear_pressed(1).value()
            && signals.right_main_gear_pressed(1).value();
        let lgciu_2_on_ground = signals.left_main_gear_pressed(2).value()
            && signals.right_main_gear_pressed(2).value();
        self.ground_spoilers_out =
            signals.ground_spoilers_active(1).value() && signals.ground_spoilers_active(2).value();

        self.on_ground = (lgciu_1_on_ground && lgciu_2_on_ground)
            || ((lgciu_1_on_ground || lgciu_2_on_ground) && ra_low)
            || (ra_low && self.ground_spoilers_out);

        let pitch = ir.pitch_attitude().get::<degree>();
        match self.state {
            GroundFlightState::Ground => {
                if (!self.on_ground && pitch > 8.) || ra.radio_height() > Length::new::<foot>(400.)
                {
                    self.state = GroundFlightState::Flight;
                    self.in_flight = true;
                }
            }
            GroundFlightState::Flight => {
                if self.on_ground && pitch < 2.5 {
                    self.state = GroundFlightState::FlightToGroundTransition;
                    self.on_ground_time = elapsed;
                }
            }
            GroundFlightState::FlightToGroundTransition => {
                if !self.on_ground || pitch >= 2.5 {
                    self.state = GroundFlightState::Flight;
                } else if elapsed - self.on_ground_time >= Self::TOUCHDOWN_CONFIRMATION_TIME {
                    self.state = GroundFlightState::Ground;
                    self.in_flight = false;
                }
            }
        }

        self.tracking_mode_on =
            signals.slew_on() || signals.pause_on() || signals.tracking_mode_on_override();
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl FlightPhases for FlightPhasesActivation {
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
