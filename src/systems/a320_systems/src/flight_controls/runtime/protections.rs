use std::time::Duration;

use systems::flight_controls::filters::SeededRateLimiter;
use systems::flight_controls::parameters::{Arinc429Parameter, Value};
use uom::si::angle::degree;
use uom::si::f64::*;
use uom::si::length::foot;
use uom::si::ratio::ratio;
use uom::si::velocity::knot;

use super::adirs::{AirDataConsolidation, InertialDataConsolidation};
use super::laws::LawResolution;
use super::phases::FlightPhases;
use super::radio::RadioHeightConsolidation;
use super::sidestick::SidestickPriority;
use super::{LateralControlLaw, PitchControlLaw};
use crate::flight_controls::parameters::*;

const MACH_BREAKPOINTS: [f64; 4] = [0., 0.5, 0.9, 1.];
const ALPHA_MAX_TABLE: [[f64; 4]; 6] = [
    [8.7, 8.7, 6.4, 6.4],
    [13.6, 13.6, 13.6, 13.6],
    [13.6, 13.6, 13.6, 13.6],
    [14.2, 14.2, 14.2, 14.2],
    [13.1, 13.1, 13.1, 13.1],
    [13.0, 13.0, 13.0, 13.0],
];
const ALPHA_PROT_TABLE: [[f64; 4]; 6] = [
    [6.5, 6.5, 4.6, 4.6],
    [11.7, 11.7, 11.7, 11.7],
    [11.7, 11.7, 11.7, 11.7],
    [11.9, 11.9, 11.9, 11.9],
    [11.0, 11.0, 11.0, 11.0],
    [10.6, 10.6, 10.6, 10.6],
];

/// Linear interpolation over a breakpoint table, clamped at both ends.
pub(super) fn interpolate(breakpoints: &[f64], values: &[f64], x: f64) -> f64 {
    if x <= breakpoints[0] {
        return values[0];
    }
    for i in 1..breakpoints.len() {
        if x <= breakpoints[i] {
            let t = (x - breakpoints[i - 1]) / (breakpoints[i] - breakpoints[i - 1]);
            return values[i - 1] + t * (values[i] - values[i - 1]);
        }
    }
    values[values.len() - 1]
}

/// Decodes the selected high lift configuration (0 = clean through 5 = full) from
/// the SFCC slat/flap system status word.
fn high_lift_configuration(word: &Arinc429Parameter<f64>) -> usize {
    if word.bit(17) {
        0
    } else if word.bit(18) && word.bit(26) {
        1
    } else if word.bit(18) {
        2
    } else if word.bit(19) {
        3
    } else if word.bit(20) {
        4
    } else if word.bit(21) {
        5
    } else {
        0
    }
}

/// The flight path angle relative to the airflow, in degrees. Derived from the pitch
/// attitude, bank angle and filtered angle of attack.
fn flight_path_angle(ir: &impl InertialDataConsolidation, alpha_filtered: Angle) -> f64 {
    ir.pitch_attitude().get::<degree>()
        - ir.roll_attitude().get::<degree>().to_radians().cos() * alpha_filtered.get::<degree>()
}

pub(super) trait AlphaLimits {
    fn alpha_max(&self) -> Angle;
    fn alpha_prot(&self) -> Angle;
    fn alpha_prot_threshold(&self) -> Angle;
}

/// Maintains the angle of attack limits for the current configuration and Mach. A
/// configuration change slews the limits at one degree per second rather than
/// stepping them. Right after liftoff the protection threshold is held at alpha max
/// for five seconds so a sharp rotation does not immediately trip the protection.
pub(super) struct AlphaLimitsActivation {
    alpha_max_limiter: SeededRateLimiter,
    alpha_prot_limiter: SeededRateLimiter,
    takeoff_event_time: Duration,
    alpha_max: Angle,
    alpha_prot: Angle,
    alpha_prot_threshold: Angle,
}

impl AlphaLimitsActivation {
    const THRESHOLD_HOLD_TIME: Duration = Duration::from_secs(5);

    pub fn new() -> Self {
        Self {
            alpha_max_limiter: SeededRateLimiter::new(1., -1.),
            alpha_prot_limiter: SeededRateLimiter::new(1., -1.),
            takeoff_event_time: Duration::ZERO,
            alpha_max: Angle::default(),
            alpha_prot: Angle::default(),
            alpha_prot_threshold: Angle::default(),
        }
    }

    pub fn update(
        &mut self,
        delta: Duration,
        elapsed: Duration,
        signals: &impl SlatFlapWords,
        adr: &impl AirDataConsolidation,
        phases: &impl FlightPhases,
    ) {
        let configuration = high_lift_configuration(signals.slat_flap_system_status_word(1));
        let mach = f64::from(adr.mach());
        self.alpha_max = Angle::new::<degree>(self.alpha_max_limiter.update(
            interpolate(&MACH_BREAKPOINTS, &ALPHA_MAX_TABLE[configuration], mach),
            delta,
        ));
        self.alpha_prot = Angle::new::<degree>(self.alpha_prot_limiter.update(
            interpolate(&MACH_BREAKPOINTS, &ALPHA_PROT_TABLE[configuration], mach),
            delta,
        ));

        if phases.on_ground() {
            self.takeoff_event_time = elapsed;
        }
        self.alpha_prot_threshold =
            if elapsed <= self.takeoff_event_time + Self::THRESHOLD_HOLD_TIME {
                self.alpha_max
            } else {
                self.alpha_prot
            };
    }

    pub fn reset(&mut self) {
        self.alpha_max_limiter.reset();
        self.alpha_prot_limiter.reset();
        self.takeoff_event_time = Duration::ZERO;
        self.alpha_max = Angle::default();
        self.alpha_prot = Angle::default();
        self.alpha_prot_threshold = Angle::default();
    }
}

impl AlphaLimits for AlphaLimitsActivation {
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

pub(super) trait HighSpeedProtection {
    fn high_speed_protection_active(&self) -> bool;
    fn lo_threshold(&self) -> Velocity;
    fn hi_threshold(&self) -> Velocity;
}

/// Arms the high speed protection once the airspeed exceeds an entry threshold that
/// tightens with a descending flight path, and keeps it active until the speed has
/// dropped back below VMO. Only armed while a normal law is flown with both
/// autopilots off.
pub(super) struct HighSpeedProtectionActivation {
    active: bool,
    lo_threshold: Velocity,
    hi_threshold: Velocity,
}

impl HighSpeedProtectionActivation {
    const ENTRY_SPEED_BREAKPOINTS: [f64; 4] = [-4., -3., -1., 0.];
    const ENTRY_SPEED_TABLE: [f64; 4] = [350., 350., 356., 356.];
    const ENTRY_MACH_TABLE: [f64; 4] = [0.82, 0.82, 0.83, 0.83];

    pub fn new() -> Self {
        Self {
            active: false,
            lo_threshold: Velocity::default(),
            hi_threshold: Velocity::default(),
        }
    }

    pub fn update(
        &mut self,
        signals: &impl ApDisengaged,
        adr: &impl AirDataConsolidation,
        ir: &impl InertialDataConsolidation,
        laws: &impl LawResolution,
    ) {
        let speed = adr.computed_speed().get::<knot>();
        let mach = f64::from(adr.mach());
        let speed_of_sound_estimate = speed / mach;
        self.lo_threshold = Velocity::new::<knot>((speed_of_sound_estimate * 0.82).min(350.));
        self.hi_threshold = Velocity::new::<knot>((speed_of_sound_estimate * 0.88).min(380.));

        let gamma = flight_path_angle(ir, adr.alpha_filtered());
        let entry_threshold = interpolate(
            &Self::ENTRY_SPEED_BREAKPOINTS,
            &Self::ENTRY_SPEED_TABLE,
            gamma,
        )
        .min(
            speed_of_sound_estimate
                * interpolate(
                    &Self::ENTRY_SPEED_BREAKPOINTS,
                    &Self::ENTRY_MACH_TABLE,
                    gamma,
                ),
        );

        let ap_both_off =
            signals.ap_disengaged(1).value() && signals.ap_disengaged(2).value();
        let law_normal_either = laws.active_pitch_law() == PitchControlLaw::NormalLaw
            || laws.active_lateral_law() == LateralControlLaw::NormalLaw;

        if ap_both_off && speed > entry_threshold {
            self.active = law_normal_either || self.active;
        }
        self.active = Velocity::new::<knot>(speed) >= self.lo_threshold
            && ap_both_off
            && law_normal_either
            && self.active;
    }

    pub fn reset(&mut self) {
        self.active = false;
        self.lo_threshold = Velocity::default();
        self.hi_threshold = Velocity::default();
    }
}

impl HighSpeedProtection for HighSpeedProtectionActivation {
    fn high_speed_protection_active(&self) -> bool {
        self.active
    }

    fn lo_threshold(&self) -> Velocity {
        self.lo_threshold
    }

    fn hi_threshold(&self) -> Velocity {
        self.hi_threshold
    }
}

pub(super) trait AlphaProtection {
    fn alpha_protection_active(&self) -> bool;
}

/// Latches the angle of attack protection when the filtered alpha exceeds the
/// protection threshold in flight under a normal law. The latch releases when the
/// pilot has held the stick forward for half a second, unless the aircraft is low
/// with the alpha still close to the threshold.
pub(super) struct AlphaProtectionActivation {
    reset_event_time: Duration,
    active: bool,
}

impl AlphaProtectionActivation {
    const ARMING_TIME: Duration = Duration::from_secs(10);

    pub fn new() -> Self {
        Self {
            reset_event_time: Duration::ZERO,
            active: false,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        elapsed: Duration,
        signals: &impl ApDisengaged,
        adr: &impl AirDataConsolidation,
        ra: &impl RadioHeightConsolidation,
        phases: &impl FlightPhases,
        sidestick: &impl SidestickPriority,
        laws: &impl LawResolution,
        limits: &impl AlphaLimits,
    ) {
        let alpha = adr.alpha_filtered().get::<degree>();
        let threshold = limits.alpha_prot_threshold().get::<degree>();
        let pitch_order = sidestick.pitch_command().get::<ratio>();

        if pitch_order >= -0.03125 || alpha >= limits.alpha_max().get::<degree>() {
            self.reset_event_time = elapsed;
        }

        let ap_both_off =
            signals.ap_disengaged(1).value() && signals.ap_disengaged(2).value();
        let law_normal_either = laws.active_pitch_law() == PitchControlLaw::NormalLaw
            || laws.active_lateral_law() == LateralControlLaw::NormalLaw;

        if !phases.on_ground()
            && law_normal_either
            && ap_both_off
            && alpha > threshold
            && elapsed > Self::ARMING_TIME
        {
            self.active = true;
        }
        self.active = elapsed - self.reset_event_time <= Duration::from_millis(500)
            && pitch_order >= -0.5
            && (ra.radio_height() >= Length::new::<foot>(200.)
                || pitch_order >= 0.5
                || alpha >= threshold - 2.)
            && !phases.on_ground()
            && law_normal_either
            && self.active;
    }

    pub fn reset(&mut self) {
        self.reset_event_time = Duration::ZERO;
        self.active = false;
    }
}

impl AlphaProtection for AlphaProtectionActivation {
    fn alpha_protection_active(&self) -> bool {
        self.active
    }
}

pub(super) trait LandingPhase {
    /// Whether the aircraft has descended through 100 ft towards a landing and is
    /// still below.
    fn below_100_ft_on_approach(&self) -> bool;
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum LandingState {
    Landed,
    Flying,
    Landing100Ft,
    Takeoff100Ft,
}

/// Distinguishes descending through 100 ft on an approach from climbing through it
/// after takeoff, so the alpha floor can be more aggressive close to a landing.
pub(super) struct LandingPhaseActivation {
    state: LandingState,
}

impl LandingPhaseActivation {
    pub fn new() -> Self {
        Self {
            state: LandingState::Landed,
        }
    }

    pub fn update(&mut self, phases: &impl FlightPhases, ra: &impl RadioHeightConsolidation) {
        let height = ra.radio_height().get::<foot>();
        self.state = match self.state {
            LandingState::Flying => {
                if height < 100. {
                    LandingState::Landing100Ft
                } else if phases.on_ground() {
                    LandingState::Landed
                } else {
                    LandingState::Flying
                }
            }
            LandingState::Landed => {
                if !phases.on_ground() {
                    LandingState::Takeoff100Ft
                } else {
                    LandingState::Landed
                }
            }
            LandingState::Landing100Ft => {
                if height > 100. {
                    LandingState::Flying
                } else if phases.on_ground() {
                    LandingState::Landed
                } else {
                    LandingState::Landing100Ft
                }
            }
            LandingState::Takeoff100Ft => {
                if phases.on_ground() {
                    LandingState::Landed
                } else if height > 100. {
                    LandingState::Flying
                } else {
                    LandingState::Takeoff100Ft
                }
            }
        };
    }

    pub fn reset(&mut self) {
        self.state = LandingState::Landed;
    }
}

impl LandingPhase for LandingPhaseActivation {
    fn below_100_ft_on_approach(&self) -> bool {
        self.state == LandingState::Landing100Ft
    }
}

pub(super) trait ApDisconnectProtection {
    fn protection_ap_disconnect(&self) -> bool;
}

/// Decides when the protections force the autopilots off: a latched alpha or high
/// speed protection, the filtered alpha well past the protection threshold, or a
/// sustained overspeed.
pub(super) struct ApDisconnectMonitorActivation {
    overspeed_event_time: Duration,
    protection_ap_disconnect: bool,
}

impl ApDisconnectMonitorActivation {
    const OVERSPEED_MACH_BREAKPOINTS: [f64; 4] = [-4., -3., -1., 0.];
    const OVERSPEED_MACH_TABLE: [f64; 4] = [0.82, 0.82, 0.85, 0.85];
    const OVERSPEED_DISCONNECT_TIME: Duration = Duration::from_secs(3);

    pub fn new() -> Self {
        Self {
            overspeed_event_time: Duration::ZERO,
            protection_ap_disconnect: false,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        elapsed: Duration,
        adr: &impl AirDataConsolidation,
        ir: &impl InertialDataConsolidation,
        phases: &impl FlightPhases,
        laws: &impl LawResolution,
        limits: &impl AlphaLimits,
        landing: &impl LandingPhase,
        high_speed: &impl HighSpeedProtection,
        alpha_protection: &impl AlphaProtection,
    ) {
        let speed = adr.computed_speed().get::<knot>();
        let mach = f64::from(adr.mach());
        let gamma = flight_path_angle(ir, adr.alpha_filtered());
        let overspeed_threshold = 365_f64.min(
            speed / mach
                * (interpolate(
                    &Self::OVERSPEED_MACH_BREAKPOINTS,
                    &Self::OVERSPEED_MACH_TABLE,
                    gamma,
                ) + 0.01),
        );

        let law_normal_either = laws.active_pitch_law() == PitchControlLaw::NormalLaw
            || laws.active_lateral_law() == LateralControlLaw::NormalLaw;
        let no_normal_law = laws.active_pitch_law() != PitchControlLaw::NormalLaw
            && laws.active_lateral_law() != LateralControlLaw::NormalLaw;
        if speed <= overspeed_threshold || no_normal_law {
            self.overspeed_event_time = elapsed;
        }

        let alpha = adr.alpha_filtered().get::<degree>();
        self.protection_ap_disconnect = (!phases.on_ground()
            && ((landing.below_100_ft_on_approach()
                && alpha > limits.alpha_max().get::<degree>())
                || alpha > limits.alpha_prot_threshold().get::<degree>() + 0.25)
            && law_normal_either)
            || elapsed - self.overspeed_event_time > Self::OVERSPEED_DISCONNECT_TIME
            || high_speed.high_speed_protection_active()
            || alpha_protection.alpha_protection_active();
    }

    pub fn reset(&mut self) {
        self.overspeed_event_time = Duration::ZERO;
        self.protection_ap_disconnect = false;
    }
}

impl ApDisconnectProtection for ApDisconnectMonitorActivation {
    fn protection_ap_disconnect(&self) -> bool {
        self.protection_ap_disconnect
    }
}
