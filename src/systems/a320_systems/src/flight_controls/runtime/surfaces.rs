use std::time::Duration;

use systems::flight_controls::filters::{RateLimiter, ResettableRateLimiter};
use systems::flight_controls::logic::{MemoryNode, PulseNode};
use systems::flight_controls::parameters::{SignStatusMatrix, Value};
use systems::flight_controls::utils::EfcsSsm;
use uom::si::angle::degree;
use uom::si::angular_velocity::degree_per_second;
use uom::si::f64::*;
use uom::si::velocity::knot;

use super::adirs::{AirDataConsolidation, InertialDataConsolidation};
use super::engagement::Engagement;
use super::laws::{LawResolution, PitchLawCapability};
use super::phases::FlightPhases;
use super::protections::interpolate;
use super::{ControlLawOutputs, LateralControlLaw, PitchControlLaw};
use crate::flight_controls::parameters::*;

pub(super) trait AileronCommands {
    fn left_aileron_command(&self) -> Angle;
    fn right_aileron_command(&self) -> Angle;
    fn left_aileron_active_mode(&self) -> bool;
    fn right_aileron_active_mode(&self) -> bool;
    fn roll_spoiler_command(&self) -> Angle;
    fn yaw_damper_command(&self) -> Angle;
    fn droop_active(&self) -> bool;
}

/// Shapes the lateral law output into the two aileron servo orders. Both ailerons
/// droop by a few degrees with the slats retracted to augment lift, and deflect
/// sharply upwards as ground spoilers after touchdown. A cross-commanded aileron
/// instead follows the order the opposite computer puts on the bus. When a servo
/// loop is not driven by this computer the limiter tracks the measured surface
/// position so a later engagement takes over without a jump.
pub(super) struct AileronCommandActivation {
    droop_limiter: RateLimiter,
    antidroop_limiter: RateLimiter,
    left_limiter: ResettableRateLimiter,
    right_limiter: ResettableRateLimiter,
    left_aileron_command: Angle,
    right_aileron_command: Angle,
    left_aileron_active_mode: bool,
    right_aileron_active_mode: bool,
    roll_spoiler_command: Angle,
    yaw_damper_command: Angle,
    droop_active: bool,
}

impl AileronCommandActivation {
    const DROOP_DEG: f64 = 5.;
    const ANTIDROOP_DEG: f64 = -30.;
    const MAX_DEFLECTION_DEG: f64 = 25.;

    pub fn new() -> Self {
        Self {
            droop_limiter: RateLimiter::new(1., -1., 0.),
            antidroop_limiter: RateLimiter::new(20., -20., 0.),
            left_limiter: ResettableRateLimiter::new(50., -50.),
            right_limiter: ResettableRateLimiter::new(50., -50.),
            left_aileron_command: Angle::default(),
            right_aileron_command: Angle::default(),
            left_aileron_active_mode: false,
            right_aileron_active_mode: false,
            roll_spoiler_command: Angle::default(),
            yaw_damper_command: Angle::default(),
            droop_active: false,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        delta: Duration,
        signals: &(impl SlatFlapWords
              + OppElacDiscretes
              + OppElacBus
              + ApDisengaged
              + SurfacePositions),
        ir: &impl InertialDataConsolidation,
        phases: &impl FlightPhases,
        engagement: &impl Engagement,
        laws: &impl LawResolution,
        law_outputs: &ControlLawOutputs,
    ) {
        let slats_retracted = [1, 2].iter().any(|&index| {
            let word = signals.slat_flap_actual_position_word(index);
            !word.bit(19) && word.is_val()
        });
        self.droop_active = slats_retracted
            && ((engagement.left_aileron_avail() && engagement.right_aileron_avail())
                || (!signals.opp_left_aileron_lost().value() && engagement.right_aileron_avail())
                || (engagement.left_aileron_avail() && !signals.opp_right_aileron_lost().value()));
        let antidroop_active = phases.ground_spoilers_out()
            && slats_retracted
            && ir.pitch_attitude().get::<degree>() < 2.5
            && signals.ap_disengaged(1).value()
            && signals.ap_disengaged(2).value()
            && laws.active_lateral_law() == LateralControlLaw::NormalLaw;

        let droop_sum = self.droop_limiter.update(
            if self.droop_active { Self::DROOP_DEG } else { 0. },
            delta,
        ) + self.antidroop_limiter.update(
            if antidroop_active {
                Self::ANTIDROOP_DEG
            } else {
                0.
            },
            delta,
        );

        let roll_order = match laws.active_lateral_law() {
            LateralControlLaw::NormalLaw => law_outputs.lateral_normal.aileron_command,
            LateralControlLaw::DirectLaw => law_outputs.lateral_direct.aileron_command,
            LateralControlLaw::None => Angle::default(),
        }
        .get::<degree>();
        self.yaw_damper_command = match laws.active_lateral_law() {
            LateralControlLaw::NormalLaw => law_outputs.lateral_normal.yaw_damper_command,
            LateralControlLaw::DirectLaw => law_outputs.lateral_direct.yaw_damper_command,
            LateralControlLaw::None => Angle::default(),
        };

        let left_cross = engagement.left_aileron_crosscommand_active();
        let right_cross = engagement.right_aileron_crosscommand_active();
        let opp_order = signals.opp_aileron_command().value().get::<degree>();

        let left_raw = if left_cross {
            opp_order
        } else {
            -roll_order + droop_sum
        }
        .clamp(-Self::MAX_DEFLECTION_DEG, Self::MAX_DEFLECTION_DEG);
        self.left_aileron_command = Angle::new::<degree>(self.left_limiter.update(
            left_raw,
            delta,
            !left_cross && !engagement.engaged_in_roll(),
            signals.left_aileron_position().get::<degree>(),
        ));

        let right_raw = if right_cross {
            opp_order
        } else {
            roll_order + droop_sum
        }
        .clamp(-Self::MAX_DEFLECTION_DEG, Self::MAX_DEFLECTION_DEG);
        self.right_aileron_command = Angle::new::<degree>(self.right_limiter.update(
            right_raw,
            delta,
            !right_cross && !engagement.engaged_in_roll(),
            signals.right_aileron_position().get::<degree>(),
        ));

        self.left_aileron_active_mode =
            (engagement.engaged_in_roll() || left_cross) && engagement.left_aileron_avail();
        self.right_aileron_active_mode =
            (engagement.engaged_in_roll() || right_cross) && engagement.right_aileron_avail();

        let slats_extended = [1, 2].iter().any(|&index| {
            let word = signals.slat_flap_actual_position_word(index);
            word.bit(23) && word.is_val()
        });
        // With the slats retracted, small roll orders are absorbed by the ailerons
        // alone and the spoiler demand is steepened to compensate.
        let shaped = if slats_extended {
            roll_order
        } else {
            roll_order.signum() * (roll_order.abs() - 5.).clamp(0., 20.) * 1.25
        };
        self.roll_spoiler_command = Angle::new::<degree>(1.4 * shaped);
    }

    pub fn reset(&mut self) {
        self.droop_limiter.reset();
        self.antidroop_limiter.reset();
        self.left_limiter.reset();
        self.right_limiter.reset();
        self.left_aileron_command = Angle::default();
        self.right_aileron_command = Angle::default();
        self.left_aileron_active_mode = false;
        self.right_aileron_active_mode = false;
        self.roll_spoiler_command = Angle::default();
        self.yaw_damper_command = Angle::default();
        self.droop_active = false;
    }
}

impl AileronCommands for AileronCommandActivation {
    fn left_aileron_command(&self) -> Angle {
        self.left_aileron_command
    }

    fn right_aileron_command(&self) -> Angle {
        self.right_aileron_command
    }

    fn left_aileron_active_mode(&self) -> bool {
        self.left_aileron_active_mode
    }

    fn right_aileron_active_mode(&self) -> bool {
        self.right_aileron_active_mode
    }

    fn roll_spoiler_command(&self) -> Angle {
        self.roll_spoiler_command
    }

    fn yaw_damper_command(&self) -> Angle {
        self.yaw_damper_command
    }

    fn droop_active(&self) -> bool {
        self.droop_active
    }
}

pub(super) trait ElevatorCommands {
    fn elevator_command(&self) -> Angle;
    fn left_elevator_order(&self) -> Angle;
    fn right_elevator_order(&self) -> Angle;
    fn left_elevator_damping_mode(&self) -> bool;
    fn right_elevator_damping_mode(&self) -> bool;
    fn dual_pressurization_active(&self) -> bool;
    fn ths_rate_command(&self) -> AngularVelocity;
    fn trim_limit_up(&self) -> Angle;
    fn trim_limit_down(&self) -> Angle;
}

/// Shapes the pitch law output into the elevator servo orders. Large deflection
/// demands at low speed pressurize both servos of each elevator, which is announced
/// to the opposite computer over the bus; a computer that is not engaged in pitch
/// follows the engaged computer's dual pressurization order instead.
pub(super) struct ElevatorCommandActivation {
    elevator_command: Angle,
    left_elevator_order: Angle,
    right_elevator_order: Angle,
    left_elevator_damping_mode: bool,
    right_elevator_damping_mode: bool,
    dual_pressurization_active: bool,
    ths_rate_command: AngularVelocity,
    trim_limit_up: Angle,
    trim_limit_down: Angle,
}

impl ElevatorCommandActivation {
    const SPEED_BREAKPOINTS: [f64; 7] = [0., 180., 220., 280., 350., 400., 450.];
    const DUAL_PRESSURIZATION_THRESHOLD_DEG: [f64; 7] = [30., 30., 20., 12.4, 8., 6., 6.];
    const TRIM_LIMIT_UP_DEG: f64 = 3.5;
    const TRIM_LIMIT_DOWN_DEG: f64 = -11.;

    pub fn new() -> Self {
        Self {
            elevator_command: Angle::default(),
            left_elevator_order: Angle::default(),
            right_elevator_order: Angle::default(),
            left_elevator_damping_mode: false,
            right_elevator_damping_mode: false,
            dual_pressurization_active: false,
            ths_rate_command: AngularVelocity::default(),
            trim_limit_up: Angle::new::<degree>(Self::TRIM_LIMIT_UP_DEG),
            trim_limit_down: Angle::new::<degree>(Self::TRIM_LIMIT_DOWN_DEG),
        }
    }

    pub fn update(
        &mut self,
        signals: &(impl SecStatusWords + OppElacBus),
        adr: &impl AirDataConsolidation,
        engagement: &impl Engagement,
        laws: &impl LawResolution,
        law_outputs: &ControlLawOutputs,
    ) {
        let pitch_law = match laws.active_pitch_law() {
            PitchControlLaw::NormalLaw => Some(&law_outputs.pitch_normal),
            PitchControlLaw::AlternateLaw1 | PitchControlLaw::AlternateLaw2 => {
                Some(&law_outputs.pitch_alternate)
            }
            PitchControlLaw::DirectLaw => Some(&law_outputs.pitch_direct),
            PitchControlLaw::None => None,
        };
        match pitch_law {
            Some(outputs) => {
                self.elevator_command = outputs.elevator_command;
                self.ths_rate_command = outputs.ths_rate_command;
                self.trim_limit_up = outputs.trim_limit_up;
                self.trim_limit_down = outputs.trim_limit_down;
            }
            None => {
                self.elevator_command = Angle::default();
                self.ths_rate_command = AngularVelocity::default();
                self.trim_limit_up = Angle::new::<degree>(Self::TRIM_LIMIT_UP_DEG);
                self.trim_limit_down = Angle::new::<degree>(Self::TRIM_LIMIT_DOWN_DEG);
            }
        }

        let threshold = interpolate(
            &Self::SPEED_BREAKPOINTS,
            &Self::DUAL_PRESSURIZATION_THRESHOLD_DEG,
            adr.computed_speed().get::<knot>(),
        );
        self.dual_pressurization_active = threshold
            < self.elevator_command.get::<degree>().abs()
            && engagement.engaged_in_pitch();

        let opp_order = signals.opp_elevator_dual_pressurization_command();
        let accept_opp_order = !engagement.engaged_in_pitch() && opp_order.is_no();
        let order = if accept_opp_order {
            opp_order.value()
        } else {
            self.elevator_command
        };
        self.left_elevator_order = if (accept_opp_order || engagement.engaged_in_pitch())
            && engagement.left_elevator_avail()
        {
            order
        } else {
            Angle::default()
        };
        self.right_elevator_order = if (accept_opp_order || engagement.engaged_in_pitch())
            && engagement.right_elevator_avail()
        {
            order
        } else {
            Angle::default()
        };

        // The SEC that shares an elevator with this unit reports its own dual
        // pressurization in its status word.
        let shared_sec_word = if engagement.is_unit_1() {
            signals.sec_discrete_status_word_1(2)
        } else {
            signals.sec_discrete_status_word_1(1)
        };
        let opp_word = signals.opp_discrete_status_word_1();
        self.left_elevator_damping_mode = engagement.engaged_in_pitch()
            && engagement.left_elevator_avail()
            && !(self.dual_pressurization_active && (opp_word.bit(17) || shared_sec_word.bit(17)));
        self.right_elevator_damping_mode = engagement.engaged_in_pitch()
            && engagement.right_elevator_avail()
            && !(self.dual_pressurization_active && (opp_word.bit(18) || shared_sec_word.bit(18)));
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl ElevatorCommands for ElevatorCommandActivation {
    fn elevator_command(&self) -> Angle {
        self.elevator_command
    }

    fn left_elevator_order(&self) -> Angle {
        self.left_elevator_order
    }

    fn right_elevator_order(&self) -> Angle {
        self.right_elevator_order
    }

    fn left_elevator_damping_mode(&self) -> bool {
        self.left_elevator_damping_mode
    }

    fn right_elevator_damping_mode(&self) -> bool {
        self.right_elevator_damping_mode
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

pub(super) trait ThsCommand {
    fn ths_active(&self) -> bool;
    fn ths_position_order(&self) -> Angle;
}

/// Integrates the trim rate commanded by the pitch law into a THS position order.
/// After touchdown the stabilizer is driven back towards neutral. While the THS is
/// not commanded the integrator tracks the measured position, and a manual trim
/// wheel input overrides the automatic trim entirely.
pub(super) struct ThsCommandActivation {
    touchdown_pulse: PulseNode,
    ground_setting_memory: MemoryNode,
    integrator_state_deg: f64,
    ths_active: bool,
    ths_position_order: Angle,
}

impl ThsCommandActivation {
    const GROUND_SETTING_RATE_LIMIT_DEG_S: f64 = 0.7;

    pub fn new() -> Self {
        Self {
            touchdown_pulse: PulseNode::new_falling(),
            ground_setting_memory: MemoryNode::new(false),
            integrator_state_deg: 0.,
            ths_active: false,
            ths_position_order: Angle::default(),
        }
    }

    pub fn update(
        &mut self,
        delta: Duration,
        signals: &(impl ThsDiscretes + OppElacDiscretes + SurfacePositions),
        phases: &impl FlightPhases,
        engagement: &impl Engagement,
        laws: &impl LawResolution,
        pitch_capability: &impl PitchLawCapability,
        elevator: &impl ElevatorCommands,
    ) {
        let touchdown = self.touchdown_pulse.update(phases.in_flight());
        let ths_override = signals.ths_override_active().value();
        let engage_condition = engagement.ths_avail()
            && engagement.can_engage_in_pitch()
            && (engagement.is_unit_1() || signals.opp_axis_pitch_failure().value());
        let position = signals.ths_position().get::<degree>();
        let ground_setting_active = engage_condition
            && self.ground_setting_memory.update(
                touchdown,
                !engage_condition || position.abs() <= 0.02 || ths_override,
            );

        let active_commanded = (engagement.engaged_in_pitch()
            && phases.in_flight()
            && laws.active_pitch_law() != PitchControlLaw::DirectLaw
            && !pitch_capability.abnormal_condition())
            || ground_setting_active;

        let rate_deg_s = if ground_setting_active {
            (-2. * self.integrator_state_deg).clamp(
                -Self::GROUND_SETTING_RATE_LIMIT_DEG_S,
                Self::GROUND_SETTING_RATE_LIMIT_DEG_S,
            )
        } else if ths_override {
            0.
        } else {
            elevator.ths_rate_command().get::<degree_per_second>()
        };
        let increment = rate_deg_s * delta.as_secs_f64();
        if !active_commanded {
            self.integrator_state_deg = position - increment;
        }
        self.integrator_state_deg = (self.integrator_state_deg + increment).clamp(
            elevator.trim_limit_down().get::<degree>(),
            elevator.trim_limit_up().get::<degree>(),
        );

        self.ths_active = active_commanded && engagement.ths_avail();
        self.ths_position_order = if self.ths_active {
            Angle::new::<degree>(self.integrator_state_deg)
        } else {
            Angle::default()
        };
    }

    pub fn reset(&mut self) {
        self.touchdown_pulse.reset();
        self.ground_setting_memory.reset();
        self.integrator_state_deg = 0.;
        self.ths_active = false;
        self.ths_position_order = Angle::default();
    }
}

impl ThsCommand for ThsCommandActivation {
    fn ths_active(&self) -> bool {
        self.ths_active
    }

    fn ths_position_order(&self) -> Angle {
        self.ths_position_order
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;
    use crate::flight_controls::test::*;
    use systems::flight_controls::parameters::DiscreteParameter;

    fn roll_law_outputs(aileron_deg: f64) -> ControlLawOutputs {
        ControlLawOutputs {
            lateral_normal: super::super::LateralLawOutputs {
                aileron_command: Angle::new::<degree>(aileron_deg),
                yaw_damper_command: Angle::default(),
            },
            ..Default::default()
        }
    }

    mod aileron_command_tests {
        use super::*;

        #[test]
        fn deflects_the_ailerons_antisymmetrically() {
            let test_bed = test_bed_with().slats_extended();
            let mut activation = AileronCommandActivation::new();
            // A large delta lets the rate limiter reach the demand in one step.
            activation.update(
                Duration::from_secs(1),
                test_bed.parameters(),
                &FakeInertial::level_flight(),
                &FakePhases::flying(),
                &FakeEngagement::engaged_everywhere(),
                &FakeLawResolution::normal(),
                &roll_law_outputs(10.),
            );
            assert!((activation.left_aileron_command().get::<degree>() + 10.).abs() < 1e-10);
            assert!((activation.right_aileron_command().get::<degree>() - 10.).abs() < 1e-10);
            assert!(activation.left_aileron_active_mode());
            assert!(activation.right_aileron_active_mode());
        }

        #[test]
        fn droops_both_ailerons_with_the_slats_retracted() {
            let test_bed = test_bed_with().slats_retracted();
            let mut activation = AileronCommandActivation::new();
            for _ in 0..10 {
                activation.update(
                    Duration::from_secs(1),
                    test_bed.parameters(),
                    &FakeInertial::level_flight(),
                    &FakePhases::flying(),
                    &FakeEngagement::engaged_everywhere(),
                    &FakeLawResolution::normal(),
                    &roll_law_outputs(0.),
                );
            }
            assert!(activation.droop_active());
            assert!((activation.left_aileron_command().get::<degree>() - 5.).abs() < 1e-10);
            assert!((activation.right_aileron_command().get::<degree>() - 5.).abs() < 1e-10);
        }

        #[test]
        fn tracks_the_measured_position_while_not_engaged() {
            let mut test_bed = test_bed_with().slats_extended();
            test_bed.set_left_aileron_position(Angle::new::<degree>(-3.));
            let engagement = FakeEngagement {
                engaged_in_roll: false,
                ..FakeEngagement::fully_available()
            };
            let mut activation = AileronCommandActivation::new();
            activation.update(
                Duration::from_secs(1),
                test_bed.parameters(),
                &FakeInertial::level_flight(),
                &FakePhases::flying(),
                &engagement,
                &FakeLawResolution::none(),
                &roll_law_outputs(10.),
            );
            assert!((activation.left_aileron_command().get::<degree>() + 3.).abs() < 1e-10);
            assert!(!activation.left_aileron_active_mode());
        }

        #[test]
        fn clamps_the_order_to_the_surface_stop() {
            let test_bed = test_bed_with().slats_extended();
            let mut activation = AileronCommandActivation::new();
            activation.update(
                Duration::from_secs(1),
                test_bed.parameters(),
                &FakeInertial::level_flight(),
                &FakePhases::flying(),
                &FakeEngagement::engaged_everywhere(),
                &FakeLawResolution::normal(),
                &roll_law_outputs(40.),
            );
            assert!((activation.right_aileron_command().get::<degree>() - 25.).abs() < 1e-10);
        }

        #[test]
        fn a_cross_commanded_aileron_follows_the_opposite_computer() {
            let mut test_bed = test_bed_with().slats_extended();
            test_bed.set_opp_aileron_command(Arinc429Parameter::new(Angle::new::<degree>(7.)));
            let engagement = FakeEngagement {
                engaged_in_roll: false,
                left_aileron_crosscommand_active: true,
                ..FakeEngagement::fully_available()
            };
            let mut activation = AileronCommandActivation::new();
            activation.update(
                Duration::from_secs(1),
                test_bed.parameters(),
                &FakeInertial::level_flight(),
                &FakePhases::flying(),
                &engagement,
                &FakeLawResolution::none(),
                &roll_law_outputs(0.),
            );
            assert!((activation.left_aileron_command().get::<degree>() - 7.).abs() < 1e-10);
            assert!(activation.left_aileron_active_mode());
        }

        #[test]
        fn shapes_the_roll_spoiler_demand_when_clean() {
            let test_bed = test_bed_with().slats_retracted();
            let mut activation = AileronCommandActivation::new();
            activation.update(
                Duration::from_secs(1),
                test_bed.parameters(),
                &FakeInertial::level_flight(),
                &FakePhases::flying(),
                &FakeEngagement::engaged_everywhere(),
                &FakeLawResolution::normal(),
                &roll_law_outputs(13.),
            );
            // (13 - 5) * 1.25 * 1.4
            assert!((activation.roll_spoiler_command().get::<degree>() - 14.).abs() < 1e-10);
        }

        #[test]
        fn passes_the_roll_order_to_the_spoilers_with_slats_extended() {
            let test_bed = test_bed_with().slats_extended();
            let mut activation = AileronCommandActivation::new();
            activation.update(
                Duration::from_secs(1),
                test_bed.parameters(),
                &FakeInertial::level_flight(),
                &FakePhases::flying(),
                &FakeEngagement::engaged_everywhere(),
                &FakeLawResolution::normal(),
                &roll_law_outputs(13.),
            );
            assert!((activation.roll_spoiler_command().get::<degree>() - 18.2).abs() < 1e-10);
        }
    }

    mod elevator_command_tests {
        use super::*;
        use uom::si::velocity::knot;

        fn pitch_law_outputs(elevator_deg: f64) -> ControlLawOutputs {
            ControlLawOutputs {
                pitch_normal: super::super::super::PitchLawOutputs {
                    elevator_command: Angle::new::<degree>(elevator_deg),
                    ths_rate_command: AngularVelocity::default(),
                    trim_limit_up: Angle::new::<degree>(3.5),
                    trim_limit_down: Angle::new::<degree>(-11.),
                },
                ..Default::default()
            }
        }

        fn cruise_adr() -> FakeAirData {
            FakeAirData {
                computed_speed: Velocity::new::<knot>(250.),
                ..Default::default()
            }
        }

        #[test]
        fn drives_both_elevators_with_the_law_output() {
            let test_bed = test_bed_with().healthy_peer_computers();
            let mut activation = ElevatorCommandActivation::new();
            activation.update(
                test_bed.parameters(),
                &cruise_adr(),
                &FakeEngagement::engaged_everywhere(),
                &FakeLawResolution::normal(),
                &pitch_law_outputs(4.),
            );
            assert!((activation.left_elevator_order().get::<degree>() - 4.).abs() < 1e-10);
            assert!((activation.right_elevator_order().get::<degree>() - 4.).abs() < 1e-10);
            assert!(!activation.dual_pressurization_active());
            assert!(activation.left_elevator_damping_mode());
        }

        #[test]
        fn a_large_demand_pressurizes_both_servos() {
            let test_bed = test_bed_with().healthy_peer_computers();
            let mut activation = ElevatorCommandActivation::new();
            activation.update(
                test_bed.parameters(),
                &cruise_adr(),
                &FakeEngagement::engaged_everywhere(),
                &FakeLawResolution::normal(),
                &pitch_law_outputs(-20.),
            );
            assert!(activation.dual_pressurization_active());
        }

        #[test]
        fn follows_the_opposite_computers_dual_pressurization_order() {
            let mut test_bed = test_bed_with().healthy_peer_computers();
            test_bed.set_opp_elevator_dual_pressurization_command(Arinc429Parameter::new(
                Angle::new::<degree>(-15.),
            ));
            let engagement = FakeEngagement {
                engaged_in_pitch: false,
                ..FakeEngagement::fully_available()
            };
            let mut activation = ElevatorCommandActivation::new();
            activation.update(
                test_bed.parameters(),
                &cruise_adr(),
                &engagement,
                &FakeLawResolution::none(),
                &pitch_law_outputs(0.),
            );
            assert!((activation.left_elevator_order().get::<degree>() + 15.).abs() < 1e-10);
        }

        #[test]
        fn a_detached_axis_orders_nothing() {
            let test_bed = test_bed_with().healthy_peer_computers();
            let engagement = FakeEngagement {
                engaged_in_pitch: false,
                ..FakeEngagement::fully_available()
            };
            let mut activation = ElevatorCommandActivation::new();
            activation.update(
                test_bed.parameters(),
                &cruise_adr(),
                &engagement,
                &FakeLawResolution::none(),
                &pitch_law_outputs(4.),
            );
            assert!(activation.left_elevator_order().get::<degree>().abs() < 1e-10);
            assert!(!activation.left_elevator_damping_mode());
        }
    }

    mod ths_command_tests {
        use super::*;
        use uom::si::angular_velocity::degree_per_second;

        fn trim_up_elevator() -> FakeElevator {
            FakeElevator {
                ths_rate_command: AngularVelocity::new::<degree_per_second>(0.5),
                trim_limit_up: Angle::new::<degree>(3.5),
                trim_limit_down: Angle::new::<degree>(-11.),
                ..Default::default()
            }
        }

        #[test]
        fn integrates_the_commanded_trim_rate() {
            let mut test_bed = test_bed_with();
            test_bed.set_ths_position(Angle::new::<degree>(1.));
            let mut activation = ThsCommandActivation::new();
            // While the axis runs the direct law the integrator tracks the
            // measured position and the THS stays passive.
            activation.update(
                Duration::from_millis(100),
                test_bed.parameters(),
                &FakePhases::flying(),
                &FakeEngagement::engaged_everywhere(),
                &FakeLawResolution::degraded(),
                &FakePitchCapability::normal(),
                &trim_up_elevator(),
            );
            assert!(!activation.ths_active());

            for _ in 0..10 {
                activation.update(
                    Duration::from_millis(100),
                    test_bed.parameters(),
                    &FakePhases::flying(),
                    &FakeEngagement::engaged_everywhere(),
                    &FakeLawResolution::normal(),
                    &FakePitchCapability::normal(),
                    &trim_up_elevator(),
                );
            }
            assert!(activation.ths_active());
            assert!((activation.ths_position_order().get::<degree>() - 1.5).abs() < 1e-10);
        }

        #[test]
        fn clamps_at_the_trim_limit() {
            let mut test_bed = test_bed_with();
            test_bed.set_ths_position(Angle::new::<degree>(3.4));
            let mut activation = ThsCommandActivation::new();
            activation.update(
                Duration::from_millis(100),
                test_bed.parameters(),
                &FakePhases::flying(),
                &FakeEngagement::engaged_everywhere(),
                &FakeLawResolution::degraded(),
                &FakePitchCapability::normal(),
                &trim_up_elevator(),
            );
            for _ in 0..20 {
                activation.update(
                    Duration::from_millis(100),
                    test_bed.parameters(),
                    &FakePhases::flying(),
                    &FakeEngagement::engaged_everywhere(),
                    &FakeLawResolution::normal(),
                    &FakePitchCapability::normal(),
                    &trim_up_elevator(),
                );
            }
            assert!((activation.ths_position_order().get::<degree>() - 3.5).abs() < 1e-10);
        }

        #[test]
        fn does_not_trim_in_the_direct_law() {
            let test_bed = test_bed_with();
            let mut activation = ThsCommandActivation::new();
            activation.update(
                Duration::from_millis(100),
                test_bed.parameters(),
                &FakePhases::flying(),
                &FakeEngagement::engaged_everywhere(),
                &FakeLawResolution::degraded(),
                &FakePitchCapability::normal(),
                &trim_up_elevator(),
            );
            assert!(!activation.ths_active());
            assert!(activation.ths_position_order().get::<degree>().abs() < 1e-10);
        }

        #[test]
        fn a_manual_override_stops_the_automatic_trim() {
            let mut test_bed = test_bed_with();
            test_bed.set_ths_position(Angle::new::<degree>(1.));
            let mut activation = ThsCommandActivation::new();
            activation.update(
                Duration::from_millis(100),
                test_bed.parameters(),
                &FakePhases::flying(),
                &FakeEngagement::engaged_everywhere(),
                &FakeLawResolution::degraded(),
                &FakePitchCapability::normal(),
                &trim_up_elevator(),
            );
            test_bed.set_ths_override_active(DiscreteParameter::new(true));
            for _ in 0..10 {
                activation.update(
                    Duration::from_millis(100),
                    test_bed.parameters(),
                    &FakePhases::flying(),
                    &FakeEngagement::engaged_everywhere(),
                    &FakeLawResolution::normal(),
                    &FakePitchCapability::normal(),
                    &trim_up_elevator(),
                );
            }
            // The integrator keeps tracking the measured position.
            assert!((activation.ths_position_order().get::<degree>() - 1.).abs() < 1e-10);
        }

        #[test]
        fn resets_the_stabilizer_after_touchdown() {
            let mut test_bed = test_bed_with().as_elac_1();
            test_bed.set_ths_position(Angle::new::<degree>(2.));
            let mut activation = ThsCommandActivation::new();
            activation.update(
                Duration::from_millis(100),
                test_bed.parameters(),
                &FakePhases::flying(),
                &FakeEngagement::engaged_everywhere(),
                &FakeLawResolution::normal(),
                &FakePitchCapability::normal(),
                &trim_up_elevator(),
            );

            // Touchdown: in_flight drops, the ground setting drives the trim back.
            let mut last = f64::MAX;
            for _ in 0..10 {
                activation.update(
                    Duration::from_millis(100),
                    test_bed.parameters(),
                    &FakePhases::on_ground(),
                    &FakeEngagement::engaged_everywhere(),
                    &FakeLawResolution::normal(),
                    &FakePitchCapability::normal(),
                    &trim_up_elevator(),
                );
                let position = activation.ths_position_order().get::<degree>();
                assert!(activation.ths_active());
                assert!(position < last);
                last = position;
            }
        }
    }
}
