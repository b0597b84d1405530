use std::time::Duration;

use systems::flight_controls::logic::{ConfirmationNode, PulseNode};
use systems::flight_controls::parameters::Value;
use uom::si::f64::*;
use uom::si::ratio::ratio;

use crate::flight_controls::parameters::*;

pub(super) trait SidestickPriority {
    fn left_stick_disabled(&self) -> bool;
    fn right_stick_disabled(&self) -> bool;
    fn left_stick_priority_locked(&self) -> bool;
    fn right_stick_priority_locked(&self) -> bool;
    fn roll_command(&self) -> Ratio;
    fn pitch_command(&self) -> Ratio;
}

/// Implements the sidestick priority scheme. Pressing a takeover pushbutton disables
/// the opposite stick, with the captain winning a simultaneous press. A disabled
/// stick is restored as soon as the button is released, unless the button has been
/// held for 30 seconds, which latches the priority so the button can be let go.
/// The summed stick order is clamped to one full stick deflection.
pub(super) struct SidestickPriorityActivation {
    capt_takeover_pulse: PulseNode,
    fo_takeover_pulse: PulseNode,
    left_lock_confirm: ConfirmationNode,
    right_lock_confirm: ConfirmationNode,
    left_stick_disabled: bool,
    right_stick_disabled: bool,
    left_stick_priority_locked: bool,
    right_stick_priority_locked: bool,
    roll_command: Ratio,
    pitch_command: Ratio,
}

impl SidestickPriorityActivation {
    const PRIORITY_LOCK_TIME: Duration = Duration::from_secs(30);

    pub fn new() -> Self {
        Self {
            capt_takeover_pulse: PulseNode::new_leading(),
            fo_takeover_pulse: PulseNode::new_leading(),
            left_lock_confirm: ConfirmationNode::new_leading(Self::PRIORITY_LOCK_TIME),
            right_lock_confirm: ConfirmationNode::new_leading(Self::PRIORITY_LOCK_TIME),
            left_stick_disabled: false,
            right_stick_disabled: false,
            left_stick_priority_locked: false,
            right_stick_priority_locked: false,
            roll_command: Ratio::default(),
            pitch_command: Ratio::default(),
        }
    }

    pub fn update(
        &mut self,
        delta: Duration,
        signals: &(impl PriorityTakeoverPressed + SidestickPositions),
    ) {
        let capt_pressed = signals.capt_priority_takeover_pressed().value();
        let fo_pressed = signals.fo_priority_takeover_pressed().value();

        if self.capt_takeover_pulse.update(capt_pressed) {
            self.right_stick_disabled = true;
            self.left_stick_disabled = false;
        } else if self.fo_takeover_pulse.update(fo_pressed) {
            self.left_stick_disabled = true;
            self.right_stick_disabled = false;
        }

        if self.right_stick_disabled && !capt_pressed && !self.right_stick_priority_locked {
            self.right_stick_disabled = false;
        } else if self.left_stick_disabled {
            self.left_stick_disabled = fo_pressed || self.left_stick_priority_locked;
        }

        self.left_stick_priority_locked = self.left_lock_confirm.update(
            self.left_stick_disabled && (fo_pressed || self.left_stick_priority_locked),
            delta,
        );
        self.right_stick_priority_locked = self.right_lock_confirm.update(
            self.right_stick_disabled && (capt_pressed || self.right_stick_priority_locked),
            delta,
        );

        let roll_sum = if self.right_stick_disabled {
            Ratio::default()
        } else {
            signals.fo_roll_stick_pos()
        } + if self.left_stick_disabled {
            Ratio::default()
        } else {
            signals.capt_roll_stick_pos()
        };
        self.roll_command = Ratio::new::<ratio>(roll_sum.get::<ratio>().clamp(-1., 1.));

        let pitch_sum = if self.right_stick_disabled {
            Ratio::default()
        } else {
            signals.fo_pitch_stick_pos()
        } + if self.left_stick_disabled {
            Ratio::default()
        } else {
            signals.capt_pitch_stick_pos()
        };
        self.pitch_command = Ratio::new::<ratio>(pitch_sum.get::<ratio>().clamp(-1., 1.));
    }

    pub fn reset(&mut self) {
        self.capt_takeover_pulse.reset();
        self.fo_takeover_pulse.reset();
        self.left_lock_confirm.reset();
        self.right_lock_confirm.reset();
        self.left_stick_disabled = false;
        self.right_stick_disabled = false;
        self.left_stick_priority_locked = false;
        self.right_stick_priority_locked = false;
        self.roll_command = Ratio::default();
        self.pitch_command = Ratio::default();
    }
}

impl SidestickPriority for SidestickPriorityActivation {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight_controls::test::*;

    fn run(activation: &mut SidestickPriorityActivation, test_bed: &A320ElacTestBed) {
        activation.update(Duration::from_millis(100), test_bed.parameters());
    }

    #[test]
    fn sums_both_sticks_by_default() {
        let mut test_bed = test_bed_with();
        test_bed.set_capt_roll_stick_pos(Ratio::new::<ratio>(0.4));
        test_bed.set_fo_roll_stick_pos(Ratio::new::<ratio>(0.3));

        let mut activation = SidestickPriorityActivation::new();
        run(&mut activation, &test_bed);
        assert!((activation.roll_command().get::<ratio>() - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn clamps_the_summed_order_to_full_deflection() {
        let mut test_bed = test_bed_with();
        test_bed.set_capt_pitch_stick_pos(Ratio::new::<ratio>(0.8));
        test_bed.set_fo_pitch_stick_pos(Ratio::new::<ratio>(0.8));

        let mut activation = SidestickPriorityActivation::new();
        run(&mut activation, &test_bed);
        assert!((activation.pitch_command().get::<ratio>() - 1.).abs() < f64::EPSILON);
    }

    #[test]
    fn capt_takeover_disables_the_first_officer_stick() {
        let mut test_bed = test_bed_with();
        test_bed.set_capt_roll_stick_pos(Ratio::new::<ratio>(0.4));
        test_bed.set_fo_roll_stick_pos(Ratio::new::<ratio>(-0.6));

        let mut activation = SidestickPriorityActivation::new();
        run(&mut activation, &test_bed);

        test_bed.set_capt_priority_takeover_pressed(DiscreteParameter::new(true));
        run(&mut activation, &test_bed);
        assert!(activation.right_stick_disabled());
        assert!(!activation.left_stick_disabled());
        assert!((activation.roll_command().get::<ratio>() - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn priority_returns_when_the_button_is_released_early() {
        let mut test_bed = test_bed_with();
        let mut activation = SidestickPriorityActivation::new();
        run(&mut activation, &test_bed);

        test_bed.set_capt_priority_takeover_pressed(DiscreteParameter::new(true));
        run(&mut activation, &test_bed);
        assert!(activation.right_stick_disabled());

        test_bed.set_capt_priority_takeover_pressed(DiscreteParameter::new(false));
        run(&mut activation, &test_bed);
        assert!(!activation.right_stick_disabled());
    }

    #[test]
    fn holding_the_button_latches_the_priority() {
        let mut test_bed = test_bed_with();
        let mut activation = SidestickPriorityActivation::new();
        run(&mut activation, &test_bed);

        test_bed.set_capt_priority_takeover_pressed(DiscreteParameter::new(true));
        for _ in 0..301 {
            run(&mut activation, &test_bed);
        }
        assert!(activation.right_stick_priority_locked());

        test_bed.set_capt_priority_takeover_pressed(DiscreteParameter::new(false));
        run(&mut activation, &test_bed);
        assert!(activation.right_stick_disabled());
        assert!(activation.right_stick_priority_locked());
    }

    #[test]
    fn a_latched_priority_is_cancelled_by_the_opposite_takeover() {
        let mut test_bed = test_bed_with();
        let mut activation = SidestickPriorityActivation::new();
        run(&mut activation, &test_bed);

        test_bed.set_capt_priority_takeover_pressed(DiscreteParameter::new(true));
        for _ in 0..301 {
            run(&mut activation, &test_bed);
        }
        test_bed.set_capt_priority_takeover_pressed(DiscreteParameter::new(false));
        run(&mut activation, &test_bed);
        assert!(activation.right_stick_disabled());

        test_bed.set_fo_priority_takeover_pressed(DiscreteParameter::new(true));
        run(&mut activation, &test_bed);
        assert!(!activation.right_stick_disabled());
        assert!(activation.left_stick_disabled());
    }

    #[test]
    fn the_captain_wins_a_simultaneous_takeover() {
        let mut test_bed = test_bed_with();
        let mut activation = SidestickPriorityActivation::new();
        run(&mut activation, &test_bed);

        test_bed.set_capt_priority_takeover_pressed(DiscreteParameter::new(true));
        test_bed.set_fo_priority_takeover_pressed(DiscreteParameter::new(true));
        run(&mut activation, &test_bed);
        assert!(activation.right_stick_disabled());
        assert!(!activation.left_stick_disabled());
    }
}
