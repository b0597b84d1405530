use std::time::Duration;

use systems::flight_controls::logic::ConfirmationNode;
use systems::flight_controls::parameters::{Arinc429Parameter, SignStatusMatrix, Value};
use systems::flight_controls::utils::EfcsSsm;
use uom::si::angle::degree;
use uom::si::velocity::knot;

use super::adirs::{AirDataConsolidation, InertialDataConsolidation};
use super::engagement::Engagement;
use super::phases::FlightPhases;
use super::radio::RadioHeightConsolidation;
use super::{LateralControlLaw, PitchControlLaw};
use crate::flight_controls::parameters::*;

pub(super) trait LateralLawCapability {
    fn lateral_law_capability(&self) -> LateralControlLaw;
}

/// Determines the best lateral law this computer could fly. The lateral normal law
/// needs the yaw axis: when both FACs have lost yaw damping, when both SECs are gone
/// while the FCDCs report the same, or when no computer claims the roll axis at all,
/// only the direct law remains.
pub(super) struct LateralLawCapabilityActivation {
    lateral_law_capability: LateralControlLaw,
}

impl LateralLawCapabilityActivation {
    pub fn new() -> Self {
        Self {
            lateral_law_capability: LateralControlLaw::NormalLaw,
        }
    }

    pub fn update(
        &mut self,
        signals: &(impl FacYawControlLost + SecStatusWords + FcdcStatusWords),
    ) {
        let both_fac_yaw_lost =
            signals.fac_yaw_control_lost(1).value() && signals.fac_yaw_control_lost(2).value();

        let sec_1_word_1 = signals.sec_discrete_status_word_1(1);
        let sec_2_word_1 = signals.sec_discrete_status_word_1(2);
        let both_secs_failed = !sec_1_word_1.is_no()
            && !sec_2_word_1.is_no()
            && signals.fcdc_discrete_status_word_1(1).bit(29)
            && signals.fcdc_discrete_status_word_1(2).bit(29);

        let fcdc_b23 = signals.fcdc_discrete_status_word_3(1).bit(23)
            || signals.fcdc_discrete_status_word_3(2).bit(23);
        let fcdc_b24 = signals.fcdc_discrete_status_word_3(1).bit(24)
            || signals.fcdc_discrete_status_word_3(2).bit(24);
        let no_roll_computer = !sec_1_word_1.bit(15)
            && !sec_1_word_1.bit(16)
            && !sec_2_word_1.bit(15)
            && !fcdc_b23
            && !fcdc_b24;

        self.lateral_law_capability = if both_fac_yaw_lost || both_secs_failed || no_roll_computer
        {
            LateralControlLaw::DirectLaw
        } else {
            LateralControlLaw::NormalLaw
        };
    }

    pub fn reset(&mut self) {
        self.lateral_law_capability = LateralControlLaw::NormalLaw;
    }
}

impl LateralLawCapability for LateralLawCapabilityActivation {
    fn lateral_law_capability(&self) -> LateralControlLaw {
        self.lateral_law_capability
    }
}

pub(super) trait PitchLawCapability {
    fn pitch_law_capability(&self) -> PitchControlLaw;
    fn abnormal_condition(&self) -> bool;
    fn abnormal_condition_was_active(&self) -> bool;
}

/// Determines the best pitch law this computer could fly, degrading through the
/// alternate laws down to the direct law as sensors and surfaces are lost. An
/// attitude or speed far outside the envelope with the remaining sensors unable to
/// disprove it latches the abnormal condition for the rest of the flight.
pub(super) struct PitchLawCapabilityActivation {
    slew_confirm: ConfirmationNode,
    abnormal_condition: bool,
    abnormal_condition_was_active: bool,
    pitch_law_capability: PitchControlLaw,
}

impl PitchLawCapabilityActivation {
    pub fn new() -> Self {
        Self {
            slew_confirm: ConfirmationNode::new_leading(Duration::from_millis(200)),
            abnormal_condition: false,
            abnormal_condition_was_active: false,
            pitch_law_capability: PitchControlLaw::NormalLaw,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        delta: Duration,
        signals: &(impl SimStatus + SecStatusWords + SlatFlapWords),
        adr: &impl AirDataConsolidation,
        ir: &impl InertialDataConsolidation,
        ra: &impl RadioHeightConsolidation,
        phases: &impl FlightPhases,
        engagement: &impl Engagement,
        lateral: &impl LateralLawCapability,
    ) {
        let slewing = self.slew_confirm.update(signals.slew_on(), delta);
        let speed = adr.computed_speed().get::<knot>();
        let alpha = adr.alpha_filtered().get::<degree>();
        let pitch = ir.pitch_attitude().get::<degree>();
        let roll = ir.roll_attitude().get::<degree>();
        self.abnormal_condition = !slewing
            && !phases.on_ground()
            && ((!adr.triple_adr_fault()
                && (f64::from(adr.mach()) > 0.91
                    || alpha < -10.
                    || alpha > 40.
                    || speed > 440.
                    || speed < 60.))
                || (!ir.triple_ir_fault() && (roll.abs() > 125. || pitch > 50. || pitch < -30.)));
        self.abnormal_condition_was_active = self.abnormal_condition
            || (!phases.on_ground() && self.abnormal_condition_was_active);

        let sec_1_word_2 = signals.sec_discrete_status_word_2(1);
        let sec_2_word_2 = signals.sec_discrete_status_word_2(2);
        let flap_reference_degraded = (sec_1_word_2.is_inv() && sec_2_word_2.is_inv())
            || (sec_1_word_2.bit(17) && sec_2_word_2.bit(17));
        let flaps_extended_reference = sec_1_word_2.bit(18) || sec_2_word_2.bit(18);
        let slats_extended_actual = [1, 2].iter().any(|&index| {
            let word = signals.slat_flap_actual_position_word(index);
            word.bit(20) && word.is_val()
        });
        let high_lift_extended = (flaps_extended_reference && !flap_reference_degraded)
            || (slats_extended_actual && flap_reference_degraded);

        let alt_2_condition = adr.triple_adr_fault()
            || self.abnormal_condition_was_active
            || (!engagement.left_aileron_avail()
                && !engagement.right_aileron_avail()
                && (!engagement.left_elevator_avail() || !engagement.right_elevator_avail()));
        let alt_1_condition = ir.double_ir_fault()
            || adr.double_adr_fault()
            || !engagement.left_elevator_avail()
            || !engagement.right_elevator_avail();

        self.pitch_law_capability = if ir.triple_ir_fault()
            || ((alt_2_condition
                || alt_1_condition
                || ra.dual_ra_failure()
                || lateral.lateral_law_capability() == LateralControlLaw::DirectLaw)
                && phases.in_flight()
                && high_lift_extended)
        {
            PitchControlLaw::DirectLaw
        } else if alt_2_condition {
            PitchControlLaw::AlternateLaw2
        } else if alt_1_condition {
            PitchControlLaw::AlternateLaw1
        } else {
            PitchControlLaw::NormalLaw
        };
    }

    pub fn reset(&mut self) {
        self.slew_confirm.reset();
        self.abnormal_condition = false;
        self.abnormal_condition_was_active = false;
        self.pitch_law_capability = PitchControlLaw::NormalLaw;
    }
}

impl PitchLawCapability for PitchLawCapabilityActivation {
    fn pitch_law_capability(&self) -> PitchControlLaw {
        self.pitch_law_capability
    }

    fn abnormal_condition(&self) -> bool {
        self.abnormal_condition
    }

    fn abnormal_condition_was_active(&self) -> bool {
        self.abnormal_condition_was_active
    }
}

pub(super) trait LawResolution {
    fn active_pitch_law(&self) -> PitchControlLaw;
    fn active_lateral_law(&self) -> LateralControlLaw;
}

/// Picks the laws actually flown. Both computers have to agree on the normal law:
/// if either axis, on either computer, can only offer a degraded law, the lateral
/// law falls back to direct and the pitch law degrades with it. The capabilities of
/// the opposite computer are taken from its discrete status word.
pub(super) struct LawResolutionActivation {
    active_pitch_law: PitchControlLaw,
    active_lateral_law: LateralControlLaw,
}

impl LawResolutionActivation {
    pub fn new() -> Self {
        Self {
            active_pitch_law: PitchControlLaw::None,
            active_lateral_law: LateralControlLaw::None,
        }
    }

    fn opp_pitch_law(word: &Arinc429Parameter<f64>) -> PitchControlLaw {
        match (word.bit(11), word.bit(12)) {
            (true, false) => PitchControlLaw::NormalLaw,
            (false, true) => PitchControlLaw::AlternateLaw1,
            (true, true) => PitchControlLaw::DirectLaw,
            (false, false) => PitchControlLaw::None,
        }
    }

    fn opp_lateral_law(word: &Arinc429Parameter<f64>) -> LateralControlLaw {
        match (word.bit(13), word.bit(14)) {
            (true, false) => LateralControlLaw::NormalLaw,
            (false, true) => LateralControlLaw::DirectLaw,
            _ => LateralControlLaw::None,
        }
    }

    pub fn update(
        &mut self,
        signals: &impl OppElacBus,
        engagement: &impl Engagement,
        pitch: &impl PitchLawCapability,
        lateral: &impl LateralLawCapability,
    ) {
        let opp_word_2 = signals.opp_discrete_status_word_2();

        let (pitch_consensus, pitch_side_lateral_consensus) =
            if engagement.has_priority_in_pitch() && engagement.engaged_in_pitch() {
                (pitch.pitch_law_capability(), lateral.lateral_law_capability())
            } else {
                (
                    Self::opp_pitch_law(opp_word_2),
                    Self::opp_lateral_law(opp_word_2),
                )
            };
        let roll_consensus =
            if engagement.has_priority_in_roll() && engagement.engaged_in_roll() {
                lateral.lateral_law_capability()
            } else {
                Self::opp_lateral_law(opp_word_2)
            };

        let all_normal = roll_consensus == LateralControlLaw::NormalLaw
            && pitch_consensus == PitchControlLaw::NormalLaw
            && pitch_side_lateral_consensus == LateralControlLaw::NormalLaw;

        self.active_lateral_law = if engagement.engaged_in_roll() {
            if all_normal {
                LateralControlLaw::NormalLaw
            } else {
                LateralControlLaw::DirectLaw
            }
        } else {
            LateralControlLaw::None
        };

        self.active_pitch_law = if engagement.engaged_in_pitch() {
            if all_normal {
                PitchControlLaw::NormalLaw
            } else if roll_consensus != LateralControlLaw::NormalLaw
                && pitch_consensus == PitchControlLaw::NormalLaw
            {
                PitchControlLaw::AlternateLaw1
            } else if pitch_consensus != PitchControlLaw::NormalLaw {
                pitch.pitch_law_capability()
            } else {
                PitchControlLaw::DirectLaw
            }
        } else {
            PitchControlLaw::None
        };
    }

    pub fn reset(&mut self) {
        self.active_pitch_law = PitchControlLaw::None;
        self.active_lateral_law = LateralControlLaw::None;
    }
}

impl LawResolution for LawResolutionActivation {
    fn active_pitch_law(&self) -> PitchControlLaw {
        self.active_pitch_law
    }

    fn active_lateral_law(&self) -> LateralControlLaw {
        self.active_lateral_law
    }
}
