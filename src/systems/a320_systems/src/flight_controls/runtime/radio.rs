use std::time::Duration;

use systems::flight_controls::logic::ConfirmationNode;
use systems::flight_controls::parameters::{SignStatusMatrix, Value};
use systems::flight_controls::utils::EfcsSsm;
use uom::si::f64::*;
use uom::si::length::foot;
use uom::si::velocity::knot;

use super::adirs::AirDataConsolidation;
use crate::flight_controls::parameters::*;

pub(super) trait RadioHeightConsolidation {
    fn radio_height(&self) -> Length;
    fn ra_1_invalid(&self) -> bool;
    fn ra_2_invalid(&self) -> bool;
    fn dual_ra_failure(&self) -> bool;
}

/// Consolidates the two radio altimeters into a single height. Beyond comparing the
/// sign/status matrices, this monitor rejects an altimeter that keeps indicating
/// height above the runway at high speed when the air data that could disprove it has
/// been lost, and arbitrates a disagreement between the two altimeters based on how
/// long ago the aircraft was last in landing configuration.
pub(super) struct RadioAltimeterConsolidationActivation {
    divergence_confirm: ConfirmationNode,
    rejection_confirms: [ConfirmationNode; 2],
    rejected: [bool; 2],
    config_full_event_time: Duration,
    radio_height: Length,
    ra_invalid: [bool; 2],
}

impl RadioAltimeterConsolidationActivation {
    /// The fallback height when no trustworthy altimeter remains.
    const FALLBACK_HEIGHT_FT: f64 = 250.;

    pub fn new() -> Self {
        Self {
            divergence_confirm: ConfirmationNode::new_leading(Duration::from_secs(1)),
            rejection_confirms: [
                ConfirmationNode::new_leading(Duration::from_secs(1)),
                ConfirmationNode::new_leading(Duration::from_secs(1)),
            ],
            rejected: [false, false],
            config_full_event_time: Duration::ZERO,
            radio_height: Length::default(),
            ra_invalid: [false, false],
        }
    }

    pub fn update(
        &mut self,
        delta: Duration,
        elapsed: Duration,
        signals: &(impl RadioHeight + SlatFlapWords),
        adr: &impl AirDataConsolidation,
    ) {
        let heights = [signals.radio_height(1), signals.radio_height(2)];

        let diverged = self.divergence_confirm.update(
            (heights[0].value() - heights[1].value()).abs() > Length::new::<foot>(50.),
            delta,
        );

        for (index, height) in heights.iter().enumerate() {
            let suspect = height.value() > Length::new::<foot>(50.)
                && height.is_no()
                && adr.computed_speed() > Velocity::new::<knot>(200.)
                && adr.triple_adr_fault();
            if self.rejection_confirms[index].update(suspect, delta) {
                self.rejected[index] = true;
            }
            self.ra_invalid[index] = heights[index].is_fw() || self.rejected[index];
        }

        let config_full = [1, 2].iter().any(|&index| {
            let word = signals.slat_flap_actual_position_word(index);
            word.bit(23) && word.is_val()
        });
        if !config_full {
            self.config_full_event_time = elapsed;
        }

        let fallback = Length::new::<foot>(Self::FALLBACK_HEIGHT_FT);
        self.radio_height = match (self.ra_invalid[0], self.ra_invalid[1]) {
            (false, false) => {
                if diverged {
                    // In landing configuration for a while, so trust the altimeter
                    // that sees the ground coming.
                    if elapsed > self.config_full_event_time + Duration::from_secs(10) {
                        heights[0].value().min(heights[1].value())
                    } else {
                        fallback
                    }
                } else {
                    (heights[0].value() + heights[1].value()) / 2.
                }
            }
            (false, true) | (true, false) => {
                let remaining = if self.ra_invalid[0] { 1 } else { 0 };
                if adr.computed_speed() > Velocity::new::<knot>(180.) && adr.triple_adr_fault() {
                    fallback
                } else {
                    heights[remaining].value()
                }
            }
            (true, true) => fallback,
        };
    }

    pub fn reset(&mut self) {
        self.divergence_confirm.reset();
        for confirm in &mut self.rejection_confirms {
            confirm.reset();
        }
        self.rejected = [false, false];
        self.config_full_event_time = Duration::ZERO;
        self.radio_height = Length::default();
        self.ra_invalid = [false, false];
    }
}

impl RadioHeightConsolidation for RadioAltimeterConsolidationActivation {
    fn radio_height(&self) -> Length {
        self.radio_height
    }

    fn ra_1_invalid(&self) -> bool {
        self.ra_invalid[0]
    }

    fn ra_2_invalid(&self) -> bool {
        self.ra_invalid[1]
    }

    fn dual_ra_failure(&self) -> bool {
        self.ra_invalid[0] && self.ra_invalid[1]
    }
}
