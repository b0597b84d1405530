use std::time::Duration;

use systems::flight_controls::logic::{ConfirmationNode, HysteresisNode};
use systems::flight_controls::parameters::Value;
use uom::si::f64::*;
use uom::si::pressure::pound_force_per_square_inch;

use crate::flight_controls::parameters::*;

pub(super) trait HydraulicPressurised {
    fn blue_pressurised(&self) -> bool;
    fn green_pressurised(&self) -> bool;
    fn yellow_pressurised(&self) -> bool;
}

/// Tracks which hydraulic circuits can power a servo loop. The analog pressure is run
/// through a hysteresis band so a circuit hovering around its cut-in pressure does not
/// cycle the servos, and the result has to hold for half a second before a circuit is
/// considered usable again.
pub(super) struct HydraulicPressurisedActivation {
    blue_hysteresis: HysteresisNode<Pressure>,
    green_hysteresis: HysteresisNode<Pressure>,
    yellow_hysteresis: HysteresisNode<Pressure>,
    blue_confirm: ConfirmationNode,
    green_confirm: ConfirmationNode,
    yellow_confirm: ConfirmationNode,
    battery_supply_confirm: ConfirmationNode,
    blue_pressurised: bool,
    green_pressurised: bool,
    yellow_pressurised: bool,
    battery_power_supply_required: bool,
}

impl HydraulicPressurisedActivation {
    const LOW_PRESSURE_PSI: f64 = 1450.;
    const HIGH_PRESSURE_PSI: f64 = 1750.;

    fn hysteresis() -> HysteresisNode<Pressure> {
        HysteresisNode::new(
            Pressure::new::<pound_force_per_square_inch>(Self::LOW_PRESSURE_PSI),
            Pressure::new::<pound_force_per_square_inch>(Self::HIGH_PRESSURE_PSI),
        )
    }

    pub fn new() -> Self {
        Self {
            blue_hysteresis: Self::hysteresis(),
            green_hysteresis: Self::hysteresis(),
            yellow_hysteresis: Self::hysteresis(),
            blue_confirm: ConfirmationNode::new_leading(Duration::from_millis(500)),
            green_confirm: ConfirmationNode::new_leading(Duration::from_millis(500)),
            yellow_confirm: ConfirmationNode::new_leading(Duration::from_millis(500)),
            battery_supply_confirm: ConfirmationNode::new_falling(Duration::from_secs(30)),
            blue_pressurised: false,
            green_pressurised: false,
            yellow_pressurised: false,
            battery_power_supply_required: false,
        }
    }

    pub fn update(
        &mut self,
        delta: Duration,
        signals: &(impl HydraulicPressures + HydraulicLowPressure),
    ) {
        self.blue_pressurised = self.blue_confirm.update(
            !signals.blue_low_pressure().value()
                && self.blue_hysteresis.update(signals.blue_hyd_pressure()),
            delta,
        );
        self.green_pressurised = self.green_confirm.update(
            !signals.green_low_pressure().value()
                && self.green_hysteresis.update(signals.green_hyd_pressure()),
            delta,
        );
        self.yellow_pressurised = self.yellow_confirm.update(
            !signals.yellow_low_pressure().value()
                && self.yellow_hysteresis.update(signals.yellow_hyd_pressure()),
            delta,
        );
        self.battery_power_supply_required = self.battery_supply_confirm.update(
            self.blue_pressurised || self.green_pressurised || self.yellow_pressurised,
            delta,
        );
    }

    /// Whether the computer requests to remain powered from the batteries. The
    /// request is held for 30 seconds after the last circuit has depressurised.
    pub fn battery_power_supply_required(&self) -> bool {
        self.battery_power_supply_required
    }

    pub fn reset(&mut self) {
        self.blue_hysteresis.reset();
        self.green_hysteresis.reset();
        self.yellow_hysteresis.reset();
        self.blue_confirm.reset();
        self.green_confirm.reset();
        self.yellow_confirm.reset();
        self.battery_supply_confirm.reset();
        self.blue_pressurised = false;
        self.green_pressurised = false;
        self.yellow_pressurised = false;
        self.battery_power_supply_required = false;
    }
}

impl HydraulicPressurised for HydraulicPressurisedActivation {
    fn blue_pressurised(&self) -> bool {
        self.blue_pressurised
    }

    fn green_pressurised(&self) -> bool {
        self.green_pressurised
    }

    fn yellow_pressurised(&self) -> bool {
        self.yellow_pressurised
    }
}
