use systems::flight_controls::parameters::*;
use systems::shared::MachNumber;
use uom::si::f64::*;

pub(super) trait ElacIdentSide1 {
    /// This signal indicates that the computer is installed as ELAC 1.
    fn elac_ident_side1(&self) -> &DiscreteParameter;
}

pub(super) trait ElacIdentSide2 {
    /// This signal indicates that the computer is installed as ELAC 2.
    fn elac_ident_side2(&self) -> &DiscreteParameter;
}

pub(super) trait ComputedSpeed {
    /// This parameter contains the computed airspeed as measured by the ADR.
    /// The index is 1, 2, or 3, for ADR 1, 2, or 3 respectively.
    fn computed_speed(&self, index: u8) -> &Arinc429Parameter<Velocity>;
}

pub(super) trait MachParameter {
    fn mach(&self, index: u8) -> &Arinc429Parameter<MachNumber>;
}

pub(super) trait TrueSpeed {
    fn true_speed(&self, index: u8) -> &Arinc429Parameter<Velocity>;
}

pub(super) trait AlphaParameter {
    /// This parameter contains the corrected angle of attack as measured by the ADR.
    fn alpha(&self, index: u8) -> &Arinc429Parameter<Angle>;
}

pub(super) trait PitchAttitude {
    /// This parameter contains the pitch attitude as measured by the IR.
    /// The index is 1, 2, or 3, for IR 1, 2, or 3 respectively.
    fn pitch_attitude(&self, index: u8) -> &Arinc429Parameter<Angle>;
}

pub(super) trait RollAttitude {
    fn roll_attitude(&self, index: u8) -> &Arinc429Parameter<Angle>;
}

pub(super) trait BodyPitchRate {
    fn body_pitch_rate(&self, index: u8) -> &Arinc429Parameter<AngularVelocity>;
}

pub(super) trait BodyYawRate {
    fn body_yaw_rate(&self, index: u8) -> &Arinc429Parameter<AngularVelocity>;
}

pub(super) trait LongitudinalAcceleration {
    /// This parameter contains the longitudinal load factor as measured by the IR.
    fn longitudinal_acceleration(&self, index: u8) -> &Arinc429Parameter<Ratio>;
}

pub(super) trait LateralAcceleration {
    fn lateral_acceleration(&self, index: u8) -> &Arinc429Parameter<Ratio>;
}

pub(super) trait NormalAcceleration {
    fn normal_acceleration(&self, index: u8) -> &Arinc429Parameter<Ratio>;
}

pub(super) trait PitchAttitudeRate {
    fn pitch_attitude_rate(&self, index: u8) -> &Arinc429Parameter<AngularVelocity>;
}

pub(super) trait RollAttitudeRate {
    fn roll_attitude_rate(&self, index: u8) -> &Arinc429Parameter<AngularVelocity>;
}

pub(super) trait RadioHeight {
    /// This parameter contains the measured radio altitude.
    /// The index is either 1 or 2, corresponding to Radio Altimeter 1 or 2 respectively.
    fn radio_height(&self, index: u8) -> &Arinc429Parameter<Length>;
}

pub(super) trait MainGearPressed {
    /// These discretes indicate that a main landing gear strut is compressed.
    /// The index is either 1 or 2, corresponding to LGCIU 1 or 2 respectively.
    fn left_main_gear_pressed(&self, index: u8) -> &DiscreteParameter;
    fn right_main_gear_pressed(&self, index: u8) -> &DiscreteParameter;
}

pub(super) trait GroundSpoilersActive {
    /// This discrete indicates that a SEC has commanded its ground spoilers out.
    fn ground_spoilers_active(&self, index: u8) -> &DiscreteParameter;
}

pub(super) trait SlatFlapWords {
    /// The SFCC system status word, carrying the selected slat/flap configuration.
    fn slat_flap_system_status_word(&self, index: u8) -> &Arinc429Parameter<f64>;

    /// The SFCC actual position word, carrying the measured slat/flap positions.
    fn slat_flap_actual_position_word(&self, index: u8) -> &Arinc429Parameter<f64>;
}

pub(super) trait SecStatusWords {
    fn sec_discrete_status_word_1(&self, index: u8) -> &Arinc429Parameter<f64>;
    fn sec_discrete_status_word_2(&self, index: u8) -> &Arinc429Parameter<f64>;
}

pub(super) trait FcdcStatusWords {
    fn fcdc_discrete_status_word_1(&self, index: u8) -> &Arinc429Parameter<f64>;
    fn fcdc_discrete_status_word_3(&self, index: u8) -> &Arinc429Parameter<f64>;
}

pub(super) trait FacYawControlLost {
    /// This discrete indicates that a FAC has lost its yaw damping function.
    fn fac_yaw_control_lost(&self, index: u8) -> &DiscreteParameter;
}

pub(super) trait FmgcCommands {
    fn fmgc_roll_command(&self, index: u8) -> &Arinc429Parameter<Angle>;
    fn fmgc_pitch_command(&self, index: u8) -> &Arinc429Parameter<Angle>;
    fn fmgc_yaw_command(&self, index: u8) -> &Arinc429Parameter<Angle>;
}

pub(super) trait ApDisengaged {
    /// This discrete indicates that an autopilot is disengaged.
    /// The index is either 1 or 2, corresponding to AP 1 or 2 respectively.
    fn ap_disengaged(&self, index: u8) -> &DiscreteParameter;
}

pub(super) trait OppElacBus {
    fn opp_discrete_status_word_1(&self) -> &Arinc429Parameter<f64>;
    fn opp_discrete_status_word_2(&self) -> &Arinc429Parameter<f64>;
    fn opp_aileron_command(&self) -> &Arinc429Parameter<Angle>;
    fn opp_elevator_dual_pressurization_command(&self) -> &Arinc429Parameter<Angle>;
}

pub(super) trait OppElacDiscretes {
    /// This discrete indicates that the opposite ELAC has lost its pitch axis.
    fn opp_axis_pitch_failure(&self) -> &DiscreteParameter;
    fn opp_left_aileron_lost(&self) -> &DiscreteParameter;
    fn opp_right_aileron_lost(&self) -> &DiscreteParameter;
}

pub(super) trait HydraulicPressures {
    fn blue_hyd_pressure(&self) -> Pressure;
    fn green_hyd_pressure(&self) -> Pressure;
    fn yellow_hyd_pressure(&self) -> Pressure;
}

pub(super) trait HydraulicLowPressure {
    fn blue_low_pressure(&self) -> &DiscreteParameter;
    fn green_low_pressure(&self) -> &DiscreteParameter;
    fn yellow_low_pressure(&self) -> &DiscreteParameter;
}

pub(super) trait SurfaceServoFailures {
    fn left_aileron_servo_failed(&self) -> &DiscreteParameter;
    fn right_aileron_servo_failed(&self) -> &DiscreteParameter;
    fn left_elevator_servo_failed(&self) -> &DiscreteParameter;
    fn right_elevator_servo_failed(&self) -> &DiscreteParameter;
}

pub(super) trait ThsDiscretes {
    fn ths_motor_fault(&self) -> &DiscreteParameter;
    fn ths_override_active(&self) -> &DiscreteParameter;
}

pub(super) trait SidestickPositions {
    /// Sidestick deflections, as a ratio of full deflection. Positive values are
    /// aft respectively right.
    fn capt_pitch_stick_pos(&self) -> Ratio;
    fn fo_pitch_stick_pos(&self) -> Ratio;
    fn capt_roll_stick_pos(&self) -> Ratio;
    fn fo_roll_stick_pos(&self) -> Ratio;
}

pub(super) trait RudderPedalPosition {
    fn rudder_pedal_pos(&self) -> Ratio;
}

pub(super) trait PriorityTakeoverPressed {
    fn capt_priority_takeover_pressed(&self) -> &DiscreteParameter;
    fn fo_priority_takeover_pressed(&self) -> &DiscreteParameter;
}

pub(super) trait SurfacePositions {
    /// Measured surface deflections from the servo loop feedback.
    fn left_aileron_position(&self) -> Angle;
    fn right_aileron_position(&self) -> Angle;
    fn left_elevator_position(&self) -> Angle;
    fn right_elevator_position(&self) -> Angle;
    fn ths_position(&self) -> Angle;
}

pub(super) trait SimStatus {
    fn computer_running(&self) -> bool;
    fn slew_on(&self) -> bool;
    fn pause_on(&self) -> bool;
    fn tracking_mode_on_override(&self) -> bool;
}

/// The acquired form of every input parameter of an A320 ELAC.
#[derive(Default)]
pub struct A320ElacParameterTable {
    elac_ident_side1: DiscreteParameter,
    elac_ident_side2: DiscreteParameter,
    computed_speed: [Arinc429Parameter<Velocity>; 3],
    mach: [Arinc429Parameter<MachNumber>; 3],
    true_speed: [Arinc429Parameter<Velocity>; 3],
    alpha: [Arinc429Parameter<Angle>; 3],
    pitch_attitude: [Arinc429Parameter<Angle>; 3],
    roll_attitude: [Arinc429Parameter<Angle>; 3],
    body_pitch_rate: [Arinc429Parameter<AngularVelocity>; 3],
    body_yaw_rate: [Arinc429Parameter<AngularVelocity>; 3],
    longitudinal_acceleration: [Arinc429Parameter<Ratio>; 3],
    lateral_acceleration: [Arinc429Parameter<Ratio>; 3],
    normal_acceleration: [Arinc429Parameter<Ratio>; 3],
    pitch_attitude_rate: [Arinc429Parameter<AngularVelocity>; 3],
    roll_attitude_rate: [Arinc429Parameter<AngularVelocity>; 3],
    radio_height: [Arinc429Parameter<Length>; 2],
    left_main_gear_pressed: [DiscreteParameter; 2],
    right_main_gear_pressed: [DiscreteParameter; 2],
    ground_spoilers_active: [DiscreteParameter; 2],
    slat_flap_system_status_word: [Arinc429Parameter<f64>; 2],
    slat_flap_actual_position_word: [Arinc429Parameter<f64>; 2],
    sec_discrete_status_word_1: [Arinc429Parameter<f64>; 2],
    sec_discrete_status_word_2: [Arinc429Parameter<f64>; 2],
    fcdc_discrete_status_word_1: [Arinc429Parameter<f64>; 2],
    fcdc_discrete_status_word_3: [Arinc429Parameter<f64>; 2],
    fac_yaw_control_lost: [DiscreteParameter; 2],
    fmgc_roll_command: [Arinc429Parameter<Angle>; 2],
    fmgc_pitch_command: [Arinc429Parameter<Angle>; 2],
    fmgc_yaw_command: [Arinc429Parameter<Angle>; 2],
    ap_disengaged: [DiscreteParameter; 2],
    opp_discrete_status_word_1: Arinc429Parameter<f64>,
    opp_discrete_status_word_2: Arinc429Parameter<f64>,
    opp_aileron_command: Arinc429Parameter<Angle>,
    opp_elevator_dual_pressurization_command: Arinc429Parameter<Angle>,
    opp_axis_pitch_failure: DiscreteParameter,
    opp_left_aileron_lost: DiscreteParameter,
    opp_right_aileron_lost: DiscreteParameter,
    blue_hyd_pressure: Pressure,
    green_hyd_pressure: Pressure,
    yellow_hyd_pressure: Pressure,
    blue_low_pressure: DiscreteParameter,
    green_low_pressure: DiscreteParameter,
    yellow_low_pressure: DiscreteParameter,
    left_aileron_servo_failed: DiscreteParameter,
    right_aileron_servo_failed: DiscreteParameter,
    left_elevator_servo_failed: DiscreteParameter,
    right_elevator_servo_failed: DiscreteParameter,
    ths_motor_fault: DiscreteParameter,
    ths_override_active: DiscreteParameter,
    capt_pitch_stick_pos: Ratio,
    fo_pitch_stick_pos: Ratio,
    capt_roll_stick_pos: Ratio,
    fo_roll_stick_pos: Ratio,
    rudder_pedal_pos: Ratio,
    capt_priority_takeover_pressed: DiscreteParameter,
    fo_priority_takeover_pressed: DiscreteParameter,
    left_aileron_position: Angle,
    right_aileron_position: Angle,
    left_elevator_position: Angle,
    right_elevator_position: Angle,
    ths_position: Angle,
    computer_running: bool,
    slew_on: bool,
    pause_on: bool,
    tracking_mode_on_override: bool,
}

impl A320ElacParameterTable {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn set_elac_ident_side1(&mut self, parameter: DiscreteParameter) {
        self.elac_ident_side1 = parameter;
    }

    pub fn set_elac_ident_side2(&mut self, parameter: DiscreteParameter) {
        self.elac_ident_side2 = parameter;
    }

    pub fn set_computed_speed(&mut self, index: u8, parameter: Arinc429Parameter<Velocity>) {
        self.computed_speed[usize::from(index) - 1] = parameter;
    }

    pub fn set_mach(&mut self, index: u8, parameter: Arinc429Parameter<MachNumber>) {
        self.mach[usize::from(index) - 1] = parameter;
    }

    pub fn set_true_speed(&mut self, index: u8, parameter: Arinc429Parameter<Velocity>) {
        self.true_speed[usize::from(index) - 1] = parameter;
    }

    pub fn set_alpha(&mut self, index: u8, parameter: Arinc429Parameter<Angle>) {
        self.alpha[usize::from(index) - 1] = parameter;
    }

    pub fn set_pitch_attitude(&mut self, index: u8, parameter: Arinc429Parameter<Angle>) {
        self.pitch_attitude[usize::from(index) - 1] = parameter;
    }

    pub fn set_roll_attitude(&mut self, index: u8, parameter: Arinc429Parameter<Angle>) {
        self.roll_attitude[usize::from(index) - 1] = parameter;
    }

    pub fn set_body_pitch_rate(&mut self, index: u8, parameter: Arinc429Parameter<AngularVelocity>) {
        self.body_pitch_rate[usize::from(index) - 1] = parameter;
    }

    pub fn set_body_yaw_rate(&mut self, index: u8, parameter: Arinc429Parameter<AngularVelocity>) {
        self.body_yaw_rate[usize::from(index) - 1] = parameter;
    }

    pub fn set_longitudinal_acceleration(&mut self, index: u8, parameter: Arinc429Parameter<Ratio>) {
        self.longitudinal_acceleration[usize::from(index) - 1] = parameter;
    }

    pub fn set_lateral_acceleration(&mut self, index: u8, parameter: Arinc429Parameter<Ratio>) {
        self.lateral_acceleration[usize::from(index) - 1] = parameter;
    }

    pub fn set_normal_acceleration(&mut self, index: u8, parameter: Arinc429Parameter<Ratio>) {
        self.normal_acceleration[usize::from(index) - 1] = parameter;
    }

    pub fn set_pitch_attitude_rate(
        &mut self,
        index: u8,
        parameter: Arinc429Parameter<AngularVelocity>,
    ) {
        self.pitch_attitude_rate[usize::from(index) - 1] = parameter;
    }

    pub fn set_roll_attitude_rate(
        &mut self,
        index: u8,
        parameter: Arinc429Parameter<AngularVelocity>,
    ) {
        self.roll_attitude_rate[usize::from(index) - 1] = parameter;
    }

    pub fn set_radio_height(&mut self, index: u8, parameter: Arinc429Parameter<Length>) {
        self.radio_height[usize::from(index) - 1] = parameter;
    }

    pub fn set_left_main_gear_pressed(&mut self, index: u8, parameter: DiscreteParameter) {
        self.left_main_gear_pressed[usize::from(index) - 1] = parameter;
    }

    pub fn set_right_main_gear_pressed(&mut self, index: u8, parameter: DiscreteParameter) {
        self.right_main_gear_pressed[usize::from(index) - 1] = parameter;
    }

    pub fn set_ground_spoilers_active(&mut self, index: u8, parameter: DiscreteParameter) {
        self.ground_spoilers_active[usize::from(index) - 1] = parameter;
    }

    pub fn set_slat_flap_system_status_word(
        &mut self,
        index: u8,
        parameter: Arinc429Parameter<f64>,
    ) {
        self.slat_flap_system_status_word[usize::from(index) - 1] = parameter;
    }

    pub fn set_slat_flap_actual_position_word(
        &mut self,
        index: u8,
        parameter: Arinc429Parameter<f64>,
    ) {
        self.slat_flap_actual_position_word[usize::from(index) - 1] = parameter;
    }

    pub fn set_sec_discrete_status_word_1(&mut self, index: u8, parameter: Arinc429Parameter<f64>) {
        self.sec_discrete_status_word_1[usize::from(index) - 1] = parameter;
    }

    pub fn set_sec_discrete_status_word_2(&mut self, index: u8, parameter: Arinc429Parameter<f64>) {
        self.sec_discrete_status_word_2[usize::from(index) - 1] = parameter;
    }

    pub fn set_fcdc_discrete_status_word_1(&mut self, index: u8, parameter: Arinc429Parameter<f64>) {
        self.fcdc_discrete_status_word_1[usize::from(index) - 1] = parameter;
    }

    pub fn set_fcdc_discrete_status_word_3(&mut self, index: u8, parameter: Arinc429Parameter<f64>) {
        self.fcdc_discrete_status_word_3[usize::from(index) - 1] = parameter;
    }

    pub fn set_fac_yaw_control_lost(&mut self, index: u8, parameter: DiscreteParameter) {
        self.fac_yaw_control_lost[usize::from(index) - 1] = parameter;
    }

    pub fn set_fmgc_roll_command(&mut self, index: u8, parameter: Arinc429Parameter<Angle>) {
        self.fmgc_roll_command[usize::from(index) - 1] = parameter;
    }

    pub fn set_fmgc_pitch_command(&mut self, index: u8, parameter: Arinc429Parameter<Angle>) {
        self.fmgc_pitch_command[usize::from(index) - 1] = parameter;
    }

    pub fn set_fmgc_yaw_command(&mut self, index: u8, parameter: Arinc429Parameter<Angle>) {
        self.fmgc_yaw_command[usize::from(index) - 1] = parameter;
    }

    pub fn set_ap_disengaged(&mut self, index: u8, parameter: DiscreteParameter) {
        self.ap_disengaged[usize::from(index) - 1] = parameter;
    }

    pub fn set_opp_discrete_status_word_1(&mut self, parameter: Arinc429Parameter<f64>) {
        self.opp_discrete_status_word_1 = parameter;
    }

    pub fn set_opp_discrete_status_word_2(&mut self, parameter: Arinc429Parameter<f64>) {
        self.opp_discrete_status_word_2 = parameter;
    }

    pub fn set_opp_aileron_command(&mut self, parameter: Arinc429Parameter<Angle>) {
        self.opp_aileron_command = parameter;
    }

    pub fn set_opp_elevator_dual_pressurization_command(
        &mut self,
        parameter: Arinc429Parameter<Angle>,
    ) {
        self.opp_elevator_dual_pressurization_command = parameter;
    }

    pub fn set_opp_axis_pitch_failure(&mut self, parameter: DiscreteParameter) {
        self.opp_axis_pitch_failure = parameter;
    }

    pub fn set_opp_left_aileron_lost(&mut self, parameter: DiscreteParameter) {
        self.opp_left_aileron_lost = parameter;
    }

    pub fn set_opp_right_aileron_lost(&mut self, parameter: DiscreteParameter) {
        self.opp_right_aileron_lost = parameter;
    }

    pub fn set_blue_hyd_pressure(&mut self, pressure: Pressure) {
        self.blue_hyd_pressure = pressure;
    }

    pub fn set_green_hyd_pressure(&mut self, pressure: Pressure) {
        self.green_hyd_pressure = pressure;
    }

    pub fn set_yellow_hyd_pressure(&mut self, pressure: Pressure) {
        self.yellow_hyd_pressure = pressure;
    }

    pub fn set_blue_low_pressure(&mut self, parameter: DiscreteParameter) {
        self.blue_low_pressure = parameter;
    }

    pub fn set_green_low_pressure(&mut self, parameter: DiscreteParameter) {
        self.green_low_pressure = parameter;
    }

    pub fn set_yellow_low_pressure(&mut self, parameter: DiscreteParameter) {
        self.yellow_low_pressure = parameter;
    }

    pub fn set_left_aileron_servo_failed(&mut self, parameter: DiscreteParameter) {
        self.left_aileron_servo_failed = parameter;
    }

    pub fn set_right_aileron_servo_failed(&mut self, parameter: DiscreteParameter) {
        self.right_aileron_servo_failed = parameter;
    }

    pub fn set_left_elevator_servo_failed(&mut self, parameter: DiscreteParameter) {
        self.left_elevator_servo_failed = parameter;
    }

    pub fn set_right_elevator_servo_failed(&mut self, parameter: DiscreteParameter) {
        self.right_elevator_servo_failed = parameter;
    }

    pub fn set_ths_motor_fault(&mut self, parameter: DiscreteParameter) {
        self.ths_motor_fault = parameter;
    }

    pub fn set_ths_override_active(&mut self, parameter: DiscreteParameter) {
        self.ths_override_active = parameter;
    }

    pub fn set_capt_pitch_stick_pos(&mut self, position: Ratio) {
        self.capt_pitch_stick_pos = position;
    }

    pub fn set_fo_pitch_stick_pos(&mut self, position: Ratio) {
        self.fo_pitch_stick_pos = position;
    }

    pub fn set_capt_roll_stick_pos(&mut self, position: Ratio) {
        self.capt_roll_stick_pos = position;
    }

    pub fn set_fo_roll_stick_pos(&mut self, position: Ratio) {
        self.fo_roll_stick_pos = position;
    }

    pub fn set_rudder_pedal_pos(&mut self, position: Ratio) {
        self.rudder_pedal_pos = position;
    }

    pub fn set_capt_priority_takeover_pressed(&mut self, parameter: DiscreteParameter) {
        self.capt_priority_takeover_pressed = parameter;
    }

    pub fn set_fo_priority_takeover_pressed(&mut self, parameter: DiscreteParameter) {
        self.fo_priority_takeover_pressed = parameter;
    }

    pub fn set_left_aileron_position(&mut self, position: Angle) {
        self.left_aileron_position = position;
    }

    pub fn set_right_aileron_position(&mut self, position: Angle) {
        self.right_aileron_position = position;
    }

    pub fn set_left_elevator_position(&mut self, position: Angle) {
        self.left_elevator_position = position;
    }

    pub fn set_right_elevator_position(&mut self, position: Angle) {
        self.right_elevator_position = position;
    }

    pub fn set_ths_position(&mut self, position: Angle) {
        self.ths_position = position;
    }

    pub fn set_computer_running(&mut self, running: bool) {
        self.computer_running = running;
    }

    pub fn set_slew_on(&mut self, slew_on: bool) {
        self.slew_on = slew_on;
    }

    pub fn set_pause_on(&mut self, pause_on: bool) {
        self.pause_on = pause_on;
    }

    pub fn set_tracking_mode_on_override(&mut self, override_on: bool) {
        self.tracking_mode_on_override = override_on;
    }
}

impl ElacIdentSide1 for A320ElacParameterTable {
    fn elac_ident_side1(&self) -> &DiscreteParameter {
        &self.elac_ident_side1
    }
}

impl ElacIdentSide2 for A320ElacParameterTable {
    fn elac_ident_side2(&self) -> &DiscreteParameter {
        &self.elac_ident_side2
    }
}

impl ComputedSpeed for A320ElacParameterTable {
    fn computed_speed(&self, index: u8) -> &Arinc429Parameter<Velocity> {
        &self.computed_speed[usize::from(index) - 1]
    }
}

impl MachParameter for A320ElacParameterTable {
    fn mach(&self, index: u8) -> &Arinc429Parameter<MachNumber> {
        &self.mach[usize::from(index) - 1]
    }
}

impl TrueSpeed for A320ElacParameterTable {
    fn true_speed(&self, index: u8) -> &Arinc429Parameter<Velocity> {
        &self.true_speed[usize::from(index) - 1]
    }
}

impl AlphaParameter for A320ElacParameterTable {
    fn alpha(&self, index: u8) -> &Arinc429Parameter<Angle> {
        &self.alpha[usize::from(index) - 1]
    }
}

impl PitchAttitude for A320ElacParameterTable {
    fn pitch_attitude(&self, index: u8) -> &Arinc429Parameter<Angle> {
        &self.pitch_attitude[usize::from(index) - 1]
    }
}

impl RollAttitude for A320ElacParameterTable {
    fn roll_attitude(&self, index: u8) -> &Arinc429Parameter<Angle> {
        &self.roll_attitude[usize::from(index) - 1]
    }
}

impl BodyPitchRate for A320ElacParameterTable {
    fn body_pitch_rate(&self, index: u8) -> &Arinc429Parameter<AngularVelocity> {
        &self.body_pitch_rate[usize::from(index) - 1]
    }
}

impl BodyYawRate for A320ElacParameterTable {
    fn body_yaw_rate(&self, index: u8) -> &Arinc429Parameter<AngularVelocity> {
        &self.body_yaw_rate[usize::from(index) - 1]
    }
}

impl LongitudinalAcceleration for A320ElacParameterTable {
    fn longitudinal_acceleration(&self, index: u8) -> &Arinc429Parameter<Ratio> {
        &self.longitudinal_acceleration[usize::from(index) - 1]
    }
}

impl LateralAcceleration for A320ElacParameterTable {
    fn lateral_acceleration(&self, index: u8) -> &Arinc429Parameter<Ratio> {
        &self.lateral_acceleration[usize::from(index) - 1]
    }
}

impl NormalAcceleration for A320ElacParameterTable {
    fn normal_acceleration(&self, index: u8) -> &Arinc429Parameter<Ratio> {
        &self.normal_acceleration[usize::from(index) - 1]
    }
}

impl PitchAttitudeRate for A320ElacParameterTable {
    fn pitch_attitude_rate(&self, index: u8) -> &Arinc429Parameter<AngularVelocity> {
        &self.pitch_attitude_rate[usize::from(index) - 1]
    }
}

impl RollAttitudeRate for A320ElacParameterTable {
    fn roll_attitude_rate(&self, index: u8) -> &Arinc429Parameter<AngularVelocity> {
        &self.roll_attitude_rate[usize::from(index) - 1]
    }
}

impl RadioHeight for A320ElacParameterTable {
    fn radio_height(&self, index: u8) -> &Arinc429Parameter<Length> {
        &self.radio_height[usize::from(index) - 1]
    }
}

impl MainGearPressed for A320ElacParameterTable {
    fn left_main_gear_pressed(&self, index: u8) -> &DiscreteParameter {
        &self.left_main_gear_pressed[usize::from(index) - 1]
    }

    fn right_main_gear_pressed(&self, index: u8) -> &DiscreteParameter {
        &self.right_main_gear_pressed[usize::from(index) - 1]
    }
}

impl GroundSpoilersActive for A320ElacParameterTable {
    fn ground_spoilers_active(&self, index: u8) -> &DiscreteParameter {
        &self.ground_spoilers_active[usize::from(index) - 1]
    }
}

impl SlatFlapWords for A320ElacParameterTable {
    fn slat_flap_system_status_word(&self, index: u8) -> &Arinc429Parameter<f64> {
        &self.slat_flap_system_status_word[usize::from(index) - 1]
    }

    fn slat_flap_actual_position_word(&self, index: u8) -> &Arinc429Parameter<f64> {
        &self.slat_flap_actual_position_word[usize::from(index) - 1]
    }
}

impl SecStatusWords for A320ElacParameterTable {
    fn sec_discrete_status_word_1(&self, index: u8) -> &Arinc429Parameter<f64> {
        &self.sec_discrete_status_word_1[usize::from(index) - 1]
    }

    fn sec_discrete_status_word_2(&self, index: u8) -> &Arinc429Parameter<f64> {
        &self.sec_discrete_status_word_2[usize::from(index) - 1]
    }
}

impl FcdcStatusWords for A320ElacParameterTable {
    fn fcdc_discrete_status_word_1(&self, index: u8) -> &Arinc429Parameter<f64> {
        &self.fcdc_discrete_status_word_1[usize::from(index) - 1]
    }

    fn fcdc_discrete_status_word_3(&self, index: u8) -> &Arinc429Parameter<f64> {
        &self.fcdc_discrete_status_word_3[usize::from(index) - 1]
    }
}

impl FacYawControlLost for A320ElacParameterTable {
    fn fac_yaw_control_lost(&self, index: u8) -> &DiscreteParameter {
        &self.fac_yaw_control_lost[usize::from(index) - 1]
    }
}

impl FmgcCommands for A320ElacParameterTable {
    fn fmgc_roll_command(&self, index: u8) -> &Arinc429Parameter<Angle> {
        &self.fmgc_roll_command[usize::from(index) - 1]
    }

    fn fmgc_pitch_command(&self, index: u8) -> &Arinc429Parameter<Angle> {
        &self.fmgc_pitch_command[usize::from(index) - 1]
    }

    fn fmgc_yaw_command(&self, index: u8) -> &Arinc429Parameter<Angle> {
        &self.fmgc_yaw_command[usize::from(index) - 1]
    }
}

impl ApDisengaged for A320ElacParameterTable {
    fn ap_disengaged(&self, index: u8) -> &DiscreteParameter {
        &self.ap_disengaged[usize::from(index) - 1]
    }
}

impl OppElacBus for A320ElacParameterTable {
    fn opp_discrete_status_word_1(&self) -> &Arinc429Parameter<f64> {
        &self.opp_discrete_status_word_1
    }

    fn opp_discrete_status_word_2(&self) -> &Arinc429Parameter<f64> {
        &self.opp_discrete_status_word_2
    }

    fn opp_aileron_command(&self) -> &Arinc429Parameter<Angle> {
        &self.opp_aileron_command
    }

    fn opp_elevator_dual_pressurization_command(&self) -> &Arinc429Parameter<Angle> {
        &self.opp_elevator_dual_pressurization_command
    }
}

impl OppElacDiscretes for A320ElacParameterTable {
    fn opp_axis_pitch_failure(&self) -> &DiscreteParameter {
        &self.opp_axis_pitch_failure
    }

    fn opp_left_aileron_lost(&self) -> &DiscreteParameter {
        &self.opp_left_aileron_lost
    }

    fn opp_right_aileron_lost(&self) -> &DiscreteParameter {
        &self.opp_right_aileron_lost
    }
}

impl HydraulicPressures for A320ElacParameterTable {
    fn blue_hyd_pressure(&self) -> Pressure {
        self.blue_hyd_pressure
    }

    fn green_hyd_pressure(&self) -> Pressure {
        self.green_hyd_pressure
    }

    fn yellow_hyd_pressure(&self) -> Pressure {
        self.yellow_hyd_pressure
    }
}

impl HydraulicLowPressure for A320ElacParameterTable {
    fn blue_low_pressure(&self) -> &DiscreteParameter {
        &self.blue_low_pressure
    }

    fn green_low_pressure(&self) -> &DiscreteParameter {
        &self.green_low_pressure
    }

    fn yellow_low_pressure(&self) -> &DiscreteParameter {
        &self.yellow_low_pressure
    }
}

impl SurfaceServoFailures for A320ElacParameterTable {
    fn left_aileron_servo_failed(&self) -> &DiscreteParameter {
        &self.left_aileron_servo_failed
    }

    fn right_aileron_servo_failed(&self) -> &DiscreteParameter {
        &self.right_aileron_servo_failed
    }

    fn left_elevator_servo_failed(&self) -> &DiscreteParameter {
        &self.left_elevator_servo_failed
    }

    fn right_elevator_servo_failed(&self) -> &DiscreteParameter {
        &self.right_elevator_servo_failed
    }
}

impl ThsDiscretes for A320ElacParameterTable {
    fn ths_motor_fault(&self) -> &DiscreteParameter {
        &self.ths_motor_fault
    }

    fn ths_override_active(&self) -> &DiscreteParameter {
        &self.ths_override_active
    }
}

impl SidestickPositions for A320ElacParameterTable {
    fn capt_pitch_stick_pos(&self) -> Ratio {
        self.capt_pitch_stick_pos
    }

    fn fo_pitch_stick_pos(&self) -> Ratio {
        self.fo_pitch_stick_pos
    }

    fn capt_roll_stick_pos(&self) -> Ratio {
        self.capt_roll_stick_pos
    }

    fn fo_roll_stick_pos(&self) -> Ratio {
        self.fo_roll_stick_pos
    }
}

impl RudderPedalPosition for A320ElacParameterTable {
    fn rudder_pedal_pos(&self) -> Ratio {
        self.rudder_pedal_pos
    }
}

impl PriorityTakeoverPressed for A320ElacParameterTable {
    fn capt_priority_takeover_pressed(&self) -> &DiscreteParameter {
        &self.capt_priority_takeover_pressed
    }

    fn fo_priority_takeover_pressed(&self) -> &DiscreteParameter {
        &self.fo_priority_takeover_pressed
    }
}

impl SurfacePositions for A320ElacParameterTable {
    fn left_aileron_position(&self) -> Angle {
        self.left_aileron_position
    }

    fn right_aileron_position(&self) -> Angle {
        self.right_aileron_position
    }

    fn left_elevator_position(&self) -> Angle {
        self.left_elevator_position
    }

    fn right_elevator_position(&self) -> Angle {
        self.right_elevator_position
    }

    fn ths_position(&self) -> Angle {
        self.ths_position
    }
}

impl SimStatus for A320ElacParameterTable {
    fn computer_running(&self) -> bool {
        self.computer_running
    }

    fn slew_on(&self) -> bool {
        self.slew_on
    }

    fn pause_on(&self) -> bool {
        self.pause_on
    }

    fn tracking_mode_on_override(&self) -> bool {
        self.tracking_mode_on_override
    }
}
