use super::types::{ControlLimits, PlantConstants};

/// Airspeed floor used wherever the composition divides by velocity (ft/s)
pub const MIN_VELOCITY: f64 = 0.01;

// Control surface normalisation
pub const AILERON_MAX_DEFLECTION: f64 = 21.5; // deg
pub const RUDDER_MAX_DEFLECTION: f64 = 30.0; // deg
pub const LEF_MAX_DEFLECTION: f64 = 25.0; // deg
pub const LEF_MIN_DEFLECTION: f64 = 0.0; // deg

// Leading edge flap schedule
pub const LEF_ALPHA_GAIN: f64 = 1.38;
pub const LEF_QBAR_GAIN: f64 = 9.05;
pub const LEF_BIAS: f64 = 1.45; // deg
pub const LEF_LAG_GAIN: f64 = 7.25;
pub const LEF_ACTUATOR_RATE_LIMIT: f64 = 25.0; // deg/s
pub const LEF_ACTUATOR_TIME_CONSTANT: f64 = 0.136; // s

pub const F16_CONSTANTS: PlantConstants = PlantConstants {
    m: 636.94,
    b: 30.0,
    s: 300.0,
    c_bar: 11.32,
    x_cg_r: 0.35,
    x_cg: 0.30,
    h_eng: 0.0,
    j_y: 55814.0,
    j_xz: 982.0,
    j_z: 63100.0,
    j_x: 9496.0,
};

pub const F16_CONTROL_LIMITS: ControlLimits = ControlLimits {
    thrust_cmd_limit_top: 19000.0,
    thrust_cmd_limit_bottom: 1000.0,
    thrust_rate_limit: 10000.0,
    ele_cmd_limit_top: 25.0,
    ele_cmd_limit_bottom: -25.0,
    ele_rate_limit: 60.0,
    ail_cmd_limit_top: 21.5,
    ail_cmd_limit_bottom: -21.5,
    ail_rate_limit: 80.0,
    rud_cmd_limit_top: 30.0,
    rud_cmd_limit_bottom: -30.0,
    rud_rate_limit: 120.0,
    alpha_limit_top: 45.0,
    alpha_limit_bottom: -20.0,
    beta_limit_top: 30.0,
    beta_limit_bottom: -30.0,
};
