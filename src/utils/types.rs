use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Flight state handed over by the host.
///
/// npos, epos, altitude in ft; phi, theta, psi in rad; velocity in ft/s;
/// alpha, beta in rad; p, q, r in rad/s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub npos: f64,
    pub epos: f64,
    pub altitude: f64,
    pub phi: f64,
    pub theta: f64,
    pub psi: f64,
    pub velocity: f64,
    pub alpha: f64,
    pub beta: f64,
    pub p: f64,
    pub q: f64,
    pub r: f64,
}

impl From<[f64; 12]> for State {
    fn from(value: [f64; 12]) -> Self {
        Self {
            npos: value[0],
            epos: value[1],
            altitude: value[2],
            phi: value[3],
            theta: value[4],
            psi: value[5],
            velocity: value[6],
            alpha: value[7],
            beta: value[8],
            p: value[9],
            q: value[10],
            r: value[11],
        }
    }
}

/// Control input. Thrust in lbf, surface deflections in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Control {
    pub thrust: f64,
    pub elevator: f64,
    pub aileron: f64,
    pub rudder: f64,
}

impl Default for Control {
    fn default() -> Self {
        Self {
            thrust: 1000.0,
            elevator: 0.0,
            aileron: 0.0,
            rudder: 0.0,
        }
    }
}

impl From<[f64; 4]> for Control {
    fn from(value: [f64; 4]) -> Self {
        Self {
            thrust: value[0],
            elevator: value[1],
            aileron: value[2],
            rudder: value[3],
        }
    }
}

/// Total aerodynamic force and moment coefficients in body axes
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub c_x: f64,
    pub c_z: f64,
    pub c_m: f64,
    pub c_y: f64,
    pub c_n: f64,
    pub c_l: f64,
}

impl Coefficients {
    pub fn new(c_x: f64, c_z: f64, c_m: f64, c_y: f64, c_n: f64, c_l: f64) -> Self {
        Self {
            c_x,
            c_z,
            c_m,
            c_y,
            c_n,
            c_l,
        }
    }

    /// Ordered as `[Cx, Cz, Cm, Cy, Cn, Cl]`
    pub fn to_array(&self) -> [f64; 6] {
        [self.c_x, self.c_z, self.c_m, self.c_y, self.c_n, self.c_l]
    }

    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|c| c.is_finite())
    }

    /// Dimensional body forces (lbf) and moments (ft·lbf) at dynamic pressure `qbar`.
    ///
    /// Moments are ordered roll, pitch, yaw.
    pub fn forces_and_moments(
        &self,
        qbar: f64,
        constants: &PlantConstants,
    ) -> (Vector3<f64>, Vector3<f64>) {
        let qs = qbar * constants.s;
        let forces = Vector3::new(self.c_x, self.c_y, self.c_z) * qs;
        let moments = Vector3::new(
            constants.b * self.c_l,
            constants.c_bar * self.c_m,
            constants.b * self.c_n,
        ) * qs;
        (forces, moments)
    }
}

/// Mass and geometry of the airframe.
///
/// m: slugs, b: span ft, s: planform area ft^2, c_bar: mean aero chord ft,
/// x_cg_r / x_cg: reference and actual centre of gravity as a fraction of c_bar,
/// h_eng: engine angular momentum, j_*: slug-ft^2
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlantConstants {
    pub m: f64,
    pub b: f64,
    pub s: f64,
    pub c_bar: f64,
    pub x_cg_r: f64,
    pub x_cg: f64,
    pub h_eng: f64,
    pub j_y: f64,
    pub j_xz: f64,
    pub j_z: f64,
    pub j_x: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlLimits {
    pub thrust_cmd_limit_top: f64,
    pub thrust_cmd_limit_bottom: f64,
    pub thrust_rate_limit: f64,
    pub ele_cmd_limit_top: f64,
    pub ele_cmd_limit_bottom: f64,
    pub ele_rate_limit: f64,
    pub ail_cmd_limit_top: f64,
    pub ail_cmd_limit_bottom: f64,
    pub ail_rate_limit: f64,
    pub rud_cmd_limit_top: f64,
    pub rud_cmd_limit_bottom: f64,
    pub rud_rate_limit: f64,
    pub alpha_limit_top: f64,
    pub alpha_limit_bottom: f64,
    pub beta_limit_top: f64,
    pub beta_limit_bottom: f64,
}
