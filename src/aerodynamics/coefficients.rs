//! Coefficient families looked up in the table registry.
//!
//! Every lookup takes angles in degrees. A family is evaluated as a whole;
//! if any member is not finite the family fails with `InterpolationFailure`.

use crate::tables::{TableId, TableRegistry};
use crate::utils::{ModelError, Result};

fn ensure_finite(family: &'static str, values: &[f64]) -> Result<()> {
    if values.iter().any(|v| !v.is_finite()) {
        return Err(ModelError::InterpolationFailure { family });
    }
    Ok(())
}

struct Lookup<'a> {
    tables: &'a TableRegistry,
    alpha: f64,
    beta: f64,
}

impl Lookup<'_> {
    fn alpha(&self, id: TableId) -> Result<f64> {
        Ok(self.tables.interpolate(id, &[self.alpha])?)
    }

    fn alpha_beta(&self, id: TableId) -> Result<f64> {
        Ok(self.tables.interpolate(id, &[self.alpha, self.beta])?)
    }

    fn alpha_beta_el(&self, id: TableId, el: f64) -> Result<f64> {
        Ok(self.tables.interpolate(id, &[self.alpha, self.beta, el])?)
    }

    /// Base values `(Cx, Cz, Cm, Cy, Cn, Cl)` at elevator `el`
    fn base(&self, el: f64) -> Result<[f64; 6]> {
        Ok([
            self.alpha_beta_el(TableId::Cx0120, el)?,
            self.alpha_beta_el(TableId::Cz0120, el)?,
            self.alpha_beta_el(TableId::Cm0120, el)?,
            self.alpha_beta(TableId::Cy0320)?,
            self.alpha_beta_el(TableId::Cn0120, el)?,
            self.alpha_beta_el(TableId::Cl0120, el)?,
        ])
    }

    /// `(Cy, Cn, Cl)` with the flap deployed
    fn lateral_lef(&self) -> Result<[f64; 3]> {
        Ok([
            self.alpha_beta(TableId::Cy0820)?,
            self.alpha_beta(TableId::Cn0820)?,
            self.alpha_beta(TableId::Cl0820)?,
        ])
    }
}

fn lookup(tables: &TableRegistry, alpha: f64, beta: f64) -> Lookup<'_> {
    Lookup {
        tables,
        alpha,
        beta,
    }
}

/// Zero elevator values the delta families are differenced against
#[derive(Debug, Clone, Copy)]
pub struct ZeroElevator {
    clean: [f64; 6],
    lateral_lef: [f64; 3],
}

impl ZeroElevator {
    pub fn evaluate(tables: &TableRegistry, alpha: f64, beta: f64) -> Result<Self> {
        let l = lookup(tables, alpha, beta);
        Ok(Self {
            clean: l.base(0.0)?,
            lateral_lef: l.lateral_lef()?,
        })
    }
}

/// Clean configuration coefficients
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BaseCoefficients {
    pub cx: f64,
    pub cz: f64,
    pub cm: f64,
    pub cy: f64,
    pub cn: f64,
    pub cl: f64,
}

impl BaseCoefficients {
    pub fn evaluate(tables: &TableRegistry, alpha: f64, beta: f64, el: f64) -> Result<Self> {
        let [cx, cz, cm, cy, cn, cl] = lookup(tables, alpha, beta).base(el)?;
        ensure_finite("base", &[cx, cz, cm, cy, cn, cl])?;
        Ok(Self {
            cx,
            cz,
            cm,
            cy,
            cn,
            cl,
        })
    }
}

/// Rate damping derivatives, functions of alpha only
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DampingDerivatives {
    pub cxq: f64,
    pub cyr: f64,
    pub cyp: f64,
    pub czq: f64,
    pub clr: f64,
    pub clp: f64,
    pub cmq: f64,
    pub cnr: f64,
    pub cnp: f64,
}

impl DampingDerivatives {
    pub fn evaluate(tables: &TableRegistry, alpha: f64) -> Result<Self> {
        let l = lookup(tables, alpha, 0.0);
        let d = Self {
            cxq: l.alpha(TableId::Cx1120)?,
            cyr: l.alpha(TableId::Cy1320)?,
            cyp: l.alpha(TableId::Cy1220)?,
            czq: l.alpha(TableId::Cz1120)?,
            clr: l.alpha(TableId::Cl1320)?,
            clp: l.alpha(TableId::Cl1220)?,
            cmq: l.alpha(TableId::Cm1120)?,
            cnr: l.alpha(TableId::Cn1320)?,
            cnp: l.alpha(TableId::Cn1220)?,
        };
        ensure_finite("damping", &d.to_array())?;
        Ok(d)
    }

    fn to_array(self) -> [f64; 9] {
        [
            self.cxq, self.cyr, self.cyp, self.czq, self.clr, self.clp, self.cmq, self.cnr,
            self.cnp,
        ]
    }
}

/// Flap effect on the damping derivatives. The tables hold deltas already.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DampingDeltas(pub DampingDerivatives);

impl DampingDeltas {
    pub fn evaluate(tables: &TableRegistry, alpha: f64) -> Result<Self> {
        let l = lookup(tables, alpha, 0.0);
        let d = DampingDerivatives {
            cxq: l.alpha(TableId::Cx1420)?,
            cyr: l.alpha(TableId::Cy1620)?,
            cyp: l.alpha(TableId::Cy1520)?,
            czq: l.alpha(TableId::Cz1420)?,
            clr: l.alpha(TableId::Cl1620)?,
            clp: l.alpha(TableId::Cl1520)?,
            cmq: l.alpha(TableId::Cm1420)?,
            cnr: l.alpha(TableId::Cn1620)?,
            cnp: l.alpha(TableId::Cn1520)?,
        };
        ensure_finite("damping_lef", &d.to_array())?;
        Ok(Self(d))
    }
}

/// Fully deployed flap minus the clean value at zero elevator
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LefDeltas {
    pub cx: f64,
    pub cz: f64,
    pub cm: f64,
    pub cy: f64,
    pub cn: f64,
    pub cl: f64,
}

impl LefDeltas {
    pub fn evaluate(tables: &TableRegistry, alpha: f64, beta: f64) -> Result<Self> {
        let zero = ZeroElevator::evaluate(tables, alpha, beta)?;
        Self::against(tables, alpha, beta, &zero)
    }

    pub fn against(
        tables: &TableRegistry,
        alpha: f64,
        beta: f64,
        zero: &ZeroElevator,
    ) -> Result<Self> {
        let l = lookup(tables, alpha, beta);
        let [cx0, cz0, cm0, cy0, cn0, cl0] = zero.clean;
        let [cy_lef, cn_lef, cl_lef] = zero.lateral_lef;

        let d = Self {
            cx: l.alpha_beta(TableId::Cx0820)? - cx0,
            cz: l.alpha_beta(TableId::Cz0820)? - cz0,
            cm: l.alpha_beta(TableId::Cm0820)? - cm0,
            cy: cy_lef - cy0,
            cn: cn_lef - cn0,
            cl: cl_lef - cl0,
        };
        ensure_finite("lef", &[d.cx, d.cz, d.cm, d.cy, d.cn, d.cl])?;
        Ok(d)
    }
}

/// 30° rudder minus the clean value
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RudderDeltas {
    pub cy_r30: f64,
    pub cn_r30: f64,
    pub cl_r30: f64,
}

impl RudderDeltas {
    pub fn evaluate(tables: &TableRegistry, alpha: f64, beta: f64) -> Result<Self> {
        let zero = ZeroElevator::evaluate(tables, alpha, beta)?;
        Self::against(tables, alpha, beta, &zero)
    }

    pub fn against(
        tables: &TableRegistry,
        alpha: f64,
        beta: f64,
        zero: &ZeroElevator,
    ) -> Result<Self> {
        let l = lookup(tables, alpha, beta);
        let [_, _, _, cy0, cn0, cl0] = zero.clean;

        let d = Self {
            cy_r30: l.alpha_beta(TableId::Cy0720)? - cy0,
            cn_r30: l.alpha_beta(TableId::Cn0720)? - cn0,
            cl_r30: l.alpha_beta(TableId::Cl0720)? - cl0,
        };
        ensure_finite("rudder", &[d.cy_r30, d.cn_r30, d.cl_r30])?;
        Ok(d)
    }
}

/// 20° aileron deltas, plus the extra change when the flap is deployed
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AileronDeltas {
    pub cy_a20: f64,
    pub cy_a20_lef: f64,
    pub cn_a20: f64,
    pub cn_a20_lef: f64,
    pub cl_a20: f64,
    pub cl_a20_lef: f64,
}

impl AileronDeltas {
    pub fn evaluate(tables: &TableRegistry, alpha: f64, beta: f64) -> Result<Self> {
        let zero = ZeroElevator::evaluate(tables, alpha, beta)?;
        Self::against(tables, alpha, beta, &zero)
    }

    pub fn against(
        tables: &TableRegistry,
        alpha: f64,
        beta: f64,
        zero: &ZeroElevator,
    ) -> Result<Self> {
        let l = lookup(tables, alpha, beta);
        let [_, _, _, cy0, cn0, cl0] = zero.clean;
        let [cy_lef, cn_lef, cl_lef] = zero.lateral_lef;

        let cy_a20 = l.alpha_beta(TableId::Cy0620)? - cy0;
        let cn_a20 = l.alpha_beta(TableId::Cn0620)? - cn0;
        let cl_a20 = l.alpha_beta(TableId::Cl0620)? - cl0;
        let d = Self {
            cy_a20,
            cy_a20_lef: l.alpha_beta(TableId::Cy0920)? - cy_lef - cy_a20,
            cn_a20,
            cn_a20_lef: l.alpha_beta(TableId::Cn0920)? - cn_lef - cn_a20,
            cl_a20,
            cl_a20_lef: l.alpha_beta(TableId::Cl0920)? - cl_lef - cl_a20,
        };
        ensure_finite(
            "aileron",
            &[
                d.cy_a20,
                d.cy_a20_lef,
                d.cn_a20,
                d.cn_a20_lef,
                d.cl_a20,
                d.cl_a20_lef,
            ],
        )?;
        Ok(d)
    }
}

/// Sideslip and pitch corrections and elevator effectiveness
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OtherCoefficients {
    pub delta_cnbeta: f64,
    pub delta_clbeta: f64,
    pub delta_cm: f64,
    pub eta_el: f64,
    /// Deep stall pitch correction, not modelled
    pub delta_cm_ds: f64,
}

impl OtherCoefficients {
    pub fn evaluate(tables: &TableRegistry, alpha: f64, el: f64) -> Result<Self> {
        let l = lookup(tables, alpha, 0.0);
        let d = Self {
            delta_cnbeta: l.alpha(TableId::Cn9999)?,
            delta_clbeta: l.alpha(TableId::Cl9999)?,
            delta_cm: l.alpha(TableId::Cm9999)?,
            eta_el: tables.interpolate(TableId::EtaDh1, &[el])?,
            delta_cm_ds: 0.0,
        };
        ensure_finite(
            "other",
            &[d.delta_cnbeta, d.delta_clbeta, d.delta_cm, d.eta_el, d.delta_cm_ds],
        )?;
        Ok(d)
    }
}
