use super::coefficients::{
    AileronDeltas, BaseCoefficients, DampingDeltas, DampingDerivatives, LefDeltas,
    OtherCoefficients, RudderDeltas, ZeroElevator,
};
use crate::tables::TableRegistry;
use crate::utils::{
    rad_to_deg, Coefficients, Control, ModelError, PlantConstants, Result, State,
    AILERON_MAX_DEFLECTION, LEF_MAX_DEFLECTION, MIN_VELOCITY, RUDDER_MAX_DEFLECTION,
};
use tracing::trace;

/// Every table family at one flight condition.
///
/// Nothing here depends on the flap deflection, so a caller can evaluate the
/// tables first and only then advance the flap.
#[derive(Debug, Clone, Copy)]
pub struct TableTerms {
    base: BaseCoefficients,
    damping: DampingDerivatives,
    lef: LefDeltas,
    damping_lef: DampingDerivatives,
    rudder: RudderDeltas,
    aileron: AileronDeltas,
    other: OtherCoefficients,
}

impl TableTerms {
    /// Look up every family at the state's alpha and beta and the commanded
    /// elevator. Rates, airspeed and lateral surfaces must be finite.
    pub fn evaluate(tables: &TableRegistry, state: &State, control: &Control) -> Result<Self> {
        let inputs = [
            state.velocity,
            state.p,
            state.q,
            state.r,
            control.aileron,
            control.rudder,
        ];
        if inputs.iter().any(|v| !v.is_finite()) {
            return Err(ModelError::InterpolationFailure { family: "input" });
        }

        let alpha = rad_to_deg(state.alpha);
        let beta = rad_to_deg(state.beta);
        let el = control.elevator;
        let zero = ZeroElevator::evaluate(tables, alpha, beta)?;
        Ok(Self {
            base: BaseCoefficients::evaluate(tables, alpha, beta, el)?,
            damping: DampingDerivatives::evaluate(tables, alpha)?,
            lef: LefDeltas::against(tables, alpha, beta, &zero)?,
            damping_lef: DampingDeltas::evaluate(tables, alpha)?.0,
            rudder: RudderDeltas::against(tables, alpha, beta, &zero)?,
            aileron: AileronDeltas::against(tables, alpha, beta, &zero)?,
            other: OtherCoefficients::evaluate(tables, alpha, el)?,
        })
    }

    /// Total body axis coefficients at flap deflection `lef` (deg).
    ///
    /// Build up follows the NASA F-16 report: flap terms scaled by
    /// `1 - lef / 25`, rate damping scaled by `c_bar / 2V` or `b / 2V`.
    pub fn assemble(
        &self,
        state: &State,
        control: &Control,
        lef: f64,
        constants: &PlantConstants,
    ) -> Result<Coefficients> {
        let beta = rad_to_deg(state.beta);
        let vt = state.velocity.max(MIN_VELOCITY);
        let (p, q, r) = (state.p, state.q, state.r);

        let dail = control.aileron / AILERON_MAX_DEFLECTION;
        let drud = control.rudder / RUDDER_MAX_DEFLECTION;
        let dlef = 1.0 - lef / LEF_MAX_DEFLECTION;

        let Self {
            base,
            damping,
            lef,
            damping_lef,
            rudder,
            aileron,
            other,
        } = *self;

        let PlantConstants {
            b,
            c_bar,
            x_cg_r,
            x_cg,
            ..
        } = *constants;
        let pitch_scale = c_bar / (2.0 * vt);
        let lateral_scale = b / (2.0 * vt);

        // Cx
        let dxdq = pitch_scale * (damping.cxq + damping_lef.cxq * dlef);
        let cx_tot = base.cx + lef.cx * dlef + dxdq * q;

        // Cz
        let dzdq = pitch_scale * (damping.czq + damping_lef.czq * dlef);
        let cz_tot = base.cz + lef.cz * dlef + dzdq * q;

        // Cm
        let dmdq = pitch_scale * (damping.cmq + damping_lef.cmq * dlef);
        let cm_tot = base.cm * other.eta_el
            + cz_tot * (x_cg_r - x_cg)
            + lef.cm * dlef
            + dmdq * q
            + other.delta_cm
            + other.delta_cm_ds;

        // Cy
        let dyd_ail = aileron.cy_a20 + aileron.cy_a20_lef * dlef;
        let dydr = lateral_scale * (damping.cyr + damping_lef.cyr * dlef);
        let dydp = lateral_scale * (damping.cyp + damping_lef.cyp * dlef);
        let cy_tot = base.cy
            + lef.cy * dlef
            + dyd_ail * dail
            + rudder.cy_r30 * drud
            + dydr * r
            + dydp * p;

        // Cn
        let dnd_ail = aileron.cn_a20 + aileron.cn_a20_lef * dlef;
        let dndr = lateral_scale * (damping.cnr + damping_lef.cnr * dlef);
        let dndp = lateral_scale * (damping.cnp + damping_lef.cnp * dlef);
        let cn_tot = base.cn + lef.cn * dlef - cy_tot * (x_cg_r - x_cg) * (c_bar / b)
            + dnd_ail * dail
            + rudder.cn_r30 * drud
            + dndr * r
            + dndp * p
            + other.delta_cnbeta * beta;

        // Cl
        let dld_ail = aileron.cl_a20 + aileron.cl_a20_lef * dlef;
        let dldr = lateral_scale * (damping.clr + damping_lef.clr * dlef);
        let dldp = lateral_scale * (damping.clp + damping_lef.clp * dlef);
        let cl_tot = base.cl
            + lef.cl * dlef
            + dld_ail * dail
            + rudder.cl_r30 * drud
            + dldr * r
            + dldp * p
            + other.delta_clbeta * beta;

        let coefficients = Coefficients::new(cx_tot, cz_tot, cm_tot, cy_tot, cn_tot, cl_tot);
        trace!(
            "f16 coeff: Cl={} Cm={} Cn={} Cx={} Cy={} Cz={}",
            cl_tot,
            cm_tot,
            cn_tot,
            cx_tot,
            cy_tot,
            cz_tot
        );

        if !coefficients.is_finite() {
            return Err(ModelError::InterpolationFailure { family: "total" });
        }
        Ok(coefficients)
    }
}

/// Total body axis coefficients for a flight state, control input and
/// leading edge flap deflection (deg).
pub fn compose(
    tables: &TableRegistry,
    state: &State,
    control: &Control,
    lef: f64,
    constants: &PlantConstants,
) -> Result<Coefficients> {
    TableTerms::evaluate(tables, state, control)?.assemble(state, control, lef, constants)
}
