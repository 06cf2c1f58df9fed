use super::axis::AxisSet;
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// The fixed catalogue of high-fidelity data tables.
///
/// Names follow the NASA F-16 data report: the coefficient letter pair, then
/// the configuration code (`01` base, `03` base side force, `06` aileron 20°,
/// `07` rudder 30°, `08` leading edge flap, `09` aileron 20° with flap,
/// `11`-`16` damping derivatives and their flap deltas, `9999` sideslip and
/// pitch corrections).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum TableId {
    Cl0120,
    Cl0620,
    Cl0720,
    Cl0820,
    Cl0920,
    Cl1220,
    Cl1320,
    Cl1520,
    Cl1620,
    Cl9999,
    Cm0120,
    Cm0820,
    Cm1020,
    Cm1120,
    Cm1420,
    Cm9999,
    Cn0120,
    Cn0620,
    Cn0720,
    Cn0820,
    Cn0920,
    Cn1220,
    Cn1320,
    Cn1520,
    Cn1620,
    Cn9999,
    Cx0120,
    Cx0820,
    Cx1120,
    Cx1420,
    Cy0320,
    Cy0620,
    Cy0720,
    Cy0820,
    Cy0920,
    Cy1220,
    Cy1320,
    Cy1520,
    Cy1620,
    Cz0120,
    Cz0820,
    Cz1120,
    Cz1420,
    #[strum(serialize = "ETA_DH1")]
    EtaDh1,
}

impl TableId {
    pub const fn axis_set(self) -> AxisSet {
        use TableId::*;
        match self {
            Cx0120 | Cz0120 | Cm0120 => AxisSet::Alpha1Beta1Dh1,
            Cn0120 | Cl0120 => AxisSet::Alpha1Beta1Dh2,
            Cy0320 | Cl0620 | Cl0720 | Cn0620 | Cn0720 | Cy0620 | Cy0720 => AxisSet::Alpha1Beta1,
            Cl0820 | Cl0920 | Cm0820 | Cn0820 | Cn0920 | Cx0820 | Cy0820 | Cy0920 | Cz0820 => {
                AxisSet::Alpha2Beta1
            }
            Cl1220 | Cl1320 | Cl9999 | Cm1020 | Cm1120 | Cm9999 | Cn1220 | Cn1320 | Cn9999
            | Cx1120 | Cy1220 | Cy1320 | Cz1120 => AxisSet::Alpha1,
            Cl1520 | Cl1620 | Cm1420 | Cn1520 | Cn1620 | Cx1420 | Cy1520 | Cy1620 | Cz1420 => {
                AxisSet::Alpha2
            }
            EtaDh1 => AxisSet::Dh1,
        }
    }

    /// Data file holding this table
    pub const fn file_name(self) -> &'static str {
        use TableId::*;
        match self {
            Cl0120 => "CL0120_ALPHA1_BETA1_DH2_601.dat",
            Cl0620 => "CL0620_ALPHA1_BETA1_604.dat",
            Cl0720 => "CL0720_ALPHA1_BETA1_603.dat",
            Cl0820 => "CL0820_ALPHA2_BETA1_602.dat",
            Cl0920 => "CL0920_ALPHA2_BETA1_605.dat",
            Cl1220 => "CL1220_ALPHA1_608.dat",
            Cl1320 => "CL1320_ALPHA1_606.dat",
            Cl1520 => "CL1520_ALPHA2_609.dat",
            Cl1620 => "CL1620_ALPHA2_607.dat",
            Cl9999 => "CL9999_ALPHA1_brett.dat",
            Cm0120 => "CM0120_ALPHA1_BETA1_DH1_101.dat",
            Cm0820 => "CM0820_ALPHA2_BETA1_102.dat",
            Cm1020 => "CM1020_ALPHA1_103.dat",
            Cm1120 => "CM1120_ALPHA1_104.dat",
            Cm1420 => "CM1420_ALPHA2_105.dat",
            Cm9999 => "CM9999_ALPHA1_brett.dat",
            Cn0120 => "CN0120_ALPHA1_BETA1_DH2_501.dat",
            Cn0620 => "CN0620_ALPHA1_BETA1_504.dat",
            Cn0720 => "CN0720_ALPHA1_BETA1_503.dat",
            Cn0820 => "CN0820_ALPHA2_BETA1_502.dat",
            Cn0920 => "CN0920_ALPHA2_BETA1_505.dat",
            Cn1220 => "CN1220_ALPHA1_508.dat",
            Cn1320 => "CN1320_ALPHA1_506.dat",
            Cn1520 => "CN1520_ALPHA2_509.dat",
            Cn1620 => "CN1620_ALPHA2_507.dat",
            Cn9999 => "CN9999_ALPHA1_brett.dat",
            Cx0120 => "CX0120_ALPHA1_BETA1_DH1_201.dat",
            Cx0820 => "CX0820_ALPHA2_BETA1_202.dat",
            Cx1120 => "CX1120_ALPHA1_204.dat",
            Cx1420 => "CX1420_ALPHA2_205.dat",
            Cy0320 => "CY0320_ALPHA1_BETA1_401.dat",
            Cy0620 => "CY0620_ALPHA1_BETA1_403.dat",
            Cy0720 => "CY0720_ALPHA1_BETA1_405.dat",
            Cy0820 => "CY0820_ALPHA2_BETA1_402.dat",
            Cy0920 => "CY0920_ALPHA2_BETA1_404.dat",
            Cy1220 => "CY1220_ALPHA1_408.dat",
            Cy1320 => "CY1320_ALPHA1_406.dat",
            Cy1520 => "CY1520_ALPHA2_409.dat",
            Cy1620 => "CY1620_ALPHA2_407.dat",
            Cz0120 => "CZ0120_ALPHA1_BETA1_DH1_301.dat",
            Cz0820 => "CZ0820_ALPHA2_BETA1_302.dat",
            Cz1120 => "CZ1120_ALPHA1_304.dat",
            Cz1420 => "CZ1420_ALPHA2_305.dat",
            EtaDh1 => "ETA_DH1_brett.dat",
        }
    }

    /// Tensor shape the data file must fill
    pub fn shape(self) -> Vec<usize> {
        self.axis_set().shape()
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        self as usize
    }
}
