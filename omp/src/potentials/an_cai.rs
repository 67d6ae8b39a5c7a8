use crate::params::OmpParameters;

/// An-Cai global deuteron optical model potential.
///
/// An, H. and Cai, C., "Global deuteron optical model potential for the
/// energy range up to 183 MeV", Phys. Rev. C 73, 054605 (2006).
pub fn parameters(e: f64, zt: u32, at: u32) -> OmpParameters {
    let zt = zt as f64;
    let a3 = (at as f64).powf(0.333);

    OmpParameters {
        v: 91.85 - 0.249 * e + 1.116e-4 * e.powi(2) + 0.642 * zt / a3,
        vi: 1.104 + 0.0622 * e,
        vsi: 10.83 - 0.0306 * e,
        vso: 3.557,
        vsoi: 0.0,
        r0: 1.152 - 0.00776 / a3,
        ri0: 1.305 + 0.0997 / a3,
        rsi0: 1.334 + 0.152 / a3,
        rso0: 0.972,
        rsoi0: 0.0,
        rc0: 1.303,
        a: 0.719 + 0.0126 * a3,
        ai: 0.855 - 0.1 * a3,
        asi: 0.531 + 0.062 * a3,
        aso: 1.011,
        asoi: 0.0,
    }
}
