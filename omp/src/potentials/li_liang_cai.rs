use crate::params::OmpParameters;

/// Li-Liang-Cai global triton optical model potential.
///
/// Li, X., Liang, C., Cai, C., "Global triton optical model potential",
/// Nucl. Phys. A 789, 103 (2007). Fitted for E < 40 MeV, 48 < A < 232.
pub fn parameters(e: f64, zt: u32, at: u32) -> OmpParameters {
    let nt = at as f64 - zt as f64;
    let zt = zt as f64;
    let at = at as f64;
    let a3 = at.powf(1.0 / 3.0);

    let asymmetry = (nt - zt) / at;

    OmpParameters {
        v: 137.6 - 0.1456 * e + 0.0436 * e.powi(2) + 4.3751 * asymmetry + 1.0474 * zt / a3,
        vi: 7.383 + 0.5025 * e - 0.0097 * e.powi(2),
        vsi: 37.06 - 0.6451 * e - 47.19 * asymmetry,
        vso: 1.9029,
        vsoi: 0.0,
        r0: 1.1201 - 0.1504 / a3,
        ri0: 1.3202 - 0.1776 / a3,
        rsi0: 1.251 - 0.4622 / a3,
        rso0: 0.46991 + 0.1294 / a3,
        rsoi0: 0.0,
        rc0: 1.422,
        a: 0.6833 + 0.0191 * a3,
        ai: 1.119 + 0.01913 * a3,
        asi: 0.8114 + 0.01159 * a3,
        aso: 0.3545 - 0.0522 * a3,
        asoi: 0.0,
    }
}
