use crate::params::OmpParameters;

/// Bojowald global deuteron optical model potential.
///
/// Bojowald, J., Machner, H., et al., "Elastic deuteron scattering and
/// optical model parameters at energies up to 100 MeV",
/// Phys. Rev. C 38, 1153 (1988).
pub fn parameters(e: f64, zt: u32, at: u32) -> OmpParameters {
    let zt = zt as f64;
    let a3 = (at as f64).powf(0.333);

    // Volume absorption only opens above 45 MeV.
    let vi = if e > 45.0 { 0.132 * (e - 45.0) } else { 0.0 };

    OmpParameters {
        v: 81.33 - 0.24 * e + 1.43 * zt / a3,
        vi,
        vsi: 7.8 + 1.04 * a3 - 0.712 * vi,
        vso: 6.0,
        vsoi: 0.0,
        r0: 1.18,
        ri0: 1.27,
        rsi0: 1.27,
        rso0: 0.78 + 0.038 * a3,
        rsoi0: 0.0,
        rc0: 1.3,
        a: 0.636 + 0.035 * a3,
        ai: 0.768 + 0.021 * a3,
        asi: 0.768 + 0.021 * a3,
        aso: 0.78 + 0.038 * a3,
        asoi: 0.0,
    }
}
