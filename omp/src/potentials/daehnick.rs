use crate::params::OmpParameters;

/// Closed neutron shells entering the magic-number smoothing term.
const MAGIC_NUMBERS: [f64; 6] = [8.0, 20.0, 28.0, 50.0, 82.0, 126.0];

/// Daehnick global deuteron optical model potential.
///
/// Daehnick, W.W., Childs, J.D., Vrcelj, Z., "Global optical model potential
/// for elastic deuteron scattering from 12 to 90 MeV",
/// Phys. Rev. C 21, 2253 (1980).
pub fn parameters(e: f64, zt: u32, at: u32) -> OmpParameters {
    let nt = at as f64 - zt as f64;
    let zt = zt as f64;
    let a3 = (at as f64).powf(0.333);

    // Splits the total imaginary strength between volume and surface terms.
    let beta = (-(e * 0.01).powi(2)).exp();

    let mu: f64 = MAGIC_NUMBERS
        .iter()
        .map(|magic| (-((magic - nt) * 0.5).powi(2)).exp())
        .sum();

    let ai = 0.52 + 0.07 * a3 - 0.04 * mu;

    OmpParameters {
        v: 88.0 - 0.283 * e + 0.88 * zt / a3,
        vi: (12.0 + 0.031 * e) * (1.0 - beta),
        vsi: (12.0 + 0.031 * e) * beta,
        vso: 7.2 - 0.032 * e,
        vsoi: 0.0,
        r0: 1.17,
        ri0: 1.376 - 0.01 * e.sqrt(),
        rsi0: 1.376 - 0.01 * e.sqrt(),
        rso0: 1.07,
        rsoi0: 0.0,
        rc0: 1.3,
        a: 0.717 + 0.0012 * e,
        ai,
        asi: ai,
        aso: 0.66,
        asoi: 0.0,
    }
}
