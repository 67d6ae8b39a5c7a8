use crate::params::OmpParameters;

/// Koning-Delaroche global proton optical model potential.
///
/// Koning, A.J., Delaroche, J.P., "Local and global nucleon optical models
/// from 1 keV to 200 MeV", Nucl. Phys. A 713, 231 (2003).
pub fn parameters(e: f64, zt: u32, at: u32) -> OmpParameters {
    let nt = at as f64 - zt as f64;
    let zt = zt as f64;
    let at = at as f64;
    let a3 = at.powf(0.333);

    let v1 = 59.30 + 21.0 * (nt - zt) / at - 0.024 * at;
    let v2 = 0.007067 + 4.23e-6 * at;
    let v3 = 1.729e-5 + 1.136e-8 * at;
    let v4 = 7.0e-9;

    let w1 = 14.667 + 0.009629 * at;
    let w2 = 73.55 + 0.0795 * at;

    let d1 = 16.0 + 16.0 * (nt - zt) / at;
    let d2 = 0.0180 + 0.003802 / (1.0 + ((at - 156.0) / 8.0).exp());
    let d3: f64 = 11.5;

    let vso1 = 5.922 + 0.0030 * at;
    let vso2 = 0.0040;

    let wso1 = -3.1;
    let wso2: f64 = 160.0;

    // Fermi energy for protons and the Coulomb correction to the real depth.
    let ef = -8.4075 + 0.01378 * at;
    let rc = 1.198 + 0.697 * at.powf(-0.666) + 12.994 * at.powf(-1.666);
    let vc = 1.73 / rc * zt * a3;

    let delta_e = e - ef;

    let r0 = 1.3039 - 0.4054 / a3;
    let rso0 = 1.1854 - 0.647 / a3;

    OmpParameters {
        v: v1 * (1.0 - v2 * delta_e + v3 * delta_e.powi(2) - v4 * delta_e.powi(3))
            + vc * v1 * (v2 - 2.0 * v3 * delta_e + 3.0 * v4 * delta_e.powi(2)),
        vi: w1 * delta_e.powi(2) / (delta_e.powi(2) + w2.powi(2)),
        vsi: d1 * delta_e.powi(2) / (delta_e.powi(2) + d3.powi(2)) * (-d2 * delta_e).exp(),
        vso: vso1 * (-vso2 * delta_e).exp(),
        vsoi: wso1 * delta_e.powi(2) / (delta_e.powi(2) + wso2.powi(2)),
        r0,
        ri0: r0,
        rsi0: 1.3424 - 0.01585 * a3,
        rso0,
        rsoi0: rso0,
        rc0: rc,
        a: 0.6778 - 1.487e-4 * at,
        ai: 0.6778 - 1.487e-4 * at,
        asi: 0.5187 + 5.205e-4 * at,
        aso: 0.59,
        asoi: 0.59,
    }
}
