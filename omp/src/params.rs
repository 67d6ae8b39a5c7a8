use serde::{Deserialize, Serialize};

/// Parameters of an optical model potential for a single projectile-target
/// combination.
///
/// Depths are in MeV, reduced radii and diffusenesses in fm. The physical
/// radius of each term is the reduced radius times `at^(1/3)`. Terms a given
/// parameterization does not define are zero rather than absent, so every set
/// can be fed to a reaction code unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OmpParameters {
    /// Real central well depth
    #[serde(rename = "V")]
    pub v: f64,
    /// Imaginary central (volume) well depth
    #[serde(rename = "Vi")]
    pub vi: f64,
    /// Imaginary surface well depth
    #[serde(rename = "Vsi")]
    pub vsi: f64,
    /// Real spin-orbit well depth
    #[serde(rename = "Vso")]
    pub vso: f64,
    /// Imaginary spin-orbit well depth
    #[serde(rename = "Vsoi")]
    pub vsoi: f64,
    /// Real central reduced radius
    pub r0: f64,
    /// Imaginary central reduced radius
    pub ri0: f64,
    /// Imaginary surface reduced radius
    pub rsi0: f64,
    /// Real spin-orbit reduced radius
    pub rso0: f64,
    /// Imaginary spin-orbit reduced radius
    pub rsoi0: f64,
    /// Coulomb reduced radius
    pub rc0: f64,
    /// Real central diffuseness
    pub a: f64,
    /// Imaginary central diffuseness
    pub ai: f64,
    /// Imaginary surface diffuseness
    pub asi: f64,
    /// Real spin-orbit diffuseness
    pub aso: f64,
    /// Imaginary spin-orbit diffuseness
    pub asoi: f64,
}

impl OmpParameters {
    /// Returns whether every entry is a finite number. Parameterizations
    /// evaluated outside their fit domain can produce infinities or NaNs,
    /// which a reaction code will not accept.
    pub fn is_finite(&self) -> bool {
        [
            self.v, self.vi, self.vsi, self.vso, self.vsoi, self.r0, self.ri0, self.rsi0,
            self.rso0, self.rsoi0, self.rc0, self.a, self.ai, self.asi, self.aso, self.asoi,
        ]
        .iter()
        .all(|x| x.is_finite())
    }
}
