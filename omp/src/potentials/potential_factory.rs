use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{an_cai, bojowald, daehnick, koning_delaroche, li_liang_cai};
use crate::params::OmpParameters;

/// The registered global optical model parameterizations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PotentialKind {
    #[serde(rename = "an-cai")]
    AnCai,
    #[serde(rename = "daehnick")]
    Daehnick,
    #[serde(rename = "bojowald")]
    Bojowald,
    #[serde(rename = "koning-delaroche-proton")]
    KoningDelarocheProton,
    #[serde(rename = "li-liang-cai-triton")]
    LiLiangCaiTriton,
}

impl PotentialKind {
    pub const ALL: [PotentialKind; 5] = [
        PotentialKind::AnCai,
        PotentialKind::Daehnick,
        PotentialKind::Bojowald,
        PotentialKind::KoningDelarocheProton,
        PotentialKind::LiLiangCaiTriton,
    ];

    /// Stable keywords accepted by [`create_parameters`].
    pub const KEYWORDS: [&'static str; 5] = [
        "an-cai",
        "daehnick",
        "bojowald",
        "koning-delaroche-proton",
        "li-liang-cai-triton",
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            PotentialKind::AnCai => "an-cai",
            PotentialKind::Daehnick => "daehnick",
            PotentialKind::Bojowald => "bojowald",
            PotentialKind::KoningDelarocheProton => "koning-delaroche-proton",
            PotentialKind::LiLiangCaiTriton => "li-liang-cai-triton",
        }
    }

    pub fn from_keyword(keyword: &str) -> Result<Self, UnknownPotentialError> {
        match keyword {
            "an-cai" => Ok(PotentialKind::AnCai),
            "daehnick" => Ok(PotentialKind::Daehnick),
            "bojowald" => Ok(PotentialKind::Bojowald),
            "koning-delaroche-proton" => Ok(PotentialKind::KoningDelarocheProton),
            "li-liang-cai-triton" => Ok(PotentialKind::LiLiangCaiTriton),
            _ => Err(UnknownPotentialError {
                keyword: keyword.to_string(),
            }),
        }
    }

    /// Evaluates this parameterization for beam energy `e` in MeV and
    /// a target with `zt` protons and mass number `at`.
    ///
    /// Inputs are not checked against the published fit domains; outside of
    /// them the formulas extrapolate and degenerate inputs such as `at = 0`
    /// carry their non-finite arithmetic through to the output.
    pub fn parameters(self, e: f64, zt: u32, at: u32) -> OmpParameters {
        match self {
            PotentialKind::AnCai => an_cai::parameters(e, zt, at),
            PotentialKind::Daehnick => daehnick::parameters(e, zt, at),
            PotentialKind::Bojowald => bojowald::parameters(e, zt, at),
            PotentialKind::KoningDelarocheProton => koning_delaroche::parameters(e, zt, at),
            PotentialKind::LiLiangCaiTriton => li_liang_cai::parameters(e, zt, at),
        }
    }
}

impl std::fmt::Display for PotentialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Requested potential keyword is not registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "potential {keyword} is not in the set of allowed potentials {:?}",
    PotentialKind::KEYWORDS
)]
pub struct UnknownPotentialError {
    pub keyword: String,
}

/// Creates the optical model potential parameters for the potential with the
/// given keyword, see [`PotentialKind::KEYWORDS`].
///
/// `e` is the normal kinematics beam energy in MeV, `zt` and `at` are the
/// target proton and mass numbers.
pub fn create_parameters(
    e: f64,
    zt: u32,
    at: u32,
    potential: &str,
) -> Result<OmpParameters, UnknownPotentialError> {
    Ok(PotentialKind::from_keyword(potential)?.parameters(e, zt, at))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_round_trip() {
        for kind in PotentialKind::ALL {
            assert_eq!(PotentialKind::from_keyword(kind.keyword()), Ok(kind));
            assert_eq!(kind.to_string(), kind.keyword());
        }

        assert_eq!(PotentialKind::ALL.map(|kind| kind.keyword()), PotentialKind::KEYWORDS);
    }

    #[test]
    fn unknown_potential() {
        let err = create_parameters(10.0, 6, 12, "unknown-potential").unwrap_err();
        assert_eq!(err.keyword, "unknown-potential");

        let message = err.to_string();
        for keyword in PotentialKind::KEYWORDS {
            assert!(message.contains(keyword), "message misses {}: {}", keyword, message);
        }
    }

    #[test]
    fn dispatch_matches_formulas() {
        for kind in PotentialKind::ALL {
            let dispatched = create_parameters(25.0, 28, 58, kind.keyword()).unwrap();
            assert_eq!(dispatched, kind.parameters(25.0, 28, 58));
        }
    }

    #[test]
    fn kind_serialization() {
        let json = serde_json::to_string(&PotentialKind::KoningDelarocheProton).unwrap();
        assert_eq!(json, "\"koning-delaroche-proton\"");

        let kind: PotentialKind = serde_json::from_str("\"li-liang-cai-triton\"").unwrap();
        assert_eq!(kind, PotentialKind::LiLiangCaiTriton);
    }
}
