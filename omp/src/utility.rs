use serde::{Deserialize, Serialize};
use std::{
    fs::{File, create_dir_all},
    io::Write,
    path::Path,
};

use crate::{params::OmpParameters, potentials::potential_factory::PotentialKind};

/// A fully resolved optical model input for a downstream reaction code:
/// the requested parameterization, the kinematics and the evaluated
/// parameter set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmpInput {
    pub potential: PotentialKind,
    pub e: f64,
    pub zt: u32,
    pub at: u32,
    pub params: OmpParameters,
}

impl OmpInput {
    pub fn new(potential: PotentialKind, e: f64, zt: u32, at: u32) -> Self {
        Self {
            potential,
            e,
            zt,
            at,
            params: potential.parameters(e, zt, at),
        }
    }
}

/// Saves the resolved input as `data/<filename>.json` relative to the
/// current directory, creating the directory if needed.
pub fn save_input(filename: &str, input: &OmpInput) -> Result<(), std::io::Error> {
    let mut path = std::env::current_dir()?;
    path.push("data");
    path.push(filename);
    path.set_extension("json");
    let filepath = path.parent().unwrap();

    let buf = serde_json::to_string_pretty(input).unwrap();

    if !Path::new(filepath).exists() {
        create_dir_all(filepath)?;
        println!("created path {}", filepath.display());
    }

    let mut file = File::create(&path)?;
    file.write_all(buf.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_serialization() {
        let input = OmpInput::new(PotentialKind::Bojowald, 30.0, 6, 12);

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["potential"], "bojowald");
        assert_eq!(json["e"], 30.0);
        assert_eq!(json["params"]["Vi"], 0.0);

        let back: OmpInput = serde_json::from_value(json).unwrap();
        assert_eq!(back.params, input.params);
    }
}
