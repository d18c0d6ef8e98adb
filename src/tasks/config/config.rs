/* ************************************************************************ **
** This file is part of crysym, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// NOTE: Please make sure to use the YamlRead trait when deserializing these types!

use failure::Error;

/// Settings that passed validation.
#[derive(Serialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSettings(pub Settings);

/// Raw deserialized form of settings.
///
/// Call `validate` before use.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Fractional distance below which two atoms are considered to coincide.
    ///
    /// This is also the tolerance of the lattice reductions and of the
    /// metric comparisons in the lattice point group search.
    #[serde(default = "_settings__symmetry_precision")]
    pub symmetry_precision: f64,

    /// Iteration limit for the Niggli and Delaunay reductions.
    #[serde(default = "_settings__max_iterations")]
    pub max_iterations: usize,
}
derive_yaml_read!{Settings}
fn _settings__symmetry_precision() -> f64 { 1e-5 }
fn _settings__max_iterations() -> usize { 10_000 }

impl Default for Settings {
    fn default() -> Self { crate::from_empty_mapping().expect("bug! settings without defaults") }
}

impl Settings {
    pub fn validate(self) -> Result<ValidatedSettings, Error> {
        let precision = self.symmetry_precision;
        if !(precision.is_finite() && precision > 0.0) {
            bail!("symmetry-precision must be positive (got {})", precision);
        }
        if precision >= 0.5 {
            bail!("symmetry-precision is a fractional distance and must be below 0.5 (got {})", precision);
        }
        if self.max_iterations == 0 {
            bail!("max-iterations must be at least 1");
        }
        Ok(ValidatedSettings(self))
    }
}

impl std::ops::Deref for ValidatedSettings {
    type Target = Settings;

    fn deref(&self) -> &Settings { &self.0 }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crate::YamlRead;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.symmetry_precision, 1e-5);
        assert_eq!(settings.max_iterations, 10_000);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn kebab_case() {
        let yaml = "symmetry-precision: 1.0e-3\nmax-iterations: 50\n";
        let settings = Settings::from_reader(yaml.as_bytes()).unwrap();
        assert_eq!(settings.symmetry_precision, 1e-3);
        assert_eq!(settings.max_iterations, 50);

        // unknown keys are only warned about
        let yaml = "symmetry-precison: 1.0e-3\n";
        let settings = Settings::from_reader(yaml.as_bytes()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn validation() {
        let bad = |symmetry_precision, max_iterations| {
            Settings { symmetry_precision, max_iterations }.validate().is_err()
        };
        assert!(bad(0.0, 10));
        assert!(bad(-1e-5, 10));
        assert!(bad(std::f64::NAN, 10));
        assert!(bad(0.5, 10));
        assert!(bad(1e-5, 0));
        assert!(!bad(1e-5, 1));
    }
}
