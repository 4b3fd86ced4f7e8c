//! This module loads sets of wells from TOML files.
//!
//! A well-set file lists wells as an array of tables. The thickness may be written as a bare
//! number of nanometers or as a string carrying its own length unit, so layer specifications
//! can be copied from growth sheets without conversion:
//!
//! ```toml
//! [[wells]]
//! name = "GaAs/Al0.3Ga0.7As"
//! thickness = "10 nm"
//! mass_ratio = 0.067
//! potential = 0.3
//! ```

use super::error::QwellError;
use crate::math::constants::{ANGSTROM_TO_M, NM_TO_M, UM_TO_M};
use crate::types::WellView;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// A unit of length accepted for well thicknesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthUnit {
    /// Meters (`m`).
    Meter,
    /// Nanometers (`nm`), the default for bare numbers.
    #[default]
    Nanometer,
    /// Ångström (`A` or `Å`).
    Angstrom,
    /// Micrometers (`um` or `µm`).
    Micrometer,
}

impl LengthUnit {
    /// Converts a length expressed in this unit to meters.
    pub fn to_meters(self, value: f64) -> f64 {
        match self {
            Self::Meter => value,
            Self::Nanometer => value * NM_TO_M,
            Self::Angstrom => value * ANGSTROM_TO_M,
            Self::Micrometer => value * UM_TO_M,
        }
    }

    /// The conventional symbol of the unit.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Meter => "m",
            Self::Nanometer => "nm",
            Self::Angstrom => "Å",
            Self::Micrometer => "µm",
        }
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "m" => Ok(Self::Meter),
            "nm" => Ok(Self::Nanometer),
            "A" | "Å" | "angstrom" => Ok(Self::Angstrom),
            "um" | "µm" | "μm" => Ok(Self::Micrometer),
            other => Err(format!(
                "unknown length unit '{}' (expected m, nm, A or um)",
                other
            )),
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Parses a length such as `"10 nm"`, `"85Å"` or `"1e-8 m"` into meters.
///
/// A bare number is taken to be in nanometers.
pub fn parse_length(s: &str) -> Result<f64, String> {
    let s = s.trim();
    let number = s.trim_end_matches(|c: char| c.is_alphabetic());
    let unit = &s[number.len()..];
    let value: f64 = number
        .trim()
        .parse()
        .map_err(|_| format!("invalid length '{}'", s))?;
    let unit = if unit.is_empty() {
        LengthUnit::default()
    } else {
        unit.parse()?
    };
    Ok(unit.to_meters(value))
}

/// A named well read from a well-set file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WellSpec {
    /// A label for reports.
    pub name: String,
    /// The well thickness, stored in meters.
    #[serde(deserialize_with = "deserialize_thickness")]
    pub thickness: f64,
    /// The effective mass ratio `m* / m_e`.
    pub mass_ratio: f64,
    /// The potential depth in electron volts.
    #[serde(alias = "potential_depth")]
    pub potential: f64,
}

impl WellView for WellSpec {
    #[inline(always)]
    fn thickness(&self) -> f64 {
        self.thickness
    }

    #[inline(always)]
    fn mass_ratio(&self) -> f64 {
        self.mass_ratio
    }

    #[inline(always)]
    fn potential_depth(&self) -> f64 {
        self.potential
    }
}

/// An ordered collection of wells to evaluate together.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct WellSet {
    /// The wells in file order.
    #[serde(default)]
    pub wells: Vec<WellSpec>,
}

impl WellSet {
    /// Loads a well set from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `QwellError::IoError` if the file cannot be read, and the errors of
    /// [`WellSet::load_from_str`] for its content.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use qwell::WellSet;
    /// use std::path::Path;
    ///
    /// let set = WellSet::load_from_file(Path::new("wells.toml")).unwrap();
    /// ```
    pub fn load_from_file(path: &Path) -> Result<Self, QwellError> {
        let content = std::fs::read_to_string(path).map_err(|io_error| QwellError::IoError {
            path: path.to_path_buf(),
            source: io_error,
        })?;

        Self::load_from_str(&content)
    }

    /// Parses a well set from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `QwellError::DeserializationError` for invalid TOML, unknown keys or a
    /// malformed thickness, and `QwellError::EmptyWellSet` if no wells are defined.
    ///
    /// # Examples
    ///
    /// ```
    /// use qwell::WellSet;
    ///
    /// let toml_data = r#"
    /// [[wells]]
    /// name = "GaAs"
    /// thickness = "10 nm"
    /// mass_ratio = 0.067
    /// potential = 0.3
    ///
    /// [[wells]]
    /// name = "InGaAs"
    /// thickness = 85.0
    /// mass_ratio = 0.041
    /// potential = 0.5
    /// "#;
    ///
    /// let set = WellSet::load_from_str(toml_data).unwrap();
    /// assert_eq!(set.wells.len(), 2);
    /// assert!((set.wells[0].thickness - 1.0e-8).abs() < 1e-20);
    /// ```
    pub fn load_from_str(toml_str: &str) -> Result<Self, QwellError> {
        let set: Self = toml::from_str(toml_str)?;
        if set.wells.is_empty() {
            return Err(QwellError::EmptyWellSet);
        }
        Ok(set)
    }

    /// Creates a new empty `WellSet`.
    pub fn new() -> Self {
        Self { wells: Vec::new() }
    }
}

/// Deserializes a thickness given either as a number of nanometers or as a string with a
/// length unit, returning meters.
fn deserialize_thickness<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    struct ThicknessVisitor;

    impl<'de> Visitor<'de> for ThicknessVisitor {
        type Value = f64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a thickness in nanometers or a string such as \"10 nm\"")
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
            Ok(LengthUnit::Nanometer.to_meters(value))
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(LengthUnit::Nanometer.to_meters(value as f64))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(LengthUnit::Nanometer.to_meters(value as f64))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            parse_length(value).map_err(E::custom)
        }
    }

    deserializer.deserialize_any(ThicknessVisitor)
}
