use super::constants::{
    BRANCH_WIDTH, ENERGY_PREFACTOR, INFINITE_WELL_PREFACTOR, STRENGTH_PREFACTOR,
};
use crate::error::QwellError;

/// Checks that a well thickness in meters is positive and finite.
pub fn validate_thickness(thickness: f64) -> Result<f64, QwellError> {
    if thickness.is_finite() && thickness > 0.0 {
        Ok(thickness)
    } else {
        Err(QwellError::InvalidThickness(thickness))
    }
}

/// Checks that an effective mass ratio is positive and finite.
pub fn validate_mass_ratio(mass_ratio: f64) -> Result<f64, QwellError> {
    if mass_ratio.is_finite() && mass_ratio > 0.0 {
        Ok(mass_ratio)
    } else {
        Err(QwellError::InvalidMassRatio(mass_ratio))
    }
}

/// Checks that a well-strength parameter is non-negative and finite.
pub fn validate_strength(strength: f64) -> Result<f64, QwellError> {
    if strength.is_finite() && strength >= 0.0 {
        Ok(strength)
    } else {
        Err(QwellError::InvalidStrength(strength))
    }
}

/// Maps the physical description of a well to its dimensionless strength
/// `P = k * a * sqrt(m * U)`.
///
/// A non-positive potential depth confines nothing and maps to `P = 0`.
///
/// # Errors
///
/// Returns `InvalidThickness` or `InvalidMassRatio` for non-positive or non-finite inputs,
/// and `InvalidPotential` for a NaN depth.
pub fn well_strength(
    thickness: f64,
    mass_ratio: f64,
    potential_depth: f64,
) -> Result<f64, QwellError> {
    let thickness = validate_thickness(thickness)?;
    let mass_ratio = validate_mass_ratio(mass_ratio)?;
    if potential_depth.is_nan() {
        return Err(QwellError::InvalidPotential(potential_depth));
    }
    if potential_depth <= 0.0 {
        return Ok(0.0);
    }
    validate_strength(STRENGTH_PREFACTOR * thickness * (mass_ratio * potential_depth).sqrt())
}

/// Returns the number of bound states `N = floor(P / (pi/2)) + 1` supported by a well of
/// strength `P`.
///
/// Every well of non-negative strength holds at least its ground state. The count saturates
/// at `u32::MAX` for absurdly strong wells.
pub fn num_states_scaled(strength: f64) -> Result<u32, QwellError> {
    let strength = validate_strength(strength)?;
    Ok(((strength / BRANCH_WIDTH).floor() as u32).saturating_add(1))
}

/// Checks that `n` names one of the bound states of a well of strength `P`.
pub fn validate_quantum_number(strength: f64, n: u32) -> Result<u32, QwellError> {
    let max_states = num_states_scaled(strength)?;
    if n == 0 || n > max_states {
        return Err(QwellError::QuantumNumberOutOfRange { n, max_states });
    }
    Ok(max_states)
}

/// Converts a dimensionless energy to electron volts, `E * c / (m * a²)`.
///
/// The thickness and mass ratio must already have passed validation.
#[inline]
pub fn to_physical(scaled_energy: f64, mass_ratio: f64, thickness: f64) -> f64 {
    scaled_energy * ENERGY_PREFACTOR / (mass_ratio * thickness.powi(2))
}

/// Ground-state energy in eV of an infinitely deep well of the same thickness and mass.
///
/// This closed form is an upper bound on the finite-well ground state and is useful as a
/// sanity baseline.
pub fn infinite_well_ground_state_energy(
    thickness: f64,
    mass_ratio: f64,
) -> Result<f64, QwellError> {
    let thickness = validate_thickness(thickness)?;
    let mass_ratio = validate_mass_ratio(mass_ratio)?;
    Ok(INFINITE_WELL_PREFACTOR / (thickness.powi(2) * mass_ratio))
}
