//! # Safe Bearing Capacity
//!
//! Linear relation between the final corrected N-value and the allowable
//! soil pressure.

/// Safe bearing capacity per corrected blow (kN/m²)
pub const SBC_PER_BLOW: f64 = 10.0;

/// SBC (kN/m²) = 10 * N2
pub fn compute_sbc(corrected_n2: f64) -> f64 {
    SBC_PER_BLOW * corrected_n2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_mapping() {
        assert_eq!(compute_sbc(50.0), 500.0);
        assert_eq!(compute_sbc(26.84), 10.0 * 26.84);
        assert_eq!(compute_sbc(0.0), 0.0);
    }
}
