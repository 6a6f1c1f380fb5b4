use crate::constants::{Degree, Joule, Megaton, Radian, JOULES_PER_MEGATON, RADEG};

/// Convert an angle from degrees to radians.
///
/// Arguments
/// ---------
/// * `degrees`: angle in degrees
///
/// Return
/// ------
/// * The same angle in radians
pub fn degrees_to_radians(degrees: Degree) -> Radian {
    degrees * RADEG
}

/// Convert an angle from radians to degrees.
///
/// Exact inverse of [`degrees_to_radians`] up to floating-point rounding.
pub fn radians_to_degrees(radians: Radian) -> Degree {
    radians / RADEG
}

/// Convert an energy from joules to megatons of TNT equivalent.
///
/// Total over all finite reals; negative energies convert to negative megatons.
pub fn joules_to_megatons(energy: Joule) -> Megaton {
    energy / JOULES_PER_MEGATON
}

/// Convert an energy from megatons of TNT equivalent to joules.
///
/// Exact inverse of [`joules_to_megatons`] up to floating-point rounding.
pub fn megatons_to_joules(megatons: Megaton) -> Joule {
    megatons * JOULES_PER_MEGATON
}

#[cfg(test)]
mod conversion_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_degrees_radians_roundtrip() {
        assert_eq!(degrees_to_radians(0.0), 0.0);
        assert_relative_eq!(degrees_to_radians(180.0), std::f64::consts::PI);
        assert_relative_eq!(degrees_to_radians(90.0), std::f64::consts::FRAC_PI_2);

        for deg in [-720.0, -37.5, 0.0, 12.25, 90.0, 359.999] {
            assert_relative_eq!(
                radians_to_degrees(degrees_to_radians(deg)),
                deg,
                max_relative = 1e-14
            );
        }
    }

    #[test]
    fn test_joules_megatons_roundtrip() {
        assert_eq!(joules_to_megatons(4.184e15), 1.0);
        assert_eq!(megatons_to_joules(1.0), 4.184e15);

        for megatons in [-3.0, 0.0, 1e-9, 1.0, 57.3, 1e6] {
            assert_relative_eq!(
                joules_to_megatons(megatons_to_joules(megatons)),
                megatons,
                max_relative = 1e-14
            );
        }
    }

    #[test]
    fn test_hiroshima_scale() {
        // ~15 kt yield expressed in joules
        let joules = 6.276e13;
        assert_relative_eq!(joules_to_megatons(joules), 0.015, max_relative = 1e-12);
    }
}
