//! # Geometric Validity Checks
//!
//! Shared validation of span lengths and load positions. Every catalog
//! entry runs the checks relevant to its beam type before computing
//! anything, so "do these lengths form a valid beam" has exactly one
//! tested implementation instead of 32 inline copies.
//!
//! All checks return [`GeometryError`] on failure; the figure functions
//! convert a failure into an empty diagram with an error-flagged axis
//! label.

use crate::errors::GeometryError;

/// Check that a span length is finite and strictly positive.
#[inline]
pub fn check_span(l: f64) -> Result<(), GeometryError> {
    if l.is_finite() && l > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidLengths)
    }
}

/// Check that a position parameter lies on the beam: `0 <= a <= l`.
///
/// `name` is the parameter's display name, carried into the error label
/// (e.g. `"invalid a"`).
#[inline]
pub fn check_position(name: &'static str, a: f64, l: f64) -> Result<(), GeometryError> {
    if a.is_finite() && (0.0..=l).contains(&a) {
        Ok(())
    } else {
        Err(GeometryError::InvalidPosition { name })
    }
}

/// Check a loaded segment: both the offset `a` and the loaded length `b`
/// must be non-negative and must fit on the span (`a + b <= l`).
#[inline]
pub fn check_segment(a: f64, b: f64, l: f64) -> Result<(), GeometryError> {
    if a.is_finite() && b.is_finite() && a >= 0.0 && b >= 0.0 && a + b <= l {
        Ok(())
    } else {
        Err(GeometryError::InvalidLengths)
    }
}

/// Check a symmetric pair of load positions `a` from each support:
/// `0 <= a` and `2a <= l` so the loads do not cross midspan.
#[inline]
pub fn check_symmetric_offset(name: &'static str, a: f64, l: f64) -> Result<(), GeometryError> {
    if a.is_finite() && a >= 0.0 && 2.0 * a <= l {
        Ok(())
    } else {
        Err(GeometryError::InvalidPosition { name })
    }
}

/// Check a supported span with an overhang: positive span, non-negative
/// overhang (a zero-length overhang is a valid degenerate case).
#[inline]
pub fn check_overhang(span: f64, overhang: f64) -> Result<(), GeometryError> {
    check_span(span)?;
    if overhang.is_finite() && overhang >= 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidLengths)
    }
}

/// Check that two load positions are strictly ordered along the beam.
#[inline]
pub fn check_ordered_positions(first: f64, second: f64) -> Result<(), GeometryError> {
    if first.is_finite() && second.is_finite() && first < second {
        Ok(())
    } else {
        Err(GeometryError::InvalidLengths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_positive() {
        assert!(check_span(10.0).is_ok());
        assert!(check_span(0.0).is_err());
        assert!(check_span(-1.0).is_err());
        assert!(check_span(f64::NAN).is_err());
        assert!(check_span(f64::INFINITY).is_err());
    }

    #[test]
    fn test_position_bounds() {
        assert!(check_position("a", 0.0, 10.0).is_ok());
        assert!(check_position("a", 10.0, 10.0).is_ok());
        assert!(check_position("a", 10.1, 10.0).is_err());
        assert!(check_position("a", -0.1, 10.0).is_err());
    }

    #[test]
    fn test_position_error_names_parameter() {
        let err = check_position("a_load", 99.0, 10.0).unwrap_err();
        assert_eq!(err.to_string(), "invalid a_load");
    }

    #[test]
    fn test_segment_fits_span() {
        // Exactly filling the span is allowed
        assert!(check_segment(2.0, 8.0, 10.0).is_ok());
        assert!(check_segment(2.0, 8.1, 10.0).is_err());
        assert!(check_segment(-1.0, 5.0, 10.0).is_err());
        assert!(check_segment(5.0, -1.0, 10.0).is_err());
    }

    #[test]
    fn test_symmetric_offset() {
        assert!(check_symmetric_offset("a", 5.0, 10.0).is_ok());
        assert!(check_symmetric_offset("a", 5.1, 10.0).is_err());
        assert!(check_symmetric_offset("a", -1.0, 10.0).is_err());
    }

    #[test]
    fn test_zero_length_overhang_allowed() {
        assert!(check_overhang(8.0, 0.0).is_ok());
        assert!(check_overhang(8.0, -0.5).is_err());
        assert!(check_overhang(0.0, 2.0).is_err());
    }

    #[test]
    fn test_ordered_positions() {
        assert!(check_ordered_positions(3.0, 7.0).is_ok());
        assert!(check_ordered_positions(7.0, 3.0).is_err());
        assert!(check_ordered_positions(5.0, 5.0).is_err());
    }
}
