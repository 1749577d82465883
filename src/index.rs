use crate::error::ListError;

/// Anything that can address a position in a list of `size` elements.
///
/// Implemented for the unsigned, signed and floating point primitives so that
/// negative and fractional indices are rejected with a `ListError` instead of
/// being unrepresentable.
pub trait ListIndex {
    fn to_index(self, size: usize) -> Result<usize, ListError>;
}

fn check_signed(index: i64, size: usize) -> Result<usize, ListError> {
    match usize::try_from(index) {
        Ok(i) if i < size => Ok(i),
        _ => Err(ListError::OutOfRange { index, size }),
    }
}

fn check_unsigned(index: u64, size: usize) -> Result<usize, ListError> {
    match usize::try_from(index) {
        Ok(i) if i < size => Ok(i),
        _ => Err(ListError::OutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            size,
        }),
    }
}

fn check_float(index: f64, size: usize) -> Result<usize, ListError> {
    if !index.is_finite() || index.fract() != 0.0 {
        return Err(ListError::NotAnInteger { index });
    }
    // Saturating cast; anything past i64 is out of range regardless.
    check_signed(index as i64, size)
}

impl ListIndex for usize {
    fn to_index(self, size: usize) -> Result<usize, ListError> {
        check_unsigned(self as u64, size)
    }
}

impl ListIndex for u32 {
    fn to_index(self, size: usize) -> Result<usize, ListError> {
        check_unsigned(u64::from(self), size)
    }
}

impl ListIndex for i32 {
    fn to_index(self, size: usize) -> Result<usize, ListError> {
        check_signed(i64::from(self), size)
    }
}

impl ListIndex for i64 {
    fn to_index(self, size: usize) -> Result<usize, ListError> {
        check_signed(self, size)
    }
}

impl ListIndex for isize {
    fn to_index(self, size: usize) -> Result<usize, ListError> {
        check_signed(self as i64, size)
    }
}

impl ListIndex for f64 {
    fn to_index(self, size: usize) -> Result<usize, ListError> {
        check_float(self, size)
    }
}

impl ListIndex for f32 {
    fn to_index(self, size: usize) -> Result<usize, ListError> {
        check_float(f64::from(self), size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_indices_below_size() {
        assert_eq!(0usize.to_index(3), Ok(0));
        assert_eq!(2i32.to_index(3), Ok(2));
        assert_eq!(1.0f64.to_index(3), Ok(1));
    }

    #[test]
    fn rejects_negative_and_past_the_end() {
        assert_eq!(
            (-1i32).to_index(3),
            Err(ListError::OutOfRange { index: -1, size: 3 })
        );
        assert_eq!(
            3usize.to_index(3),
            Err(ListError::OutOfRange { index: 3, size: 3 })
        );
        assert_eq!(
            (-2.0f64).to_index(3),
            Err(ListError::OutOfRange { index: -2, size: 3 })
        );
    }

    #[test]
    fn any_index_is_out_of_range_on_empty() {
        assert!(matches!(0usize.to_index(0), Err(ListError::OutOfRange { .. })));
        assert!(matches!(0i64.to_index(0), Err(ListError::OutOfRange { .. })));
    }

    #[test]
    fn rejects_fractional_and_non_finite() {
        assert_eq!(
            1.5f64.to_index(3),
            Err(ListError::NotAnInteger { index: 1.5 })
        );
        assert!(matches!(f64::NAN.to_index(3), Err(ListError::NotAnInteger { .. })));
        assert!(matches!(
            f32::INFINITY.to_index(3),
            Err(ListError::NotAnInteger { .. })
        ));
    }
}
