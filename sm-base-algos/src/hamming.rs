use sm_types::SimError;

/// Number of positions at which `a` and `b` differ.
///
/// Only defined for sequences of equal length.
pub fn hamming_distance<T: PartialEq>(a: &[T], b: &[T]) -> Result<usize, SimError> {
    if a.len() != b.len() {
        return Err(SimError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b).filter(|(x, y)| x != y).count())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(a: &str, b: &str) -> Result<usize, SimError> {
        hamming_distance(a.as_bytes(), b.as_bytes())
    }

    #[test]
    fn equal_length() {
        assert_eq!(h("-789", "john"), Ok(4));
        assert_eq!(h("a", "*"), Ok(1));
        assert_eq!(h("b", "a"), Ok(1));
        assert_eq!(h("abc", "p q"), Ok(3));
        assert_eq!(h("karolin", "kathrin"), Ok(3));
        assert_eq!(h("KARI", "kari"), Ok(4));
        assert_eq!(h("", ""), Ok(0));
        assert_eq!(h("foo", "foo"), Ok(0));
    }

    #[test]
    fn length_mismatch() {
        assert_eq!(h("a", ""), Err(SimError::LengthMismatch { left: 1, right: 0 }));
        assert_eq!(
            h("", "This is a long string"),
            Err(SimError::LengthMismatch { left: 0, right: 21 })
        );
        assert!(h("ali", "alex").is_err());
    }
}
