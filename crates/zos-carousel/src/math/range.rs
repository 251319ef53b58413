//! Range arithmetic for slide and page numbers

/// Clamp `value` into `[min, max]`
///
/// Out-of-range values are pinned to the nearest boundary.
#[inline]
pub fn clamp(value: i32, min: i32, max: i32) -> i32 {
    value.min(max).max(min)
}

/// Wrap `value` into `[min, max]`, looping around at either end
///
/// Slide 4 of a 3-slide range `[1, 3]` is slide 1; slide 0 is slide 3.
#[inline]
pub fn wrap(value: i32, min: i32, max: i32) -> i32 {
    if max < min {
        return min;
    }
    // Widened so extreme inputs cannot overflow
    let range = i64::from(max) - i64::from(min) + 1;
    let offset = (i64::from(value) - i64::from(min)).rem_euclid(range);
    (i64::from(min) + offset) as i32
}

/// Parse a computed CSS pixel value (`"24px"`, `"300"`) into a number
///
/// Unparsable or non-finite values read as `0.0`, which the layout code
/// treats as a degenerate measurement.
pub fn px_to_f32(value: &str) -> f32 {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    match number.parse::<f32>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_pins_to_bounds() {
        assert_eq!(clamp(-100, 1, 9), 1);
        assert_eq!(clamp(5, 1, 9), 5);
        assert_eq!(clamp(109, 1, 9), 9);
    }

    #[test]
    fn test_clamp_is_idempotent() {
        for x in -20..20 {
            let once = clamp(x, 0, 6);
            assert_eq!(clamp(once, 0, 6), once);
        }
    }

    #[test]
    fn test_wrap_loops_around() {
        assert_eq!(wrap(4, 1, 3), 1);
        assert_eq!(wrap(0, 1, 3), 3);
        assert_eq!(wrap(-1, 1, 3), 2);
        assert_eq!(wrap(2, 1, 3), 2);
    }

    #[test]
    fn test_wrap_is_periodic() {
        let (min, max) = (0, 6);
        let period = max - min + 1;
        for x in -15..15 {
            for k in -3..=3 {
                assert_eq!(wrap(x + k * period, min, max), wrap(x, min, max));
            }
        }
    }

    #[test]
    fn test_wrap_extreme_values() {
        for &(min, max) in &[(1, 5), (0, 6), (-3, 3)] {
            for &x in &[i32::MIN, i32::MIN + 1, i32::MAX, i32::MAX - 1] {
                let w = wrap(x, min, max);
                assert!(w >= min && w <= max);
                let period = i64::from(max - min + 1);
                assert_eq!((i64::from(x) - i64::from(w)).rem_euclid(period), 0);
            }
        }
        assert_eq!(wrap(i32::MIN, 1, 5), 2);
        assert_eq!(wrap(i32::MAX, i32::MIN, i32::MAX), i32::MAX);
        assert_eq!(wrap(7, i32::MIN, i32::MAX), 7);
    }

    #[test]
    fn test_wrap_empty_range() {
        assert_eq!(wrap(5, 3, 2), 3);
    }

    #[test]
    fn test_px_to_f32() {
        assert!((px_to_f32("24px") - 24.0).abs() < 0.001);
        assert!((px_to_f32(" 310.5px ") - 310.5).abs() < 0.001);
        assert!((px_to_f32("12") - 12.0).abs() < 0.001);
        assert!(px_to_f32("auto").abs() < 0.001);
        assert!(px_to_f32("").abs() < 0.001);
    }
}
