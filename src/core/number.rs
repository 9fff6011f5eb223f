// src/core/number.rs
// Lenient decimal reader over a byte cursor.
// Reads the longest leading number and ignores whatever follows ("100 €" → 100).

/// Leading whitespace, optional sign, digits, optional fraction, optional exponent.
/// Returns `None` when no digit is found before the first non-numeric byte.
pub fn leading_f64(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let b = s.as_bytes();
    let n = b.len();
    let mut i = 0;

    if i < n && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }

    let int_start = i;
    while i < n && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < n && b[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < n && b[j].is_ascii_digit() {
            j += 1;
        }
        // "." alone is not a number; "5." and ".5" are
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }

    if digits == 0 {
        return None;
    }

    if i < n && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < n && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < n && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    s[..i].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::leading_f64;

    #[test]
    fn reads_prefix_and_ignores_tail() {
        assert_eq!(leading_f64("100 €"), Some(100.0));
        assert_eq!(leading_f64("  42.5abc"), Some(42.5));
        assert_eq!(leading_f64("1.234.56"), Some(1.234));
        assert_eq!(leading_f64("-3"), Some(-3.0));
        assert_eq!(leading_f64(".5"), Some(0.5));
        assert_eq!(leading_f64("5."), Some(5.0));
        assert_eq!(leading_f64("2e3x"), Some(2000.0));
        assert_eq!(leading_f64("2e"), Some(2.0));
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(leading_f64(""), None);
        assert_eq!(leading_f64("abc"), None);
        assert_eq!(leading_f64("."), None);
        assert_eq!(leading_f64("-"), None);
        assert_eq!(leading_f64("€100"), None);
    }
}
