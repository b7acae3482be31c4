//! Roman numerals for open-ended Grandmaster tiers

const NUMERALS: [(&str, u32); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// Encode a positive integer. Zero encodes to an empty string.
pub fn to_roman(mut n: u32) -> String {
    let mut out = String::new();
    for &(sym, val) in NUMERALS.iter() {
        while n >= val {
            out.push_str(sym);
            n -= val;
        }
    }
    out
}

fn digit(c: char) -> Option<u32> {
    match c.to_ascii_uppercase() {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Subtractive decoding: a digit smaller than its right neighbour
/// counts negative. Case-insensitive. Returns `None` on any non-numeral.
///
/// Malformed-but-decodable runs (`IIII`, `IIX`) decode without complaint.
pub fn from_roman(s: &str) -> Option<i64> {
    let digits: Vec<u32> = s.chars().map(digit).collect::<Option<_>>()?;
    if digits.is_empty() {
        return None;
    }

    let mut total: i64 = 0;
    for (i, &d) in digits.iter().enumerate() {
        match digits.get(i + 1) {
            Some(&next) if d < next => total -= d as i64,
            _ => total += d as i64,
        }
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_roman_small() {
        assert_eq!(to_roman(1), "I");
        assert_eq!(to_roman(4), "IV");
        assert_eq!(to_roman(9), "IX");
        assert_eq!(to_roman(14), "XIV");
        assert_eq!(to_roman(40), "XL");
    }

    #[test]
    fn test_to_roman_large() {
        assert_eq!(to_roman(1994), "MCMXCIV");
        assert_eq!(to_roman(0), "");
    }

    #[test]
    fn test_from_roman() {
        assert_eq!(from_roman("II"), Some(2));
        assert_eq!(from_roman("iv"), Some(4));
        assert_eq!(from_roman("XIV"), Some(14));
        assert_eq!(from_roman("MCMXCIV"), Some(1994));
    }

    #[test]
    fn test_from_roman_rejects_junk() {
        assert_eq!(from_roman(""), None);
        assert_eq!(from_roman("XIVb"), None);
        assert_eq!(from_roman("12"), None);
    }

    #[test]
    fn test_round_trip() {
        for n in 1..=60 {
            assert_eq!(from_roman(&to_roman(n)), Some(n as i64));
        }
    }
}
