//! MichaelChan unit glyphs
//!
//! MichaelChan ratings span four decades. Instead of an exponent, each
//! decade gets its own marker and is rebased to a 1-10ish display range:
//!
//! | Glyph | Letter | Unit  | Displayed for   |
//! |-------|--------|-------|-----------------|
//! | ⚡    | z      | 0.1   | value < 1       |
//! | 💥    | e      | 1     | 1 <= value < 10 |
//! | 💣    | b      | 10    | 10 <= value < 100 |
//! | 🧨    | d      | 100   | value >= 100    |
//!
//! The letters are typing shorthand and are accepted in either case.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Spark,
    Burst,
    Bomb,
    Dynamite,
}

impl Glyph {
    pub const ALL: [Glyph; 4] = [Glyph::Spark, Glyph::Burst, Glyph::Bomb, Glyph::Dynamite];

    pub fn symbol(self) -> char {
        match self {
            Glyph::Spark => '⚡',
            Glyph::Burst => '💥',
            Glyph::Bomb => '💣',
            Glyph::Dynamite => '🧨',
        }
    }

    /// Lower-case shorthand letter
    pub fn letter(self) -> char {
        match self {
            Glyph::Spark => 'z',
            Glyph::Burst => 'e',
            Glyph::Bomb => 'b',
            Glyph::Dynamite => 'd',
        }
    }

    pub fn unit(self) -> f64 {
        match self {
            Glyph::Spark => 0.1,
            Glyph::Burst => 1.0,
            Glyph::Bomb => 10.0,
            Glyph::Dynamite => 100.0,
        }
    }

    /// Value as displayed next to this glyph
    pub fn rebase(self, value: f64) -> f64 {
        match self {
            Glyph::Spark => value * 10.0,
            Glyph::Burst => value,
            Glyph::Bomb => value / 10.0,
            Glyph::Dynamite => value / 100.0,
        }
    }

    /// The band a MichaelChan value is displayed in
    pub fn for_value(value: f64) -> Glyph {
        if value < 1.0 {
            Glyph::Spark
        } else if value < 10.0 {
            Glyph::Burst
        } else if value < 100.0 {
            Glyph::Bomb
        } else {
            Glyph::Dynamite
        }
    }

    pub fn from_symbol(c: char) -> Option<Glyph> {
        Glyph::ALL.into_iter().find(|g| g.symbol() == c)
    }
}

/// Lower-case `text` and swap every shorthand letter for its glyph.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            Glyph::ALL
                .into_iter()
                .find(|g| g.letter() == c)
                .map_or(c, Glyph::symbol)
        })
        .collect()
}

/// Sum of glyph units when `text` is nothing but glyphs (`"💥💥⚡"` is 2.1).
pub fn glyph_sum(text: &str) -> Option<f64> {
    if text.is_empty() {
        return None;
    }
    text.chars()
        .map(|c| Glyph::from_symbol(c).map(Glyph::unit))
        .sum::<Option<f64>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands() {
        assert_eq!(Glyph::for_value(0.5), Glyph::Spark);
        assert_eq!(Glyph::for_value(1.0), Glyph::Burst);
        assert_eq!(Glyph::for_value(9.99), Glyph::Burst);
        assert_eq!(Glyph::for_value(10.0), Glyph::Bomb);
        assert_eq!(Glyph::for_value(100.0), Glyph::Dynamite);
    }

    #[test]
    fn test_normalize_letters() {
        assert_eq!(normalize("3E"), "3💥");
        assert_eq!(normalize("zz"), "⚡⚡");
        assert_eq!(normalize("1.5B"), "1.5💣");
        assert_eq!(normalize("2d"), "2🧨");
    }

    #[test]
    fn test_glyph_sum() {
        assert_eq!(glyph_sum("💥💥"), Some(2.0));
        assert_eq!(glyph_sum("💣💥"), Some(11.0));
        assert_eq!(glyph_sum("🧨"), Some(100.0));
        assert_eq!(glyph_sum("2💥"), None);
        assert_eq!(glyph_sum(""), None);
    }

    #[test]
    fn test_spark_sum_is_tenths() {
        let sum = glyph_sum("⚡⚡⚡").unwrap();
        assert!((sum - 0.3).abs() < 1e-12);
    }
}
