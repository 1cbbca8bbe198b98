//! Password entropy, strength band, crack time and weakness heuristics
//!
//! The crack-time model assumes a random password and a flat guess rate.
//! It is illustrative only and not a security recommendation.

use serde::Serialize;

/// Attacker guess rate used for crack-time estimates
pub const GUESSES_PER_SECOND: f64 = 1_000_000_000.0;

/// Minimum length before the too-short warning is dropped
pub const MIN_LENGTH: usize = 8;

pub const LOWER_POOL: u32 = 26;
pub const UPPER_POOL: u32 = 26;
pub const DIGIT_POOL: u32 = 10;
pub const SPECIAL_POOL: u32 = 32;

static COMMON_PASSWORDS: &[&str] = &[
    "password",
    "123456",
    "12345678",
    "qwerty",
    "abc123",
    "monkey",
    "letmein",
    "admin",
    "password123",
];

static SEQUENTIAL_PATTERNS: &[&str] = &[
    "123", "234", "345", "456", "567", "678", "789", "abc", "bcd", "cde", "qwerty", "asdfgh",
];

/// Strength band, ordered weakest to strongest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    /// Band for an entropy value; upper bounds are inclusive
    pub fn from_entropy(entropy: f64) -> Self {
        if entropy <= 30.0 {
            Self::VeryWeak
        } else if entropy <= 50.0 {
            Self::Weak
        } else if entropy <= 70.0 {
            Self::Moderate
        } else if entropy <= 90.0 {
            Self::Strong
        } else {
            Self::VeryStrong
        }
    }

    /// Display percent, interpolated linearly inside the band
    pub fn percent(&self, entropy: f64) -> f64 {
        match self {
            Self::VeryWeak => (entropy / 30.0 * 20.0).min(20.0),
            Self::Weak => 20.0 + (entropy - 30.0) / 20.0 * 20.0,
            Self::Moderate => 40.0 + (entropy - 50.0) / 20.0 * 20.0,
            Self::Strong => 60.0 + (entropy - 70.0) / 20.0 * 20.0,
            Self::VeryStrong => (80.0 + (entropy - 90.0) / 10.0 * 20.0).min(100.0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::VeryWeak => "Extremely vulnerable",
            Self::Weak => "Vulnerable to basic attacks",
            Self::Moderate => "Acceptable with 2FA",
            Self::Strong => "Secure against most attacks",
            Self::VeryStrong => "Extremely secure",
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heuristic weakness, reported in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Weakness {
    CommonPassword,
    RepeatedCharacters,
    SequentialPattern,
    TooShort,
}

impl Weakness {
    pub fn message(&self) -> &'static str {
        match self {
            Self::CommonPassword => "contains common password patterns",
            Self::RepeatedCharacters => "contains repeated characters",
            Self::SequentialPattern => "contains sequential patterns",
            Self::TooShort => "password is too short",
        }
    }
}

impl std::fmt::Display for Weakness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Character classes observed in a password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CharPool {
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    /// Anything outside `[A-Za-z0-9]`, non-ASCII included
    pub has_special: bool,
}

impl CharPool {
    pub fn classify(password: &str) -> Self {
        let mut pool = Self::default();
        for c in password.chars() {
            if c.is_ascii_lowercase() {
                pool.has_lower = true;
            } else if c.is_ascii_uppercase() {
                pool.has_upper = true;
            } else if c.is_ascii_digit() {
                pool.has_digit = true;
            } else {
                pool.has_special = true;
            }
        }
        pool
    }

    /// Sum of the sizes of the active classes
    pub fn size(&self) -> u32 {
        let mut size = 0;
        if self.has_lower {
            size += LOWER_POOL;
        }
        if self.has_upper {
            size += UPPER_POOL;
        }
        if self.has_digit {
            size += DIGIT_POOL;
        }
        if self.has_special {
            size += SPECIAL_POOL;
        }
        size
    }
}

/// Unit ladder for crack-time rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Years,
    Centuries,
}

impl TimeUnit {
    const LADDER: [TimeUnit; 6] = [
        Self::Centuries,
        Self::Years,
        Self::Days,
        Self::Hours,
        Self::Minutes,
        Self::Seconds,
    ];

    pub fn seconds(&self) -> f64 {
        match self {
            Self::Seconds => 1.0,
            Self::Minutes => 60.0,
            Self::Hours => 3_600.0,
            Self::Days => 86_400.0,
            Self::Years => 31_536_000.0,
            Self::Centuries => 3_153_600_000.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::Days => "days",
            Self::Years => "years",
            Self::Centuries => "centuries",
        }
    }
}

/// Human-readable brute-force estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CrackTime {
    LessThanOneSecond,
    Duration { amount: f64, unit: TimeUnit },
}

impl CrackTime {
    /// Coarsest unit that keeps the value at or above one, rounded to a whole unit
    pub fn from_seconds(seconds: f64) -> Self {
        if seconds < 1.0 {
            return Self::LessThanOneSecond;
        }
        let unit = TimeUnit::LADDER
            .into_iter()
            .find(|u| seconds >= u.seconds())
            .unwrap_or(TimeUnit::Seconds);
        Self::Duration {
            amount: (seconds / unit.seconds()).round(),
            unit,
        }
    }
}

impl std::fmt::Display for CrackTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LessThanOneSecond => f.write_str("less than one second"),
            // Past ~1e15 the digits stop being meaningful
            Self::Duration { amount, unit } if *amount >= 1e15 => {
                write!(f, "{:.2e} {}", amount, unit.as_str())
            }
            Self::Duration { amount, unit } => write!(f, "{:.0} {}", amount, unit.as_str()),
        }
    }
}

/// Everything `analyze` reports about a password
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasswordMetrics {
    /// Length in Unicode scalar values
    pub length: usize,
    pub entropy_bits: f64,
    /// `None` for the empty password
    pub strength: Option<StrengthLevel>,
    pub strength_percent: f64,
    pub crack_time_seconds: f64,
    pub estimated_crack_time: Option<CrackTime>,
    pub warnings: Vec<Weakness>,
    pub char_pool: CharPool,
    pub pool_size: u32,
}

impl PasswordMetrics {
    fn empty() -> Self {
        Self {
            length: 0,
            entropy_bits: 0.0,
            strength: None,
            strength_percent: 0.0,
            crack_time_seconds: 0.0,
            estimated_crack_time: None,
            warnings: Vec::new(),
            char_pool: CharPool::default(),
            pool_size: 0,
        }
    }

    /// Non-empty password with no heuristic warnings
    pub fn is_clean(&self) -> bool {
        self.length > 0 && self.warnings.is_empty()
    }
}

/// Analyze a password. Total over every input string.
///
/// Length is counted in Unicode scalar values (`chars()`), not bytes or
/// UTF-16 units. The repeated-characters check treats every `char` alike,
/// so three consecutive line breaks count as a run.
pub fn analyze(password: &str) -> PasswordMetrics {
    if password.is_empty() {
        return PasswordMetrics::empty();
    }

    let length = password.chars().count();
    let char_pool = CharPool::classify(password);
    let pool_size = char_pool.size();
    let entropy_bits = entropy(length, pool_size);
    let strength = StrengthLevel::from_entropy(entropy_bits);
    let crack_time_seconds = crack_time_seconds(entropy_bits);
    let warnings = detect_weaknesses(password);

    log::debug!(
        "password analysis: length={} pool={} entropy={:.2} warnings={}",
        length,
        pool_size,
        entropy_bits,
        warnings.len()
    );

    PasswordMetrics {
        length,
        entropy_bits,
        strength: Some(strength),
        strength_percent: strength.percent(entropy_bits),
        crack_time_seconds,
        estimated_crack_time: Some(CrackTime::from_seconds(crack_time_seconds)),
        warnings,
        char_pool,
        pool_size,
    }
}

/// `length * log2(pool)`, rounded to two decimals
pub fn entropy(length: usize, pool_size: u32) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    let bits = length as f64 * f64::from(pool_size).log2();
    (bits * 100.0).round() / 100.0
}

/// Expected brute-force time: half the keyspace at the fixed guess rate
pub fn crack_time_seconds(entropy_bits: f64) -> f64 {
    2f64.powf(entropy_bits) / (2.0 * GUESSES_PER_SECOND)
}

/// Run every weakness check and return the ones that fire
pub fn detect_weaknesses(password: &str) -> Vec<Weakness> {
    let lowered = password.to_lowercase();
    let mut warnings = Vec::new();

    if COMMON_PASSWORDS.iter().any(|p| lowered.contains(p)) {
        warnings.push(Weakness::CommonPassword);
    }
    if has_repeated_run(password, 3) {
        warnings.push(Weakness::RepeatedCharacters);
    }
    if SEQUENTIAL_PATTERNS.iter().any(|p| lowered.contains(p)) {
        warnings.push(Weakness::SequentialPattern);
    }
    if password.chars().count() < MIN_LENGTH {
        warnings.push(Weakness::TooShort);
    }

    warnings
}

fn has_repeated_run(password: &str, run: usize) -> bool {
    let mut prev = None;
    let mut count = 0;
    for c in password.chars() {
        if Some(c) == prev {
            count += 1;
        } else {
            prev = Some(c);
            count = 1;
        }
        if count >= run {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_password() {
        let m = analyze("");
        assert_eq!(m.entropy_bits, 0.0);
        assert_eq!(m.strength, None);
        assert_eq!(m.estimated_crack_time, None);
        assert!(m.warnings.is_empty());
        assert_eq!(m.char_pool, CharPool::default());
        assert_eq!(m.pool_size, 0);
        assert!(!m.is_clean());
    }

    #[test]
    fn test_password_literal() {
        let m = analyze("password");
        assert_eq!(m.pool_size, 26);
        assert!(approx(m.entropy_bits, 37.6));
        assert_eq!(m.strength, Some(StrengthLevel::Weak));
        assert!((m.strength_percent - 27.6).abs() < 1e-6);
        assert_eq!(m.warnings, vec![Weakness::CommonPassword]);
        assert_eq!(m.estimated_crack_time.unwrap().to_string(), "2 minutes");
    }

    #[test]
    fn test_repeated_and_short() {
        let m = analyze("aaa111");
        assert_eq!(m.pool_size, 36);
        assert!(approx(m.entropy_bits, 31.02));
        assert_eq!(
            m.warnings,
            vec![Weakness::RepeatedCharacters, Weakness::TooShort]
        );
        assert_eq!(m.estimated_crack_time.unwrap().to_string(), "1 seconds");
    }

    #[test]
    fn test_warning_order() {
        let warnings = detect_weaknesses("Qwerty1");
        assert_eq!(
            warnings,
            vec![
                Weakness::CommonPassword,
                Weakness::SequentialPattern,
                Weakness::TooShort
            ]
        );
        assert_eq!(warnings[0].to_string(), "contains common password patterns");
    }

    #[test]
    fn test_clean_password() {
        let m = analyze("Tr0ub4dor&3");
        assert_eq!(m.pool_size, 94);
        assert!(approx(m.entropy_bits, 72.1));
        assert_eq!(m.strength, Some(StrengthLevel::Strong));
        assert!(m.is_clean());
        assert_eq!(m.estimated_crack_time.unwrap().to_string(), "802 centuries");
    }

    #[test]
    fn test_char_pool_classes() {
        let pool = CharPool::classify("aB3");
        assert!(pool.has_lower && pool.has_upper && pool.has_digit);
        assert!(!pool.has_special);
        assert_eq!(pool.size(), 62);

        let unicode = CharPool::classify("é");
        assert!(unicode.has_special);
        assert_eq!(unicode.size(), 32);
    }

    #[test]
    fn test_length_counts_chars() {
        let m = analyze("ééé");
        assert_eq!(m.length, 3);
        assert!(approx(m.entropy_bits, 15.0));
        assert!(m.warnings.contains(&Weakness::RepeatedCharacters));
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(StrengthLevel::from_entropy(30.0), StrengthLevel::VeryWeak);
        assert_eq!(StrengthLevel::from_entropy(30.01), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_entropy(50.0), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_entropy(70.0), StrengthLevel::Moderate);
        assert_eq!(StrengthLevel::from_entropy(90.0), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_entropy(90.01), StrengthLevel::VeryStrong);
    }

    #[test]
    fn test_percent_interpolation() {
        assert!(approx(StrengthLevel::VeryWeak.percent(15.0), 10.0));
        assert!(approx(StrengthLevel::VeryWeak.percent(30.0), 20.0));
        assert!(approx(StrengthLevel::Moderate.percent(60.0), 50.0));
        assert!(approx(StrengthLevel::Strong.percent(90.0), 80.0));
        assert!(approx(StrengthLevel::VeryStrong.percent(95.0), 90.0));
        assert!(approx(StrengthLevel::VeryStrong.percent(150.0), 100.0));
    }

    #[test]
    fn test_crack_time_ladder() {
        assert_eq!(CrackTime::from_seconds(0.5), CrackTime::LessThanOneSecond);
        assert_eq!(CrackTime::from_seconds(59.4).to_string(), "59 seconds");
        assert_eq!(CrackTime::from_seconds(60.0).to_string(), "1 minutes");
        assert_eq!(CrackTime::from_seconds(5_400.0).to_string(), "2 hours");
        assert_eq!(CrackTime::from_seconds(86_400.0 * 3.0).to_string(), "3 days");
        assert_eq!(CrackTime::from_seconds(31_536_000.0 * 10.0).to_string(), "10 years");
        assert_eq!(
            CrackTime::from_seconds(3_153_600_000.0 * 4.0).to_string(),
            "4 centuries"
        );
        assert_eq!(CrackTime::LessThanOneSecond.to_string(), "less than one second");
    }

    #[test]
    fn test_huge_entropy_does_not_panic() {
        let long = "Aa1!".repeat(300);
        let m = analyze(&long);
        assert_eq!(m.strength, Some(StrengthLevel::VeryStrong));
        assert_eq!(m.strength_percent, 100.0);
        assert!(m.estimated_crack_time.is_some());
    }

    #[test]
    fn test_line_breaks_count_as_repeats() {
        let m = analyze("ab\n\n\ncd");
        assert_eq!(m.length, 7);
        assert!(m.warnings.contains(&Weakness::RepeatedCharacters));
    }

    #[test]
    fn test_astral_char_counts_once() {
        // One scalar value, two UTF-16 units, four UTF-8 bytes
        assert_eq!(analyze("\u{1F512}").length, 1);
    }

    #[test]
    fn test_repeated_run_detection() {
        assert!(has_repeated_run("xx!!!yy", 3));
        assert!(!has_repeated_run("aabbaacc", 3));
        assert!(!has_repeated_run("", 3));
    }
}
