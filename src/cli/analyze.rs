use crate::error::Result;
use crate::password::{analyze, PasswordMetrics, DIGIT_POOL, LOWER_POOL, SPECIAL_POOL, UPPER_POOL};

/// Analyze a password and render the report
pub fn show_analysis(password: &str, json: bool) -> Result<String> {
    let metrics = analyze(password);
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&metrics)?));
    }
    Ok(format_report(&metrics))
}

fn format_report(metrics: &PasswordMetrics) -> String {
    let mut output = String::new();

    output.push_str("Password Entropy Analysis\n");
    output.push_str("=========================\n\n");

    let Some(strength) = metrics.strength else {
        output.push_str("Enter a password to begin\n");
        return output;
    };

    output.push_str(&format!("Length: {}\n", metrics.length));
    output.push_str(&format!("Entropy: {:.1} bits\n", metrics.entropy_bits));
    output.push_str(&format!(
        "Strength: {} ({:.0}%) - {}\n",
        strength,
        metrics.strength_percent,
        strength.description()
    ));
    output.push_str("\n");

    let pool = &metrics.char_pool;
    output.push_str("Character Pool:\n");
    output.push_str(&pool_line("Lowercase (a-z)", pool.has_lower, LOWER_POOL));
    output.push_str(&pool_line("Uppercase (A-Z)", pool.has_upper, UPPER_POOL));
    output.push_str(&pool_line("Numbers (0-9)", pool.has_digit, DIGIT_POOL));
    output.push_str(&pool_line("Special (!@#$%)", pool.has_special, SPECIAL_POOL));
    output.push_str(&format!("  Pool size: {}\n", metrics.pool_size));
    output.push_str("\n");

    if let Some(crack_time) = metrics.estimated_crack_time {
        output.push_str(&format!("Estimated crack time: {}\n", crack_time));
        output.push_str("  (random password, 1e9 guesses/second, illustrative only)\n");
    }
    output.push_str("\n");

    if metrics.is_clean() {
        output.push_str("No common patterns detected\n");
    } else {
        output.push_str("Warnings:\n");
        for warning in &metrics.warnings {
            output.push_str(&format!("  ! {}\n", warning));
        }
    }

    output
}

fn pool_line(label: &str, active: bool, size: u32) -> String {
    let mark = if active { "x" } else { " " };
    format!("  [{}] {:<16} {:>2} chars\n", mark, label, size)
}
