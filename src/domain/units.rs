// Unit conversion and display formatting for production values

pub const KWH_PER_GWH: f64 = 1_000_000.0;

/// Convert a raw production value (kWh) to display units (GWh).
/// Non-finite input stays non-finite.
pub fn kwh_to_gwh(kwh: f64) -> f64 {
    if kwh.is_finite() {
        kwh / KWH_PER_GWH
    } else {
        f64::NAN
    }
}

/// Format a GWh value for human display: thousands grouping, at most two
/// fraction digits, trailing zeros trimmed. Non-finite values render as "N/A".
pub fn format_gwh(x: f64) -> String {
    if !x.is_finite() {
        return "N/A".to_string();
    }

    let rounded = (x * 100.0).round() / 100.0;
    let mut digits = format!("{:.2}", rounded.abs());
    while digits.ends_with('0') {
        digits.pop();
    }
    if digits.ends_with('.') {
        digits.pop();
    }

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (digits, None),
    };

    let mut out = String::new();
    if rounded < 0.0 {
        out.push('-');
    }
    let chars: Vec<char> = int_part.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(&frac);
    }
    out
}
