/// Regional digit-grouping formats.
///
/// The same token means different things in different locales:
/// "1,234" is US thousands while "5,50" is a European decimal. This
/// module classifies a digit token by its separators and normalizes it
/// to a value, keeping the ambiguity rules in one place:
///
/// - apostrophe grouping → Swiss: 1'234'567.89
/// - space grouping → French: 1 234 567,89
/// - comma and period both present → the rightmost one is the decimal
/// - comma groups of 2 then 3 → Indian: 12,34,567 or 1,23,456.78
/// - one comma, exactly 3 trailing digits → US thousands
/// - one comma, otherwise → European decimal comma
/// - several commas, any other layout → US thousands
/// - period only, several periods → European grouping: 1.234.567
/// - period only, one period → US decimal, even for "1.234"
use crate::config::MAX_SAFE_AMOUNT;
use crate::error::{MoneyError, Result};

/// Grouping convention a digit token was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    Us,
    European,
    Swiss,
    French,
    Indian,
}

/// A classified and normalized digit token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupedNumber {
    pub value: f64,
    pub format: NumberFormat,
}

/// Parse a digit token that may carry grouping and decimal separators.
///
/// Returns `None` for tokens whose separator layout matches no known
/// convention ("1 23"), and an overflow error for values past the
/// safe integer ceiling.
pub fn parse_grouped(token: &str) -> Result<Option<GroupedNumber>> {
    let token = token.trim();
    if token.is_empty() || !token.chars().next().map(|c| c.is_ascii_digit()).unwrap_or(false) {
        return Ok(None);
    }

    let format = classify(token);
    let normalized = match format {
        Some(NumberFormat::Swiss) => normalize_swiss(token),
        Some(NumberFormat::French) => normalize_french(token),
        Some(NumberFormat::European) => Some(token.replace('.', "").replace(',', ".")),
        Some(NumberFormat::Us) | Some(NumberFormat::Indian) => Some(token.replace(',', "")),
        None => None,
    };
    let (format, normalized) = match (format, normalized) {
        (Some(f), Some(n)) => (f, n),
        _ => return Ok(None),
    };

    let value = match normalized.parse::<f64>() {
        Ok(value) => value,
        Err(_) => return Ok(None),
    };
    if !value.is_finite() || value > MAX_SAFE_AMOUNT {
        return Err(MoneyError::Overflow(token.to_string()));
    }
    Ok(Some(GroupedNumber { value, format }))
}

fn classify(token: &str) -> Option<NumberFormat> {
    let has_apostrophe = token.contains('\'');
    let has_space = token.contains(' ');
    let commas = token.matches(',').count();
    let periods = token.matches('.').count();

    if has_apostrophe {
        return Some(NumberFormat::Swiss);
    }
    if has_space {
        return Some(NumberFormat::French);
    }
    if commas > 0 && periods > 0 {
        let last_comma = token.rfind(',').unwrap_or(0);
        let last_period = token.rfind('.').unwrap_or(0);
        if last_comma > last_period {
            return Some(NumberFormat::European);
        }
        // Period decimal with Indian comma groups: "1,23,456.78"
        let int_groups: Vec<&str> = token[..last_period].split(',').collect();
        if is_indian_grouping(&int_groups) {
            return Some(NumberFormat::Indian);
        }
        return Some(NumberFormat::Us);
    }
    if commas > 0 {
        return Some(classify_comma_only(token, commas));
    }
    if periods > 1 {
        return Some(NumberFormat::European);
    }
    // Plain digits, or one period: US. A single period with three or
    // more trailing digits still reads as a decimal ("1.234" is one
    // point two three four), by documented convention.
    Some(NumberFormat::Us)
}

fn classify_comma_only(token: &str, commas: usize) -> NumberFormat {
    let groups: Vec<&str> = token.split(',').collect();

    if commas == 1 {
        // "1,234" is US thousands; "5,50" is a European decimal
        if groups[1].len() == 3 {
            return NumberFormat::Us;
        }
        return NumberFormat::European;
    }

    if is_indian_grouping(&groups) {
        return NumberFormat::Indian;
    }
    // Several commas with any other layout read as thousands marks,
    // however loose the grouping: "1,2345,678" is 12345678.
    NumberFormat::Us
}

/// Indian grouping: a final group of 3 preceded by at least one group
/// of exactly 2, with a leading group of up to 3 digits ("1,23,456",
/// "123,45,678", "12,34,56,789").
fn is_indian_grouping(groups: &[&str]) -> bool {
    let n = groups.len();
    if n < 3 {
        return false;
    }
    if groups[n - 1].len() != 3 {
        return false;
    }
    if groups[0].is_empty() || groups[0].len() > 3 {
        return false;
    }
    groups[1..n - 1].iter().all(|g| g.len() == 2)
}

fn normalize_swiss(token: &str) -> Option<String> {
    // Grouping must be real groups of three before any decimal part
    let (int_part, _) = split_decimal(token, &['.', ',']);
    if !valid_three_groups(int_part, '\'') {
        return None;
    }
    let stripped = token.replace('\'', "");
    if stripped.contains(',') && stripped.contains('.') {
        return None;
    }
    Some(stripped.replace(',', "."))
}

fn normalize_french(token: &str) -> Option<String> {
    let (int_part, dec_part) = split_decimal(token, &[',']);
    if !valid_three_groups(int_part, ' ') {
        return None;
    }
    let mut normalized = int_part.replace(' ', "");
    if let Some(dec) = dec_part {
        normalized.push('.');
        normalized.push_str(dec);
    }
    // A period inside a space-grouped token has no reading
    if normalized.matches('.').count() > 1 || int_part.contains('.') {
        return None;
    }
    Some(normalized)
}

/// Split on the last occurrence of any decimal candidate separator.
fn split_decimal<'a>(token: &'a str, seps: &[char]) -> (&'a str, Option<&'a str>) {
    match token.rfind(|c| seps.contains(&c)) {
        Some(idx) => (&token[..idx], Some(&token[idx + 1..])),
        None => (token, None),
    }
}

/// Check that `int_part` is digit groups joined by `sep`, each group
/// after the first exactly three digits long.
fn valid_three_groups(int_part: &str, sep: char) -> bool {
    let groups: Vec<&str> = int_part.split(sep).collect();
    if groups.is_empty() || groups[0].is_empty() || groups[0].len() > 3 {
        return false;
    }
    if !groups[0].chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    groups[1..]
        .iter()
        .all(|g| g.len() == 3 && g.chars().all(|c| c.is_ascii_digit()))
}
