use geohint_domain::Value;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// `\d` is Unicode-aware, so full-width and other script digits match too.
const NUMBER: &str = r"(\d+(?:\.\d+)?)";

/// `A or B`, `A-B` (also `~`, `～`, `〜`), `A to B`; tried in this order.
static RANGE_RES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        format!(r"{NUMBER}\s*(?:or|または)\s*{NUMBER}"),
        format!(r"{NUMBER}\s*[-~～〜]\s*{NUMBER}"),
        format!(r"{NUMBER}\s*to\s*{NUMBER}"),
    ]
    .map(|pattern| Regex::new(&pattern).expect("valid regex"))
});

/// Leading (`約`, `~`, `around`, `approximately`) or trailing (`前後`,
/// `程度`, `くらい`, `-ish`) approximation markers.
static APPROX_RES: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        format!(r"(?:約|~|around|approximately)\s*{NUMBER}"),
        format!(r"{NUMBER}\s*(?:前後|程度|くらい|-?ish)"),
    ]
    .map(|pattern| Regex::new(&pattern).expect("valid regex"))
});

static ANY_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("valid regex"));

static DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\A\d\z").expect("valid regex"));

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0; 4];
    DIGIT_RE.is_match(c.encode_utf8(&mut buf))
}

/// Value of a Unicode decimal digit. Decimal digits are laid out in
/// contiguous runs starting at zero, so the offset from the start of the run
/// gives the value.
fn digit_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let mut zero = u32::from(c);
    while let Some(prev) = zero.checked_sub(1).and_then(char::from_u32)
        && is_decimal_digit(prev)
    {
        zero -= 1;
    }
    Some((u32::from(c) - zero) % 10)
}

/// Rewrites non-ASCII decimal digits (`３`, `٣`) as ASCII so `f64` parsing
/// accepts them.
fn fold_digits(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| {
                if c.is_ascii() {
                    return c;
                }
                digit_value(c).and_then(|d| char::from_digit(d, 10)).unwrap_or(c)
            })
            .collect(),
    )
}

fn parse_decimal(text: &str) -> Option<f64> {
    fold_digits(text).parse::<f64>().ok()
}

/// Best-effort number from an attribute value.
///
/// Numbers pass through; text goes through [`parse_numeric_text`]; booleans,
/// lists and records yield `None`.
#[must_use]
pub fn parse_numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => Some(*n),
        Value::Text(text) => parse_numeric_text(text),
        Value::Bool(_) | Value::List(_) | Value::Nested(_) => None,
    }
}

/// Best-effort number from free text. The first strategy that applies wins:
///
/// 1. all digits, or a plain finite decimal (`"3.5"`, `" -2 "`, `"３"`);
/// 2. a range, giving the midpoint;
/// 3. an approximation, giving the number it qualifies;
/// 4. the first number anywhere in the text.
#[must_use]
pub fn parse_numeric_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if let Some(n) = parse_decimal(trimmed)
        && n.is_finite()
    {
        return Some(n);
    }

    for re in RANGE_RES.iter() {
        if let Some(caps) = re.captures(text) {
            let low = caps.get(1).and_then(|m| parse_decimal(m.as_str()))?;
            let high = caps.get(2).and_then(|m| parse_decimal(m.as_str()))?;
            return Some((low + high) / 2.0);
        }
    }

    APPROX_RES
        .iter()
        .find_map(|re| re.captures(text).and_then(|caps| caps.get(1)))
        .or_else(|| ANY_NUMBER_RE.find(text))
        .and_then(|m| parse_decimal(m.as_str()))
}
