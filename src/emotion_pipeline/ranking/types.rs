//! Ranking data types

use std::fmt;

/// Raw per-class scores from the model, in label-table order.
///
/// Values are untrusted: they need not sum to 1 and may be negative.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutputVector(Vec<f32>);

impl OutputVector {
    pub fn new(scores: Vec<f32>) -> Self {
        Self(scores)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

impl From<Vec<f32>> for OutputVector {
    fn from(scores: Vec<f32>) -> Self {
        Self(scores)
    }
}

impl<const N: usize> From<[f32; N]> for OutputVector {
    fn from(scores: [f32; N]) -> Self {
        Self(scores.to_vec())
    }
}

/// One line of the report
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub label: String,
    /// Share of the score sum, 0-100 for non-negative scores
    pub percentage: f32,
    /// Position in the output vector
    pub index: usize,
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}%", self.label, format_percentage(self.percentage))
    }
}

/// Two-decimal rendering with half-up rounding of the shortest decimal form
/// of the value widened to `f64`, so `0.125` renders as `0.13`.
pub fn format_percentage(value: f32) -> String {
    let value = value as f64;
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // `{}` on f64 prints the shortest round-trip digits, never in exponent form.
    let shortest = format!("{}", value.abs());
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    let mut frac = frac_part.bytes().map(|b| b - b'0');
    digits.push(frac.next().unwrap_or(0));
    digits.push(frac.next().unwrap_or(0));

    if frac.next().is_some_and(|d| d >= 5) {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - 2;
    let render = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{sign}{}.{}", render(&digits[..split]), render(&digits[split..]))
}

/// Entries sorted by percentage, highest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RankedResult {
    entries: Vec<RankedEntry>,
}

impl RankedResult {
    pub(crate) fn new(entries: Vec<RankedEntry>) -> Self {
        Self { entries }
    }

    pub fn top(&self) -> Option<&RankedEntry> {
        self.entries.first()
    }

    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a RankedResult {
    type Item = &'a RankedEntry;
    type IntoIter = std::slice::Iter<'a, RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Renders one `Label: 12.34%` line per entry, each newline-terminated.
impl fmt::Display for RankedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
