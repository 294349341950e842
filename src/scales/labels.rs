//! Label Formatters Module
//! Turns break values into axis label strings.

/// Maps a set of break values to their display strings.
///
/// Formatters see the whole slice at once so they can pick one precision
/// for every label on the axis.
pub trait Labeller: Send + Sync {
    fn labels(&self, values: &[f64]) -> Vec<String>;
}

impl<F> Labeller for F
where
    F: Fn(&[f64]) -> Vec<String> + Send + Sync,
{
    fn labels(&self, values: &[f64]) -> Vec<String> {
        self(values)
    }
}

const SHORT_SCALE_UNITS: [&str; 4] = ["K", "M", "B", "T"];
const SI_UNITS: [&str; 6] = ["K", "M", "G", "T", "P", "E"];

/// Abbreviates large numbers with a unit suffix, e.g. `1500` as `1.5 K`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LargeNumLabels {
    decimals: Option<usize>,
    units: &'static [&'static str],
}

impl LargeNumLabels {
    /// Label a single value.
    pub fn label(&self, x: f64) -> String {
        if x == 0.0 {
            return "0".to_string();
        }

        let precision = x.abs().log10().trunc() as i64;
        let unit_group = precision.div_euclid(3).min(self.units.len() as i64);
        if unit_group > 0 {
            let scaled = x / 1000f64.powi(unit_group as i32);
            format!(
                "{} {}",
                self.format_num(scaled),
                self.units[unit_group as usize - 1]
            )
        } else {
            self.format_num(x)
        }
    }

    fn format_num(&self, x: f64) -> String {
        if x.is_finite() && x.fract() == 0.0 {
            return group_thousands(&format!("{:.0}", x));
        }
        match self.decimals {
            Some(d) => group_thousands(&format!("{:.*}", d, x)),
            None => group_thousands(&x.to_string()),
        }
    }
}

impl Labeller for LargeNumLabels {
    fn labels(&self, values: &[f64]) -> Vec<String> {
        values.iter().map(|&x| self.label(x)).collect()
    }
}

/// Labels for large numbers using unit suffixes.
///
/// `decimals` fixes the number of decimal places for fractional values;
/// `None` (or zero) prints the shortest representation. Whole numbers are
/// always printed without a decimal point. `siunits` switches the suffixes
/// from `K M B T` to `K M G T P E`.
pub fn large_num_labels(decimals: Option<usize>, siunits: bool) -> LargeNumLabels {
    let units: &'static [&'static str] = if siunits {
        &SI_UNITS
    } else {
        &SHORT_SCALE_UNITS
    };
    LargeNumLabels {
        decimals: decimals.filter(|&d| d > 0),
        units,
    }
}

/// Fixed-precision labels with comma thousands separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommaFormat {
    digits: usize,
}

impl Labeller for CommaFormat {
    fn labels(&self, values: &[f64]) -> Vec<String> {
        values
            .iter()
            .map(|&x| group_thousands(&format!("{:.*}", self.digits, x)))
            .collect()
    }
}

/// Comma-grouped labels rounded to whole numbers: `1234567` as `1,234,567`.
pub fn comma_format() -> CommaFormat {
    comma_format_digits(0)
}

pub fn comma_format_digits(digits: usize) -> CommaFormat {
    CommaFormat { digits }
}

/// Percentage labels; `0.25` becomes `25%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PercentFormat;

impl Labeller for PercentFormat {
    fn labels(&self, values: &[f64]) -> Vec<String> {
        let scaled: Vec<f64> = values.iter().map(|x| x * 100.0).collect();
        let digits = label_digits(&scaled);
        scaled
            .iter()
            .map(|&x| format!("{}%", group_thousands(&format!("{:.*}", digits, x))))
            .collect()
    }
}

pub fn percent_format() -> PercentFormat {
    PercentFormat
}

/// Default labels: plain decimals, as few as the breaks need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlainLabels;

impl Labeller for PlainLabels {
    fn labels(&self, values: &[f64]) -> Vec<String> {
        let digits = label_digits(values);
        values.iter().map(|&x| format!("{:.*}", digits, x)).collect()
    }
}

pub fn plain_labels() -> PlainLabels {
    PlainLabels
}

const MAX_LABEL_DIGITS: usize = 6;

/// Smallest number of decimals that shows every value without rounding it.
fn label_digits(values: &[f64]) -> usize {
    (0..MAX_LABEL_DIGITS)
        .find(|&digits| {
            let scale = 10f64.powi(digits as i32);
            values.iter().filter(|x| x.is_finite()).all(|&x| {
                let rounded = (x * scale).round() / scale;
                (rounded - x).abs() <= 1e-9 * x.abs().max(1.0)
            })
        })
        .unwrap_or(MAX_LABEL_DIGITS)
}

/// Inserts `,` between groups of three integer digits of a formatted number.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(pos) => unsigned.split_at(pos),
        None => (unsigned, ""),
    };
    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return formatted.to_string();
    }

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}{frac_part}")
}
