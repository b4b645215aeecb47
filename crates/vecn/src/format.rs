//! Converting vectors to and from text.
//!
//! A vector is written as its components, each formatted as a number, joined by a separator. The
//! [`Display`] and [`FromStr`] implementations of [`Vector`] use the default settings (`", "` as
//! the separator, [`NumberFormat::General`] and [`Locale::INVARIANT`]). [`VectorFormat`] allows
//! customizing all of them.
//!
//! Parsing the output of [`VectorFormat::format`] with the same [`VectorFormat`] gives back the
//! original vector whenever the number format does not lose precision. [`NumberFormat::General`]
//! never does.
//!
//! ```
//! # use vecn::*;
//! let v = vec3(1.5, -2.0, 0.125);
//! assert_eq!(v.to_string(), "1.5, -2, 0.125");
//! assert_eq!("1.5, -2, 0.125".parse::<Vec3d>(), Ok(v));
//!
//! let german = VectorFormat::default()
//!     .with_separator("; ")
//!     .with_locale(Locale::new(',', '.'));
//! assert_eq!(german.format(&v), "1,5; -2; 0,125");
//! assert_eq!(german.parse::<f64, 3>("1,5; -2; 0,125"), Ok(v));
//! ```
//!
//! [`Display`]: fmt::Display

use std::{borrow::Cow, fmt, num::ParseFloatError, str::FromStr};

use half::f16;
use itertools::Itertools;
use num_complex::Complex64;
use rust_decimal::Decimal;

use crate::{error::ParseError, Vector};

/// The separator used by the [`Display`][fmt::Display] and [`FromStr`] implementations.
pub const DEFAULT_SEPARATOR: &str = ", ";

/// How individual numbers are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberFormat {
    /// The shortest representation that parses back to the same value.
    #[default]
    General,
    /// A fixed number of digits after the decimal point.
    Fixed(usize),
    /// Scientific notation (`1.25e3`) with the given number of digits after the decimal point.
    Scientific(usize),
}

/// Culture-specific characters used when writing and reading numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// Character separating the integral and fractional part of a number.
    pub decimal_point: char,
    /// Character separating groups of digits (`1,000,000`). Only accepted when parsing, and only
    /// if [`NumberStyle::allow_grouping`] is set.
    pub group_separator: char,
}

impl Locale {
    /// Culture-independent settings: `.` as the decimal point, `,` to group digits.
    pub const INVARIANT: Self = Self::new('.', ',');

    pub const fn new(decimal_point: char, group_separator: char) -> Self {
        Self {
            decimal_point,
            group_separator,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::INVARIANT
    }
}

/// Which decorations are permitted around and inside numbers when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberStyle {
    /// Allow whitespace before and after each component. Defaults to `true`.
    pub allow_whitespace: bool,
    /// Allow (and ignore) [`Locale::group_separator`] inside numbers. Defaults to `false`.
    pub allow_grouping: bool,
}

impl Default for NumberStyle {
    fn default() -> Self {
        Self {
            allow_whitespace: true,
            allow_grouping: false,
        }
    }
}

/// Settings for converting vectors to and from text.
///
/// # Examples
///
/// ```
/// # use vecn::*;
/// let fmt = VectorFormat::default()
///     .with_separator(" | ")
///     .with_number_format(NumberFormat::Fixed(2));
/// assert_eq!(fmt.format(&vec2(0.5, 3.0)), "0.50 | 3.00");
/// assert_eq!(fmt.parse::<f32, 2>("0.50 | 3.00"), Ok(vec2(0.5, 3.0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorFormat {
    separator: Cow<'static, str>,
    number: NumberFormat,
    locale: Locale,
    style: NumberStyle,
}

impl Default for VectorFormat {
    fn default() -> Self {
        Self {
            separator: Cow::Borrowed(DEFAULT_SEPARATOR),
            number: NumberFormat::General,
            locale: Locale::INVARIANT,
            style: NumberStyle::default(),
        }
    }
}

impl VectorFormat {
    /// Sets the string placed between components.
    ///
    /// An empty separator makes the whole text a single component.
    pub fn with_separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_number_format(mut self, number: NumberFormat) -> Self {
        self.number = number;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_style(mut self, style: NumberStyle) -> Self {
        self.style = style;
        self
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn number_format(&self) -> NumberFormat {
        self.number
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn style(&self) -> NumberStyle {
        self.style
    }

    /// Writes `vector` as text.
    pub fn format<T: FormatNumber, const N: usize>(&self, vector: &Vector<T, N>) -> String {
        vector
            .iter()
            .map(|elem| self.localize(elem.format_number(self.number)))
            .join(&self.separator)
    }

    /// Parses a vector from `text`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError::ComponentCount`] error if `text` does not consist of exactly `N`
    /// components, and a [`ParseError::InvalidComponent`] error if a component is not a valid
    /// number. Both are *format errors* (see [`ParseError::is_format_error`]).
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// let fmt = VectorFormat::default();
    /// assert_eq!(fmt.parse::<i32, 2>("4, -5"), Ok(vec2(4, -5)));
    ///
    /// let err = fmt.parse::<i32, 2>("").unwrap_err();
    /// assert_eq!(err, ParseError::ComponentCount { expected: 2, found: 1 });
    /// assert!(err.is_format_error());
    /// ```
    pub fn parse<T: FormatNumber, const N: usize>(
        &self,
        text: &str,
    ) -> Result<Vector<T, N>, ParseError> {
        let parts = if self.separator.is_empty() {
            vec![text]
        } else {
            text.split(&*self.separator).collect::<Vec<_>>()
        };
        if parts.len() != N {
            log::debug!(
                "expected {} components separated by {:?}, found {} in {text:?}",
                N,
                self.separator,
                parts.len()
            );
            return Err(ParseError::ComponentCount {
                expected: N,
                found: parts.len(),
            });
        }

        let elems = parts
            .into_iter()
            .enumerate()
            .map(|(index, part)| self.parse_component(index, part))
            .collect::<Result<Vec<T>, _>>()?;
        let elems = <[T; N]>::try_from(elems).map_err(|elems| ParseError::ComponentCount {
            expected: N,
            found: elems.len(),
        })?;
        Ok(Vector::from(elems))
    }

    /// Parses a vector from `text`, treating [`None`] as missing input.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NoInput`] if `text` is [`None`], and otherwise fails like
    /// [`VectorFormat::parse`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// let fmt = VectorFormat::default();
    /// let err = fmt.parse_opt::<f32, 3>(None).unwrap_err();
    /// assert_eq!(err, ParseError::NoInput);
    /// assert!(!err.is_format_error());
    /// ```
    pub fn parse_opt<T: FormatNumber, const N: usize>(
        &self,
        text: Option<&str>,
    ) -> Result<Vector<T, N>, ParseError> {
        match text {
            Some(text) => self.parse(text),
            None => Err(ParseError::NoInput),
        }
    }

    /// Parses a vector from `text`, returning [`None`] on failure.
    pub fn try_parse<T: FormatNumber, const N: usize>(&self, text: &str) -> Option<Vector<T, N>> {
        self.parse(text).ok()
    }

    fn localize(&self, number: String) -> String {
        if self.locale.decimal_point == '.' {
            number
        } else {
            number.replace('.', self.locale.decimal_point.encode_utf8(&mut [0; 4]))
        }
    }

    fn parse_component<T: FormatNumber>(&self, index: usize, part: &str) -> Result<T, ParseError> {
        let invalid = |reason: String| {
            log::debug!("component {index} ({part:?}) is invalid: {reason}");
            ParseError::InvalidComponent {
                index,
                text: part.to_string(),
                reason,
            }
        };

        let trimmed = part.trim();
        if trimmed.len() != part.len() && !self.style.allow_whitespace {
            return Err(invalid("surrounding whitespace is not allowed".into()));
        }
        if trimmed.is_empty() {
            return Err(invalid("component is empty".into()));
        }

        let mut number = String::with_capacity(trimmed.len());
        for c in trimmed.chars() {
            if c == self.locale.group_separator {
                if !self.style.allow_grouping {
                    return Err(invalid(format!("digit grouping with `{c}` is not allowed")));
                }
            } else if c == self.locale.decimal_point {
                number.push('.');
            } else {
                number.push(c);
            }
        }

        T::parse_number(&number).map_err(invalid)
    }
}

/// Scalars that can be written as text and read back.
///
/// Implementations use `.` as the decimal point; [`VectorFormat`] takes care of the [`Locale`].
pub trait FormatNumber: Sized {
    fn format_number(&self, format: NumberFormat) -> String;

    /// Parses a number. The error is a human-readable reason.
    fn parse_number(text: &str) -> Result<Self, String>;
}

macro_rules! float_text {
    ($($t:ty),+) => {
        $(
            impl FormatNumber for $t {
                fn format_number(&self, format: NumberFormat) -> String {
                    match format {
                        NumberFormat::General => self.to_string(),
                        NumberFormat::Fixed(p) => format!("{:.*}", p, self),
                        NumberFormat::Scientific(p) => format!("{:.*e}", p, self),
                    }
                }

                fn parse_number(text: &str) -> Result<Self, String> {
                    text.parse().map_err(|e: ParseFloatError| e.to_string())
                }
            }
        )+
    };
}
float_text!(f32, f64);

// Integers written with a fractional part (`Fixed`) or an exponent (`Scientific`) are read back
// as long as they denote an integer in range. Both directions work on decimal digits, never on
// floats, so every `i64` survives.
macro_rules! int_text {
    ($($t:ty),+) => {
        $(
            impl FormatNumber for $t {
                fn format_number(&self, format: NumberFormat) -> String {
                    match format {
                        NumberFormat::General | NumberFormat::Fixed(0) => self.to_string(),
                        NumberFormat::Fixed(p) => format!("{}.{}", self, "0".repeat(p)),
                        NumberFormat::Scientific(p) => integer_scientific(i128::from(*self), p),
                    }
                }

                fn parse_number(text: &str) -> Result<Self, String> {
                    text.parse::<$t>().or_else(|err| {
                        let value = parse_integer_digits(text).map_err(|reason| {
                            if reason == NOT_A_NUMBER {
                                err.to_string()
                            } else {
                                reason.to_string()
                            }
                        })?;
                        <$t>::try_from(value).map_err(|_| OUT_OF_RANGE.to_string())
                    })
                }
            }
        )+
    };
}
int_text!(i32, u32, i64);

const NOT_A_NUMBER: &str = "invalid digit found in string";
const OUT_OF_RANGE: &str = "number does not fit in the target type";

/// Writes `value` in scientific notation with `precision` digits after the decimal point,
/// rounding half away from zero.
fn integer_scientific(value: i128, precision: usize) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let digits = value.unsigned_abs().to_string();
    let mut exponent = digits.len() - 1;

    let mut mantissa = if digits.len() > precision + 1 {
        let (head, tail) = digits.split_at(precision + 1);
        if tail.as_bytes()[0] >= b'5' {
            // `head` is shorter than `digits`, so it fits.
            let rounded = (head.parse::<u128>().unwrap_or(0) + 1).to_string();
            if rounded.len() > head.len() {
                exponent += 1;
                rounded[..head.len()].to_string()
            } else {
                rounded
            }
        } else {
            head.to_string()
        }
    } else {
        digits
    };
    while mantissa.len() < precision + 1 {
        mantissa.push('0');
    }

    let (first, rest) = mantissa.split_at(1);
    if rest.is_empty() {
        format!("{sign}{first}e{exponent}")
    } else {
        format!("{sign}{first}.{rest}e{exponent}")
    }
}

/// Parses decimal or scientific notation that denotes an exact integer (`12.00`, `1.5e3`,
/// `1250e-1`).
fn parse_integer_digits(text: &str) -> Result<i128, &'static str> {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (mantissa, exponent) = match unsigned.find(|c: char| c == 'e' || c == 'E') {
        Some(i) => {
            let exponent = unsigned[i + 1..]
                .parse::<i32>()
                .map_err(|_| NOT_A_NUMBER)?;
            (&unsigned[..i], exponent)
        }
        None => (unsigned, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(NOT_A_NUMBER);
    }
    if !int_part
        .bytes()
        .chain(frac_part.bytes())
        .all(|b| b.is_ascii_digit())
    {
        return Err(NOT_A_NUMBER);
    }

    let all_digits = format!("{int_part}{frac_part}");
    let significant = all_digits.trim_start_matches('0');
    let shift = i64::from(exponent) - frac_part.len() as i64;
    let (significant, shift) = if shift < 0 {
        let dropped = usize::try_from(-shift).unwrap_or(usize::MAX);
        let keep = significant.len().saturating_sub(dropped);
        if significant[keep..].bytes().any(|b| b != b'0') {
            return Err("number has a fractional part");
        }
        (&significant[..keep], 0)
    } else {
        (significant, shift)
    };

    let mut value = 0u128;
    for b in significant.bytes() {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u128::from(b - b'0')))
            .ok_or(OUT_OF_RANGE)?;
    }
    if value != 0 {
        for _ in 0..shift {
            value = value.checked_mul(10).ok_or(OUT_OF_RANGE)?;
        }
    }

    let value = i128::try_from(value).map_err(|_| OUT_OF_RANGE)?;
    Ok(if negative { -value } else { value })
}

impl FormatNumber for bool {
    fn format_number(&self, _: NumberFormat) -> String {
        self.to_string()
    }

    fn parse_number(text: &str) -> Result<Self, String> {
        if text.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if text.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err("expected `true` or `false`".into())
        }
    }
}

impl FormatNumber for f16 {
    fn format_number(&self, format: NumberFormat) -> String {
        // Every `f16` is exactly representable as an `f32`, and parses back from its shortest
        // `f32` representation.
        self.to_f32().format_number(format)
    }

    fn parse_number(text: &str) -> Result<Self, String> {
        f32::parse_number(text).map(f16::from_f32)
    }
}

impl FormatNumber for Decimal {
    fn format_number(&self, format: NumberFormat) -> String {
        match format {
            NumberFormat::General => self.to_string(),
            NumberFormat::Fixed(p) => format!("{:.*}", p, self),
            NumberFormat::Scientific(p) => format!("{:.*e}", p, self),
        }
    }

    fn parse_number(text: &str) -> Result<Self, String> {
        Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .map_err(|e| e.to_string())
    }
}

impl FormatNumber for Complex64 {
    fn format_number(&self, format: NumberFormat) -> String {
        match format {
            NumberFormat::General => self.to_string(),
            NumberFormat::Fixed(p) => format!("{:.*}", p, self),
            NumberFormat::Scientific(p) => format!("{:.*e}", p, self),
        }
    }

    fn parse_number(text: &str) -> Result<Self, String> {
        text.parse::<Complex64>().map_err(|e| e.to_string())
    }
}

/// Writes the elements separated by `", "`.
///
/// Formatting options like the precision are applied to every element.
///
/// # Examples
///
/// ```
/// # use vecn::*;
/// assert_eq!(vec3(1, 2, 3).to_string(), "1, 2, 3");
/// assert_eq!(format!("{:.2}", vec2(1.0, 2.5)), "1.00, 2.50");
/// ```
impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, elem) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(DEFAULT_SEPARATOR)?;
            }
            fmt::Display::fmt(elem, f)?;
        }
        Ok(())
    }
}

/// Parses the format written by the [`Display`][fmt::Display] impl.
impl<T, const N: usize> FromStr for Vector<T, N>
where
    T: FormatNumber,
{
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VectorFormat::default().parse(s)
    }
}
