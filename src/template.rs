//! Positional placeholder formatting for log message templates.
//!
//! Grammar: `{index[,alignment][:format]}`, with `{{` and `}}` as literal
//! braces. Arguments are typed ([`Arg`]) so numeric format specifiers can be
//! checked against the value they apply to.

use std::fmt::{self, Write};

use thiserror::Error;

/// Errors produced while expanding a template.
///
/// The logger never surfaces these; it falls back to the raw template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unclosed placeholder starting at byte {0}")]
    Unclosed(usize),

    #[error("unmatched '}}' at byte {0}")]
    UnmatchedClose(usize),

    #[error("invalid placeholder index at byte {0}")]
    BadIndex(usize),

    #[error("placeholder index {index} out of range for {count} argument(s)")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("invalid alignment at byte {0}")]
    BadAlignment(usize),

    #[error("format '{spec}' is not valid for {kind} argument")]
    BadFormat { spec: String, kind: &'static str },
}

/// A typed substitution argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Str(String),
    Char(char),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl Arg {
    /// Best-effort typing for textual input: integer, then float, else string.
    pub fn infer(s: &str) -> Self {
        if let Ok(i) = s.parse::<i64>() {
            Self::Int(i)
        } else if let Ok(u) = s.parse::<u64>() {
            Self::UInt(u)
        } else if let Ok(f) = s.parse::<f64>()
            && f.is_finite()
        {
            Self::Float(f)
        } else {
            Self::Str(s.to_string())
        }
    }

    const fn kind(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Char(_) => "char",
            Self::Int(_) | Self::UInt(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Char(c) => write!(f, "{c}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::UInt(u) => write!(f, "{u}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

macro_rules! impl_from_arg {
    ($variant:ident => $($ty:ty),+) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }
        )+
    };
}

impl_from_arg!(Int => i8, i16, i32, i64);
impl_from_arg!(UInt => u8, u16, u32, u64);
impl_from_arg!(Float => f32, f64);
impl_from_arg!(Char => char);
impl_from_arg!(Bool => bool);

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<isize> for Arg {
    fn from(value: isize) -> Self {
        // isize is at most 64 bits on every supported target
        Self::Int(value as i64)
    }
}

impl From<usize> for Arg {
    fn from(value: usize) -> Self {
        Self::UInt(value as u64)
    }
}

/// Build a `[Arg; N]` from heterogeneous values.
///
/// ```
/// use tintlog::{args, template::format};
///
/// let out = format("disk at {0}%", &args![92]).unwrap();
/// assert_eq!(out, "disk at 92%");
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        [$($crate::Arg::from($arg)),*]
    };
}

/// Expand `template` with `args`.
pub fn format(template: &str, args: &[Arg]) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let bytes = template.as_bytes();
    let mut i = 0;
    let mut literal_start = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                out.push_str(&template[literal_start..i]);
                if bytes.get(i + 1) == Some(&b'{') {
                    out.push('{');
                    i += 2;
                } else {
                    let close = template[i..]
                        .find('}')
                        .map(|rel| i + rel)
                        .ok_or(TemplateError::Unclosed(i))?;
                    expand_placeholder(&template[i + 1..close], i, args, &mut out)?;
                    i = close + 1;
                }
                literal_start = i;
            }
            b'}' => {
                out.push_str(&template[literal_start..i]);
                if bytes.get(i + 1) == Some(&b'}') {
                    out.push('}');
                    i += 2;
                    literal_start = i;
                } else {
                    return Err(TemplateError::UnmatchedClose(i));
                }
            }
            _ => i += 1,
        }
    }
    out.push_str(&template[literal_start..]);
    Ok(out)
}

/// Widest alignment `std::fmt` accepts as a runtime width.
const MAX_ALIGNMENT: u64 = u16::MAX as u64;

/// Expand the body of one placeholder (text between the braces).
fn expand_placeholder(
    body: &str,
    at: usize,
    args: &[Arg],
    out: &mut String,
) -> Result<(), TemplateError> {
    let (head, spec) = match body.split_once(':') {
        Some((head, spec)) => (head, Some(spec)),
        None => (body, None),
    };
    let (index, alignment) = match head.split_once(',') {
        Some((index, align)) => (index, Some(align)),
        None => (head, None),
    };

    let index: usize = index
        .trim()
        .parse()
        .map_err(|_| TemplateError::BadIndex(at))?;
    let arg = args.get(index).ok_or(TemplateError::IndexOutOfRange {
        index,
        count: args.len(),
    })?;
    let width: Option<i64> = alignment
        .map(|a| match a.trim().parse::<i64>() {
            Ok(w) if w.unsigned_abs() <= MAX_ALIGNMENT => Ok(w),
            _ => Err(TemplateError::BadAlignment(at)),
        })
        .transpose()?;

    let rendered = render_arg(arg, spec.unwrap_or(""))?;
    match width {
        Some(w) if w < 0 => {
            let w = usize::try_from(w.unsigned_abs()).unwrap_or(usize::MAX);
            let _ = write!(out, "{rendered:<w$}");
        }
        Some(w) => {
            let w = usize::try_from(w).unwrap_or(usize::MAX);
            let _ = write!(out, "{rendered:>w$}");
        }
        None => out.push_str(&rendered),
    }
    Ok(())
}

/// Split a numeric format specifier like `X8` into its letter and precision.
fn parse_spec(spec: &str) -> Option<(char, Option<usize>)> {
    let mut chars = spec.chars();
    let letter = chars.next()?;
    let rest = chars.as_str();
    if rest.is_empty() {
        return Some((letter, None));
    }
    if rest.len() > 2 || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    rest.parse().ok().map(|p| (letter, Some(p)))
}

fn render_arg(arg: &Arg, spec: &str) -> Result<String, TemplateError> {
    let bad = || TemplateError::BadFormat {
        spec: spec.to_string(),
        kind: arg.kind(),
    };

    match arg {
        Arg::Str(_) | Arg::Char(_) | Arg::Bool(_) => Ok(arg.to_string()),
        _ if spec.is_empty() => Ok(arg.to_string()),
        Arg::Int(i) => {
            let (letter, precision) = parse_spec(spec).ok_or_else(bad)?;
            render_integer(*i < 0, i.unsigned_abs(), letter, precision, || {
                format!("{i:X}")
            })
            .ok_or_else(bad)
        }
        Arg::UInt(u) => {
            let (letter, precision) = parse_spec(spec).ok_or_else(bad)?;
            render_integer(false, *u, letter, precision, || format!("{u:X}")).ok_or_else(bad)
        }
        Arg::Float(x) => {
            let (letter, precision) = parse_spec(spec).ok_or_else(bad)?;
            render_float(*x, letter, precision).ok_or_else(bad)
        }
    }
}

/// Render an integer given its sign and magnitude.
///
/// `hex` renders the raw value in upper-case hex; negative values come out as
/// two's complement.
fn render_integer(
    negative: bool,
    magnitude: u64,
    letter: char,
    precision: Option<usize>,
    hex: impl FnOnce() -> String,
) -> Option<String> {
    let sign = if negative { "-" } else { "" };
    match letter {
        'D' | 'd' => {
            let digits = precision.unwrap_or(0);
            Some(format!("{sign}{magnitude:0digits$}"))
        }
        'X' | 'x' => {
            let digits = precision.unwrap_or(0);
            let raw = hex();
            let raw = if letter == 'x' {
                raw.to_lowercase()
            } else {
                raw
            };
            Some(format!("{raw:0>digits$}"))
        }
        'F' | 'f' => {
            let decimals = precision.unwrap_or(2);
            let zeros = "0".repeat(decimals);
            let frac = if decimals > 0 {
                format!(".{zeros}")
            } else {
                String::new()
            };
            Some(format!("{sign}{magnitude}{frac}"))
        }
        'N' | 'n' => {
            let decimals = precision.unwrap_or(2);
            let zeros = "0".repeat(decimals);
            let frac = if decimals > 0 {
                format!(".{zeros}")
            } else {
                String::new()
            };
            Some(format!("{sign}{}{frac}", group_thousands(&magnitude.to_string())))
        }
        _ => None,
    }
}

fn render_float(x: f64, letter: char, precision: Option<usize>) -> Option<String> {
    match letter {
        'F' | 'f' => {
            let decimals = precision.unwrap_or(2);
            Some(format!("{x:.decimals$}"))
        }
        'N' | 'n' => {
            let decimals = precision.unwrap_or(2);
            let fixed = format!("{:.decimals$}", x.abs());
            let (int_part, frac) = match fixed.split_once('.') {
                Some((int_part, frac)) => (int_part, Some(frac)),
                None => (fixed.as_str(), None),
            };
            let nonzero = fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
            let sign = if x.is_sign_negative() && nonzero { "-" } else { "" };
            let grouped = group_thousands(int_part);
            Some(match frac {
                Some(frac) => format!("{sign}{grouped}.{frac}"),
                None => format!("{sign}{grouped}"),
            })
        }
        _ => None,
    }
}

/// Insert `,` between every group of three digits.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
