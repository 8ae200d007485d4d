//! Text rendering of a table tree.

use alloc::string::{String, ToString};
use core::fmt::{self, Write};
use core::iter::Peekable;
use core::str::Chars;
use num_traits::Float;

use super::{Dependents, Table};
use crate::TableError;

const INDENT: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Conversion {
    Fixed,
    Exponent,
}

/// A printf-style format for a single number, like `%8.3f` or `x=%-10.2e;`.
#[derive(Debug, Clone, PartialEq)]
struct NumberFormat {
    prefix: String,
    suffix: String,
    left_align: bool,
    zero_pad: bool,
    width: usize,
    precision: usize,
    conversion: Conversion,
}

impl NumberFormat {
    fn parse(pattern: &str) -> Result<Self, TableError> {
        let invalid = || TableError::InvalidPattern(pattern.to_string());
        let mut chars = pattern.chars().peekable();

        let mut prefix = String::new();
        loop {
            match chars.next() {
                Some('%') if chars.peek() == Some(&'%') => {
                    chars.next();
                    prefix.push('%');
                }
                Some('%') => break,
                Some(c) => prefix.push(c),
                None => return Err(invalid()),
            }
        }

        let (mut left_align, mut zero_pad) = (false, false);
        while let Some(&c) = chars.peek() {
            match c {
                '-' => left_align = true,
                '0' => zero_pad = true,
                _ => break,
            }
            chars.next();
        }

        let width = take_count(&mut chars).ok_or_else(invalid)?;

        let precision = if chars.peek() == Some(&'.') {
            chars.next();
            take_count(&mut chars).ok_or_else(invalid)?
        } else {
            6 // printf default
        };

        let conversion = match chars.next() {
            Some('f') => Conversion::Fixed,
            Some('e') => Conversion::Exponent,
            _ => return Err(invalid()),
        };

        let mut suffix = String::new();
        while let Some(c) = chars.next() {
            if c == '%' && chars.next() != Some('%') {
                return Err(invalid());
            }
            suffix.push(c);
        }

        Ok(Self {
            prefix,
            suffix,
            left_align,
            zero_pad,
            width,
            precision,
            conversion,
        })
    }

    fn write<W: Write + ?Sized>(&self, out: &mut W, v: f64) -> fmt::Result {
        let p = self.precision;
        let body = match self.conversion {
            Conversion::Fixed => alloc::format!("{v:.p$}"),
            Conversion::Exponent => alloc::format!("{v:.p$e}"),
        };

        out.write_str(&self.prefix)?;
        let pad = self.width.saturating_sub(body.chars().count());
        if self.left_align {
            out.write_str(&body)?;
            (0..pad).try_for_each(|_| out.write_char(' '))?;
        } else if self.zero_pad && v.is_finite() {
            // Zeros go between the sign and the digits
            let digits = match body.strip_prefix('-') {
                Some(rest) => {
                    out.write_char('-')?;
                    rest
                }
                None => &body,
            };
            (0..pad).try_for_each(|_| out.write_char('0'))?;
            out.write_str(digits)?;
        } else {
            (0..pad).try_for_each(|_| out.write_char(' '))?;
            out.write_str(&body)?;
        }
        out.write_str(&self.suffix)
    }
}

/// Consume a run of decimal digits as a width or precision, which
/// `core::fmt` limits to `u16`. An empty run is zero.
fn take_count(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut s = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        s.push(c);
        chars.next();
    }
    if s.is_empty() {
        return Some(0);
    }
    s.parse::<u16>().ok().map(usize::from)
}

impl<T: Float> Table<T> {
    /// Render the tree as text, formatting every coordinate and value with a
    /// printf-style `pattern` (`%[-][0][width][.precision]f` or `...e`,
    /// optionally surrounded by literal text).
    ///
    /// Each sample point is one line, `x => y`; a nested table follows its
    /// coordinate's `x =>` line, indented by one more level.
    ///
    /// ```rust
    /// use interptable::Table;
    ///
    /// let t = Table::new([1.0, 2.0], [3.0, 4.0]).unwrap();
    /// assert_eq!(t.format("%.2f").unwrap(), "1.00 => 3.00\n2.00 => 4.00\n");
    /// ```
    ///
    /// # Errors
    /// * If `pattern` is not a valid single-number format
    pub fn format(&self, pattern: &str) -> Result<String, TableError> {
        let number = NumberFormat::parse(pattern)?;
        let mut out = String::new();
        self.render(&mut out, 0, &|w, v| {
            number.write(w, v.to_f64().unwrap_or(f64::NAN))
        })
        .map_err(|_| TableError::InvalidPattern(pattern.to_string()))?;
        Ok(out)
    }

    fn render(
        &self,
        out: &mut dyn Write,
        depth: usize,
        num: &dyn Fn(&mut dyn Write, T) -> fmt::Result,
    ) -> fmt::Result {
        for (i, &x) in self.independents.iter().enumerate() {
            (0..depth).try_for_each(|_| out.write_str(INDENT))?;
            num(out, x)?;
            match &self.dependents {
                Dependents::Scalars(ys) => {
                    out.write_str(" => ")?;
                    num(out, ys[i])?;
                    out.write_char('\n')?;
                }
                Dependents::Tables(tables) => {
                    out.write_str(" =>\n")?;
                    tables[i].render(out, depth + 1, num)?;
                }
            }
        }
        Ok(())
    }
}

impl<T: Float + fmt::Display> fmt::Display for Table<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, 0, &|w, v| write!(w, "{v}"))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::format;

    #[test]
    fn test_format_flat() {
        let t = Table::new([1.0, 2.0], [3.0, 4.0]).unwrap();
        assert_eq!(t.format("%.2f").unwrap(), "1.00 => 3.00\n2.00 => 4.00\n");
        assert_eq!(format!("{t}"), "1 => 3\n2 => 4\n");
    }

    #[test]
    fn test_format_nested() {
        let t = Table::nested(
            [1.0, 2.0],
            [
                Table::new([1.0, 2.0], [3.0, 4.0]).unwrap(),
                Table::new([2.0, 3.0, 5.0], [6.0, -1.0, 7.0]).unwrap(),
            ],
        )
        .unwrap();
        let expected = "\
1.0 =>
  1.0 => 3.0
  2.0 => 4.0
2.0 =>
  2.0 => 6.0
  3.0 => -1.0
  5.0 => 7.0
";
        assert_eq!(t.format("%.1f").unwrap(), expected);
    }

    #[test]
    fn test_width_and_flags() {
        let t = Table::new([-1.5, 20.3], [0.126, -3.0]).unwrap();
        assert_eq!(
            t.format("%6.2f").unwrap(),
            " -1.50 =>   0.13\n 20.30 =>  -3.00\n"
        );
        assert_eq!(
            t.format("%-6.1f|").unwrap(),
            "-1.5  | => 0.1   |\n20.3  | => -3.0  |\n"
        );
        assert_eq!(
            t.format("%07.2f").unwrap(),
            "-001.50 => 0000.13\n0020.30 => -003.00\n"
        );
        assert_eq!(
            t.format("[%.1e%%]").unwrap(),
            "[-1.5e0%] => [1.3e-1%]\n[2.0e1%] => [-3.0e0%]\n"
        );
        assert_eq!(t.format("%f").unwrap().lines().next(), Some("-1.500000 => 0.126000"));
    }

    /// Widths and precisions up to the formatter's limit are accepted
    #[test]
    fn test_largest_width_and_precision() {
        let t = Table::new([1.0, 2.0], [3.0, 4.0]).unwrap();
        let s = t.format("%.65535f").unwrap();
        assert!(s.starts_with("1.000"));
        assert_eq!(s.lines().next().map(str::len), Some(2 * (65535 + 2) + 4));

        let s = t.format("%65535.1f").unwrap();
        assert_eq!(s.lines().next().map(str::len), Some(2 * 65535 + 4));
    }

    #[test]
    fn test_invalid_patterns() {
        let t = Table::new([1.0, 2.0], [3.0, 4.0]).unwrap();
        for pattern in [
            "", "%", "%.2", "%d", "abc", "%.2f %", "%%f", "%99999999999999999999999f",
            "%.70000f", "%9999999999f", "%65536.1e",
        ] {
            assert_eq!(
                t.format(pattern).unwrap_err(),
                TableError::InvalidPattern(pattern.to_string()),
                "{pattern}"
            );
        }
    }
}
