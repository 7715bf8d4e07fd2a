//! Width-aware cell formatting.
//!
//! # Design
//!
//! A [`Formatter`] is pure configuration; [`Formatter::format`] maps a
//! `(cell, width)` pair to its column text.  Numeric rendering picks
//! between integer, fixed-point, and scientific notation from the
//! estimated digit count of the value and the column budget:
//!
//!   digits ∉ (−5, 6)  or  digits > width   →  scientific
//!   exact integer                           →  integer, zero decimals
//!   otherwise                               →  fixed-point
//!
//! Pretty mode trades precision for readability: decimal counts are
//! derived from the column width and capped by `max_decimals`.  Non-pretty
//! mode is precision-first and only uses the width for padding, so its
//! output may overflow the column — accepted behavior, not an error.

use std::iter::repeat_n;

use sl_core::Cell;

/// Horizontal alignment of a cell within its column.
///
/// Center puts the odd fill character on the right.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Left,
    Right,
    #[default]
    Center,
}

/// Stateless cell formatter.
///
/// Formatting is idempotent: the same `(cell, width)` pair always yields
/// the same string.
#[derive(Clone, Debug)]
pub struct Formatter {
    pretty: bool,
    /// Decimals past the leading digit in precision-first mode
    /// (`max_precision − 1`).
    precision: usize,
    max_decimals: usize,
    pad: char,
    align: Align,
}

impl Formatter {
    /// Formatter with the writer defaults: centered, space-padded, at most
    /// five decimals in pretty mode.
    pub fn new(pretty: bool, max_precision: usize) -> Self {
        Self {
            pretty,
            precision: max_precision.saturating_sub(1),
            max_decimals: 5,
            pad: ' ',
            align: Align::Center,
        }
    }

    pub fn with_pad(mut self, pad: char) -> Self {
        self.pad = pad;
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Cap on decimal counts in pretty mode.
    pub fn with_max_decimals(mut self, max_decimals: usize) -> Self {
        self.max_decimals = max_decimals;
        self
    }

    /// Render `cell` for a column of `width` characters.
    pub fn format(&self, cell: Cell<'_>, width: usize) -> String {
        match cell {
            Cell::Int(v) => self.format_int(v, width),
            Cell::Float(v) => self.format_float(v, width),
            Cell::Text(v) => self.format_text(v, width),
        }
    }

    /// Render an exact integer: plain digits when they fit the notation
    /// rule, scientific notation otherwise.
    pub fn format_int(&self, value: i64, width: usize) -> String {
        if scientific(digit_guess(value as f64), width) {
            self.format_float(value as f64, width)
        } else {
            self.pad_to(&value.to_string(), width)
        }
    }

    /// Render a float in fixed or scientific notation.
    pub fn format_float(&self, value: f64, width: usize) -> String {
        let digits = digit_guess(value);
        if scientific(digits, width) {
            let decimals = if self.pretty {
                width.saturating_sub(6).max(1).min(self.max_decimals)
            } else {
                self.precision
            };
            self.pad_to(&format!("{value:.decimals$e}"), width)
        } else {
            let decimals = if self.pretty {
                ((width as i64 - digits - 2).max(1) as usize).min(self.max_decimals)
            } else {
                (self.precision as i64 - digits + 1).max(0) as usize
            };
            self.pad_to(&format!("{value:.decimals$}"), width)
        }
    }

    /// Render a string.  In pretty mode a value longer than the column
    /// keeps only its trailing `max(1, width − 2)` characters — trailing
    /// path segments are usually the identifying part.  Without pretty
    /// mode the value is passed uncut and may overflow the column.
    pub fn format_text(&self, value: &str, width: usize) -> String {
        let chars = value.chars().count();
        if self.pretty && chars > width {
            let keep = width.saturating_sub(2).max(1);
            let tail: String = value.chars().skip(chars - keep).collect();
            self.pad_to(&tail, width)
        } else {
            self.pad_to(value, width)
        }
    }

    /// Pad `text` to `width` per the configured pad char and alignment.
    /// Text already at or past `width` is returned uncut.
    fn pad_to(&self, text: &str, width: usize) -> String {
        let len = text.chars().count();
        if len >= width {
            return text.to_owned();
        }
        let fill = width - len;
        let (left, right) = match self.align {
            Align::Left => (0, fill),
            Align::Right => (fill, 0),
            Align::Center => (fill / 2, fill - fill / 2),
        };
        let mut out = String::with_capacity(text.len() + fill);
        out.extend(repeat_n(self.pad, left));
        out.push_str(text);
        out.extend(repeat_n(self.pad, right));
        out
    }
}

/// Estimated character count of the integer part of `value`, sign
/// included.  At least 1; saturates for non-finite input so `inf` lands in
/// the scientific branch.
fn digit_guess(value: f64) -> i64 {
    let digits = (value.abs().max(1.0).log10() as i64).saturating_add(1);
    if value < 0.0 { digits.saturating_add(1) } else { digits }
}

/// The notation rule: scientific iff the digit estimate leaves (−5, 6) or
/// exceeds the column width.
fn scientific(digits: i64, width: usize) -> bool {
    !(-5 < digits && digits < 6) || digits > width as i64
}
