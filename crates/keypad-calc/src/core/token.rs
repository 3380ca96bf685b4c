//! Keypad input tokens
//!
//! One token per keypad button. Labels are the exact button captions, so a
//! front-end can forward whatever caption was activated.

use std::str::FromStr;

use crate::core::{CalcError, Operation};

/// A decimal digit key, always in `0..=9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    const LABELS: [&'static str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

    /// Creates a digit, or `None` if `d` is not a single decimal digit
    #[must_use]
    pub const fn new(d: u8) -> Option<Self> {
        if d <= 9 {
            Some(Self(d))
        } else {
            None
        }
    }

    /// Numeric value of the digit
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The character appended to the display
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }

    #[must_use]
    const fn label(self) -> &'static str {
        Self::LABELS[self.0 as usize]
    }
}

/// A single keypad input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A digit 0-9
    Digit(Digit),
    /// The decimal point
    Decimal,
    /// One of the four binary operators
    Operator(Operation),
    /// Resolve the pending operation
    Equals,
    /// Reset everything (AC)
    AllClear,
    /// Sign flip (+/-)
    Negate,
    /// Divide the display by 100 (%)
    Percent,
    /// Square root of the display (√)
    SquareRoot,
}

impl Token {
    /// All 20 keypad tokens in row-major keypad order
    pub const ALL: [Self; 20] = [
        Self::AllClear,
        Self::Negate,
        Self::Percent,
        Self::Operator(Operation::Divide),
        Self::Digit(Digit(7)),
        Self::Digit(Digit(8)),
        Self::Digit(Digit(9)),
        Self::Operator(Operation::Multiply),
        Self::Digit(Digit(4)),
        Self::Digit(Digit(5)),
        Self::Digit(Digit(6)),
        Self::Operator(Operation::Subtract),
        Self::Digit(Digit(1)),
        Self::Digit(Digit(2)),
        Self::Digit(Digit(3)),
        Self::Operator(Operation::Add),
        Self::Digit(Digit(0)),
        Self::Decimal,
        Self::SquareRoot,
        Self::Equals,
    ];

    /// The `0` key
    pub const ZERO: Self = Self::Digit(Digit(0));

    /// Creates a digit token, or `None` if `d` is not a single decimal digit
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        match Digit::new(d) {
            Some(digit) => Some(Self::Digit(digit)),
            None => None,
        }
    }

    /// Returns the button caption for this token
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Digit(d) => d.label(),
            Self::Decimal => ".",
            Self::Operator(op) => op.symbol(),
            Self::Equals => "=",
            Self::AllClear => "AC",
            Self::Negate => "+/-",
            Self::Percent => "%",
            Self::SquareRoot => "√",
        }
    }

    /// Splits a whitespace-separated sequence of labels into tokens
    pub fn parse_sequence(input: &str) -> Result<Vec<Self>, CalcError> {
        input.split_whitespace().map(str::parse).collect()
    }
}

impl FromStr for Token {
    type Err = CalcError;

    /// Parses a button caption. ASCII spellings are accepted as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = match s {
            "+" => Self::Operator(Operation::Add),
            "-" | "−" => Self::Operator(Operation::Subtract),
            "×" | "*" | "x" => Self::Operator(Operation::Multiply),
            "÷" | "/" => Self::Operator(Operation::Divide),
            "=" => Self::Equals,
            "AC" | "C" => Self::AllClear,
            "+/-" | "±" | "neg" => Self::Negate,
            "%" => Self::Percent,
            "√" | "sqrt" => Self::SquareRoot,
            "." => Self::Decimal,
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Self::Digit(Digit(c as u8 - b'0')),
                    _ => return Err(CalcError::unknown_token(s)),
                }
            }
        };
        Ok(token)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
