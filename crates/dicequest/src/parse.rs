//! Text input → die configurations plus the companion block of each part.
//!
//! Format
//! - One die per line: `<id>: faces=[<v1>,...,<vk>] seed=<s>`.
//! - Parts 2 and 3 append a blank line and a companion block: a digit track
//!   (part 2) or a rectangular digit grid (part 3).
//!
//! Any malformed line rejects the whole input; there is no partial parse.
//! Line numbers in errors are 1-based and count from the first non-blank line.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::die::{DieConfig, DieError};
use crate::visit::Grid;

static DIE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<id>\d+): faces=\[(?P<faces>(?:-?\d+,)*-?\d+)\] seed=(?P<seed>\d+)$")
        .expect("die line pattern is valid")
});

/// Input rejected by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A die line does not have the expected shape (or a number overflows).
    InvalidLine { line: usize, text: String },
    /// The die configuration is well-formed but unusable.
    InvalidDie { line: usize, source: DieError },
    /// No blank-line separated companion block.
    MissingSection { expected: &'static str },
    /// A non-digit inside a track or grid.
    InvalidDigit { line: usize, ch: char },
    /// A grid row whose length differs from the first row.
    RaggedGrid {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// The companion grid has no cells.
    EmptyGrid,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidLine { line, text } => {
                write!(f, "line {line}: invalid die line {text:?}")
            }
            ParseError::InvalidDie { line, source } => write!(f, "line {line}: {source}"),
            ParseError::MissingSection { expected } => {
                write!(f, "missing {expected} block after a blank line")
            }
            ParseError::InvalidDigit { line, ch } => {
                write!(f, "line {line}: expected a digit, found {ch:?}")
            }
            ParseError::RaggedGrid {
                line,
                expected,
                found,
            } => write!(
                f,
                "line {line}: grid row has {found} cells, expected {expected}"
            ),
            ParseError::EmptyGrid => write!(f, "grid block is empty"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::InvalidDie { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Parse a block consisting only of die lines.
pub fn parse_dice(text: &str) -> Result<Vec<DieConfig>, ParseError> {
    numbered_lines(text)
        .map(|(line, raw)| parse_die_line(line, raw))
        .collect()
}

/// Parse dice followed by a digit track.
pub fn parse_race(text: &str) -> Result<(Vec<DieConfig>, Vec<i64>), ParseError> {
    let (head, tail) = split_sections(text, "track")?;
    let dice = dice_from(&head)?;
    let mut track = Vec::new();
    for (line, raw) in tail {
        track.extend(digits(line, raw)?);
    }
    Ok((dice, track))
}

/// Parse dice followed by a rectangular digit grid.
pub fn parse_grid(text: &str) -> Result<(Vec<DieConfig>, Grid), ParseError> {
    let (head, tail) = split_sections(text, "grid")?;
    let dice = dice_from(&head)?;
    let mut rows: Vec<Vec<i64>> = Vec::with_capacity(tail.len());
    for (line, raw) in tail {
        let row = digits(line, raw)?;
        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(ParseError::RaggedGrid {
                    line,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }
        rows.push(row);
    }
    let grid = Grid::from_rows(&rows).ok_or(ParseError::EmptyGrid)?;
    Ok((dice, grid))
}

type Numbered<'a> = Vec<(usize, &'a str)>;

fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.trim()
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim_end()))
}

/// Split at the first blank line into (die lines, companion lines).
fn split_sections<'a>(
    text: &'a str,
    expected: &'static str,
) -> Result<(Numbered<'a>, Numbered<'a>), ParseError> {
    let mut lines = numbered_lines(text);
    let head: Numbered<'a> = lines.by_ref().take_while(|(_, l)| !l.is_empty()).collect();
    let tail: Numbered<'a> = lines.collect();
    if tail.is_empty() {
        return Err(ParseError::MissingSection { expected });
    }
    Ok((head, tail))
}

fn dice_from(lines: &[(usize, &str)]) -> Result<Vec<DieConfig>, ParseError> {
    lines
        .iter()
        .map(|&(line, raw)| parse_die_line(line, raw))
        .collect()
}

fn parse_die_line(line: usize, raw: &str) -> Result<DieConfig, ParseError> {
    let invalid = || ParseError::InvalidLine {
        line,
        text: raw.to_string(),
    };
    let caps = DIE_LINE.captures(raw).ok_or_else(invalid)?;
    let id: u64 = caps["id"].parse().map_err(|_| invalid())?;
    let seed: u32 = caps["seed"].parse().map_err(|_| invalid())?;
    let faces = caps["faces"]
        .split(',')
        .map(|v| v.parse::<i64>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>, _>>()?;
    DieConfig::new(id, faces, seed).map_err(|source| ParseError::InvalidDie { line, source })
}

fn digits(line: usize, raw: &str) -> Result<Vec<i64>, ParseError> {
    raw.chars()
        .map(|ch| {
            ch.to_digit(10)
                .map(i64::from)
                .ok_or(ParseError::InvalidDigit { line, ch })
        })
        .collect()
}
