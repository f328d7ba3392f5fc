//! DIMACS CNF parser for the cdcl-core SAT engine.
//!
//! Unlike a strict DIMACS reader this follows the lenient scanning rules of the original
//! reference implementation: everything up to the `p` line is skipped, and any token that
//! doesn't parse as a signed integer drains the rest of its line rather than failing the
//! whole parse. This tolerates the weighted-CNF dialect (extra trailing data after `0`,
//! weight lines mixed in) without trying to make sense of the weights themselves.

use std::io::{self, BufRead};

use anyhow::Error;
use thiserror::Error;

use cdcl_formula::{CnfFormula, Var};

/// Possible errors while parsing a DIMACS CNF formula.
#[derive(Debug, Error)]
pub enum ParserError {
    #[error("missing DIMACS CNF header line ('p cnf <vars> <clauses>')")]
    MissingHeader,
    #[error("line {}: invalid header syntax: {}", line, header)]
    InvalidHeader { line: usize, header: String },
    #[error("line {}: variable index {} exceeds the supported maximum", line, index)]
    LiteralTooLarge { line: usize, index: usize },
    #[error("unexpected end of input while reading clause {} of {}", clause, header_clause_count)]
    UnterminatedClause {
        clause: usize,
        header_clause_count: usize,
    },
}

/// Variable and clause count present in a DIMACS CNF header.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DimacsHeader {
    pub var_count: usize,
    pub clause_count: usize,
}

/// Parses a full DIMACS CNF input into a [`CnfFormula`].
///
/// Weights, if present, are tolerated but discarded: per the calling convention this parser
/// serves, every literal has unit weight regardless of what the input says.
pub fn parse_dimacs(input: impl io::Read) -> Result<CnfFormula, Error> {
    let mut lines = io::BufReader::new(input).lines();
    let mut line_number = 0usize;

    let header = loop {
        let line = match lines.next() {
            Some(line) => line?,
            None => return Err(ParserError::MissingHeader.into()),
        };
        line_number += 1;
        let trimmed = line.trim_start();
        if trimmed.starts_with('p') {
            break parse_header_line(trimmed, line_number)?;
        }
        // any other line (comments, blank lines, stray data) is skipped
    };

    let mut formula = CnfFormula::new();
    formula.set_var_count(header.var_count);

    let mut clause_count = 0;
    let mut current_clause = Vec::new();

    'lines: for line in lines {
        let line = line?;
        line_number += 1;

        for tok in line.split_whitespace() {
            let index: i64 = match tok.parse() {
                Ok(index) => index,
                // noise (a weight column, a stray comment marker, ...): drain the rest of
                // this line and resume scanning on the next one
                Err(_) => continue 'lines,
            };

            if index == 0 {
                if current_clause.is_empty() {
                    // a clause may not begin with a bare 0; treat it as noise
                    continue;
                }
                formula.add_clause(current_clause.drain(..));
                clause_count += 1;
                if clause_count == header.clause_count {
                    return Ok(formula);
                }
                continue;
            }

            let magnitude = index.unsigned_abs() as usize;
            if magnitude > Var::max_count() {
                return Err(ParserError::LiteralTooLarge {
                    line: line_number,
                    index: magnitude,
                }
                .into());
            }
            current_clause.push(Var::from_dimacs(magnitude as isize).lit(index > 0));
        }
    }

    Err(ParserError::UnterminatedClause {
        clause: clause_count,
        header_clause_count: header.clause_count,
    }
    .into())
}

fn parse_header_line(line: &str, line_number: usize) -> Result<DimacsHeader, ParserError> {
    let mut fields = line.split_whitespace();

    if fields.next() != Some("p") {
        return Err(ParserError::InvalidHeader {
            line: line_number,
            header: line.to_owned(),
        });
    }

    if fields.next() != Some("cnf") {
        return Err(ParserError::InvalidHeader {
            line: line_number,
            header: line.to_owned(),
        });
    }

    let var_count = fields
        .next()
        .and_then(|value| value.parse().ok())
        .ok_or_else(|| ParserError::InvalidHeader {
            line: line_number,
            header: line.to_owned(),
        })?;

    let clause_count = fields
        .next()
        .and_then(|value| value.parse().ok())
        .ok_or_else(|| ParserError::InvalidHeader {
            line: line_number,
            header: line.to_owned(),
        })?;

    if var_count > Var::max_count() {
        return Err(ParserError::LiteralTooLarge {
            line: line_number,
            index: var_count,
        });
    }

    Ok(DimacsHeader {
        var_count,
        clause_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdcl_formula::cnf_formula;

    #[test]
    fn simple_formula() {
        let parsed = parse_dimacs(b"p cnf 3 3\n1 0\n-1 2 0\n-2 3 0\n" as &[_]).unwrap();
        let expected = cnf_formula![
            1;
            -1, 2;
            -2, 3;
        ];
        assert_eq!(parsed, expected);
    }

    #[test]
    fn skips_comments_and_preamble() {
        let parsed = parse_dimacs(
            b"c a comment\nc more comments\np cnf 2 1\nc mid-file comment\n1 -2 0\n" as &[_],
        )
        .unwrap();
        let expected = cnf_formula![1, -2;];
        assert_eq!(parsed, expected);
    }

    #[test]
    fn tolerates_weighted_noise() {
        // weighted DIMACS sometimes carries a trailing weight token or a `w` line; both are
        // non-numeric-or-extra tokens that should simply be skipped.
        let parsed = parse_dimacs(b"p cnf 2 1\nw 1 10\nw 2 20\n1 -2 0\n" as &[_]).unwrap();
        let expected = cnf_formula![1, -2;];
        assert_eq!(parsed, expected);
    }

    #[test]
    fn missing_header_is_an_error() {
        assert!(parse_dimacs(b"1 2 0\n" as &[_]).is_err());
    }

    #[test]
    fn unterminated_clause_is_an_error() {
        assert!(parse_dimacs(b"p cnf 3 1\n1 2 3" as &[_]).is_err());
    }
}
