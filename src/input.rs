//! Reader for the whitespace separated record format: a count `N` followed by `N` pairs of
//! `value priority`.

use crate::error::{Error, Result};
use log::{debug, trace};
use std::io::Read;
use std::num::ParseIntError;
use std::str::FromStr;

/// A value to insert into both trees together with its treap priority.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Record {
    pub value: i64,
    pub priority: u64,
}

fn parse<U>(token: &str) -> Result<U>
where
    U: FromStr<Err = ParseIntError>,
{
    token.parse().map_err(|error| Error::ParseError {
        token: token.to_string(),
        error,
    })
}

/// Reads all records from `reader`. Tokens may be split across lines in any way, and anything
/// after the last of the `N` pairs is ignored. A count of zero or less reads no records.
///
/// # Examples
///
/// ```
/// use tree_breadth::input::{self, Record};
///
/// let records = input::read_records("2\n5 11\n18 8\n".as_bytes()).unwrap();
/// assert_eq!(records, vec![
///     Record { value: 5, priority: 11 },
///     Record { value: 18, priority: 8 },
/// ]);
/// ```
pub fn read_records<R>(mut reader: R) -> Result<Vec<Record>>
where
    R: Read,
{
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    let mut tokens = buffer.split_whitespace();

    let count: i64 = match tokens.next() {
        Some(token) => parse(token)?,
        None => return Err(Error::MissingCount),
    };
    let count = if count > 0 { count as usize } else { 0 };
    trace!("expecting {} records", count);

    let mut records = Vec::new();
    for read in 0..count {
        match (tokens.next(), tokens.next()) {
            (Some(value), Some(priority)) => records.push(Record {
                value: parse(value)?,
                priority: parse(priority)?,
            }),
            _ => {
                return Err(Error::UnexpectedEof {
                    expected: count,
                    read,
                })
            },
        }
    }

    debug!("read {} records", records.len());
    Ok(records)
}
