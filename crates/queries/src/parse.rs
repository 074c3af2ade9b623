//! Reader for the canonical token grammar.
//!
//! ```text
//! token     := ":c:w" range | ":m" (":w" range)? (":h" range)?
//! range     := "[" bound ("," " "* bound)? "]"
//! bound     := number | "Infinity" | ":b[" name "]"
//! ```
//!
//! Breakpoint bounds are only accepted in media queries. Width and height may
//! appear in either order in a media query, but each at most once.

use crate::bound::{Bound, QueryRange};
use crate::token::{Condition, ContainerQuery, MediaQuery};

pub(crate) fn parse_condition(text: &str) -> Condition {
    if let Some(body) = text.strip_prefix(":c:w") {
        return parse_container(body).map_or(Condition::Unrecognized, Condition::Container);
    }
    if let Some(body) = text.strip_prefix(":m") {
        return parse_media(body).map_or(Condition::Unrecognized, Condition::Media);
    }
    Condition::Unrecognized
}

fn parse_container(body: &str) -> Option<ContainerQuery> {
    let (width, rest) = parse_range(body, false)?;
    rest.is_empty().then(|| ContainerQuery::new(width))
}

fn parse_media(body: &str) -> Option<MediaQuery> {
    let mut width = None;
    let mut height = None;
    let mut rest = body;
    while !rest.is_empty() {
        let (slot, after_dimension) = if let Some(after) = rest.strip_prefix(":w") {
            (&mut width, after)
        } else if let Some(after) = rest.strip_prefix(":h") {
            (&mut height, after)
        } else {
            return None;
        };
        if slot.is_some() {
            return None;
        }
        let (range, tail) = parse_range(after_dimension, true)?;
        *slot = Some(range);
        rest = tail;
    }
    MediaQuery::new(width, height)
}

fn parse_range(text: &str, allow_breakpoints: bool) -> Option<(QueryRange, &str)> {
    let inner = text.strip_prefix('[')?;
    let (from, after_from) = parse_bound(inner, allow_breakpoints)?;
    let (to, after_to) = match after_from.strip_prefix(',') {
        Some(after_comma) => parse_bound(after_comma.trim_start_matches(' '), allow_breakpoints)?,
        None => (Bound::UNBOUNDED, after_from),
    };
    let tail = after_to.strip_prefix(']')?;
    Some((QueryRange::new(from, to), tail))
}

fn parse_bound(text: &str, allow_breakpoints: bool) -> Option<(Bound, &str)> {
    if let Some(after) = text.strip_prefix(":b[") {
        if !allow_breakpoints {
            return None;
        }
        let (name, tail) = after.split_once(']')?;
        let valid_name = !name.is_empty()
            && name
                .chars()
                .all(|character| character.is_ascii_alphanumeric() || character == '_');
        return valid_name.then(|| (Bound::Breakpoint(name.to_owned()), tail));
    }
    let end = text.find([',', ']']).unwrap_or(text.len());
    let (literal, tail) = text.split_at(end);
    parse_number(literal).map(|value| (Bound::Value(value), tail))
}

/// Plain decimal numbers and `Infinity`. Rust's float syntax (`inf`, `NaN`,
/// exponents) is not part of the grammar.
fn parse_number(literal: &str) -> Option<f64> {
    let digits = literal.strip_prefix('-').unwrap_or(literal);
    if digits == "Infinity" {
        return Some(if digits.len() == literal.len() {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        });
    }
    let well_formed = !digits.is_empty()
        && digits
            .chars()
            .all(|character| character.is_ascii_digit() || character == '.');
    if !well_formed {
        return None;
    }
    literal.parse().ok()
}
