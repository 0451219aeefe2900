use winnow::prelude::*;
use winnow::ascii::digit1;

use crate::ast::*;
use crate::error::Error;

/// Parse a Tetrad PAG text export: a title line, a `;`-delimited node
/// declaration line, then numbered edge lines. Anything else is ignored.
pub fn parse_pag(input: &str) -> Result<PagText, Error> {
    let mut lines = input.lines();
    let title = lines.next().unwrap_or("").trim().to_string();
    let header = lines
        .next()
        .ok_or_else(|| Error::MalformedHeader("missing node declaration line".to_string()))?;

    let mut nodes = Vec::new();
    for token in header.trim().split(';') {
        nodes.push(node_token(token)?);
    }

    let mut edges = Vec::new();
    for line in lines {
        if let Some(token) = edge_token(line) {
            edges.push(raw_edge(token)?);
        }
    }

    Ok(PagText { title, nodes, edges })
}

/// A token wrapped in parentheses declares a latent node named by the
/// inner text; any other token declares an observed node.
fn node_token(token: &str) -> Result<Node, Error> {
    match latent_inner(token) {
        Some("") => Err(Error::MalformedHeader(format!(
            "latent node token `{token}` has no name"
        ))),
        Some(inner) => Ok(Node {
            name: inner.to_string(),
            observed: false,
        }),
        None => Ok(Node {
            name: token.to_string(),
            observed: true,
        }),
    }
}

fn latent_inner(token: &str) -> Option<&str> {
    token.strip_prefix('(')?.strip_suffix(')')
}

/// Edge lines start with a `<digits>.` enumerator; strip it and trim the
/// remainder. Returns None for every other kind of line.
fn edge_token(line: &str) -> Option<&str> {
    let mut rest = line;
    enumerator(&mut rest).ok()?;
    Some(rest.trim())
}

fn enumerator(input: &mut &str) -> winnow::Result<()> {
    (digit1, '.').void().parse_next(input)
}

fn raw_edge(token: &str) -> Result<RawEdge, Error> {
    let malformed = |reason: &str| Error::MalformedEdgeLine {
        line: token.to_string(),
        reason: reason.to_string(),
    };

    let fields: Vec<&str> = token.split(' ').collect();
    if fields.len() < 3 {
        return Err(malformed("expected `<source> <marks> <target>`"));
    }

    let marks: Vec<char> = fields[1].chars().collect();
    if marks.len() != 3 {
        return Err(malformed("mark pair must be exactly 3 characters"));
    }

    let tag = match (fields.get(3), fields.get(4)) {
        (Some(origin), Some(decoration)) => Some(EdgeTag {
            origin: (*origin).to_string(),
            decoration: (*decoration).to_string(),
        }),
        (Some(_), None) => {
            return Err(malformed("edge tag must be an `<origin> <decoration>` pair"));
        }
        _ => None,
    };

    Ok(RawEdge {
        from: fields[0].to_string(),
        to: fields[2].to_string(),
        tail: Mark::from_tail_char(marks[0]),
        head: Mark::from_head_char(marks[2]),
        tag,
    })
}
