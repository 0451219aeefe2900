use std::collections::HashSet;

use crate::ast::{Node, PagText};
use crate::error::Error;
use crate::style::{self, EdgeStyle};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Background {
    White,
    #[default]
    OldLace,
}

impl Background {
    pub fn as_str(self) -> &'static str {
        match self {
            Background::White => "white",
            Background::OldLace => "OldLace",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyledEdge {
    pub from: String,
    pub to: String,
    pub style: EdgeStyle,
}

/// The finished directed-graph model handed to the rendering backend.
/// Every edge endpoint resolves to exactly one entry in `nodes`; node and
/// edge order follow the input text.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphModel {
    pub title: String,
    pub background: Background,
    pub nodes: Vec<Node>,
    pub edges: Vec<StyledEdge>,
}

/// Assemble the graph model from parsed text. Declared nodes are kept in
/// declaration order whether or not an edge touches them; an endpoint with
/// no declaration to inherit a shape from is an error.
pub fn build(text: &PagText, background: Background) -> Result<GraphModel, Error> {
    let mut nodes: Vec<Node> = Vec::new();
    let mut known: HashSet<String> = HashSet::new();
    for node in &text.nodes {
        if known.insert(node.name.clone()) {
            nodes.push(node.clone());
        }
    }

    let mut edges = Vec::with_capacity(text.edges.len());
    for raw in &text.edges {
        resolve_endpoint(&mut nodes, &mut known, &text.nodes, &raw.from)?;
        resolve_endpoint(&mut nodes, &mut known, &text.nodes, &raw.to)?;
        edges.push(StyledEdge {
            from: raw.from.clone(),
            to: raw.to.clone(),
            style: style::classify(raw),
        });
    }

    Ok(GraphModel {
        title: text.title.clone(),
        background,
        nodes,
        edges,
    })
}

/// An endpoint not yet in the model inherits its observed/latent flag from
/// the declared node list and is appended after the declared nodes, once.
fn resolve_endpoint(
    nodes: &mut Vec<Node>,
    known: &mut HashSet<String>,
    declared: &[Node],
    name: &str,
) -> Result<(), Error> {
    if known.contains(name) {
        return Ok(());
    }
    let node = declared
        .iter()
        .find(|n| n.name == name)
        .ok_or_else(|| Error::UnresolvedNode(name.to_string()))?;
    known.insert(name.to_string());
    nodes.push(node.clone());
    Ok(())
}
