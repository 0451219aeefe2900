pub mod ast;
pub mod backend;
pub mod dot;
pub mod error;
pub mod graph;
pub mod parser;
pub mod style;

pub use error::Error;
pub use graph::{Background, GraphModel};

/// Parse PAG text, classify its edges, and assemble the graph model.
pub fn build_graph(input: &str, background: Background) -> Result<GraphModel, Error> {
    let text = parser::parse_pag(input)?;
    graph::build(&text, background)
}

/// Convert PAG text straight to DOT source.
pub fn to_dot(input: &str, background: Background) -> Result<String, Error> {
    Ok(dot::write(&build_graph(input, background)?))
}
