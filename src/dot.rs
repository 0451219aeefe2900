use crate::graph::GraphModel;

/// Serialize the graph model as DOT source for the Graphviz backend.
pub fn write(model: &GraphModel) -> String {
    let mut out = String::new();
    out.push_str(&format!("digraph \"{}\" {{\n", escape(&model.title)));
    out.push_str(&format!("  bgcolor=\"{}\";\n", model.background.as_str()));

    for node in &model.nodes {
        let shape = if node.observed { "box" } else { "ellipse" };
        out.push_str(&format!("  \"{}\" [shape={shape}];\n", escape(&node.name)));
    }

    for edge in &model.edges {
        let s = &edge.style;
        out.push_str(&format!(
            "  \"{}\" -> \"{}\" [dir={}, arrowtail={}, arrowhead={}, color={}, style={}, penwidth={}];\n",
            escape(&edge.from),
            escape(&edge.to),
            s.direction.as_str(),
            s.arrowtail.as_str(),
            s.arrowhead.as_str(),
            s.color.as_str(),
            s.line.as_str(),
            s.penwidth,
        ));
    }

    out.push_str("}\n");
    out
}

fn escape(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Background, build};
    use crate::parser::parse_pag;
    use pretty_assertions::assert_eq;

    fn dot_for(input: &str, background: Background) -> String {
        let text = parse_pag(input).unwrap();
        write(&build(&text, background).unwrap())
    }

    #[test]
    fn write_minimal_directed_graph() {
        let output = dot_for("Title\nA;B\n1. A --> B\n", Background::OldLace);
        let expected = "\
digraph \"Title\" {
  bgcolor=\"OldLace\";
  \"A\" [shape=box];
  \"B\" [shape=box];
  \"A\" -> \"B\" [dir=forward, arrowtail=none, arrowhead=normal, color=black, style=solid, penwidth=1];
}
";
        assert_eq!(output, expected);
    }

    #[test]
    fn write_white_background() {
        let output = dot_for("T\nA\n", Background::White);
        assert!(output.contains("bgcolor=\"white\";"), "got: {output}");
    }

    #[test]
    fn write_latent_node_as_ellipse() {
        let output = dot_for("T\nA;(L)\n", Background::OldLace);
        assert!(output.contains("\"A\" [shape=box];"), "got: {output}");
        assert!(output.contains("\"L\" [shape=ellipse];"), "got: {output}");
    }

    #[test]
    fn write_tagged_edge_styles() {
        let output = dot_for("T\nA;B\n1. A --> B dd pl\n", Background::OldLace);
        assert!(
            output.contains("color=darkblue, style=dashed, penwidth=3"),
            "got: {output}"
        );
    }

    #[test]
    fn write_escapes_quotes_in_names() {
        let output = dot_for("He said \"hi\"\nA\n", Background::OldLace);
        assert!(output.contains("digraph \"He said \\\"hi\\\"\" {"), "got: {output}");
    }
}
