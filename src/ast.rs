#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub name: String,
    pub observed: bool,
}

/// The symbol at one endpoint of a PAG edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mark {
    None,
    Circle,
    Arrow,
}

impl Mark {
    /// Decode the tail-side character of a mark pair (`o->`, `<->`, ...).
    /// Anything outside `-` and `<` is an open (circle) mark.
    pub fn from_tail_char(c: char) -> Self {
        match c {
            '-' => Mark::None,
            '<' => Mark::Arrow,
            _ => Mark::Circle,
        }
    }

    /// Decode the head-side character of a mark pair.
    pub fn from_head_char(c: char) -> Self {
        match c {
            '-' => Mark::None,
            '>' => Mark::Arrow,
            _ => Mark::Circle,
        }
    }
}

/// Optional edge qualifier pair, e.g. `dd pl` for a definitely-directed,
/// possibly-latent edge.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeTag {
    pub origin: String,
    pub decoration: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawEdge {
    pub from: String,
    pub to: String,
    pub tail: Mark,
    pub head: Mark,
    pub tag: Option<EdgeTag>,
}

/// Parsed but unstyled PAG text: title line, declared nodes, edge list.
#[derive(Debug, Clone, PartialEq)]
pub struct PagText {
    pub title: String,
    pub nodes: Vec<Node>,
    pub edges: Vec<RawEdge>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_char_decoding() {
        assert_eq!(Mark::from_tail_char('-'), Mark::None);
        assert_eq!(Mark::from_tail_char('<'), Mark::Arrow);
        assert_eq!(Mark::from_tail_char('o'), Mark::Circle);
    }

    #[test]
    fn head_char_decoding() {
        assert_eq!(Mark::from_head_char('-'), Mark::None);
        assert_eq!(Mark::from_head_char('>'), Mark::Arrow);
        assert_eq!(Mark::from_head_char('o'), Mark::Circle);
    }

    #[test]
    fn unknown_chars_decode_as_circle() {
        assert_eq!(Mark::from_tail_char('>'), Mark::Circle);
        assert_eq!(Mark::from_head_char('<'), Mark::Circle);
        assert_eq!(Mark::from_head_char('x'), Mark::Circle);
    }
}
