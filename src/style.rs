use crate::ast::{Mark, RawEdge};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Direction {
    Forward,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArrowShape {
    Normal,
    Odot,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Black,
    DarkBlue,
    DarkGreen,
    DarkOrange,
    DarkRed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Line {
    Solid,
    Dashed,
}

/// The visual encoding of one classified edge, in Graphviz vocabulary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeStyle {
    pub direction: Direction,
    pub arrowhead: ArrowShape,
    pub arrowtail: ArrowShape,
    pub color: Color,
    pub line: Line,
    pub penwidth: u32,
}

/// Map an edge's endpoint marks and optional tag pair to its drawing style.
///
/// Color picks the PAG edge class, checked in this order: bidirected
/// (`<->`), partially oriented (`o->`), directed (`-->`), everything else
/// (undirected or fully uncertain). A plain directed edge is only colored
/// darkblue when its ancestral-graph properties are spelled out in a tag;
/// untagged `-->` stays black so DAG exports read as ordinary DAGs.
pub fn classify(edge: &RawEdge) -> EdgeStyle {
    let (color, direction) = match (edge.tail, edge.head) {
        (Mark::Arrow, Mark::Arrow) => (Color::DarkGreen, Direction::Both),
        (Mark::Circle, Mark::Arrow) => (Color::DarkOrange, Direction::Both),
        (Mark::None, Mark::Arrow) if edge.tag.is_some() => (Color::DarkBlue, Direction::Forward),
        (Mark::None, Mark::Arrow) => (Color::Black, Direction::Forward),
        _ => (Color::DarkRed, Direction::Both),
    };

    let penwidth = match &edge.tag {
        Some(tag) if tag.origin == "dd" => 3,
        _ => 1,
    };
    let line = match &edge.tag {
        Some(tag) if tag.decoration == "pl" => Line::Dashed,
        _ => Line::Solid,
    };

    EdgeStyle {
        direction,
        arrowhead: arrow_shape(edge.head),
        arrowtail: arrow_shape(edge.tail),
        color,
        line,
        penwidth,
    }
}

fn arrow_shape(mark: Mark) -> ArrowShape {
    match mark {
        Mark::Arrow => ArrowShape::Normal,
        Mark::Circle => ArrowShape::Odot,
        Mark::None => ArrowShape::None,
    }
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Both => "both",
        }
    }
}

impl ArrowShape {
    pub fn as_str(self) -> &'static str {
        match self {
            ArrowShape::Normal => "normal",
            ArrowShape::Odot => "odot",
            ArrowShape::None => "none",
        }
    }
}

impl Color {
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::DarkBlue => "darkblue",
            Color::DarkGreen => "darkgreen",
            Color::DarkOrange => "darkorange",
            Color::DarkRed => "darkred",
        }
    }
}

impl Line {
    pub fn as_str(self) -> &'static str {
        match self {
            Line::Solid => "solid",
            Line::Dashed => "dashed",
        }
    }
}
