use std::{collections::BTreeSet, fs, path::Path};

use tracing::info;

use crate::{
    errors::errors::Error,
    lexer::{
        number::{Action, NumberState},
        operators::{match_operator, COMPOUND_OPERATORS, PUNCTUATION, REJECTED_SINGLES, SINGLE_OPERATORS},
        tokens::TokenCategory,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle,
    DoubleCircle,
}

impl Shape {
    fn as_str(self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::DoubleCircle => "doublecircle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub shape: Shape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub label: String,
}

/// A directed graph rendered left to right, one node per automaton state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digraph {
    pub name: String,
    pub comment: String,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Digraph {
    pub fn new(name: &str, comment: &str) -> Self {
        Digraph {
            name: name.to_string(),
            comment: comment.to_string(),
            nodes: vec![],
            edges: vec![],
        }
    }

    pub fn node(&mut self, id: &str, label: &str, shape: Shape) -> &mut Self {
        self.nodes.push(Node {
            id: id.to_string(),
            label: label.to_string(),
            shape,
        });
        self
    }

    pub fn edge(&mut self, from: &str, to: &str, label: &str) -> &mut Self {
        self.edges.push(Edge {
            from: from.to_string(),
            to: to.to_string(),
            label: label.to_string(),
        });
        self
    }

    pub fn accepting(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|node| node.shape == Shape::DoubleCircle)
    }

    pub fn to_dot(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("// {}\n", self.comment));
        out.push_str(&format!("digraph {} {{\n", self.name));
        out.push_str("    rankdir=LR;\n");
        out.push_str("    node [shape=circle];\n");

        for node in &self.nodes {
            out.push_str(&format!(
                "    \"{}\" [label=\"{}\" shape={}];\n",
                escape(&node.id),
                escape(&node.label),
                node.shape.as_str()
            ));
        }

        for edge in &self.edges {
            out.push_str(&format!(
                "    \"{}\" -> \"{}\" [label=\"{}\"];\n",
                escape(&edge.from),
                escape(&edge.to),
                escape(&edge.label)
            ));
        }

        out.push_str("}\n");
        out
    }
}

fn escape(text: &str) -> String {
    text.replace('"', "\\\"")
}

pub fn identifier_dfa() -> Digraph {
    let mut dot = Digraph::new("identifier_dfa", "Identifier DFA");
    dot.node("q0", "q0\\n(start)", Shape::Circle)
        .node("q1", "q1\\n(letter read)", Shape::Circle)
        .node("q2", "q2\\n(underscore seen)", Shape::DoubleCircle)
        .edge("q0", "q1", "letter")
        .edge("q0", "q2", "_")
        .edge("q1", "q1", "letter, digit")
        .edge("q1", "q2", "_")
        .edge("q2", "q2", "letter, digit, _");
    dot
}

/// Number DFA built by stepping the executable transition function with one
/// representative byte per input class.
pub fn number_dfa() -> Digraph {
    const CLASSES: [(u8, &str); 4] = [(b'0', "digit"), (b'.', "."), (b'e', "E, e"), (b'+', "+, -")];

    let mut dot = Digraph::new("number_dfa", "Number DFA");

    for (index, state) in NumberState::ALL.into_iter().enumerate() {
        let shape = if state.is_accepting() {
            Shape::DoubleCircle
        } else {
            Shape::Circle
        };
        dot.node(&state_id(index), &format!("{}\\n({})", state_id(index), state.name()), shape);
    }

    for (index, state) in NumberState::ALL.into_iter().enumerate() {
        for (byte, label) in CLASSES {
            if let Action::Consume(next) = state.transition(byte) {
                dot.edge(&state_id(index), &state_id(state_index(next)), label);
            }
        }
    }

    dot
}

fn state_id(index: usize) -> String {
    format!("q{}", index)
}

fn state_index(state: NumberState) -> usize {
    NumberState::ALL
        .iter()
        .position(|candidate| *candidate == state)
        .unwrap_or_default()
}

/// Operator recognizer drawn as a trie over every operator spelling and its
/// prefixes. A node is accepting when the scanner turns exactly that text
/// into an operator token.
pub fn operator_nfa() -> Digraph {
    let mut spellings: BTreeSet<String> = BTreeSet::new();

    for op in COMPOUND_OPERATORS {
        for end in 1..=op.len() {
            spellings.insert(op[..end].to_string());
        }
    }
    for byte in SINGLE_OPERATORS.iter().chain(REJECTED_SINGLES.iter()) {
        spellings.insert((*byte as char).to_string());
    }

    let mut dot = Digraph::new("operator_nfa", "Operator NFA");
    dot.node("q0", "q0\\n(start)", Shape::Circle);

    for spelling in &spellings {
        let matched = match_operator(spelling.as_bytes());
        let is_operator = matched.outcome == Ok(TokenCategory::Operator);
        let shape = if matched.len == spelling.len() && is_operator {
            Shape::DoubleCircle
        } else {
            Shape::Circle
        };
        dot.node(&operator_id(spelling), spelling, shape);
    }

    for spelling in &spellings {
        let (prefix, last) = spelling.split_at(spelling.len() - 1);
        let from = if prefix.is_empty() {
            String::from("q0")
        } else {
            operator_id(prefix)
        };
        dot.edge(&from, &operator_id(spelling), last);
    }

    dot
}

fn operator_id(spelling: &str) -> String {
    format!("op_{}", spelling)
}

pub fn punctuation_dfa() -> Digraph {
    let label = PUNCTUATION
        .iter()
        .map(|byte| (*byte as char).to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let mut dot = Digraph::new("punctuation_dfa", "Punctuation DFA");
    dot.node("q0", "q0\\n(start)", Shape::Circle)
        .node("q1", "PUNCT", Shape::DoubleCircle)
        .edge("q0", "q1", &label);
    dot
}

pub fn keyword_dfa() -> Digraph {
    let mut dot = Digraph::new("keyword_dfa", "Keyword DFA");
    dot.node("q0", "q0\\n(start)", Shape::Circle)
        .node("q1", "q1\\n(letter)", Shape::Circle)
        .node("q2", "KEYWORD", Shape::DoubleCircle)
        .node("q3", "NOT_KEYWORD", Shape::Circle)
        .edge("q0", "q1", "letter")
        .edge("q1", "q1", "letter, digit")
        .edge("q1", "q2", "end of word\\n(if in keyword list)")
        .edge("q1", "q3", "end of word\\n(if not in keyword list)");
    dot
}

pub fn complete_lexer_dfa() -> Digraph {
    let mut dot = Digraph::new("complete_lexer_dfa", "Complete Lexical Analyzer DFA");
    dot.node("START", "START", Shape::Circle)
        .node("WHITESPACE", "WHITESPACE", Shape::Circle)
        .node("COMMENT", "COMMENT", Shape::Circle)
        .node("IDENTIFIER", "IDENTIFIER", Shape::DoubleCircle)
        .node("NUMBER", "NUMBER", Shape::DoubleCircle)
        .node("OPERATOR", "OPERATOR", Shape::DoubleCircle)
        .node("PUNCTUATION", "PUNCTUATION", Shape::DoubleCircle)
        .node("KEYWORD", "KEYWORD", Shape::DoubleCircle)
        .node("ERROR", "ERROR", Shape::DoubleCircle)
        .edge("START", "WHITESPACE", "space, tab, newline")
        .edge("START", "COMMENT", "//, /*")
        .edge("START", "IDENTIFIER", "letter, _")
        .edge("START", "NUMBER", "digit, +digit, -digit")
        .edge("START", "OPERATOR", "operator chars")
        .edge("START", "PUNCTUATION", "punctuation chars")
        .edge("START", "ERROR", "invalid char")
        .edge("WHITESPACE", "START", "end whitespace")
        .edge("COMMENT", "START", "end comment")
        .edge("IDENTIFIER", "KEYWORD", "if keyword");
    dot
}

pub fn all() -> Vec<Digraph> {
    vec![
        identifier_dfa(),
        number_dfa(),
        operator_nfa(),
        punctuation_dfa(),
        keyword_dfa(),
        complete_lexer_dfa(),
    ]
}

/// Writes every diagram as `<name>.dot` into `dir`, creating it if needed.
pub fn write_all(dir: &Path) -> Result<Vec<String>, Error> {
    fs::create_dir_all(dir).map_err(|source| Error::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = vec![];

    for diagram in all() {
        let path = dir.join(format!("{}.dot", diagram.name));
        fs::write(&path, diagram.to_dot()).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "generated diagram");
        written.push(path.display().to_string());
    }

    Ok(written)
}
