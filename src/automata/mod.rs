//! Graphviz renderings of the recognizers used by the scanner.
//!
//! The number and operator diagrams are derived from the scanner's own
//! transition function and operator table, so they cannot drift from the
//! behavior they depict.

pub mod automata;
