//! Text renderings of a run for the terminal: the shape of the tree and a
//! table of every symbol with its frequency and code.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::codes::CodeTable;
use crate::encoder::to_bit_string;
use crate::frequency::FrequencyTable;
use crate::tree::HuffmanNode;

fn draw<S: Display>(node: &HuffmanNode<S>, indent: &str, is_left: bool) -> String {
    let (branch, pad) = if is_left { ("├─", "│  ") } else { ("└─", "   ") };
    match node {
        HuffmanNode::Leaf { symbol, weight } => {
            format!("{}{}{} ({})\n", indent, branch, symbol, weight)
        }
        HuffmanNode::Internal {
            weight,
            left,
            right,
        } => {
            let indent_below = format!("{}{}", indent, pad);
            format!(
                "{}{}({})\n{}{}",
                indent,
                branch,
                weight,
                draw(left, &indent_below, true),
                draw(right, &indent_below, false)
            )
        }
    }
}

/// Draws the tree one node per line, left child first.
///
/// ```
/// use huffman_coding::{HuffmanNode, report::render_tree};
///
/// let root = HuffmanNode::merge(HuffmanNode::leaf('B', 1), HuffmanNode::leaf('A', 3));
/// assert_eq!(render_tree(&root), "└─(4)\n   ├─B (1)\n   └─A (3)\n");
/// ```
pub fn render_tree<S: Display>(root: &HuffmanNode<S>) -> String {
    draw(root, "", false)
}

/// Lists the symbols by increasing frequency, with their code.
pub fn render_table<S>(frequencies: &FrequencyTable<S>, codes: &CodeTable<S>) -> String
where
    S: Clone + Eq + Hash + Debug + Display,
{
    let rows = frequencies
        .ascending()
        .into_iter()
        .map(|(symbol, count)| {
            let code = codes.get(symbol).map(|code| to_bit_string(code)).unwrap_or_default();
            format!("{}\t{}\t{}\n", symbol, count, code)
        })
        .collect::<String>();
    format!("Symbol\tFrequency\tCode\n{}", rows)
}
