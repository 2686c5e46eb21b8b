use thiserror::Error;

/// Failures of the tree builder, the priority queue and the encoder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    #[error("cannot build a Huffman tree from an empty alphabet")]
    EmptyAlphabet,
    /// A dequeue on an empty queue. The tree builder never lets this happen,
    /// so seeing it means a broken caller contract.
    #[error("dequeue on an empty priority queue")]
    EmptyQueue,
    /// Carries the `Debug` rendering of the symbol that had no code.
    #[error("no code for symbol {0}")]
    MissingCode(String),
    #[error("symbol {0} has a zero frequency")]
    ZeroFrequency(String),
    /// The counts of a frequency table would add up past `usize::MAX`.
    #[error("adding symbol {0} overflows the total frequency")]
    WeightOverflow(String),
}
