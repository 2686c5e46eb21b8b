use std::fmt::Debug;
use std::hash::Hash;

use bitvec::prelude::*;
use log::debug;

use crate::codes::{CodeTable, Encoded};
use crate::error::HuffmanError;
use crate::frequency::FrequencyTable;

/// Concatenates the codes of the symbols of `input`, in order.
///
/// # Examples
///
/// ```
/// use bitvec::prelude::*;
/// use huffman_coding::*;
///
/// let mut codes = CodeTable::new();
/// codes.insert('a', bitvec![0]);
/// codes.insert('b', bitvec![1]);
/// assert_eq!(compress("baba".chars(), &codes), Ok(bitvec![1, 0, 1, 0]));
/// ```
///
/// # Errors
///
/// Returns [`HuffmanError::MissingCode`] with the first symbol of `input` the
/// table has no code for.
///
/// ```
/// use bitvec::prelude::*;
/// use huffman_coding::*;
///
/// let mut codes = CodeTable::new();
/// codes.insert('a', bitvec![0]);
/// assert_eq!(
///     compress("ab".chars(), &codes),
///     Err(HuffmanError::MissingCode("'b'".to_string()))
/// );
/// ```
pub fn compress<S, I>(input: I, codes: &CodeTable<S>) -> Result<Encoded, HuffmanError>
where
    S: Eq + Hash + Debug,
    I: IntoIterator<Item = S>,
{
    let mut encoded = Encoded::new();
    for symbol in input {
        let code = codes
            .get(&symbol)
            .ok_or_else(|| HuffmanError::MissingCode(format!("{:?}", symbol)))?;
        encoded.extend(code);
    }
    debug!("compressed into {} bits", encoded.len());
    Ok(encoded)
}

/// The Huffman cost of a code table: the sum, over every symbol, of its
/// frequency times the length of its code. When both tables come from the
/// same input this is the length of the compressed input.
///
/// # Errors
///
/// Returns [`HuffmanError::MissingCode`] for the first symbol of `frequencies`
/// that has no code, as [`compress`] would, and
/// [`HuffmanError::WeightOverflow`] if the cost does not fit in a `usize`.
pub fn weighted_length<S>(
    frequencies: &FrequencyTable<S>,
    codes: &CodeTable<S>,
) -> Result<usize, HuffmanError>
where
    S: Clone + Eq + Hash + Debug,
{
    frequencies.iter().try_fold(0usize, |cost, (symbol, count)| {
        let code = codes
            .get(symbol)
            .ok_or_else(|| HuffmanError::MissingCode(format!("{:?}", symbol)))?;
        count
            .checked_mul(code.len())
            .and_then(|bits| cost.checked_add(bits))
            .ok_or_else(|| HuffmanError::WeightOverflow(format!("{:?}", symbol)))
    })
}

/// Renders bits as a string of `'0'` and `'1'`.
///
/// ```
/// use bitvec::prelude::*;
///
/// assert_eq!(huffman_coding::to_bit_string(bits![0, 1, 1]), "011");
/// ```
pub fn to_bit_string<O: BitOrder, T: BitStore>(bits: &BitSlice<O, T>) -> String {
    bits.iter().map(|bit| if *bit { '1' } else { '0' }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CodeTable<char> {
        let mut codes = CodeTable::new();
        codes.insert('A', bitvec![1, 1]);
        codes.insert('B', bitvec![1, 0]);
        codes.insert('C', bitvec![0, 0]);
        codes.insert('D', bitvec![0, 1, 1]);
        codes.insert('E', bitvec![0, 1, 0]);
        codes
    }

    #[test]
    fn compress() {
        assert_eq!(crate::compress("".chars(), &table()), Ok(bitvec![]));
        assert_eq!(
            crate::compress("ADE".chars(), &table()),
            Ok(bitvec![1, 1, 0, 1, 1, 0, 1, 0])
        );
    }

    #[test]
    fn missing_code() {
        assert_eq!(
            crate::compress("ABX".chars(), &table()),
            Err(HuffmanError::MissingCode("'X'".to_string()))
        );
    }

    #[test]
    fn empty_code() {
        let mut codes = CodeTable::new();
        codes.insert('A', bitvec![]);
        assert_eq!(crate::compress("AAAA".chars(), &codes), Ok(bitvec![]));
    }

    #[test]
    fn weighted_length() {
        let input = "ADDAABBCCBAAABBCCCBBBBCDAADDEEAA";
        let freqs = FrequencyTable::from_symbols(input.chars());
        assert_eq!(crate::weighted_length(&freqs, &table()), Ok(71));
        assert_eq!(crate::compress(input.chars(), &table()).unwrap().len(), 71);
    }

    #[test]
    fn weighted_length_missing_code() {
        let freqs = FrequencyTable::from_symbols("ABX".chars());
        assert_eq!(
            crate::weighted_length(&freqs, &table()),
            Err(HuffmanError::MissingCode("'X'".to_string()))
        );
    }

    #[test]
    fn weighted_length_overflow() {
        let mut freqs = FrequencyTable::new();
        freqs.insert('D', usize::MAX / 2).unwrap();
        assert_eq!(
            crate::weighted_length(&freqs, &table()),
            Err(HuffmanError::WeightOverflow("'D'".to_string()))
        );
    }

    #[test]
    fn to_bit_string() {
        assert_eq!(crate::to_bit_string(bits![]), "");
        assert_eq!(crate::to_bit_string(&bitvec![1, 0, 0, 1]), "1001");
    }
}
