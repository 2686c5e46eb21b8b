//! Command line options of the `huffman` binary.
use std::{fmt::Display, fmt::Formatter};

use clap::Parser;
use log::LevelFilter;

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Builds the Huffman code of a line of text and compresses it",
    long_about = None)]
pub struct Args {
    /// Text to compress. Read from the terminal when missing
    #[clap()]
    pub text: Option<String>,

    /// Take every character as a symbol instead of every grapheme cluster
    #[clap(long = "chars")]
    pub chars: bool,

    /// Don't draw the Huffman tree
    #[clap(long = "no-tree")]
    pub no_tree: bool,

    /// Don't print the table of frequencies and codes
    #[clap(long = "no-table")]
    pub no_table: bool,

    /// Sets verbosity. 1 is silent, 4 and above show debug messages
    #[clap(short = 'v', long = "verbosity", default_value_t = 3)]
    pub verbosity: u8,
}

/// What a symbol of the input text is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// A user-perceived character, possibly made of several code points.
    Grapheme,
    /// A single Unicode scalar value.
    Char,
}
impl Display for Granularity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Defines all user settable options to control program behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Text given on the command line, if any
    pub text: Option<String>,
    pub granularity: Granularity,
    pub show_tree: bool,
    pub show_table: bool,
    pub log_level: LevelFilter,
}

impl Options {
    pub fn new() -> Self {
        Self {
            text: None,
            granularity: Granularity::Grapheme,
            show_tree: true,
            show_table: true,
            log_level: LevelFilter::Info,
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Args> for Options {
    fn from(args: Args) -> Self {
        Options {
            text: args.text,
            granularity: if args.chars {
                Granularity::Char
            } else {
                Granularity::Grapheme
            },
            show_tree: !args.no_tree,
            show_table: !args.no_table,
            log_level: match args.verbosity {
                0 | 1 => LevelFilter::Off,
                2 => LevelFilter::Error,
                3 => LevelFilter::Info,
                _ => LevelFilter::Debug,
            },
        }
    }
}

/// Parses the process arguments into [`Options`].
pub fn init_options() -> Options {
    Options::from(Args::parse())
}
