//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
use std::error::Error;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::io::{self, BufRead, Write};

use huffman_coding::cli::{init_options, Granularity, Options};
use huffman_coding::report::{render_table, render_tree};
use huffman_coding::{encode, encode_symbols, to_bit_string, Encoding};
use log::info;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() -> Result<(), Box<dyn Error>> {
    let options = init_options();
    TermLogger::init(
        options.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    info!("Symbols are taken by {}", options.granularity);

    let text = match &options.text {
        Some(text) => text.clone(),
        None => prompt()?,
    };

    match options.granularity {
        Granularity::Grapheme => show(&options, &encode(&text)?),
        Granularity::Char => show(&options, &encode_symbols(text.chars())?),
    }
    Ok(())
}

/// Reads one line from the terminal, without its line ending.
fn prompt() -> io::Result<String> {
    print!("Input: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let len = line.trim_end_matches(&['\r', '\n'][..]).len();
    line.truncate(len);
    Ok(line)
}

fn show<S>(options: &Options, encoding: &Encoding<S>)
where
    S: Clone + Eq + Hash + Debug + Display,
{
    if options.show_tree {
        println!("Huffman tree:");
        print!("{}", render_tree(&encoding.tree));
        println!();
    }
    if options.show_table {
        print!("{}", render_table(&encoding.frequencies, &encoding.codes));
        println!();
    }
    println!("Compressed:");
    println!("{}", to_bit_string(&encoding.encoded));

    info!(
        "{} symbols, {} distinct, into {} bits ({:.3} bits per symbol)",
        encoding.input_len(),
        encoding.frequencies.len(),
        encoding.encoded.len(),
        encoding.bits_per_symbol()
    );
}
