//! Read a minimum degree and an integer stream from stdin, print the
//! serialized tree.
//!
//! Input format: the degree, then the stream length, then that many
//! integers, all whitespace-separated.

use std::io::{self, Read};

use btree::BTree;

fn run() -> Result<(), String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| format!("failed to read stdin: {}", e))?;

    let mut tokens = input.split_whitespace();
    let mut next_int = |what: &str| -> Result<i64, String> {
        let token = tokens.next().ok_or_else(|| format!("missing {}", what))?;
        token
            .parse::<i64>()
            .map_err(|_| format!("invalid {}: {:?}", what, token))
    };

    let min_degree = next_int("minimum degree")?;
    let min_degree = usize::try_from(min_degree)
        .map_err(|_| format!("invalid minimum degree: {}", min_degree))?;
    let count = next_int("stream length")?;

    let mut stream = Vec::new();
    for _ in 0..count {
        stream.push(next_int("stream element")?);
    }

    let tree = BTree::from_seed(min_degree, stream).map_err(|e| e.to_string())?;
    println!("{}", tree);
    Ok(())
}

fn main() {
    println!("BTree Stringifier: see the string representation of a BTree");
    println!("-----------------------------------------------------------");
    if let Err(message) = run() {
        eprintln!("error: {}", message);
        std::process::exit(1);
    }
}
