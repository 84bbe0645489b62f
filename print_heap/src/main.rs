use std::io::{BufReader, Write};

use anyhow::Context;
use clap::Parser;
use heap::{Comparator, Heap, MaxHeap, MinHeap};
use read_values::{parse_values, read_line};

mod read_values;

/// Reads a line of integers, builds a binary heap from them in linear time
/// and prints the heap's array layout.
#[derive(Parser, Debug)]
#[command(version)]
struct Arguments {
    /// Keep the least value on top instead of the greatest
    #[arg(long)]
    min: bool,

    /// Also print the values after heap-sort
    #[arg(long)]
    sort: bool,
}

fn main() -> anyhow::Result<()> {
    let arguments = Arguments::parse();

    let mut stdout = std::io::stdout().lock();
    let Some(line) = read_line(&mut BufReader::new(std::io::stdin()), &mut stdout)
        .context("failed to read from stdin")?
    else {
        writeln!(stdout)?;
        eprintln!("no input");
        return Ok(());
    };

    let parsed = parse_values::<i32>(&line);
    for token in parsed.rejected.iter() {
        eprintln!("skipping malformed token {:?}", token);
    }

    if arguments.min {
        report(MinHeap::from(parsed.values), arguments.sort, &mut stdout)
    } else {
        report(MaxHeap::from(parsed.values), arguments.sort, &mut stdout)
    }
}

fn report<CompareT: Comparator<i32>>(
    mut heap: Heap<i32, CompareT>,
    sort: bool,
    output: &mut impl Write,
) -> anyhow::Result<()> {
    writeln!(output, "heap: {}", heap).context("failed to write to stdout")?;
    if sort {
        heap.sort();
        writeln!(output, "sorted: {}", heap).context("failed to write to stdout")?;
    }
    return Ok(());
}
