use std::collections::HashMap;
use std::fs::File;
use std::io::{prelude::*, stdin, BufReader};
use std::path::PathBuf;

use clap::Parser;
use sentilist::Label;

#[derive(Parser, Debug)]
#[command(about = "A program to evaluate the accuracy of Sentilist predictions.")]
struct Args {
    /// The gold key file to compare answers against
    #[arg(long)]
    key: PathBuf,
}

fn attribute<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let start = line.find(&format!("{name}=\""))? + name.len() + 2;
    let len = line[start..].find('"')?;
    Some(&line[start..start + len])
}

fn matrix_index(label: Label) -> usize {
    match label {
        Label::Negative => 0,
        Label::Positive => 1,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut key = HashMap::new();
    let f = BufReader::new(File::open(&args.key)?);
    for line in f.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let id = attribute(&line, "instance id")
            .or_else(|| attribute(&line, "instance"))
            .ok_or_else(|| format!("key line has no instance id: {line}"))?;
        let sentiment: Label = attribute(&line, "sentiment")
            .ok_or_else(|| format!("key line has no sentiment: {line}"))?
            .parse()?;
        key.insert(id.to_string(), sentiment);
    }
    eprintln!("# of key entries: {}", key.len());

    let mut correct = 0;
    let mut total = 0;
    let mut confusion = [[0usize; 2]; 2];
    for line in stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let id = attribute(&line, "instance")
            .ok_or_else(|| format!("answer line has no instance id: {line}"))?;
        let predicted: Label = attribute(&line, "sentiment")
            .ok_or_else(|| format!("answer line has no sentiment: {line}"))?
            .parse()?;
        let actual = *key
            .get(id)
            .ok_or_else(|| format!("instance {id} is not in the key"))?;

        if predicted == actual {
            correct += 1;
        }
        total += 1;
        confusion[matrix_index(actual)][matrix_index(predicted)] += 1;
    }

    if total == 0 {
        return Err("no answers given on standard input".into());
    }

    println!("Accuracy: {}", correct as f64 / total as f64);
    println!("{:>10} {:>9} {:>9}", "", "negative", "positive");
    for (label, row) in ["negative", "positive"].iter().zip(&confusion) {
        println!("{:>10} {:>9} {:>9}", label, row[0], row[1]);
    }

    Ok(())
}
