use std::fs::File;
use std::io::{prelude::*, BufReader, BufWriter};
use std::path::PathBuf;

use clap::Parser;
use sentilist::{parse_corpus, Trainer};
use sentilist_rules::{StringFilter, TweetNormalizer};

#[derive(Parser, Debug)]
#[command(about = "A program to train decision-list models of Sentilist.")]
struct Args {
    /// A tagged training corpus
    #[arg(long)]
    corpus: PathBuf,

    /// The file to write the trained model to
    #[arg(long)]
    model: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let normalizer = TweetNormalizer::new();

    eprintln!("Loading corpus {:?} ...", args.corpus);
    let mut data = String::new();
    BufReader::new(File::open(&args.corpus)?).read_to_string(&mut data)?;
    let instances = parse_corpus(&data)?;
    eprintln!("# of instances: {}", instances.len());

    eprintln!("Extracting features...");
    let mut trainer = Trainer::new();
    for instance in &instances {
        let label = instance
            .label()
            .ok_or_else(|| format!("instance {} has no sentiment label", instance.id()))?;
        trainer.add_example(label, &normalizer.filter(instance.text()));
    }
    eprintln!("# of features: {}", trainer.n_features());

    let model = trainer.train();
    eprintln!("# of rules: {}", model.entries().len());
    eprintln!("Majority sentiment: {}", model.majority());

    let mut f = BufWriter::new(File::create(&args.model)?);
    model.write(&mut f)?;

    Ok(())
}
