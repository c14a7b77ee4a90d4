use std::fs::File;
use std::io::{prelude::*, stdin, BufReader};
use std::path::PathBuf;

use clap::Parser;
use sentilist::{parse_corpus, Classifier, Label, Model};
use sentilist_rules::{StringFilter, TweetNormalizer};

#[derive(Parser, Debug)]
#[command(about = "A program to predict sentiment labels with a Sentilist model.")]
struct Args {
    /// The model file to use when classifying text
    #[arg(long)]
    model: PathBuf,

    /// The fallback sentiment for texts matching no rule. The model file
    /// does not carry the majority sentiment, so pass the value reported by
    /// the trainer here.
    #[arg(long, default_value = "positive")]
    mfs: Label,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    eprintln!("Loading model file...");
    let mut f = BufReader::new(File::open(&args.model)?);
    let model = Model::read(&mut f)?;
    eprintln!("# of rules: {}", model.entries().len());
    let classifier = Classifier::new(model).fallback(args.mfs);

    let normalizer = TweetNormalizer::new();

    let mut data = String::new();
    stdin().lock().read_to_string(&mut data)?;
    let instances = parse_corpus(&data)?;
    eprintln!("# of instances: {}", instances.len());

    for instance in &instances {
        let sentiment = classifier.classify(&normalizer.filter(instance.text()));
        println!(
            "<answer instance=\"{}\" sentiment=\"{}\"/>",
            instance.id(),
            sentiment
        );
    }

    Ok(())
}
