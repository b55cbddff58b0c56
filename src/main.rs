use std::{io, path::PathBuf, time::Instant};

use clap::Parser;
use keyword_search::{
    corpus::{self, FsCorpus},
    error::Result,
    search::SearchEngine,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the file listing the documents to index, one name per line
    #[arg(long, default_value = "docs.txt")]
    docs_file: PathBuf,

    /// Path to the noise words file, one word per line
    #[arg(long, default_value = "noisewords.txt")]
    noise_words_file: PathBuf,

    /// Index every file under this directory instead of reading --docs-file
    #[arg(long)]
    corpus_dir: Option<PathBuf>,

    /// Print the built index as JSON before accepting queries
    #[arg(long, default_value = "false")]
    dump: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let (corpus, documents) = match args.corpus_dir {
        Some(dir) => {
            let documents = corpus::discover_documents(&dir)?;
            (FsCorpus::new(dir), documents)
        }
        None => (
            FsCorpus::new("."),
            corpus::read_document_list(&args.docs_file)?,
        ),
    };

    let noise_words = corpus::load_noise_words(&args.noise_words_file)?;

    let mut engine = SearchEngine::new();
    engine.build_index(&corpus, &documents, noise_words)?;

    if args.dump {
        println!("{}", serde_json::to_string_pretty(engine.index())?);
    }

    let mut buffer = String::new();

    println!("Enter two keywords, 'find <keyword>', or 'exit':");

    loop {
        buffer.clear();
        if io::stdin().read_line(&mut buffer)? == 0 {
            break;
        }

        let line = buffer.trim();
        if line == "exit" {
            break;
        }

        let mut words = line.split_whitespace();
        match (words.next(), words.next()) {
            (Some("find"), Some(keyword)) => match engine.index().get(keyword) {
                Some(occurrences) => {
                    for occurrence in occurrences {
                        println!("{} ({})", occurrence.document, occurrence.frequency);
                    }
                }
                None => println!("No occurrences of '{keyword}'"),
            },
            (Some(kw1), Some(kw2)) => {
                let start = Instant::now();
                let results = engine.top_search(kw1, kw2);

                if results.is_empty() {
                    println!("No matches for '{kw1}' or '{kw2}'");
                } else {
                    for document in &results {
                        println!("{document}");
                    }
                }
                println!("Time taken: {:?}", start.elapsed());
            }
            _ => println!("Enter exactly two keywords"),
        }
    }

    Ok(())
}
