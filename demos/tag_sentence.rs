use std::env;
use std::process;

use brill_tagger::{Lexicon, Tag, Tagger};

fn main() {
    let mut args = env::args().skip(1);
    let lexicon = match args.next() {
        Some(path) => match Lexicon::load(&path) {
            Ok(lexicon) => lexicon,
            Err(err) => {
                eprintln!("Error: {err}");
                process::exit(1);
            }
        },
        None => [
            ("the", vec![Tag::DT]),
            ("cat", vec![Tag::NN]),
            ("sat", vec![Tag::VBD]),
            ("on", vec![Tag::IN]),
            ("mat", vec![Tag::NN]),
        ]
        .into_iter()
        .collect(),
    };

    let text: String = args.collect::<Vec<_>>().join(" ");
    let text = if text.is_empty() { "The cat sat on the mat." } else { text.as_str() };

    let tagger = Tagger::new(lexicon);
    let line: Vec<String> = tagger
        .tag(text)
        .iter()
        .map(|t| format!("{}/{}", t.text(), t.tag))
        .collect();
    println!("{}", line.join(" "));
}
