use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;

use gumdrop::Options;
use serde::Serialize;

use addsubspell::case_handling::lower_case;
use addsubspell::dictionary::Dictionary;
use addsubspell::speller::{AddSubSpeller, Speller};

trait OutputWriter {
    fn write_result(&mut self, word: &str, is_correct: bool, lower_case_form: Option<&str>);
    fn finish(&mut self);
}

struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write_result(&mut self, word: &str, is_correct: bool, lower_case_form: Option<&str>) {
        match (is_correct, lower_case_form) {
            (true, _) => println!("Input: {}\t\t[CORRECT]", word),
            (false, Some(lower)) => println!(
                "Input: {}\t\t[INCORRECT; \"{}\" exists]",
                word, lower
            ),
            (false, None) => println!("Input: {}\t\t[INCORRECT]", word),
        }
    }

    fn finish(&mut self) {}
}

#[derive(Serialize)]
struct CheckResult {
    word: String,
    is_correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    lower_case_form: Option<String>,
}

#[derive(Serialize)]
struct JsonWriter {
    results: Vec<CheckResult>,
}

impl JsonWriter {
    pub fn new() -> JsonWriter {
        JsonWriter { results: vec![] }
    }
}

impl OutputWriter for JsonWriter {
    fn write_result(&mut self, word: &str, is_correct: bool, lower_case_form: Option<&str>) {
        self.results.push(CheckResult {
            word: word.to_owned(),
            is_correct,
            lower_case_form: lower_case_form.map(|x| x.to_owned()),
        });
    }

    fn finish(&mut self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap());
    }
}

#[derive(Debug, Options)]
struct Args {
    #[options(help = "print help message")]
    help: bool,

    #[options(command)]
    command: Option<Command>,
}

#[derive(Debug, Options)]
enum Command {
    #[options(help = "check whether the provided words are correctly spelled")]
    Check(CheckArgs),

    #[options(help = "print the expanded word list of a dictionary")]
    Expand(ExpandArgs),
}

#[derive(Debug, Options)]
struct CheckArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "add-sub dictionary JSON file to be used", required)]
    dictionary: PathBuf,

    #[options(
        no_short,
        long = "exact",
        help = "disable the lower-case fallback for unknown words"
    )]
    exact: bool,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,

    #[options(free, help = "words to be checked")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct ExpandArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "add-sub dictionary JSON file to be used", required)]
    dictionary: PathBuf,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,
}

fn inputs_or_stdin(inputs: Vec<String>) -> Vec<String> {
    if !inputs.is_empty() {
        return inputs;
    }

    eprintln!("Reading from stdin...");
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .expect("reading stdin");
    buffer
        .trim()
        .split('\n')
        .map(|x| x.trim().to_string())
        .collect()
}

fn load_speller(path: &PathBuf) -> anyhow::Result<Arc<AddSubSpeller>> {
    let dictionary = Dictionary::from_path(path)?;
    let (speller, diagnostics) = AddSubSpeller::from_dictionary(dictionary);

    if !diagnostics.is_empty() {
        eprintln!("{} entries skipped during expansion", diagnostics.len());
    }

    Ok(speller)
}

fn check(args: CheckArgs) -> anyhow::Result<()> {
    let speller = load_speller(&args.dictionary)?;
    let words = inputs_or_stdin(args.inputs);

    let mut writer: Box<dyn OutputWriter> = if args.use_json {
        Box::new(JsonWriter::new())
    } else {
        Box::new(StdoutWriter)
    };

    for word in words {
        let is_correct = speller.clone().is_correct(&word);

        let lower_case_form = if !is_correct && !args.exact {
            let lower = lower_case(&word);
            if speller.contains(&lower) {
                Some(lower)
            } else {
                None
            }
        } else {
            None
        };

        writer.write_result(&word, is_correct, lower_case_form.as_deref());
    }

    writer.finish();

    Ok(())
}

fn expand(args: ExpandArgs) -> anyhow::Result<()> {
    let speller = load_speller(&args.dictionary)?;

    let mut words: Vec<&str> = speller.word_set().iter().map(|x| x.as_str()).collect();
    words.sort_unstable();

    if args.use_json {
        println!("{}", serde_json::to_string_pretty(&words)?);
    } else {
        for word in words {
            println!("{}", word);
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse_args_default_or_exit();

    match args.command {
        None => Ok(()),
        Some(Command::Check(args)) => check(args),
        Some(Command::Expand(args)) => expand(args),
    }
}
