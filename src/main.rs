use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process;

use chord_maker::{
    chord_symbol, load_selections, name_chord, Accidental, AddedDegree, ChordForm, Degree,
    Extension, Letter, Quality, Suspension,
};

/// Build a chord from a root and its modifiers and print its name and notes
#[derive(Parser)]
#[command(name = "chord-maker")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root letter (A-G)
    #[arg(long, default_value = "C")]
    root: Letter,

    /// Root accidental: natural, sharp or flat
    #[arg(long, default_value = "natural")]
    accidental: Accidental,

    /// Major, Minor, Dominant, Diminished or Augmented
    #[arg(long, default_value = "major")]
    quality: Quality,

    /// "No sus", sus2 or sus4
    #[arg(long, default_value = "No sus")]
    sus: Suspension,

    /// Triad, 7th, 9th, 11th or 13th
    #[arg(long, default_value = "Triad")]
    size: Extension,

    /// Chord degree to alter (1, 3, 5, 7, 9, 11, 13)
    #[arg(long)]
    alter: Option<Degree>,

    /// Accidental the altered degree gets
    #[arg(long, default_value = "natural")]
    alter_accidental: Accidental,

    /// Degree to add (9, 11, 13)
    #[arg(long)]
    add: Option<AddedDegree>,

    /// YAML file with one selection mapping or a list of them (ignores the flags above)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print the chord name only
    #[arg(long)]
    name_only: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn form(&self) -> ChordForm {
        ChordForm {
            root: self.root,
            root_accidental: self.accidental,
            quality: self.quality,
            sus: self.sus,
            size: self.size,
            alter: self.alter,
            alter_accidental: self.alter_accidental,
            add: self.add,
        }
    }
}

fn render(form: &ChordForm, cli: &Cli) -> Result<String, String> {
    if cli.name_only {
        let symbol = chord_symbol(form);
        return if cli.json {
            serde_json::to_string(&symbol).map_err(|e| e.to_string())
        } else {
            Ok(symbol)
        };
    }

    let named = name_chord(form).map_err(|e| e.to_string())?;
    if cli.json {
        serde_json::to_string(&named).map_err(|e| e.to_string())
    } else {
        Ok(format!(
            "Chord name\n{}\nChord notes\n{}\n----",
            named.symbol,
            named.pitch_names()
        ))
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let forms = match &cli.file {
        Some(path) => {
            let source = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error reading file '{}': {}", path.display(), e);
                    process::exit(1);
                }
            };
            match load_selections(&source) {
                Ok(forms) => forms,
                Err(e) => {
                    eprintln!("Error in '{}': {}", path.display(), e);
                    process::exit(1);
                }
            }
        }
        None => vec![cli.form()],
    };
    log::debug!("rendering {} chord(s)", forms.len());

    for form in &forms {
        match render(form, &cli) {
            Ok(output) => println!("{}", output),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }
}
