use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use chordplay::{generate_answer, ChordError, DrillConfig, Question};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "chordplay")]
#[command(about = "Chord drill: name the chord, then hear the answer", long_about = None)]
struct Args {
    /// Root of the chord (C, C#, ... B); random if omitted
    #[arg(long)]
    key: Option<String>,

    /// Chord type (Major, minor, sus4, aug, dim, Major7, minor7, Dominant7, Diminished7, "Half Diminished7")
    #[arg(long)]
    quality: Option<String>,

    /// Play the chord tones one at a time instead of together
    #[arg(long)]
    arpeggio: bool,

    /// Play every inversion as an arpeggio instead of a block chord
    #[arg(long)]
    inversions: bool,

    /// Arpeggio tempo (60-240)
    #[arg(long, value_name = "BPM")]
    bpm: Option<u16>,

    /// Block chord length
    #[arg(long, value_name = "SECONDS")]
    duration: Option<f64>,

    /// YAML drill configuration
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for the random question
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the rendered answer
    #[arg(short, long, value_name = "FILE", default_value = "chordplay.wav")]
    output: PathBuf,

    /// Print the answer as JSON instead of text
    #[arg(long)]
    json: bool,
}

impl Args {
    /// Config file values, overridden by command-line flags
    fn drill_config(&self) -> Result<DrillConfig, ChordError> {
        let mut config = match &self.config {
            Some(path) => {
                let content = fs::read_to_string(path).map_err(|e| {
                    ChordError::ConfigError(format!("cannot read '{}': {}", path.display(), e))
                })?;
                DrillConfig::from_yaml(&content)?
            }
            None => DrillConfig::default(),
        };

        if let Some(key) = &self.key {
            config.key = Some(key.parse()?);
        }
        if let Some(quality) = &self.quality {
            config.quality = Some(quality.parse()?);
        }
        if self.arpeggio {
            config.arpeggio = true;
        }
        if self.inversions {
            config.include_inversions = true;
        }
        if let Some(bpm) = self.bpm {
            config.bpm = bpm;
        }
        if let Some(duration) = self.duration {
            config.chord_duration = duration;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
    );

    let args = Args::parse();

    let config = match args.drill_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let question = Question::from_config(&config, &mut rng);
    log::info!("Question: {}", question.label());

    let answer = match generate_answer(&question, &config) {
        Ok(answer) => answer,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = fs::write(&args.output, &answer.wav) {
        eprintln!("Error writing to '{}': {}", args.output.display(), e);
        process::exit(1);
    }
    log::info!(
        "Wrote {:.2}s of audio to {}",
        answer.duration_secs(),
        args.output.display()
    );

    if args.json {
        let output = serde_json::json!({
            "question": question,
            "answer": answer,
        });
        match serde_json::to_string_pretty(&output) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    } else {
        println!("{}", question.label());
        println!("Notes: {}", question.note_names());
    }
}
