//! miditools CLI - Note names, scales and chords as MIDI note numbers
//!
//! With no subcommand this prints the A minor scale and triad. The
//! subcommands expose each of the library's resolvers and generators.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use miditools::{DEFAULT_CHORD_SIZE, DEFAULT_OCTAVE, DEFAULT_ROOT};
use miditools_cli::commands;

/// miditools - Music theory to MIDI note numbers
#[derive(Parser)]
#[command(name = "miditools")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a pitch name and octave to a MIDI note number
    Note {
        /// Pitch name (C, C#, D, ... B)
        #[arg(default_value = DEFAULT_ROOT)]
        name: String,

        /// Octave in scientific pitch notation (C4 = middle C)
        #[arg(short, long, default_value_t = DEFAULT_OCTAVE, allow_negative_numbers = true)]
        octave: i32,

        /// Fail on unknown pitch names instead of clamping
        #[arg(long)]
        strict: bool,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a 7-note scale
    Scale {
        /// Root pitch name
        #[arg(default_value = DEFAULT_ROOT)]
        root: String,

        /// Octave of the root
        #[arg(short, long, default_value_t = DEFAULT_OCTAVE, allow_negative_numbers = true)]
        octave: i32,

        /// Mode name (ionian, dorian, ..., harmonic, melodic; or major, minor, jazz)
        #[arg(short, long, default_value = "ionian")]
        mode: String,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a chord by stacking scale degrees
    Chord {
        /// Root pitch name
        #[arg(default_value = DEFAULT_ROOT)]
        root: String,

        /// Octave of the root
        #[arg(short, long, default_value_t = DEFAULT_OCTAVE, allow_negative_numbers = true)]
        octave: i32,

        /// Mode name
        #[arg(short, long, default_value = "ionian")]
        mode: String,

        /// Number of chord tones
        #[arg(short = 'n', long, default_value_t = DEFAULT_CHORD_SIZE, allow_negative_numbers = true)]
        count: i32,

        /// Chord shape (triad, seventh, ninth)
        #[arg(short, long, default_value = "triad")]
        shape: String,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available modes
    Modes {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None => commands::demo::run(),
        Some(Commands::Note {
            name,
            octave,
            strict,
            json,
        }) => commands::note::run(&name, octave, strict, json),
        Some(Commands::Scale {
            root,
            octave,
            mode,
            json,
        }) => commands::scale::run(&root, octave, &mode, json),
        Some(Commands::Chord {
            root,
            octave,
            mode,
            count,
            shape,
            json,
        }) => commands::chord::run(&root, octave, &mode, &shape, count, json),
        Some(Commands::Modes { json }) => commands::modes::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
