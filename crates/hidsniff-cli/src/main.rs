use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use glob::glob;

use hidsniff_core::{
    AnnotateError, HexWriter, JsonWriter, LinesSource, PacketSource, SourceError, TsharkSource,
    annotate_stream,
};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("HIDSNIFF_BUILD_COMMIT"),
    " ",
    env!("HIDSNIFF_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "hidsniff")]
#[command(version = VERSION)]
#[command(
    about = "Annotate USB HID capture streams with per-byte field styling.",
    long_about = None,
    after_help = "Examples:\n  hidsniff live 1\n  hidsniff live 1 --json\n  hidsniff replay capture.capdata --no-color"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Attach tshark to a usbmon interface and stream annotated packets.
    #[command(
        after_help = "Examples:\n  hidsniff live 1\n  hidsniff live 3 --tshark /usr/local/bin/tshark"
    )]
    Live {
        /// usbmon bus number to attach to (1 attaches to usbmon1)
        bus: String,

        /// tshark executable to invoke
        #[arg(long, default_value = "tshark")]
        tshark: String,

        /// Write bare hex tokens without ANSI styling
        #[arg(long, conflicts_with = "json")]
        no_color: bool,

        /// Write one JSON record per packet instead of styled hex
        #[arg(long)]
        json: bool,
    },

    /// Annotate a saved capdata dump (tshark -T fields -e usb.capdata output).
    #[command(
        after_help = "Examples:\n  hidsniff replay capture.capdata\n  hidsniff replay 'captures/*.capdata' --json"
    )]
    Replay {
        /// Path to a capdata text file (a glob matching exactly one file works too)
        input: PathBuf,

        /// Write bare hex tokens without ANSI styling
        #[arg(long, conflicts_with = "json")]
        no_color: bool,

        /// Write one JSON record per packet instead of styled hex
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Live {
            bus,
            tshark,
            no_color,
            json,
        } => cmd_live(&bus, &tshark, no_color, json),
        Commands::Replay {
            input,
            no_color,
            json,
        } => cmd_replay(input, no_color, json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn cmd_live(bus: &str, tshark: &str, no_color: bool, json: bool) -> Result<(), CliError> {
    let mut source = TsharkSource::spawn_with(tshark, bus).map_err(|err| {
        CliError::new(
            format!("failed to attach to usbmon{bus}: {err}"),
            Some("check that tshark is installed and usbmon capture is permitted".to_string()),
        )
    })?;
    run_pipeline(&mut source, no_color, json)
}

fn cmd_replay(input: PathBuf, no_color: bool, json: bool) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&input)?;
    validate_input_file(&resolved_input)?;

    let mut source = LinesSource::open(&resolved_input).map_err(|err| {
        CliError::new(
            format!("failed to open {}: {err}", resolved_input.display()),
            None,
        )
    })?;
    run_pipeline(&mut source, no_color, json)
}

fn run_pipeline<S: PacketSource>(source: &mut S, no_color: bool, json: bool) -> Result<(), CliError> {
    let stdout = io::stdout();
    let out = stdout.lock();

    let result = if json {
        annotate_stream(source, &mut JsonWriter::new(out))
    } else {
        annotate_stream(source, &mut HexWriter::new(out, !no_color))
    };

    result.map_err(|err| match err {
        AnnotateError::Source(err @ SourceError::Record(_)) => CliError::new(
            format!("capture stream failed: {err}"),
            Some("expected colon-separated two-hex-digit byte tokens per line".to_string()),
        ),
        AnnotateError::Source(err) => {
            CliError::new(format!("capture stream failed: {err}"), None)
        }
        AnnotateError::Io(err) => CliError::new(format!("write failed: {err}"), None),
    })
}

fn validate_input_file(input: &PathBuf) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some(
                "save a dump with: tshark -i usbmonN -T fields -e usb.capdata > capture.capdata"
                    .to_string(),
            ),
        ));
    }
    let meta = fs::metadata(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    if !meta.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("use a capdata text dump".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &PathBuf) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.clone());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        ));
    }
    if matches.len() > 1 {
        let hint = "pass a single capture dump, or run once per file".to_string();
        let mut message = format!(
            "multiple files match pattern '{}' ({} matches)",
            pattern,
            matches.len()
        );
        let listed = matches.iter().take(3).collect::<Vec<_>>();
        if !listed.is_empty() {
            let mut details = String::new();
            details.push_str("; matches: ");
            details.push_str(
                &listed
                    .into_iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            if matches.len() > 3 {
                details.push_str(", ...");
            }
            message.push_str(&details);
        }
        return Err(CliError::new(message, Some(hint)));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
