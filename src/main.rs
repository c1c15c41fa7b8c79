//! heading-path: copy the Markdown heading path above a line.
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use heading_path::command::copy_heading_path;
use heading_path::config::Config;
use heading_path::formats::markdown::MarkdownFormat;
use heading_path::heading::DeepMarkers;
use heading_path::host::{
    ActiveEditor, Clipboard, ClipboardRejected, StderrNotifier, StdoutClipboard, SystemClipboard,
};
use heading_path::input::Document;
use heading_path::plugin::{HeadingPathPlugin, COMMANDS};
use heading_path::settings::JsonFileStore;
use std::io;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "heading-path")]
#[command(about = "Copy the Markdown heading path above a line", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Copy the heading path above a line of a Markdown file
    Copy {
        /// Markdown file to read
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Cursor line, counting from 1 (defaults to the last line)
        #[arg(long, short = 'l')]
        line: Option<NonZeroUsize>,

        /// Separator for this copy only
        #[arg(long, short = 's')]
        separator: Option<String>,

        /// Turn inline math normalization on or off for this copy only
        #[arg(long, value_name = "BOOL")]
        normalize_math: Option<bool>,

        /// Print the path on stdout instead of using the system clipboard
        #[arg(long)]
        print: bool,
    },
    /// Show or change the saved settings
    Settings {
        /// Text placed between headings
        #[arg(long)]
        separator: Option<String>,

        /// Rewrite inline math to plain text
        #[arg(long, value_name = "BOOL")]
        normalize_math: Option<bool>,

        /// Handling of marker runs deeper than six
        #[arg(long, value_enum)]
        deep_markers: Option<DeepMarkers>,

        /// Restore every setting to its default
        #[arg(long, conflicts_with_all = ["separator", "normalize_math", "deep_markers"])]
        reset: bool,
    },
    /// List the commands the plugin registers
    Commands,
}

/// Clipboard used when the system clipboard could not be opened.
struct Unavailable(ClipboardRejected);

impl Clipboard for Unavailable {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardRejected> {
        Err(self.0.clone())
    }
}

fn main() -> io::Result<ExitCode> {
    let args = Args::parse();
    let cfg = Config::load();
    init_logging(cfg.developer_mode);

    let mut plugin =
        HeadingPathPlugin::load(JsonFileStore::new(&cfg.data_file), cfg.developer_mode);

    let status = match args.command {
        Cmd::Copy {
            file,
            line,
            separator,
            normalize_math,
            print,
        } => run_copy(&plugin, &file, line, separator, normalize_math, print)?,
        Cmd::Settings {
            separator,
            normalize_math,
            deep_markers,
            reset,
        } => {
            if reset {
                plugin.reset_settings().map_err(io::Error::other)?;
            } else if separator.is_some() || normalize_math.is_some() || deep_markers.is_some() {
                plugin
                    .update_settings(|settings| {
                        if let Some(separator) = separator {
                            settings.separator = separator;
                        }
                        if let Some(normalize_math) = normalize_math {
                            settings.normalize_math = normalize_math;
                        }
                        if let Some(deep_markers) = deep_markers {
                            settings.deep_markers = deep_markers;
                        }
                    })
                    .map_err(io::Error::other)?;
            }

            let json = serde_json::to_string_pretty(plugin.settings()).map_err(io::Error::other)?;
            println!("{json}");
            ExitCode::SUCCESS
        }
        Cmd::Commands => {
            for command in COMMANDS {
                println!("{}\t{}", command.id, command.name);
            }
            ExitCode::SUCCESS
        }
    };

    drop(plugin.unload());
    Ok(status)
}

fn run_copy(
    plugin: &HeadingPathPlugin<JsonFileStore>,
    file: &Path,
    line: Option<NonZeroUsize>,
    separator: Option<String>,
    normalize_math: Option<bool>,
    print: bool,
) -> io::Result<ExitCode> {
    let document = Document::open(file, line.map(|l| l.get() - 1))?;
    let editor: &dyn ActiveEditor = &document;
    let mut clipboard = open_clipboard(print);
    let mut notifier = StderrNotifier;

    let outcome = if separator.is_none() && normalize_math.is_none() {
        plugin.copy(Some(editor), clipboard.as_mut(), &mut notifier)
    } else {
        // One-off overrides apply to this copy only and are never saved.
        let settings = plugin.settings().with_overrides(separator, normalize_math);
        copy_heading_path(
            Some(editor),
            &MarkdownFormat,
            &settings,
            clipboard.as_mut(),
            &mut notifier,
        )
    };

    Ok(if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn open_clipboard(print: bool) -> Box<dyn Clipboard> {
    if print {
        return Box::new(StdoutClipboard);
    }
    match SystemClipboard::new() {
        Ok(clipboard) => Box::new(clipboard),
        Err(e) => Box::new(Unavailable(e)),
    }
}

fn init_logging(developer_mode: bool) {
    let fallback = if developer_mode {
        "heading_path=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
