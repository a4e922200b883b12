use std::{
    io::{self, IsTerminal, Read},
    path::PathBuf,
};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use parselt::{InputFormat, RenderOptions, Surface, render_file, render_source};
use rayon::prelude::*;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(version, about = "Render Markdown for the terminal")]
struct Cli {
    /// Column width of the terminal output
    #[arg(long, env = "COLUMNS", default_value_t = 80)]
    width: usize,
    /// Emit simplified Markdown instead of styled terminal text
    #[arg(long)]
    markdown: bool,
    /// Treat the input as already compiled markup
    #[arg(long)]
    markup: bool,
    /// When to emit ANSI styling
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
    /// Log filter used when `RUST_LOG` is unset
    #[arg(long = "log-level", default_value = "warn")]
    log_level: String,
    /// Documents to render
    files: Vec<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl Cli {
    fn options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width,
            surface: if self.markdown {
                Surface::Markdown
            } else {
                Surface::Terminal
            },
            input: if self.markup {
                InputFormat::Markup
            } else {
                InputFormat::Markdown
            },
        }
    }
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn apply_color(choice: ColorChoice) {
    match choice {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto if !io::stdout().is_terminal() => {
            colored::control::set_override(false);
        }
        ColorChoice::Auto => {}
    }
}

fn emit(rendered: &str) {
    println!("{}", rendered.trim_end_matches('\n'));
}

/// Entry point for the `parselt` renderer.
///
/// Renders each file named on the command line, or standard input when none
/// are given. Files are rendered in parallel and printed in argument order.
///
/// # Examples
///
/// ```sh
/// # Styled output for a 100 column pane
/// parselt --width 100 README.md
///
/// # Simplified Markdown from standard input
/// cat notes.md | parselt --markdown
/// ```
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level);
    apply_color(cli.color);
    let options = cli.options();
    debug!(?options, files = cli.files.len(), "starting");

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read standard input")?;
        emit(&render_source(&input, &options));
        return Ok(());
    }

    let rendered = cli
        .files
        .par_iter()
        .map(|path| {
            render_file(path, &options)
                .with_context(|| format!("failed to render {}", path.display()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    for doc in &rendered {
        emit(doc);
    }
    Ok(())
}
