//! Command line front end for classed manifests.
//!
//! ```text
//! classed check app.json
//! classed resolve app.json Box --set size=massive --class-name extra
//! classed render app.json Box --set color=soft --text "Tiny soft"
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use classed::{render_html, Manifest, Props};
use serde::Serialize;

/// Resolve variant class names from a classed manifest
#[derive(Parser)]
#[command(name = "classed", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report every problem in a manifest
    Check {
        /// Path to the manifest JSON file
        manifest: PathBuf,
    },

    /// Print the class string a component resolves to
    Resolve {
        #[command(flatten)]
        call: CallArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Print the HTML a component renders to
    Render {
        #[command(flatten)]
        call: CallArgs,

        /// Text content for the element
        #[arg(long)]
        text: Option<String>,
    },
}

#[derive(Args)]
struct CallArgs {
    /// Path to the manifest JSON file
    manifest: PathBuf,

    /// Component name declared in the manifest
    component: String,

    /// Set a property, e.g. `size=massive` (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_prop)]
    props: Vec<(String, String)>,

    /// Class name appended after the resolved classes
    #[arg(long)]
    class_name: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Resolved<'a> {
    component: &'a str,
    display_name: Option<&'a str>,
    class_name: String,
}

fn parse_prop(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, _)) if name.chars().any(|c| c.is_whitespace() || c.is_control()) => {
            Err(format!("property name '{}' contains whitespace", name))
        }
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{}'", raw)),
    }
}

impl CallArgs {
    fn props(&self) -> Props {
        let props: Props = self.props.iter().cloned().collect();
        match &self.class_name {
            Some(class_name) => props.class_name(class_name.as_str()),
            None => props,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn check(path: &Path) -> Result<bool> {
    let manifest = Manifest::from_path(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let problems = manifest
        .problems(base_dir)
        .with_context(|| format!("loading style table for {}", path.display()))?;

    if problems.is_empty() {
        println!("ok: {} components", manifest.components.len());
        return Ok(true);
    }
    for problem in &problems {
        println!("error: {}", problem);
    }
    Ok(false)
}

fn resolve(call: &CallArgs, output: OutputFormat) -> Result<()> {
    let library = Manifest::load(&call.manifest)
        .with_context(|| format!("loading {}", call.manifest.display()))?;
    let classed = library.require(&call.component)?;
    let class_name = classed.class_name(&call.props());

    match output {
        OutputFormat::Text => println!("{}", class_name),
        OutputFormat::Json => {
            let resolved = Resolved {
                component: &call.component,
                display_name: classed.display_name(),
                class_name,
            };
            println!("{}", serde_json::to_string_pretty(&resolved)?);
        }
    }
    Ok(())
}

fn render(call: &CallArgs, text: Option<&str>) -> Result<()> {
    let library = Manifest::load(&call.manifest)
        .with_context(|| format!("loading {}", call.manifest.display()))?;
    let classed = library.require(&call.component)?;

    let mut props = call.props();
    if let Some(text) = text {
        props = props.child(text);
    }
    let html = render_html(&classed.render(props, None))?;
    println!("{}", html);
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Check { manifest } => {
            if !check(manifest)? {
                bail!("{} has problems", manifest.display());
            }
            Ok(())
        }
        Commands::Resolve { call, output } => resolve(call, *output),
        Commands::Render { call, text } => render(call, text.as_deref()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
