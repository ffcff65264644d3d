use clap::Parser;
use folio::{DataValue, DocumentPipelineBuilder, PipelineError};
use std::fs;
use std::path::PathBuf;

/// Compiles an XML document template and renders it to PDF.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Path to the template markup.
    template: PathBuf,

    /// JSON file whose top-level object is bound to the template.
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Output PDF path. Defaults to the template path with a `.pdf` extension.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the compiled document tree instead of rendering.
    #[arg(long)]
    dump_tree: bool,

    /// Print the composition calls as JSON instead of writing a PDF.
    #[arg(long)]
    dump_calls: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), PipelineError> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env().filter_level(level).init();

    log::info!("Loading template from {}", cli.template.display());
    let pipeline = DocumentPipelineBuilder::new()
        .with_template_file(&cli.template)?
        .build()?;

    if cli.dump_tree {
        println!("{}", pipeline.document().dump());
        return Ok(());
    }

    let data = match &cli.data {
        Some(path) => {
            log::info!("Loading data from {}", path.display());
            let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(path)?)?;
            Some(DataValue::from(json))
        }
        None => None,
    };

    if cli.dump_calls {
        let recording = pipeline.record(data.as_ref())?;
        println!("{}", serde_json::to_string_pretty(recording.calls())?);
        return Ok(());
    }

    let output = cli.output.unwrap_or_else(|| cli.template.with_extension("pdf"));
    pipeline.render_to_file(data.as_ref(), &output)?;
    println!("Successfully generated {}", output.display());
    Ok(())
}
