use clap::Parser;
use locations_index::config::{self, BuildConfig};
use locations_index::source::{Input, OutputTarget};
use locations_index::{index, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "locations-index")]
#[command(about = "Generate the locations.json index for available elevation profiles")]
#[command(long_about = "\
Generate the locations.json index for available elevation profiles

Each input is one location's metadata.json: a JSON document with at least
{\"properties\": {\"name\": ...}}. Every document is annotated with two
derived fields:

  properties.slug           lowercased name; also the entry's index key
  properties.metadata_file  {base-path}/{slug}/metadata.json

and collected into a single JSON object mapping slug to document. When two
names lowercase to the same slug, the later input wins.

The emitted index is what the map frontend fetches first: it reads
properties.name and properties.slug from each entry to place markers, then
loads the per-location data files from the metadata_file path.

A positional argument of '-' reads standard input; '--output -' (or omitting
--output) writes standard output. The build summary always goes to stderr,
so piped output stays clean JSON.")]
#[command(version)]
struct Cli {
    /// URL base path of the JSON data as seen by the browser
    #[arg(short, long, default_value = config::DEFAULT_BASE_PATH)]
    base_path: String,

    /// Output file ("-" or omitted writes standard output)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the emitted index
    #[arg(long)]
    pretty: bool,

    /// metadata.json file for a location ("-" reads standard input)
    #[arg(value_name = "METADATA_FILE", required = true)]
    metadata_file: Vec<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = BuildConfig {
        base_path: cli.base_path,
        pretty: cli.pretty,
    };
    let inputs: Vec<Input> = cli.metadata_file.iter().map(|p| Input::from_arg(p)).collect();
    let target = OutputTarget::from_arg(cli.output.as_deref());

    // Open the destination before reading anything: an unwritable output is
    // a usage problem, not a mid-build surprise.
    let mut destination = target.open()?;

    let result = index::build_index(&config, &inputs)?;
    let document = result.index.to_json(config.pretty)?;
    destination.write_document(&document)?;

    output::print_build_summary(&result, &target);
    Ok(())
}
