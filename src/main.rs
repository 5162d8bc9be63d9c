use std::path::PathBuf;

use clap::Parser;
use ontology_chooser::{
    chooser::OntologyChooser,
    core::{
        http::BioPortalClient,
        ChooserError,
        FieldDescriptor,
    },
    form::Form,
    persistence,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Look up ontology terms for a form field and print the resulting field values.
#[derive(Parser, Debug)]
#[command(name = "ontology-chooser", version)]
struct Cli {
    /// Text typed into the field.
    query: String,

    /// Binding of the field, e.g. ontology-1132-name or ontology-all-name.
    #[arg(long, default_value = "ontology-all-name")]
    rel: String,

    /// Name of the field in the form.
    #[arg(long, default_value = "term")]
    field: String,

    /// Select the n-th suggestion (0-based) and print the form with its companion fields.
    #[arg(long)]
    select: Option<usize>,

    /// Options file, defaults to chooser.json in the user config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the term search service URL.
    #[arg(long)]
    service_url: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ontology_chooser=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), ChooserError> {
    let config_path = cli.config.unwrap_or_else(persistence::default_options_path);
    let mut options = persistence::load_options_or_default(&config_path);
    if let Some(url) = cli.service_url {
        options.service_url = url;
    }

    let client = BioPortalClient::new(&options)?;
    let form = Form::from_descriptors(&[FieldDescriptor { name: cli.field.clone(), rel: cli.rel }]);
    let mut chooser = OntologyChooser::new(options, form);

    let handle = chooser.handle_for(&cli.field).ok_or_else(|| ChooserError::UnknownField(cli.field.clone()))?;
    chooser.set_text(&handle, &cli.query)?;

    let Some(records) = chooser.search(&client, &handle, &cli.query).await? else {
        info!("query shorter than {} characters, nothing searched", chooser.options().min_length);
        return Ok(());
    };
    info!(query = %cli.query, suggestions = records.len(), "search finished");

    match cli.select {
        Some(n) => {
            let record = records
                .get(n)
                .ok_or_else(|| ChooserError::Custom(format!("no suggestion #{n}, got {}", records.len())))?;
            chooser.set_text(&handle, &record.display_value)?;
            chooser.select(&handle, record)?;
            println!("{}", serde_json::to_string_pretty(chooser.form())?);
        }
        None => {
            for (i, record) in records.iter().enumerate() {
                println!("{i:>3}  {}", record.annotated_label);
            }
        }
    }

    Ok(())
}
