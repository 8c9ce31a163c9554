use anyhow::{Context, Result};
use mdp::{Config, Pipeline, files, preview};
use std::thread;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let options = config.render_options();
    debug!(?options, "resolved render options");

    let pipeline = Pipeline::new(&options).context("Failed to load template")?;
    let input = files::read_file(&config.file).context("Failed to load Markdown file")?;
    let document = pipeline.run(&input);

    if let Some(output) = &config.output {
        files::write_file(output, &document).context("Failed to save HTML")?;
        println!("{}", output.display());

        if !config.skip_preview {
            preview::preview(output).context("Failed to preview document")?;
        }
        return Ok(());
    }

    let file = files::write_temp(&document).context("Failed to save HTML")?;
    println!("{}", file.path().display());

    if config.skip_preview {
        let (_, path) = file.keep().context("Failed to keep temporary file")?;
        info!(path = %path.display(), "kept document");
        return Ok(());
    }

    preview::preview(file.path()).context("Failed to preview document")?;

    // Viewer must load the file before the handle drop removes it
    thread::sleep(preview::GRACE_PERIOD);

    Ok(())
}
