//! `xref` - resolve and preview scripture citations from the command line
//!
//! ```text
//! xref --data-root https://example.org/data preview "1 Cor 13:4-7"
//! xref --data-root https://example.org/data book "Sirach"
//! ```

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use xref_canon::resolve;
use xref_fetch::HttpTransport;
use xref_pipeline::{PipelineConfig, XrefPipeline};
use xref_render::RenderResult;

#[derive(Parser)]
#[command(name = "xref", version, about = "Scripture citation resolver and previewer")]
struct Cli {
    /// Root URL of the chapter data tree
    #[arg(long, default_value = "data")]
    data_root: String,

    /// Deep-link prefix for rendered links
    #[arg(long, default_value = "")]
    site_root: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a citation, fetch its chapter, and print the preview
    Preview {
        /// Citation text, e.g. "John 3:16" or "Rev 20:3,8"
        citation: String,

        /// Emit the preview as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Resolve a book name and print its slug, canon, and chapter count
    Book {
        /// Book name or abbreviation, e.g. "1 Cor"
        name: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = PipelineConfig {
        data_root: cli.data_root,
        site_root: cli.site_root,
        ..PipelineConfig::default()
    };
    let pipeline = XrefPipeline::new(config, Arc::new(HttpTransport::new()));

    match cli.command {
        Command::Preview { citation, json } => {
            let results = pipeline.preview_all(&citation).await;
            if results.is_empty() {
                bail!("not a citation: '{citation}'");
            }
            for result in results {
                match result {
                    RenderResult::Preview(preview) => {
                        if json {
                            println!("{}", serde_json::to_string_pretty(&preview)?);
                        } else {
                            println!("{}", preview.title);
                            for verse in &preview.verses {
                                println!("  {} {}", verse.number, verse.text);
                            }
                            println!("  -> {}", preview.deep_link);
                        }
                    }
                    RenderResult::Error { message } => eprintln!("{message}"),
                }
            }
        }
        Command::Book { name } => {
            let Some(book) = resolve(&name) else {
                bail!("unknown book: '{name}'");
            };
            let meta = pipeline
                .store()
                .fetch_meta(book.canon, &book.slug)
                .await
                .with_context(|| format!("no metadata for {}", book.slug))?;
            println!(
                "{} ({}) - {} chapters",
                book.slug.display_name(),
                book.canon,
                meta.chapters
            );
        }
    }

    Ok(())
}
