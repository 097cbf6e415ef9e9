use std::path::PathBuf;

use clap::{Parser, Subcommand};
use core_ttx::common::logging::setup_logging;
use core_ttx::composer::{GeneratorSession, Platform};
use core_ttx::seo::{SeoInput, derive_page_metadata};

#[derive(Parser)]
#[command(name = "thellmstxt")]
#[command(about = "The TheLLMsTxt Site Toolkit", long_about = None)]
struct SiteCli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose an llms.txt rule file from path lists and platform defaults
    Compose {
        /// Comma-separated path patterns emitted as Allow directives
        #[arg(short, long)]
        allow: Option<String>,

        /// Comma-separated path patterns emitted as Disallow directives
        #[arg(short, long)]
        disallow: Option<String>,

        /// Platform whose defaults pre-fill path lists left unset
        #[arg(short, long, value_parser = parse_platform)]
        platform: Option<Platform>,

        /// Product feed URL advertised after the directive block
        #[arg(long, value_parser = validate_url)]
        feed_url: Option<String>,

        /// Output file path; prints to stdout when omitted
        #[arg(short, long, value_parser = validate_output_file)]
        output: Option<PathBuf>,
    },

    /// Derive SEO metadata (title, description, canonical URL) for a page
    Seo {
        /// URL-safe page slug (letters, digits, hyphens)
        #[arg(short, long)]
        slug: String,

        /// Raw page title
        #[arg(short, long)]
        title: String,

        /// Page excerpt the meta description is derived from
        #[arg(short, long, default_value = "")]
        excerpt: String,

        /// Comma-separated page tags
        #[arg(long, default_value = "")]
        tags: String,

        /// Site base URL for the canonical link
        #[arg(short, long, value_parser = validate_url)]
        base_url: String,
    },
}

fn parse_platform(s: &str) -> Result<Platform, String> {
    s.parse::<Platform>()
}

fn validate_url(s: &str) -> Result<String, String> {
    url::Url::parse(s)
        .map(|_| s.to_string())
        .map_err(|e| format!("Invalid URL: {}", e))
}

fn validate_output_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if path.exists() && path.is_dir() {
        return Err(format!("Output path is a directory: {}", path.display()));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        return Err(format!(
            "Output file parent directory does not exist: {}",
            parent.display()
        ));
    }

    Ok(path)
}

fn main() {
    setup_logging("core_ttx=info");

    let cli = SiteCli::parse();

    match &cli.command {
        Commands::Compose {
            allow,
            disallow,
            platform,
            feed_url,
            output,
        } => {
            let mut session = GeneratorSession::new();

            if let Some(platform) = platform {
                session.select_platform(*platform);
            }
            if let Some(allow) = allow {
                session.set_product_paths(allow);
            }
            if let Some(disallow) = disallow {
                session.set_disallow_paths(disallow);
            }
            if let Some(feed_url) = feed_url {
                session.set_product_feed_url(feed_url);
            }

            let composed = session.preview();
            for warning in &composed.warnings {
                tracing::warn!("{}", warning);
            }

            match output {
                Some(path) => {
                    if let Err(e) = std::fs::write(path, &composed.text) {
                        println!("ERROR: Cannot write file ({path:?}) due to: {e:?}");
                        std::process::exit(1)
                    }
                    println!("Wrote llms.txt rules to {}", path.display());
                }
                None => print!("{}", composed.text),
            }
        }

        Commands::Seo {
            slug,
            title,
            excerpt,
            tags,
            base_url,
        } => {
            let input = SeoInput {
                slug: slug.clone(),
                title: title.clone(),
                excerpt: excerpt.clone(),
                tags: tags
                    .split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(str::to_string)
                    .collect(),
            };

            match derive_page_metadata(&input, base_url) {
                Ok(meta) => {
                    println!("Title: {}", meta.title);
                    println!("Description: {}", meta.description);
                    println!("Canonical: {}", meta.canonical_url);
                    if !meta.keywords.is_empty() {
                        println!("Keywords: {}", meta.keywords);
                    }
                }
                Err(e) => {
                    println!("ERROR: {}", e);
                    std::process::exit(1)
                }
            }
        }
    }
}
