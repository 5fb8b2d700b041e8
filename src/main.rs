use clap::{Parser, Subcommand};
use settlement_site::{config, content, generate, output, site::Site};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup
        Box::leak(format!("{}@{hash}", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "settlement-site")]
#[command(about = "Static landing page generator for a housing development")]
#[command(long_about = "\
Static landing page generator for a housing development

Content structure:

  content/
  ├── config.toml        # Brand colors, gallery, locale (optional)
  ├── content.toml       # Houses, contacts, partners, FAQ... (optional, stock content if absent)
  └── assets/            # Photos and logos → copied to <output>/assets/
      ├── settlement/01.jpg
      ├── houses/123/cover.jpg
      └── logos/paradom.png

Links are only rendered when they start with http://, https://, tel: or
mailto:. Empty or invalid values hide their button; run 'check' to see which.

Run 'settlement-site gen-config' / 'gen-content' for documented starting files.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the page and copy assets
    Build,
    /// Validate config and content, list houses, galleries and link status
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print the stock content.toml
    GenContent,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Loading {}", cli.source.display());
            let site = Site::load(&cli.source)?;
            println!("==> Generating HTML → {}", cli.output.display());
            let report = generate::generate(&site, &cli.source, &cli.output)?;
            output::print_generate_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site = Site::load(&cli.source)?;
            output::print_check_output(&site);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::GenContent => {
            print!("{}", content::stock_content_toml());
        }
    }

    Ok(())
}
