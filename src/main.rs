use clap::{Parser, Subcommand};
use icon_manifest::{config, output, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "icon-manifest")]
#[command(about = "Manifest generator for categorized SVG icon sets")]
#[command(long_about = "\
Manifest generator for categorized SVG icon sets

Your filesystem is the data source. Each immediate subdirectory of the icon
root is a category; files inside it with the recognized extension become
icon records in the output manifest.

Icon root structure:

  Icons/
  ├── Compute/                         # Category
  │   ├── 7-icon-service-vm.svg        # Record: name \"vm\"
  │   └── 42-icon-service-compute.svg  # Record: name \"compute\"
  ├── Database/
  │   ├── 1-icon-service-sql.svg
  │   └── readme.txt                   # Wrong suffix: ignored
  └── Network/                         # Empty category: [] in the manifest

Name derivation (fixed rule, no general cleanup):
  42-icon-service-compute.svg  →  \"compute\"
  logo.svg                     →  \"logo\"

Run 'icon-manifest gen-config' to generate a documented icon-manifest.toml.")]
#[command(version)]
struct Cli {
    /// Icon root directory (overrides config)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Output manifest path (overrides config)
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Config file (default: icon-manifest.toml in the working directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the icon root and write the manifest (default)
    Build,
    /// Scan and print the inventory without writing anything
    Check,
    /// Print a stock icon-manifest.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let config = config::load_config(cli.config.as_deref())?;
            let root = cli.root.unwrap_or_else(|| PathBuf::from(&config.root_dir));
            let out = cli
                .out
                .unwrap_or_else(|| PathBuf::from(&config.output_path));

            let manifest = scan::scan(&root, &config)?;
            manifest.write(&out)?;
            println!("Generated {}", out.display());
        }
        Command::Check => {
            let config = config::load_config(cli.config.as_deref())?;
            let root = cli.root.unwrap_or_else(|| PathBuf::from(&config.root_dir));

            println!("==> Checking {}", root.display());
            let manifest = scan::scan(&root, &config)?;
            output::print_scan_output(&manifest);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
