use clap::{Parser, Subcommand};
use focal::{config, discover, engine, output};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

#[derive(Parser)]
#[command(name = "focal")]
#[command(about = "Static site generator for photo blogs")]
#[command(long_about = "\
Static site generator for photo blogs

Your filesystem is the data source. Each folder under the images root is one
post: the first recognized image file (by name) is the photo, and an optional
meta.yml supplies the title, posted timestamp, location, comments, and tags.

Content structure:

  config.toml                    # Site config (optional — defaults apply)
  images/
  ├── 2018-05-12-golden-gate/    # One post
  │   ├── dsc0001.jpg            # The photo
  │   └── meta.yml               # Optional metadata
  └── sunset/
      └── sunset.png
  templates/
  ├── pages/index.html           # Rendered once with every post
  ├── post.html                  # Rendered per post into <slug>/index.html
  └── partials/header.html       # Available via {% include \"header.html\" %}

Posts render in folder-name order; date-prefixed folder names give
chronological prev/next links for free.

Run 'focal gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Path to the site configuration file
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Discover posts and write the full site to the output directory
    Build,
    /// Validate content and print the post inventory without writing output
    Check,
    /// Discover posts and print the manifest as JSON
    Scan,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Command::Build => {
            println!("==> Building {}", cfg.images_or_default().display());
            let (tx, rx) = mpsc::channel();
            let printer = thread::spawn(move || {
                for event in rx {
                    println!("{}", output::format_event(&event));
                }
            });
            let sink = Some(tx);
            let result = engine::generate(&cfg, &sink);
            drop(sink);
            printer.join().unwrap();
            result?;
            println!("==> Site generated at {}", cfg.output_or_default().display());
        }
        Command::Check => {
            let posts = discover::discover_posts(
                &cfg.images_or_default(),
                &cfg.extensions_or_default(),
            )?;
            output::print_check_output(&posts);
            println!("==> Content is valid");
        }
        Command::Scan => {
            let posts = discover::discover_posts(
                &cfg.images_or_default(),
                &cfg.extensions_or_default(),
            )?;
            println!("{}", serde_json::to_string_pretty(&posts)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
