use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;
use vibe::{AppError, GenerateOptions, GuidelinesSource};

#[derive(Parser)]
#[command(name = "vibe")]
#[command(version)]
#[command(
    about = "Generate architecture.md, tasks.md, agents.md and initial_prompt.md for a project",
    long_about = None
)]
struct Cli {
    /// Directory to write the generated documents into
    output_dir: PathBuf,
    /// File containing the product description
    product_file: PathBuf,
    /// File containing the list of tools
    tools_file: PathBuf,
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Draft documents offline instead of calling the completion service
    #[arg(long)]
    mock: bool,
    /// Fail if the agents.md template is missing instead of using the built-in one
    #[arg(long)]
    require_guidelines: bool,
}

fn main() {
    vibe::logging::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if cli.mock {
        println!("=== MOCK MODE ===");
    }

    let options = GenerateOptions {
        output_dir: cli.output_dir,
        product_file: cli.product_file,
        tools_file: cli.tools_file,
        config_path: cli.config,
        mock: cli.mock,
        require_guidelines: cli.require_guidelines,
    };

    let result: Result<(), AppError> = vibe::generate(&options).map(|outcome| {
        println!("\nMarkdown files generated successfully.");
        println!("\nFiles created in {}:", outcome.output_dir.display());
        for path in &outcome.written {
            if let Some(name) = path.file_name() {
                println!("  - {}", name.to_string_lossy());
            }
        }
        if outcome.guidelines_source == GuidelinesSource::Fallback {
            println!("\nNo agents.md template found; wrote the built-in guidelines.");
        }
        println!("\nNext steps:");
        println!("1. Review and refine the generated content");
        println!("2. Use these files with your AI coding assistant");
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
