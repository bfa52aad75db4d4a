use adapter_gen::cmds;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "adapter-gen")]
#[command(about = "JSON adapter generation tool for builder-style value types", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /* Generate adapters from descriptor files */
    Codegen {
        /* Input YAML files containing target descriptors */
        #[arg(short = 'f', long = "files", value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /* Include directories for imported descriptor files */
        #[arg(short = 'i', long = "include-dir", value_name = "DIR")]
        include_dirs: Vec<PathBuf>,

        /* Output directory for generated code */
        #[arg(
            short = 'o',
            long = "output",
            value_name = "DIR",
            default_value = "generated"
        )]
        output_dir: PathBuf,

        /* Enable verbose output */
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,
    },

    /* Show discovered shapes, bindings, and classifications */
    Analyze {
        /* Input YAML files containing target descriptors */
        #[arg(short = 'f', long = "files", value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /* Include directories for imported descriptor files */
        #[arg(short = 'i', long = "include-dir", value_name = "DIR")]
        include_dirs: Vec<PathBuf>,

        /* Enable verbose output */
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Codegen {
            files,
            include_dirs,
            output_dir,
            verbose,
        } => {
            cmds::codegen::run(files, include_dirs, output_dir, verbose)?;
        }

        Commands::Analyze {
            files,
            include_dirs,
            verbose,
        } => {
            cmds::analyze::run(files, include_dirs, verbose)?;
        }
    }

    Ok(())
}
