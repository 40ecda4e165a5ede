use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod config;
mod error;
mod icon_gen;
mod targets;

use config::Config;
use error::IconError;

#[derive(Debug, Parser)]
#[clap(
    name = "pwa-icons",
    version,
    about = "Resize public/logoimage.png into the PWA icon sizes"
)]
struct Args {
    /// Directory holding logoimage.png; icons are written next to it.
    /// Defaults to the `public` directory beside the one containing this tool.
    #[clap(long, value_name = "DIR", env = "PWA_ICONS_PUBLIC_DIR")]
    public_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match Config::resolve(args.public_dir) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("✗ Error: {err:#}");
            return ExitCode::from(1);
        }
    };

    match icon_gen::generate(&config) {
        Ok(_) => {
            print_next_steps(&config);
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_failure(&err);
            ExitCode::from(1)
        }
    }
}

fn print_next_steps(config: &Config) {
    let icons: Vec<String> = config
        .targets
        .iter()
        .map(|target| config.output_dir.join(target.filename).display().to_string())
        .collect();

    println!("\n✓ All icons generated successfully!");
    println!("\nNext steps:");
    println!("1. Check {}", icons.join(" and "));
    println!("2. Run: npm run dev");
    println!("3. Test the app at http://localhost:3000");
}

fn report_failure(err: &IconError) {
    eprintln!("✗ Error: {err}");
    eprintln!("\nTroubleshooting:");
    for hint in err.troubleshooting() {
        eprintln!("- {hint}");
    }
}
