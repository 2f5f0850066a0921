use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;
use std::path::PathBuf;

use pixelveil::validate::is_lossy_format;
use pixelveil::{hide, reveal};

#[derive(Parser, Debug)]
#[command(author, version, about = "Hide and reveal encrypted messages inside images", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hide a secret message inside an image
    Encode {
        /// Path to the cover image
        #[arg(short, long)]
        image: PathBuf,
        /// Message to hide
        #[arg(short, long)]
        text: String,
        /// Where to write the encoded image
        #[arg(short, long)]
        output: PathBuf,
        /// Password protecting the message
        #[arg(short, long)]
        password: String,
    },
    /// Extract a hidden message from an encoded image
    Decode {
        /// Path to the encoded image
        #[arg(short, long)]
        image: PathBuf,
        /// Password the message was hidden with
        #[arg(short, long)]
        password: String,
    },
}

fn init_logger() {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(LevelFilter::Info)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let cli = Cli::parse();

    match cli.command {
        Command::Encode {
            image,
            text,
            output,
            password,
        } => {
            if is_lossy_format(&output) {
                log::warn!(
                    "{} is a lossy format; saving will destroy the hidden message, use png instead",
                    output.display()
                );
            }
            hide(&image, &text, &password, &output)?;
            println!("Message hidden in {}", output.display());
        }
        Command::Decode { image, password } => {
            let message = reveal(&image, &password)?;
            println!("{message}");
        }
    }

    Ok(())
}
