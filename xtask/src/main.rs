//! Build helpers: man pages and shell completions.
//!
//! ```text
//! cargo xtask man [--out-dir target/man]
//! cargo xtask completions [--out-dir target/completions]
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "resume-match build helpers")]
struct Xtask {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for the CLI and each subcommand
    Man {
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        #[arg(long, default_value = "target/completions")]
        out_dir: PathBuf,
        /// Only generate for these shells (default: all)
        #[arg(long, value_enum)]
        shell: Vec<Shell>,
    },
}

fn main() -> io::Result<()> {
    match Xtask::parse().command {
        Task::Man { out_dir } => man(&out_dir),
        Task::Completions { out_dir, shell } => completions(&out_dir, &shell),
    }
}

fn man(out_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(out_dir)?;
    let cmd = resume_match::command();

    clap_mangen::generate_to(cmd, out_dir)?;
    println!("man pages written to {}", out_dir.display());
    Ok(())
}

fn completions(out_dir: &Path, shells: &[Shell]) -> io::Result<()> {
    fs::create_dir_all(out_dir)?;
    let shells = if shells.is_empty() {
        Shell::value_variants()
    } else {
        shells
    };

    for shell in shells {
        let mut cmd = resume_match::command();
        let path = clap_complete::generate_to(*shell, &mut cmd, "resume-match", out_dir)?;
        println!("{}", path.display());
    }
    Ok(())
}
