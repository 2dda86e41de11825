//! Generate man pages for wavrec.
//!
//! Run with: cargo run --bin gen-man [OUT_DIR]
//! Man pages are written to `man/` unless another directory is given.

use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn render(cmd: clap::Command, out: PathBuf) -> std::io::Result<()> {
    let mut buffer = Vec::new();
    Man::new(cmd).render(&mut buffer)?;
    fs::write(&out, buffer)?;
    println!("Generated: {}", out.display());
    Ok(())
}

fn main() -> std::io::Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("man"));
    fs::create_dir_all(&out_dir)?;

    let cmd = wavrec::Cli::cmd();
    render(cmd.clone(), out_dir.join("wavrec.1"))?;

    for subcommand in cmd.get_subcommands() {
        let page = format!("wavrec-{}.1", subcommand.get_name());
        render(subcommand.clone(), out_dir.join(page))?;
    }

    println!("\nInstall with: sudo cp {}/*.1 /usr/local/share/man/man1/", out_dir.display());
    Ok(())
}
