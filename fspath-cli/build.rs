//! Build script for fspath-cli.
//!
//! Generates `fspath.1` and one `fspath-<command>.1` page per subcommand
//! into OUT_DIR/man with clap_mangen.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is restated here.

use clap::{Arg, ArgAction, ArgGroup, Command};
use clap_mangen::Man;
use std::fs;
use std::path::{Path, PathBuf};

/// Keep synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("fspath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect filesystem paths")
        .long_about(
            "Build normalized filesystem paths from segments and query their parent, \
             extension, status and contents",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format (human, json, yaml)")
                .value_name("FORMAT")
                .global(true),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Override the user configuration directory")
                .value_name("PATH")
                .global(true)
                .env("FSPATH_CONFIG_DIR"),
        )
        .subcommands(vec![
            Command::new("info")
                .about("Show everything known about a path")
                .long_about("Print the normalized path, its parent, extension and status")
                .arg(segments(false)),
            Command::new("cat")
                .about("Print a file's text or a directory's entries")
                .long_about("Print a regular file verbatim, or list a directory")
                .arg(segments(true)),
            Command::new("ls")
                .about("List directory entries")
                .long_about("List a directory, optionally sorted and including hidden entries")
                .arg(segments(false))
                .arg(flag("sort", "Sort entries by name"))
                .arg(
                    flag("all", "Include entries whose names start with a dot").short('a'),
                ),
            Command::new("parent")
                .about("Print the parent directory of a path")
                .long_about("Print the parent, or with --levels a more distant ancestor")
                .arg(segments(false))
                .arg(
                    Arg::new("levels")
                        .long("levels")
                        .short('n')
                        .help("How many levels to climb")
                        .value_name("N")
                        .default_value("1"),
                ),
            Command::new("check")
                .about("Check a path predicate through the exit code")
                .long_about("Exit 0 when --exists, --dir, --file or --symlink holds, 1 otherwise")
                .arg(segments(true))
                .arg(flag("exists", "The path resolves to an existing entry"))
                .arg(flag("dir", "The path resolves to a directory"))
                .arg(flag("file", "The path resolves to a regular file"))
                .arg(flag("symlink", "The path itself is a symbolic link"))
                .group(
                    ArgGroup::new("predicate")
                        .args(["exists", "dir", "file", "symlink"])
                        .required(true)
                        .multiple(false),
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .value_name("SHELL")
                        .required(true),
                ),
        ])
}

fn segments(required: bool) -> Arg {
    Arg::new("segments")
        .help("Path segments, joined in order")
        .value_name("SEGMENT")
        .num_args(usize::from(required)..)
        .required(required)
}

fn flag(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .action(ArgAction::SetTrue)
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let cli = build_cli();
    render(cli.clone(), &man_dir.join("fspath.1"))?;

    // One page per subcommand so its arguments are documented
    for sub in cli.get_subcommands() {
        let title = format!("fspath-{}", sub.get_name());
        let path = man_dir.join(format!("{title}.1"));
        render_titled(sub.clone(), title, &path)?;
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}

fn render(cmd: Command, path: &Path) -> std::io::Result<()> {
    let mut buffer = Vec::new();
    Man::new(cmd).render(&mut buffer)?;
    fs::write(path, buffer)
}

fn render_titled(cmd: Command, title: String, path: &Path) -> std::io::Result<()> {
    let mut buffer = Vec::new();
    Man::new(cmd).title(title).render(&mut buffer)?;
    fs::write(path, buffer)
}
