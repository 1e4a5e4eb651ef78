//! Workspace-wide quality checks.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use owo_colors::OwoColorize;
use xshell::{Shell, cmd};

/// Library crates whose `src/` trees must be free of `unwrap`/`expect`.
const LIBRARY_CRATES: [&str; 3] = ["pose/pose-types", "pose/pose-source", "rula/rula-engine"];

/// Crates that carry a `serde` feature.
const SERDE_CRATES: [&str; 2] = ["pose-types", "rula-engine"];

type Step = (&'static str, fn(&Shell) -> Result<()>);

const STEPS: [Step; 5] = [
    ("Formatting", run_fmt_check),
    ("Clippy", run_clippy),
    ("Tests", run_tests),
    ("Documentation", run_doc_check),
    ("Safety", run_safety_scan),
];

/// Runs every step. In CI mode any failure exits non-zero.
pub fn run(ci_mode: bool) -> Result<()> {
    let sh = Shell::new()?;

    println!();
    println!("{}", "Ergoscope Quality Check".bold());
    println!("{}", "=======================".bold());
    println!();

    let mut failures = Vec::new();
    for (i, (name, step)) in STEPS.iter().enumerate() {
        println!(
            "{}",
            format!("Step {}/{}: {name}...", i + 1, STEPS.len()).cyan()
        );
        match step(&sh) {
            Ok(()) => println!("  {} {name}", "✓".green()),
            Err(e) => {
                println!("  {} {name} - {e:#}", "✗".red());
                failures.push(format!("{name}: {e}"));
            }
        }
    }

    println!();
    if failures.is_empty() {
        println!("{}", "✓ All checks passed".green().bold());
        return Ok(());
    }

    println!("Failures:");
    for f in &failures {
        println!("  - {}", f.red());
    }
    if ci_mode {
        println!("{}", "✗ CI FAILED".red().bold());
        std::process::exit(1);
    }
    println!("{}", "⚠ Some checks failed. Fix before committing.".yellow());
    Ok(())
}

/// Runs only the unwrap/expect scan.
pub fn safety_only() -> Result<()> {
    let sh = Shell::new()?;
    run_safety_scan(&sh)?;
    println!("{} No unwrap/expect in library code", "✓".green());
    Ok(())
}

fn run_fmt_check(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo fmt --all -- --check")
        .run()
        .context("formatting check failed")
}

fn run_clippy(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo clippy --workspace --all-targets --all-features -- -D warnings")
        .run()
        .context("clippy reported warnings")
}

fn run_tests(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo test --workspace")
        .run()
        .context("tests failed with default features")?;
    for krate in SERDE_CRATES {
        cmd!(sh, "cargo test -p {krate} --features serde")
            .run()
            .with_context(|| format!("tests failed for {krate} with serde"))?;
    }
    Ok(())
}

fn run_doc_check(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo doc --workspace --no-deps --all-features")
        .env("RUSTDOCFLAGS", "-D warnings")
        .run()
        .context("documentation build failed")
}

fn run_safety_scan(sh: &Shell) -> Result<()> {
    let root = sh.current_dir();
    let mut violations = Vec::new();

    for krate in LIBRARY_CRATES {
        for file in rust_files(&root.join(krate).join("src"))? {
            let text = fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            for (line_no, line) in library_lines(&text) {
                if line.contains(".unwrap()") || line.contains(".expect(") {
                    violations.push(format!("{}:{line_no}", file.display()));
                }
            }
        }
    }

    if !violations.is_empty() {
        for v in &violations {
            println!("    {}", v.dimmed());
        }
        bail!(
            "found {} unwrap/expect calls in library code",
            violations.len()
        );
    }
    Ok(())
}

/// Non-comment lines that precede the file's `#[cfg(test)]` module.
fn library_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .take_while(|(_, line)| line.trim() != "#[cfg(test)]")
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim_start().starts_with("//"))
}

fn rust_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(rust_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    Ok(files)
}
