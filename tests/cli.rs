//! Binary-level tests for the CLI contract: exit codes, the usage message,
//! and the skip-and-continue behavior for unreadable or wrong-sized files.

use anyhow::{Context, Result, ensure};
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

const BSP_SIZE: usize = 0x25c;

fn run_paddock<I, S>(args: I) -> Result<Output>
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_paddock"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .context("Spawning paddock binary")
}

fn write_fixture(dir: &tempfile::TempDir, name: &str, len: usize) -> Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, vec![0u8; len]).with_context(|| format!("Writing {}", path.display()))?;
    Ok(path)
}

#[test]
fn zero_arguments_prints_usage_and_exits_1() -> Result<()> {
    let output = run_paddock(Vec::<String>::new())?;

    ensure!(output.status.code() == Some(1), "Expected exit 1, got {:?}", output.status.code());
    let stderr = String::from_utf8(output.stderr)?;
    ensure!(stderr.contains("Usage: paddock FILES..."), "Missing usage line, got: {stderr}");
    ensure!(output.stdout.is_empty(), "Nothing should be written to stdout");
    Ok(())
}

#[test]
fn valid_file_dumps_every_group_and_exits_0() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_fixture(&dir, "mb_kart.bsp", BSP_SIZE)?;

    let output = run_paddock([&path])?;

    ensure!(output.status.code() == Some(0), "Expected exit 0, got {:?}", output.status.code());
    let stdout = String::from_utf8(output.stdout)?;
    ensure!(
        stdout.contains("\x1b[1mWild Wing\x1b[0m (mb_kart.bsp):"),
        "Header should name the resolved vehicle, got: {stdout}"
    );
    ensure!(stdout.contains("Hitbox 15 enable: 0\n"), "All hitbox groups should be present");
    ensure!(stdout.ends_with("Unknown 0x258: 0.000000\n"), "Dump should run to the last field");
    Ok(())
}

#[test]
fn bad_files_are_skipped_silently_without_affecting_status() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let good_first = write_fixture(&dir, "sa_kart.bsp", BSP_SIZE)?;
    let wrong_size = write_fixture(&dir, "truncated.bsp", BSP_SIZE - 1)?;
    let missing = dir.path().join("missing.bsp");
    let good_last = write_fixture(&dir, "se_bike.bsp", BSP_SIZE)?;

    let output = run_paddock([&good_first, &wrong_size, &missing, &good_last])?;

    ensure!(output.status.code() == Some(0), "Expected exit 0, got {:?}", output.status.code());
    ensure!(output.stderr.is_empty(), "Skipped files should produce no diagnostics");

    let stdout = String::from_utf8(output.stdout)?;
    ensure!(stdout.contains("(sa_kart.bsp):"), "File before the bad ones should be dumped");
    ensure!(stdout.contains("(se_bike.bsp):"), "File after the bad ones should be dumped");
    ensure!(!stdout.contains("truncated.bsp"), "Wrong-sized file should emit nothing");
    ensure!(!stdout.contains("missing.bsp"), "Unreadable file should emit nothing");
    Ok(())
}

#[test]
fn wrong_size_alone_still_exits_0_with_no_output() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let oversized = write_fixture(&dir, "oversized.bsp", BSP_SIZE + 1)?;

    let output = run_paddock([&oversized])?;

    ensure!(output.status.code() == Some(0), "Expected exit 0, got {:?}", output.status.code());
    ensure!(output.stdout.is_empty(), "No field should be emitted for a rejected file");
    Ok(())
}
