//! CLI commands for ART bank operations

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::art::{ArtExtractionOptions, ArtOperations, ArtPhase, batch_extract, find_art_files};
use crate::cli::progress::{DISK, LOOKING_GLASS, PACKAGE, print_done, print_step, simple_bar};

/// List the entries of a bank
pub fn list(source: &Path, json: bool) -> anyhow::Result<()> {
    let entries = ArtOperations::list(source)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("ART bank: {} ({} entries)", source.display(), entries.len());
    for entry in &entries {
        match &entry.texture {
            Some(texture) => println!(
                "  {:<12} {:>10} {:>10}  {} {}x{}",
                entry.name, entry.offset, entry.size, texture.kind, texture.width, texture.height
            ),
            None => println!("  {:<12} {:>10} {:>10}", entry.name, entry.offset, entry.size),
        }
    }

    Ok(())
}

/// Extract bank(s); directories are searched for banks
pub fn extract(
    sources: &[PathBuf],
    destination: &Path,
    png: bool,
    keep_original: bool,
    quiet: bool,
) -> anyhow::Result<()> {
    let options = ArtExtractionOptions::new()
        .with_convert_to_png(png)
        .with_keep_original(keep_original);

    for source in sources {
        if source.is_dir() {
            extract_dir(source, destination, options, quiet);
        } else {
            extract_one(source, destination, options, quiet)?;
        }
    }

    Ok(())
}

fn extract_one(
    source: &Path,
    destination: &Path,
    options: ArtExtractionOptions,
    quiet: bool,
) -> anyhow::Result<()> {
    if quiet {
        ArtOperations::extract_with_options(source, destination, options, &|_| {})?;
        return Ok(());
    }

    let started = Instant::now();
    print_step(1, 2, LOOKING_GLASS, &format!("Reading {}", source.display()));
    let pb = simple_bar(0, "Extracting");
    let dest = ArtOperations::extract_with_options(source, destination, options, &|progress| {
        if progress.phase == ArtPhase::WritingEntries {
            pb.set_length(progress.total as u64);
            pb.inc(1);
            if let Some(name) = &progress.current_file {
                pb.set_message(name.clone());
            }
        }
    })?;
    pb.finish_and_clear();
    print_step(2, 2, DISK, &format!("Wrote entries to {}", dest.display()));
    print_done(started.elapsed());

    Ok(())
}

fn extract_dir(source: &Path, destination: &Path, options: ArtExtractionOptions, quiet: bool) {
    let banks = find_art_files(source);
    if banks.is_empty() {
        println!("No ART files found in: {}", source.display());
        return;
    }

    if !quiet {
        println!("Found {} ART files to extract", banks.len());
    }
    let pb = simple_bar(banks.len() as u64, "Extracting");
    if quiet {
        pb.set_draw_target(indicatif::ProgressDrawTarget::hidden());
    }

    let result = batch_extract(&banks, source, destination, options, |progress| {
        pb.set_position(progress.current as u64);
        if let Some(ref name) = progress.current_file {
            pb.set_message(name.clone());
        }
    });
    pb.finish_and_clear();

    println!("Extraction complete:");
    println!("  Success: {}", result.success_count);
    println!("  Failed: {}", result.fail_count);
    if result.fail_count > 0 {
        for message in result.results.iter().filter(|m| m.starts_with("Failed")) {
            println!("  {message}");
        }
    }
}

/// Create a bank from a directory
pub fn create(source: &Path, destination: &Path, quiet: bool) -> anyhow::Result<()> {
    if quiet {
        ArtOperations::create(source, destination)?;
        return Ok(());
    }

    let started = Instant::now();
    print_step(1, 1, PACKAGE, &format!("Packing {}", source.display()));
    ArtOperations::create(source, destination)?;
    println!("Created {}", destination.display());
    print_done(started.elapsed());

    Ok(())
}

/// Find all banks in a directory
pub fn find(dir: &Path) -> anyhow::Result<()> {
    let banks = find_art_files(dir);

    if banks.is_empty() {
        println!("No ART files found in: {}", dir.display());
    } else {
        println!("Found {} ART files:", banks.len());
        for bank in &banks {
            let display = bank.strip_prefix(dir).unwrap_or(bank.as_path()).display();
            println!("  {display}");
        }
    }

    Ok(())
}
