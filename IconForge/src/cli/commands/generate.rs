//! CLI commands for the two generation flows

use std::path::Path;
use std::time::Instant;

use crate::cli::progress::{
    BROOM, GEAR, PACKAGE, TRUCK, print_done, print_output, print_step, simple_spinner,
};
use crate::config::ProjectConfig;
use crate::convert::{clean_temp_dir, extract_archive, upload_archive, zip_svg_sources};
use crate::pipeline::{FontSources, GenerateReport, OutputLayout, extract_dir, generate};
use crate::topic::Topic;

fn print_report(report: &GenerateReport) {
    print_output(
        &format!("{} glyphs, {} colors", report.glyph_count, report.color_count),
        &report.resource_path,
    );
    print_output("font", &report.font_path);
}

/// Generate from a bundle downloaded by hand
pub fn manual(topic: &Topic, input: &Path, config: &ProjectConfig, quiet: bool) -> anyhow::Result<()> {
    let start = Instant::now();
    let sources = FontSources::from_bundle(input)?;

    if !quiet {
        print_step(1, 1, GEAR, &format!("Generating '{topic}' from {}", input.display()));
    }
    let report = generate(&sources, topic, &OutputLayout::from(&config.paths))?;

    if !quiet {
        print_report(&report);
        print_done(start.elapsed());
    }
    Ok(())
}

/// Pack SVGs, convert them remotely, then generate from the result
pub fn auto(topic: &Topic, delete: bool, config: &ProjectConfig, quiet: bool) -> anyhow::Result<()> {
    let start = Instant::now();
    let paths = &config.paths;
    let total = if delete { 5 } else { 4 };
    let step = |n, emoji, msg: &str| {
        if !quiet {
            print_step(n, total, emoji, msg);
        }
    };

    step(1, PACKAGE, &format!("Packing SVG sources for '{topic}'..."));
    let zip_path = zip_svg_sources(&paths.svg_dir, topic, &paths.temp_dir)?;

    step(2, TRUCK, &format!("Converting via {}...", config.convert.endpoint));
    let spinner = (!quiet).then(|| simple_spinner("waiting for conversion service"));
    let uploaded = upload_archive(&zip_path, &config.convert.endpoint, &paths.temp_dir);
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let downloaded = uploaded?;

    step(3, PACKAGE, "Unpacking icon font...");
    let extracted = extract_archive(&downloaded, extract_dir(&paths.temp_dir))?;

    step(4, GEAR, "Generating resources...");
    let report = generate(
        &FontSources::from_converted(&extracted),
        topic,
        &OutputLayout::from(paths),
    )?;

    if delete {
        step(5, BROOM, "Removing temporary files...");
        clean_temp_dir(&paths.temp_dir)?;
    }

    if !quiet {
        print_report(&report);
        print_done(start.elapsed());
    }
    Ok(())
}
