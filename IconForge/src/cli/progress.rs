//! CLI progress display utilities
//!
//! Step indicators with emojis and a spinner for the network round trip.

use std::time::Duration;

use console::{Emoji, style};
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};

// =============================================================================
// Emoji Constants (with ASCII fallbacks for terminals without emoji support)
// =============================================================================

/// Magnifying glass - for reading/scanning operations
pub static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
/// Package - for archive packing/unpacking
pub static PACKAGE: Emoji<'_, '_> = Emoji("📦 ", "");
/// Truck - for upload/download
pub static TRUCK: Emoji<'_, '_> = Emoji("🚚 ", "");
/// Gear - for generation
pub static GEAR: Emoji<'_, '_> = Emoji("⚙️  ", "");
/// Broom - for cleanup
pub static BROOM: Emoji<'_, '_> = Emoji("🧹 ", "");
/// Document - for written files
pub static DOCUMENT: Emoji<'_, '_> = Emoji("📄 ", "");
/// Sparkles - for completion
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

/// Print a step indicator: `[1/3] 📦 Message...`
///
/// # Example
/// ```ignore
/// print_step(1, 3, PACKAGE, "Packing SVG sources...");
/// print_step(2, 3, TRUCK, "Uploading...");
/// print_step(3, 3, GEAR, "Generating resources...");
/// ```
pub fn print_step(current: usize, total: usize, emoji: Emoji, msg: &str) {
    println!("{}", format_step(current, total, emoji, msg));
}

/// The line [`print_step`] prints, for callers writing somewhere else
#[must_use]
pub fn format_step(current: usize, total: usize, emoji: Emoji, msg: &str) -> String {
    format!(
        "{} {}{}",
        style(format!("[{current}/{total}]")).bold().dim(),
        emoji,
        msg
    )
}

/// Print a written file: `  📄 label -> path`
pub fn print_output(label: &str, path: &std::path::Path) {
    println!("      {}{} -> {}", DOCUMENT, label, style(path.display()).cyan());
}

/// Print completion message: `✨ Done in 2s`
pub fn print_done(elapsed: Duration) {
    println!("{} Done in {}", SPARKLE, HumanDuration(elapsed));
}

/// Create a simple spinner
///
/// # Panics
/// Panics if the template string is invalid (this is a compile-time constant).
#[must_use]
pub fn simple_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .expect("valid template"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
