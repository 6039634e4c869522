//! CLI command for looking at a stylesheet's mappings

use std::io::{self, Write};
use std::path::Path;

use crate::cli::progress::{LOOKING_GLASS, format_step};
use crate::stylesheet::{IconMap, parse_stylesheet};

/// Print every glyph and color mapping found in a stylesheet
///
/// `quiet` drops the step line; the mappings are the command's output and
/// are always printed.
pub fn execute(stylesheet: &Path, quiet: bool) -> anyhow::Result<()> {
    inspect_to(&mut io::stdout().lock(), stylesheet, quiet)
}

fn inspect_to<W: Write>(out: &mut W, stylesheet: &Path, quiet: bool) -> anyhow::Result<()> {
    if !quiet {
        writeln!(
            out,
            "{}",
            format_step(1, 1, LOOKING_GLASS, &format!("Parsing {}", stylesheet.display()))
        )?;
    }
    let icons = parse_stylesheet(stylesheet)?;
    write_mappings(out, &icons)?;
    Ok(())
}

fn write_mappings<W: Write>(out: &mut W, icons: &IconMap) -> io::Result<()> {
    writeln!(out, "\nGlyphs ({}):", icons.glyph_count())?;
    for entry in icons.icons() {
        writeln!(out, "  {} -> {}", entry.name, entry.glyph_code)?;
    }

    writeln!(out, "\nColors ({}):", icons.color_count())?;
    for entry in icons.color_entries() {
        writeln!(out, "  {} -> {}", entry.key, entry.color_value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stylesheet::parse_stylesheet_str;

    #[test]
    fn test_write_mappings() {
        let icons = parse_stylesheet_str(
            ".icon-home:before {\n  content: \"\\e901\";\n  color: #ff0000;\n}\n",
        );
        let mut out = Vec::new();
        write_mappings(&mut out, &icons).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nGlyphs (1):\n  home -> e901\n\nColors (1):\n  home_color -> #ff0000\n"
        );
    }

    #[test]
    fn test_quiet_drops_step_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.css");
        std::fs::write(&path, ".icon-a:before {\n  content: \"\\e901\";\n}\n").unwrap();

        let mut quiet = Vec::new();
        inspect_to(&mut quiet, &path, true).unwrap();
        assert_eq!(
            String::from_utf8(quiet).unwrap(),
            "\nGlyphs (1):\n  a -> e901\n\nColors (0):\n"
        );

        let mut loud = Vec::new();
        inspect_to(&mut loud, &path, false).unwrap();
        let loud = String::from_utf8(loud).unwrap();
        assert!(loud.contains("[1/1]"), "{loud}");
        assert!(loud.contains("Parsing"), "{loud}");
        assert!(loud.ends_with("\nGlyphs (1):\n  a -> e901\n\nColors (0):\n"));
    }
}
