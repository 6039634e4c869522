//! Stylesheet scanning
//!
//! Icon-font services emit one rule per icon:
//!
//! ```css
//! .icon-home:before {
//!   content: "\e901";
//!   color: #ff0000;
//! }
//! ```
//!
//! Only the `content`/`color` lines directly after the selector belong to the
//! icon. The first line matching neither closes the block; it is consumed and
//! not re-tested as a selector.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use super::types::{IconMap, color_key};
use crate::error::{Error, Result};

lazy_static! {
    static ref ICON_SELECTOR: Regex =
        Regex::new(r"\.icon-([0-9a-z_\W]+):before \{").expect("valid regex");
    static ref GLYPH_CONTENT: Regex =
        Regex::new(r#"content: "\\([0-9a-f]{4})";"#).expect("valid regex");
    static ref COLOR_DECL: Regex =
        Regex::new(r"color: (#[0-9a-f]{3,8});").expect("valid regex");
}

#[derive(Debug, Default)]
enum ScanState {
    #[default]
    Outside,
    Inside(String),
}

/// Line-at-a-time scanner that accumulates an [`IconMap`]
#[derive(Debug, Default)]
pub struct StylesheetScanner {
    state: ScanState,
    map: IconMap,
}

impl StylesheetScanner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next line of the stylesheet
    pub fn feed_line(&mut self, line: &str) {
        self.state = match std::mem::take(&mut self.state) {
            ScanState::Outside => match ICON_SELECTOR.captures(line) {
                Some(caps) => ScanState::Inside(caps[1].to_string()),
                None => ScanState::Outside,
            },
            ScanState::Inside(name) => {
                if let Some(caps) = GLYPH_CONTENT.captures(line) {
                    self.record_glyph(&name, &caps[1]);
                    ScanState::Inside(name)
                } else if let Some(caps) = COLOR_DECL.captures(line) {
                    self.record_color(&name, &caps[1]);
                    ScanState::Inside(name)
                } else {
                    ScanState::Outside
                }
            }
        };
    }

    /// Stop scanning and hand over the collected mappings
    #[must_use]
    pub fn finish(self) -> IconMap {
        self.map
    }

    fn record_glyph(&mut self, name: &str, code: &str) {
        tracing::debug!("{name} -> {code}");
        if let Some(previous) = self.map.insert_glyph(name, code) {
            tracing::warn!(
                "duplicate icon '{name}': glyph {previous} replaced by {code}"
            );
        }
    }

    fn record_color(&mut self, name: &str, value: &str) {
        tracing::debug!("{} -> {value}", color_key(name));
        if let Some(previous) = self.map.insert_color(name, value) {
            tracing::warn!(
                "duplicate icon '{name}': color {previous} replaced by {value}"
            );
        }
    }
}

/// Parse a stylesheet file
///
/// Bytes that are not valid UTF-8 are replaced before matching.
///
/// # Errors
/// Returns [`Error::StylesheetNotFound`] if the file does not exist, or an IO
/// error if it cannot be read.
pub fn parse_stylesheet<P: AsRef<Path>>(path: P) -> Result<IconMap> {
    let path = path.as_ref();
    tracing::info!("Parsing stylesheet: {}", path.display());

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::StylesheetNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })?;

    // Lines are decoded lossily: stray non-UTF-8 bytes (e.g. Latin-1 in a
    // comment) only fail to match instead of aborting the parse
    let mut reader = BufReader::new(file);
    let mut scanner = StylesheetScanner::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        scanner.feed_line(line.trim_end_matches(['\n', '\r']));
    }

    let map = scanner.finish();
    tracing::info!(
        "Found {} glyphs and {} colors",
        map.glyph_count(),
        map.color_count()
    );
    Ok(map)
}

/// Parse stylesheet text already in memory
#[must_use]
pub fn parse_stylesheet_str(content: &str) -> IconMap {
    let mut scanner = StylesheetScanner::new();
    for line in content.lines() {
        scanner.feed_line(line);
    }
    scanner.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// Shared buffer the test subscriber writes formatted events into
    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` under a WARN-level subscriber and return what it logged
    fn capture_warnings<F: FnOnce()>(f: F) -> String {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = log.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    const ICOMOON_SAMPLE: &str = r#"@font-face {
  font-family: 'icomoon';
  src: url('fonts/icomoon.ttf?x1y2z3') format('truetype');
}

[class^="icon-"], [class*=" icon-"] {
  font-family: 'icomoon' !important;
  speak: never;
}

.icon-home:before {
  content: "\e901";
  color: #ff0000;
}
.icon-feed_tab_plus:before {
  content: "\e902";
}
.icon-like:before {
  color: #1a2b3c80;
  content: "\e903";
}
"#;

    #[test]
    fn test_home_example() {
        let map = parse_stylesheet_str(
            ".icon-home:before {\ncontent: \"\\e901\";\ncolor: #ff0000;\n}\n",
        );
        assert_eq!(map.glyph("home"), Some("e901"));
        assert_eq!(map.color("home"), Some("#ff0000"));
        assert_eq!(map.glyph_count(), 1);
        assert_eq!(map.color_count(), 1);
    }

    #[test]
    fn test_counts_glyphs_and_colors() {
        let map = parse_stylesheet_str(ICOMOON_SAMPLE);
        assert_eq!(map.glyph_count(), 3);
        assert_eq!(map.color_count(), 2);
        assert_eq!(map.glyph("feed_tab_plus"), Some("e902"));
        assert_eq!(map.color("feed_tab_plus"), None);
        // Color before content in the same block still counts
        assert_eq!(map.glyph("like"), Some("e903"));
        assert_eq!(map.color("like"), Some("#1a2b3c80"));
    }

    #[test]
    fn test_block_ends_at_first_unrecognized_line() {
        let map = parse_stylesheet_str(
            ".icon-a:before {\n  content: \"\\e901\";\n}\n  color: #fff;\n  content: \"\\e999\";\n",
        );
        assert_eq!(map.glyph("a"), Some("e901"));
        assert_eq!(map.color("a"), None);
        assert_eq!(map.glyph_count(), 1);
    }

    #[test]
    fn test_selector_without_declarations_yields_nothing() {
        let map = parse_stylesheet_str(".icon-empty:before {\n}\n.icon-b:before {\n  content: \"\\e902\";\n}\n");
        assert_eq!(map.glyph("empty"), None);
        assert_eq!(map.glyph("b"), Some("e902"));
    }

    #[test]
    fn test_terminating_selector_is_consumed() {
        // The second selector closes the first block and is not reopened
        let map = parse_stylesheet_str(".icon-a:before {\n.icon-b:before {\n  content: \"\\e902\";\n");
        assert!(map.is_empty());
    }

    #[test]
    fn test_color_without_content() {
        let map = parse_stylesheet_str(".icon-dot:before {\n  color: #abc;\n}\n");
        assert_eq!(map.glyph("dot"), None);
        assert_eq!(map.color("dot"), Some("#abc"));
    }

    #[test]
    fn test_duplicate_name_last_write_wins() {
        let map = parse_stylesheet_str(
            ".icon-home:before {\n  content: \"\\e901\";\n}\n.icon-home:before {\n  content: \"\\e9ff\";\n}\n",
        );
        assert_eq!(map.glyph("home"), Some("e9ff"));
        assert_eq!(map.glyph_count(), 1);
    }

    #[test]
    fn test_duplicate_name_logs_warning() {
        let output = capture_warnings(|| {
            let map = parse_stylesheet_str(
                ".icon-home:before {\n  content: \"\\e901\";\n  color: #fff;\n}\n.icon-home:before {\n  content: \"\\e9ff\";\n  color: #000;\n}\n",
            );
            assert_eq!(map.glyph("home"), Some("e9ff"));
            assert_eq!(map.color("home"), Some("#000"));
        });
        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("duplicate icon 'home': glyph e901 replaced by e9ff"), "{output}");
        assert!(output.contains("duplicate icon 'home': color #fff replaced by #000"), "{output}");
    }

    #[test]
    fn test_unique_names_log_no_warning() {
        let output = capture_warnings(|| {
            parse_stylesheet_str(".icon-a:before {\n  content: \"\\e901\";\n}\n.icon-b:before {\n  content: \"\\e902\";\n}\n");
        });
        assert!(output.is_empty(), "{output}");
    }

    #[test]
    fn test_non_utf8_bytes_do_not_abort_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.css");
        let mut content = b"/* caf\xe9 */\r\n".to_vec();
        content.extend_from_slice(b".icon-home:before {\r\n  content: \"\\e901\";\r\n  color: #ff0000;\r\n}\r\n");
        std::fs::write(&path, &content).unwrap();

        let map = parse_stylesheet(&path).unwrap();
        assert_eq!(map.glyph("home"), Some("e901"));
        assert_eq!(map.color("home"), Some("#ff0000"));
    }

    #[test]
    fn test_malformed_declarations_are_ignored() {
        // Uppercase hex and a 3-digit code do not match
        let map = parse_stylesheet_str(
            ".icon-a:before {\n  content: \"\\E901\";\n}\n.icon-b:before {\n  content: \"\\e90\";\n}\n",
        );
        assert!(map.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = parse_stylesheet("/definitely/not/here/style.css").unwrap_err();
        assert!(matches!(err, Error::StylesheetNotFound { .. }));
    }
}
