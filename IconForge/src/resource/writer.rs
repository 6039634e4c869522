//! Resource document writing
//!
//! The layout is fixed so regenerated files diff cleanly against the
//! previous run: header, banner, font path, sorted glyph strings, sorted
//! colors, closing tag.

use std::fs;
use std::path::Path;

use quick_xml::escape::escape;

use crate::error::Result;
use crate::stylesheet::IconMap;
use crate::topic::Topic;

const DOC_HEAD: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n";

const DOC_BANNER: &str = r"
<!-- ######################## AUTO-GENERATED FILE, DO NOT EDIT ######################## -->
<!-- ######                  AUTO-GENERATED FILE, DO NOT EDIT                      ###### -->
<!-- ######################## AUTO-GENERATED FILE, DO NOT EDIT ######################## -->

<!--
    Each iconfont key maps to its unicode code point. Keys follow a strict naming rule:
        the icon (svg file) name is the key; name icons as module_purpose, e.g. feed_tab_right_plus_icon -->
<!--
    1. iconfont keys are the svg file names; color keys are the svg file name plus _color
    2. copy the generated iconfont keys into each iconfont_topic_string.xml as needed
    3. color keys are optional: the font renders black by default, apply a color at display time if required
-->
";

const DOC_GLYPHS_MARKER: &str = "<!-- iconfont keys generated from svg file names -->\n";

const DOC_COLORS_MARKER: &str =
    "\n\n\n<!-- iconfont colors taken from the svg files (optional, use as the feature requires) -->\n";

const DOC_END: &str = "</resources>";

/// A resource document for one topic, owning the mappings it renders
#[derive(Clone, Debug)]
pub struct ResourceDocument {
    topic: Topic,
    icons: IconMap,
}

impl ResourceDocument {
    #[must_use]
    pub fn new(topic: Topic, icons: IconMap) -> Self {
        Self { topic, icons }
    }

    #[must_use]
    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    #[must_use]
    pub fn icons(&self) -> &IconMap {
        &self.icons
    }

    /// Render the document to a string
    ///
    /// Output depends only on the topic and the mappings, so equal input
    /// always renders byte-identical text.
    #[must_use]
    pub fn render(&self) -> String {
        let topic = escape(self.topic.as_str());
        let mut out = String::with_capacity(
            DOC_HEAD.len() + DOC_BANNER.len() + 64 * (self.icons.glyph_count() + self.icons.color_count() + 4),
        );

        out.push_str(DOC_HEAD);
        out.push_str(DOC_BANNER);
        out.push_str(&format!(
            "<!-- {topic} topic: path of its ttf file inside assets, must not change -->\n"
        ));
        out.push_str(&format!(
            "<string name=\"{topic}_iconfont_path\">iconfont/{topic}.ttf</string>\n\n\n"
        ));

        out.push_str(DOC_GLYPHS_MARKER);
        for entry in self.icons.icons() {
            out.push_str(&format!(
                "    <string name=\"{}\">\\u{}</string>\n",
                escape(entry.name),
                entry.glyph_code
            ));
        }

        out.push_str(DOC_COLORS_MARKER);
        for entry in self.icons.color_entries() {
            out.push_str(&format!(
                "    <color name=\"{}\">{}</color>\n",
                escape(entry.key),
                escape(entry.color_value)
            ));
        }

        out.push_str(DOC_END);
        out
    }

    /// Write the document, creating parent directories and replacing any
    /// existing file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.render())?;
        tracing::info!(
            "Wrote {} ({} glyphs, {} colors)",
            path.display(),
            self.icons.glyph_count(),
            self.icons.color_count()
        );
        Ok(())
    }
}
