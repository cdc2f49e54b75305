//! Page text generation.
//!
//! This module serializes the grouped roster to pretty-printed JSON and
//! assembles the HTML fragment (grouped text plus the two image
//! references) that gets written into the output region.

use crate::models::ManagerGroups;
use crate::render::sink::{OutputSink, RenderError};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// The two image references shown under the grouped roster.
///
/// Resolving or copying the actual files is the deployment pipeline's
/// job; the renderer only embeds these strings as `src` attributes.
#[derive(Debug, Clone)]
pub struct PageAssets {
    /// Fingerprinted path produced by the asset pipeline.
    pub bundled: String,
    /// Literal relative path expected to exist next to the document.
    pub literal: String,
}

impl Default for PageAssets {
    fn default() -> Self {
        Self {
            bundled: "static/media/x-30465_640.3f8a1c2e.png".to_string(),
            literal: "Nightcore-Shadows.jpg".to_string(),
        }
    }
}

/// Serialize the grouped roster to pretty-printed JSON.
///
/// Key order is the grouper's insertion order; `indent` is the number of
/// spaces per nesting level.
pub fn render_groups(groups: &ManagerGroups, indent: usize) -> Result<String, RenderError> {
    let indent_bytes = vec![b' '; indent];
    let mut buf = Vec::new();

    let formatter = PrettyFormatter::with_indent(&indent_bytes);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    groups.serialize(&mut serializer)?;

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Build the page fragment: the grouped text in a `<pre>` block followed
/// by the two image tags.
pub fn build_fragment(groups_text: &str, assets: &PageAssets) -> String {
    format!(
        "\n<pre>{}</pre>\n<img src=\"{}\" alt=\"\"/>\n<img src=\"{}\" alt=\"\"/>\n",
        escape_text(groups_text),
        escape_attr(&assets.bundled),
        escape_attr(&assets.literal),
    )
}

/// Render the grouped roster and write it through the sink in one call.
///
/// The fragment is assembled fully before the sink is touched, so a
/// failing sink never observes a partial render.
pub fn render_into(
    sink: &mut dyn OutputSink,
    groups: &ManagerGroups,
    assets: &PageAssets,
    indent: usize,
) -> Result<(), RenderError> {
    let text = render_groups(groups, indent)?;
    let fragment = build_fragment(&text, assets);
    sink.replace(&fragment)
}

/// Minimal hosting document containing an empty target element.
///
/// Used when the output file does not exist yet, standing in for a
/// generated index page.
pub fn document_template(title: &str, target_id: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\"/>\n\
         <title>{}</title>\n\
         </head>\n\
         <body>\n\
         <div id=\"{}\"></div>\n\
         </body>\n\
         </html>\n",
        escape_text(title),
        escape_attr(target_id),
    )
}

/// Escape text for element content.
fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Escape text for a double-quoted attribute value.
fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::group_by_manager;
    use crate::models::Person;
    use crate::render::sink::MemorySink;

    fn sample_groups() -> ManagerGroups {
        group_by_manager(&[
            Person::new("A", Some("X")),
            Person::new("B", Some("X")),
            Person::new("C", Some("Y")),
        ])
    }

    #[test]
    fn test_render_groups_pretty() {
        let text = render_groups(&sample_groups(), 2).unwrap();

        assert!(text.starts_with('{'));
        assert!(text.contains("\"X\": ["));
        assert!(text.contains("  \"X\""), "two-space indent expected");
        assert!(text.find("\"X\"").unwrap() < text.find("\"Y\"").unwrap());
    }

    #[test]
    fn test_render_groups_custom_indent() {
        let text = render_groups(&sample_groups(), 4).unwrap();
        assert!(text.contains("    \"X\""));
    }

    #[test]
    fn test_render_groups_empty() {
        let text = render_groups(&group_by_manager(&[]), 2).unwrap();
        assert_eq!(text, "{}");
    }

    #[test]
    fn test_render_is_idempotent() {
        let groups = sample_groups();
        let first = render_groups(&groups, 2).unwrap();
        let second = render_groups(&groups, 2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fragment_contains_text_and_images() {
        let assets = PageAssets::default();
        let fragment = build_fragment("{}", &assets);

        assert!(fragment.contains("<pre>{}</pre>"));
        assert!(fragment.contains("src=\"static/media/x-30465_640.3f8a1c2e.png\""));
        assert!(fragment.contains("src=\"Nightcore-Shadows.jpg\""));
        assert_eq!(fragment.matches("<img").count(), 2);
    }

    #[test]
    fn test_fragment_escapes_markup() {
        let assets = PageAssets {
            bundled: "a\"b.png".to_string(),
            literal: "c.jpg".to_string(),
        };
        let fragment = build_fragment("<script>", &assets);

        assert!(fragment.contains("&lt;script&gt;"));
        assert!(fragment.contains("a&quot;b.png"));
    }

    #[test]
    fn test_render_into_single_write() {
        let mut sink = MemorySink::new();
        render_into(&mut sink, &sample_groups(), &PageAssets::default(), 2).unwrap();

        let written = sink.contents.unwrap();
        assert!(written.contains("\"X\""));
        assert!(written.contains("<pre>"));
        assert_eq!(written.matches("<img").count(), 2);
    }

    #[test]
    fn test_empty_roster_still_renders_images() {
        let mut sink = MemorySink::new();
        render_into(
            &mut sink,
            &group_by_manager(&[]),
            &PageAssets::default(),
            2,
        )
        .unwrap();

        let written = sink.contents.unwrap();
        assert!(written.contains("<pre>{}</pre>"));
        assert_eq!(written.matches("<img").count(), 2);
    }

    #[test]
    fn test_document_template_has_target() {
        let doc = document_template("Rosterboard", "root");
        assert!(doc.contains("<div id=\"root\"></div>"));
        assert!(doc.contains("<title>Rosterboard</title>"));
    }
}
