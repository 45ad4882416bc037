// File: src/feed.rs
//! Reads the RSS 2.0 document published by the strike blog.
use crate::model::RawItem;
use anyhow::{Context, Result};
use roxmltree::{Document, Node};

pub const CONTENT_NS: &str = "http://purl.org/rss/1.0/modules/content/";

/// Concatenated text of a node, CDATA included.
fn text_of(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// First child element with the given local name and no namespace.
fn plain_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| {
        n.is_element() && n.tag_name().name() == name && n.tag_name().namespace().is_none()
    })
}

fn read_item(node: Node) -> Option<RawItem> {
    let title = plain_child(node, "title").map(text_of)?;
    let link = plain_child(node, "link").map(|n| text_of(n).trim().to_string())?;

    let categories = node
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "category")
        .map(|n| text_of(n).trim().to_string())
        .collect();

    // Full body lives in content:encoded; older entries only carry a description.
    let content = node
        .children()
        .find(|n| n.is_element() && n.has_tag_name((CONTENT_NS, "encoded")))
        .or_else(|| plain_child(node, "description"))
        .map(text_of)
        .unwrap_or_default();

    Some(RawItem {
        title,
        link,
        content,
        categories,
    })
}

/// Parses feed text into items, in document order.
///
/// Items lacking a title or link are skipped with a warning.
pub fn parse_rss(xml: &str) -> Result<Vec<RawItem>> {
    let doc = Document::parse(xml).context("Failed to parse feed XML")?;

    let mut items = Vec::new();
    for node in doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "item")
    {
        match read_item(node) {
            Some(item) => items.push(item),
            None => log::warn!("ignoring feed item without title or link"),
        }
    }

    log::debug!("read {} items from feed", items.len());
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/">
  <channel>
    <title>Scioperi</title>
    <link>http://www.06blog.it</link>
    <item>
      <title>Sciopero Atac dal 3 al 8 marzo 2020</title>
      <link>http://www.06blog.it/post/1</link>
      <category>scioperi</category>
      <category><![CDATA[mezzi pubblici]]></category>
      <content:encoded><![CDATA[<p>Si fermano <b>bus</b> e metro</p>]]></content:encoded>
    </item>
    <item>
      <title>Sciopero taxi</title>
      <link>
        http://www.06blog.it/post/2
      </link>
      <description>Solo descrizione</description>
    </item>
    <item>
      <link>http://www.06blog.it/post/3</link>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_parse_items_in_order() {
        let items = parse_rss(FEED).unwrap();
        assert_eq!(items.len(), 2);

        assert_eq!(items[0].title, "Sciopero Atac dal 3 al 8 marzo 2020");
        assert_eq!(items[0].link, "http://www.06blog.it/post/1");
        assert_eq!(items[0].categories, vec!["scioperi", "mezzi pubblici"]);
        assert_eq!(items[0].content, "<p>Si fermano <b>bus</b> e metro</p>");

        assert_eq!(items[1].title, "Sciopero taxi");
        assert_eq!(items[1].link, "http://www.06blog.it/post/2");
        assert!(items[1].categories.is_empty());
        assert_eq!(items[1].content, "Solo descrizione");
    }

    #[test]
    fn test_channel_title_is_not_an_item() {
        let items = parse_rss(FEED).unwrap();
        assert!(items.iter().all(|i| i.title != "Scioperi"));
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        assert!(parse_rss("<rss><channel><item></channel>").is_err());
    }

    #[test]
    fn test_empty_channel() {
        let items = parse_rss("<rss version=\"2.0\"><channel></channel></rss>").unwrap();
        assert!(items.is_empty());
    }
}
