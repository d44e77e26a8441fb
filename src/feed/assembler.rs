//! RSS feed assembly
//!
//! Turns harvested episode records into an RSS 2.0 document with iTunes
//! extensions, pretty-printed with a UTF-8 declaration on the first line.
//! Channel metadata is fixed configuration; nothing channel-level is
//! derived from the records.

use crate::config::ChannelConfig;
use crate::feed::dates::{format_pub_date, parse_publish_date};
use crate::records::EpisodeRecord;
use crate::FeedError;
use chrono::Utc;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

const ITUNES_NS: &str = "http://www.itunes.com/dtds/podcast-1.0.dtd";
const CONTENT_NS: &str = "http://purl.org/rss/1.0/modules/content/";

/// MIME type reported for every enclosure; the source site serves mp3
const ENCLOSURE_TYPE: &str = "audio/mpeg";

/// Assembles episode records into a serialized RSS document
///
/// The input is assumed oldest-first (discovery order) and is reversed
/// exactly once so the feed reads newest-first. Records with unparseable
/// or missing dates get the current time as their pubDate; the output
/// format requires some valid timestamp per item, so this is a deliberate
/// best-effort substitution rather than an error.
pub fn assemble(records: &[EpisodeRecord], channel: &ChannelConfig) -> Result<String, FeedError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut rss = BytesStart::new("rss");
    rss.push_attribute(("version", "2.0"));
    rss.push_attribute(("xmlns:content", CONTENT_NS));
    rss.push_attribute(("xmlns:itunes", ITUNES_NS));
    writer.write_event(Event::Start(rss))?;

    writer.write_event(Event::Start(BytesStart::new("channel")))?;
    write_channel_metadata(&mut writer, channel)?;

    // Oldest-first in, newest-first out; reversed here and nowhere else
    for record in records.iter().rev() {
        write_item(&mut writer, record, channel)?;
    }

    writer.write_event(Event::End(BytesEnd::new("channel")))?;
    writer.write_event(Event::End(BytesEnd::new("rss")))?;

    let mut output = String::from_utf8(writer.into_inner())?;
    output.push('\n');
    Ok(output)
}

/// Writes the fixed channel-level metadata
fn write_channel_metadata(
    writer: &mut Writer<Vec<u8>>,
    channel: &ChannelConfig,
) -> Result<(), FeedError> {
    write_text_element(writer, "title", &channel.title)?;
    write_text_element(writer, "link", &channel.link)?;
    write_text_element(writer, "description", &channel.description)?;
    write_text_element(writer, "language", &channel.language)?;

    write_text_element(writer, "itunes:author", &channel.author)?;

    writer.write_event(Event::Start(BytesStart::new("itunes:owner")))?;
    write_text_element(writer, "itunes:name", &channel.owner_name)?;
    write_text_element(writer, "itunes:email", &channel.owner_email)?;
    writer.write_event(Event::End(BytesEnd::new("itunes:owner")))?;

    let mut category = BytesStart::new("itunes:category");
    category.push_attribute(("text", channel.category.as_str()));
    writer.write_event(Event::Empty(category))?;

    write_text_element(writer, "itunes:explicit", &channel.explicit)?;

    let mut image = BytesStart::new("itunes:image");
    image.push_attribute(("href", channel.image_url.as_str()));
    writer.write_event(Event::Empty(image))?;

    Ok(())
}

/// Writes one feed item
///
/// Items without an audio URL still carry title, description, and pubDate
/// but no link, enclosure, or guid.
fn write_item(
    writer: &mut Writer<Vec<u8>>,
    record: &EpisodeRecord,
    channel: &ChannelConfig,
) -> Result<(), FeedError> {
    writer.write_event(Event::Start(BytesStart::new("item")))?;

    let title = trim_artifacts(&record.title);
    write_text_element(writer, "title", &title)?;

    // Records carry no separate description, so the title stands in
    write_text_element(writer, "description", &title)?;

    if let Some(audio_url) = record.audio_url.as_deref() {
        let audio_url = trim_artifacts(audio_url);
        let page_url = trim_artifacts(&record.page_url);
        let link = if page_url.is_empty() {
            audio_url.as_str()
        } else {
            page_url.as_str()
        };
        write_text_element(writer, "link", link)?;

        // Length in bytes is unknown without downloading the file;
        // podcast players accept zero
        let mut enclosure = BytesStart::new("enclosure");
        enclosure.push_attribute(("url", audio_url.as_str()));
        enclosure.push_attribute(("type", ENCLOSURE_TYPE));
        enclosure.push_attribute(("length", "0"));
        writer.write_event(Event::Empty(enclosure))?;

        let mut guid = BytesStart::new("guid");
        guid.push_attribute(("isPermaLink", "false"));
        writer.write_event(Event::Start(guid))?;
        writer.write_event(Event::Text(BytesText::new(audio_url.as_str())))?;
        writer.write_event(Event::End(BytesEnd::new("guid")))?;
    }

    // Best-effort substitution: an unparseable date becomes "now" so the
    // item always carries a valid timestamp
    let pub_date = match parse_publish_date(&record.date) {
        Some(parsed) => parsed,
        None => Utc::now(),
    };
    write_text_element(writer, "pubDate", &format_pub_date(&pub_date))?;

    write_text_element(writer, "itunes:explicit", &channel.explicit)?;
    write_text_element(writer, "itunes:duration", "0")?;

    writer.write_event(Event::End(BytesEnd::new("item")))?;
    Ok(())
}

/// Strips stray quoting artifacts (spaces, double quotes, angle brackets)
/// left over from hand-edited interchange files
fn trim_artifacts(value: &str) -> String {
    value.trim_matches(|c| c == ' ' || c == '"' || c == '>').to_string()
}

/// Writes `<name>text</name>` with escaping
fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    text: &str,
) -> Result<(), FeedError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
