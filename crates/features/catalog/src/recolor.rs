use crate::error::CatalogError;
use quick_xml::events::{BytesDecl, BytesStart, Event};
use quick_xml::{Reader, Writer};

/// What part of the document a recolor request targets.
#[derive(Debug, Clone, Copy)]
pub(crate) enum RecolorScope<'a> {
    /// Every element in the document.
    Document,
    /// The subtree of the `<g>` with this id, the group element included.
    Group(&'a str),
}

/// Rewrites fill colors in `svg` and returns the new document bytes.
///
/// Inside the target scope, a present `fill` attribute is set to `color`
/// verbatim, and any `fill` declaration in an inline `style` attribute whose
/// value is a hex color is rewritten. Elements without either attribute pass
/// through unchanged, as does everything outside the scope. Top-level
/// `<style>` blocks are dropped and the output always starts with an XML
/// declaration.
///
/// The input is never touched on disk here; the caller persists the returned
/// bytes only on success.
pub(crate) fn recolor_document(
    svg: &str,
    scope: RecolorScope<'_>,
    color: &str,
) -> Result<Vec<u8>, CatalogError> {
    let mut reader = Reader::from_str(svg);
    let mut writer = Writer::new(Vec::new());

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut depth = 0usize;
    let mut target_depth: Option<usize> = None;
    let mut target_seen = matches!(scope, RecolorScope::Document);

    loop {
        match reader.read_event()? {
            Event::Eof => break,
            // Replaced by the declaration emitted above.
            Event::Decl(_) => {}
            Event::Start(e) => {
                if depth == 1 && e.local_name().as_ref() == b"style" {
                    // Top-level <style> blocks are dropped with their content.
                    let end = e.to_end().into_owned();
                    reader.read_to_end(end.name())?;
                    continue;
                }

                let attrs = decode_attributes(&e)?;
                if target_depth.is_none() {
                    if let RecolorScope::Group(id) = scope {
                        if e.local_name().as_ref() == b"g" && attr_value(&attrs, "id") == Some(id) {
                            target_depth = Some(depth);
                            target_seen = true;
                        }
                    }
                }

                let active = matches!(scope, RecolorScope::Document) || target_depth.is_some();
                writer.write_event(Event::Start(rebuild_element(&e, &attrs, color, active)))?;
                depth += 1;
            }
            Event::Empty(e) => {
                if depth == 1 && e.local_name().as_ref() == b"style" {
                    continue;
                }

                let attrs = decode_attributes(&e)?;
                let active = match scope {
                    RecolorScope::Document => true,
                    RecolorScope::Group(id) => {
                        if target_depth.is_some() {
                            true
                        } else if e.local_name().as_ref() == b"g"
                            && attr_value(&attrs, "id") == Some(id)
                        {
                            // A self-closing target group: recolor just it.
                            target_seen = true;
                            true
                        } else {
                            false
                        }
                    }
                };
                writer.write_event(Event::Empty(rebuild_element(&e, &attrs, color, active)))?;
            }
            Event::End(e) => {
                depth = depth.saturating_sub(1);
                if target_depth == Some(depth) {
                    target_depth = None;
                }
                writer.write_event(Event::End(e))?;
            }
            other => writer.write_event(other)?,
        }
    }

    if !target_seen {
        if let RecolorScope::Group(id) = scope {
            return Err(CatalogError::GroupNotFound { id: id.to_owned() });
        }
    }

    Ok(writer.into_inner())
}

type AttrPairs = Vec<(String, String)>;

fn decode_attributes(e: &BytesStart<'_>) -> Result<AttrPairs, CatalogError> {
    let mut attrs = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attrs.push((key, value));
    }
    Ok(attrs)
}

fn attr_value<'a>(attrs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    attrs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

fn rebuild_element(
    e: &BytesStart<'_>,
    attrs: &[(String, String)],
    color: &str,
    active: bool,
) -> BytesStart<'static> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut rebuilt = BytesStart::new(name);
    for (key, value) in attrs {
        if active && key == "fill" {
            rebuilt.push_attribute((key.as_str(), color));
        } else if active && key == "style" {
            let rewritten = rewrite_style_fill(value, color);
            rebuilt.push_attribute((key.as_str(), rewritten.as_str()));
        } else {
            rebuilt.push_attribute((key.as_str(), value.as_str()));
        }
    }
    rebuilt
}

/// Rewrites `fill` declarations with hex-color values inside a `style`
/// attribute, declaration by declaration. Unlike a plain substring
/// substitution this cannot touch look-alike keys (`stroke-fill`) or values
/// that are not colors (`fill:url(#grad)`).
fn rewrite_style_fill(style: &str, color: &str) -> String {
    style
        .split(';')
        .map(|decl| match decl.split_once(':') {
            Some((key, value))
                if key.trim().eq_ignore_ascii_case("fill") && is_hex_color(value.trim()) =>
            {
                format!("fill:{color}")
            }
            _ => decl.to_owned(),
        })
        .collect::<Vec<_>>()
        .join(";")
}

fn is_hex_color(value: &str) -> bool {
    value.strip_prefix('#').is_some_and(|hex| {
        (3..=6).contains(&hex.len()) && hex.chars().all(|c| c.is_ascii_hexdigit())
    })
}
