use crate::error::CatalogError;

/// Collects the ids of all *leaf* groups in an SVG document, in document
/// order.
///
/// A leaf group is a `<g id="...">` with no descendant `<g>` that itself
/// carries an id. Container groups (`Layer_2` and friends emitted by design
/// tools) wrap the real recolor targets and are filtered out.
pub(crate) fn leaf_group_ids(svg: &str) -> Result<Vec<String>, CatalogError> {
    let doc = roxmltree::Document::parse(svg)?;

    let mut ids = Vec::new();
    for node in doc.descendants().filter(|n| is_group(n)) {
        let Some(id) = node.attribute("id") else {
            continue;
        };

        let has_named_subgroup = node
            .descendants()
            .filter(|d| is_group(d) && *d != node)
            .any(|d| d.has_attribute("id"));
        if !has_named_subgroup {
            ids.push(id.to_owned());
        }
    }

    Ok(ids)
}

fn is_group(node: &roxmltree::Node<'_, '_>) -> bool {
    node.is_element() && node.tag_name().name() == "g"
}
