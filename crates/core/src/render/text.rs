use folio_binding::{BindingError, FormatterRegistry, PropertyMap, substitute};
use folio_tree::Node;

/// The text a text-bearing node renders.
///
/// A bound `property` wins; then a `format` string over `formatProperties`;
/// then the literal `text` attribute followed by character data.
pub fn resolve_text(node: &Node, map: &PropertyMap, formatters: &FormatterRegistry) -> Result<String, BindingError> {
    let content = &node.content;
    if let Some(property) = content.property.get() {
        return formatters.format(map.get(property)?);
    }
    if let Some(format) = content.format.get() {
        let properties = content
            .format_properties
            .get()
            .ok_or_else(|| BindingError::MissingFormatProperties {
                element: node.kind().tag().to_string(),
            })?;
        let args = properties
            .iter()
            .map(|name| formatters.format(map.get(name)?))
            .collect::<Result<Vec<_>, _>>()?;
        return substitute(format, &args);
    }
    Ok(content.literal().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_binding::{DataValue, Record};
    use folio_tree::NodeKind;

    fn map() -> PropertyMap {
        let record = Record::new("Invoice")
            .with_field("Number", "INV-7")
            .with_field("Page", 2)
            .with_field("Pages", 5);
        PropertyMap::from_data(Some(&DataValue::from(record))).unwrap()
    }

    #[test]
    fn test_property_beats_literal() {
        let mut node = Node::new(NodeKind::Paragraph);
        node.content.text.set("ignored".into());
        node.content.property.set("Number".into());
        let text = resolve_text(&node, &map(), &FormatterRegistry::with_defaults()).unwrap();
        assert_eq!(text, "INV-7");
    }

    #[test]
    fn test_format_string() {
        let mut node = Node::new(NodeKind::Text);
        node.content.format.set("Page {0} of {1}".into());
        node.content.format_properties.set(vec!["Page".into(), "Pages".into()]);
        let text = resolve_text(&node, &map(), &FormatterRegistry::with_defaults()).unwrap();
        assert_eq!(text, "Page 2 of 5");
    }

    #[test]
    fn test_format_without_properties() {
        let mut node = Node::new(NodeKind::Cell);
        node.content.format.set("{0}".into());
        assert_eq!(
            resolve_text(&node, &map(), &FormatterRegistry::with_defaults()),
            Err(BindingError::MissingFormatProperties { element: "Cell".into() })
        );
    }

    #[test]
    fn test_literal_and_missing_property() {
        let mut node = Node::new(NodeKind::Paragraph);
        node.content.text.set("Hello".into());
        node.append_text("world").unwrap();
        let formatters = FormatterRegistry::with_defaults();
        assert_eq!(resolve_text(&node, &map(), &formatters).unwrap(), "Hello world");

        node.content.property.set("Missing".into());
        assert_eq!(
            resolve_text(&node, &map(), &formatters),
            Err(BindingError::PropertyNotFound("Missing".into()))
        );
    }
}
