//! Validated assignment of raw attributes to typed node slots.
//!
//! Each node kind is served by the handlers of its traits (margined,
//! positioned, bordered, styled, text-bearing, form-field) followed by the
//! handler of the kind itself. Trait handlers only see attributes nobody has
//! claimed yet; the kind handler sees every attribute so it can refine a
//! value a trait already assigned. Whatever is left unclaimed is an error.

use super::bag::PropertyBag;
use folio_style::parsers::{
    parse_bool, parse_border, parse_color, parse_count, parse_fixed_position, parse_float,
    parse_float_array, parse_font, parse_horizontal_alignment, parse_margins,
    parse_page_orientation, parse_page_size, parse_string_list, parse_text_alignment,
    parse_unit_value, parse_vertical_alignment,
};
use folio_style::{SymbolTable, ValueParseError};
use folio_tree::{KindProperties, Node, NodeKind, TreeError};
use folio_types::Side;

type Handler = fn(&mut Node, &str, &str, &SymbolTable) -> Result<bool, ValueParseError>;

fn trait_handlers(kind: NodeKind) -> Vec<Handler> {
    let traits = kind.traits();
    let mut handlers: Vec<Handler> = Vec::new();
    if traits.margined {
        handlers.push(assign_margined);
    }
    if traits.positioned {
        handlers.push(assign_positioned);
    }
    if traits.bordered {
        handlers.push(assign_bordered);
    }
    if traits.styled {
        handlers.push(assign_styled);
    }
    if traits.text_bearing {
        handlers.push(assign_text);
    }
    if traits.form_field {
        handlers.push(assign_form_field);
    }
    handlers
}

/// Assigns every entry of `bag` to `node`, failing on the first unknown attribute.
pub fn assign(node: &mut Node, bag: &mut PropertyBag, symbols: &SymbolTable) -> Result<(), TreeError> {
    let kind = node.kind();

    for handler in trait_handlers(kind) {
        run_handler(node, bag, symbols, handler, false)?;
    }
    run_handler(node, bag, symbols, assign_kind, true)?;

    match bag.first_unconsumed() {
        Some(entry) => Err(TreeError::UnknownAttribute {
            kind,
            name: entry.name.clone(),
            value: entry.value.clone(),
        }),
        None => Ok(()),
    }
}

fn run_handler(
    node: &mut Node,
    bag: &mut PropertyBag,
    symbols: &SymbolTable,
    handler: Handler,
    include_consumed: bool,
) -> Result<(), TreeError> {
    for index in 0..bag.len() {
        let entry = &bag.entries()[index];
        if entry.is_consumed() && !include_consumed {
            continue;
        }
        let (name, value) = (entry.name.clone(), entry.value.clone());
        let handled = handler(node, &name, &value, symbols).map_err(|source| {
            TreeError::InvalidAttributeValue {
                kind: node.kind(),
                name: name.clone(),
                source,
            }
        })?;
        if handled {
            bag.consume(index);
        }
    }
    Ok(())
}

fn side_of(name: &str, suffix: &str) -> Option<Side> {
    match name.strip_suffix(suffix)? {
        "top" => Some(Side::Top),
        "right" => Some(Side::Right),
        "bottom" => Some(Side::Bottom),
        "left" => Some(Side::Left),
        _ => None,
    }
}

fn assign_margined(node: &mut Node, name: &str, value: &str, _: &SymbolTable) -> Result<bool, ValueParseError> {
    if name == "margins" {
        node.style.margins = parse_margins(value)?.over(&node.style.margins);
    } else if let Some(side) = side_of(name, "Margin") {
        node.style.margins.set_side(side, parse_float(value)?);
    } else {
        return Ok(false);
    }
    Ok(true)
}

fn assign_positioned(node: &mut Node, name: &str, value: &str, _: &SymbolTable) -> Result<bool, ValueParseError> {
    match name {
        "position" | "fixedPosition" => node.position.set(parse_fixed_position(value)?),
        _ => return Ok(false),
    }
    Ok(true)
}

fn assign_bordered(node: &mut Node, name: &str, value: &str, symbols: &SymbolTable) -> Result<bool, ValueParseError> {
    if name == "borders" || name == "allBorders" {
        node.style.borders.all.set(parse_border(value, symbols)?);
    } else if let Some(side) = side_of(name, "Border") {
        node.style.borders.set_side(side, parse_border(value, symbols)?);
    } else {
        return Ok(false);
    }
    Ok(true)
}

/// Font and color attributes shared by styled nodes and form fields.
fn assign_font_and_colors(node: &mut Node, name: &str, value: &str, symbols: &SymbolTable) -> Result<bool, ValueParseError> {
    let style = &mut node.style;
    match name {
        "font" => style.font.set(parse_font(value, symbols)?),
        "fontSize" => style.font_size.set(parse_float(value)?),
        "foregroundColor" | "fontColor" => style.foreground_color.set(parse_color(value, symbols)?),
        "backgroundColor" | "background" => style.background_color.set(parse_color(value, symbols)?),
        _ => return Ok(false),
    }
    Ok(true)
}

fn assign_styled(node: &mut Node, name: &str, value: &str, symbols: &SymbolTable) -> Result<bool, ValueParseError> {
    if assign_font_and_colors(node, name, value, symbols)? {
        return Ok(true);
    }
    let style = &mut node.style;
    match name {
        "bold" => style.bold.set(parse_bool(value)),
        "italic" => style.italic.set(parse_bool(value)),
        "underline" => style.underline.set(parse_bool(value)),
        "superscript" => style.superscript.set(parse_bool(value)),
        "subscript" => style.subscript.set(parse_bool(value)),
        "horizontalAlignment" | "alignment" => {
            style.horizontal_alignment.set(parse_horizontal_alignment(value)?)
        }
        "verticalAlignment" => style.vertical_alignment.set(parse_vertical_alignment(value)?),
        "textAlignment" => style.text_alignment.set(parse_text_alignment(value)?),
        _ => return Ok(false),
    }
    Ok(true)
}

fn assign_text(node: &mut Node, name: &str, value: &str, _: &SymbolTable) -> Result<bool, ValueParseError> {
    let content = &mut node.content;
    match name {
        "text" => content.text.set(value.to_string()),
        "property" => content.property.set(value.to_string()),
        "format" => content.format.set(value.to_string()),
        "formatProperties" => content.format_properties.set(parse_string_list(value)?),
        _ => return Ok(false),
    }
    Ok(true)
}

fn assign_form_field(node: &mut Node, name: &str, value: &str, symbols: &SymbolTable) -> Result<bool, ValueParseError> {
    if assign_font_and_colors(node, name, value, symbols)? {
        return Ok(true);
    }
    if name == "borders" {
        node.style.borders.all.set(parse_border(value, symbols)?);
        return Ok(true);
    }
    let KindProperties::TextField(field) = &mut node.props else {
        return Ok(false);
    };
    match name {
        "name" => field.name.set(value.to_string()),
        "value" => field.value.set(value.to_string()),
        "property" => field.property.set(value.to_string()),
        "multiline" => field.multiline.set(parse_bool(value)),
        "width" => field.width.set(parse_float(value)?),
        "height" => field.height.set(parse_float(value)?),
        _ => return Ok(false),
    }
    Ok(true)
}

fn assign_kind(node: &mut Node, name: &str, value: &str, symbols: &SymbolTable) -> Result<bool, ValueParseError> {
    match &mut node.props {
        KindProperties::Root(root) => match name {
            "pageSize" => root.page_size.set(parse_page_size(value)?),
            "orientation" | "pageOrientation" => root.orientation.set(parse_page_orientation(value)?),
            "documentFont" => root.document_font.set(parse_font(value, symbols)?),
            "style" => root.style_sheet.set(value.to_string()),
            _ => return Ok(false),
        },
        KindProperties::List(list) => match name {
            "startIndex" => list.start_index.set(parse_count(value)?),
            "indentation" => list.indentation.set(parse_float(value)?),
            "listSymbol" => list.symbol.set(value.to_string()),
            "preSymbolText" => list.pre_symbol_text.set(value.to_string()),
            "postSymbolText" => list.post_symbol_text.set(value.to_string()),
            "enumeration" | "numbered" => list.enumeration.set(parse_bool(value)),
            _ => return Ok(false),
        },
        KindProperties::Table(table) => match name {
            "columnCount" => table.column_count.set(parse_count(value)?),
            "columnWidths" | "columnsWidth" => table.column_widths.set(parse_float_array(value)?),
            "width" => table.width.set(parse_unit_value(value)?),
            "largeTable" => table.large_table.set(parse_bool(value)),
            "verticalBorderSpacing" => table.vertical_border_spacing.set(parse_float(value)?),
            "horizontalBorderSpacing" => table.horizontal_border_spacing.set(parse_float(value)?),
            "rowHeight" => table.row_height.set(parse_float(value)?),
            _ => return Ok(false),
        },
        KindProperties::TableRow(row) => match name {
            "header" => row.header.set(parse_bool(value)),
            "footer" => row.footer.set(parse_bool(value)),
            "rowHeight" => row.row_height.set(parse_float(value)?),
            _ => return Ok(false),
        },
        KindProperties::TableDataRow(row) => match name {
            "dataSource" | "itemsSource" => row.data_source.set(value.to_string()),
            "columnCellProperties" => row.column_cell_properties.set(parse_string_list(value)?),
            "rowHeight" => row.row_height.set(parse_float(value)?),
            _ => return Ok(false),
        },
        KindProperties::Cell(cell) => match name {
            "columnSpan" => cell.column_span.set(parse_count(value)?),
            "rowSpan" => cell.row_span.set(parse_count(value)?),
            "enumerate" => cell.enumerate.set(parse_bool(value)),
            _ => return Ok(false),
        },
        KindProperties::Image(image) => match name {
            "source" => image.source.set(value.to_string()),
            "property" => image.property.set(value.to_string()),
            "left" => image.left.set(parse_float(value)?),
            "bottom" => image.bottom.set(parse_float(value)?),
            "width" => image.width.set(parse_float(value)?),
            "horizontalScaling" => image.horizontal_scaling.set(parse_float(value)?),
            "verticalScaling" => image.vertical_scaling.set(parse_float(value)?),
            _ => return Ok(false),
        },
        KindProperties::Line(line) => match name {
            "length" | "width" => line.length.set(parse_float(value)?),
            "alignment" => line.alignment.set(parse_horizontal_alignment(value)?),
            _ => return Ok(false),
        },
        KindProperties::Spacer(spacer) => match name {
            "height" => spacer.height.set(parse_float(value)?),
            _ => return Ok(false),
        },
        KindProperties::TextField(_) | KindProperties::Plain => return Ok(false),
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_style::{BorderStyle, HorizontalAlignment};
    use folio_types::{Color, UnitValue};

    fn assign_to(kind: NodeKind, attrs: &[(&str, &str)]) -> Result<Node, TreeError> {
        let mut node = Node::new(kind);
        let mut bag: PropertyBag = attrs.iter().copied().collect();
        assign(&mut node, &mut bag, &SymbolTable::new())?;
        Ok(node)
    }

    #[test]
    fn test_paragraph_attributes() {
        let node = assign_to(
            NodeKind::Paragraph,
            &[
                ("fontSize", "12"),
                ("bold", "yes"),
                ("fontColor", "red"),
                ("margins", "5,10"),
                ("topBorder", "1;solid;black"),
                ("text", "Hello"),
            ],
        )
        .unwrap();
        assert_eq!(node.style.font_size.get(), Some(&12.0));
        assert_eq!(node.style.bold.get(), Some(&true));
        assert_eq!(node.style.foreground_color.get(), Some(&Color::rgb(255, 0, 0)));
        assert_eq!(node.style.margins.left.get(), Some(&5.0));
        assert_eq!(node.style.margins.top.get(), Some(&10.0));
        assert_eq!(
            node.style.borders.top.get().map(|b| b.style),
            Some(BorderStyle::Solid)
        );
        assert_eq!(node.content.text.get().map(String::as_str), Some("Hello"));
    }

    #[test]
    fn test_synonyms_resolve_to_the_same_slot() {
        let a = assign_to(NodeKind::Table, &[("columnWidths", "1,2")]).unwrap();
        let b = assign_to(NodeKind::Table, &[("columnsWidth", "1;2")]).unwrap();
        assert_eq!(a.props, b.props);

        let a = assign_to(NodeKind::Cell, &[("background", "blue")]).unwrap();
        let b = assign_to(NodeKind::Cell, &[("backgroundColor", "blue")]).unwrap();
        assert_eq!(a.style, b.style);
    }

    #[test]
    fn test_unknown_attribute_names_kind_and_value() {
        let err = assign_to(NodeKind::Spacer, &[("height", "4"), ("fontSize", "12")]).unwrap_err();
        assert_eq!(
            err,
            TreeError::UnknownAttribute {
                kind: NodeKind::Spacer,
                name: "fontSize".into(),
                value: "12".into(),
            }
        );
        assert_eq!(err.to_string(), "Type: 'Spacer' - Invalid property: 'fontSize'='12'.");
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let err = assign_to(NodeKind::Paragraph, &[("margins", "1,2,3")]).unwrap_err();
        assert!(matches!(
            err,
            TreeError::InvalidAttributeValue { kind: NodeKind::Paragraph, ref name, .. } if name == "margins"
        ));
    }

    #[test]
    fn test_kind_handler_refines_trait_value() {
        let node = assign_to(NodeKind::Line, &[("alignment", "center"), ("width", "200")]).unwrap();
        let KindProperties::Line(line) = &node.props else {
            panic!("expected line properties");
        };
        assert_eq!(line.alignment.get(), Some(&HorizontalAlignment::Center));
        assert_eq!(line.length.get(), Some(&200.0));
        assert_eq!(node.style.horizontal_alignment.get(), Some(&HorizontalAlignment::Center));
    }

    #[test]
    fn test_text_field_attributes() {
        let node = assign_to(
            NodeKind::TextField,
            &[("name", "email"), ("multiline", "true"), ("fontSize", "9"), ("position", "10,20,50%")],
        )
        .unwrap();
        let KindProperties::TextField(field) = &node.props else {
            panic!("expected text field properties");
        };
        assert_eq!(field.name.get().map(String::as_str), Some("email"));
        assert_eq!(field.multiline.get(), Some(&true));
        assert_eq!(node.style.font_size.get(), Some(&9.0));
        assert_eq!(node.position.get().map(|p| p.width), Some(UnitValue::Percent(50.0)));
    }

    #[test]
    fn test_text_only_on_text_bearing_kinds() {
        assert!(assign_to(NodeKind::ListItem, &[("text", "x")]).is_ok());
        assert!(matches!(
            assign_to(NodeKind::Table, &[("text", "x")]),
            Err(TreeError::UnknownAttribute { .. })
        ));
    }
}
