//! Grammars for markup attribute values.
//!
//! Every function takes the raw attribute string and returns a typed value or a
//! `ValueParseError` naming the grammar that was expected. Numeric pieces are
//! recognized with small `nom` parsers; list separators are `,` or `;`.

use crate::border::{BORDER_STYLE_NAMES, BorderInfo, BorderStyle};
use crate::page::{PAGE_SIZE_NAMES, PageOrientation, PageSize};
use crate::symbols::SymbolTable;
use crate::text::{HorizontalAlignment, TextAlignment, VerticalAlignment};
use folio_types::{Color, FixedPosition, Margins, UnitValue};
use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_while_m_n};
use nom::character::complete::{char, digit0, digit1, one_of, space0};
use nom::combinator::{map, map_res, opt, recognize};
use nom::multi::separated_list1;
use nom::sequence::{delimited, preceded};
use nom::{IResult, Parser};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("cannot parse '{value}' as {kind}: expected {expected}")]
pub struct ValueParseError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

impl ValueParseError {
    pub fn new(kind: &'static str, value: &str, expected: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected: expected.into(),
        }
    }
}

type NomError<'a> = nom::error::Error<&'a str>;

// --- Helper Parsers ---

fn ws<'a, O, F>(inner: F) -> impl Parser<&'a str, Output = O, Error = NomError<'a>>
where
    F: Parser<&'a str, Output = O, Error = NomError<'a>>,
{
    delimited(space0, inner, space0)
}

fn number(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize((
            opt(one_of("+-")),
            alt((
                recognize((digit1, opt((char('.'), digit0)))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

fn integer(input: &str) -> IResult<&str, i32> {
    map_res(recognize((opt(one_of("+-")), digit1)), |s: &str| {
        s.parse::<i32>()
    })
    .parse(input)
}

fn component(input: &str) -> IResult<&str, u8> {
    nom::character::complete::u8(input)
}

fn rgb_triplet(input: &str) -> IResult<&str, Color> {
    map(
        (
            ws(component),
            char(','),
            ws(component),
            char(','),
            ws(component),
        ),
        |(r, _, g, _, b)| Color::rgb(r, g, b),
    )
    .parse(input)
}

fn hex_byte(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()), |s| {
        u8::from_str_radix(s, 16)
    })
    .parse(input)
}

fn hex_color(input: &str) -> IResult<&str, Color> {
    map(
        preceded(tag_no_case("0x"), (hex_byte, hex_byte, hex_byte)),
        |(r, g, b)| Color::rgb(r, g, b),
    )
    .parse(input)
}

fn number_list(input: &str) -> IResult<&str, Vec<f32>> {
    separated_list1(one_of(",;"), ws(number)).parse(input)
}

/// Runs `parser` over the trimmed input and requires it to consume everything.
fn run_parser<'a, T, P>(
    mut parser: P,
    input: &'a str,
    kind: &'static str,
    expected: &'static str,
) -> Result<T, ValueParseError>
where
    P: Parser<&'a str, Output = T, Error = NomError<'a>>,
{
    match parser.parse(input.trim()) {
        Ok(("", value)) => Ok(value),
        _ => Err(ValueParseError::new(kind, input, expected)),
    }
}

fn lookup<T: Copy>(
    table: &[(&str, T)],
    input: &str,
    kind: &'static str,
) -> Result<T, ValueParseError> {
    let trimmed = input.trim();
    table
        .iter()
        .find(|(name, _)| *name == trimmed)
        .map(|(_, value)| *value)
        .ok_or_else(|| {
            let names: Vec<&str> = table.iter().map(|(name, _)| *name).collect();
            ValueParseError::new(kind, input, format!("one of {}", names.join(", ")))
        })
}

// --- Scalars ---

pub fn parse_float(input: &str) -> Result<f32, ValueParseError> {
    run_parser(number, input, "number", "a decimal number such as 12 or 4.5")
}

pub fn parse_int(input: &str) -> Result<i32, ValueParseError> {
    run_parser(integer, input, "integer", "a whole number")
}

/// Parses a non-negative count such as a span or a start index.
pub fn parse_count(input: &str) -> Result<u32, ValueParseError> {
    let value = parse_int(input)?;
    u32::try_from(value).map_err(|_| ValueParseError::new("count", input, "a non-negative whole number"))
}

/// `"true"` and `"yes"` are true. Every other string, including `"TRUE"` and `"1"`, is false.
pub fn parse_bool(input: &str) -> bool {
    matches!(input, "true" | "yes")
}

/// `"50%"` is relative; any other number is points.
pub fn parse_unit_value(input: &str) -> Result<UnitValue, ValueParseError> {
    let trimmed = input.trim();
    const EXPECTED: &str = "a number of points or a percentage such as 50%";
    match trimmed.strip_suffix('%') {
        Some(percent) => run_parser(number, percent, "unit value", EXPECTED).map(UnitValue::Percent),
        None => run_parser(number, trimmed, "unit value", EXPECTED).map(UnitValue::Point),
    }
}

// --- Lists ---

pub fn parse_float_array(input: &str) -> Result<Vec<f32>, ValueParseError> {
    run_parser(
        number_list,
        input,
        "number list",
        "numbers separated by ',' or ';'",
    )
}

/// Splits on `,` or `;`, trimming every item. Empty items are dropped.
pub fn parse_string_list(input: &str) -> Result<Vec<String>, ValueParseError> {
    let items: Vec<String> = input
        .split([',', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if items.is_empty() {
        return Err(ValueParseError::new(
            "name list",
            input,
            "names separated by ',' or ';'",
        ));
    }
    Ok(items)
}

/// One value sets every side, two set left/right then top/bottom, four set left, top, right, bottom.
pub fn parse_margins(input: &str) -> Result<Margins, ValueParseError> {
    const EXPECTED: &str = "1, 2 or 4 numbers separated by ',' or ';'";
    let parts = run_parser(number_list, input, "margins", EXPECTED)?;
    match parts.as_slice() {
        [all] => Ok(Margins::all(*all)),
        [horizontal, vertical] => Ok(Margins::new(*vertical, *horizontal, *vertical, *horizontal)),
        [left, top, right, bottom] => Ok(Margins::new(*top, *right, *bottom, *left)),
        _ => Err(ValueParseError::new("margins", input, EXPECTED)),
    }
}

// --- Colors & Borders ---

/// Resolution order: document symbol, built-in palette name, `r,g,b`, `0xRRGGBB`.
pub fn parse_color(input: &str, symbols: &SymbolTable) -> Result<Color, ValueParseError> {
    let trimmed = input.trim();
    if let Some(color) = symbols.color(trimmed) {
        return Ok(color);
    }
    if let Some(color) = Color::from_palette(trimmed) {
        return Ok(color);
    }
    const EXPECTED: &str =
        "a named color, a palette color, 'r,g,b' with components 0-255, or 0x followed by 6 hex digits";
    if trimmed.contains(',') {
        return run_parser(rgb_triplet, trimmed, "color", EXPECTED);
    }
    run_parser(hex_color, trimmed, "color", EXPECTED)
}

pub fn parse_border_style(input: &str) -> Result<BorderStyle, ValueParseError> {
    lookup(BORDER_STYLE_NAMES, input, "border style")
}

/// `"none"`, or `width;style;color[;opacity]` with opacity defaulting to 1.0.
pub fn parse_border(input: &str, symbols: &SymbolTable) -> Result<BorderInfo, ValueParseError> {
    const EXPECTED: &str = "'none' or width;style;color[;opacity]";
    let trimmed = input.trim();
    if trimmed == "none" {
        return Ok(BorderInfo::none());
    }

    let parts: Vec<&str> = trimmed.split(';').collect();
    let (width, style, color, opacity) = match parts.as_slice() {
        [width, style, color] => (*width, *style, *color, None),
        [width, style, color, opacity] => (*width, *style, *color, Some(*opacity)),
        _ => return Err(ValueParseError::new("border", input, EXPECTED)),
    };

    let opacity = match opacity {
        Some(raw) => {
            let value = parse_float(raw)?;
            if !(0.0..=1.0).contains(&value) {
                return Err(ValueParseError::new("border opacity", raw, "a number between 0 and 1"));
            }
            value
        }
        None => 1.0,
    };

    Ok(BorderInfo {
        width: parse_float(width)?,
        style: parse_border_style(style)?,
        color: parse_color(color, symbols)?,
        opacity,
    })
}

// --- Enumerations ---

pub fn parse_horizontal_alignment(input: &str) -> Result<HorizontalAlignment, ValueParseError> {
    lookup(
        &[
            ("left", HorizontalAlignment::Left),
            ("center", HorizontalAlignment::Center),
            ("right", HorizontalAlignment::Right),
        ],
        input,
        "horizontal alignment",
    )
}

pub fn parse_vertical_alignment(input: &str) -> Result<VerticalAlignment, ValueParseError> {
    lookup(
        &[
            ("top", VerticalAlignment::Top),
            ("middle", VerticalAlignment::Middle),
            ("bottom", VerticalAlignment::Bottom),
        ],
        input,
        "vertical alignment",
    )
}

pub fn parse_text_alignment(input: &str) -> Result<TextAlignment, ValueParseError> {
    lookup(
        &[
            ("left", TextAlignment::Left),
            ("center", TextAlignment::Center),
            ("right", TextAlignment::Right),
            ("justified", TextAlignment::Justified),
        ],
        input,
        "text alignment",
    )
}

pub fn parse_page_size(input: &str) -> Result<PageSize, ValueParseError> {
    lookup(PAGE_SIZE_NAMES, input, "page size")
}

pub fn parse_page_orientation(input: &str) -> Result<PageOrientation, ValueParseError> {
    lookup(
        &[
            ("portrait", PageOrientation::Portrait),
            ("landscape", PageOrientation::Landscape),
        ],
        input,
        "page orientation",
    )
}

/// A registered custom font or one of the standard fonts.
pub fn parse_font(input: &str, symbols: &SymbolTable) -> Result<String, ValueParseError> {
    let name = input.trim();
    if symbols.has_font(name) {
        Ok(name.to_string())
    } else {
        Err(ValueParseError::new(
            "font",
            input,
            "a font registered in the style sheet or a standard font name",
        ))
    }
}

/// `x,y,width[,height[,page]]`.
pub fn parse_fixed_position(input: &str) -> Result<FixedPosition, ValueParseError> {
    const EXPECTED: &str = "x,y,width[,height[,page]]";
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if !(3..=5).contains(&parts.len()) {
        return Err(ValueParseError::new("fixed position", input, EXPECTED));
    }
    Ok(FixedPosition {
        x: parse_float(parts[0])?,
        y: parse_float(parts[1])?,
        width: parse_unit_value(parts[2])?,
        height: parts.get(3).map(|h| parse_unit_value(h)).transpose()?,
        page: parts.get(4).map(|p| parse_count(p)).transpose()?,
    })
}
