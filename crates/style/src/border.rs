use folio_types::{Color, Property, Side};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
pub enum BorderStyle {
    #[default]
    None,
    Solid,
    Dashed,
    Dotted,
    Double,
    RoundDots,
    Groove,
    Inset,
    Outset,
    Ridge,
}

/// Literal names accepted in markup. Matching is case-sensitive.
pub(crate) const BORDER_STYLE_NAMES: &[(&str, BorderStyle)] = &[
    ("solid", BorderStyle::Solid),
    ("dashed", BorderStyle::Dashed),
    ("dotted", BorderStyle::Dotted),
    ("double", BorderStyle::Double),
    ("roundDots", BorderStyle::RoundDots),
    ("groove", BorderStyle::Groove),
    ("inset", BorderStyle::Inset),
    ("outset", BorderStyle::Outset),
    ("ridge", BorderStyle::Ridge),
];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BorderInfo {
    pub width: f32,
    pub style: BorderStyle,
    pub color: Color,
    pub opacity: f32,
}

impl BorderInfo {
    /// The explicit "no border" value. It still counts as set for the cascade.
    pub fn none() -> Self {
        Self {
            width: 0.0,
            style: BorderStyle::None,
            color: Color::BLACK,
            opacity: 1.0,
        }
    }

    pub fn solid(width: f32, color: Color) -> Self {
        Self {
            width,
            style: BorderStyle::Solid,
            color,
            opacity: 1.0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.style != BorderStyle::None && self.width > 0.0
    }
}

/// The border slots of one bordered element.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct BorderSet {
    pub all: Property<BorderInfo>,
    pub top: Property<BorderInfo>,
    pub right: Property<BorderInfo>,
    pub bottom: Property<BorderInfo>,
    pub left: Property<BorderInfo>,
}

impl BorderSet {
    pub fn side(&self, side: Side) -> &Property<BorderInfo> {
        match side {
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }

    pub fn set_side(&mut self, side: Side, border: BorderInfo) {
        match side {
            Side::Top => self.top.set(border),
            Side::Right => self.right.set(border),
            Side::Bottom => self.bottom.set(border),
            Side::Left => self.left.set(border),
        }
    }

    pub fn has_sides(&self) -> bool {
        Side::ALL.iter().any(|s| self.side(*s).is_set())
    }

    pub fn is_empty(&self) -> bool {
        !self.all.is_set() && !self.has_sides()
    }

    /// The border that applies to `side`: the all-sides value if set, else the side's own.
    pub fn effective(&self, side: Side) -> Option<&BorderInfo> {
        self.all.get().or_else(|| self.side(side).get())
    }

    /// Merges this layer over `base`.
    ///
    /// An all-sides value on this layer replaces everything. Otherwise, if this
    /// layer sets any side, the result keeps this layer's sides and fills the
    /// rest from `base`'s per-side values only; `base.all` is dropped. A layer
    /// with no borders passes `base` through unchanged.
    pub fn over(&self, base: &BorderSet) -> BorderSet {
        if self.all.is_set() {
            BorderSet {
                all: self.all.clone(),
                ..BorderSet::default()
            }
        } else if self.has_sides() {
            BorderSet {
                all: Property::unset(),
                top: self.top.over(&base.top),
                right: self.right.over(&base.right),
                bottom: self.bottom.over(&base.bottom),
                left: self.left.over(&base.left),
            }
        } else {
            base.clone()
        }
    }
}
