//! Page sizes and orientation.
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
pub enum PageSize {
    A0,
    A1,
    A2,
    A3,
    #[default]
    A4,
    A5,
    A6,
    A7,
    A8,
    A9,
    A10,
    B0,
    B1,
    B2,
    B3,
    B4,
    B5,
    B6,
    B7,
    B8,
    B9,
    B10,
    Letter,
    Legal,
    Tabloid,
    Ledger,
    Executive,
}

/// Literal names accepted in markup, paired with their size.
pub(crate) const PAGE_SIZE_NAMES: &[(&str, PageSize)] = &[
    ("A0", PageSize::A0),
    ("A1", PageSize::A1),
    ("A2", PageSize::A2),
    ("A3", PageSize::A3),
    ("A4", PageSize::A4),
    ("A5", PageSize::A5),
    ("A6", PageSize::A6),
    ("A7", PageSize::A7),
    ("A8", PageSize::A8),
    ("A9", PageSize::A9),
    ("A10", PageSize::A10),
    ("B0", PageSize::B0),
    ("B1", PageSize::B1),
    ("B2", PageSize::B2),
    ("B3", PageSize::B3),
    ("B4", PageSize::B4),
    ("B5", PageSize::B5),
    ("B6", PageSize::B6),
    ("B7", PageSize::B7),
    ("B8", PageSize::B8),
    ("B9", PageSize::B9),
    ("B10", PageSize::B10),
    ("Letter", PageSize::Letter),
    ("Legal", PageSize::Legal),
    ("Tabloid", PageSize::Tabloid),
    ("Ledger", PageSize::Ledger),
    ("Executive", PageSize::Executive),
];

impl PageSize {
    /// Width and height in points, portrait.
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::A0 => (2384.0, 3370.0),
            PageSize::A1 => (1684.0, 2384.0),
            PageSize::A2 => (1191.0, 1684.0),
            PageSize::A3 => (842.0, 1191.0),
            PageSize::A4 => (595.0, 842.0),
            PageSize::A5 => (420.0, 595.0),
            PageSize::A6 => (298.0, 420.0),
            PageSize::A7 => (210.0, 298.0),
            PageSize::A8 => (148.0, 210.0),
            PageSize::A9 => (105.0, 147.0),
            PageSize::A10 => (74.0, 105.0),
            PageSize::B0 => (2834.0, 4008.0),
            PageSize::B1 => (2004.0, 2834.0),
            PageSize::B2 => (1417.0, 2004.0),
            PageSize::B3 => (1000.0, 1417.0),
            PageSize::B4 => (708.0, 1000.0),
            PageSize::B5 => (498.0, 708.0),
            PageSize::B6 => (354.0, 498.0),
            PageSize::B7 => (249.0, 354.0),
            PageSize::B8 => (175.0, 249.0),
            PageSize::B9 => (124.0, 175.0),
            PageSize::B10 => (87.0, 124.0),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Tabloid => (792.0, 1224.0),
            PageSize::Ledger => (1224.0, 792.0),
            PageSize::Executive => (522.0, 756.0),
        }
    }

    /// Width and height after applying `orientation`.
    pub fn oriented_pt(&self, orientation: PageOrientation) -> (f32, f32) {
        let (w, h) = self.dimensions_pt();
        match orientation {
            PageOrientation::Portrait => (w.min(h), w.max(h)),
            PageOrientation::Landscape => (w.max(h), w.min(h)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
pub enum PageOrientation {
    #[default]
    Portrait,
    Landscape,
}
