use crate::property::Property;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        };
        f.write_str(name)
    }
}

/// Four independently optional margins, in points.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Margins {
    pub top: Property<f32>,
    pub right: Property<f32>,
    pub bottom: Property<f32>,
    pub left: Property<f32>,
}

impl Margins {
    pub fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top: Property::with(top),
            right: Property::with(right),
            bottom: Property::with(bottom),
            left: Property::with(left),
        }
    }

    pub fn side(&self, side: Side) -> &Property<f32> {
        match side {
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }

    pub fn set_side(&mut self, side: Side, value: f32) {
        match side {
            Side::Top => self.top.set(value),
            Side::Right => self.right.set(value),
            Side::Bottom => self.bottom.set(value),
            Side::Left => self.left.set(value),
        }
    }

    /// True when all four sides are set, so one combined margin call can be issued.
    pub fn is_complete(&self) -> bool {
        Side::ALL.iter().all(|s| self.side(*s).is_set())
    }

    pub fn is_empty(&self) -> bool {
        Side::ALL.iter().all(|s| !self.side(*s).is_set())
    }

    /// The sides that were explicitly set, in top/right/bottom/left order.
    pub fn set_sides(&self) -> Vec<(Side, f32)> {
        Side::ALL
            .iter()
            .filter_map(|s| self.side(*s).get().map(|v| (*s, *v)))
            .collect()
    }

    /// Per-side merge: each side set on `self` wins over `base`.
    pub fn over(&self, base: &Margins) -> Margins {
        Margins {
            top: self.top.over(&base.top),
            right: self.right.over(&base.right),
            bottom: self.bottom.over(&base.bottom),
            left: self.left.over(&base.left),
        }
    }
}

/// A length that is either absolute (points) or relative to the container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum UnitValue {
    Point(f32),
    Percent(f32),
}

impl UnitValue {
    /// Resolves against the available extent of the container.
    pub fn resolve(&self, available: f32) -> f32 {
        match self {
            UnitValue::Point(v) => *v,
            UnitValue::Percent(p) => available * p / 100.0,
        }
    }
}

impl fmt::Display for UnitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitValue::Point(v) => write!(f, "{}pt", v),
            UnitValue::Percent(v) => write!(f, "{}%", v),
        }
    }
}

/// Absolute placement of an element instead of flow order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixedPosition {
    pub x: f32,
    pub y: f32,
    pub width: UnitValue,
    pub height: Option<UnitValue>,
    /// 1-based page number; the current page when absent.
    pub page: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margins_completeness() {
        let mut m = Margins::default();
        assert!(m.is_empty());
        m.set_side(Side::Top, 5.0);
        m.set_side(Side::Left, 2.0);
        assert!(!m.is_complete());
        assert_eq!(m.set_sides(), vec![(Side::Top, 5.0), (Side::Left, 2.0)]);
        m.set_side(Side::Right, 1.0);
        m.set_side(Side::Bottom, 0.0);
        assert!(m.is_complete());
    }

    #[test]
    fn test_margins_over_is_per_side() {
        let mut local = Margins::default();
        local.set_side(Side::Top, 20.0);
        let merged = local.over(&Margins::all(5.0));
        assert_eq!(merged.top.get(), Some(&20.0));
        assert_eq!(merged.left.get(), Some(&5.0));
    }

    #[test]
    fn test_unit_value_resolve() {
        assert_eq!(UnitValue::Percent(50.0).resolve(400.0), 200.0);
        assert_eq!(UnitValue::Point(30.0).resolve(400.0), 30.0);
    }
}
