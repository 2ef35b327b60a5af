use std::fmt;

/// Damage multiplier on an exact quarter scale.
///
/// Discriminants are quarters (0 = immune, 4 = neutral, 16 = 4x) so two
/// single-type values combine with integer math and ordering matches
/// magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Multiplier {
    Immune = 0,
    Quarter = 1,
    Half = 2,
    Neutral = 4,
    Double = 8,
    Quadruple = 16,
}

impl Multiplier {
    /// Bucket order used by the histogram and the export line.
    pub const EXPORT_ORDER: [Multiplier; 6] = [
        Multiplier::Quadruple,
        Multiplier::Double,
        Multiplier::Neutral,
        Multiplier::Half,
        Multiplier::Quarter,
        Multiplier::Immune,
    ];

    /// Buckets listed for offensive-coverage planning, in display order.
    pub const RESISTED_OR_NEUTRAL: [Multiplier; 3] =
        [Multiplier::Quarter, Multiplier::Half, Multiplier::Neutral];

    pub fn quarters(self) -> u8 {
        self as u8
    }

    pub fn from_quarters(quarters: u16) -> Option<Self> {
        match quarters {
            0 => Some(Multiplier::Immune),
            1 => Some(Multiplier::Quarter),
            2 => Some(Multiplier::Half),
            4 => Some(Multiplier::Neutral),
            8 => Some(Multiplier::Double),
            16 => Some(Multiplier::Quadruple),
            _ => None,
        }
    }

    /// Values a single defending type may take in a chart.
    pub fn from_single_type_value(value: f64) -> Option<Self> {
        if value == 0.0 {
            Some(Multiplier::Immune)
        } else if value == 0.5 {
            Some(Multiplier::Half)
        } else if value == 1.0 {
            Some(Multiplier::Neutral)
        } else if value == 2.0 {
            Some(Multiplier::Double)
        } else {
            None
        }
    }

    /// Product of two single-type multipliers against a dual-type defender.
    ///
    /// Chart entries are limited to 0, 0.5, 1 and 2, so the product of two
    /// of them always lands back in the six-value set. Anything else
    /// saturates at 0.25 or 4.
    pub fn combine(self, other: Multiplier) -> Multiplier {
        if self == Multiplier::Immune || other == Multiplier::Immune {
            return Multiplier::Immune;
        }
        let product = (self.quarters() as u16 * other.quarters() as u16 / 4).clamp(1, 16);
        Multiplier::from_quarters(product.next_power_of_two()).unwrap_or(Multiplier::Quadruple)
    }

    /// Position inside [`Multiplier::EXPORT_ORDER`].
    pub fn export_index(self) -> usize {
        match self {
            Multiplier::Quadruple => 0,
            Multiplier::Double => 1,
            Multiplier::Neutral => 2,
            Multiplier::Half => 3,
            Multiplier::Quarter => 4,
            Multiplier::Immune => 5,
        }
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Multiplier::Immune => "0",
            Multiplier::Quarter => "0.25",
            Multiplier::Half => "0.5",
            Multiplier::Neutral => "1",
            Multiplier::Double => "2",
            Multiplier::Quadruple => "4",
        };
        f.pad(label)
    }
}

/// Result of a coverage lookup; nothing selected means nothing to compute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Coverage {
    NotApplicable,
    Value(Multiplier),
}

impl Coverage {
    pub fn value(self) -> Option<Multiplier> {
        match self {
            Coverage::NotApplicable => None,
            Coverage::Value(m) => Some(m),
        }
    }
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coverage::NotApplicable => f.pad("-"),
            Coverage::Value(m) => m.fmt(f),
        }
    }
}
