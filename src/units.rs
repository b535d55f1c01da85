use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul, MulAssign, Neg};

/// PDF points, 1/72 of an inch. Every coordinate, width and font size in this
/// crate is expressed in points, with the origin at the bottom-left of the page.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Sum,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[display("{_0}pt")]
#[serde(transparent)]
pub struct Pt(pub f32);

/// Inches, converted to [Pt] at 72 points per inch
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Display, From)]
#[display("{_0}in")]
pub struct In(pub f32);

/// Millimetres, converted to [Pt] at 25.4 mm per inch
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Display, From)]
#[display("{_0}mm")]
pub struct Mm(pub f32);

impl From<In> for Pt {
    fn from(value: In) -> Self {
        Pt(value.0 * 72.0)
    }
}

impl From<Mm> for Pt {
    fn from(value: Mm) -> Self {
        Pt(value.0 * 72.0 / 25.4)
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Mul<Pt> for Pt {
    type Output = Pt;

    fn mul(self, rhs: Pt) -> Pt {
        Pt(self.0 * rhs.0)
    }
}

impl MulAssign<f32> for Pt {
    fn mul_assign(&mut self, rhs: f32) {
        self.0 *= rhs;
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

impl Div<Pt> for Pt {
    type Output = Pt;

    fn div(self, rhs: Pt) -> Pt {
        Pt(self.0 / rhs.0)
    }
}

impl Neg for Pt {
    type Output = Pt;

    fn neg(self) -> Pt {
        Pt(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_imperial_and_metric() {
        assert_eq!(Pt::from(In(8.5)), Pt(612.0));
        assert!((Pt::from(Mm(25.4)).0 - 72.0).abs() < 1e-4);
    }

    #[test]
    fn scales_by_plain_factors() {
        let row = Pt(20.0);
        assert_eq!(row * 0.5, Pt(10.0));
        assert_eq!(row - row * 0.5, Pt(10.0));
        assert_eq!(Pt(12.0) / Pt(2.0) * 0.5, Pt(3.0));
        assert_eq!([Pt(1.0), Pt(2.5)].into_iter().sum::<Pt>(), Pt(3.5));
    }
}
