use super::modular::Modular;
use crate::Curve;

use bigint::{NonZero, U256};

use std::fmt;
use std::marker::PhantomData;

/// An element of the curve's prime field, reduced modulo
/// `C::PRIME_MODULUS` on construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldElement<C: Curve>(pub(crate) U256, pub(crate) PhantomData<C>);

impl<C: Curve> FieldElement<C> {
    pub const ONE: Self = Self(U256::ONE, PhantomData);
    pub const ZERO: Self = Self(U256::ZERO, PhantomData);

    pub fn is_zero(&self) -> bool {
        self.0 == U256::ZERO
    }
}

impl<C: Curve> Modular for FieldElement<C> {
    const MODULUS: U256 = C::PRIME_MODULUS;

    fn new(number: U256) -> Self {
        let reduced = if number < Self::MODULUS {
            number
        } else {
            // NOTE unwrap is fine here because the modulus
            // can be safely assumed to be nonzero
            number % NonZero::new(Self::MODULUS).unwrap()
        };

        Self(reduced, PhantomData)
    }

    fn inner(&self) -> &U256 {
        &self.0
    }
}

impl<C: Curve> fmt::Display for FieldElement<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'a, 'b, C: Curve> std::ops::Add<&'b FieldElement<C>> for &'a FieldElement<C> {
    type Output = FieldElement<C>;
    fn add(self, rhs: &'b FieldElement<C>) -> Self::Output {
        Modular::add(self, rhs)
    }
}

impl<C: Curve> std::ops::Add for FieldElement<C> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Modular::add(&self, &rhs)
    }
}

impl<C: Curve> std::ops::AddAssign for FieldElement<C> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<C: Curve> std::ops::Sub for FieldElement<C> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Modular::sub(&self, &rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Sub<&'b FieldElement<C>> for &'a FieldElement<C> {
    type Output = FieldElement<C>;
    fn sub(self, rhs: &FieldElement<C>) -> Self::Output {
        Modular::sub(self, rhs)
    }
}

impl<C: Curve> std::ops::Neg for FieldElement<C> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Modular::neg(&self)
    }
}

impl<C: Curve> std::ops::Mul for FieldElement<C> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Modular::mul(&self, &rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Mul<&'b FieldElement<C>> for &'a FieldElement<C> {
    type Output = FieldElement<C>;
    fn mul(self, rhs: &FieldElement<C>) -> Self::Output {
        Modular::mul(self, rhs)
    }
}

impl<C: Curve> std::ops::MulAssign for FieldElement<C> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<C: Curve> std::ops::Div for FieldElement<C> {
    type Output = Self;
    /// Field division as multiplication by the inverse. Dividing by
    /// zero yields zero (Fermat inversion maps zero to zero); callers
    /// that cannot rule out a zero divisor must check `is_zero` first.
    fn div(self, rhs: Self) -> Self::Output {
        Modular::mul(&self, &rhs.inverse())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::curve::Secp256k1;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct TinyCurve;

    impl Curve for TinyCurve {
        const PRIME_MODULUS: U256 = U256::from_u8(23);
        const ORDER: U256 = U256::ONE;
        const GENERATOR_X: U256 = U256::ZERO;
        const GENERATOR_Y: U256 = U256::ZERO;
        const COEFF_A: U256 = U256::ZERO;
        const COEFF_B: U256 = U256::from_u8(7);
    }

    type FeTiny = FieldElement<TinyCurve>;
    type FeLarge = FieldElement<Secp256k1>;

    #[test]
    fn construction_reduces() {
        assert_eq!(FeTiny::new(U256::from_u8(23)), FeTiny::ZERO);
        assert_eq!(FeTiny::new(U256::from_u8(24)), FeTiny::ONE);
        assert_eq!(FeLarge::new(Secp256k1::PRIME_MODULUS), FeLarge::ZERO);
    }

    #[test]
    fn tiny_modulus_operations() {
        let a = FeTiny::new(U256::from_u8(20));
        let b = FeTiny::new(U256::from_u8(5));
        assert_eq!(a + b, FeTiny::new(U256::from_u8(2)));
        assert_eq!(a - b, FeTiny::new(U256::from_u8(15)));
        assert_eq!(b - a, FeTiny::new(U256::from_u8(8)));
        assert_eq!(a * b, FeTiny::new(U256::from_u8(8)));
        assert_eq!(-a, FeTiny::new(U256::from_u8(3)));
    }

    #[test]
    fn division_inverts() {
        let a = FeTiny::new(U256::from_u8(13));
        let b = FeTiny::new(U256::from_u8(9));
        let q = a / b;
        assert_eq!(q * b, a);
        assert_eq!(a / a, FeTiny::ONE);

        let x = FeLarge::new(Secp256k1::GENERATOR_X);
        let y = FeLarge::new(Secp256k1::GENERATOR_Y);
        assert_eq!((x / y) * y, x);
        assert_eq!(x.inverse() * x, FeLarge::ONE);
    }

    #[test]
    fn zero_behaves() {
        assert!(FeLarge::ZERO.is_zero());
        assert!(!FeLarge::ONE.is_zero());
        let y = FeLarge::new(Secp256k1::GENERATOR_Y);
        assert_eq!(y * FeLarge::ZERO, FeLarge::ZERO);
        assert_eq!(FeLarge::ZERO.inverse(), FeLarge::ZERO);
    }
}
