use bigint::{Encoding, NonZero, Split, U256, U512};

pub trait Modular: Sized {
    const MODULUS: U256;

    fn new(number: U256) -> Self;

    fn inner(&self) -> &U256;

    fn add(&self, other: &Self) -> Self {
        Self::new(self.inner().add_mod(other.inner(), &Self::MODULUS))
    }

    fn neg(&self) -> Self {
        Self::new(self.inner().neg_mod(&Self::MODULUS))
    }

    fn sub(&self, other: &Self) -> Self {
        Self::new(self.inner().sub_mod(other.inner(), &Self::MODULUS))
    }

    fn mul(&self, other: &Self) -> Self {
        Self::new(mul_mod_u256(self.inner(), other.inner(), &Self::MODULUS))
    }

    /// Square-and-multiply exponentiation, msb to lsb.
    fn pow(&self, exponent: &U256) -> Self {
        let mut result = Self::new(U256::ONE);
        for byte in exponent.to_be_bytes() {
            for i in (0..8).rev() {
                result = result.mul(&result);
                if (byte >> i) & 1 == 1 {
                    result = result.mul(self);
                }
            }
        }
        result
    }

    /// Multiplicative inverse via Fermat's little theorem. The modulus
    /// must be prime; inverting zero yields zero, so callers that may
    /// hold a zero element have to check before inverting.
    fn inverse(&self) -> Self {
        let exponent = Self::MODULUS.wrapping_sub(&U256::from_u8(2));
        self.pow(&exponent)
    }
}

pub fn mul_mod_u256(lhs: &U256, rhs: &U256, modulus: &U256) -> U256 {
    // NOTE modulus is never zero, so unwrap is fine here
    let mod512 = NonZero::new(U512::from((*modulus, U256::ZERO))).unwrap();
    // U512::from((lo, hi))
    let product = U512::from(lhs.mul_wide(rhs));
    // split the remainder result of a % b into a (lo, hi) U256 pair
    // 'hi' should always be zero because the modulus is an U256 number
    let (rem, _) = (product % mod512).split();
    rem
}

#[cfg(test)]
mod test {
    use super::*;

    struct Mod23(U256);

    impl Modular for Mod23 {
        const MODULUS: U256 = U256::from_u8(23);

        fn new(number: U256) -> Self {
            // NOTE unwrap is fine here because the modulus
            // can be safely assumed to be nonzero
            Self(number % NonZero::new(Self::MODULUS).unwrap())
        }

        fn inner(&self) -> &U256 {
            &self.0
        }
    }

    #[test]
    fn exponentiation() {
        let two = Mod23::new(U256::from_u8(2));
        // 2^10 = 1024 = 44 * 23 + 12
        assert_eq!(two.pow(&U256::from_u8(10)).0, U256::from_u8(12));
        // Fermat: a^(p-1) = 1 mod p
        assert_eq!(two.pow(&U256::from_u8(22)).0, U256::ONE);
        assert_eq!(two.pow(&U256::ZERO).0, U256::ONE);
    }

    #[test]
    fn inversion() {
        for a in 1u8..23 {
            let elem = Mod23::new(U256::from_u8(a));
            let inv = elem.inverse();
            assert_eq!(elem.mul(&inv).0, U256::ONE);
        }
        // zero has no inverse, Fermat maps it to zero
        assert_eq!(Mod23::new(U256::ZERO).inverse().0, U256::ZERO);
    }
}
