use num_bigint::BigUint;

pub const LIMB_BITS: usize = 120;

/// Number of 120-bit limbs needed to hold `bits` bits.
pub fn limbs_for_bits(bits: usize) -> usize {
    (bits + LIMB_BITS - 1) / LIMB_BITS
}

fn limb_mask() -> BigUint {
    (BigUint::from(1u8) << LIMB_BITS) - 1u8
}

/// Splits `x` into little-endian 120-bit limbs, or `None` if it needs more than `num_limbs`.
pub fn biguint_to_limbs(x: &BigUint, num_limbs: usize) -> Option<Vec<u128>> {
    if x.bits() as usize > num_limbs * LIMB_BITS {
        return None;
    }

    let mask = limb_mask();
    let mut rest = x.clone();
    let mut limbs = Vec::with_capacity(num_limbs);
    for _ in 0..num_limbs {
        let digits = (&rest & &mask).to_u64_digits();
        let lo = digits.first().copied().unwrap_or(0) as u128;
        let hi = digits.get(1).copied().unwrap_or(0) as u128;
        limbs.push(lo | (hi << 64));
        rest >>= LIMB_BITS;
    }

    Some(limbs)
}

/// Inverse of [`biguint_to_limbs`]. Limbs are not range checked here.
pub fn limbs_to_biguint(limbs: &[u128]) -> BigUint {
    limbs
        .iter()
        .rev()
        .fold(BigUint::default(), |acc, &limb| (acc << LIMB_BITS) + limb)
}

pub fn limb_in_range(limb: u128) -> bool {
    limb >> LIMB_BITS == 0
}

#[test]
fn test_limbs_biguint() {
    let x = (BigUint::from(u128::MAX) << 200) + 12345u32;
    let limbs = biguint_to_limbs(&x, 3).unwrap();

    assert_eq!(limbs.len(), 3);
    assert!(limbs.iter().all(|&l| limb_in_range(l)));
    assert_eq!(limbs[0], 12345);
    assert_eq!(x, limbs_to_biguint(&limbs));

    // 328 bits do not fit into two limbs
    assert!(biguint_to_limbs(&x, 2).is_none());
}

#[test]
fn test_limbs_for_bits() {
    assert_eq!(limbs_for_bits(120), 1);
    assert_eq!(limbs_for_bits(121), 2);
    assert_eq!(limbs_for_bits(1025), 9);
    assert_eq!(limbs_for_bits(2048), 18);
    assert_eq!(limbs_for_bits(4096), 35);
}
