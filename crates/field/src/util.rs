// Copyright 2024 Tower Field Authors.

use std::iter;

use crate::{extension::ExtensionField, field::Field};

/// Computes the inner product of two vectors without checking that the lengths are equal
pub fn inner_product_unchecked<F, FE>(a: impl Iterator<Item = FE>, b: impl Iterator<Item = F>) -> FE
where
	F: Field,
	FE: ExtensionField<F>,
{
	a.zip(b).map(|(a_i, b_i)| a_i * b_i).sum::<FE>()
}

/// Evaluation of the 2-variate multilinear which indicates the condition x == y
#[inline(always)]
pub fn eq<F: Field>(x: F, y: F) -> F {
	x * y + (F::ONE - x) * (F::ONE - y)
}

/// Iterate the powers of a given value, beginning with 1 (the 0'th power).
pub fn powers<F: Field>(val: F) -> impl Iterator<Item = F> {
	iter::successors(Some(F::ONE), move |&power| Some(power * val))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::binary_field::{BinaryField16b, BinaryField1b, BinaryField8b};

	#[test]
	fn test_powers() {
		let x = BinaryField8b::new(0x1b);
		let pows = powers(x).take(5).collect::<Vec<_>>();
		assert_eq!(pows[0], BinaryField8b::ONE);
		assert_eq!(pows[1], x);
		assert_eq!(pows[2], x * x);
		assert_eq!(pows[3], x * x * x);
		assert_eq!(pows[4], x * x * x * x);
	}

	#[test]
	fn test_eq_indicator() {
		let zero = BinaryField1b::ZERO;
		let one = BinaryField1b::ONE;
		assert_eq!(eq(zero, zero), one);
		assert_eq!(eq(one, one), one);
		assert_eq!(eq(zero, one), zero);
		assert_eq!(eq(one, zero), zero);
	}

	#[test]
	fn test_inner_product_unchecked() {
		let a = [0x0102, 0x0304, 0x0506].map(BinaryField16b::new);
		let b = [0x03, 0x05, 0x07].map(BinaryField8b::new);
		let expected = a
			.iter()
			.zip(b.iter())
			.fold(BinaryField16b::ZERO, |acc, (&a_i, &b_i)| acc + a_i * b_i);
		assert_eq!(
			inner_product_unchecked(a.iter().copied(), b.iter().copied()),
			expected
		);
	}
}
