// Copyright 2024 Tower Field Authors.

use std::{
	iter,
	ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign},
};

use super::{error::Error, field::Field};

/// A field extension of a base field `F`, viewed as a vector space over `F`.
pub trait ExtensionField<F: Field>:
	Field
	+ From<F>
	+ TryInto<F>
	+ Add<F, Output = Self>
	+ Sub<F, Output = Self>
	+ Mul<F, Output = Self>
	+ AddAssign<F>
	+ SubAssign<F>
	+ MulAssign<F>
{
	type Iterator: Iterator<Item = F>;

	/// Extension degree over the base field `F`.
	const DEGREE: usize;

	/// Returns the `i`'th basis element, the monomial with a 1 in position `i`.
	fn basis(i: usize) -> Result<Self, Error>;

	/// Assembles an element from its little-endian base field coordinates.
	fn from_bases(base_elems: &[F]) -> Result<Self, Error>;

	/// Iterates the base field coordinates in little-endian order.
	fn iter_bases(&self) -> Self::Iterator;
}

impl<F: Field> ExtensionField<F> for F {
	type Iterator = iter::Once<F>;

	const DEGREE: usize = 1;

	fn basis(i: usize) -> Result<Self, Error> {
		if i != 0 {
			return Err(Error::ExtensionDegreeMismatch);
		}
		Ok(Self::ONE)
	}

	fn from_bases(base_elems: &[F]) -> Result<Self, Error> {
		match base_elems.len() {
			0 => Ok(F::ZERO),
			1 => Ok(base_elems[0]),
			_ => Err(Error::ExtensionDegreeMismatch),
		}
	}

	fn iter_bases(&self) -> Self::Iterator {
		iter::once(*self)
	}
}
