// Copyright 2024 Tower Field Authors.

use std::{
	fmt::{Debug, Display, LowerHex},
	hash::{Hash, Hasher},
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr},
};

use bytemuck::Zeroable;
use derive_more::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};
use rand::{
	distributions::{Distribution, Standard},
	Rng, RngCore,
};
use subtle::{ConditionallySelectable, ConstantTimeEq};

/// Log2 of a power-of-two value, checked at compile time where possible.
pub(crate) const fn checked_log_2(val: usize) -> usize {
	assert!(val.is_power_of_two());
	val.trailing_zeros() as usize
}

/// Primitive integer underlying a binary field element.
///
/// The underlier carries exactly the meaningful bits of one field element: the
/// sub-byte levels of the tower use [`SmallU`] while levels of a byte and above
/// use the matching built-in unsigned integer.
pub trait UnderlierType:
	Default
	+ Debug
	+ Display
	+ LowerHex
	+ BitAnd<Self, Output = Self>
	+ BitAndAssign<Self>
	+ BitOr<Self, Output = Self>
	+ BitOrAssign<Self>
	+ BitXor<Self, Output = Self>
	+ BitXorAssign<Self>
	+ Shr<usize, Output = Self>
	+ Shl<usize, Output = Self>
	+ Not<Output = Self>
	+ PartialEq
	+ Eq
	+ ConstantTimeEq
	+ Copy
	+ Random
{
	/// Number of bits in the value.
	const LOG_BITS: usize;
	const BITS: usize = 1 << Self::LOG_BITS;

	const ZERO: Self;
	const ONE: Self;

	/// Fill every bit of the value with the given bit.
	/// `val` must be 0 or 1.
	fn fill_with_bit(val: u8) -> Self;
}

/// A value that can be generated uniformly at random.
pub trait Random {
	fn random(rng: impl RngCore) -> Self;
}

impl<T> Random for T
where
	Standard: Distribution<T>,
{
	fn random(mut rng: impl RngCore) -> Self {
		rng.gen()
	}
}

/// Trait for getting the underlier out of a wrapping type in generic code.
///
/// Bidirectional `From` implementations alone are not enough because they give
/// no way to name the underlier type.
pub trait WithUnderlier: From<Self::Underlier>
where
	Self::Underlier: From<Self>,
{
	type Underlier: UnderlierType;

	fn to_underlier(self) -> Self::Underlier {
		self.into()
	}
}

/// A potentially lossy numeric cast, a drop-in replacement of `as _` in
/// generic code.
pub trait NumCast<From> {
	fn num_cast_from(val: From) -> Self;
}

impl<U: UnderlierType> NumCast<U> for U {
	fn num_cast_from(val: U) -> Self {
		val
	}
}

macro_rules! impl_underlier_type {
	($name:ty) => {
		impl UnderlierType for $name {
			const LOG_BITS: usize = checked_log_2(Self::BITS as usize);

			const ZERO: Self = 0;
			const ONE: Self = 1;

			fn fill_with_bit(val: u8) -> Self {
				debug_assert!(val == 0 || val == 1);
				(val as Self).wrapping_neg()
			}
		}
	};
}

macro_rules! impl_num_cast {
	($smaller:ty, $bigger:ty,) => {
		impl NumCast<$bigger> for $smaller {
			fn num_cast_from(val: $bigger) -> Self {
				val as _
			}
		}
	};
	($smaller:ty, $head:ty, $($tail:ty,)+) => {
		impl_num_cast!($smaller, $head,);
		impl_num_cast!($smaller, $($tail,)*);
	};
}

macro_rules! impl_underlier_sequence {
	($head:ty,) => {
		impl_underlier_type!($head);
	};
	($head:ty, $($tail:ty,)*) => {
		impl_underlier_type!($head);
		impl_num_cast!($head, $($tail,)*);

		impl_underlier_sequence!($($tail,)*);
	};
}

impl_underlier_sequence!(u8, u16, u32, u64, u128,);

/// Unsigned integer with a size strictly less than 8 bits.
#[derive(
	Default,
	Zeroable,
	Clone,
	Copy,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	BitAnd,
	BitAndAssign,
	BitOr,
	BitOrAssign,
	BitXor,
	BitXorAssign,
)]
#[repr(transparent)]
pub struct SmallU<const N: usize>(u8);

impl<const N: usize> SmallU<N> {
	const _CHECK_SIZE: () = {
		assert!(N < 8);
	};

	#[inline(always)]
	pub const fn new(val: u8) -> Self {
		Self(val & Self::ONES.0)
	}

	#[inline(always)]
	pub const fn val(&self) -> u8 {
		self.0
	}

	const ONES: Self = Self((1u8 << N) - 1);
}

impl<const N: usize> Debug for SmallU<N> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		Debug::fmt(&self.val(), f)
	}
}

impl<const N: usize> Display for SmallU<N> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.val(), f)
	}
}

impl<const N: usize> LowerHex for SmallU<N> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		LowerHex::fmt(&self.0, f)
	}
}

impl<const N: usize> Hash for SmallU<N> {
	#[inline]
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.val().hash(state);
	}
}

impl<const N: usize> ConstantTimeEq for SmallU<N> {
	fn ct_eq(&self, other: &Self) -> subtle::Choice {
		self.val().ct_eq(&other.val())
	}
}

impl<const N: usize> ConditionallySelectable for SmallU<N> {
	fn conditional_select(a: &Self, b: &Self, choice: subtle::Choice) -> Self {
		Self(u8::conditional_select(&a.0, &b.0, choice))
	}
}

impl<const N: usize> Distribution<SmallU<N>> for Standard {
	fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SmallU<N> {
		SmallU::new(rng.gen::<u8>())
	}
}

impl<const N: usize> Shr<usize> for SmallU<N> {
	type Output = Self;

	#[inline(always)]
	fn shr(self, rhs: usize) -> Self::Output {
		Self(self.val() >> rhs)
	}
}

impl<const N: usize> Shl<usize> for SmallU<N> {
	type Output = Self;

	#[inline(always)]
	fn shl(self, rhs: usize) -> Self::Output {
		Self(self.val() << rhs) & Self::ONES
	}
}

impl<const N: usize> Not for SmallU<N> {
	type Output = Self;

	fn not(self) -> Self::Output {
		self ^ Self::ONES
	}
}

impl<const N: usize> UnderlierType for SmallU<N> {
	const LOG_BITS: usize = checked_log_2(N);

	const ZERO: Self = Self(0);
	const ONE: Self = Self(1);

	fn fill_with_bit(val: u8) -> Self {
		Self(u8::fill_with_bit(val)) & Self::ONES
	}
}

macro_rules! impl_small_from {
	($($typ:ty),+) => {
		$(
			impl<const N: usize> From<SmallU<N>> for $typ {
				#[inline(always)]
				fn from(value: SmallU<N>) -> Self {
					value.val() as _
				}
			}

			impl<const N: usize> NumCast<$typ> for SmallU<N> {
				#[inline(always)]
				fn num_cast_from(val: $typ) -> Self {
					Self::new(val as u8)
				}
			}
		)+
	};
}

impl_small_from!(u8, u16, u32, u64, u128, usize);

impl From<SmallU<1>> for SmallU<2> {
	#[inline(always)]
	fn from(value: SmallU<1>) -> Self {
		Self(value.val())
	}
}

impl From<SmallU<1>> for SmallU<4> {
	#[inline(always)]
	fn from(value: SmallU<1>) -> Self {
		Self(value.val())
	}
}

impl From<SmallU<2>> for SmallU<4> {
	#[inline(always)]
	fn from(value: SmallU<2>) -> Self {
		Self(value.val())
	}
}

impl NumCast<SmallU<2>> for SmallU<1> {
	#[inline(always)]
	fn num_cast_from(val: SmallU<2>) -> Self {
		Self::new(val.val())
	}
}

impl NumCast<SmallU<4>> for SmallU<1> {
	#[inline(always)]
	fn num_cast_from(val: SmallU<4>) -> Self {
		Self::new(val.val())
	}
}

impl NumCast<SmallU<4>> for SmallU<2> {
	#[inline(always)]
	fn num_cast_from(val: SmallU<4>) -> Self {
		Self::new(val.val())
	}
}

pub type U1 = SmallU<1>;
pub type U2 = SmallU<2>;
pub type U4 = SmallU<4>;

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_new_masks_to_width() {
		assert_eq!(U1::new(0xff).val(), 0x1);
		assert_eq!(U2::new(0xff).val(), 0x3);
		assert_eq!(U4::new(0xff).val(), 0xf);
	}

	#[test]
	fn test_fill_with_bit() {
		assert_eq!(U1::fill_with_bit(1).val(), 0x1);
		assert_eq!(U2::fill_with_bit(1).val(), 0x3);
		assert_eq!(U4::fill_with_bit(1).val(), 0xf);
		assert_eq!(U4::fill_with_bit(0).val(), 0x0);
		assert_eq!(u8::fill_with_bit(1), 0xff);
		assert_eq!(u64::fill_with_bit(0), 0);
	}

	#[test]
	fn test_shl_stays_in_range() {
		assert_eq!((U2::new(0x3) << 1).val(), 0x2);
		assert_eq!((U4::new(0x9) << 1).val(), 0x2);
		assert_eq!((U4::new(0x1) << 3).val(), 0x8);
	}

	#[test]
	fn test_num_cast_truncates() {
		assert_eq!(U4::num_cast_from(0x1234u32).val(), 0x4);
		assert_eq!(U1::num_cast_from(U4::new(0xe)).val(), 0x0);
		assert_eq!(u8::num_cast_from(0xabcdu16), 0xcd);
	}

	proptest! {
		#[test]
		fn test_small_random_in_range(seed in any::<u64>()) {
			use rand::{rngs::StdRng, SeedableRng};

			let mut rng = StdRng::seed_from_u64(seed);
			prop_assert!(U1::random(&mut rng).val() < 2);
			prop_assert!(U2::random(&mut rng).val() < 4);
			prop_assert!(U4::random(&mut rng).val() < 16);
		}
	}
}
