// Copyright 2024 Tower Field Authors.

/// Value that can be multiplied by itself.
pub trait Square {
	/// Returns the value multiplied by itself.
	fn square(self) -> Self;
}

/// Value that can be inverted.
pub trait InvertOrZero {
	/// Returns the inverted value, or zero in case when `self` is zero.
	fn invert_or_zero(self) -> Self;
}

/// Value that can be multiplied by the alpha element of its tower level.
pub trait MulAlpha {
	/// Multiply self by alpha.
	fn mul_alpha(self) -> Self;
}
