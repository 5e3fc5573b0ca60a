use num_traits::{Num, NumAssign};
use std::fmt::{Debug, Display};
use std::str::FromStr;

/// Core trait for container elements.
///
/// All arithmetic in the vector and matrix types is expressed on values
/// implementing `ElementT`.  The trait relies on [`num_traits`](num_traits)
/// for its arithmetic bounds, and on [`FromStr`] / [`Display`] for text
/// input and output.  It is implemented automatically for every type
/// satisfying the bounds, which includes all primitive integers and floats.
///
/// Freshly constructed containers hold `T::zero()` in every slot.
pub trait ElementT:
    'static + Num + NumAssign + Copy + Default + Display + Debug + FromStr + Sized
{
}

impl<T> ElementT for T where
    T: 'static + Num + NumAssign + Copy + Default + Display + Debug + FromStr + Sized
{
}
