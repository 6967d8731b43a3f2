#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
#[repr(u8)]
pub enum Step {
    /// A subtree with no variables was replaced by its value.
    ///
    /// `2*3 = 6`
    ConstantFold,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `a-0 = a`
    SubtractZero,

    /// `0-a = -1*a`
    SubtractFromZero,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `(a/b)*(c/d) = (a*c)/(b*d)`
    MultiplyFractions,

    /// `(a/b)*c = (a*c)/b`
    MultiplyFractionLeft,

    /// `a*(c/d) = (a*c)/d`
    MultiplyFractionRight,

    /// `a*a = a^2`
    SquareVariable,

    /// `0/a = 0`
    DivideZero,

    /// `a/1 = a`
    DivideOne,

    /// `(a/b)/(c/d) = (a*d)/(b*c)`
    DivideFractions,

    /// `(a/b)/c = a/(b*c)`
    DivideFractionNumerator,

    /// `a/(c/d) = (a*d)/c`
    DivideFractionDenominator,

    /// `(x*a)/x = a`
    /// `x^n/x = x^(n-1)`
    CancelVariable,

    /// `a/a = 1`
    DivideSelf,

    /// `0^a = 0`
    PowerZeroLeft,

    /// `a^0 = 1`
    PowerZero,

    /// `1^a = 1`
    PowerOneLeft,

    /// `a^1 = a`
    PowerOne,
}

/// A type that collects the steps taken by the simplifier.
///
/// Implemented for `()`, which discards every step, and for [`Vec`], which keeps them in the order
/// they were taken.
pub trait StepCollector<S> {
    /// Records a step.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}
