//! Operands of the polynomial operator suite.

use std::borrow::Cow;

use crate::labeled::LabeledPolynomial;
use crate::symbol::Symbol;

/// Anything the space's `add`, `sub`, `mul` and `neg` accept.
///
/// Integers and symbols lift implicitly: an integer `n` becomes the ring's
/// `number(n)`, a symbol `s` becomes the monomial `s` with coefficient one.
/// Borrowed polynomials are only cloned when the result needs to own them.
#[derive(Clone, Debug)]
pub enum Operand<'a, C: Clone> {
    /// An integer, lifted through the ring's `number`.
    Int(i64),
    /// An element of the coefficient ring.
    Constant(C),
    /// A variable.
    Symbol(Cow<'a, Symbol>),
    /// A polynomial.
    Polynomial(Cow<'a, LabeledPolynomial<C>>),
}

/// Marks a ring element as a constant operand.
///
/// Coefficient types may themselves be integers, so constants are wrapped to
/// keep them apart from the integer operands that lift through `number`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Const<C>(pub C);

impl<C: Clone> From<i64> for Operand<'_, C> {
    fn from(n: i64) -> Self {
        Operand::Int(n)
    }
}

impl<C: Clone> From<i32> for Operand<'_, C> {
    fn from(n: i32) -> Self {
        Operand::Int(i64::from(n))
    }
}

impl<C: Clone> From<Const<C>> for Operand<'_, C> {
    fn from(c: Const<C>) -> Self {
        Operand::Constant(c.0)
    }
}

impl<C: Clone> From<Symbol> for Operand<'_, C> {
    fn from(s: Symbol) -> Self {
        Operand::Symbol(Cow::Owned(s))
    }
}

impl<'a, C: Clone> From<&'a Symbol> for Operand<'a, C> {
    fn from(s: &'a Symbol) -> Self {
        Operand::Symbol(Cow::Borrowed(s))
    }
}

impl<C: Clone> From<LabeledPolynomial<C>> for Operand<'_, C> {
    fn from(p: LabeledPolynomial<C>) -> Self {
        Operand::Polynomial(Cow::Owned(p))
    }
}

impl<'a, C: Clone> From<&'a LabeledPolynomial<C>> for Operand<'a, C> {
    fn from(p: &'a LabeledPolynomial<C>) -> Self {
        Operand::Polynomial(Cow::Borrowed(p))
    }
}
