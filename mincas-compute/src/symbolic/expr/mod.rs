//! The expression tree operated on by every pass in this crate.
//!
//! A [`SymExpr`] is a binary / unary tree of nodes. Unlike a flattened sum-of-products
//! representation, every [`SymExpr::Plus`] and [`SymExpr::Multiply`] node has exactly two operands, so
//! `x + y + z` is stored as either `(x + y) + z` or `x + (y + z)`, and the two are different
//! trees.
//!
//! Trees are plain values. No pass in this crate mutates a node it was given; evaluation,
//! differentiation and simplification all build new trees, so the same [`SymExpr`] can be handed to
//! any number of them.
//!
//! # Strict equality
//!
//! The [`PartialEq`] and [`Eq`] implementations for [`SymExpr`] implement **strict equality**, which
//! is purely structural with one exception: the operands of [`SymExpr::Plus`] and
//! [`SymExpr::Multiply`] may match in either order. This is only checked at one level; `(a + b) + c`
//! is still not equal to `a + (b + c)`. [`SymExpr::Minus`] and [`SymExpr::Divide`] compare their
//! operands in order.
//!
//! ```
//! use mincas_compute::symbolic::SymExpr;
//!
//! let one = SymExpr::constant(1.0);
//! let two = SymExpr::constant(2.0);
//! assert_eq!(one.clone() + two.clone(), two.clone() + one.clone());
//! assert_ne!(one.clone() - two.clone(), two - one);
//! ```
//!
//! See [`strictly_eq`] for the full rules.

mod eq;
mod iter;

use iter::ExprIter;
use std::{fmt, ops::{Add, Div, Mul, Range, Sub}};

pub use eq::strictly_eq;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A real-valued arithmetic / trigonometric expression.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SymExpr {
    /// A number, such as `2` or `0.5`.
    Constant(f64),

    /// A free variable, such as `x` or `y`.
    Variable(String),

    /// `lhs + rhs`
    Plus(Box<SymExpr>, Box<SymExpr>),

    /// `lhs - rhs`
    Minus(Box<SymExpr>, Box<SymExpr>),

    /// `lhs * rhs`
    Multiply(Box<SymExpr>, Box<SymExpr>),

    /// `lhs / rhs`
    Divide(Box<SymExpr>, Box<SymExpr>),

    /// `sin(expr)`
    Sin(Box<SymExpr>),

    /// `cos(expr)`
    Cos(Box<SymExpr>),

    /// `ln(expr)`
    Ln(Box<SymExpr>),

    /// `base^exponent`, where both may be arbitrary expressions.
    Pow(Box<SymExpr>, Box<SymExpr>),
}

impl SymExpr {
    /// Creates an [`SymExpr::Constant`].
    pub fn constant(value: f64) -> Self {
        Self::Constant(value)
    }

    /// Creates an [`SymExpr::Variable`].
    pub fn var(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Wraps this expression in [`SymExpr::Sin`].
    pub fn sin(self) -> Self {
        Self::Sin(Box::new(self))
    }

    /// Wraps this expression in [`SymExpr::Cos`].
    pub fn cos(self) -> Self {
        Self::Cos(Box::new(self))
    }

    /// Wraps this expression in [`SymExpr::Ln`].
    pub fn ln(self) -> Self {
        Self::Ln(Box::new(self))
    }

    /// Raises this expression to the given power. No simplification is done.
    pub fn pow(self, exponent: impl Into<SymExpr>) -> Self {
        Self::Pow(Box::new(self), Box::new(exponent.into()))
    }

    /// If the expression is a [`SymExpr::Constant`], returns the contained value.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Self::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// If the expression is a [`SymExpr::Variable`], returns a reference to the contained name.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true if the expression is a [`SymExpr::Constant`] equal to zero, using floating-point
    /// comparison (so `-0.0` is zero here, even though it is not strictly equal to `0.0`).
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Constant(value) if *value == 0.0)
    }

    /// Returns true if the expression is a [`SymExpr::Constant`] equal to one.
    pub fn is_one(&self) -> bool {
        matches!(self, Self::Constant(value) if *value == 1.0)
    }

    /// Returns true if the expression is a [`SymExpr::Divide`].
    pub fn is_divide(&self) -> bool {
        matches!(self, Self::Divide(..))
    }

    /// Returns true if a [`SymExpr::Variable`] appears anywhere in the tree.
    pub fn contains_variable(&self) -> bool {
        self.post_order_iter().any(|expr| matches!(expr, Self::Variable(_)))
    }

    /// Returns the names of all variables in the tree, in the order they first appear from left
    /// to right. Each name appears once.
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols = Vec::new();
        for name in self.post_order_iter().filter_map(Self::as_symbol) {
            if !symbols.contains(&name) {
                symbols.push(name);
            }
        }
        symbols
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter<'_> {
        ExprIter::new(self)
    }

    /// Renders the expression in infix notation, returning the text along with the byte span of
    /// every [`SymExpr::Variable`] occurrence in it.
    ///
    /// The text is identical to the [`Display`](fmt::Display) output.
    pub fn render(&self) -> Rendered {
        let mut rendered = Rendered::default();
        self.render_into(&mut rendered);
        rendered
    }

    /// Returns the precedence of the expression, where higher binds tighter.
    fn precedence(&self) -> u8 {
        match self {
            Self::Plus(..) | Self::Minus(..) => 1,
            Self::Multiply(..) | Self::Divide(..) => 2,
            Self::Pow(..) => 3,
            Self::Constant(value) if value.is_sign_negative() => 0,
            Self::Constant(_) | Self::Variable(_) | Self::Sin(_) | Self::Cos(_) | Self::Ln(_) => 4,
        }
    }

    /// Renders `operand` as a child of `self`, adding parentheses if it would otherwise be read
    /// with the wrong grouping. `strict` is set for operands that need parentheses even at equal
    /// precedence (the right side of `-` and `/`, the left side of `^`).
    fn render_operand(&self, operand: &SymExpr, strict: bool, out: &mut Rendered) {
        let (inner, outer) = (operand.precedence(), self.precedence());
        if inner < outer || (strict && inner == outer) {
            out.text.push('(');
            operand.render_into(out);
            out.text.push(')');
        } else {
            operand.render_into(out);
        }
    }

    /// Renders a binary operator node. `^` is right-associative, every other operator rendered
    /// through here is left-associative.
    fn render_binary(&self, lhs: &SymExpr, op: &str, rhs: &SymExpr, out: &mut Rendered) {
        let right_assoc = matches!(self, Self::Pow(..));
        self.render_operand(lhs, right_assoc, out);
        out.text.push_str(op);
        self.render_operand(rhs, !right_assoc, out);
    }

    fn render_into(&self, out: &mut Rendered) {
        match self {
            Self::Constant(value) => out.text.push_str(&value.to_string()),
            Self::Variable(name) => {
                let start = out.text.len();
                out.text.push_str(name);
                out.symbols.push((name.clone(), start..out.text.len()));
            },
            Self::Plus(lhs, rhs) => {
                // `+` is associative, so a right operand sum never needs parentheses
                self.render_operand(lhs, false, out);
                out.text.push_str(" + ");
                self.render_operand(rhs, false, out);
            },
            Self::Minus(lhs, rhs) => self.render_binary(lhs, " - ", rhs, out),
            Self::Multiply(lhs, rhs) => {
                self.render_operand(lhs, false, out);
                out.text.push_str(" * ");
                self.render_operand(rhs, rhs.is_divide(), out);
            },
            Self::Divide(lhs, rhs) => self.render_binary(lhs, " / ", rhs, out),
            Self::Pow(base, exp) => self.render_binary(base, "^", exp, out),
            Self::Sin(expr) | Self::Cos(expr) | Self::Ln(expr) => {
                let name = match self {
                    Self::Sin(_) => "sin",
                    Self::Cos(_) => "cos",
                    _ => "ln",
                };
                out.text.push_str(name);
                out.text.push('(');
                expr.render_into(out);
                out.text.push(')');
            },
        }
    }
}

/// The output of [`SymExpr::render`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    /// The expression in infix notation.
    pub text: String,

    /// Every variable occurrence in `text`, in left-to-right order.
    pub symbols: Vec<(String, Range<usize>)>,
}

impl Rendered {
    /// Returns the spans of every occurrence of the given variable.
    pub fn spans_of(&self, name: &str) -> Vec<Range<usize>> {
        self.symbols
            .iter()
            .filter(|(sym, _)| sym == name)
            .map(|(_, span)| span.clone())
            .collect()
    }
}

impl fmt::Display for SymExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render().text)
    }
}

impl From<f64> for SymExpr {
    fn from(value: f64) -> Self {
        Self::Constant(value)
    }
}

impl From<&str> for SymExpr {
    fn from(name: &str) -> Self {
        Self::Variable(name.to_string())
    }
}

/// Implements a binary operator by building the corresponding node verbatim.
macro_rules! binary_op {
    ($($trait:ident $method:ident => $variant:ident),* $(,)?) => {
        $(
            impl<T: Into<SymExpr>> $trait<T> for SymExpr {
                type Output = SymExpr;

                fn $method(self, rhs: T) -> Self::Output {
                    SymExpr::$variant(Box::new(self), Box::new(rhs.into()))
                }
            }
        )*
    };
}

binary_op! {
    Add add => Plus,
    Sub sub => Minus,
    Mul mul => Multiply,
    Div div => Divide,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> SymExpr {
        SymExpr::var("x")
    }

    fn y() -> SymExpr {
        SymExpr::var("y")
    }

    #[test]
    fn operators_build_nodes_verbatim() {
        assert!(matches!(x() + 0.0, SymExpr::Plus(..)));
        assert!(matches!(x() * 1.0, SymExpr::Multiply(..)));
        assert!(matches!(x() / x(), SymExpr::Divide(..)));
        assert!(matches!(x() - x(), SymExpr::Minus(..)));
    }

    #[test]
    fn zero_and_one() {
        assert!(SymExpr::constant(0.0).is_zero());
        assert!(SymExpr::constant(-0.0).is_zero());
        assert!(!SymExpr::constant(1.0).is_zero());
        assert!(SymExpr::constant(1.0).is_one());
        assert!(!x().is_one());
    }

    #[test]
    fn symbols_in_order() {
        let expr = (y() * x()).sin() + x().pow(y());
        assert_eq!(expr.symbols(), vec!["y", "x"]);
        assert!(expr.contains_variable());
        assert!(!(SymExpr::constant(2.0) + 3.0).contains_variable());
    }

    #[test]
    fn display_infix() {
        let expr = x() * 5.0 + 7.0;
        assert_eq!(expr.to_string(), "x * 5 + 7");

        let expr = x().pow(y() - 1.0);
        assert_eq!(expr.to_string(), "x^(y - 1)");

        let expr = (x() + y()) * (x() - y());
        assert_eq!(expr.to_string(), "(x + y) * (x - y)");
    }

    #[test]
    fn display_associativity() {
        assert_eq!((x() - (y() - x())).to_string(), "x - (y - x)");
        assert_eq!(((x() - y()) - x()).to_string(), "x - y - x");
        assert_eq!((x() / (y() * x())).to_string(), "x / (y * x)");
        assert_eq!((x().pow(y())).pow(2.0).to_string(), "(x^y)^2");
        assert_eq!(x().pow(y().pow(2.0)).to_string(), "x^y^2");
        assert_eq!((x() * (y() / x())).to_string(), "x * (y / x)");
    }

    #[test]
    fn display_functions_and_negatives() {
        assert_eq!((SymExpr::constant(-1.0) * x().sin()).to_string(), "(-1) * sin(x)");
        assert_eq!(x().ln().cos().to_string(), "cos(ln(x))");
        assert_eq!(SymExpr::constant(-1.0).pow(x()).to_string(), "(-1)^x");
    }

    #[test]
    fn render_spans() {
        let rendered = (x() + y() * x()).render();
        assert_eq!(rendered.text, "x + y * x");
        assert_eq!(rendered.spans_of("x"), vec![0..1, 8..9]);
        assert_eq!(rendered.spans_of("y"), vec![4..5]);
        assert_eq!(rendered.spans_of("z"), Vec::<Range<usize>>::new());
    }
}
