use super::SymExpr;

/// An iterator that iteratively traverses the tree of expressions in left-to-right post-order
/// (i.e. depth-first).
///
/// This iterator is created by [`SymExpr::post_order_iter`].
pub struct ExprIter<'a> {
    stack: Vec<&'a SymExpr>,
    last_visited: Option<&'a SymExpr>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn new(expr: &'a SymExpr) -> Self {
        Self {
            stack: vec![expr],
            last_visited: None,
        }
    }

    /// Pops the current expression in the stack and marks it as the last visited expression.
    fn visit(&mut self) -> Option<&'a SymExpr> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given expression is the node that was visited last.
    ///
    /// Nodes are compared by address; two structurally equal subtrees are still different nodes.
    fn is_last_visited(&self, expr: &SymExpr) -> bool {
        self.last_visited.is_some_and(|last| std::ptr::eq(last, expr))
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a SymExpr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let expr = *self.stack.last()?;
            match expr {
                SymExpr::Constant(_) | SymExpr::Variable(_) => return self.visit(),
                SymExpr::Sin(inner) | SymExpr::Cos(inner) | SymExpr::Ln(inner) => {
                    if self.is_last_visited(inner) {
                        return self.visit();
                    }
                    self.stack.push(inner);
                },
                SymExpr::Plus(lhs, rhs)
                    | SymExpr::Minus(lhs, rhs)
                    | SymExpr::Multiply(lhs, rhs)
                    | SymExpr::Divide(lhs, rhs)
                    | SymExpr::Pow(lhs, rhs) => {
                    if self.is_last_visited(rhs) {
                        return self.visit();
                    }
                    self.stack.push(rhs);
                    self.stack.push(lhs);
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_order() {
        let x = SymExpr::var("x");
        let expr = (x.clone() + 2.0).sin() * x.clone().pow(3.0);
        let visited = expr.post_order_iter().map(|e| e.to_string()).collect::<Vec<_>>();
        assert_eq!(visited, vec![
            "x",
            "2",
            "x + 2",
            "sin(x + 2)",
            "x",
            "3",
            "x^3",
            "sin(x + 2) * x^3",
        ]);
    }

    #[test]
    fn single_node() {
        let expr = SymExpr::constant(4.0);
        assert_eq!(expr.post_order_iter().count(), 1);
    }
}
