use swc_core::common::util::take::Take;
use swc_core::ecma::ast::*;
use swc_core::ecma::visit::{VisitMut, VisitMutWith};

use crate::js_util::*;

/**
 * Inserts a list of statements after every bare `super(...)` call in a derived constructor body.
 *
 * A bare call is one that is a statement on its own:
 * ```js
 * super(a);
 * return super(a);
 * ```
 * Calls nested in another expression (`const s = super()`, `super() || x`) are not bare and are skipped.
 *
 * The search never enters nested functions or classes, whose `super` (if any) belongs to something else.
 */
pub struct SuperCallBinder<'a> {
  stmts: &'a [Stmt],
  /**
   * Number of bare super calls found so far.
   */
  pub sites: usize,
}

impl<'a> SuperCallBinder<'a> {
  pub fn new(stmts: &'a [Stmt]) -> SuperCallBinder<'a> {
    SuperCallBinder { stmts, sites: 0 }
  }

  /**
   * Expands a bare super call statement into the call followed by the bound statements.
   */
  fn bind_after(&mut self, site: Stmt) -> Vec<Stmt> {
    self.sites += 1;

    let mut out = Vec::with_capacity(self.stmts.len() + 2);

    match site {
      // `return super(a)` evaluates to `this`, so split it into
      // `super(a); <stmts>; return this;`
      Stmt::Return(ReturnStmt {
        span,
        arg: Some(call),
      }) => {
        out.push(Stmt::Expr(ExprStmt { span, expr: call }));
        out.extend(self.stmts.iter().cloned());
        out.push(return_stmt(this_expr()));
      }
      site => {
        out.push(site);
        out.extend(self.stmts.iter().cloned());
      }
    }

    out
  }
}

pub fn is_super_call(expr: &Expr) -> bool {
  matches!(
    unparen(expr),
    Expr::Call(CallExpr {
      callee: Callee::Super(_),
      ..
    })
  )
}

pub fn is_bare_super_call(stmt: &Stmt) -> bool {
  match stmt {
    Stmt::Expr(ExprStmt { expr, .. }) => is_super_call(expr),
    Stmt::Return(ReturnStmt { arg: Some(arg), .. }) => is_super_call(arg),
    _ => false,
  }
}

impl VisitMut for SuperCallBinder<'_> {
  fn visit_mut_stmts(&mut self, stmts: &mut Vec<Stmt>) {
    let mut bound = Vec::with_capacity(stmts.len());

    for mut stmt in stmts.drain(..) {
      if is_bare_super_call(&stmt) {
        bound.extend(self.bind_after(stmt));
      } else {
        stmt.visit_mut_with(self);
        bound.push(stmt);
      }
    }

    *stmts = bound;
  }

  fn visit_mut_stmt(&mut self, stmt: &mut Stmt) {
    // reached only for statements outside of a statement list, e.g. `if (a) super(a);`
    if is_bare_super_call(stmt) {
      let site = stmt.take();
      *stmt = Stmt::Block(block(self.bind_after(site)));
    } else {
      stmt.visit_mut_children_with(self);
    }
  }

  // nested functions and classes have their own `super`

  fn visit_mut_function(&mut self, _: &mut Function) {}

  fn visit_mut_arrow_expr(&mut self, _: &mut ArrowExpr) {}

  fn visit_mut_class(&mut self, _: &mut Class) {}

  fn visit_mut_getter_prop(&mut self, _: &mut GetterProp) {}

  fn visit_mut_setter_prop(&mut self, _: &mut SetterProp) {}
}
