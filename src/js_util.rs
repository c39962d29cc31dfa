use swc_core::common::{SyntaxContext, DUMMY_SP};
use swc_core::ecma::ast::*;

pub fn ident(sym: &str) -> Ident {
  Ident::new_no_ctxt(sym.into(), DUMMY_SP)
}

pub fn ident_name(sym: &str) -> IdentName {
  IdentName::new(sym.into(), DUMMY_SP)
}

pub fn this_expr() -> Box<Expr> {
  Box::new(Expr::This(ThisExpr { span: DUMMY_SP }))
}

pub fn block(stmts: Vec<Stmt>) -> BlockStmt {
  BlockStmt {
    span: DUMMY_SP,
    ctxt: SyntaxContext::empty(),
    stmts,
  }
}

pub fn return_stmt(arg: Box<Expr>) -> Stmt {
  Stmt::Return(ReturnStmt {
    span: DUMMY_SP,
    arg: Some(arg),
  })
}

/**
 * super(...args)
 */
pub fn super_call(args: Vec<ExprOrSpread>) -> CallExpr {
  CallExpr {
    span: DUMMY_SP,
    ctxt: SyntaxContext::empty(),
    callee: Callee::Super(Super { span: DUMMY_SP }),
    args,
    type_args: None,
  }
}

/**
 * `...name` as a trailing function parameter.
 */
pub fn rest_param(name: &str) -> Param {
  Param {
    span: DUMMY_SP,
    decorators: vec![],
    pat: Pat::Rest(RestPat {
      span: DUMMY_SP,
      dot3_token: DUMMY_SP,
      arg: Box::new(Pat::Ident(BindingIdent {
        id: ident(name),
        type_ann: None,
      })),
      type_ann: None,
    }),
  }
}

/**
 * `...name` as a call argument.
 */
pub fn spread_arg(name: &str) -> ExprOrSpread {
  ExprOrSpread {
    spread: Some(DUMMY_SP),
    expr: Box::new(Expr::Ident(ident(name))),
  }
}

/**
 * The property of `this` a class member named `key` is reachable through.
 *
 * Identifiers use dot access, everything else (computed keys and literals) uses bracket access.
 */
pub fn member_prop(key: &PropName) -> MemberProp {
  let computed = |lit: Lit| {
    MemberProp::Computed(ComputedPropName {
      span: DUMMY_SP,
      expr: Box::new(Expr::Lit(lit)),
    })
  };

  match key {
    PropName::Ident(name) => MemberProp::Ident(name.clone()),
    PropName::Computed(expr) => MemberProp::Computed(expr.clone()),
    PropName::Str(s) => computed(Lit::Str(s.clone())),
    PropName::Num(n) => computed(Lit::Num(n.clone())),
    PropName::BigInt(b) => computed(Lit::BigInt(b.clone())),
  }
}

/**
 * this[key]
 */
pub fn this_member(key: &PropName) -> MemberExpr {
  MemberExpr {
    span: DUMMY_SP,
    obj: this_expr(),
    prop: member_prop(key),
  }
}

/**
 * Strips any parentheses wrapping an expression.
 */
pub fn unparen(expr: &Expr) -> &Expr {
  match expr {
    Expr::Paren(paren) => unparen(&paren.expr),
    _ => expr,
  }
}
