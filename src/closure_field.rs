use std::mem;

use swc_core::common::{Span, Spanned, DUMMY_SP};
use swc_core::ecma::ast::*;

use crate::js_util::*;

/**
 * An instance field whose initializer is an arrow function, e.g. `onClick = (e) => this.select(e)`.
 *
 * Arrow functions capture `this` from the enclosing scope, so each instance carries its own closure.
 * These fields are rewritten into a prototype method plus a `this.onClick = this.onClick.bind(this)`
 * in the constructor.
 */
pub struct ClosureField {
  pub span: Span,
  pub key: PropName,
  pub arrow: ArrowExpr,
  pub accessibility: Option<Accessibility>,
  pub is_optional: bool,
  pub is_override: bool,
}

/**
 * Decorated fields are left as they are, a method cannot carry a field decorator.
 */
fn is_rewritable(prop: &ClassProp) -> bool {
  !prop.is_static && prop.decorators.is_empty()
}

pub fn is_closure_field(member: &ClassMember) -> bool {
  match member {
    ClassMember::ClassProp(prop) => {
      is_rewritable(prop)
        && prop
          .value
          .as_deref()
          .map_or(false, |value| unparen(value).is_arrow())
    }
    _ => false,
  }
}

/**
 * Read-only pass over the direct members of a class body.
 */
pub fn count_closure_fields(body: &[ClassMember]) -> usize {
  body.iter().filter(|member| is_closure_field(member)).count()
}

/**
 * Removes every closure field from `body` and returns them in declaration order.
 * All other members keep their relative order.
 */
pub fn take_closure_fields(body: &mut Vec<ClassMember>) -> Vec<ClosureField> {
  let mut fields = Vec::new();

  for member in mem::take(body) {
    match ClosureField::extract(member) {
      Ok(field) => fields.push(field),
      Err(member) => body.push(member),
    }
  }

  fields
}

impl ClosureField {
  /**
   * Splits a closure field out of a class member, handing back any other member untouched.
   */
  pub fn extract(member: ClassMember) -> Result<ClosureField, ClassMember> {
    match member {
      ClassMember::ClassProp(mut prop) if is_rewritable(&prop) => {
        match prop.value.take().map(|value| into_arrow(*value)) {
          Some(Ok(arrow)) => Ok(ClosureField {
            span: prop.span,
            key: prop.key,
            arrow,
            accessibility: prop.accessibility,
            is_optional: prop.is_optional,
            is_override: prop.is_override,
          }),
          Some(Err(value)) => {
            prop.value = Some(Box::new(value));
            Err(ClassMember::ClassProp(prop))
          }
          None => Err(ClassMember::ClassProp(prop)),
        }
      }
      member => Err(member),
    }
  }

  /**
   * this.key = this.key.bind(this);
   */
  pub fn bind_stmt(&self) -> Stmt {
    let bound = CallExpr {
      span: DUMMY_SP,
      ctxt: Default::default(),
      callee: Callee::Expr(Box::new(Expr::Member(MemberExpr {
        span: DUMMY_SP,
        obj: Box::new(Expr::Member(this_member(&self.key))),
        prop: MemberProp::Ident(ident_name("bind")),
      }))),
      args: vec![ExprOrSpread {
        spread: None,
        expr: this_expr(),
      }],
      type_args: None,
    };

    Stmt::Expr(ExprStmt {
      span: DUMMY_SP,
      expr: Box::new(Expr::Assign(AssignExpr {
        span: DUMMY_SP,
        op: AssignOp::Assign,
        left: AssignTarget::Simple(SimpleAssignTarget::Member(this_member(&self.key))),
        right: Box::new(Expr::Call(bound)),
      })),
    })
  }

  /**
   * Converts the field into a prototype method with the arrow's parameters and body.
   */
  pub fn into_method(self) -> ClassMethod {
    let ArrowExpr {
      span,
      ctxt,
      params,
      body,
      is_async,
      type_params,
      return_type,
      ..
    } = self.arrow;

    let body = match *body {
      BlockStmtOrExpr::BlockStmt(body) => body,
      // `() => expr` is sugar for `() => { return expr; }`
      BlockStmtOrExpr::Expr(expr) => block(vec![Stmt::Return(ReturnStmt {
        span: expr.span(),
        arg: Some(expr),
      })]),
    };

    ClassMethod {
      span: self.span,
      key: self.key,
      function: Box::new(Function {
        params: params
          .into_iter()
          .map(|pat| Param {
            span: pat.span(),
            decorators: vec![],
            pat,
          })
          .collect(),
        decorators: vec![],
        span,
        ctxt,
        body: Some(body),
        is_generator: false,
        is_async,
        type_params,
        return_type,
      }),
      kind: MethodKind::Method,
      is_static: false,
      accessibility: self.accessibility,
      is_abstract: false,
      is_optional: self.is_optional,
      is_override: self.is_override,
    }
  }
}

fn into_arrow(expr: Expr) -> Result<ArrowExpr, Expr> {
  match expr {
    Expr::Arrow(arrow) => Ok(arrow),
    Expr::Paren(ParenExpr { span, expr }) => into_arrow(*expr).map_err(|inner| {
      Expr::Paren(ParenExpr {
        span,
        expr: Box::new(inner),
      })
    }),
    expr => Err(expr),
  }
}
