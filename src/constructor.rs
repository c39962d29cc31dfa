use swc_core::common::{SyntaxContext, DUMMY_SP};
use swc_core::ecma::ast::*;

use crate::js_util::*;
use crate::prepend::prepend;

/**
 * The minimal constructor for a class that declares none.
 *
 * ```js
 * constructor() {}                                // base class
 * constructor(...args) { return super(...args); } // derived class
 * ```
 */
pub fn synthesize_constructor(is_derived: bool) -> Constructor {
  let (params, stmts) = if is_derived {
    (
      vec![ParamOrTsParamProp::Param(rest_param("args"))],
      vec![return_stmt(Box::new(Expr::Call(super_call(vec![
        spread_arg("args"),
      ]))))],
    )
  } else {
    (vec![], vec![])
  };

  Constructor {
    span: DUMMY_SP,
    ctxt: SyntaxContext::empty(),
    key: PropName::Ident(ident_name("constructor")),
    params,
    body: Some(block(stmts)),
    accessibility: None,
    is_optional: false,
  }
}

pub struct ResolvedConstructor<'a> {
  pub body: &'a mut BlockStmt,
  pub synthesized: bool,
}

/**
 * Returns the body of the class's constructor, synthesizing the constructor as the first member if there is none.
 *
 * TypeScript overload signatures have no body and are skipped.
 */
pub fn resolve_constructor(
  body: &mut Vec<ClassMember>,
  is_derived: bool,
) -> Option<ResolvedConstructor<'_>> {
  let synthesized = !body
    .iter()
    .any(|member| matches!(member, ClassMember::Constructor(ctor) if ctor.body.is_some()));

  if synthesized {
    prepend(
      body,
      ClassMember::Constructor(synthesize_constructor(is_derived)),
    );
  }

  body
    .iter_mut()
    .find_map(|member| match member {
      ClassMember::Constructor(ctor) => ctor.body.as_mut(),
      _ => None,
    })
    .map(|body| ResolvedConstructor { body, synthesized })
}
