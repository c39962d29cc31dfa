use swc_core::ecma::ast::*;
use swc_core::ecma::visit::{VisitMut, VisitMutWith};
use tracing::{debug, trace};

use crate::class_like::ClassLike;
use crate::closure_field::{count_closure_fields, take_closure_fields};
use crate::config::Activation;
use crate::constructor::resolve_constructor;
use crate::prepend::prepend_all;
use crate::super_calls::SuperCallBinder;

/**
 * Rewrites arrow-function instance fields into prototype methods bound in the constructor.
 *
 * ```js
 * class Button extends Component {
 *   onClick = (e) => this.select(e);
 * }
 * ```
 * becomes
 * ```js
 * class Button extends Component {
 *   constructor(...args) {
 *     super(...args);
 *     this.onClick = this.onClick.bind(this);
 *     return this;
 *   }
 *   onClick(e) {
 *     return this.select(e);
 *   }
 * }
 * ```
 */
pub struct ClassBinder {
  pub activation: Activation,
}

impl ClassBinder {
  pub fn new(activation: Activation) -> ClassBinder {
    ClassBinder { activation }
  }
}

impl VisitMut for ClassBinder {
  fn visit_mut_class_decl(&mut self, class_decl: &mut ClassDecl) {
    self.bind_class_like(class_decl);

    class_decl.visit_mut_children_with(self);
  }

  fn visit_mut_class_expr(&mut self, class_expr: &mut ClassExpr) {
    self.bind_class_like(class_expr);

    class_expr.visit_mut_children_with(self);
  }
}

impl ClassBinder {
  fn bind_class_like<T>(&mut self, class_like: &mut T)
  where
    T: ClassLike,
  {
    if !self.activation.is_enabled() {
      trace!(class = class_like.display_name(), "bind_methods disabled");
      return;
    }

    let name = class_like.display_name().to_owned();
    self.bind_class(&name, class_like.class_mut());
  }

  fn bind_class(&mut self, name: &str, class: &mut Class) {
    if count_closure_fields(&class.body) == 0 {
      return;
    }

    let is_derived = class.super_class.is_some();
    let fields = take_closure_fields(&mut class.body);

    // the bind statements must be built before the keys move into the methods
    let binds: Vec<Stmt> = fields.iter().map(|field| field.bind_stmt()).collect();

    class.body.extend(
      fields
        .into_iter()
        .map(|field| ClassMember::Method(field.into_method())),
    );

    let Some(mut ctor) = resolve_constructor(&mut class.body, is_derived) else {
      return;
    };

    let bound = binds.len();
    let sites = if is_derived {
      let mut super_calls = SuperCallBinder::new(&binds);
      ctor.body.visit_mut_with(&mut super_calls);
      super_calls.sites
    } else {
      prepend_all(&mut ctor.body.stmts, binds);
      1
    };

    if sites == 0 {
      debug!(
        class = name,
        "derived constructor has no bare super() call, closure fields are left unbound"
      );
    }

    debug!(
      class = name,
      fields = bound,
      derived = is_derived,
      synthesized_constructor = ctor.synthesized,
      sites,
      "bound closure fields"
    );
  }
}
