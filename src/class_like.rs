use swc_core::ecma::ast::*;

/**
 * Defines a generic interface over AST [ClassDecl](ClassDecl) and [ClassExpr](ClassExpr).
 */
pub trait ClassLike {
  /**
   * Returns the Class's name. Optional because a ClassExpr may not have a name.
   */
  fn name(&self) -> Option<&Ident>;

  /**
   * Returns a mutable reference to the actual contents of the [Class](Class) (shared by both ClassExpr and ClassDecl structs).
   */
  fn class_mut(&mut self) -> &mut Class;

  /**
   * Name to use in log output.
   */
  fn display_name(&self) -> &str {
    self.name().map_or("<anonymous>", |ident| &*ident.sym)
  }
}

impl ClassLike for ClassDecl {
  fn name(&self) -> Option<&Ident> {
    Some(&self.ident)
  }

  fn class_mut(&mut self) -> &mut Class {
    &mut self.class
  }
}

impl ClassLike for ClassExpr {
  fn name(&self) -> Option<&Ident> {
    self.ident.as_ref()
  }

  fn class_mut(&mut self) -> &mut Class {
    &mut self.class
  }
}
