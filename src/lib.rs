use swc_core::{
  ecma::{
    ast::{Pass, Program},
    visit::{visit_mut_pass, VisitMutWith},
  },
  plugin::{
    metadata::TransformPluginMetadataContextKind, plugin_transform,
    proxies::TransformPluginProgramMetadata,
  },
};
use tracing::debug;

pub use class_binder::ClassBinder;
pub use config::{Activation, BuildEnv, Config, ConfigError};

mod class_binder;
mod class_like;
mod closure_field;
mod config;
mod constructor;
mod js_util;
mod prepend;
mod super_calls;

#[plugin_transform]
pub fn bind_class_methods(
  mut program: Program,
  metadata: TransformPluginProgramMetadata,
) -> Program {
  let config = match metadata.get_transform_plugin_config() {
    Some(raw) => Config::from_json(&raw).unwrap_or_else(|err| panic!("{err}")),
    None => Config::default(),
  };
  let env = BuildEnv::from_name(
    metadata
      .get_context(&TransformPluginMetadataContextKind::Env)
      .as_deref(),
  );
  let activation = Activation::resolve(&env, &config);

  debug!(env = env.as_ref(), ?activation, "bind_methods");

  program.visit_mut_with(&mut ClassBinder::new(activation));

  program
}

/**
 * The transform as a [Pass](Pass) for hosts that drive swc from Rust.
 *
 * ```rust
 * use bind_methods::{bind_methods, Activation, BuildEnv, Config};
 *
 * let activation = Activation::resolve(&BuildEnv::from_process(), &Config::default());
 * let pass = bind_methods(activation);
 * ```
 */
pub fn bind_methods(activation: Activation) -> impl Pass {
  visit_mut_pass(ClassBinder::new(activation))
}
