//! `guidgen generate` command.

use crate::config::GeneratorOptions;
use crate::context::ServiceContext;

/// Generate `count` identifiers with `prefix`, one per line.
#[must_use]
pub fn run(ctx: &ServiceContext, options: GeneratorOptions, prefix: &str, count: usize) -> String {
    let generator = ctx.generator(options);
    (0..count).map(|_| generator.generate_string(prefix)).collect::<Vec<_>>().join("\n")
}
