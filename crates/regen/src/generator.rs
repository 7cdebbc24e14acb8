//! # Generators
//!
//! A [`Generator`] is a compiled pattern plus the random source it draws from.

use crate::{
    ExecutionStrategy,
    GeneratorArgs,
    errors::RegenResult,
    executors::{Generate, RuntimeArgs},
    nodes::{GeneratorNode, compile_hir},
    rng::{LockedSource, XorShift64},
    syntax::parse_pattern,
};

/// A compiled pattern, ready to generate matching strings.
///
/// `Generator` is `Send + Sync`; `generate()` may be called from any
/// number of threads at once.
///
/// Serial generators lock their source for a whole sample, so samples
/// from one seed are reproducible. Concurrent strategies lock per draw.
///
/// ## Style Hints
///
/// Instance names should prefer `generator`.
#[derive(Debug)]
pub struct Generator {
    pattern: String,
    root: GeneratorNode,
    strategy: ExecutionStrategy,
    locked_rng: LockedSource<XorShift64>,
}

impl Generator {
    /// Compile `pattern` with the default options.
    ///
    /// See [`compile`].
    pub fn new(pattern: &str) -> RegenResult<Self> {
        Self::compile(pattern, GeneratorArgs::default())
    }

    /// Compile `pattern` with `args`.
    ///
    /// ## Arguments
    /// * `pattern` - The regular expression.
    /// * `args` - The compile options.
    ///
    /// ## Returns
    /// The generator; or the first flag, parse, dialect, or compile error.
    pub fn compile(
        pattern: &str,
        args: GeneratorArgs,
    ) -> RegenResult<Self> {
        let strategy = args.strategy();
        log::debug!("compiling /{pattern}/ with {strategy:?} execution");

        let hir = parse_pattern(pattern, args.flags())?;
        let root = compile_hir(&hir)?;
        log::trace!("generator tree for /{pattern}/: {root}");

        if strategy.is_concurrent() {
            log::debug!("/{pattern}/ draws from a per-draw locked source");
        }

        Ok(Self {
            pattern: pattern.to_string(),
            root,
            strategy,
            locked_rng: LockedSource::new(XorShift64::new(args.resolve_seed())),
        })
    }

    /// The source pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The compiled generator tree.
    pub fn root(&self) -> &GeneratorNode {
        &self.root
    }

    /// The execution strategy.
    pub fn strategy(&self) -> ExecutionStrategy {
        self.strategy
    }

    /// Generate one sample.
    pub fn generate(&self) -> String {
        let mut out = String::new();
        self.generate_into(&mut out);
        out
    }

    /// Generate one sample, appending it to `out`.
    pub fn generate_into(
        &self,
        out: &mut String,
    ) {
        if self.strategy.is_concurrent() {
            let mut args = RuntimeArgs::shared(&self.locked_rng, self.strategy);
            self.root.generate_into(&mut args, out);
        } else {
            let mut rng = self.locked_rng.lock();
            let mut args = RuntimeArgs::exclusive(&mut rng, self.strategy);
            self.root.generate_into(&mut args, out);
        }
    }

    /// An endless iterator of samples.
    pub fn iter(&self) -> impl Iterator<Item = String> + '_ {
        core::iter::repeat_with(move || self.generate())
    }
}

/// Compile `pattern` into a [`Generator`].
///
/// Unset options are defaulted: an entropy seed, POSIX flags,
/// and serial execution.
///
/// ## Arguments
/// * `pattern` - The regular expression.
/// * `args` - The compile options, if any.
///
/// ## Returns
/// The generator; or
/// * `UnsupportedFlag` if Unicode groups are enabled without Perl extensions,
/// * `Parse` with the parser's error if the pattern is malformed,
/// * `UnsupportedSyntax` if the pattern uses syntax outside of the dialect,
/// * `UnsupportedOperation` or `EmptyCharClass` if the pattern can't be generated.
pub fn compile(
    pattern: &str,
    args: Option<GeneratorArgs>,
) -> RegenResult<Generator> {
    Generator::compile(pattern, args.unwrap_or_default())
}

/// Generate one string matching `pattern`, with the default options.
pub fn generate(pattern: &str) -> RegenResult<String> {
    Ok(Generator::new(pattern)?.generate())
}
