//! # Generator Nodes

use core::fmt;

use crate::{
    executors::{Generate, RuntimeArgs},
    nodes::RepeatBounds,
    rng::RandomSource,
    util::CharClass,
};

/// A compiled generator tree.
///
/// Capture groups are transparent: a compiled capture is its child.
///
/// ## Style Hints
///
/// Instance names should prefer `node`; or `root` for the top of a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorNode {
    /// The empty pattern; generates `""`.
    EmptyMatch,

    /// A zero-width assertion; generates `""`.
    ///
    /// Anchors and word boundaries are satisfied vacuously.
    Noop,

    /// Generates the literal text.
    Literal(String),

    /// `.` when it may generate newlines.
    AnyChar(CharClass),

    /// `.` when it may not generate newlines.
    AnyCharNoNewline(CharClass),

    /// Generates one char from the class.
    CharClass(CharClass),

    /// Generates every child, in order.
    Concat(Vec<GeneratorNode>),

    /// Generates exactly one uniformly chosen branch.
    Alternate(Vec<GeneratorNode>),

    /// Generates the child a uniformly drawn number of times.
    Repeat {
        /// The repeated node.
        child: Box<GeneratorNode>,

        /// The repeat count interval.
        bounds: RepeatBounds,
    },
}

impl GeneratorNode {
    /// The node's direct children.
    pub fn children(&self) -> &[GeneratorNode] {
        match self {
            Self::Concat(children) | Self::Alternate(children) => children,
            Self::Repeat { child, .. } => core::slice::from_ref(child.as_ref()),
            _ => &[],
        }
    }
}

impl Generate for GeneratorNode {
    fn generate_into(
        &self,
        args: &mut RuntimeArgs<'_>,
        out: &mut String,
    ) {
        match self {
            Self::EmptyMatch | Self::Noop => {}
            Self::Literal(text) => out.push_str(text),
            Self::AnyChar(class) | Self::AnyCharNoNewline(class) | Self::CharClass(class) => {
                out.push(class.sample(args.rng()))
            }
            Self::Concat(children) => {
                let strategy = args.strategy();
                strategy.execute(args, children, out);
            }
            Self::Alternate(branches) => {
                let idx = args.rng().uniform(branches.len() as u64) as usize;
                branches[idx].generate_into(args, out);
            }
            Self::Repeat { child, bounds } => {
                let n = bounds.draw(args.rng());
                let strategy = args.strategy();
                strategy.execute_repeated(args, child.as_ref(), n, out);
            }
        }
    }
}

fn write_list(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    children: &[GeneratorNode],
) -> fmt::Result {
    write!(f, "{name}(")?;
    for (idx, child) in children.iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{child}")?;
    }
    f.write_str(")")
}

impl fmt::Display for GeneratorNode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::EmptyMatch => f.write_str("empty"),
            Self::Noop => f.write_str("noop"),
            Self::Literal(text) => write!(f, "literal({text:?})"),
            Self::AnyChar(_) => f.write_str("any_char"),
            Self::AnyCharNoNewline(_) => f.write_str("any_char_no_newline"),
            Self::CharClass(class) => write!(f, "class{class}"),
            Self::Concat(children) => write_list(f, "concat", children),
            Self::Alternate(branches) => write_list(f, "alternate", branches),
            Self::Repeat { child, bounds } => write!(f, "repeat{bounds}({child})"),
        }
    }
}
