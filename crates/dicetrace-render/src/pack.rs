use dicetrace_types::{Fragment, RenderContext, Repr};

use crate::Result;
use crate::transform::render;

/// Padding around the parentheses `pack_simple` adds to non-atomic nodes,
/// for alignment next to an operator glyph. Atoms ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
    None,
    /// A space before the opening parenthesis.
    Left,
    /// A space after the closing parenthesis.
    Right,
}

/// Attach a call's evaluated result: `( <expr> ⇒ <result> )`. Without a
/// result the expression passes through untouched.
pub fn pack_result(
    elems: Vec<Fragment>,
    result: Option<&Repr>,
    ctx: &RenderContext,
) -> Result<Vec<Fragment>> {
    let Some(result) = result else {
        return Ok(elems);
    };
    let mut out = vec![Fragment::text("( ")];
    out.extend(elems);
    out.push(Fragment::text(" ⇒ "));
    out.extend(render(result, ctx)?);
    out.push(Fragment::text(" )"));
    Ok(out)
}

/// Render an operand, parenthesizing only when it needs disambiguation.
/// Atoms are never wrapped.
pub fn pack_simple(node: &Repr, ctx: &RenderContext, spacing: Spacing) -> Result<Vec<Fragment>> {
    if node.is_atomic() {
        return render(node, ctx);
    }
    let (open, close) = match spacing {
        Spacing::None => ("( ", " )"),
        Spacing::Left => (" ( ", " )"),
        Spacing::Right => ("( ", " ) "),
    };
    let mut out = vec![Fragment::text(open)];
    out.extend(render(node, ctx)?);
    out.push(Fragment::text(close));
    Ok(out)
}

/// An indirect-error result is bookkeeping for a failure already reported
/// deeper in the trace. It carries no information for this node, so it is
/// treated as no result at all.
pub fn strip_indirect_error(result: Option<&Repr>) -> Option<&Repr> {
    match result {
        Some(Repr::IndirectError) => None,
        other => other,
    }
}
