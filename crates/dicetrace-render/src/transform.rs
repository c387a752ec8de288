use dicetrace_types::{
    CallStyle, ChainLink, Fragment, RenderContext, Repr, Scalar, ValueCallStyle,
};

use crate::collection::{Collection, LimitKind, render_collection};
use crate::pack::{Spacing, pack_result, pack_simple, strip_indirect_error};
use crate::{Error, Result};

/// Placeholder for a subtree suppressed by the auto-expansion depth limit.
pub const COLLAPSED: &str = "( ... )";

/// Shown when an indirect error reaches the renderer unfiltered. That only
/// happens when the evaluator leaks its bookkeeping into a position where a
/// real node belongs, so the wording is deliberately jarring.
pub const INDIRECT_ERROR_NOTICE: &str =
    "internal detail leaked: an indirect error must never appear in the shown steps!";

/// Transform one trace node into display fragments.
///
/// All collapsing is decided here: after the depth descent, a non-atomic
/// node that carries no error information renders as `( ... )` once the
/// auto-expansion limit is exhausted. Error-bearing branches keep rendering
/// at any depth; failures are never hidden. That also means a pathological
/// trace of deeply nested failures recurses as deep as it is.
pub fn render(node: &Repr, ctx: &RenderContext) -> Result<Vec<Fragment>> {
    let ctx = ctx.descend();
    if ctx.auto_expansion_depth_limit == Some(0) && !node.is_atomic() && !node.contains_error() {
        return Ok(vec![Fragment::text(COLLAPSED)]);
    }
    dispatch(node, &ctx)
}

fn dispatch(node: &Repr, ctx: &RenderContext) -> Result<Vec<Fragment>> {
    match node {
        Repr::Raw { text } => Ok(vec![Fragment::code(text.clone())]),
        Repr::Placeholder => Ok(vec![Fragment::code("_")]),
        Repr::Value { value } => Ok(vec![Fragment::code(value.to_string())]),

        Repr::List { items, surplus, .. } => render_collection(
            ctx,
            Collection {
                items,
                left: "[ ",
                right: " ]",
                separator: " , ",
                surplus: surplus.as_deref(),
                limit: LimitKind::List,
            },
        ),

        Repr::Sum {
            total,
            addends,
            surplus,
        } => {
            let mut out = vec![Fragment::text("( ")];
            out.extend(render_collection(
                ctx,
                Collection {
                    items: addends,
                    left: "( ",
                    right: " )",
                    separator: " + ",
                    surplus: surplus.as_deref(),
                    limit: LimitKind::Sum,
                },
            )?);
            out.push(Fragment::text(format!(" = {} )", total)));
            Ok(out)
        }

        Repr::Binding { name, value } => match value {
            Some(value) => {
                let mut out = vec![Fragment::text(format!("( {} = ", name))];
                out.extend(render(value, ctx)?);
                out.push(Fragment::text(" )"));
                Ok(out)
            }
            None => Ok(vec![Fragment::text(name.clone())]),
        },

        Repr::Call {
            style,
            callee,
            args,
            result,
        } => {
            let result = strip_indirect_error(result.as_deref());
            match style {
                CallStyle::Function => render_function_call(ctx, callee, args, result),
                CallStyle::Operator => render_operator_call(ctx, callee, args, result),
                CallStyle::Piped => render_piped_call(ctx, callee, args, result),
            }
        }

        Repr::ValueCall {
            style,
            callee,
            args,
            result,
        } => {
            let result = strip_indirect_error(result.as_deref());
            match style {
                ValueCallStyle::Function => render_value_function_call(ctx, callee, args, result),
                ValueCallStyle::Piped => render_value_piped_call(ctx, callee, args, result),
            }
        }

        Repr::Chain { head, tail, result } => {
            render_chain(ctx, head, tail, strip_indirect_error(result.as_deref()))
        }

        Repr::Capture { name, arity } => {
            Ok(vec![Fragment::text(format!("( &{}/{} )", name, arity))])
        }

        Repr::Repeat {
            count,
            body,
            result,
        } => render_repeat(ctx, count, body, strip_indirect_error(result.as_deref())),

        Repr::Error { message, source } => {
            let mut out = vec![Fragment::text("( ")];
            if let Some(source) = source {
                out.extend(pack_simple(source, ctx, Spacing::None)?);
            }
            out.push(Fragment::text(format!("error: \"{}\"! )", message)));
            Ok(out)
        }

        Repr::IndirectError => Ok(vec![Fragment::text(INDIRECT_ERROR_NOTICE)]),

        Repr::Annotated { prefix, inner } => {
            let mut out = vec![Fragment::text(prefix.clone())];
            out.extend(render(inner, ctx)?);
            Ok(out)
        }
    }
}

fn render_function_call(
    ctx: &RenderContext,
    callee: &str,
    args: &[Repr],
    result: Option<&Repr>,
) -> Result<Vec<Fragment>> {
    let mut elems = vec![Fragment::text(format!("{}( ", callee))];
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            elems.push(Fragment::text(" , "));
        }
        elems.extend(render(arg, ctx)?);
    }
    elems.push(Fragment::text(" )"));
    pack_result(elems, result, ctx)
}

fn render_operator_call(
    ctx: &RenderContext,
    callee: &str,
    args: &[Repr],
    result: Option<&Repr>,
) -> Result<Vec<Fragment>> {
    match args {
        [operand] => render_unary_operator(ctx, callee, operand, result),
        [left, right] => render_binary_operator(ctx, callee, left, right, result),
        _ => Err(Error::OperatorArity {
            callee: callee.to_string(),
            count: args.len(),
        }),
    }
}

fn render_unary_operator(
    ctx: &RenderContext,
    callee: &str,
    operand: &Repr,
    result: Option<&Repr>,
) -> Result<Vec<Fragment>> {
    // A sign on a numeric literal reads as part of the number: `-5`, not
    // `( -5 )`, and the trivial result is dropped with the parentheses.
    if matches!(callee, "+" | "-")
        && let Repr::Value {
            value: Scalar::Integer(n),
        } = operand
    {
        return Ok(vec![Fragment::text(format!("{}{}", callee, n))]);
    }

    let mut elems = vec![Fragment::text(format!("( {}", callee))];
    elems.extend(pack_simple(operand, ctx, Spacing::None)?);
    elems.push(Fragment::text(" )"));
    pack_result(elems, result, ctx)
}

fn render_binary_operator(
    ctx: &RenderContext,
    callee: &str,
    left: &Repr,
    right: &Repr,
    result: Option<&Repr>,
) -> Result<Vec<Fragment>> {
    let mut elems = vec![Fragment::text("( ")];
    elems.extend(pack_simple(left, ctx, Spacing::None)?);
    elems.push(Fragment::text(format!(" {} ", callee)));
    elems.extend(pack_simple(right, ctx, Spacing::None)?);
    elems.push(Fragment::text(" )"));
    pack_result(elems, result, ctx)
}

fn render_piped_call(
    ctx: &RenderContext,
    callee: &str,
    args: &[Repr],
    result: Option<&Repr>,
) -> Result<Vec<Fragment>> {
    let [head, tail @ ..] = args else {
        return Err(Error::PipeWithoutHead);
    };
    let mut elems = vec![Fragment::text("( ")];
    elems.extend(pack_simple(head, ctx, Spacing::None)?);
    elems.push(Fragment::text(format!(" |> {}", callee)));
    elems.extend(render_collection(
        ctx,
        Collection {
            items: tail,
            left: "( ",
            right: " )",
            separator: " ",
            surplus: None,
            limit: LimitKind::Expand,
        },
    )?);
    elems.push(Fragment::text(" )"));
    pack_result(elems, result, ctx)
}

fn render_value_function_call(
    ctx: &RenderContext,
    callee: &Repr,
    args: &[Repr],
    result: Option<&Repr>,
) -> Result<Vec<Fragment>> {
    let mut elems = vec![Fragment::text("( ( ")];
    elems.extend(render(callee, ctx)?);
    elems.push(Fragment::text(" )."));
    elems.extend(render_collection(
        ctx,
        Collection {
            items: args,
            left: "( ",
            right: " )",
            separator: " , ",
            surplus: None,
            limit: LimitKind::Expand,
        },
    )?);
    elems.push(Fragment::text(" )"));
    pack_result(elems, result, ctx)
}

fn render_value_piped_call(
    ctx: &RenderContext,
    callee: &Repr,
    args: &[Repr],
    result: Option<&Repr>,
) -> Result<Vec<Fragment>> {
    let [head, tail @ ..] = args else {
        return Err(Error::PipeWithoutHead);
    };
    let mut elems = vec![Fragment::text("( ")];
    elems.extend(pack_simple(head, ctx, Spacing::None)?);
    elems.push(Fragment::text(" |> "));
    elems.extend(pack_simple(callee, ctx, Spacing::None)?);
    elems.push(Fragment::text("."));
    elems.extend(render_collection(
        ctx,
        Collection {
            items: tail,
            left: "( ",
            right: " )",
            separator: " ",
            surplus: None,
            limit: LimitKind::Expand,
        },
    )?);
    elems.push(Fragment::text(" )"));
    pack_result(elems, result, ctx)
}

fn render_chain(
    ctx: &RenderContext,
    head: &Repr,
    tail: &[ChainLink],
    result: Option<&Repr>,
) -> Result<Vec<Fragment>> {
    let mut elems = vec![Fragment::text("( ")];
    elems.extend(pack_simple(head, ctx, Spacing::None)?);
    for link in tail {
        elems.push(Fragment::text(format!(" {} ", link.op)));
        elems.extend(pack_simple(&link.operand, ctx, Spacing::None)?);
    }
    elems.push(Fragment::text(" )"));
    pack_result(elems, result, ctx)
}

fn render_repeat(
    ctx: &RenderContext,
    count: &Repr,
    body: &str,
    result: Option<&Repr>,
) -> Result<Vec<Fragment>> {
    let body = Repr::raw(body);
    let mut elems = vec![Fragment::text("( ")];
    elems.extend(pack_simple(count, ctx, Spacing::Right)?);
    elems.push(Fragment::text("#"));
    elems.extend(pack_simple(&body, ctx, Spacing::Left)?);
    elems.push(Fragment::text(" )"));
    pack_result(elems, result, ctx)
}
