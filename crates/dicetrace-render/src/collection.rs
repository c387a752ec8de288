use dicetrace_types::{Fragment, RenderContext, Repr};

use crate::Result;
use crate::transform::render;

/// Which context limit governs a collection's display truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    List,
    Sum,
    /// Call argument groups; bounded by the auto-expansion limit.
    Expand,
}

/// A bracketed, separated sequence to render.
pub struct Collection<'a> {
    pub items: &'a [Repr],
    pub left: &'a str,
    pub right: &'a str,
    pub separator: &'a str,
    /// Items the evaluator itself never materialized, shown in a `⟨ ⟩`
    /// group after the visible ones.
    pub surplus: Option<&'a [Repr]>,
    pub limit: LimitKind,
}

/// Render a bracketed, separated sequence with display truncation.
///
/// When the governing limit is finite and exceeded, only the leading items
/// render normally. The hidden remainder is scanned in order: error-bearing
/// items render anyway in their original position, and each contiguous run
/// of hidden clean items contracts to a single `...` token.
pub fn render_collection(ctx: &RenderContext, collection: Collection<'_>) -> Result<Vec<Fragment>> {
    let Collection {
        items,
        left,
        right,
        separator,
        surplus,
        limit,
    } = collection;
    let ctx = ctx.descend();

    let preview_limit = match limit {
        LimitKind::List => ctx.list_preview_limit,
        LimitKind::Sum => ctx.sum_preview_limit,
        LimitKind::Expand => ctx.auto_expansion_depth_limit,
    };
    let shown = match preview_limit {
        Some(limit) if items.len() > limit as usize => &items[..limit as usize],
        _ => items,
    };

    let mut parts: Vec<Vec<Fragment>> = Vec::with_capacity(shown.len());
    for item in shown {
        parts.push(render(item, &ctx)?);
    }
    if shown.len() < items.len() {
        let mut elided = false;
        for item in &items[shown.len()..] {
            if item.contains_error() {
                parts.push(render(item, &ctx)?);
                elided = false;
            } else if !elided {
                parts.push(vec![Fragment::text("...")]);
                elided = true;
            }
        }
    }

    let had_parts = !parts.is_empty();
    let mut out = vec![Fragment::text(left)];
    for (i, part) in parts.into_iter().enumerate() {
        if i > 0 {
            out.push(Fragment::text(separator));
        }
        out.extend(part);
    }

    if let Some(surplus) = surplus {
        if had_parts {
            out.push(Fragment::text(separator));
        }
        // Evaluator-side truncation must stay visible even where display
        // truncation is active, so a finite preview limit lifts the depth
        // limit for the surplus group.
        let mut surplus_ctx = ctx;
        if preview_limit.is_some() {
            surplus_ctx.auto_expansion_depth_limit = None;
        }
        out.extend(render_collection(
            &surplus_ctx,
            Collection {
                items: surplus,
                left: "⟨ ",
                right: " ⟩",
                separator,
                surplus: None,
                limit: LimitKind::Expand,
            },
        )?);
    }

    out.push(Fragment::text(right));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicetrace_types::concat_plain;

    fn list(items: &[Repr]) -> Collection<'_> {
        Collection {
            items,
            left: "[ ",
            right: " ]",
            separator: " , ",
            surplus: None,
            limit: LimitKind::List,
        }
    }

    fn ctx_with_list_limit(limit: Option<u32>) -> RenderContext {
        RenderContext {
            list_preview_limit: limit,
            ..RenderContext::unlimited()
        }
    }

    #[test]
    fn test_within_limit_renders_everything() {
        let items = [Repr::int(1), Repr::int(2)];
        let ctx = ctx_with_list_limit(Some(2));
        let out = render_collection(&ctx, list(&items)).unwrap();
        assert_eq!(concat_plain(&out), "[ 1 , 2 ]");
    }

    #[test]
    fn test_over_limit_collapses_to_one_ellipsis() {
        let items: Vec<Repr> = (1..=5).map(Repr::int).collect();
        let ctx = ctx_with_list_limit(Some(2));
        let out = render_collection(&ctx, list(&items)).unwrap();
        assert_eq!(concat_plain(&out), "[ 1 , 2 , ... ]");
    }

    #[test]
    fn test_limit_zero_hides_all_clean_items() {
        let items = [Repr::int(1), Repr::int(2)];
        let ctx = ctx_with_list_limit(Some(0));
        let out = render_collection(&ctx, list(&items)).unwrap();
        assert_eq!(concat_plain(&out), "[ ... ]");
    }

    #[test]
    fn test_hidden_error_items_stay_visible_in_position() {
        let boom = Repr::Error {
            message: "boom".to_string(),
            source: None,
        };
        let items = [
            Repr::int(1),
            Repr::int(2),
            Repr::int(3),
            boom.clone(),
            Repr::int(5),
        ];
        let ctx = ctx_with_list_limit(Some(2));
        let out = render_collection(&ctx, list(&items)).unwrap();
        assert_eq!(
            concat_plain(&out),
            "[ 1 , 2 , ... , ( error: \"boom\"! ) , ... ]"
        );
    }

    #[test]
    fn test_one_ellipsis_per_hidden_run() {
        let boom = Repr::Error {
            message: "boom".to_string(),
            source: None,
        };
        // Hidden tail: error, clean, clean, error.
        let items = [
            Repr::int(1),
            boom.clone(),
            Repr::int(3),
            Repr::int(4),
            boom.clone(),
        ];
        let ctx = ctx_with_list_limit(Some(1));
        let out = render_collection(&ctx, list(&items)).unwrap();
        assert_eq!(
            concat_plain(&out),
            "[ 1 , ( error: \"boom\"! ) , ... , ( error: \"boom\"! ) ]"
        );
    }

    #[test]
    fn test_surplus_renders_in_angle_group() {
        let items = [Repr::int(1), Repr::int(2)];
        let surplus = [Repr::int(3), Repr::int(4)];
        let ctx = ctx_with_list_limit(None);
        let out = render_collection(
            &ctx,
            Collection {
                surplus: Some(&surplus),
                ..list(&items)
            },
        )
        .unwrap();
        assert_eq!(concat_plain(&out), "[ 1 , 2 , ⟨ 3 , 4 ⟩ ]");
    }

    #[test]
    fn test_surplus_escapes_display_truncation() {
        // The outer preview limit hides an item, but the evaluator-side
        // surplus group still renders in full.
        let items = [Repr::int(1), Repr::int(2)];
        let surplus = [Repr::int(3)];
        // Without the depth-limit reset the surplus group itself would
        // contract to `...` one level down.
        let ctx = RenderContext {
            list_preview_limit: Some(1),
            auto_expansion_depth_limit: Some(1),
            ..RenderContext::unlimited()
        };
        let out = render_collection(
            &ctx,
            Collection {
                surplus: Some(&surplus),
                ..list(&items)
            },
        )
        .unwrap();
        assert_eq!(concat_plain(&out), "[ 1 , ... , ⟨ 3 ⟩ ]");
    }

    #[test]
    fn test_empty_items_with_surplus_has_no_leading_separator() {
        let surplus = [Repr::int(1)];
        let ctx = ctx_with_list_limit(None);
        let out = render_collection(
            &ctx,
            Collection {
                surplus: Some(&surplus),
                ..list(&[])
            },
        )
        .unwrap();
        assert_eq!(concat_plain(&out), "[ ⟨ 1 ⟩ ]");
    }
}
