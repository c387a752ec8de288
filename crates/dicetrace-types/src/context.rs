use serde::Deserialize;

/// Default number of list items shown before the preview collapses.
pub const DEFAULT_LIST_PREVIEW_LIMIT: u32 = 5;
/// Default number of sum addends shown before the preview collapses.
pub const DEFAULT_SUM_PREVIEW_LIMIT: u32 = 5;
/// Default tree depth rendered in full before subtrees collapse.
pub const DEFAULT_AUTO_EXPANSION_DEPTH_LIMIT: u32 = 3;

/// Display limits threaded through every recursive render call.
///
/// `None` is the "unlimited" sentinel (never collapse); `Some(0)` collapses
/// immediately. The context is copied on every descent, so sibling branches
/// never observe each other's changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct RenderContext {
    /// Current nesting depth. Unset until the first descent, which sets 0.
    #[serde(skip)]
    pub depth: Option<u32>,
    pub list_preview_limit: Option<u32>,
    pub sum_preview_limit: Option<u32>,
    pub auto_expansion_depth_limit: Option<u32>,
}

impl RenderContext {
    /// Context with the documented default limits.
    pub fn standard() -> Self {
        Self {
            depth: None,
            list_preview_limit: Some(DEFAULT_LIST_PREVIEW_LIMIT),
            sum_preview_limit: Some(DEFAULT_SUM_PREVIEW_LIMIT),
            auto_expansion_depth_limit: Some(DEFAULT_AUTO_EXPANSION_DEPTH_LIMIT),
        }
    }

    /// Context that never collapses anything.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// The context one nesting level deeper.
    ///
    /// Once depth reaches a finite auto-expansion limit, every limit is
    /// forced to zero. The transition is one-way: a frozen context has the
    /// limit at zero, depth always satisfies `>= 0`, so every further
    /// descendant stays frozen too.
    pub fn descend(&self) -> Self {
        let mut next = *self;
        next.depth = Some(match self.depth {
            Some(depth) => depth + 1,
            None => 0,
        });
        if let (Some(depth), Some(limit)) = (next.depth, next.auto_expansion_depth_limit)
            && depth >= limit
        {
            next.list_preview_limit = Some(0);
            next.sum_preview_limit = Some(0);
            next.auto_expansion_depth_limit = Some(0);
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_descent_sets_depth_zero() {
        let ctx = RenderContext::unlimited().descend();
        assert_eq!(ctx.depth, Some(0));
        assert_eq!(ctx.auto_expansion_depth_limit, None);
    }

    #[test]
    fn test_descend_freezes_at_limit() {
        let mut ctx = RenderContext {
            depth: None,
            list_preview_limit: Some(5),
            sum_preview_limit: Some(5),
            auto_expansion_depth_limit: Some(2),
        };
        ctx = ctx.descend(); // depth 0
        ctx = ctx.descend(); // depth 1
        assert_eq!(ctx.list_preview_limit, Some(5));

        ctx = ctx.descend(); // depth 2, limit reached
        assert_eq!(ctx.list_preview_limit, Some(0));
        assert_eq!(ctx.sum_preview_limit, Some(0));
        assert_eq!(ctx.auto_expansion_depth_limit, Some(0));
    }

    #[test]
    fn test_freeze_is_sticky() {
        let mut ctx = RenderContext {
            depth: None,
            list_preview_limit: None,
            sum_preview_limit: None,
            auto_expansion_depth_limit: Some(0),
        };
        for _ in 0..8 {
            ctx = ctx.descend();
            assert_eq!(ctx.auto_expansion_depth_limit, Some(0));
            assert_eq!(ctx.list_preview_limit, Some(0));
            assert_eq!(ctx.sum_preview_limit, Some(0));
        }
    }

    #[test]
    fn test_unlimited_never_freezes() {
        let mut ctx = RenderContext::unlimited();
        for _ in 0..64 {
            ctx = ctx.descend();
        }
        assert_eq!(ctx.depth, Some(63));
        assert_eq!(ctx.list_preview_limit, None);
        assert_eq!(ctx.auto_expansion_depth_limit, None);
    }
}
