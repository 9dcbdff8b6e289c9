// src/ui/route_policy.rs

use crate::ui::Route;

/// Minimal routing context derived by ui/mod.rs once per frame.
#[derive(Clone, Copy, Debug)]
pub struct RouteCtx {
    pub has_record: bool,
}

/// Centralized route invariants (pure).
///
/// Without a record only the editor exists. With a record the editor is
/// unreachable: the only way back is reset, which clears the record
/// first, after which the first rule routes to the editor.
pub fn apply_route_guards(ctx: RouteCtx, requested: Route) -> Route {
    if !ctx.has_record {
        return Route::Editor;
    }

    if requested == Route::Editor {
        return Route::Summary;
    }

    requested
}

pub fn entering_editor(prev: Route, next: Route) -> bool {
    next == Route::Editor && prev != Route::Editor
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_record_forces_editor() {
        let ctx = RouteCtx { has_record: false };
        assert_eq!(apply_route_guards(ctx, Route::Summary), Route::Editor);
        assert_eq!(apply_route_guards(ctx, Route::Full), Route::Editor);
        assert_eq!(apply_route_guards(ctx, Route::Editor), Route::Editor);
    }

    #[test]
    fn with_record_editor_is_unreachable() {
        let ctx = RouteCtx { has_record: true };
        assert_eq!(apply_route_guards(ctx, Route::Editor), Route::Summary);
        assert_eq!(apply_route_guards(ctx, Route::Summary), Route::Summary);
        assert_eq!(apply_route_guards(ctx, Route::Full), Route::Full);
    }

    #[test]
    fn entering_editor_fires_only_on_transition() {
        assert!(entering_editor(Route::Full, Route::Editor));
        assert!(entering_editor(Route::Summary, Route::Editor));
        assert!(!entering_editor(Route::Editor, Route::Editor));
        assert!(!entering_editor(Route::Summary, Route::Full));
    }
}
