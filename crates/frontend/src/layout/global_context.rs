use contracts::enums::SelectedView;
use leptos::prelude::*;

/// Holder of the Selected View.
///
/// Provided once by `App`; every component reads the same signal. The value is
/// always one of the four views because the signal is typed by the enum.
#[derive(Clone, Copy)]
pub struct PosterContext {
    pub view: RwSignal<SelectedView>,
}

impl PosterContext {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(SelectedView::default()),
        }
    }

    /// Current view, tracked.
    pub fn current(&self) -> SelectedView {
        self.view.get()
    }

    pub fn current_untracked(&self) -> SelectedView {
        self.view.get_untracked()
    }

    pub fn is_active(&self, view: SelectedView) -> bool {
        self.view.with(|current| *current == view)
    }

    /// Switch to `view`. Re-selecting the active view does not notify subscribers.
    pub fn select(&self, view: SelectedView) {
        let previous = self.view.get_untracked();
        if previous == view {
            log::debug!("select: '{}' already active", view);
            return;
        }
        log::debug!("select: '{}' -> '{}'", previous, view);
        self.view.set(view);
    }
}

impl Default for PosterContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_poster_context() -> PosterContext {
    leptos::context::use_context::<PosterContext>().expect("PosterContext context not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tabs::tab_class;

    fn with_owner<T>(f: impl FnOnce() -> T) -> T {
        let owner = Owner::new();
        owner.with(f)
    }

    #[test]
    fn test_starts_on_home() {
        with_owner(|| {
            let ctx = PosterContext::new();
            assert_eq!(ctx.current_untracked(), SelectedView::Home);
        });
    }

    #[test]
    fn test_select_each_view() {
        with_owner(|| {
            let ctx = PosterContext::new();
            for view in SelectedView::all() {
                ctx.select(view);
                assert_eq!(ctx.current_untracked(), view);
                let active: Vec<_> = SelectedView::all()
                    .into_iter()
                    .filter(|v| ctx.view.with_untracked(|c| c == v))
                    .collect();
                assert_eq!(active, vec![view]);
            }
        });
    }

    #[test]
    fn test_nav_marks_only_selected_tab_active() {
        with_owner(|| {
            let ctx = PosterContext::new();
            for view in SelectedView::all() {
                ctx.select(view);
                ctx.select(view);
                let active: Vec<_> = SelectedView::all()
                    .into_iter()
                    .filter(|v| tab_class(ctx.is_active(*v)) == "tab active")
                    .collect();
                assert_eq!(active, vec![view]);
            }
        });
    }

    #[test]
    fn test_repeated_select_is_idempotent() {
        with_owner(|| {
            let once = PosterContext::new();
            once.select(SelectedView::Results);

            let twice = PosterContext::new();
            twice.select(SelectedView::Results);
            twice.select(SelectedView::Results);

            assert_eq!(once.current_untracked(), twice.current_untracked());
        });
    }

    #[test]
    fn test_context_lookup() {
        with_owner(|| {
            provide_context(PosterContext::new());
            let ctx = use_poster_context();
            ctx.select(SelectedView::Team);
            assert_eq!(use_poster_context().current_untracked(), SelectedView::Team);
        });
    }
}
