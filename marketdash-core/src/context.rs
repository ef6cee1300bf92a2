//! Dashboard context — the single owner of shared dashboard state.
//!
//! Built once at startup and lent to every panel by reference. Layout edits go
//! through the context so that each completed gesture is persisted.

use crate::catalog::{Catalog, PanelId};
use crate::layout::{Breakpoint, Direction, LayoutStore, Layouts};
use crate::rng::SeedSource;
use crate::selection::SelectionStore;
use crate::storage::KeyValueStore;

pub struct DashboardContext<S: KeyValueStore> {
    pub selection: SelectionStore,
    pub catalog: Catalog,
    pub seeds: SeedSource,
    layouts: Layouts,
    layout_store: LayoutStore<S>,
}

impl<S: KeyValueStore> DashboardContext<S> {
    /// Build the context, loading the saved arrangement from `storage`.
    pub fn new(storage: S, catalog: Catalog, seeds: SeedSource) -> Self {
        let layout_store = LayoutStore::new(storage);
        let layouts = layout_store.load();
        Self {
            selection: SelectionStore::new(),
            catalog,
            seeds,
            layouts,
            layout_store,
        }
    }

    pub fn layouts(&self) -> &Layouts {
        &self.layouts
    }

    pub fn layout_store(&self) -> &LayoutStore<S> {
        &self.layout_store
    }

    /// Move `panel` one step and persist. Returns `true` if it moved.
    pub fn move_panel(&mut self, bp: Breakpoint, panel: PanelId, direction: Direction) -> bool {
        let moved = self.layouts.move_panel(bp, panel, direction);
        if moved {
            self.persist();
        }
        moved
    }

    /// Resize `panel` and persist. Returns `true` if its size changed.
    pub fn resize_panel(&mut self, bp: Breakpoint, panel: PanelId, dw: i16, dh: i16) -> bool {
        let resized = self.layouts.resize_panel(bp, panel, dw, dh);
        if resized {
            self.persist();
        }
        resized
    }

    /// Restore and persist the default arrangement.
    pub fn reset_layout(&mut self) {
        match self.layout_store.reset() {
            Ok(defaults) => self.layouts = defaults,
            Err(e) => {
                tracing::warn!(error = %e, "failed to persist layout reset");
                self.layouts = Layouts::default_layouts();
            }
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.layout_store.save(&self.layouts) {
            tracing::warn!(error = %e, "failed to save layout");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn context() -> DashboardContext<MemoryStore> {
        DashboardContext::new(MemoryStore::new(), Catalog::default_catalog(), SeedSource::new(1))
    }

    #[test]
    fn starts_with_default_layout_and_empty_selection() {
        let ctx = context();
        assert_eq!(ctx.layouts(), &Layouts::default_layouts());
        assert!(ctx.selection.is_empty());
    }

    #[test]
    fn gestures_are_persisted() {
        let mut ctx = context();
        assert!(ctx.resize_panel(Breakpoint::Lg, PanelId::News, 0, 1));
        assert_eq!(ctx.layout_store().load(), *ctx.layouts());

        assert!(ctx.move_panel(Breakpoint::Lg, PanelId::Equity, Direction::Right));
        assert_eq!(ctx.layout_store().load(), *ctx.layouts());
    }

    #[test]
    fn noop_gesture_does_not_write() {
        let mut ctx = context();
        assert!(!ctx.move_panel(Breakpoint::Lg, PanelId::Equity, Direction::Left));
        assert!(ctx.layout_store().storage().get("layouts").unwrap().is_none());
    }

    #[test]
    fn reset_restores_default() {
        let mut ctx = context();
        ctx.resize_panel(Breakpoint::Md, PanelId::Comparison, 0, 2);
        ctx.reset_layout();
        assert_eq!(ctx.layouts(), &Layouts::default_layouts());
        assert_eq!(ctx.layout_store().load(), Layouts::default_layouts());
    }

    #[test]
    fn reload_sees_saved_layout() {
        let mut ctx = context();
        ctx.resize_panel(Breakpoint::Sm, PanelId::Equity, 0, 1);
        let saved = ctx.layouts().clone();

        let storage = ctx.layout_store().storage().clone();
        let reloaded = DashboardContext::new(storage, Catalog::default_catalog(), SeedSource::new(1));
        assert_eq!(reloaded.layouts(), &saved);
    }
}
