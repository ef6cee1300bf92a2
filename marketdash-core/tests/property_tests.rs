//! Property tests for dashboard state invariants.
//!
//! Uses proptest to verify:
//! 1. Selection uniqueness: no two entries ever share a symbol
//! 2. Color determinism: color depends only on the category
//! 3. Clear is absorbing: a cleared store behaves like a fresh one
//! 4. Grid soundness: moves and resizes never overlap panels or leave the grid

use std::collections::HashSet;

use marketdash_core::layout::Direction;
use marketdash_core::{Breakpoint, Category, Layouts, PanelId, SelectedTicker, SelectionStore};
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn arb_symbol() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["AAPL", "MSFT", "GC", "EURUSD", "US10Y", "BTC"])
        .prop_map(String::from)
}

#[derive(Debug, Clone)]
enum SelectionOp {
    Add(String, Category),
    Remove(String),
    Toggle(String, Category),
    Clear,
}

fn arb_op() -> impl Strategy<Value = SelectionOp> {
    prop_oneof![
        4 => (arb_symbol(), arb_category()).prop_map(|(s, c)| SelectionOp::Add(s, c)),
        2 => arb_symbol().prop_map(SelectionOp::Remove),
        2 => (arb_symbol(), arb_category()).prop_map(|(s, c)| SelectionOp::Toggle(s, c)),
        1 => Just(SelectionOp::Clear),
    ]
}

fn apply(store: &mut SelectionStore, op: &SelectionOp) {
    match op {
        SelectionOp::Add(s, c) => {
            store.add(SelectedTicker::new(s.clone(), s.clone(), *c));
        }
        SelectionOp::Remove(s) => {
            store.remove(s);
        }
        SelectionOp::Toggle(s, c) => {
            store.toggle(SelectedTicker::new(s.clone(), s.clone(), *c));
        }
        SelectionOp::Clear => store.clear(),
    }
}

#[derive(Debug, Clone)]
enum GridOp {
    Move(PanelId, Direction),
    Resize(PanelId, i16, i16),
}

fn arb_panel() -> impl Strategy<Value = PanelId> {
    prop::sample::select(PanelId::ALL.to_vec())
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(vec![
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ])
}

fn arb_grid_op() -> impl Strategy<Value = GridOp> {
    prop_oneof![
        (arb_panel(), arb_direction()).prop_map(|(p, d)| GridOp::Move(p, d)),
        (arb_panel(), -2i16..=2, -2i16..=2).prop_map(|(p, dw, dh)| GridOp::Resize(p, dw, dh)),
    ]
}

fn arb_breakpoint() -> impl Strategy<Value = Breakpoint> {
    prop::sample::select(Breakpoint::ALL.to_vec())
}

// ── 1-3. Selection Store ─────────────────────────────────────────────

proptest! {
    /// Symbols stay unique for any sequence of operations.
    #[test]
    fn symbols_stay_unique(ops in prop::collection::vec(arb_op(), 0..60)) {
        let mut store = SelectionStore::new();
        for op in &ops {
            apply(&mut store, op);
            let mut seen = HashSet::new();
            for t in store.tickers() {
                prop_assert!(seen.insert(t.symbol().to_string()), "duplicate {}", t.symbol());
            }
        }
    }

    /// Every stored color is its category's color, whatever the insertion order.
    #[test]
    fn color_is_category_color(ops in prop::collection::vec(arb_op(), 0..60)) {
        let mut store = SelectionStore::new();
        for op in &ops {
            apply(&mut store, op);
        }
        for t in store.tickers() {
            prop_assert_eq!(t.color(), t.category().color());
        }
    }

    /// Re-adding a present symbol never changes the store.
    #[test]
    fn add_is_idempotent(
        ops in prop::collection::vec(arb_op(), 0..30),
        symbol in arb_symbol(),
        category in arb_category(),
        other in arb_category(),
    ) {
        let mut store = SelectionStore::new();
        for op in &ops {
            apply(&mut store, op);
        }
        store.add(SelectedTicker::new(symbol.clone(), "first", category));
        let before = store.tickers().to_vec();

        store.add(SelectedTicker::new(symbol.clone(), "second", other));
        prop_assert_eq!(store.tickers(), before.as_slice());
    }

    /// After `clear`, replaying operations matches a fresh store.
    #[test]
    fn clear_is_absorbing(
        prefix in prop::collection::vec(arb_op(), 0..30),
        suffix in prop::collection::vec(arb_op(), 0..30),
    ) {
        let mut used = SelectionStore::new();
        for op in &prefix {
            apply(&mut used, op);
        }
        used.clear();
        prop_assert!(used.is_empty());

        let mut fresh = SelectionStore::new();
        for op in &suffix {
            apply(&mut used, op);
            apply(&mut fresh, op);
        }
        prop_assert_eq!(used.tickers(), fresh.tickers());
    }
}

// ── 4. Grid soundness ────────────────────────────────────────────────

proptest! {
    /// Resolved layouts never overlap and always fit the grid.
    #[test]
    fn gestures_keep_grid_sound(
        bp in arb_breakpoint(),
        ops in prop::collection::vec(arb_grid_op(), 0..40),
    ) {
        let mut layouts = Layouts::default_layouts();
        for op in &ops {
            match *op {
                GridOp::Move(panel, dir) => { layouts.move_panel(bp, panel, dir); }
                GridOp::Resize(panel, dw, dh) => { layouts.resize_panel(bp, panel, dw, dh); }
            }

            let resolved = layouts.resolve(bp);
            prop_assert_eq!(resolved.len(), PanelId::ALL.len());
            for (i, a) in resolved.iter().enumerate() {
                prop_assert!(a.w >= 1 && a.h >= 1);
                prop_assert!(a.x + a.w <= bp.cols(), "{:?} leaves the grid", a);
                for b in &resolved[i + 1..] {
                    prop_assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
                }
            }
        }
    }

    /// Saved layouts survive a JSON round trip unchanged.
    #[test]
    fn edited_layouts_reparse(
        bp in arb_breakpoint(),
        ops in prop::collection::vec(arb_grid_op(), 0..20),
    ) {
        let mut layouts = Layouts::default_layouts();
        for op in &ops {
            match *op {
                GridOp::Move(panel, dir) => { layouts.move_panel(bp, panel, dir); }
                GridOp::Resize(panel, dw, dh) => { layouts.resize_panel(bp, panel, dw, dh); }
            }
        }
        let json = layouts.to_json().unwrap();
        prop_assert_eq!(Layouts::parse(&json).unwrap(), layouts);
    }
}
