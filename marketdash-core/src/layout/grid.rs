//! Column-grid engine with vertical compaction.
//!
//! Panels float upward until they hit another panel; a panel that would
//! overlap one placed before it is pushed down below it. Moves and resizes
//! give the edited panel priority so that it keeps its target cell and its
//! neighbours make room.

use super::Placement;
use crate::catalog::PanelId;

/// Tallest a single panel may be, in grid rows.
pub const MAX_ROWS: u16 = 12;

/// Lowest row a saved placement may reach: every panel stacked at full height.
pub const ROW_LIMIT: u16 = MAX_ROWS * PanelId::ALL.len() as u16;

/// One arrange-mode step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Clamp a placement into a grid with `cols` columns.
pub fn fit(mut p: Placement, cols: u16) -> Placement {
    p.w = p.w.clamp(1, cols.max(1));
    p.x = p.x.min(cols.saturating_sub(p.w));
    p.h = p.h.clamp(1, MAX_ROWS);
    p.y = p.y.min(ROW_LIMIT);
    p
}

/// Number of rows occupied.
pub fn bottom(placements: &[Placement]) -> u16 {
    placements
        .iter()
        .map(|p| p.y.saturating_add(p.h))
        .max()
        .unwrap_or(0)
}

fn first_collision<'a>(placed: &'a [Placement], item: &Placement) -> Option<&'a Placement> {
    placed.iter().find(|p| p.overlaps(item))
}

/// Vertically compact `placements` in place, preserving their order.
///
/// Items are processed by (row, priority first, column): each floats up while
/// the cell above is free, then drops below anything it still overlaps.
pub fn compact(placements: &mut [Placement], priority: Option<&str>) {
    let mut order: Vec<usize> = (0..placements.len()).collect();
    order.sort_by_key(|&i| {
        let p = &placements[i];
        (p.y, Some(p.id.as_str()) != priority, p.x)
    });

    let mut placed: Vec<Placement> = Vec::with_capacity(placements.len());
    let mut result: Vec<Option<Placement>> = vec![None; placements.len()];

    for i in order {
        let mut item = placements[i].clone();
        while item.y > 0 {
            let above = Placement {
                y: item.y - 1,
                ..item.clone()
            };
            if first_collision(&placed, &above).is_some() {
                break;
            }
            item.y -= 1;
        }
        while let Some(hit) = first_collision(&placed, &item) {
            item.y = hit.y.saturating_add(hit.h);
        }
        placed.push(item.clone());
        result[i] = Some(item);
    }

    for (slot, compacted) in placements.iter_mut().zip(result) {
        if let Some(p) = compacted {
            *slot = p;
        }
    }
}

fn shares_columns(a: &Placement, b: &Placement) -> bool {
    a.x < b.x.saturating_add(b.w) && b.x < a.x.saturating_add(a.w)
}

/// Move the panel `id` one step and re-compact.
///
/// Horizontal moves shift by one column within the grid. Vertical moves swap
/// with the nearest panel above or below that shares a column. Returns
/// `false` when the panel is absent or already at the edge.
pub fn move_panel(placements: &mut [Placement], cols: u16, id: &str, direction: Direction) -> bool {
    let Some(idx) = placements.iter().position(|p| p.id == id) else {
        return false;
    };
    let current = placements[idx].clone();

    let target_y = match direction {
        Direction::Left => {
            if current.x == 0 {
                return false;
            }
            placements[idx].x -= 1;
            current.y
        }
        Direction::Right => {
            if current.x.saturating_add(current.w) >= cols {
                return false;
            }
            placements[idx].x += 1;
            current.y
        }
        Direction::Up => {
            let above = placements
                .iter()
                .filter(|p| p.id != id && p.y < current.y && shares_columns(p, &current))
                .map(|p| p.y)
                .max();
            match above {
                Some(y) => y,
                None => return false,
            }
        }
        Direction::Down => {
            let below = placements
                .iter()
                .filter(|p| p.id != id && p.y > current.y && shares_columns(p, &current))
                .map(|p| p.y)
                .min();
            match below {
                Some(y) => y.saturating_add(1),
                None => return false,
            }
        }
    };
    placements[idx].y = target_y;

    compact(placements, Some(id));
    placements[idx] != current
}

/// Change the size of panel `id` by `(dw, dh)` cells and re-compact.
pub fn resize_panel(placements: &mut [Placement], cols: u16, id: &str, dw: i16, dh: i16) -> bool {
    let Some(idx) = placements.iter().position(|p| p.id == id) else {
        return false;
    };
    let current = placements[idx].clone();
    let max_w = cols.saturating_sub(current.x).max(1);

    let w = (i32::from(current.w) + i32::from(dw)).clamp(1, i32::from(max_w));
    let h = (i32::from(current.h) + i32::from(dh)).clamp(1, i32::from(MAX_ROWS));
    let (w, h) = (w as u16, h as u16);
    if w == current.w && h == current.h {
        return false;
    }
    placements[idx].w = w;
    placements[idx].h = h;

    compact(placements, Some(id));
    true
}
