// Cursor-following highlight shared by every project card in the grid.
//
// The effect owns all of its state: the card rects registered for the
// current frame and the per-card pointer offsets derived from the last
// pointer movement. Offsets are computed for every registered card on
// every movement (broadcast), not just the card under the pointer, so
// neighbouring cards show the edge of the glow as the cursor approaches.

use std::collections::HashMap;

use eframe::egui::epaint::{Mesh, Vertex, WHITE_UV};
use eframe::egui::{self, Color32, Pos2, Rect, Vec2};

use crate::ui_constants::highlight as hl;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EffectState {
    Unattached,
    Attached,
}

pub struct CursorHighlight {
    state: EffectState,
    /// Card rects registered this frame, in draw order.
    cards: Vec<(egui::Id, Rect)>,
    /// Pointer position relative to each card's top-left corner,
    /// overwritten on every pointer movement.
    offsets: HashMap<egui::Id, Vec2>,
}

/// Pointer position relative to a card's top-left corner.
pub fn relative_to(pointer: Pos2, rect: &Rect) -> Vec2 {
    pointer - rect.min
}

impl CursorHighlight {
    pub fn new() -> Self {
        Self {
            state: EffectState::Unattached,
            cards: Vec::new(),
            offsets: HashMap::new(),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.state == EffectState::Attached
    }

    /// Start observing pointer movement over the grid. A missing container
    /// (no cards drawn yet) is a silent no-op; the page works without the
    /// effect.
    pub fn attach(&mut self, container: Option<Rect>) {
        if self.state == EffectState::Attached {
            return;
        }
        match container {
            Some(rect) => {
                self.state = EffectState::Attached;
                log::info!(
                    "highlight attached to a {:.0}x{:.0} grid",
                    rect.width(),
                    rect.height()
                );
            }
            None => {
                log::debug!("highlight attach skipped: no card grid present");
            }
        }
    }

    /// Terminal transition: stop observing and drop all derived state.
    pub fn detach(&mut self) {
        if self.state != EffectState::Attached {
            return;
        }
        self.state = EffectState::Unattached;
        self.cards.clear();
        self.offsets.clear();
        log::info!("highlight detached");
    }

    /// Card rects are re-registered every frame; call this before drawing
    /// the grid. Offsets survive so cards keep their glow between
    /// movements.
    pub fn begin_frame(&mut self) {
        self.cards.clear();
    }

    pub fn register_card(&mut self, id: egui::Id, rect: Rect) {
        self.cards.push((id, rect));
    }

    /// One pointer movement: recompute the relative position for every
    /// registered card and republish it as that card's style parameters.
    pub fn on_pointer_move(&mut self, pointer: Pos2) {
        if self.state != EffectState::Attached {
            return;
        }
        for (id, rect) in &self.cards {
            self.offsets.insert(*id, relative_to(pointer, rect));
        }
    }

    pub fn offset_for(&self, id: egui::Id) -> Option<Vec2> {
        self.offsets.get(&id).copied()
    }
}

impl Default for CursorHighlight {
    fn default() -> Self {
        Self::new()
    }
}

/// Paint the radial glow into `rect`, centered at `rect.min + offset`.
/// Callers pass a painter already clipped to the card so the gradient
/// never bleeds onto neighbours.
pub fn paint_card_highlight(painter: &egui::Painter, rect: Rect, offset: Vec2) {
    let center = rect.min + offset;
    // Entirely out of reach, nothing of the disc would be visible.
    if !rect.expand(hl::RADIUS).contains(center) {
        return;
    }

    let mut mesh = Mesh::default();
    mesh.vertices.push(Vertex {
        pos: center,
        uv: WHITE_UV,
        color: Color32::from_white_alpha(hl::CENTER_ALPHA),
    });
    for i in 0..=hl::SEGMENTS {
        let angle = (i as f32 / hl::SEGMENTS as f32) * std::f32::consts::TAU;
        mesh.vertices.push(Vertex {
            pos: egui::pos2(
                center.x + hl::RADIUS * angle.cos(),
                center.y + hl::RADIUS * angle.sin(),
            ),
            uv: WHITE_UV,
            color: Color32::TRANSPARENT,
        });
    }
    for i in 0..hl::SEGMENTS as u32 {
        mesh.add_triangle(0, i + 1, i + 2);
    }
    painter.add(egui::Shape::mesh(mesh));
}

mod tests;
