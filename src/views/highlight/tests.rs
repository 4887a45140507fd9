#[cfg(test)]
mod tests {
    use eframe::egui::{self, pos2, vec2, Rect};

    use crate::views::highlight::{relative_to, CursorHighlight};

    fn card(seed: u64, left: f32, top: f32, width: f32, height: f32) -> (egui::Id, Rect) {
        (
            egui::Id::new(seed),
            Rect::from_min_size(pos2(left, top), vec2(width, height)),
        )
    }

    fn attached_with(cards: &[(egui::Id, Rect)]) -> CursorHighlight {
        let mut effect = CursorHighlight::new();
        let container = cards
            .iter()
            .map(|(_, r)| *r)
            .reduce(|a, b| a.union(b));
        effect.attach(container);
        for (id, rect) in cards {
            effect.register_card(*id, *rect);
        }
        effect
    }

    #[test]
    fn relative_position_is_measured_from_card_origin() {
        let (id, rect) = card(1, 100.0, 50.0, 200.0, 150.0);
        let mut effect = attached_with(&[(id, rect)]);

        effect.on_pointer_move(pos2(180.0, 90.0));

        assert_eq!(effect.offset_for(id), Some(vec2(80.0, 40.0)));
        assert_eq!(relative_to(pos2(180.0, 90.0), &rect), vec2(80.0, 40.0));
    }

    #[test]
    fn one_movement_updates_every_card() {
        let a = card(1, 0.0, 0.0, 100.0, 100.0);
        let b = card(2, 500.0, 0.0, 100.0, 100.0);
        let mut effect = attached_with(&[a, b]);

        // Pointer is over card A; card B must still receive its offset.
        effect.on_pointer_move(pos2(10.0, 20.0));

        assert_eq!(effect.offset_for(a.0), Some(vec2(10.0, 20.0)));
        assert_eq!(effect.offset_for(b.0), Some(vec2(-490.0, 20.0)));
    }

    #[test]
    fn each_movement_overwrites_the_previous_one() {
        let (id, rect) = card(1, 0.0, 0.0, 100.0, 100.0);
        let mut effect = attached_with(&[(id, rect)]);

        effect.on_pointer_move(pos2(10.0, 10.0));
        effect.on_pointer_move(pos2(60.0, 70.0));

        assert_eq!(effect.offset_for(id), Some(vec2(60.0, 70.0)));
    }

    #[test]
    fn attach_without_container_is_a_noop() {
        let (id, rect) = card(1, 0.0, 0.0, 100.0, 100.0);
        let mut effect = CursorHighlight::new();
        effect.attach(None);
        effect.register_card(id, rect);

        effect.on_pointer_move(pos2(10.0, 10.0));

        assert!(!effect.is_attached());
        assert_eq!(effect.offset_for(id), None);
    }

    #[test]
    fn movements_before_attach_do_nothing() {
        let (id, rect) = card(1, 0.0, 0.0, 100.0, 100.0);
        let mut effect = CursorHighlight::new();
        effect.register_card(id, rect);

        effect.on_pointer_move(pos2(10.0, 10.0));

        assert_eq!(effect.offset_for(id), None);
    }

    #[test]
    fn detach_stops_all_further_updates() {
        let (id, rect) = card(1, 0.0, 0.0, 100.0, 100.0);
        let mut effect = attached_with(&[(id, rect)]);
        effect.on_pointer_move(pos2(10.0, 10.0));
        assert!(effect.offset_for(id).is_some());

        effect.detach();
        assert!(!effect.is_attached());
        assert_eq!(effect.offset_for(id), None);

        effect.register_card(id, rect);
        effect.on_pointer_move(pos2(20.0, 20.0));
        assert_eq!(effect.offset_for(id), None);

        // Detaching twice is harmless.
        effect.detach();
    }

    #[test]
    fn frame_reset_drops_stale_registrations() {
        let (id, rect) = card(1, 0.0, 0.0, 100.0, 100.0);
        let mut effect = attached_with(&[(id, rect)]);

        effect.begin_frame();
        effect.on_pointer_move(pos2(10.0, 10.0));

        // The card was not re-registered this frame, so no offset appears.
        assert_eq!(effect.offset_for(id), None);
    }

    #[test]
    fn offsets_survive_frame_reset_until_next_movement() {
        let (id, rect) = card(1, 0.0, 0.0, 100.0, 100.0);
        let mut effect = attached_with(&[(id, rect)]);
        effect.on_pointer_move(pos2(10.0, 10.0));

        effect.begin_frame();
        effect.register_card(id, rect);

        // No movement between frames: the stored offset still drives the glow.
        assert_eq!(effect.offset_for(id), Some(vec2(10.0, 10.0)));
    }
}
