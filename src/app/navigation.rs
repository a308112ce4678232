//! Radial navigation for `DeckApp`.
//!
//! Five pill-shaped nodes on a circle inside a centered square, plus the
//! selection/close entry points used by the nodes, the panel and Escape.

use std::time::Duration;

use eframe::egui;
use egui::{Align2, Color32, FontId, Rect, Rounding, Sense, Stroke, Vec2};

use cerca_deck::render::palette::{lerp_color, rgba};
use cerca_deck::shell::Topic;

use super::DeckApp;

const NODE_PADDING: Vec2 = Vec2::new(16.0, 12.0);
const LABEL_SIZE: f32 = 14.0;

impl DeckApp {
    /// Activate `topic`; its panel opens after the shell's delay.
    pub fn select_topic(&mut self, topic: Topic, now: Duration) {
        if self.shell.active() != Some(topic) {
            self.waveforms.stop_all();
            self.content_since = now;
        }
        self.shell.select(topic, now);
    }

    pub fn close_panel(&mut self, now: Duration) {
        self.shell.close(now);
    }

    /// Draw the five topic nodes and handle clicks on them.
    pub fn draw_navigation(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, rect: Rect, now: Duration) {
        let side = rect.width().min(rect.height());
        let center = rect.center();
        let painter = ui.painter_at(rect);
        let mut clicked = None;

        for topic in Topic::ALL {
            let id = egui::Id::new(("nav_node", topic.index()));
            let active = self.shell.active() == Some(topic);

            let galley = painter.layout_no_wrap(
                topic.label().to_owned(),
                FontId::proportional(LABEL_SIZE),
                Color32::WHITE,
            );
            let base = Rect::from_center_size(
                center + topic.node_offset(side),
                galley.size() + NODE_PADDING * 2.0,
            );
            let response = ui.interact(base, id, Sense::click());

            let lit = ctx.animate_bool_with_time(id.with("lit"), active || response.hovered(), 0.3);
            let focus = ctx.animate_bool_with_time(id.with("active"), active, 0.5);
            let scale = 1.0 + 0.05 * lit + 0.05 * focus;
            let node = Rect::from_center_size(base.center(), base.size() * scale);

            let fill = lerp_color(rgba(255, 255, 255, 0.03), rgba(255, 255, 255, 0.10), lit);
            let border = lerp_color(rgba(255, 255, 255, 0.15), rgba(255, 255, 255, 0.40), lit);
            let text = lerp_color(rgba(255, 255, 255, 0.70), Color32::WHITE, focus);

            painter.rect(node, Rounding::same(node.height() * 0.5), fill, Stroke::new(1.0, border));
            painter.text(
                node.center(),
                Align2::CENTER_CENTER,
                topic.label(),
                FontId::proportional(LABEL_SIZE * scale),
                text,
            );

            if response.clicked() {
                clicked = Some(topic);
            }
            if response.hovered() {
                ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
            }
        }

        if let Some(topic) = clicked {
            self.select_topic(topic, now);
        }
    }
}
