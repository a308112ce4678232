//! Header chrome for `DeckApp`.
//!
//! Draws the wordmark in the top-left corner and the centered tagline,
//! which fades out while a panel is open.

use eframe::egui;
use egui::text::{LayoutJob, TextFormat};
use egui::{Align, Align2, Color32, FontId, Pos2, Rect, Vec2};

use cerca_deck::render::palette::{rgba, with_alpha};

use super::{serif, DeckApp};

const MARGIN: f32 = 40.0;
const WORDMARK: &str = "Cerca";
const PROTOCOL: &str = "PROTOCOLO RAA / CDO FINAL V12.0";
const TAGLINE: &str = "\"No hace falta ir lejos para\nsentir que te has ido\"";
const STRATEGY: &str = "ESTRATEGIA DE RESIGNIFICACIÓN";
const AMBER: Color32 = Color32::from_rgb(245, 158, 11);
/// Seconds for the tagline fade.
const TAGLINE_FADE: f32 = 0.7;

impl DeckApp {
    /// Wordmark with its amber full stop, and the protocol line below it.
    pub fn draw_header(&self, ui: &egui::Ui, rect: Rect) {
        let painter = ui.painter_at(rect);
        let origin = rect.left_top() + Vec2::splat(MARGIN);

        let word = painter.layout_no_wrap(WORDMARK.to_owned(), serif(44.0), Color32::WHITE);
        let word_size = word.size();
        painter.galley(origin, word, Color32::WHITE);
        painter.text(
            origin + Vec2::new(word_size.x, 0.0),
            Align2::LEFT_TOP,
            ".",
            serif(44.0),
            AMBER,
        );

        painter.text(
            origin + Vec2::new(0.0, word_size.y + 4.0),
            Align2::LEFT_TOP,
            PROTOCOL,
            FontId::proportional(10.0),
            rgba(255, 255, 255, 0.4),
        );
    }

    /// Centered claim; shrinks slightly and fades while the panel is open.
    pub fn draw_tagline(&self, ui: &egui::Ui, ctx: &egui::Context, rect: Rect) {
        let hidden = ctx.animate_bool_with_time(
            egui::Id::new("tagline_hidden"),
            self.shell.panel_open(),
            TAGLINE_FADE,
        );
        let alpha = 1.0 - hidden;
        if alpha <= 0.0 {
            return;
        }
        let scale = 1.0 - 0.05 * hidden;
        let painter = ui.painter_at(rect);
        let center = rect.center();

        let mut job = LayoutJob::default();
        job.append(
            TAGLINE,
            0.0,
            TextFormat {
                font_id: serif(28.0 * scale),
                color: with_alpha(Color32::WHITE, 0.9 * alpha),
                italics: true,
                line_height: Some(28.0 * scale * 1.6),
                ..Default::default()
            },
        );
        job.halign = Align::Center;
        let galley = painter.layout_job(job);
        let height = galley.size().y;
        let top = Pos2::new(center.x, center.y - height * 0.5 - 12.0);
        painter.galley(top, galley, Color32::WHITE);

        painter.text(
            Pos2::new(center.x, top.y + height + 24.0),
            Align2::CENTER_TOP,
            STRATEGY,
            FontId::proportional(11.0),
            rgba(255, 255, 255, 0.4 * alpha),
        );
    }
}
