//! Slide-over panel for `DeckApp`.
//!
//! The panel is mounted while a topic is active and slides in from the right
//! once the shell reports it open. A dimming overlay covers the deck behind
//! it; clicking the overlay or the × control closes the panel.

use std::time::Duration;

use eframe::egui;
use egui::{Color32, Margin, Order, Pos2, Rect, RichText, Rounding, Sense, Stroke, Vec2};

use cerca_deck::render::palette::rgba;

use super::{serif, DeckApp};

const PANEL_MAX_WIDTH: f32 = 768.0;
const PANEL_PADDING: f32 = 32.0;
const SLIDE_SECS: f32 = 0.7;
const OVERLAY_SECS: f32 = 0.5;
const PANEL_FILL: Color32 = Color32::from_rgb(11, 12, 11);
const SUBTITLE_COLOR: Color32 = Color32::from_rgb(245, 158, 11);

impl DeckApp {
    pub fn draw_panel(&mut self, ctx: &egui::Context, now: Duration) {
        let Some(topic) = self.shell.active() else {
            return;
        };
        let open = self.shell.panel_open();
        let slide = ctx.animate_bool_with_time(egui::Id::new("panel_slide"), open, SLIDE_SECS);
        let dim = ctx.animate_bool_with_time(egui::Id::new("panel_overlay"), open, OVERLAY_SECS);
        let screen = ctx.screen_rect();
        let mut close = false;

        if dim > 0.0 {
            egui::Area::new(egui::Id::new("panel_overlay_area"))
                .order(Order::Middle)
                .fixed_pos(screen.min)
                .interactable(open)
                .show(ctx, |ui| {
                    let response = ui.allocate_rect(screen, Sense::click());
                    ui.painter().rect_filled(screen, 0.0, rgba(0, 0, 0, 0.7 * dim));
                    if open && response.clicked() {
                        close = true;
                    }
                });
        }

        if slide > 0.0 {
            let width = screen.width().min(PANEL_MAX_WIDTH);
            let left = screen.right() - width * slide;
            let panel = Rect::from_min_size(Pos2::new(left, screen.top()), Vec2::new(width, screen.height()));

            egui::Area::new(egui::Id::new("slide_over"))
                .order(Order::Foreground)
                .fixed_pos(panel.min)
                .show(ctx, |ui| {
                    ui.painter().rect(panel, 0.0, PANEL_FILL, Stroke::new(1.0, rgba(255, 255, 255, 0.1)));
                    ui.set_min_size(panel.size());
                    ui.set_max_size(panel.size());

                    egui::Frame::none()
                        .inner_margin(Margin::same(PANEL_PADDING))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.vertical(|ui| {
                                    ui.set_max_width(width - PANEL_PADDING * 2.0 - 56.0);
                                    ui.label(
                                        RichText::new(topic.subtitle().to_uppercase())
                                            .size(11.0)
                                            .color(SUBTITLE_COLOR),
                                    );
                                    ui.add_space(6.0);
                                    ui.label(RichText::new(topic.title()).font(serif(28.0)).color(Color32::WHITE));
                                });
                                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                                    let button = egui::Button::new(
                                        RichText::new("×").size(20.0).color(rgba(255, 255, 255, 0.6)),
                                    )
                                    .fill(rgba(255, 255, 255, 0.05))
                                    .rounding(Rounding::same(20.0))
                                    .min_size(Vec2::splat(40.0));
                                    if ui.add(button).clicked() {
                                        close = true;
                                    }
                                });
                            });
                            ui.add_space(16.0);
                            ui.separator();
                            ui.add_space(8.0);

                            egui::ScrollArea::vertical()
                                .id_salt(("panel_scroll", topic.index()))
                                .auto_shrink([false, false])
                                .show(ui, |ui| {
                                    self.draw_topic_content(ui, ctx, topic, now);
                                    ui.add_space(48.0);
                                });
                        });
                });
        }

        if close {
            self.close_panel(now);
        }
    }
}
