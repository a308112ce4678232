//! Panel body rendering for `DeckApp`.
//!
//! One `draw_*` function per topic, built from a few shared pieces: glass
//! cards, eyebrow headings and horizontal score bars. Charts are painted
//! directly with the geometry from `cerca_deck::content`.

use std::time::Duration;

use eframe::egui;
use egui::epaint::Mesh;
use egui::{Align2, Color32, FontId, Margin, Pos2, Rect, RichText, Rounding, Sense, Shape, Stroke, Vec2};

use cerca_deck::content::copy::{self, Card};
use cerca_deck::content::radar::{chart_radius, GUIDE_RINGS};
use cerca_deck::content::waveform::{BAR_COUNT, STOP_LABEL};
use cerca_deck::content::{
    radar_layout, PhaseStatus, WaveKind, FEASIBILITY, MATRIX_REVEAL, PHASES, RADAR_REVEAL, SEGMENT_PROFILE,
    TONE_OF_VOICE,
};
use cerca_deck::render::palette::{rgba, with_alpha, CLAY};
use cerca_deck::shell::Topic;

use super::{serif, DeckApp};

const AMBER: Color32 = Color32::from_rgb(251, 191, 36);
const AMBER_DIM: Color32 = Color32::from_rgb(217, 119, 6);
const GREEN: Color32 = Color32::from_rgb(74, 222, 128);
const RED: Color32 = Color32::from_rgb(248, 113, 113);
const BODY: Color32 = Color32::from_rgb(209, 213, 219);
const MUTED: Color32 = Color32::from_rgb(156, 163, 175);
const FAINT: Color32 = Color32::from_rgb(107, 114, 128);

const RADAR_SIZE: f32 = 280.0;
const WAVE_HEIGHT: f32 = 80.0;
const BAR_WIDTH: f32 = 4.0;
const BAR_GAP: f32 = 2.0;

impl DeckApp {
    pub fn draw_topic_content(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, topic: Topic, now: Duration) {
        ui.spacing_mut().item_spacing.y = 10.0;
        let elapsed = now.saturating_sub(self.content_since);
        match topic {
            Topic::Cliente => draw_cliente(ui, ctx, elapsed),
            Topic::Recursos => self.draw_recursos(ui, now),
            Topic::Narrativa => draw_narrativa(ui),
            Topic::Viabilidad => draw_viabilidad(ui, ctx, elapsed),
            Topic::Simbolos => draw_simbolos(ui),
        }
    }

    fn draw_recursos(&mut self, ui: &mut egui::Ui, now: Duration) {
        lead(ui, copy::RECURSOS_INTRO);

        let mut toggled = None;
        card(ui, |ui| {
            eyebrow(ui, copy::SOUND_HEADING, AMBER);
            ui.columns(2, |cols| {
                for (col, kind) in cols.iter_mut().zip([WaveKind::Urban, WaveKind::Cerca]) {
                    col.vertical_centered(|ui| {
                        let wave = self.waveforms.get(kind);
                        let title_color = if kind == WaveKind::Cerca { GREEN } else { MUTED };
                        ui.label(RichText::new(kind.title()).size(13.0).color(title_color));
                        ui.label(RichText::new(kind.tagline()).size(11.0).color(FAINT));
                        draw_waveform(ui, kind, wave.heights());
                        let label = if wave.is_playing() { STOP_LABEL } else { kind.play_label() };
                        let fill = match (wave.is_playing(), kind) {
                            (true, WaveKind::Urban) => rgba(255, 255, 255, 0.2),
                            (true, WaveKind::Cerca) => rgba(22, 101, 52, 0.3),
                            (false, _) => rgba(255, 255, 255, 0.05),
                        };
                        let button = egui::Button::new(RichText::new(label).size(13.0))
                            .fill(fill)
                            .rounding(Rounding::same(16.0));
                        if ui.add(button).clicked() {
                            toggled = Some(kind);
                        }
                    });
                }
            });
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(copy::SOUND_NOTE).size(11.0).italics().color(FAINT));
            });
        });
        if let Some(kind) = toggled {
            self.waveforms.toggle(kind, now);
        }

        eyebrow(ui, copy::GRAMMAR_HEADING, AMBER);
        ui.columns(copy::VISUAL_GRAMMAR.len(), |cols| {
            for (col, item) in cols.iter_mut().zip(&copy::VISUAL_GRAMMAR) {
                card(col, |ui| {
                    ui.label(RichText::new(item.num).font(serif(22.0)).color(rgba(255, 255, 255, 0.2)));
                    ui.label(RichText::new(item.title).strong().color(Color32::WHITE));
                    ui.label(RichText::new(item.desc).size(13.0).color(MUTED));
                    ui.horizontal(|ui| {
                        for color in item.swatches {
                            swatch(ui, color, 32.0);
                        }
                    });
                });
            }
        });

        card(ui, |ui| {
            eyebrow(ui, copy::PALETTE_HEADING, AMBER);
            ui.horizontal_wrapped(|ui| {
                for s in &copy::BRAND_PALETTE {
                    swatch(ui, s.color, 56.0).on_hover_ui(|ui| {
                        ui.label(RichText::new(s.name).strong());
                        ui.label(RichText::new(s.usage).size(10.0).color(FAINT));
                    });
                }
            });
        });
    }
}

fn draw_cliente(ui: &mut egui::Ui, ctx: &egui::Context, elapsed: Duration) {
    lead(ui, copy::CLIENTE_INTRO);

    card(ui, |ui| {
        eyebrow(ui, copy::RADAR_HEADING, AMBER);
        ui.vertical_centered(|ui| draw_radar(ui, RADAR_REVEAL.progress(elapsed)));
    });
    if !RADAR_REVEAL.is_done(elapsed) {
        ctx.request_repaint();
    }

    eyebrow(ui, copy::TRAITS_HEADING, AMBER);
    for item in &copy::SEGMENT_TRAITS {
        card(ui, |ui| numbered_row(ui, item, 28.0));
    }

    card(ui, |ui| {
        eyebrow(ui, copy::DILEMMA_HEADING, AMBER);
        ui.columns(2, |cols| {
            bullet_box(&mut cols[0], copy::STOPPERS_HEADING, &copy::STOPPERS, RED);
            bullet_box(&mut cols[1], copy::SOLUTION_HEADING, &copy::SOLUTION, GREEN);
        });
    });

    quote_block(ui, Some(copy::INSIGHT_HEADING), copy::INSIGHT, copy::INSIGHT_NOTE);

    card(ui, |ui| {
        eyebrow(ui, copy::OPPORTUNITY_HEADING, GREEN);
        ui.label(RichText::new(copy::OPPORTUNITY).size(18.0).color(Color32::WHITE));
    });
}

fn draw_narrativa(ui: &mut egui::Ui) {
    egui::Frame::none()
        .fill(rgba(120, 53, 15, 0.2))
        .stroke(Stroke::new(1.0, rgba(180, 83, 9, 0.2)))
        .rounding(Rounding::same(16.0))
        .inner_margin(Margin::same(32.0))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(copy::CLAIM).font(serif(30.0)).color(Color32::WHITE));
                ui.add_space(12.0);
                ui.label(RichText::new(copy::CLAIM_NOTE).size(13.0).color(FAINT));
            });
        });

    card(ui, |ui| {
        eyebrow(ui, copy::VALUE_HEADING, AMBER);
        ui.label(RichText::new(copy::VALUE_LEAD).size(18.0).color(AMBER));
        ui.label(RichText::new(copy::VALUE_BODY).size(18.0).color(Color32::WHITE));
    });

    eyebrow(ui, copy::TONE_HEADING, AMBER);
    for pair in TONE_OF_VOICE.chunks(2) {
        ui.columns(2, |cols| {
            for (col, t) in cols.iter_mut().zip(pair) {
                card(col, |ui| {
                    score_header(ui, t.name, t.value, AMBER);
                    score_bar(ui, t.value as f32 / 100.0, AMBER_DIM, 8.0);
                    ui.label(RichText::new(t.desc).size(11.0).color(FAINT));
                });
            }
        });
    }

    card(ui, |ui| {
        eyebrow(ui, copy::ANTI_HEADING, RED);
        for pair in copy::ANTI_TERRITORY.chunks(2) {
            ui.columns(2, |cols| {
                for (col, item) in cols.iter_mut().zip(pair) {
                    col.horizontal(|ui| {
                        ui.label(RichText::new("—").size(11.0).color(with_alpha(RED, 0.4)));
                        ui.label(RichText::new(*item).size(13.0).color(MUTED));
                    });
                }
            });
        }
    });
}

fn draw_viabilidad(ui: &mut egui::Ui, ctx: &egui::Context, elapsed: Duration) {
    lead(ui, copy::VIABILIDAD_INTRO);

    card(ui, |ui| {
        eyebrow(ui, copy::REALISM_HEADING, AMBER);
        ui.columns(copy::OPERATIONAL_REALISM.len(), |cols| {
            for (col, fig) in cols.iter_mut().zip(&copy::OPERATIONAL_REALISM) {
                col.vertical_centered(|ui| {
                    ui.label(RichText::new(fig.value).size(28.0).color(fig.color));
                    ui.label(RichText::new(fig.caption).size(11.0).color(FAINT));
                });
            }
        });
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(copy::REALISM_NOTE).size(13.0).color(MUTED));
        });
    });

    let progress = MATRIX_REVEAL.progress(elapsed);
    if !MATRIX_REVEAL.is_done(elapsed) {
        ctx.request_repaint();
    }
    card(ui, |ui| {
        eyebrow(ui, copy::MATRIX_HEADING, AMBER);
        for c in &FEASIBILITY {
            score_header(ui, c.name, c.shown_score(progress), c.color);
            score_bar(ui, c.fill(progress), c.color, 12.0);
            ui.label(RichText::new(c.question).size(11.0).color(FAINT));
            ui.add_space(8.0);
        }
    });

    eyebrow(ui, copy::PHASES_HEADING, GREEN);
    for phase in &PHASES {
        let (badge_fill, badge_text, name_color) = match phase.status {
            PhaseStatus::Active => (rgba(22, 101, 52, 0.5), GREEN, GREEN),
            PhaseStatus::Next => (rgba(146, 64, 14, 0.3), AMBER, Color32::WHITE),
            PhaseStatus::Pending => (rgba(255, 255, 255, 0.1), FAINT, Color32::WHITE),
        };
        card(ui, |ui| {
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::splat(48.0), Sense::hover());
                ui.painter().circle_filled(rect.center(), 24.0, badge_fill);
                ui.painter().text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    phase.num,
                    FontId::monospace(18.0),
                    badge_text,
                );
                ui.vertical(|ui| {
                    ui.label(RichText::new(phase.name).strong().color(name_color));
                    ui.label(RichText::new(phase.desc).size(13.0).color(MUTED));
                    ui.label(RichText::new(phase.detail).size(11.0).color(FAINT));
                });
            });
        });
    }
}

fn draw_simbolos(ui: &mut egui::Ui) {
    lead(ui, copy::SIMBOLOS_INTRO);

    for m in &copy::MOTIFS {
        card(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(m.num).font(FontId::monospace(44.0)).color(rgba(217, 119, 6, 0.3)));
                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(m.title).size(19.0).color(Color32::WHITE));
                    ui.label(RichText::new(m.subtitle).size(13.0).color(AMBER));
                    ui.label(RichText::new(m.desc).color(MUTED));
                });
            });
        });
    }

    card(ui, |ui| {
        eyebrow(ui, copy::FORCES_HEADING, GREEN);
        ui.label(RichText::new(copy::FORCES_LEAD).color(BODY));
        ui.columns(copy::MARKET_FORCES.len(), |cols| {
            for (col, f) in cols.iter_mut().zip(&copy::MARKET_FORCES) {
                col.vertical_centered(|ui| {
                    ui.label(RichText::new(f.num).font(serif(20.0)).color(rgba(245, 158, 11, 0.5)));
                    ui.label(RichText::new(f.title).strong().color(Color32::WHITE));
                    ui.label(RichText::new(f.desc).size(11.0).color(FAINT));
                });
            }
        });
    });

    quote_block(ui, None, copy::CLOSING_QUOTE, copy::CLOSING_NOTE);
}

// ── Charts ─────────────────────────────────────────────────────────

fn draw_radar(ui: &mut egui::Ui, progress: f32) {
    let (response, painter) = ui.allocate_painter(Vec2::splat(RADAR_SIZE), Sense::hover());
    let center = response.rect.center();
    let radius = chart_radius(RADAR_SIZE);
    let points = radar_layout(&SEGMENT_PROFILE, center, RADAR_SIZE, progress);

    let guide = Stroke::new(1.0, rgba(255, 255, 255, 0.06));
    for r in GUIDE_RINGS {
        painter.circle_stroke(center, radius * r, guide);
    }
    for p in &points {
        painter.line_segment([center, p.tip], Stroke::new(1.0, rgba(255, 255, 255, 0.08)));
    }

    // Star-shaped around the center, so a fan fills it exactly.
    let mut mesh = Mesh::default();
    mesh.colored_vertex(center, rgba(212, 163, 115, 0.3));
    for p in &points {
        mesh.colored_vertex(p.vertex, rgba(88, 129, 87, 0.2));
    }
    let n = points.len() as u32;
    for i in 0..n {
        mesh.add_triangle(0, 1 + i, 1 + (i + 1) % n);
    }
    painter.add(Shape::mesh(mesh));
    let outline: Vec<Pos2> = points.iter().map(|p| p.vertex).collect();
    painter.add(Shape::closed_line(outline, Stroke::new(2.0, rgba(212, 163, 115, 0.8))));

    for (p, axis) in points.iter().zip(&SEGMENT_PROFILE) {
        painter.circle(p.vertex, 6.0, CLAY, Stroke::new(2.0, Color32::from_rgb(10, 10, 10)));
        painter.text(
            p.label_pos,
            Align2::CENTER_CENTER,
            axis.label,
            FontId::proportional(11.0),
            rgba(255, 255, 255, 0.8),
        );
        painter.text(
            p.label_pos + Vec2::new(0.0, 14.0),
            Align2::CENTER_CENTER,
            format!("{}%", axis.percent()),
            FontId::proportional(10.0),
            rgba(212, 163, 115, 0.7),
        );
    }
}

fn draw_waveform(ui: &mut egui::Ui, kind: WaveKind, heights: &[f32; BAR_COUNT]) {
    let width = BAR_COUNT as f32 * (BAR_WIDTH + BAR_GAP) - BAR_GAP;
    let (response, painter) = ui.allocate_painter(Vec2::new(width, WAVE_HEIGHT), Sense::hover());
    let rect = response.rect;
    for (i, &h) in heights.iter().enumerate() {
        let x = rect.left() + i as f32 * (BAR_WIDTH + BAR_GAP);
        let bar = Rect::from_min_max(
            Pos2::new(x, rect.bottom() - h * WAVE_HEIGHT),
            Pos2::new(x + BAR_WIDTH, rect.bottom()),
        );
        painter.rect_filled(bar, BAR_WIDTH * 0.5, kind.bar_color(h));
    }
}

// ── Building blocks ────────────────────────────────────────────────

/// Translucent rounded card.
fn card<R>(ui: &mut egui::Ui, add: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::none()
        .fill(rgba(255, 255, 255, 0.03))
        .stroke(Stroke::new(1.0, rgba(255, 255, 255, 0.08)))
        .rounding(Rounding::same(16.0))
        .inner_margin(Margin::same(20.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add(ui)
        })
        .inner
}

/// Small uppercase section label.
fn eyebrow(ui: &mut egui::Ui, text: &str, color: Color32) {
    ui.label(RichText::new(text.to_uppercase()).size(11.0).color(color));
}

fn lead(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).size(17.0).color(BODY));
}

fn numbered_row(ui: &mut egui::Ui, item: &Card, num_size: f32) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(item.num).font(FontId::monospace(num_size)).color(with_alpha(AMBER_DIM, 0.4)));
        ui.add_space(12.0);
        ui.vertical(|ui| {
            ui.label(RichText::new(item.title).strong().color(Color32::WHITE));
            ui.label(RichText::new(item.desc).size(13.0).color(MUTED));
        });
    });
}

fn bullet_box(ui: &mut egui::Ui, heading: &str, items: &[&str], accent: Color32) {
    egui::Frame::none()
        .fill(with_alpha(accent, 0.06))
        .stroke(Stroke::new(1.0, with_alpha(accent, 0.2)))
        .rounding(Rounding::same(12.0))
        .inner_margin(Margin::same(16.0))
        .show(ui, |ui| {
            ui.label(RichText::new(heading).strong().color(accent));
            for item in items {
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new("—").color(with_alpha(accent, 0.6)));
                    ui.label(RichText::new(*item).size(13.0).color(MUTED));
                });
            }
        });
}

/// Amber-ruled quotation with a muted note underneath.
fn quote_block(ui: &mut egui::Ui, heading: Option<&str>, quote: &str, note: &str) {
    let inner = egui::Frame::none()
        .fill(rgba(120, 53, 15, 0.15))
        .inner_margin(Margin { left: 24.0, right: 24.0, top: 20.0, bottom: 20.0 })
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            if let Some(h) = heading {
                eyebrow(ui, h, AMBER_DIM);
            }
            ui.label(RichText::new(quote).font(serif(18.0)).italics().color(Color32::from_rgb(254, 243, 199)));
            ui.label(RichText::new(note).size(13.0).color(FAINT));
        });
    let rect = inner.response.rect;
    ui.painter().line_segment(
        [rect.left_top(), rect.left_bottom()],
        Stroke::new(2.0, AMBER_DIM),
    );
}

fn score_header(ui: &mut egui::Ui, name: &str, score: u8, color: Color32) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(name).strong().color(Color32::WHITE));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(format!("{}%", score)).font(FontId::monospace(13.0)).color(color));
        });
    });
}

/// Full-width track with a `fill` fraction painted in `color`.
fn score_bar(ui: &mut egui::Ui, fill: f32, color: Color32, height: f32) {
    let (rect, _) = ui.allocate_exact_size(Vec2::new(ui.available_width(), height), Sense::hover());
    let r = height * 0.5;
    ui.painter().rect_filled(rect, r, rgba(255, 255, 255, 0.05));
    if fill > 0.0 {
        let filled = Rect::from_min_size(rect.min, Vec2::new(rect.width() * fill.clamp(0.0, 1.0), height));
        ui.painter().rect_filled(filled, r, color);
    }
}

fn swatch(ui: &mut egui::Ui, color: Color32, size: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
    ui.painter().rect(rect, size * 0.2, color, Stroke::new(1.0, rgba(255, 255, 255, 0.1)));
    response
}
