//! The five deck topics and where their navigation nodes sit.

use std::f32::consts::{FRAC_PI_2, TAU};

use egui::Vec2;

/// Node distance from the center, as a fraction of half the nav square.
pub const NAV_DISTANCE: f32 = 0.70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Cliente,
    Recursos,
    Narrativa,
    Viabilidad,
    Simbolos,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::Cliente,
        Topic::Recursos,
        Topic::Narrativa,
        Topic::Viabilidad,
        Topic::Simbolos,
    ];

    pub fn index(self) -> usize {
        match self {
            Topic::Cliente => 0,
            Topic::Recursos => 1,
            Topic::Narrativa => 2,
            Topic::Viabilidad => 3,
            Topic::Simbolos => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Short node label.
    pub fn label(self) -> &'static str {
        match self {
            Topic::Cliente => "Cliente",
            Topic::Recursos => "Recursos",
            Topic::Narrativa => "Narrativa",
            Topic::Viabilidad => "Viabilidad",
            Topic::Simbolos => "Símbolos",
        }
    }

    /// Panel heading.
    pub fn title(self) -> &'static str {
        match self {
            Topic::Cliente => "El Segmento \"Urbano Saturado\"",
            Topic::Recursos => "Estética de la Intimidad",
            Topic::Narrativa => "Transmedia Storytelling",
            Topic::Viabilidad => "Asset Light & Risk Management",
            Topic::Simbolos => "Semiótica de Proximidad",
        }
    }

    /// Small caps line above the heading.
    pub fn subtitle(self) -> &'static str {
        match self {
            Topic::Cliente => "Análisis del Cliente",
            Topic::Recursos => "Recursos Expresivos",
            Topic::Narrativa => "Narrativa de Marca",
            Topic::Viabilidad => "Viabilidad y Riesgos",
            Topic::Simbolos => "Referencias Culturales",
        }
    }

    /// Node angle, clockwise from twelve o'clock in screen coordinates.
    pub fn node_angle(self) -> f32 {
        -FRAC_PI_2 + TAU * self.index() as f32 / Self::ALL.len() as f32
    }

    /// Node offset from the center of a nav square of side `side`.
    pub fn node_offset(self, side: f32) -> Vec2 {
        let (s, c) = self.node_angle().sin_cos();
        Vec2::new(c, s) * NAV_DISTANCE * side * 0.5
    }
}
