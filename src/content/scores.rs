//! Scored items: feasibility criteria, tone of voice, rollout phases.

use egui::Color32;

use crate::render::palette::{CLAY, COPPER, MOSS, OLIVE_SAGE};

/// Feasibility filter with a 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Criterion {
    pub name: &'static str,
    pub score: u8,
    pub question: &'static str,
    pub color: Color32,
}

impl Criterion {
    /// Score shown after `progress` of the reveal, rounded like the label.
    pub fn shown_score(&self, progress: f32) -> u8 {
        (self.score as f32 * progress.clamp(0.0, 1.0)).round() as u8
    }

    /// Bar fill in `[0, 1]` for `progress` of the reveal.
    pub fn fill(&self, progress: f32) -> f32 {
        self.score as f32 / 100.0 * progress.clamp(0.0, 1.0)
    }
}

pub const FEASIBILITY: [Criterion; 4] = [
    Criterion {
        name: "Coherencia",
        score: 92,
        question: "¿Mantiene relación con el posicionamiento de la cercanía como ventaja emocional?",
        color: CLAY,
    },
    Criterion {
        name: "Pertinencia",
        score: 88,
        question: "¿Conecta con las motivaciones reales del público urbano saturado? ¿Responde \
al insight?",
        color: MOSS,
    },
    Criterion {
        name: "Claridad",
        score: 95,
        question: "¿Puede explicarse en una frase sin perder fuerza?",
        color: COPPER,
    },
    Criterion {
        name: "Viabilidad",
        score: 85,
        question: "¿Es ejecutable con los recursos, plazos y presupuesto disponibles?",
        color: OLIVE_SAGE,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneTrait {
    pub name: &'static str,
    pub value: u8,
    pub desc: &'static str,
}

pub const TONE_OF_VOICE: [ToneTrait; 4] = [
    ToneTrait {
        name: "Honesto",
        value: 95,
        desc: "Sin artificios ni promesas vacías. Contamos lo que hay de verdad.",
    },
    ToneTrait {
        name: "Cálido",
        value: 90,
        desc: "Como quien comparte un secreto con un amigo cercano.",
    },
    ToneTrait {
        name: "Cómplice",
        value: 85,
        desc: "Entendemos tu situación. Estamos de tu lado.",
    },
    ToneTrait {
        name: "Curador",
        value: 80,
        desc: "Seleccionamos, no enumeramos. Calidad sobre cantidad.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseStatus {
    Active,
    Next,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phase {
    pub num: &'static str,
    pub name: &'static str,
    pub desc: &'static str,
    pub detail: &'static str,
    pub status: PhaseStatus,
}

pub const PHASES: [Phase; 4] = [
    Phase {
        num: "01",
        name: "Soft Launch",
        desc: "Despliegue en una provincia para validar métricas base y ajustar mensaje.",
        detail: "Test con muestra de usuarios antes de producción.",
        status: PhaseStatus::Active,
    },
    Phase {
        num: "02",
        name: "Iteración",
        desc: "Ajuste basado en feedback real. Refinamiento del tono y canales.",
        detail: "Validación cruzada entre equipo creativo, planificación y stakeholders.",
        status: PhaseStatus::Next,
    },
    Phase {
        num: "03",
        name: "Pruebas A/B",
        desc: "Optimización de mensajes y canales en fase de lanzamiento.",
        detail: "Iteración basada en comportamiento real de usuarios.",
        status: PhaseStatus::Pending,
    },
    Phase {
        num: "04",
        name: "Escalado",
        desc: "Expansión nacional tras validación de modelo en mercado piloto.",
        detail: "Replicación del modelo probado a otras provincias.",
        status: PhaseStatus::Pending,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feasibility_scores() {
        let scores: Vec<_> = FEASIBILITY.iter().map(|c| (c.name, c.score)).collect();
        assert_eq!(
            scores,
            [("Coherencia", 92), ("Pertinencia", 88), ("Claridad", 95), ("Viabilidad", 85)]
        );
    }

    #[test]
    fn criterion_reveal_scales_score() {
        let c = FEASIBILITY[0];
        assert_eq!(c.shown_score(0.0), 0);
        assert_eq!(c.shown_score(0.5), 46);
        assert_eq!(c.shown_score(1.0), 92);
        assert_eq!(c.shown_score(3.0), 92);
        assert!((c.fill(1.0) - 0.92).abs() < 1e-6);
        assert_eq!(c.fill(-1.0), 0.0);
    }

    #[test]
    fn exactly_one_active_phase() {
        let active = PHASES.iter().filter(|p| p.status == PhaseStatus::Active).count();
        assert_eq!(active, 1);
        assert_eq!(PHASES[0].name, "Soft Launch");
        assert_eq!(PHASES[1].status, PhaseStatus::Next);
    }

    #[test]
    fn tone_traits_descend() {
        let values: Vec<_> = TONE_OF_VOICE.iter().map(|t| t.value).collect();
        assert_eq!(values, [95, 90, 85, 80]);
    }
}
