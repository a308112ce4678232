//! Static copy for the five topic panels.

use egui::Color32;

use crate::render::palette::{CLAY, COPPER, DEEP_FOREST, GREEN_NIGHT, LINEN, MOSS, RIPE_OLIVE};

/// Numbered card: `01  Title / description`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Card {
    pub num: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

/// A bold figure over a small caption.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Figure {
    pub value: &'static str,
    pub caption: &'static str,
    pub color: Color32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    pub color: Color32,
    pub name: &'static str,
    pub usage: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrammarItem {
    pub num: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub swatches: [Color32; 2],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motif {
    pub num: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub desc: &'static str,
}

// ── Cliente ──────────────────────────────────────────────────────

pub const CLIENTE_INTRO: &str = "El público principal de Cerca está formado por adultos urbanos \
de entre 30 y 50 años, residentes en capitales de provincia o áreas metropolitanas españolas. \
No buscan aventura extrema ni escapismo barato: buscan permiso para desconectar.";

pub const RADAR_HEADING: &str = "Perfil Psicográfico del Segmento";
pub const TRAITS_HEADING: &str = "Características del Segmento \"Urbano Saturado\"";

pub const SEGMENT_TRAITS: [Card; 4] = [
    Card {
        num: "01",
        title: "Pobreza de tiempo",
        desc: "Vidas aceleradas y agendas saturadas. Dificultad crónica para planificar viajes \
largos que requieren días de organización.",
    },
    Card {
        num: "02",
        title: "Fatiga digital",
        desc: "Uso intensivo del entorno digital para informarse e inspirarse, pero creciente \
necesidad de experiencias táctiles y offline.",
    },
    Card {
        num: "03",
        title: "Consumo consciente",
        desc: "Interés creciente por el bienestar, la naturaleza, la cultura local y el consumo \
responsable de producto local.",
    },
    Card {
        num: "04",
        title: "Desconfianza hacia lo artificial",
        desc: "Alta exigencia emocional y rechazo activo hacia discursos turísticos vacíos o \
institucionales. Buscan autenticidad verificable.",
    },
];

pub const DILEMMA_HEADING: &str = "El Dilema del Gran Viaje";
pub const STOPPERS_HEADING: &str = "Stoppers del Gran Viaje";
pub const STOPPERS: [&str; 5] = [
    "Falta de tiempo para planificar",
    "Coste económico elevado",
    "Energía que consume la logística",
    "Impacto ambiental del desplazamiento",
    "Culpa por \"no ser un viaje de verdad\"",
];
pub const SOLUTION_HEADING: &str = "Solución CERCA";
pub const SOLUTION: [&str; 5] = [
    "Permiso emocional para desconectar",
    "Cercanía como ventaja, no limitación",
    "Logística mínima: 40-90 minutos",
    "Bajo impacto, alta recompensa emocional",
    "Autenticidad verificable y cercana",
];

pub const INSIGHT_HEADING: &str = "Insight Estratégico Central";
pub const INSIGHT: &str = "\"Necesitamos desconectar, pero cada vez cuesta más justificar el \
tiempo, el dinero, la energía y el impacto que exige un gran viaje.\"";
pub const INSIGHT_NOTE: &str = "Este insight explica por qué muchas personas desean viajar pero \
se encuentran ante dilemas que postergan constantemente la decisión. El turismo de proximidad \
aparece como solución funcional, pero aún no como solución emocional.";

pub const OPPORTUNITY_HEADING: &str = "Oportunidad Estratégica";
pub const OPPORTUNITY: &str = "Convertir la cercanía en un activo de calidad de vida. Menos \
tiempo desplazándote = más tiempo siendo. El turismo cercano no es el \"plan B\": es la \
decisión inteligente.";

// ── Recursos ─────────────────────────────────────────────────────

pub const RECURSOS_INTRO: &str = "La paleta sensorial de CERCA huye de la postal saturada y la \
épica turística. Buscamos la estética de la intimidad: imperfección honesta, texturas táctiles, \
ritmo pausado.";

pub const SOUND_HEADING: &str = "El Silencio como Recurso: Comparativa de Ritmo Sonoro";
pub const SOUND_NOTE: &str = "El silencio es un lujo. ASMR natural: viento en árboles, agua \
corriendo, fuego crepitando.";

pub const GRAMMAR_HEADING: &str = "Gramática Visual";
pub const VISUAL_GRAMMAR: [GrammarItem; 3] = [
    GrammarItem {
        num: "I",
        title: "Golden Hour",
        desc: "Luz natural cálida. Primeros planos que sugieren tacto. Encuadres íntimos, no \
panorámicas épicas.",
        swatches: [CLAY, Color32::from_rgb(245, 222, 179)],
    },
    GrammarItem {
        num: "II",
        title: "Texturas Táctiles",
        desc: "Piedra, madera, lino, barro. Materiales que invitan al contacto. Imperfección \
como valor.",
        swatches: [Color32::from_rgb(139, 115, 85), Color32::from_rgb(160, 147, 125)],
    },
    GrammarItem {
        num: "III",
        title: "Verde Cercano",
        desc: "Bosques, ríos, viñedos a menos de 90 minutos. Naturaleza accesible, no exótica.",
        swatches: [MOSS, Color32::from_rgb(61, 90, 74)],
    },
];

pub const PALETTE_HEADING: &str = "Paleta Cromática Completa";
pub const BRAND_PALETTE: [Swatch; 7] = [
    Swatch { color: DEEP_FOREST, name: "Bosque Profundo", usage: "Fondos, calma" },
    Swatch { color: MOSS, name: "Verde Musgo", usage: "Acentos naturales" },
    Swatch { color: CLAY, name: "Arcilla Cálida", usage: "CTAs, destacados" },
    Swatch { color: COPPER, name: "Cobre Oxidado", usage: "Énfasis secundario" },
    Swatch { color: RIPE_OLIVE, name: "Olivo Maduro", usage: "Textos sobre claro" },
    Swatch { color: LINEN, name: "Lino Natural", usage: "Fondos claros" },
    Swatch { color: GREEN_NIGHT, name: "Noche Verde", usage: "Textos, contraste" },
];

// ── Narrativa ────────────────────────────────────────────────────

pub const CLAIM: &str = "\"No hace falta ir lejos para sentir que te has ido\"";
pub const CLAIM_NOTE: &str = "Este mensaje activa el insight estratégico y posiciona la \
proximidad como solución emocional, no como limitación. No vendemos destinos: acercamos \
sensaciones.";

pub const VALUE_HEADING: &str = "Propuesta de Valor Diferencial";
pub const VALUE_LEAD: &str = "Cerca vende permiso para desconectar sin culpa.";
pub const VALUE_BODY: &str = "Transforma la cercanía en ventaja emocional: escapar no requiere \
distancia, sino cambio de mirada y permiso emocional genuino.";

pub const TONE_HEADING: &str = "Arquitectura del Tono de Voz";

pub const ANTI_HEADING: &str = "Lo que NO somos (Anti-territorio)";
pub const ANTI_TERRITORY: [&str; 8] = [
    "Épica turística institucional",
    "Listas de pueblos y rutas sin alma",
    "Ofertas y descuentos agresivos",
    "Lenguaje de folleto de ayuntamiento",
    "Promesas de \"experiencias únicas\"",
    "Stock photos de sonrisas forzadas",
    "Discurso de sostenibilidad vacío",
    "Tono de campaña gubernamental",
];

// ── Viabilidad ───────────────────────────────────────────────────

pub const VIABILIDAD_INTRO: &str = "Modelo Asset Light: curamos, no construimos. Alta viabilidad \
basada en la economía local ya activa. No creamos infraestructura: seleccionamos y narramos lo \
que ya existe.";

pub const REALISM_HEADING: &str = "Realismo Operativo";
pub const OPERATIONAL_REALISM: [Figure; 3] = [
    Figure { value: "Bajo", caption: "Coste de entrada", color: CLAY },
    Figure { value: "Alto", caption: "Impacto emocional", color: MOSS },
    Figure { value: "6 meses", caption: "Horizonte validación", color: Color32::WHITE },
];
pub const REALISM_NOTE: &str = "Vendemos \"permiso para desconectar\": solución de bajo coste \
operativo pero alto retorno emocional.";

pub const MATRIX_HEADING: &str = "Matriz de Factibilidad (4 Filtros de Evaluación)";
pub const PHASES_HEADING: &str = "Fases de Implementación";

// ── Símbolos ─────────────────────────────────────────────────────

pub const SIMBOLOS_INTRO: &str = "Reemplazo de la semiótica tradicional del viaje (avión, \
maleta, pasaporte) por símbolos de proximidad que responden a la inflación, la conciencia \
medioambiental y la revalorización del producto local.";

pub const MOTIFS: [Motif; 4] = [
    Motif {
        num: "01",
        title: "El Círculo de los 90 Minutos",
        subtitle: "Territorio de felicidad",
        desc: "Representación visual del área de influencia donde cabe todo lo que necesitas. \
No es una limitación geográfica: es un mapa de posibilidades.",
    },
    Motif {
        num: "02",
        title: "La Mochila Ligera / Maleta Vacía",
        subtitle: "Libertad sin peso",
        desc: "Símbolo de viajar sin carga física ni mental. Contraposición directa al estrés de \
aeropuertos, facturación, planificación excesiva.",
    },
    Motif {
        num: "03",
        title: "Hacer Pellas (Versión Adulta)",
        subtitle: "Rebeldía contra la agenda",
        desc: "El acto de escapar sin pedir permiso. Recuperar la sensación de libertad de la \
infancia, aplicada a la vida adulta.",
    },
    Motif {
        num: "04",
        title: "La Ventana Abierta",
        subtitle: "Cambio de perspectiva",
        desc: "Metáfora de que el escape no requiere distancia física, sino apertura mental y \
permiso emocional.",
    },
];

pub const FORCES_HEADING: &str = "Justificación Global de Vigencia";
pub const FORCES_LEAD: &str = "Estos símbolos son vigentes porque responden directamente a tres \
fuerzas contemporáneas del mercado español:";
pub const MARKET_FORCES: [Card; 3] = [
    Card {
        num: "I",
        title: "Inflación",
        desc: "Búsqueda de alternativas de ocio más accesibles económicamente.",
    },
    Card {
        num: "II",
        title: "Conciencia ambiental",
        desc: "Reducción de huella de carbono sin renunciar al disfrute.",
    },
    Card {
        num: "III",
        title: "Producto local",
        desc: "Revalorización de economías cercanas y autenticidad.",
    },
];

pub const CLOSING_QUOTE: &str = "\"Estos símbolos funcionan como anclas visuales y conceptuales \
que atraviesan toda la comunicación, creando coherencia sin rigidez.\"";
pub const CLOSING_NOTE: &str = "No vendemos destinos. No vendemos experiencias. Vendemos permiso \
para ser.";
