//! Street grid of the inner "city" disc.

/// Signed street offsets from the disc center, in pixels.
///
/// Both sequences are ordered ascending and hold identical values; they are
/// kept apart so each axis can be walked independently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StreetGrid {
    pub horizontal: Vec<f32>,
    pub vertical: Vec<f32>,
}

impl StreetGrid {
    /// Lay streets every `spacing` pixels, keeping `|offset| < clip * radius`.
    pub fn generate(radius: f32, spacing: f32, clip: f32) -> Self {
        let mut grid = Self::default();
        if spacing <= 0.0 || radius <= 0.0 {
            return grid;
        }
        let n = (radius / spacing).floor() as i32;
        let limit = radius * clip;
        for i in -n..=n {
            let pos = i as f32 * spacing;
            if pos.abs() < limit {
                grid.horizontal.push(pos);
                grid.vertical.push(pos);
            }
        }
        grid
    }

    pub fn is_empty(&self) -> bool {
        self.horizontal.is_empty() && self.vertical.is_empty()
    }

    pub fn len(&self) -> usize {
        self.horizontal.len() + self.vertical.len()
    }
}

/// Half-length of the chord at `offset` from the center of a circle.
#[inline]
pub fn chord_half_length(radius: f32, offset: f32) -> f32 {
    (radius * radius - offset * offset).max(0.0).sqrt()
}
