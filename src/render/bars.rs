//! Turning magnitudes into bar heights.

const GLYPHS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Blends each frame with the one before it.
///
/// The previous frame belongs to whoever renders, one smoother per session.
#[derive(Debug, Clone)]
pub struct Smoother {
    smoothness: f64,
    previous: Option<Vec<f64>>,
}

impl Smoother {
    pub fn new(smoothness: f64) -> Self {
        Self {
            smoothness,
            previous: None,
        }
    }

    /// `m = (m + (s - 1)·prev) / s`; the result is kept as the next `prev`.
    pub fn smooth(&mut self, mut magnitudes: Vec<f64>) -> Vec<f64> {
        let s = self.smoothness;
        if let Some(prev) = self.previous.as_ref().filter(|p| p.len() == magnitudes.len()) {
            for (m, &p) in magnitudes.iter_mut().zip(prev) {
                *m = 1.0 / s * (*m + (s - 1.0) * p);
            }
        }
        self.previous = Some(magnitudes.clone());
        magnitudes
    }
}

/// Scale magnitudes so that `reference` fills `height`, clamped to
/// `[0, height - 1]`.
pub fn bar_heights(magnitudes: &[f64], reference: f64, height: f64) -> Vec<f64> {
    let top = (height - 1.0).max(0.0);
    magnitudes
        .iter()
        .map(|&m| (m / reference * height).clamp(0.0, top))
        .collect()
}

/// One block glyph per bar, eighths of `height` picking the glyph.
pub fn render_line(heights: &[f64], height: f64) -> String {
    heights
        .iter()
        .map(|&h| {
            let level = if height > 0.0 {
                (h / height * 8.0).round() as usize
            } else {
                0
            };
            GLYPHS[level.min(8)]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_passes_through() {
        let mut smoother = Smoother::new(4.0);
        assert_eq!(smoother.smooth(vec![8.0, 4.0]), vec![8.0, 4.0]);
    }

    #[test]
    fn blends_with_previous_frame() {
        let mut smoother = Smoother::new(4.0);
        smoother.smooth(vec![8.0, 4.0]);
        assert_eq!(smoother.smooth(vec![0.0, 8.0]), vec![6.0, 5.0]);
        // history is the smoothed frame, not the raw one
        assert_eq!(smoother.smooth(vec![0.0, 5.0]), vec![4.5, 5.0]);
    }

    #[test]
    fn smoothness_of_one_is_identity() {
        let mut smoother = Smoother::new(1.0);
        smoother.smooth(vec![100.0]);
        assert_eq!(smoother.smooth(vec![3.0]), vec![3.0]);
    }

    #[test]
    fn layout_change_drops_history() {
        let mut smoother = Smoother::new(2.0);
        smoother.smooth(vec![10.0, 10.0]);
        assert_eq!(smoother.smooth(vec![2.0]), vec![2.0]);
        assert_eq!(smoother.smooth(vec![4.0]), vec![3.0]);
    }

    #[test]
    fn heights_are_clamped() {
        let heights = bar_heights(&[0.0, 50.0, 500.0, -3.0], 100.0, 16.0);
        assert_eq!(heights, vec![0.0, 8.0, 15.0, 0.0]);
    }

    #[test]
    fn renders_glyph_per_bar() {
        let line = render_line(&[0.0, 8.0, 15.0], 16.0);
        assert_eq!(line.chars().count(), 3);
        assert_eq!(line, " ▄█");
    }
}
