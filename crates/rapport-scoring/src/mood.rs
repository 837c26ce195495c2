use rapport_core::config::MoodThresholds;
use rapport_core::models::MoodLabel;

/// Maps a mood score onto the four label bands.
///
/// ```text
///  [0, 20)   Distant
///  [20, 50)  Neutral
///  [50, 80)  Happy
///  [80, 100] Attached
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodClassifier {
    thresholds: MoodThresholds,
}

impl MoodClassifier {
    pub fn new(thresholds: MoodThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> MoodThresholds {
        self.thresholds
    }

    /// Total over all f64 input: anything below the neutral band is Distant.
    pub fn label(&self, score: f64) -> MoodLabel {
        let t = &self.thresholds;
        if score >= t.attached_from {
            MoodLabel::Attached
        } else if score >= t.happy_from {
            MoodLabel::Happy
        } else if score >= t.neutral_from {
            MoodLabel::Neutral
        } else {
            MoodLabel::Distant
        }
    }
}

impl Default for MoodClassifier {
    fn default() -> Self {
        Self::new(MoodThresholds::default())
    }
}
