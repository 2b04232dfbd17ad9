//! Emotion class table
//!
//! Index `i` of the model output is class `EMOTION_LABELS[i]`. The order is
//! fixed by the trained model and must not be changed.

use std::fmt;

pub const NUM_CLASSES: usize = 7;

pub const EMOTION_LABELS: [&str; NUM_CLASSES] =
    ["Angry", "Disgust", "Fear", "Happy", "Sad", "Surprise", "Neutral"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Emotion {
    Angry,
    Disgust,
    Fear,
    Happy,
    Sad,
    Surprise,
    Neutral,
}

impl Emotion {
    pub const ALL: [Emotion; NUM_CLASSES] = [
        Emotion::Angry,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Surprise,
        Emotion::Neutral,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position in the model output vector.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        EMOTION_LABELS[self.index()]
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
