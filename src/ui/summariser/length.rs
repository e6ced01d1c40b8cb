//! Allowed summary lengths per variant.

/// Which `max_sentences` values the length control may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthPolicy {
    /// A fixed ascending set of choices.
    Choices(&'static [u32]),
    /// Any integer in `min..=max`.
    Range { min: u32, max: u32 },
}

impl LengthPolicy {
    pub fn allows(&self, length: u32) -> bool {
        match *self {
            LengthPolicy::Choices(choices) => choices.contains(&length),
            LengthPolicy::Range { min, max } => (min..=max).contains(&length),
        }
    }

    /// Nearest allowed value. Ties go to the shorter choice.
    pub fn snap(&self, length: u32) -> u32 {
        match *self {
            LengthPolicy::Choices(choices) => choices
                .iter()
                .copied()
                .min_by_key(|choice| (choice.abs_diff(length), *choice))
                .unwrap_or(length),
            LengthPolicy::Range { min, max } => length.clamp(min, max),
        }
    }

    /// Next value in the given direction, stopping at either end.
    pub fn step(&self, current: u32, longer: bool) -> u32 {
        match *self {
            LengthPolicy::Choices(choices) => {
                let current = self.snap(current);
                let index = choices.iter().position(|c| *c == current).unwrap_or(0);
                let next = if longer {
                    (index + 1).min(choices.len().saturating_sub(1))
                } else {
                    index.saturating_sub(1)
                };
                choices.get(next).copied().unwrap_or(current)
            }
            LengthPolicy::Range { min, max } => {
                let next = if longer {
                    current.saturating_add(1)
                } else {
                    current.saturating_sub(1)
                };
                next.clamp(min, max)
            }
        }
    }

    /// Human-readable label for a length.
    pub fn label(&self, length: u32) -> String {
        match self {
            LengthPolicy::Choices(_) => match length {
                3 => "Ultra short (~3 sentences)".to_string(),
                5 => "Short (~5 sentences)".to_string(),
                8 => "Medium (~8 sentences)".to_string(),
                12 => "Detailed (~12 sentences)".to_string(),
                n => format!("~{} sentences", n),
            },
            LengthPolicy::Range { .. } if length == 1 => "1 sentence".to_string(),
            LengthPolicy::Range { .. } => format!("{} sentences", length),
        }
    }

    /// Short description of the allowed values, for error messages.
    pub fn describe(&self) -> String {
        match self {
            LengthPolicy::Choices(choices) => choices
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(", "),
            LengthPolicy::Range { min, max } => format!("{}..={}", min, max),
        }
    }
}
