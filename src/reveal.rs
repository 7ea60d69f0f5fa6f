use std::collections::BTreeSet;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    pub threshold: f64,
    pub stagger: Duration,
}

pub const PROJECT_REVEAL: RevealConfig = RevealConfig {
    threshold: 0.2,
    stagger: Duration::from_millis(200),
};

pub const SKILL_REVEAL: RevealConfig = RevealConfig {
    threshold: 0.3,
    stagger: Duration::from_millis(150),
};

impl RevealConfig {
    // browsers can report a ratio a hair under the threshold just crossed
    pub fn admits(&self, is_intersecting: bool, ratio: f64) -> bool {
        is_intersecting && ratio + RATIO_SLACK >= self.threshold
    }
}

const RATIO_SLACK: f64 = 0.005;

// per line inside a skill card
pub const SKILL_LINE_STAGGER: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEvent {
    Entered { generation: Generation, position: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealTracker {
    generation: Generation,
    visible: BTreeSet<usize>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn remount(&mut self) -> Generation {
        self.generation = Generation(self.generation.0 + 1);
        self.visible.clear();
        self.generation
    }

    pub fn apply(&mut self, event: RevealEvent) -> bool {
        match event {
            RevealEvent::Entered {
                generation,
                position,
            } => {
                if generation != self.generation {
                    return false;
                }
                self.visible.insert(position)
            }
        }
    }

    pub fn is_revealed(&self, position: usize) -> bool {
        self.visible.contains(&position)
    }

    pub fn revealed(&self) -> impl Iterator<Item = usize> + '_ {
        self.visible.iter().copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

impl RevealState {
    pub fn of(tracker: &RevealTracker, position: usize) -> Self {
        if tracker.is_revealed(position) {
            RevealState::Revealed
        } else {
            RevealState::Pending
        }
    }

    pub fn card_class(&self) -> &'static str {
        match self {
            RevealState::Pending => "opacity-0 translate-y-8",
            RevealState::Revealed => "animate-fade-in",
        }
    }

    // lines slide in sideways
    pub fn line_class(&self) -> &'static str {
        match self {
            RevealState::Pending => "translate-x-4 opacity-0",
            RevealState::Revealed => "translate-x-0 opacity-100",
        }
    }
}

/// Positions past the end are clamped to the last slot.
pub fn stagger_delay(position: usize, total: usize, step: Duration) -> Duration {
    let slot = position.min(total.saturating_sub(1));
    step * slot as u32
}

pub fn delay_ms(delay: Duration) -> String {
    format!("{}ms", delay.as_millis())
}
