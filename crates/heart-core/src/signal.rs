//! Contract between the page's step flow and the celebration effect.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Intro,
    Envelope,
    Letter,
    Success,
    Rejected,
}

impl Step {
    /// Parse the page's step names ("intro", "envelope", ...), case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "intro" => Some(Self::Intro),
            "envelope" => Some(Self::Envelope),
            "letter" => Some(Self::Letter),
            "success" => Some(Self::Success),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    Activate,
    Deactivate,
}

/// The signal (if any) a step change sends to the celebration effect.
pub fn signal_for(from: Step, to: Step) -> Option<Signal> {
    match (from == Step::Success, to == Step::Success) {
        (false, true) => Some(Signal::Activate),
        (true, false) => Some(Signal::Deactivate),
        _ => None,
    }
}
