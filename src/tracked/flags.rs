use bitflags::bitflags;

bitflags! {
    /// Boundary state of a tracked element, derived from its progress
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct BoundaryFlags: u8 {
        /// Progress has moved past the start threshold
        const STARTED = 0b001;
        /// Started and not yet ended
        const ACTIVE  = 0b010;
        /// Progress has reached the end threshold
        const ENDED   = 0b100;
    }
}

impl BoundaryFlags {
    /// Derive the flags for progress `t` with hysteresis margin `threshold`
    pub fn from_progress(t: f32, threshold: f32) -> Self {
        let mut flags = BoundaryFlags::empty();
        let started = t > threshold;
        let ended = t >= 1.0 - threshold;
        flags.set(BoundaryFlags::STARTED, started);
        flags.set(BoundaryFlags::ENDED, ended);
        flags.set(BoundaryFlags::ACTIVE, started && !ended);
        flags
    }

    pub fn is_started(&self) -> bool {
        self.contains(BoundaryFlags::STARTED)
    }

    pub fn is_active(&self) -> bool {
        self.contains(BoundaryFlags::ACTIVE)
    }

    pub fn is_ended(&self) -> bool {
        self.contains(BoundaryFlags::ENDED)
    }
}

/// Kind of a boundary transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollEventKind {
    /// Started went from false to true
    Start,
    /// Active went from false to true
    Enter,
    /// Active went from true to false
    Leave,
    /// Ended went from false to true
    End,
}

impl ScrollEventKind {
    /// Name of the notification dispatched for this transition
    pub fn name(&self) -> &'static str {
        match self {
            ScrollEventKind::Start => "start",
            ScrollEventKind::Enter => "enter",
            ScrollEventKind::Leave => "leave",
            ScrollEventKind::End => "end",
        }
    }
}

/// A boundary transition together with the progress it happened at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    pub kind: ScrollEventKind,
    pub t: f32,
}

/// Collect the edges between two consecutive flag states, in dispatch order.
///
/// There is no event for started or ended turning off.
pub fn transitions(previous: BoundaryFlags, current: BoundaryFlags, t: f32) -> Vec<ScrollEvent> {
    let mut events = Vec::new();
    let mut push = |kind| events.push(ScrollEvent { kind, t });

    if !previous.is_started() && current.is_started() {
        push(ScrollEventKind::Start);
    }
    match (previous.is_active(), current.is_active()) {
        (false, true) => push(ScrollEventKind::Enter),
        (true, false) => push(ScrollEventKind::Leave),
        _ => {}
    }
    if !previous.is_ended() && current.is_ended() {
        push(ScrollEventKind::End);
    }

    events
}
