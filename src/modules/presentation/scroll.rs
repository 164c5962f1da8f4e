use std::time::Duration;

/// Viewports narrower than this are treated as mobile.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Scroll depth after which the "back to top" control is shown.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_y: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll_y: 0.0,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.width < MOBILE_BREAKPOINT
    }

    pub fn scrolled_past_threshold(&self) -> bool {
        self.scroll_y > SCROLL_TOP_THRESHOLD
    }
}

/// Vertical extent of a section in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Which edges define 0 and 1 of a section's scroll progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOffset {
    /// 0 when the section top reaches the viewport top, 1 when its bottom does.
    StartStartToEndStart,
    /// 0 when the section top enters at the viewport bottom, 1 when its bottom
    /// leaves at the viewport top.
    StartEndToEndStart,
}

impl ScrollOffset {
    /// Progress in `[0, 1]` for the current scroll position.
    pub fn progress(self, bounds: SectionBounds, viewport: &Viewport) -> f64 {
        let start = match self {
            ScrollOffset::StartStartToEndStart => bounds.top,
            ScrollOffset::StartEndToEndStart => bounds.top - viewport.height,
        };
        let end = bounds.bottom();

        if end <= start {
            return if viewport.scroll_y >= end { 1.0 } else { 0.0 };
        }

        ((viewport.scroll_y - start) / (end - start)).clamp(0.0, 1.0)
    }
}

/// Eased scroll positions from `from` back to the top, one per frame.
/// The final position is exactly `0.0`.
#[derive(Debug, Clone)]
pub struct ScrollToTopAnimation {
    from: f64,
    frame: u32,
    frames: u32,
}

impl ScrollToTopAnimation {
    pub const DURATION: Duration = Duration::from_millis(500);
    pub const FRAME: Duration = Duration::from_millis(16);

    pub fn new(from: f64) -> Self {
        Self::with_timing(from, Self::DURATION, Self::FRAME)
    }

    pub fn with_timing(from: f64, duration: Duration, frame: Duration) -> Self {
        let frames = if frame.is_zero() {
            1
        } else {
            (duration.as_secs_f64() / frame.as_secs_f64()).ceil().max(1.0) as u32
        };

        Self {
            from: from.max(0.0),
            frame: 0,
            frames,
        }
    }
}

impl Iterator for ScrollToTopAnimation {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.frame >= self.frames || (self.from == 0.0 && self.frame > 0) {
            return None;
        }
        self.frame += 1;

        let t = f64::from(self.frame) / f64::from(self.frames);
        Some(self.from * (1.0 - ease_in_out(t)))
    }
}

fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
