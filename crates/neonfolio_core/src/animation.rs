//! Time-based waveforms for the cosmetic effects. Everything here is a pure
//! function of elapsed milliseconds; the frontend owns the frame clock.

/// Normalised easing curve, `[0, 1] -> [0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseInOutCubic,
    EaseOutCubic,
    EaseInOutSine,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutSine => -((std::f64::consts::PI * t).cos() - 1.0) / 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RepeatMode {
    #[default]
    Restart,
    /// Ping-pong: forward over one duration, backward over the next.
    Reverse,
}

/// Phase within `[0, period)`. Negative or non-finite time maps into range.
fn phase(elapsed_ms: f64, period_ms: f64) -> f64 {
    if !elapsed_ms.is_finite() || period_ms <= 0.0 {
        return 0.0;
    }
    elapsed_ms.rem_euclid(period_ms)
}

/// Infinitely repeating 0 -> 1 ramp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub duration_ms: f64,
    pub repeat: RepeatMode,
    pub easing: Easing,
}

impl Tween {
    pub const fn new(duration_ms: f64, repeat: RepeatMode, easing: Easing) -> Self {
        Self {
            duration_ms,
            repeat,
            easing,
        }
    }

    /// Length of one full cycle, both legs for `Reverse`.
    pub fn cycle_ms(&self) -> f64 {
        match self.repeat {
            RepeatMode::Restart => self.duration_ms,
            RepeatMode::Reverse => self.duration_ms * 2.0,
        }
    }

    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let t = phase(elapsed_ms, self.cycle_ms()) / self.duration_ms;
        let linear = match self.repeat {
            RepeatMode::Restart => t,
            RepeatMode::Reverse if t <= 1.0 => t,
            RepeatMode::Reverse => 2.0 - t,
        };
        self.easing.apply(linear)
    }

    pub fn lerp(&self, from: f64, to: f64, elapsed_ms: f64) -> f64 {
        from + (to - from) * self.progress(elapsed_ms)
    }
}

/// Piecewise-linear table over a fixed period. Before the first frame the
/// first value holds; after the last frame the last value holds until the
/// period wraps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframes {
    pub period_ms: f64,
    /// `(at_ms, value)`, sorted by time.
    pub frames: &'static [(f64, f64)],
}

impl Keyframes {
    pub const fn new(period_ms: f64, frames: &'static [(f64, f64)]) -> Self {
        Self { period_ms, frames }
    }

    pub fn sample(&self, elapsed_ms: f64) -> f64 {
        let t = phase(elapsed_ms, self.period_ms);
        sample_frames(self.frames, t)
    }
}

fn sample_frames(frames: &[(f64, f64)], t: f64) -> f64 {
    let Some(&(first_at, first_value)) = frames.first() else {
        return 0.0;
    };
    if t <= first_at {
        return first_value;
    }
    for pair in frames.windows(2) {
        let (a_at, a_value) = pair[0];
        let (b_at, b_value) = pair[1];
        if t <= b_at {
            let span = b_at - a_at;
            if span <= 0.0 {
                return b_value;
            }
            return a_value + (b_value - a_value) * (t - a_at) / span;
        }
    }
    frames.last().map_or(0.0, |&(_, value)| value)
}

/// Cursor blink: opacity ping-pongs between 0 and 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Blink {
    pub period_ms: f64,
}

impl Blink {
    pub const PERIOD_MS: f64 = 900.0;

    pub fn opacity(&self, elapsed_ms: f64) -> f64 {
        Tween::new(self.period_ms / 2.0, RepeatMode::Reverse, Easing::Linear).progress(elapsed_ms)
    }
}

impl Default for Blink {
    fn default() -> Self {
        Self {
            period_ms: Self::PERIOD_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ScanDirection {
    /// A horizontal line travelling down the element.
    #[default]
    Horizontal,
    /// A vertical line travelling across the element.
    Vertical,
}

/// Moving highlight line. `position` is the fraction along the sweep axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanSweep {
    pub direction: ScanDirection,
    pub tween: Tween,
}

impl ScanSweep {
    pub const HORIZONTAL_MS: f64 = 3000.0;
    pub const VERTICAL_MS: f64 = 9000.0;
    /// Width of the glow band trailing the line, as a fraction of the axis.
    pub const GLOW_BAND: f64 = 0.08;

    pub fn horizontal() -> Self {
        Self {
            direction: ScanDirection::Horizontal,
            tween: Tween::new(Self::HORIZONTAL_MS, RepeatMode::Restart, Easing::Linear),
        }
    }

    pub fn vertical() -> Self {
        Self {
            direction: ScanDirection::Vertical,
            tween: Tween::new(Self::VERTICAL_MS, RepeatMode::Restart, Easing::Linear),
        }
    }

    pub fn for_direction(direction: ScanDirection) -> Self {
        match direction {
            ScanDirection::Horizontal => Self::horizontal(),
            ScanDirection::Vertical => Self::vertical(),
        }
    }

    pub fn reversing(mut self) -> Self {
        self.tween.repeat = RepeatMode::Reverse;
        self
    }

    pub fn position(&self, elapsed_ms: f64) -> f64 {
        self.tween.progress(elapsed_ms)
    }

    /// `(start, end)` of the glow band behind the line, clamped to `[0, 1]`.
    pub fn glow_band(&self, elapsed_ms: f64) -> (f64, f64) {
        let pos = self.position(elapsed_ms);
        ((pos - Self::GLOW_BAND).max(0.0), pos)
    }
}

const GLITCH_OFFSET: &[(f64, f64)] = &[
    (0.0, 0.0),
    (2700.0, 0.0),
    (2750.0, 2.0),
    (2800.0, -1.0),
    (2850.0, 0.0),
    (2900.0, -2.0),
    (3000.0, 0.0),
];

const GLITCH_CHROMA: &[(f64, f64)] = &[
    (0.0, 0.0),
    (3700.0, 0.0),
    (3750.0, 1.0),
    (3800.0, -0.5),
    (3850.0, 0.0),
];

/// Burst of horizontal displacement plus a red/cyan channel split, quiet for
/// the first ~90% of each period.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlitchJitter {
    pub intensity: f64,
}

impl GlitchJitter {
    pub const OFFSET: Keyframes = Keyframes::new(3000.0, GLITCH_OFFSET);
    pub const CHROMA: Keyframes = Keyframes::new(4000.0, GLITCH_CHROMA);

    pub fn new(intensity: f64) -> Self {
        Self { intensity }
    }

    pub fn offset(&self, elapsed_ms: f64) -> f64 {
        Self::OFFSET.sample(elapsed_ms) * self.intensity
    }

    /// Signed channel split; red shifts by `+chroma`, cyan by `-chroma`.
    pub fn chroma(&self, elapsed_ms: f64) -> f64 {
        Self::CHROMA.sample(elapsed_ms) * self.intensity
    }

    pub fn is_bursting(&self, elapsed_ms: f64) -> bool {
        self.offset(elapsed_ms) != 0.0 || self.chroma(elapsed_ms) != 0.0
    }
}

impl Default for GlitchJitter {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Rapid two-axis shake, used on error states.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shake {
    pub intensity: f64,
}

impl Shake {
    pub fn offset(&self, elapsed_ms: f64) -> (f64, f64) {
        let x = Tween::new(50.0, RepeatMode::Reverse, Easing::Linear).lerp(0.0, 5.0, elapsed_ms);
        let y = Tween::new(75.0, RepeatMode::Reverse, Easing::Linear).lerp(0.0, 3.0, elapsed_ms);
        (x * self.intensity, y * self.intensity)
    }
}

const SEPARATOR_SKEW: &[(f64, f64)] = &[
    (0.0, 0.0),
    (450.0, 0.0),
    (480.0, 20.0),
    (600.0, -20.0),
    (630.0, 0.0),
    (1950.0, 0.0),
    (1980.0, 20.0),
    (2100.0, 40.0),
    (2130.0, 0.0),
];

const SEPARATOR_OFFSET: &[(f64, f64)] = &[
    (0.0, 0.0),
    (450.0, 0.0),
    (480.0, -20.0),
    (600.0, 20.0),
    (630.0, 0.0),
    (1950.0, 0.0),
    (1980.0, -5.0),
    (2100.0, 20.0),
    (2130.0, 0.0),
];

const SEPARATOR_SCALE_X: &[(f64, f64)] = &[
    (0.0, 1.0),
    (1950.0, 1.0),
    (1980.0, -1.0),
    (2100.0, -1.0),
    (2130.0, 0.0),
    (2131.0, 1.0),
];

/// Sample of the glitched separator's transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeparatorFrame {
    /// Degrees.
    pub skew_x: f64,
    pub offset_x: f64,
    pub scale_x: f64,
}

impl SeparatorFrame {
    pub fn css_transform(&self) -> String {
        format!(
            "translateX({:.2}px) skewX({:.2}deg) scaleX({:.3})",
            self.offset_x, self.skew_x, self.scale_x
        )
    }
}

/// Two bursts per 3 s period: a skew shimmy, then a mirrored flip.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SeparatorGlitch;

impl SeparatorGlitch {
    pub const PERIOD_MS: f64 = 3000.0;
    pub const SKEW: Keyframes = Keyframes::new(Self::PERIOD_MS, SEPARATOR_SKEW);
    pub const OFFSET: Keyframes = Keyframes::new(Self::PERIOD_MS, SEPARATOR_OFFSET);
    pub const SCALE_X: Keyframes = Keyframes::new(Self::PERIOD_MS, SEPARATOR_SCALE_X);

    pub fn sample(&self, elapsed_ms: f64) -> SeparatorFrame {
        SeparatorFrame {
            skew_x: Self::SKEW.sample(elapsed_ms),
            offset_x: Self::OFFSET.sample(elapsed_ms),
            scale_x: Self::SCALE_X.sample(elapsed_ms),
        }
    }
}

const LIST_FRACTIONS: [f64; 7] = [0.0, 0.1, 0.11, 0.5, 0.51, 0.59, 0.6];
const LIST_SKEW: [f64; 7] = [0.0, -3.0, 3.0, 0.0, 3.0, -3.0, 0.0];
const LIST_OFFSET: [f64; 7] = [0.0, -2.0, 2.0, 0.0, 5.0, 5.0, 0.0];

/// Per-item jitter for list entries. Items get different periods so a list
/// never twitches in lockstep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListJitter {
    pub index: usize,
}

impl ListJitter {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    pub fn period_ms(&self) -> f64 {
        let i = self.index;
        if i % 5 == 4 {
            630.0
        } else if i % 3 == 2 {
            450.0
        } else if i % 2 == 1 {
            1350.0
        } else {
            900.0
        }
    }

    pub fn should_glitch(&self) -> bool {
        let i = self.index;
        i % 5 == 4 || i % 3 == 2 || i % 2 == 1 || i == 0
    }

    fn table(&self, values: &[f64; 7], elapsed_ms: f64) -> f64 {
        if !self.should_glitch() {
            return 0.0;
        }
        let period = self.period_ms();
        let frames: Vec<(f64, f64)> = LIST_FRACTIONS
            .iter()
            .zip(values.iter())
            .map(|(&f, &v)| (f * period, v))
            .collect();
        sample_frames(&frames, phase(elapsed_ms, period))
    }

    /// Degrees.
    pub fn skew(&self, elapsed_ms: f64) -> f64 {
        self.table(&LIST_SKEW, elapsed_ms)
    }

    pub fn offset(&self, elapsed_ms: f64) -> f64 {
        self.table(&LIST_OFFSET, elapsed_ms)
    }
}

/// One-shot eased move between two values, started at a clock reading.
/// Retargeting mid-flight starts from wherever the value currently is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    from: f64,
    to: f64,
    started_at_ms: f64,
    duration_ms: f64,
    easing: Easing,
}

impl Transition {
    pub const ASIDE_MS: f64 = 300.0;
    pub const MENU_MS: f64 = 300.0;
    pub const PRESS_MS: f64 = 100.0;
    pub const CHECKBOX_MS: f64 = 200.0;
    pub const CHECKMARK_MS: f64 = 150.0;
    pub const RADIO_MS: f64 = 300.0;
    pub const PROGRESS_MS: f64 = 1000.0;

    /// Already settled at `value`.
    pub fn settled(value: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from: value,
            to: value,
            started_at_ms: 0.0,
            duration_ms,
            easing,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn value_at(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 || !now_ms.is_finite() {
            return self.to;
        }
        let t = ((now_ms - self.started_at_ms) / self.duration_ms).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        now_ms - self.started_at_ms >= self.duration_ms
    }

    /// Head towards `to` from the value sampled at `now_ms`. No-op when the
    /// target is unchanged.
    pub fn retarget(&mut self, to: f64, now_ms: f64) {
        if to == self.to {
            return;
        }
        self.from = self.value_at(now_ms);
        self.to = to;
        self.started_at_ms = now_ms;
    }
}
