/// Placement of the emphasized horizontal reference line in the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReferenceLine {
    /// Reference at half the canvas height.
    Center,
    /// Reference at the bottom edge.
    Bottom,
    /// Reference at an explicit fraction of the canvas height (0.0 = top).
    Fraction(f32),
}

impl ReferenceLine {
    pub const fn fraction(self) -> f32 {
        match self {
            Self::Center => 0.5,
            Self::Bottom => 1.0,
            Self::Fraction(f) => f,
        }
    }
}

/// MML waveform selector (`@n` / `@n-m` codes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    SineHalfRectified,
    SineFullRectified,
    Saw,
    SawFromZero,
    Triangle,
    TriangleFromZero,
    Pulse,
    WhiteNoise,
    FcPulse,
    FcTriangle,
    FcNoise,
    FcShortNoise,
    FcDpcm,
    GbWaveMemory,
    GbNoise,
    GbShortNoise,
    WaveMemory,
    Fm,
}

impl Waveform {
    pub const ALL: [Self; 19] = [
        Self::Sine,
        Self::SineHalfRectified,
        Self::SineFullRectified,
        Self::Saw,
        Self::SawFromZero,
        Self::Triangle,
        Self::TriangleFromZero,
        Self::Pulse,
        Self::WhiteNoise,
        Self::FcPulse,
        Self::FcTriangle,
        Self::FcNoise,
        Self::FcShortNoise,
        Self::FcDpcm,
        Self::GbWaveMemory,
        Self::GbNoise,
        Self::GbShortNoise,
        Self::WaveMemory,
        Self::Fm,
    ];

    /// The MML code as written in a tone definition.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Sine => "@0",
            Self::SineHalfRectified => "@0-1",
            Self::SineFullRectified => "@0-2",
            Self::Saw => "@1",
            Self::SawFromZero => "@1-1",
            Self::Triangle => "@2",
            Self::TriangleFromZero => "@2-1",
            Self::Pulse => "@3",
            Self::WhiteNoise => "@4",
            Self::FcPulse => "@5",
            Self::FcTriangle => "@6",
            Self::FcNoise => "@7",
            Self::FcShortNoise => "@8",
            Self::FcDpcm => "@9",
            Self::GbWaveMemory => "@10",
            Self::GbNoise => "@11",
            Self::GbShortNoise => "@12",
            Self::WaveMemory => "@13",
            Self::Fm => "@14",
        }
    }

    /// Human-readable label shown in the waveform selector.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sine => "@0 sine",
            Self::SineHalfRectified => "@0-1 half-rectified sine",
            Self::SineFullRectified => "@0-2 full-rectified sine",
            Self::Saw => "@1 sawtooth",
            Self::SawFromZero => "@1-1 sawtooth (from zero)",
            Self::Triangle => "@2 triangle",
            Self::TriangleFromZero => "@2-1 triangle (from zero)",
            Self::Pulse => "@3 pulse",
            Self::WhiteNoise => "@4 white noise",
            Self::FcPulse => "@5 FC pulse",
            Self::FcTriangle => "@6 FC triangle",
            Self::FcNoise => "@7 FC noise",
            Self::FcShortNoise => "@8 FC short noise",
            Self::FcDpcm => "@9 FC DPCM",
            Self::GbWaveMemory => "@10 GB wave memory",
            Self::GbNoise => "@11 GB noise",
            Self::GbShortNoise => "@12 GB short noise",
            Self::WaveMemory => "@13 wave memory",
            Self::Fm => "@14 FM",
        }
    }
}
