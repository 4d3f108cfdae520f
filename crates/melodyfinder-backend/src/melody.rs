//! Melody generator.
//!
//! Picks a supported key, builds its scale and walks a random path over the
//! scale degrees, rendering the result as an ABC document:
//!
//! ```text
//! X:1
//! Q:100
//! T:Random Melody
//! M:4/4
//! K:F#m
//! F2 G A2 E ... ||
//! ```

use melodyfinder_theory::{try_scale, Scale, SUPPORTED_KEYS};
use rand::Rng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::config::MelodyConfig;
use crate::rng::pick_index;

/// ABC reference-number line opening every document.
pub const FORMAT_VERSION: &str = "X:1";

/// Marker closing the note body.
pub const CLOSING_BAR: &str = "||";

/// Note length relative to the default unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Duration {
    Doubled,
    Unmodified,
}

impl Duration {
    /// Durations drawn for each note, uniformly.
    pub const CHOICES: [Duration; 2] = [Duration::Doubled, Duration::Unmodified];

    /// ABC length suffix.
    pub fn suffix(self) -> &'static str {
        match self {
            Duration::Doubled => "2",
            Duration::Unmodified => "",
        }
    }
}

/// One generated note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MelodyNote {
    /// Scale degree (0-based index into the scale).
    pub degree: usize,
    pub pitch: &'static str,
    pub duration: Duration,
}

/// A generated melody with its header metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Melody {
    pub tempo: u32,
    pub title: String,
    pub meter: String,
    pub scale: Scale,
    pub bars: Vec<Vec<MelodyNote>>,
}

impl Melody {
    /// Key name as written on the `K:` line.
    pub fn header_key(&self) -> String {
        self.scale.key.header_name()
    }

    /// Header lines in document order.
    pub fn header_lines(&self) -> [String; 5] {
        [
            FORMAT_VERSION.to_string(),
            format!("Q:{}", self.tempo),
            format!("T:{}", self.title),
            format!("M:{}", self.meter),
            format!("K:{}", self.header_key()),
        ]
    }

    /// All notes in play order.
    pub fn notes(&self) -> impl Iterator<Item = &MelodyNote> {
        self.bars.iter().flatten()
    }

    /// Renders the complete ABC document.
    pub fn to_abc(&self) -> String {
        let mut abc = String::new();
        for line in self.header_lines() {
            abc.push_str(&line);
            abc.push('\n');
        }
        for note in self.notes() {
            abc.push_str(note.pitch);
            abc.push_str(note.duration.suffix());
            abc.push(' ');
        }
        abc.push_str(CLOSING_BAR);
        abc.trim().to_string()
    }
}

/// Generates a melody in a key drawn uniformly from [`SUPPORTED_KEYS`].
pub fn generate_melody(rng: &mut Pcg32, config: &MelodyConfig) -> Option<Melody> {
    let key = SUPPORTED_KEYS[pick_index(rng, SUPPORTED_KEYS.len())];
    generate_melody_in_key(rng, key, config)
}

/// Generates a melody in the given key token.
///
/// Returns `None` when the key has no scale.
pub fn generate_melody_in_key(
    rng: &mut Pcg32,
    key: &str,
    config: &MelodyConfig,
) -> Option<Melody> {
    let scale = try_scale(key).ok()?;
    let top = scale.len().checked_sub(1)? as i64;
    let max_step = config.max_step as i64;

    let mut degree: i64 = 0;
    let mut bars = Vec::with_capacity(config.bars);
    for _ in 0..config.bars {
        let mut bar = Vec::with_capacity(config.notes_per_bar);
        for _ in 0..config.notes_per_bar {
            let step = rng.gen_range(-max_step..=max_step);
            degree = (degree + step).clamp(0, top);
            let pitch = scale.get(degree as usize)?;
            let duration = Duration::CHOICES[pick_index(rng, Duration::CHOICES.len())];
            bar.push(MelodyNote {
                degree: degree as usize,
                pitch,
                duration,
            });
        }
        bars.push(bar);
    }

    Some(Melody {
        tempo: config.tempo,
        title: config.title.clone(),
        meter: config.meter.clone(),
        scale,
        bars,
    })
}

/// Generates a melody and renders it, or returns an empty string on failure.
pub fn generate_melody_abc(rng: &mut Pcg32, config: &MelodyConfig) -> String {
    render_or_empty(generate_melody(rng, config))
}

/// Generates a melody in the given key and renders it.
///
/// An unknown key renders as an empty string.
pub fn generate_melody_abc_in_key(rng: &mut Pcg32, key: &str, config: &MelodyConfig) -> String {
    render_or_empty(generate_melody_in_key(rng, key, config))
}

pub(crate) fn render_or_empty(melody: Option<Melody>) -> String {
    melody.map(|melody| melody.to_abc()).unwrap_or_default()
}
