pub const TILT_MAX_DEG: f64 = 10.0;
pub const TILT_RESET_TRANSFORM: &str =
    "perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1, 1, 1)";

pub const PARTICLE_COUNT: usize = 12;
pub const PARTICLE_BASE_DISTANCE: f64 = 100.0;
pub const PARTICLE_DISTANCE_JITTER: f64 = 30.0;
pub const PARTICLE_MIN_SIZE: f64 = 6.0;
pub const PARTICLE_SIZE_JITTER: f64 = 6.0;
pub const PARTICLE_MAX_DELAY_SECONDS: f64 = 0.2;

pub const SCRAMBLE_GLYPHS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789@#$%";
pub const SCRAMBLE_TICK_MS: u32 = 30;
pub const SCRAMBLE_STEP: f64 = 1.0 / 3.0;

pub const TAGLINE_GLITCHED: &str = "Crraaffttiinngg wwoorrllddss,, oonnee ppiixxeell aatt aa ttiimmee..";
pub const TAGLINE_APOLOGY: &str = " ...Oops, sorry for the typing mistake!";
pub const TAGLINE_FINAL: &str = "Crafting worlds, one pixel at a time.";

pub const TYPE_GLITCH_MS: u32 = 50;
pub const PAUSE_AFTER_GLITCH_MS: u32 = 1000;
pub const TYPE_APOLOGY_MS: u32 = 50;
pub const PAUSE_AFTER_APOLOGY_MS: u32 = 1500;
pub const ERASE_MS: u32 = 20;
pub const PAUSE_AFTER_ERASE_MS: u32 = 500;
pub const TYPE_FINAL_MS: u32 = 75;

pub const REVEAL_THRESHOLD: f64 = 0.1;

pub fn pointer_offset(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> (f64, f64) {
    (client_x - rect_left, client_y - rect_top)
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TiltRotation {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl TiltRotation {
    pub const NEUTRAL: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };
}

pub fn tilt_rotation(offset_x: f64, offset_y: f64, width: f64, height: f64) -> TiltRotation {
    if width <= 0.0 || height <= 0.0 {
        return TiltRotation::NEUTRAL;
    }

    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let rotate_x = ((offset_y - center_y) / center_y) * -TILT_MAX_DEG;
    let rotate_y = ((offset_x - center_x) / center_x) * TILT_MAX_DEG;

    TiltRotation {
        rotate_x: rotate_x.clamp(-TILT_MAX_DEG, TILT_MAX_DEG),
        rotate_y: rotate_y.clamp(-TILT_MAX_DEG, TILT_MAX_DEG),
    }
}

pub fn tilt_transform(rotation: TiltRotation) -> String {
    format!(
        "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d(1.05, 1.05, 1.05)",
        rotation.rotate_x, rotation.rotate_y
    )
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ParticleColor {
    Accent,
    White,
}

impl ParticleColor {
    pub fn css_value(self) -> &'static str {
        match self {
            Self::Accent => "var(--accent-color)",
            Self::White => "#fff",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Particle {
    pub angle_deg: f64,
    pub distance: f64,
    pub size: f64,
    pub color: ParticleColor,
    pub delay_seconds: f64,
}

impl Particle {
    pub fn x(&self) -> f64 {
        self.angle_deg.to_radians().cos() * self.distance
    }

    pub fn y(&self) -> f64 {
        self.angle_deg.to_radians().sin() * self.distance
    }
}

/// One ring of decorative particles, evenly spaced in angle with randomized
/// radial jitter. Generated once per mount of the owning field.
pub fn particle_ring(mut rand: impl FnMut() -> f64) -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|index| {
            let angle_deg = (index as f64 / PARTICLE_COUNT as f64) * 360.0;
            let distance = PARTICLE_BASE_DISTANCE + rand() * PARTICLE_DISTANCE_JITTER;
            let size = PARTICLE_MIN_SIZE + rand() * PARTICLE_SIZE_JITTER;
            let color = if rand() > 0.5 {
                ParticleColor::Accent
            } else {
                ParticleColor::White
            };
            let delay_seconds = rand() * PARTICLE_MAX_DELAY_SECONDS;

            Particle {
                angle_deg,
                distance,
                size,
                color,
                delay_seconds,
            }
        })
        .collect()
}

fn random_glyph(rand01: f64) -> char {
    let index = ((rand01 * SCRAMBLE_GLYPHS.len() as f64) as usize).min(SCRAMBLE_GLYPHS.len() - 1);
    SCRAMBLE_GLYPHS[index] as char
}

/// Character-reveal scramble over a heading string. The reveal cursor
/// advances by a third of a character per tick; `floor(cursor)` is the
/// authoritative boundary between locked-in and still-randomized glyphs.
/// Spaces are never randomized. The final frame is always the original
/// string verbatim, after which the machine stops mutating.
pub struct Scramble {
    original: String,
    char_count: usize,
    cursor: f64,
    done: bool,
}

impl Scramble {
    pub fn new(original: impl Into<String>) -> Self {
        let original = original.into();
        let char_count = original.chars().count();

        Self {
            original,
            char_count,
            cursor: 0.0,
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Number of characters currently locked in.
    pub fn revealed(&self) -> usize {
        (self.cursor.floor() as usize).min(self.char_count)
    }

    pub fn tick(&mut self, mut rand: impl FnMut() -> f64) -> String {
        let revealed = self.cursor.floor() as usize;
        let frame: String = self
            .original
            .chars()
            .enumerate()
            .map(|(index, ch)| {
                if ch == ' ' || index < revealed {
                    ch
                } else {
                    random_glyph(rand())
                }
            })
            .collect();

        if revealed >= self.char_count {
            self.done = true;
        } else {
            self.cursor += SCRAMBLE_STEP;
        }

        frame
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TaglinePhase {
    Glitching,
    Apologizing,
    Erasing,
    TypingFinal,
    Done,
}

/// The scripted hero tagline: type a glitched take, apologize for it, erase
/// the lot, then type the intended line. Phases run strictly in order and
/// the sequence plays exactly once; `advance` applies the next buffer
/// mutation and returns the delay to wait before the one after it, or `None`
/// once the sequence is done.
pub struct TaglineSequence {
    phase: TaglinePhase,
    buffer: String,
}

impl TaglineSequence {
    pub fn new() -> Self {
        Self {
            phase: TaglinePhase::Glitching,
            buffer: String::new(),
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn phase(&self) -> TaglinePhase {
        self.phase
    }

    pub fn advance(&mut self) -> Option<u32> {
        match self.phase {
            TaglinePhase::Glitching => {
                push_next_char(&mut self.buffer, TAGLINE_GLITCHED, 0);
                if self.buffer.len() == TAGLINE_GLITCHED.len() {
                    self.phase = TaglinePhase::Apologizing;
                    Some(PAUSE_AFTER_GLITCH_MS)
                } else {
                    Some(TYPE_GLITCH_MS)
                }
            }
            TaglinePhase::Apologizing => {
                push_next_char(&mut self.buffer, TAGLINE_APOLOGY, TAGLINE_GLITCHED.len());
                if self.buffer.len() == TAGLINE_GLITCHED.len() + TAGLINE_APOLOGY.len() {
                    self.phase = TaglinePhase::Erasing;
                    Some(PAUSE_AFTER_APOLOGY_MS)
                } else {
                    Some(TYPE_APOLOGY_MS)
                }
            }
            TaglinePhase::Erasing => {
                self.buffer.pop();
                if self.buffer.is_empty() {
                    self.phase = TaglinePhase::TypingFinal;
                    Some(PAUSE_AFTER_ERASE_MS)
                } else {
                    Some(ERASE_MS)
                }
            }
            TaglinePhase::TypingFinal => {
                push_next_char(&mut self.buffer, TAGLINE_FINAL, 0);
                if self.buffer.len() == TAGLINE_FINAL.len() {
                    self.phase = TaglinePhase::Done;
                }
                Some(TYPE_FINAL_MS)
            }
            TaglinePhase::Done => None,
        }
    }
}

impl Default for TaglineSequence {
    fn default() -> Self {
        Self::new()
    }
}

// The buffer is always `source` up to `buffer.len() - offset` bytes, so the
// slice below starts on a char boundary.
fn push_next_char(buffer: &mut String, source: &str, offset: usize) {
    if let Some(ch) = source[buffer.len() - offset..].chars().next() {
        buffer.push(ch);
    }
}

/// One-way visibility latch for scroll-revealed sections.
#[derive(Default)]
pub struct RevealLatch {
    visible: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds one intersection sample; returns true only on the false→true
    /// transition. Leaving the viewport never resets the latch.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.visible || !intersecting {
            return false;
        }

        self.visible = true;
        true
    }
}

#[derive(Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub keyword: bool,
}

/// Splits `content` into plain and keyword runs. Matching is ASCII
/// case-insensitive, anchored on word boundaries, and prefers the longest
/// keyword at each position so "C++" wins over "C".
pub fn highlight_runs(content: &str, keywords: &[&str]) -> Vec<TextRun> {
    let mut runs = Vec::new();
    let mut plain = String::new();
    let mut index = 0;

    while index < content.len() {
        let matched = keyword_at(content, index, keywords);

        if let Some(keyword_len) = matched {
            if !plain.is_empty() {
                runs.push(TextRun {
                    text: std::mem::take(&mut plain),
                    keyword: false,
                });
            }
            runs.push(TextRun {
                text: content[index..index + keyword_len].to_string(),
                keyword: true,
            });
            index += keyword_len;
        } else {
            let Some(ch) = content[index..].chars().next() else {
                break;
            };
            plain.push(ch);
            index += ch.len_utf8();
        }
    }

    if !plain.is_empty() {
        runs.push(TextRun {
            text: plain,
            keyword: false,
        });
    }

    runs
}

fn keyword_at(content: &str, index: usize, keywords: &[&str]) -> Option<usize> {
    let at_word_start = content[..index]
        .chars()
        .next_back()
        .map_or(true, |ch| !ch.is_ascii_alphanumeric());

    if !at_word_start {
        return None;
    }

    keywords
        .iter()
        .filter(|keyword| {
            content
                .get(index..index + keyword.len())
                .is_some_and(|candidate| candidate.eq_ignore_ascii_case(keyword))
        })
        .filter(|keyword| {
            content[index + keyword.len()..]
                .chars()
                .next()
                .map_or(true, |ch| !ch.is_ascii_alphanumeric())
        })
        .map(|keyword| keyword.len())
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_rand(value: f64) -> impl FnMut() -> f64 {
        move || value
    }

    #[test]
    fn tilt_rotation_is_neutral_at_center() {
        let rotation = tilt_rotation(100.0, 50.0, 200.0, 100.0);

        assert_eq!(rotation, TiltRotation::NEUTRAL);
    }

    #[test]
    fn tilt_rotation_reaches_maximum_at_top_left_corner() {
        let rotation = tilt_rotation(0.0, 0.0, 200.0, 100.0);

        assert_eq!(rotation.rotate_x, TILT_MAX_DEG);
        assert_eq!(rotation.rotate_y, -TILT_MAX_DEG);
    }

    #[test]
    fn tilt_rotation_clamps_outside_the_rect() {
        let rotation = tilt_rotation(500.0, -80.0, 200.0, 100.0);

        assert_eq!(rotation.rotate_x, TILT_MAX_DEG);
        assert_eq!(rotation.rotate_y, TILT_MAX_DEG);
    }

    #[test]
    fn tilt_rotation_tolerates_degenerate_rects() {
        let rotation = tilt_rotation(10.0, 10.0, 0.0, 0.0);

        assert_eq!(rotation, TiltRotation::NEUTRAL);
    }

    #[test]
    fn tilt_transform_renders_both_axes() {
        let css = tilt_transform(TiltRotation {
            rotate_x: 2.5,
            rotate_y: -7.25,
        });

        assert_eq!(
            css,
            "perspective(1000px) rotateX(2.50deg) rotateY(-7.25deg) scale3d(1.05, 1.05, 1.05)"
        );
    }

    #[test]
    fn particle_ring_spaces_particles_evenly() {
        let particles = particle_ring(fixed_rand(0.5));

        assert_eq!(particles.len(), PARTICLE_COUNT);
        for (index, particle) in particles.iter().enumerate() {
            let expected = (index as f64 / PARTICLE_COUNT as f64) * 360.0;
            assert_eq!(particle.angle_deg, expected);
        }
    }

    #[test]
    fn particle_ring_keeps_jitter_within_bounds() {
        for seed in [0.0, 0.25, 0.75, 0.999] {
            for particle in particle_ring(fixed_rand(seed)) {
                assert!(particle.distance >= PARTICLE_BASE_DISTANCE);
                assert!(particle.distance < PARTICLE_BASE_DISTANCE + PARTICLE_DISTANCE_JITTER);
                assert!(particle.size >= PARTICLE_MIN_SIZE);
                assert!(particle.size < PARTICLE_MIN_SIZE + PARTICLE_SIZE_JITTER);
                assert!(particle.delay_seconds >= 0.0);
                assert!(particle.delay_seconds < PARTICLE_MAX_DELAY_SECONDS);
            }
        }
    }

    #[test]
    fn particle_ring_uses_both_colors() {
        let accent = particle_ring(fixed_rand(0.9));
        let white = particle_ring(fixed_rand(0.1));

        assert!(accent.iter().all(|p| p.color == ParticleColor::Accent));
        assert!(white.iter().all(|p| p.color == ParticleColor::White));
    }

    #[test]
    fn scramble_preserves_revealed_prefix_and_spaces() {
        let original = "01. ABOUT ME";
        let mut scramble = Scramble::new(original);
        let mut rand = fixed_rand(0.0);
        let mut previous_revealed = 0;

        for _ in 0..200 {
            let revealed = scramble.revealed();
            let frame = scramble.tick(&mut rand);
            assert!(revealed >= previous_revealed, "reveal cursor went backwards");
            previous_revealed = revealed;

            let expected_prefix: String = original.chars().take(revealed).collect();
            let frame_prefix: String = frame.chars().take(revealed).collect();
            assert_eq!(frame_prefix, expected_prefix);

            for (frame_ch, original_ch) in frame.chars().zip(original.chars()) {
                if original_ch == ' ' {
                    assert_eq!(frame_ch, ' ');
                }
            }

            if scramble.is_done() {
                assert_eq!(frame, original);
                return;
            }
        }

        panic!("scramble never terminated");
    }

    #[test]
    fn scramble_terminates_with_the_original_string() {
        let original = "05. CONTACT";
        let mut scramble = Scramble::new(original);
        let mut rand = fixed_rand(0.42);
        let mut last = String::new();

        while !scramble.is_done() {
            last = scramble.tick(&mut rand);
        }

        assert_eq!(last, original);

        // A tick after completion keeps producing the settled string.
        assert_eq!(scramble.tick(&mut rand), original);
        assert!(scramble.is_done());
    }

    #[test]
    fn scramble_handles_empty_input() {
        let mut scramble = Scramble::new("");

        assert_eq!(scramble.tick(fixed_rand(0.0)), "");
        assert!(scramble.is_done());
    }

    #[test]
    fn scramble_randomizes_unrevealed_glyphs_from_the_glyph_set() {
        let mut scramble = Scramble::new("PIXELS");
        let frame = scramble.tick(fixed_rand(0.999));

        for ch in frame.chars() {
            assert!(SCRAMBLE_GLYPHS.contains(&(ch as u8)));
        }
    }

    #[test]
    fn tagline_sequence_passes_through_every_phase_in_order() {
        let mut sequence = TaglineSequence::new();
        let mut phases = vec![sequence.phase()];

        while sequence.advance().is_some() {
            if phases.last() != Some(&sequence.phase()) {
                phases.push(sequence.phase());
            }
        }

        assert_eq!(
            phases,
            vec![
                TaglinePhase::Glitching,
                TaglinePhase::Apologizing,
                TaglinePhase::Erasing,
                TaglinePhase::TypingFinal,
                TaglinePhase::Done,
            ]
        );
    }

    #[test]
    fn tagline_sequence_terminal_buffer_is_the_corrected_tagline() {
        let mut sequence = TaglineSequence::new();

        while sequence.advance().is_some() {}

        assert_eq!(sequence.buffer(), TAGLINE_FINAL);
        assert_eq!(sequence.buffer(), "Crafting worlds, one pixel at a time.");
        assert_eq!(sequence.phase(), TaglinePhase::Done);
    }

    #[test]
    fn tagline_sequence_types_builds_and_erases_one_character_at_a_time() {
        let mut sequence = TaglineSequence::new();
        let mut previous_len = 0usize;

        // Glitch phase grows by one character per step.
        for step in 1..=TAGLINE_GLITCHED.len() {
            sequence.advance();
            assert_eq!(sequence.buffer().len(), step);
            assert_eq!(sequence.buffer(), &TAGLINE_GLITCHED[..step]);
            previous_len = step;
        }

        // Apology appends onto the glitched text without touching it.
        for step in 1..=TAGLINE_APOLOGY.len() {
            sequence.advance();
            assert_eq!(sequence.buffer().len(), previous_len + 1);
            assert!(sequence.buffer().starts_with(TAGLINE_GLITCHED));
            assert_eq!(
                &sequence.buffer()[TAGLINE_GLITCHED.len()..],
                &TAGLINE_APOLOGY[..step]
            );
            previous_len += 1;
        }

        // Erase drains to empty.
        let full_len = TAGLINE_GLITCHED.len() + TAGLINE_APOLOGY.len();
        for step in 1..=full_len {
            sequence.advance();
            assert_eq!(sequence.buffer().len(), full_len - step);
        }
        assert!(sequence.buffer().is_empty());

        // Final type reaches the corrected tagline.
        for step in 1..=TAGLINE_FINAL.len() {
            sequence.advance();
            assert_eq!(sequence.buffer(), &TAGLINE_FINAL[..step]);
        }
        assert_eq!(sequence.phase(), TaglinePhase::Done);
    }

    #[test]
    fn tagline_sequence_reports_phase_pauses() {
        let mut sequence = TaglineSequence::new();

        for step in 1..=TAGLINE_GLITCHED.len() {
            let delay = sequence.advance();
            if step == TAGLINE_GLITCHED.len() {
                assert_eq!(delay, Some(PAUSE_AFTER_GLITCH_MS));
            } else {
                assert_eq!(delay, Some(TYPE_GLITCH_MS));
            }
        }

        for step in 1..=TAGLINE_APOLOGY.len() {
            let delay = sequence.advance();
            if step == TAGLINE_APOLOGY.len() {
                assert_eq!(delay, Some(PAUSE_AFTER_APOLOGY_MS));
            } else {
                assert_eq!(delay, Some(TYPE_APOLOGY_MS));
            }
        }

        let full_len = TAGLINE_GLITCHED.len() + TAGLINE_APOLOGY.len();
        for step in 1..=full_len {
            let delay = sequence.advance();
            if step == full_len {
                assert_eq!(delay, Some(PAUSE_AFTER_ERASE_MS));
            } else {
                assert_eq!(delay, Some(ERASE_MS));
            }
        }

        for _ in 1..=TAGLINE_FINAL.len() {
            assert_eq!(sequence.advance(), Some(TYPE_FINAL_MS));
        }

        assert_eq!(sequence.advance(), None);
    }

    #[test]
    fn tagline_sequence_freezes_once_done() {
        let mut sequence = TaglineSequence::new();

        while sequence.advance().is_some() {}
        let settled = sequence.buffer().to_string();

        assert_eq!(sequence.advance(), None);
        assert_eq!(sequence.buffer(), settled);
    }

    #[test]
    fn reveal_latch_sets_once_and_never_resets() {
        let mut latch = RevealLatch::new();

        assert!(!latch.is_visible());
        assert!(!latch.observe(false));
        assert!(!latch.is_visible());

        assert!(latch.observe(true));
        assert!(latch.is_visible());

        // Scrolling the section back out of the viewport must not unlatch.
        assert!(!latch.observe(false));
        assert!(latch.is_visible());

        // Re-entering does not report a second transition.
        assert!(!latch.observe(true));
        assert!(latch.is_visible());
    }

    #[test]
    fn highlight_runs_marks_keywords_and_preserves_text() {
        let keywords = ["Computer Science", "C++", "C", "Java"];
        let runs = highlight_runs("I study Computer Science, C++ and java.", &keywords);

        let reassembled: String = runs.iter().map(|run| run.text.as_str()).collect();
        assert_eq!(reassembled, "I study Computer Science, C++ and java.");

        let highlighted: Vec<&str> = runs
            .iter()
            .filter(|run| run.keyword)
            .map(|run| run.text.as_str())
            .collect();
        assert_eq!(highlighted, vec!["Computer Science", "C++", "java"]);
    }

    #[test]
    fn highlight_runs_prefers_the_longest_keyword() {
        let keywords = ["C", "C++"];
        let runs = highlight_runs("C++", &keywords);

        assert_eq!(runs.len(), 1);
        assert!(runs[0].keyword);
        assert_eq!(runs[0].text, "C++");
    }

    #[test]
    fn highlight_runs_requires_word_boundaries() {
        let keywords = ["C"];
        let runs = highlight_runs("captivated by C", &keywords);

        assert_eq!(runs.len(), 2);
        assert!(!runs[0].keyword);
        assert_eq!(runs[0].text, "captivated by ");
        assert!(runs[1].keyword);
        assert_eq!(runs[1].text, "C");
    }

    #[test]
    fn highlight_runs_without_matches_is_a_single_plain_run() {
        let runs = highlight_runs("nothing to see here", &["Rust"]);

        assert_eq!(runs.len(), 1);
        assert!(!runs[0].keyword);
    }
}
