// THEORY:
// The `classifier` module is the material discriminator of the engine: a
// pure, context-free predicate deciding whether a single (R,G,B) triple
// belongs to the onion or to the background. Every subject-gated analyzer
// (geometry, color stats, defects, edges, texture) funnels through it.
//
// Key architectural principles:
// 1.  **Pure Predicate**: No spatial or temporal state, no caches. The same
//     triple always yields the same answer, which is what makes the whole
//     pipeline idempotent per frame.
// 2.  **Disjunction of Color Families**: An onion skin shows up in one of
//     three families - warm/golden, achromatic-bright (white-skinned
//     varieties), or magenta/purple (red varieties). A pixel matching any
//     family is subject.
// 3.  **Explicit Opt-In for Dark Spots**: Heavily spotted skin can be dark
//     enough to fall outside all three families. The `AllowDark` mode admits
//     dark brownish pixels as subject, but it is never active on the default
//     path; it must be selected deliberately via `PipelineConfig`.

/// Selects which rule set `is_subject` evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassifierMode {
    /// The three color-family rules only.
    #[default]
    Standard,
    /// The three color-family rules plus the dark-brownish extension,
    /// admitting heavily discolored spot pixels as subject.
    AllowDark,
}

/// True when the triple belongs to the onion under the given mode.
pub fn is_subject(mode: ClassifierMode, r: u8, g: u8, b: u8) -> bool {
    let standard = is_warm_golden(r, g, b) || is_achromatic_bright(r, g, b) || is_purple_red(r, g, b);
    match mode {
        ClassifierMode::Standard => standard,
        ClassifierMode::AllowDark => standard || is_dark_brownish(r, g, b),
    }
}

/// Golden/yellow/brown skin: warm channels with red clearly above blue.
fn is_warm_golden(r: u8, g: u8, b: u8) -> bool {
    (80..=230).contains(&r)
        && (50..=200).contains(&g)
        && (20..=130).contains(&b)
        && r as i16 > b as i16 + 20
}

/// White-skinned varieties: all channels bright.
fn is_achromatic_bright(r: u8, g: u8, b: u8) -> bool {
    r >= 170 && g >= 170 && b >= 170
}

/// Red/purple varieties: red and blue both present, green suppressed.
fn is_purple_red(r: u8, g: u8, b: u8) -> bool {
    (80..=180).contains(&r)
        && (70..=170).contains(&b)
        && r as i16 > g as i16 - 10
        && b as i16 > g as i16 - 30
}

/// Dark brownish spot pixels, admitted only under `AllowDark`.
fn is_dark_brownish(r: u8, g: u8, b: u8) -> bool {
    (30..=110).contains(&r) && (20..=90).contains(&g) && (10..=80).contains(&b) && r >= g && g >= b
}
