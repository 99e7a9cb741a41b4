use super::{CellAttributes, CellFlags};
use crate::color::theme::{DEFAULT_BG, DEFAULT_FG};
use crate::color::{Rgb, Theme, ThemeBuilder};

const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

fn attrs(fg: Rgb, bg: Rgb, flags: CellFlags) -> CellAttributes {
    CellAttributes { fg, bg, flags }
}

#[test]
fn default_uses_terminal_default_pair() {
    let a = CellAttributes::default();
    assert_eq!(a.fg, DEFAULT_FG);
    assert_eq!(a.bg, DEFAULT_BG);
    assert!(a.flags.is_empty());
}

#[test]
fn from_theme_uses_theme_defaults() {
    let theme = ThemeBuilder::new().foreground(RED).background(BLUE).build();
    let a = CellAttributes::from(&theme);
    assert_eq!((a.fg, a.bg), (RED, BLUE));
}

#[test]
fn reset_clears_flags_and_colors() {
    let theme = Theme::default();
    let mut a = attrs(RED, BLUE, CellFlags::BOLD | CellFlags::HIDDEN);
    a.reset(&theme);
    assert_eq!(a, CellAttributes::default());
}

#[test]
fn flag_accessors() {
    let mut a = CellAttributes::default();
    assert!(!a.is_bold());
    a.set_flag(CellFlags::BOLD | CellFlags::BLINK, true);
    assert!(a.is_bold());
    assert!(a.is_blink());
    assert!(!a.is_dim());
    a.set_flag(CellFlags::BOLD, false);
    assert!(!a.is_bold());
    assert!(a.is_blink());

    a.set_flag(CellFlags::DIM, true);
    a.set_flag(CellFlags::UNDERLINE, true);
    a.set_flag(CellFlags::INVERSE, true);
    a.set_flag(CellFlags::HIDDEN, true);
    assert!(a.is_dim() && a.is_underline() && a.is_inverse() && a.is_hidden());
}

// --- Reverse video ---

#[test]
fn toggle_reverse_video_swaps_stored_colors() {
    let mut a = attrs(RED, BLUE, CellFlags::empty());
    a.toggle_reverse_video();
    assert_eq!((a.fg, a.bg), (BLUE, RED));
    a.toggle_reverse_video();
    assert_eq!((a.fg, a.bg), (RED, BLUE));
}

#[test]
fn toggle_reverse_video_ignores_inverse_flag() {
    let mut a = attrs(RED, BLUE, CellFlags::INVERSE);
    a.toggle_reverse_video();
    assert!(a.is_inverse());
    assert_eq!((a.fg, a.bg), (BLUE, RED));
}

// --- Diff: colors ---

#[test]
fn diff_of_identical_attributes_is_empty() {
    let theme = Theme::default();
    let samples = [
        CellAttributes::default(),
        attrs(RED, BLUE, CellFlags::empty()),
        attrs(RED, RED, CellFlags::BOLD | CellFlags::INVERSE | CellFlags::HIDDEN),
    ];
    for a in samples {
        assert_eq!(a.diff(&theme, &a), "");
    }
}

#[test]
fn diff_background_only() {
    let theme = Theme::default();
    let prev = attrs(RED, BLUE, CellFlags::empty());
    let next = attrs(RED, RED, CellFlags::empty());
    assert_eq!(next.diff(&theme, &prev), "\x1b[48;2;255;0;0m");
}

#[test]
fn diff_foreground_only() {
    let theme = Theme::default();
    let prev = attrs(RED, BLUE, CellFlags::empty());
    let next = attrs(BLUE, BLUE, CellFlags::empty());
    assert_eq!(next.diff(&theme, &prev), "\x1b[38;2;0;0;255m");
}

#[test]
fn diff_foreground_before_background() {
    let theme = Theme::default();
    let prev = attrs(RED, BLUE, CellFlags::empty());
    let next = attrs(BLUE, RED, CellFlags::empty());
    assert_eq!(
        next.diff(&theme, &prev),
        "\x1b[38;2;0;0;255m\x1b[48;2;255;0;0m"
    );
}

#[test]
fn diff_after_reverse_video_emits_both_colors() {
    let theme = Theme::default();
    let prev = attrs(RED, BLUE, CellFlags::empty());
    let mut next = prev;
    next.toggle_reverse_video();
    assert_eq!(
        next.diff(&theme, &prev),
        "\x1b[38;2;0;0;255m\x1b[48;2;255;0;0m"
    );
}

#[test]
fn write_diff_appends_to_existing_buffer() {
    let theme = Theme::default();
    let prev = CellAttributes::default();
    let next = attrs(DEFAULT_FG, RED, CellFlags::empty());
    let mut out = String::from("X");
    next.write_diff(&theme, &prev, &mut out).expect("string write");
    assert_eq!(out, "X\x1b[48;2;255;0;0m");
}

// --- Diff: flags ---

#[test]
fn diff_setting_flags() {
    let theme = Theme::default();
    let prev = CellAttributes::default();
    let mut next = prev;
    next.flags = CellFlags::BOLD | CellFlags::UNDERLINE;
    assert_eq!(next.diff(&theme, &prev), "\x1b[1;4m");
}

#[test]
fn diff_clearing_flags() {
    let theme = Theme::default();
    let mut prev = CellAttributes::default();
    prev.flags = CellFlags::BLINK | CellFlags::INVERSE | CellFlags::HIDDEN;
    let next = CellAttributes::default();
    assert_eq!(next.diff(&theme, &prev), "\x1b[25;27;28m");
}

#[test]
fn diff_clearing_bold_reasserts_dim() {
    let theme = Theme::default();
    let mut prev = CellAttributes::default();
    prev.flags = CellFlags::BOLD | CellFlags::DIM;
    let mut next = prev;
    next.flags = CellFlags::DIM;
    assert_eq!(next.diff(&theme, &prev), "\x1b[22;2m");
}

#[test]
fn diff_clearing_bold_and_dim_emits_single_reset() {
    let theme = Theme::default();
    let mut prev = CellAttributes::default();
    prev.flags = CellFlags::BOLD | CellFlags::DIM | CellFlags::UNDERLINE;
    let mut next = prev;
    next.flags = CellFlags::UNDERLINE;
    assert_eq!(next.diff(&theme, &prev), "\x1b[22m");
}

#[test]
fn diff_resets_before_sets() {
    let theme = Theme::default();
    let mut prev = CellAttributes::default();
    prev.flags = CellFlags::UNDERLINE;
    let mut next = prev;
    next.flags = CellFlags::INVERSE;
    assert_eq!(next.diff(&theme, &prev), "\x1b[24;7m");
}

#[test]
fn diff_colors_then_flags() {
    let theme = Theme::default();
    let prev = CellAttributes::default();
    let next = attrs(RED, BLUE, CellFlags::BOLD);
    assert_eq!(
        next.diff(&theme, &prev),
        "\x1b[38;2;255;0;0m\x1b[48;2;0;0;255m\x1b[1m"
    );
}

#[test]
fn diff_color_change_keeps_unchanged_flags_silent() {
    let theme = Theme::default();
    let prev = attrs(RED, BLUE, CellFlags::BOLD | CellFlags::UNDERLINE);
    let next = attrs(BLUE, BLUE, CellFlags::BOLD | CellFlags::UNDERLINE);
    assert_eq!(next.diff(&theme, &prev), "\x1b[38;2;0;0;255m");
}
