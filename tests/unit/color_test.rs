//! Unit tests for color resolution

use termblock::ansi::{resolve_indexed, resolve_named, resolve_true_color, Color, Hue};

#[test]
fn named_colors_cover_all_hues() {
    let hues: Vec<Hue> = (0..8)
        .map(|i| match resolve_named(i, false) {
            Color::Named { hue, bright } => {
                assert!(!bright);
                hue
            }
            other => panic!("expected named color, got {:?}", other),
        })
        .collect();
    assert_eq!(hues, Hue::ALL);
}

#[test]
fn cube_components_are_multiples_of_51() {
    for n in 16..232u16 {
        match resolve_indexed(n) {
            Color::Rgb { r, g, b } => {
                for c in [r, g, b] {
                    assert_eq!(c % 51, 0, "index {} component {}", n, c);
                }
            }
            other => panic!("index {} resolved to {:?}", n, other),
        }
    }
}

#[test]
fn grayscale_ramp_is_monotonic() {
    let levels: Vec<u16> = (232..=255u16)
        .map(|n| match resolve_indexed(n) {
            Color::Rgb { r, g, b } => {
                assert!(r == g && g == b);
                r
            }
            other => panic!("index {} resolved to {:?}", n, other),
        })
        .collect();
    assert!(levels.windows(2).all(|w| w[1] - w[0] == 10));
}

#[test]
fn indexed_table_regression() {
    let table = [
        (0, resolve_named(0, false)),
        (7, resolve_named(7, false)),
        (8, resolve_named(0, true)),
        (15, resolve_named(7, true)),
        (16, resolve_true_color(0, 0, 0)),
        (17, resolve_true_color(0, 0, 51)),
        (52, resolve_true_color(51, 0, 0)),
        (231, resolve_true_color(255, 255, 255)),
        (232, resolve_true_color(8, 8, 8)),
        (255, resolve_true_color(238, 238, 238)),
    ];
    for (n, expected) in table {
        assert_eq!(resolve_indexed(n), expected, "index {}", n);
    }
}

#[test]
fn hue_index_round_trip() {
    for (i, hue) in Hue::ALL.iter().enumerate() {
        assert_eq!(hue.index(), i);
        assert_eq!(Hue::from_index(i as u16), *hue);
    }
}
