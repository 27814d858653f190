//! Cross-notation behaviour: dispatch, detection and round trips.

use super::*;

fn sample_colors() -> impl Iterator<Item = Color> {
    (0..=255u8).map(|v| Color::from_rgba(v, 255 - v, v / 3, v.wrapping_mul(7)))
}

#[test]
fn hex_round_trip_drops_alpha() {
    for c in sample_colors() {
        assert_eq!(decode_hex(&encode_hex(c)).unwrap(), c.with_alpha(255));
    }
}

#[test]
fn rgb_round_trip_drops_alpha() {
    for c in sample_colors() {
        assert_eq!(decode_rgb(&encode_rgb(c)).unwrap(), c.with_alpha(255));
    }
}

#[test]
fn rgba_round_trip_is_exact() {
    for c in sample_colors() {
        assert_eq!(decode_rgba(&encode_rgba(c)).unwrap(), c);
    }
}

#[test]
fn encoded_text_stays_in_its_own_notation() {
    for c in sample_colors() {
        for n in Notation::ALL {
            let text = encode(n, c);
            assert!(is_valid(n, &text), "{text} not valid {n}");
            assert_eq!(detect_notation(&text), n, "{text}");
        }
    }
}

#[test]
fn dispatch_matches_direct_calls() {
    let c = Color::from_rgba(0, 180, 240, 51);
    assert_eq!(encode(Notation::Hex, c), encode_hex(c));
    assert_eq!(encode(Notation::Rgb, c), encode_rgb(c));
    assert_eq!(encode(Notation::Rgba, c), encode_rgba(c));
    assert_eq!(decode(Notation::Rgba, "rgba(0,180,240,0.2)").unwrap(), c);
}

#[test]
fn notations_reject_each_other() {
    assert!(!is_valid(Notation::Hex, "rgb(0,0,0)"));
    assert!(!is_valid(Notation::Rgb, "rgba(0,0,0,1)"));
    assert!(!is_valid(Notation::Rgba, "#000000"));
}

#[test]
fn detect_by_prefix() {
    assert_eq!(detect_notation("rgba(0,0,0,1)"), Notation::Rgba);
    assert_eq!(detect_notation("RGBA(0,0,0,1)"), Notation::Rgba);
    assert_eq!(detect_notation("rgb(0,0,0)"), Notation::Rgb);
    assert_eq!(detect_notation("#fff"), Notation::Hex);
    assert_eq!(detect_notation("fff"), Notation::Hex);
    assert_eq!(detect_notation(""), Notation::Hex);
    assert_eq!(detect_notation("rg"), Notation::Hex);
}

#[test]
fn detect_handles_multibyte_input() {
    assert_eq!(detect_notation("rgé"), Notation::Hex);
    assert_eq!(detect_notation("ü"), Notation::Hex);
}

#[test]
fn decode_any_uses_detected_notation() {
    assert_eq!(decode_any("#abc").unwrap(), Color::from_rgb(0xaa, 0xbb, 0xcc));
    assert_eq!(decode_any("rgb(1,2,3)").unwrap(), Color::from_rgb(1, 2, 3));
    assert_eq!(
        decode_any("rgba(1,2,3,0)").unwrap(),
        Color::from_rgba(1, 2, 3, 0)
    );

    let err = decode_any("rgb(1,2)").unwrap_err();
    assert_eq!(err.notation, Notation::Rgb);
    let err = decode_any("not-a-color").unwrap_err();
    assert_eq!(err.notation, Notation::Hex);
}

#[test]
fn malformed_input_fails_in_every_notation() {
    for s in ["", " ", "not-a-color", "rgb[1,2,3]", "rgba(1,2,3,x)", "#12 456"] {
        for n in Notation::ALL {
            let err = decode(n, s).unwrap_err();
            assert_eq!(err.input, s);
            assert_eq!(err.notation, n);
        }
    }
}

#[test]
fn format_error_mentions_input() {
    let err = decode_rgb("rgb(256,0,0)").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("rgb(256,0,0)"));
    assert!(msg.contains("css rgb color"));
}
