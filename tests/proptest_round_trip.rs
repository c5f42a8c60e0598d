//! Property-based tests for colour conversions
//!
//! Checks that a colour set in a space reads back unchanged in that space, that clamping
//! holds for any input, and that both storage backends agree.

use proptest::prelude::*;
use rwcolour::{
    Colour, ColourDescriptor, ColourModel, ColourSpace, Emulated, HostColour, Value,
};

// Strategy for channels well outside the valid range, non-finite values included
fn wild_channel() -> impl Strategy<Value = f64> {
    prop_oneof![
        -10.0..10.0f64,
        Just(0.0),
        Just(1.0),
        Just(-1.0),
        Just(255.0),
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

// Strategy for CMYK with at least one of C, M, Y at zero, as produced from RGB
prop_compose! {
    fn canonical_cmyk()(
        zero in 0usize..3,
        a in 0u32..=100,
        b in 0u32..=100,
        k in 0u32..100
    ) -> [f64; 4] {
        let mut cmy = [a as f64, b as f64, 0.0];
        cmy.rotate_right(zero);
        [cmy[0], cmy[1], cmy[2], k as f64]
    }
}

fn assert_close(value: &Value, expected: &[f64]) -> Result<(), TestCaseError> {
    let channels = value.channels().unwrap_or_default();
    prop_assert_eq!(channels.len(), expected.len());
    for (a, b) in channels.iter().zip(expected) {
        prop_assert!((a - b).abs() < 1e-6, "{} != {:?}", value, expected);
    }
    Ok(())
}

proptest! {
    #[test]
    fn rgb_round_trip(r in 0.0..=1.0f64, g in 0.0..=1.0f64, b in 0.0..=1.0f64, a in 0.0..=1.0f64) {
        let mut colour = Colour::default();
        let out = colour.set_in([r, g, b, a], ColourSpace::Rgb).unwrap();
        assert_close(&out, &[r, g, b, a])?;
    }

    #[test]
    fn rgb_full_round_trip(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        let input = [r as f64, g as f64, b as f64, 1.0];
        let mut colour = Colour::default();
        prop_assert_eq!(colour.set_in(input, ColourSpace::RgbFull).unwrap(), Value::from(input));
    }

    #[test]
    fn hsv_round_trip(h in 0u32..360, s in 1u32..=100, v in 1u32..=100) {
        let input = [h as f64, s as f64, v as f64, 1.0];
        let mut colour = Colour::default();
        prop_assert_eq!(colour.set_in(input, ColourSpace::Hsv).unwrap(), Value::from(input));
    }

    #[test]
    fn cmy_round_trip(c in 0u32..=100, m in 0u32..=100, y in 0u32..=100) {
        let input = [c as f64, m as f64, y as f64, 1.0];
        let mut colour = Colour::default();
        prop_assert_eq!(colour.set_in(input, ColourSpace::Cmy).unwrap(), Value::from(input));
    }

    #[test]
    fn cmyk_round_trip(cmyk in canonical_cmyk()) {
        let input = [cmyk[0], cmyk[1], cmyk[2], cmyk[3], 1.0];
        let mut colour = Colour::default();
        prop_assert_eq!(colour.set_in(input, ColourSpace::Cmyk).unwrap(), Value::from(input));
    }

    #[test]
    fn hex_round_trip(bytes in any::<[u8; 4]>()) {
        let hex = format!("{:02x}{:02x}{:02x}{:02x}", bytes[0], bytes[1], bytes[2], bytes[3]);
        let mut colour = Colour::default();
        prop_assert_eq!(
            colour.set_in(hex.as_str(), ColourSpace::HexLong).unwrap(),
            Value::from(hex.as_str())
        );
        let mut shouted = Colour::default();
        shouted.set_in(format!("#{}", hex.to_uppercase()), ColourSpace::HexLong).unwrap();
        prop_assert_eq!(shouted, colour);
    }

    #[test]
    fn clamped_for_any_input(
        space in prop::sample::select(vec![
            ColourSpace::Rgb,
            ColourSpace::RgbFull,
            ColourSpace::Hsv,
            ColourSpace::Cmy,
            ColourSpace::Cmyk,
        ]),
        channels in prop::collection::vec(wild_channel(), 5)
    ) {
        let mut colour = Colour::default();
        let (_, max) = space.arity().unwrap();
        colour.set_in(&channels[..max], space).unwrap();
        let components: [f64; 4] = colour.components().into();
        for c in components {
            prop_assert!((0.0..=1.0).contains(&c), "{:?}", components);
        }
    }

    #[test]
    fn backends_agree(r in 0.0..=1.0f64, g in 0.0..=1.0f64, b in 0.0..=1.0f64) {
        let descriptor = ColourDescriptor {
            colour: Value::from([r, g, b]),
            ..Default::default()
        };
        let colour = Colour::new(&descriptor).unwrap();
        let mut native = Emulated::default();
        let host = HostColour::new(&mut native, &descriptor).unwrap();
        for space in ColourSpace::ALL {
            prop_assert_eq!(colour.get_in(space), host.get_in(space));
        }
    }
}
