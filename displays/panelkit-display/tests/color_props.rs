use panelkit_display::{bgr565_to_rgb24, rgb24_to_bgr565, Bgr565, Rgb24, Rgb565};
use proptest::prelude::*;

proptest! {
    #[test]
    fn quantization_drops_only_low_bits(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let c = Rgb24::new(r, g, b);
        let back = bgr565_to_rgb24(rgb24_to_bgr565(c));

        prop_assert_eq!(back.r, r & 0xF8);
        prop_assert_eq!(back.g, g & 0xFC);
        prop_assert_eq!(back.b, b & 0xF8);
        prop_assert!(r - back.r <= 7);
        prop_assert!(g - back.g <= 3);
        prop_assert!(b - back.b <= 7);
    }

    #[test]
    fn rgb565_input_matches_direct_conversion(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let c = Rgb24::new(r, g, b);
        prop_assert_eq!(Bgr565::from(Rgb565::from(c)), Bgr565::from(c));
    }

    #[test]
    fn panel_word_is_channel_swap(word in any::<u16>()) {
        let panel = Bgr565::from(Rgb565(word));
        prop_assert_eq!(panel.0 >> 11, word & 0x1F);
        prop_assert_eq!(panel.0 & 0x1F, word >> 11);
        prop_assert_eq!((panel.0 >> 5) & 0x3F, (word >> 5) & 0x3F);
    }
}
