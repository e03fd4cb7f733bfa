//! The byte oriented line paths must leave the buffer exactly as the
//! equivalent per-pixel drawing does.
use oled_ssd1306::framebuffer::{buffer_len, FrameBuffer};
use oled_ssd1306::prelude::*;
use proptest::prelude::*;

const SIZES: [(u32, u32); 5] = [(128, 64), (128, 32), (96, 16), (16, 20), (7, 3)];

fn panel(size: usize, seed: &[u8]) -> FrameBuffer<Vec<u8>> {
    let (w, h) = SIZES[size];
    let len = buffer_len(w, h);
    let data = seed.iter().copied().cycle().take(len).collect::<Vec<u8>>();
    FrameBuffer::new(w, h, data).unwrap()
}

fn color() -> impl Strategy<Value = PixelColor> {
    prop_oneof![
        Just(PixelColor::Off),
        Just(PixelColor::On),
        Just(PixelColor::Invert),
    ]
}

fn coordinate() -> impl Strategy<Value = i32> {
    prop_oneof![
        Just(i32::MIN),
        Just(i32::MAX),
        Just(i32::MIN + 1),
        Just(i32::MAX - 1),
        any::<i32>(),
        -200i32..200,
    ]
}

fn rotation() -> impl Strategy<Value = DisplayRotation> {
    (0u8..4).prop_map(|r| DisplayRotation::try_from(r).unwrap())
}

proptest! {
    #[test]
    fn hline_matches_pixels(
        size in 0..SIZES.len(),
        seed in prop::collection::vec(any::<u8>(), 1..16),
        x in -140i32..140,
        y in -10i32..70,
        len in -5i32..200,
        color in color(),
    ) {
        let mut fast = panel(size, &seed);
        let mut slow = panel(size, &seed);
        fast.fast_hline(x, y, len, color);
        for i in 0..len.max(0) {
            slow.set_pixel(x + i, y, color);
        }
        prop_assert_eq!(fast.buffer(), slow.buffer());
    }

    #[test]
    fn vline_matches_pixels(
        size in 0..SIZES.len(),
        seed in prop::collection::vec(any::<u8>(), 1..16),
        x in -10i32..140,
        y in -70i32..70,
        len in -5i32..150,
        color in color(),
    ) {
        let mut fast = panel(size, &seed);
        let mut slow = panel(size, &seed);
        fast.fast_vline(x, y, len, color);
        for i in 0..len.max(0) {
            slow.set_pixel(x, y + i, color);
        }
        prop_assert_eq!(fast.buffer(), slow.buffer());
    }

    #[test]
    fn rotated_lines_match_pixels(
        size in 0..SIZES.len(),
        seed in prop::collection::vec(any::<u8>(), 1..16),
        rotation in rotation(),
        x in -140i32..140,
        y in -140i32..140,
        len in -5i32..200,
        color in color(),
        vertical in any::<bool>(),
    ) {
        let mut fast = panel(size, &seed);
        let mut slow = panel(size, &seed);
        fast.set_rotation(rotation);
        slow.set_rotation(rotation);

        if vertical {
            fast.draw_fast_vline(x, y, len, color);
            for i in 0..len.max(0) {
                slow.set_pixel(x, y + i, color);
            }
        } else {
            fast.draw_fast_hline(x, y, len, color);
            for i in 0..len.max(0) {
                slow.set_pixel(x + i, y, color);
            }
        }
        prop_assert_eq!(fast.buffer(), slow.buffer());
    }

    #[test]
    fn extreme_lines_match_clipped_pixels(
        size in 0..SIZES.len(),
        rotation in rotation(),
        x in coordinate(),
        y in coordinate(),
        len in coordinate(),
        color in color(),
        vertical in any::<bool>(),
    ) {
        let mut fast = panel(size, &[0x00]);
        let mut slow = panel(size, &[0x00]);
        fast.set_rotation(rotation);
        slow.set_rotation(rotation);

        // only the part of the run inside the logical area can change pixels
        let (along, across, extent) = if vertical {
            (y, x, slow.height())
        } else {
            (x, y, slow.width())
        };
        let first = (along as i64).max(0);
        let end = (along as i64 + len as i64).min(extent as i64);
        for i in first..end {
            if vertical {
                slow.set_pixel(across, i as i32, color);
            } else {
                slow.set_pixel(i as i32, across, color);
            }
        }

        if vertical {
            fast.draw_fast_vline(x, y, len, color);
        } else {
            fast.draw_fast_hline(x, y, len, color);
        }
        prop_assert_eq!(fast.buffer(), slow.buffer());
    }

    #[test]
    fn pixel_round_trip(
        size in 0..SIZES.len(),
        rotation in rotation(),
        x in 0i32..128,
        y in 0i32..128,
        on in any::<bool>(),
    ) {
        let mut fb = panel(size, &[0x5A]);
        fb.set_rotation(rotation);
        prop_assume!((x as u32) < fb.width() && (y as u32) < fb.height());

        fb.set_pixel(x, y, PixelColor::from(on));
        prop_assert_eq!(fb.get_pixel(x, y), on);

        // two inversions cancel out
        let before = fb.buffer().to_vec();
        fb.set_pixel(x, y, PixelColor::Invert);
        prop_assert_eq!(fb.get_pixel(x, y), !on);
        fb.set_pixel(x, y, PixelColor::Invert);
        prop_assert_eq!(fb.buffer(), &before[..]);
    }

    #[test]
    fn fill_sets_every_byte(size in 0..SIZES.len(), seed in prop::collection::vec(any::<u8>(), 1..16)) {
        let mut fb = panel(size, &seed);
        let (w, h) = SIZES[size];
        prop_assert_eq!(fb.buffer().len(), (w * ((h + 7) / 8)) as usize);

        fb.fill(PixelColor::On);
        prop_assert!(fb.buffer().iter().all(|&b| b == 0xFF));
        fb.fill(PixelColor::Off);
        prop_assert!(fb.buffer().iter().all(|&b| b == 0x00));
    }
}

#[test]
fn rotate180_corner_case() {
    let mut rotated = panel(1, &[0]);
    rotated.set_rotation(DisplayRotation::Rotate180);
    rotated.set_pixel(0, 0, PixelColor::On);

    let mut plain = panel(1, &[0]);
    plain.set_pixel(127, 31, PixelColor::On);

    assert_eq!(rotated.buffer(), plain.buffer());
}
