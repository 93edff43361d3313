//! Integration tests for hilux crates.
//!
//! End-to-end checks of the measurement pass across profiles, transforms
//! and configuration loading.

#[cfg(test)]
mod tests {
    use std::io::Write;

    use approx::assert_relative_eq;
    use hilux_analyze::{measure_hdr, HighlightConfig, Measurement, Outputs};
    use hilux_color::{ColorProfile, Curve, Endpoint, Luminance, ToneMap, Transform};
    use hilux_core::{PixelBuffer, PixelLayout};
    use hilux_primaries::{DISPLAY_P3, REC2020, SRGB};
    use hilux_transfer::hlg;

    /// Deterministic pseudo-random samples in [0, 1).
    fn samples(count: usize, seed: u32) -> Vec<f32> {
        let mut state = seed.max(1);
        (0..count)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                (state % 10_000) as f32 / 10_000.0
            })
            .collect()
    }

    fn measure_all(image: &PixelBuffer, profile: &ColorProfile, target: u32) -> Measurement {
        measure_hdr(image, profile, &HighlightConfig::new(target), Outputs::all()).unwrap()
    }

    /// Gamma 1 sRGB at 50% and 150% of the target, white chromaticity.
    #[test]
    fn test_two_pixel_scenario_from_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "target_luminance: 200\ndefault_luminance: 100").unwrap();
        let config = HighlightConfig::from_file(file.path()).unwrap();

        let profile = ColorProfile::new(SRGB, Curve::linear(), Luminance::Unspecified);
        // Untagged, so 1.0 is the default luminance (100 nits).
        let data = vec![1.0, 1.0, 1.0, 3.0, 3.0, 3.0];
        let image = PixelBuffer::from_data(2, 1, PixelLayout::Rgb, data).unwrap();
        let m = measure_hdr(&image, &profile, &config, Outputs::all()).unwrap();

        let stats = m.stats.unwrap();
        assert_eq!(stats.overbright_pixel_count, 1);
        assert_eq!(stats.out_of_gamut_pixel_count, 0);
        assert_eq!(stats.both_pixel_count, 0);
        assert_eq!(m.image.unwrap().pixel(1, 0), [255, 0, 255, 255]);

        let info = m.pixel_info.unwrap();
        let table = m.percentiles.unwrap();
        assert_relative_eq!(info[1].nits, 300.0, epsilon = 0.1);
        assert_eq!(table[100].nits, info[1].nits);
    }

    #[test]
    fn test_invariants_on_wide_gamut_image() {
        let (width, height) = (37, 23);
        let image = PixelBuffer::from_data(
            width,
            height,
            PixelLayout::Rgb,
            samples((width * height * 3) as usize, 7),
        )
        .unwrap();
        let profile = ColorProfile::new(REC2020, Curve::srgb(), Luminance::Nits(1000));
        let m = measure_all(&image, &profile, 300);

        let stats = m.stats.unwrap();
        let n = (width * height) as usize;
        assert_eq!(stats.pixel_count, n);
        assert_eq!(
            stats.hdr_pixel_count,
            stats.both_pixel_count + stats.overbright_pixel_count + stats.out_of_gamut_pixel_count
        );
        assert!(stats.hdr_pixel_count <= n);
        assert!(stats.hdr_pixel_count > 0);

        let info = m.pixel_info.unwrap();
        assert_eq!(info.len(), n);
        let max = info.iter().map(|r| r.nits).fold(0.0f32, f32::max);
        assert_eq!(stats.brightest_pixel_nits, max);
        let first = info.iter().position(|r| r.nits == max).unwrap();
        assert_eq!(stats.brightest_pixel_x as usize, first % width as usize);
        assert_eq!(stats.brightest_pixel_y as usize, first / width as usize);

        assert!(info.iter().all(|r| (0.0..=1.0).contains(&r.out_of_gamut)));

        let table = m.percentiles.unwrap();
        assert_eq!(table.len(), 101);
        for pair in table.entries().windows(2) {
            assert!(pair[0].nits <= pair[1].nits);
            assert!(pair[0].out_of_gamut <= pair[1].out_of_gamut);
        }
        assert_eq!(table[100].nits, max);

        let preview = m.image.unwrap();
        assert_eq!((preview.width(), preview.height()), (width, height));
        assert!(preview.data().chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_counts_match_preview_tints() {
        let image =
            PixelBuffer::from_data(16, 16, PixelLayout::Rgb, samples(16 * 16 * 3, 99)).unwrap();
        let profile = ColorProfile::linear(DISPLAY_P3, 600);
        let m = measure_all(&image, &profile, 200);

        let stats = m.stats.unwrap();
        let preview = m.image.unwrap();
        let tinted = preview
            .data()
            .chunks_exact(4)
            .filter(|px| !(px[0] == px[1] && px[1] == px[2]))
            .count();
        // Black pixels keep their class but cannot show a tint.
        assert!(tinted <= stats.hdr_pixel_count);
    }

    #[test]
    fn test_srgb_source_matching_target() {
        let image =
            PixelBuffer::from_data(8, 8, PixelLayout::Rgba, samples(8 * 8 * 4, 3)).unwrap();
        let m = measure_all(&image, &ColorProfile::srgb(300), 300);

        assert!(m.pixel_info.unwrap().iter().all(|r| r.out_of_gamut == 0.0));
        let stats = m.stats.unwrap();
        assert_eq!(stats.out_of_gamut_pixel_count + stats.both_pixel_count, 0);
        assert_eq!(stats.overbright_pixel_count, 0);
    }

    #[test]
    fn test_brightest_tie_keeps_lowest_index() {
        let (width, height) = (300, 200);
        let mut data = vec![0.25f32; (width * height * 3) as usize];
        for index in [12_345usize, 40_000, 59_999] {
            data[index * 3..index * 3 + 3].copy_from_slice(&[0.9, 0.9, 0.9]);
        }
        let image = PixelBuffer::from_data(width, height, PixelLayout::Rgb, data).unwrap();
        let outputs = Outputs::none().with_stats();
        let m = measure_hdr(&image, &ColorProfile::srgb(100), &HighlightConfig::default(), outputs)
            .unwrap();

        let stats = m.stats.unwrap();
        assert_eq!(stats.brightest_pixel_x, 12_345 % width);
        assert_eq!(stats.brightest_pixel_y, 12_345 / width);
    }

    #[test]
    fn test_untagged_hlg_uses_hlg_peak() {
        let image = PixelBuffer::from_data(1, 1, PixelLayout::Rgb, vec![1.0; 3]).unwrap();
        let config = HighlightConfig::new(1000).with_default_luminance(203);
        let outputs = Outputs::none().with_pixel_info();
        let m = measure_hdr(&image, &ColorProfile::rec2100_hlg(), &config, outputs).unwrap();

        let record = m.pixel_info.unwrap()[0];
        assert_relative_eq!(record.nits, hlg::peak_luminance(203) as f32, epsilon = 1.0);
        assert_relative_eq!(record.luminance, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_profile_roundtrip_through_hub() {
        let src = Endpoint::profile(
            ColorProfile::new(DISPLAY_P3, Curve::srgb(), Luminance::Nits(500)),
            PixelLayout::Rgba,
        );
        let dst = Endpoint::profile(ColorProfile::rec2100_pq(), PixelLayout::Rgb);
        let forward = Transform::build(&src, &dst, ToneMap::Off).unwrap();
        let back = Transform::build(&dst, &src, ToneMap::Off).unwrap();

        let pixels = samples(64 * 4, 11);
        let mut pq = vec![0.0; 64 * 3];
        let mut restored = vec![0.0; 64 * 4];
        forward.run(&pixels, &mut pq, 64).unwrap();
        back.run(&pq, &mut restored, 64).unwrap();

        for (a, b) in pixels.chunks_exact(4).zip(restored.chunks_exact(4)) {
            for c in 0..3 {
                assert_relative_eq!(a[c], b[c], epsilon = 2e-3);
            }
            assert_eq!(b[3], 1.0);
        }
    }

    #[test]
    fn test_report_serializes() {
        let image = PixelBuffer::from_data(2, 2, PixelLayout::Rgb, samples(12, 5)).unwrap();
        let m = measure_all(&image, &ColorProfile::rec2100_pq(), 100);

        let stats = serde_json::to_value(m.stats.unwrap()).unwrap();
        assert_eq!(stats["pixel_count"], 4);
        assert!(stats.get("hdr_pixel_count").is_some());

        let table = serde_json::to_value(m.percentiles.unwrap()).unwrap();
        assert_eq!(table.as_array().unwrap().len(), 101);
        assert!(table[0].get("nits").is_some());

        let info = serde_json::to_string(&m.pixel_info.unwrap()).unwrap();
        assert!(info.contains("max_nits"));
    }
}
