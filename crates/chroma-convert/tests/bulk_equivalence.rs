//! Bulk conversions agree with scalar conversions for every pair.

use std::fmt::Debug;

use chroma_convert::prelude::*;
use chroma_convert::primaries::{ADOBE_RGB_1998, ECI_RGB_V2};

/// Compares through `Debug` so NaN outputs compare equal to themselves.
fn same<T: Debug>(a: &T, b: &T) -> bool {
    format!("{:?}", a) == format!("{:?}", b)
}

fn assert_bulk_matches<S, T>(conv: &ColorSpaceConverter, samples: &[S])
where
    S: Copy + Sync,
    T: FromColor<S> + Default + Clone + Debug + Send,
{
    let mut seq = vec![T::default(); samples.len()];
    conv.convert_many(samples, &mut seq).unwrap();

    for (out, &src) in seq.iter().zip(samples) {
        let scalar: T = conv.convert(src);
        assert!(same(out, &scalar), "{:?} != {:?}", out, scalar);
    }

    #[cfg(feature = "parallel")]
    {
        let mut par = vec![T::default(); samples.len()];
        conv.par_convert_many(samples, &mut par).unwrap();
        for (p, s) in par.iter().zip(&seq) {
            assert!(same(p, s), "{:?} != {:?}", p, s);
        }
    }
}

macro_rules! every_target {
    ($conv:expr, $samples:expr; $($dst:ty),+) => {
        $( assert_bulk_matches::<_, $dst>($conv, $samples); )+
    };
    ($conv:expr, $samples:expr) => {
        every_target!($conv, $samples; CieXyz, CieXyy, CieLab, CieLch, CieLuv, CieLchuv,
            HunterLab, Lms, LinearRgb, Rgb, Hsl, Hsv, Cmyk, YCbCr)
    };
}

fn converters() -> Vec<ColorSpaceConverter> {
    vec![
        ColorSpaceConverter::default(),
        ColorSpaceConverter::new(
            ConverterOptions::default()
                .with_target_rgb_working_space(ADOBE_RGB_1998)
                .with_target_hunter_lab_white_point(illuminant::D65),
        )
        .unwrap(),
        ColorSpaceConverter::new(ConverterOptions::default().without_adaptation()).unwrap(),
    ]
}

#[test]
fn test_cie_sources() {
    for conv in converters() {
        every_target!(&conv, &[CieXyz::new(0.3, 0.4, 0.2), CieXyz::new(0.0, 0.0, 0.0)]);
        every_target!(&conv, &[CieXyy::new(0.31, 0.33, 0.5), CieXyy::new(0.2, 0.0, 0.1)]);
        every_target!(&conv, &[Lms::new(0.5, 0.4, 0.3)]);
        every_target!(
            &conv,
            &[
                CieLab::new(50.0, 20.0, -30.0),
                CieLab::with_white_point(70.0, -5.0, 15.0, illuminant::A),
            ]
        );
        every_target!(&conv, &[CieLch::new(50.0, 30.0, 200.0)]);
        every_target!(
            &conv,
            &[
                CieLuv::new(40.0, 10.0, 10.0),
                CieLuv::with_white_point(40.0, 10.0, 10.0, illuminant::D50),
            ]
        );
        every_target!(&conv, &[CieLchuv::new(65.0, 20.0, 10.0)]);
        every_target!(&conv, &[HunterLab::new(45.0, 12.0, -8.0)]);
    }
}

#[test]
fn test_rgb_family_sources() {
    for conv in converters() {
        every_target!(
            &conv,
            &[
                Rgb::new(0.8, 0.4, 0.2),
                Rgb::with_working_space(0.1, 0.9, 0.5, ECI_RGB_V2),
                Rgb::new(0.0, 0.0, 0.0),
            ]
        );
        every_target!(
            &conv,
            &[
                LinearRgb::new(0.2, 0.3, 0.4),
                LinearRgb::with_working_space(0.6, 0.1, 0.1, ADOBE_RGB_1998),
            ]
        );
        every_target!(&conv, &[Hsl::new(30.0, 0.5, 0.5), Hsl::new(0.0, 0.0, 0.3)]);
        every_target!(&conv, &[Hsv::new(300.0, 0.25, 0.75)]);
        every_target!(&conv, &[Cmyk::new(0.1, 0.2, 0.3, 0.4), Cmyk::new(0.0, 0.0, 0.0, 1.0)]);
        every_target!(&conv, &[YCbCr::new(120.0, 100.0, 160.0)]);
    }
}

#[test]
fn test_short_destination_writes_nothing() {
    let conv = ColorSpaceConverter::default();
    let src = [CieLab::new(50.0, 0.0, 0.0); 4];
    let sentinel = Rgb::new(-7.0, -7.0, -7.0);
    let mut dst = vec![sentinel; 3];

    assert_eq!(
        conv.convert_many(&src, &mut dst),
        Err(ColorError::DestinationTooShort {
            source_len: 4,
            destination_len: 3,
        })
    );
    assert!(dst.iter().all(|c| *c == sentinel));

    #[cfg(feature = "parallel")]
    {
        assert!(conv.par_convert_many(&src, &mut dst).is_err());
        assert!(dst.iter().all(|c| *c == sentinel));
    }
}

#[test]
fn test_shared_across_threads() {
    let conv = ColorSpaceConverter::default();
    let expected = conv.to_cie_lab(Rgb::with_working_space(0.3, 0.6, 0.2, ECI_RGB_V2));

    std::thread::scope(|s| {
        for i in 0..4 {
            let conv = &conv;
            s.spawn(move || {
                // Alternate working spaces so the cache keeps being replaced.
                for _ in 0..200 {
                    let ws = if i % 2 == 0 { ECI_RGB_V2 } else { ADOBE_RGB_1998 };
                    let lab = conv.to_cie_lab(Rgb::with_working_space(0.3, 0.6, 0.2, ws));
                    if ws == ECI_RGB_V2 {
                        assert_eq!(lab, expected);
                    }
                }
            });
        }
    });
}
