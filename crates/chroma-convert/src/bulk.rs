//! Buffer conversions.
//!
//! Element `i` of the destination is exactly the scalar result for
//! `source[i]`. Destination slots past `source.len()` are left untouched.
//!
//! # Example
//!
//! ```rust
//! use chroma_convert::ColorSpaceConverter;
//! use chroma_core::{CieLab, Rgb};
//!
//! let conv = ColorSpaceConverter::default();
//! let pixels = [Rgb::new(1.0, 0.0, 0.0), Rgb::new(0.0, 1.0, 0.0)];
//! let mut out = [CieLab::default(); 2];
//! conv.to_cie_lab_many(&pixels, &mut out).unwrap();
//! assert_eq!(out[1], conv.to_cie_lab(pixels[1]));
//! ```

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::trace;

use chroma_core::{
    CieLab, CieLch, CieLchuv, CieLuv, CieXyy, CieXyz, Cmyk, Hsl, Hsv, HunterLab, LinearRgb, Lms,
    Rgb, YCbCr,
};

use crate::converter::ColorSpaceConverter;
use crate::error::{ColorError, ColorResult};
use crate::hub::FromColor;

#[inline]
fn check_len(source_len: usize, destination_len: usize) -> ColorResult<()> {
    if destination_len < source_len {
        return Err(ColorError::DestinationTooShort {
            source_len,
            destination_len,
        });
    }
    Ok(())
}

impl ColorSpaceConverter {
    /// Converts every element of `source` into the matching slot of
    /// `destination`.
    ///
    /// # Errors
    ///
    /// [`ColorError::DestinationTooShort`] if `destination` is shorter than
    /// `source`. Nothing is written in that case.
    pub fn convert_many<S, T>(&self, source: &[S], destination: &mut [T]) -> ColorResult<()>
    where
        S: Copy,
        T: FromColor<S>,
    {
        check_len(source.len(), destination.len())?;
        trace!(count = source.len(), "convert_many");

        for (dst, &src) in destination.iter_mut().zip(source) {
            *dst = T::from_color(self, src);
        }
        Ok(())
    }

    /// [`convert_many`](Self::convert_many) spread over the rayon thread pool.
    ///
    /// Produces the same output as the sequential form.
    #[cfg(feature = "parallel")]
    pub fn par_convert_many<S, T>(&self, source: &[S], destination: &mut [T]) -> ColorResult<()>
    where
        S: Copy + Sync,
        T: FromColor<S> + Send,
    {
        check_len(source.len(), destination.len())?;
        trace!(count = source.len(), "par_convert_many");

        destination[..source.len()]
            .par_iter_mut()
            .zip(source.par_iter())
            .for_each(|(dst, &src)| *dst = T::from_color(self, src));
        Ok(())
    }
}

macro_rules! named_bulk_conversions {
    ($($name:ident => $dst:ty;)+) => {
        impl ColorSpaceConverter {
            $(
                #[doc = concat!("Bulk form of [`", stringify!($dst), "`] conversion; see [`convert_many`](Self::convert_many).")]
                #[inline]
                pub fn $name<S>(&self, source: &[S], destination: &mut [$dst]) -> ColorResult<()>
                where
                    S: Copy,
                    $dst: FromColor<S>,
                {
                    self.convert_many(source, destination)
                }
            )+
        }
    };
}

named_bulk_conversions! {
    to_cie_xyz_many => CieXyz;
    to_cie_xyy_many => CieXyy;
    to_cie_lab_many => CieLab;
    to_cie_lch_many => CieLch;
    to_cie_luv_many => CieLuv;
    to_cie_lchuv_many => CieLchuv;
    to_hunter_lab_many => HunterLab;
    to_lms_many => Lms;
    to_linear_rgb_many => LinearRgb;
    to_rgb_many => Rgb;
    to_hsl_many => Hsl;
    to_hsv_many => Hsv;
    to_cmyk_many => Cmyk;
    to_ycbcr_many => YCbCr;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_destination_untouched() {
        let conv = ColorSpaceConverter::default();
        let src = [Rgb::new(0.1, 0.2, 0.3); 3];
        let sentinel = Hsv::new(-1.0, -1.0, -1.0);
        let mut dst = [sentinel; 2];

        let err = conv.to_hsv_many(&src, &mut dst).unwrap_err();
        assert_eq!(
            err,
            ColorError::DestinationTooShort {
                source_len: 3,
                destination_len: 2
            }
        );
        assert_eq!(dst, [sentinel; 2]);
    }

    #[test]
    fn test_extra_slots_untouched() {
        let conv = ColorSpaceConverter::default();
        let src = [CieXyz::new(0.2, 0.3, 0.4)];
        let sentinel = CieXyy::new(9.0, 9.0, 9.0);
        let mut dst = [sentinel; 3];

        conv.to_cie_xyy_many(&src, &mut dst).unwrap();
        assert_eq!(dst[0], conv.to_cie_xyy(src[0]));
        assert_eq!(&dst[1..], &[sentinel; 2]);
    }

    #[test]
    fn test_empty_source() {
        let conv = ColorSpaceConverter::default();
        let mut dst: [Lms; 0] = [];
        assert!(conv.to_lms_many::<CieXyz>(&[], &mut dst).is_ok());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let conv = ColorSpaceConverter::default();
        let src: Vec<Rgb> = (0..1000)
            .map(|i| {
                let t = i as f32 / 999.0;
                Rgb::new(t, 1.0 - t, (t * 7.0).fract())
            })
            .collect();

        let mut seq = vec![CieLab::default(); src.len()];
        let mut par = vec![CieLab::default(); src.len() + 1];
        conv.convert_many(&src, &mut seq).unwrap();
        conv.par_convert_many(&src, &mut par).unwrap();

        assert_eq!(&par[..src.len()], &seq[..]);
        assert_eq!(par[src.len()], CieLab::default());
    }
}
