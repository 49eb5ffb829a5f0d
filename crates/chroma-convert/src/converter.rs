//! The conversion orchestrator.
//!
//! [`ColorSpaceConverter`] holds the reference whites, the target RGB
//! working space and the adaptation strategy, and routes every pairwise
//! conversion through them.
//!
//! # Example
//!
//! ```rust
//! use chroma_convert::{ColorSpaceConverter, ConverterOptions};
//! use chroma_core::{illuminant, CieLab, Rgb};
//!
//! let conv = ColorSpaceConverter::new(
//!     ConverterOptions::default().with_target_lab_white_point(illuminant::D65),
//! )
//! .unwrap();
//!
//! let lab: CieLab = conv.to_cie_lab(Rgb::new(1.0, 1.0, 1.0));
//! assert!((lab.l - 100.0).abs() < 1e-3);
//! assert_eq!(lab.white_point, illuminant::D65);
//! ```

use std::sync::{Arc, PoisonError, RwLock};

use chroma_core::{
    illuminant, CieLab, CieLch, CieLchuv, CieLuv, CieXyy, CieXyz, Cmyk, Hsl, Hsv, HunterLab,
    LinearRgb, Lms, Rgb, RgbWorkingSpace, YCbCr,
};
use chroma_math::{Mat3, BRADFORD};
use tracing::{debug, trace};

use crate::adaptation::{ChromaticAdaptation, VonKriesAdaptation};
use crate::converters::{
    hunter_lab_to_xyz, lab_to_xyz, linear_to_rgb, luv_to_xyz, rgb_to_linear, xyz_to_hunter_lab,
    xyz_to_lab, xyz_to_luv, CieXyzAndLmsConverter, LinearRgbToXyz, XyzToLinearRgb,
};
use crate::error::{ColorError, ColorResult};
use crate::hub::FromColor;

// ============================================================================
// Options
// ============================================================================

/// Converter configuration.
///
/// Built with [`Default`] and the consuming `with_*` methods, then handed
/// to [`ColorSpaceConverter::new`], which validates it.
#[derive(Debug, Clone)]
pub struct ConverterOptions {
    /// White of XYZ, xyY and LMS values. Default: D65.
    pub white_point: CieXyz,
    /// White that Lab and LCh(ab) outputs are relative to. Default: D50.
    pub target_lab_white_point: CieXyz,
    /// White that Luv and LCh(uv) outputs are relative to. Default: D65.
    pub target_luv_white_point: CieXyz,
    /// White that Hunter Lab outputs are relative to. Default: C.
    pub target_hunter_lab_white_point: CieXyz,
    /// Working space of RGB-family outputs. Default: sRGB.
    pub target_rgb_working_space: RgbWorkingSpace,
    /// XYZ -> LMS matrix for conversions to and from [`Lms`]. Default: Bradford.
    pub lms_matrix: Mat3,
    /// Adaptation strategy. `None` disables adaptation entirely.
    pub adaptation: Option<Arc<dyn ChromaticAdaptation>>,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            white_point: illuminant::D65,
            target_lab_white_point: illuminant::D50,
            target_luv_white_point: illuminant::D65,
            target_hunter_lab_white_point: illuminant::C,
            target_rgb_working_space: RgbWorkingSpace::default(),
            lms_matrix: BRADFORD,
            adaptation: Some(Arc::new(VonKriesAdaptation::bradford())),
        }
    }
}

impl ConverterOptions {
    /// Sets the white of XYZ, xyY and LMS values.
    pub fn with_white_point(mut self, white: CieXyz) -> Self {
        self.white_point = white;
        self
    }

    /// Sets the target white of Lab and LCh(ab) outputs.
    pub fn with_target_lab_white_point(mut self, white: CieXyz) -> Self {
        self.target_lab_white_point = white;
        self
    }

    /// Sets the target white of Luv and LCh(uv) outputs.
    pub fn with_target_luv_white_point(mut self, white: CieXyz) -> Self {
        self.target_luv_white_point = white;
        self
    }

    /// Sets the target white of Hunter Lab outputs.
    pub fn with_target_hunter_lab_white_point(mut self, white: CieXyz) -> Self {
        self.target_hunter_lab_white_point = white;
        self
    }

    /// Sets the working space of RGB-family outputs.
    pub fn with_target_rgb_working_space(mut self, working_space: RgbWorkingSpace) -> Self {
        self.target_rgb_working_space = working_space;
        self
    }

    /// Sets the XYZ -> LMS matrix.
    pub fn with_lms_matrix(mut self, matrix: Mat3) -> Self {
        self.lms_matrix = matrix;
        self
    }

    /// Sets the adaptation strategy.
    pub fn with_adaptation(mut self, adaptation: impl ChromaticAdaptation + 'static) -> Self {
        self.adaptation = Some(Arc::new(adaptation));
        self
    }

    /// Disables adaptation. Values keep their numbers when whites differ.
    pub fn without_adaptation(mut self) -> Self {
        self.adaptation = None;
        self
    }
}

// ============================================================================
// Converter
// ============================================================================

/// Converts colors between every pair of supported spaces.
///
/// Configuration is fixed at construction. All methods take `&self`, and
/// the converter is `Send + Sync`, so one instance can serve many threads.
///
/// The only interior state is a single-entry cache of the linear RGB ->
/// XYZ converter for the last working space seen on input.
#[derive(Debug)]
pub struct ColorSpaceConverter {
    options: ConverterOptions,
    lms: CieXyzAndLmsConverter,
    xyz_to_target_rgb: XyzToLinearRgb,
    cache: RwLock<Option<Arc<LinearRgbToXyz>>>,
}

impl ColorSpaceConverter {
    /// Validates `options` and builds a converter.
    ///
    /// # Errors
    ///
    /// - [`ColorError::InvalidWhitePoint`] if any configured white, including
    ///   the target working space white, is non-finite or not strictly positive
    /// - [`ColorError::SingularMatrix`] if the LMS matrix or the target
    ///   working space matrix cannot be inverted
    pub fn new(options: ConverterOptions) -> ColorResult<Self> {
        let whites = [
            ("white_point", options.white_point),
            ("target_lab_white_point", options.target_lab_white_point),
            ("target_luv_white_point", options.target_luv_white_point),
            ("target_hunter_lab_white_point", options.target_hunter_lab_white_point),
            (
                "target_rgb_working_space",
                CieXyz::from_vec3(options.target_rgb_working_space.white),
            ),
        ];
        for (name, value) in whites {
            if !value.is_valid_white() {
                return Err(ColorError::InvalidWhitePoint { name, value });
            }
        }

        let lms = CieXyzAndLmsConverter::new(options.lms_matrix)
            .ok_or(ColorError::SingularMatrix("LMS matrix"))?;

        if options.target_rgb_working_space.xyz_to_rgb_matrix().is_none() {
            return Err(ColorError::SingularMatrix("target RGB working space"));
        }

        debug!(
            white_point = ?options.white_point.to_array(),
            lab_white = ?options.target_lab_white_point.to_array(),
            luv_white = ?options.target_luv_white_point.to_array(),
            hunter_white = ?options.target_hunter_lab_white_point.to_array(),
            working_space = options.target_rgb_working_space.name,
            adaptation = options.adaptation.is_some(),
            "color space converter created"
        );

        Ok(Self::build(options, lms))
    }

    fn build(options: ConverterOptions, lms: CieXyzAndLmsConverter) -> Self {
        let xyz_to_target_rgb = XyzToLinearRgb::new(options.target_rgb_working_space);
        Self {
            options,
            lms,
            xyz_to_target_rgb,
            cache: RwLock::new(None),
        }
    }

    /// The configuration this converter was built with.
    #[inline]
    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    /// Working space of RGB-family outputs.
    #[inline]
    pub fn target_working_space(&self) -> &RgbWorkingSpace {
        &self.options.target_rgb_working_space
    }

    /// The XYZ <-> LMS converter built from the configured matrix.
    #[inline]
    pub fn lms_converter(&self) -> &CieXyzAndLmsConverter {
        &self.lms
    }

    #[inline]
    pub(crate) fn xyz_to_target_rgb(&self) -> &XyzToLinearRgb {
        &self.xyz_to_target_rgb
    }

    // ------------------------------------------------------------------------
    // Working space cache
    // ------------------------------------------------------------------------

    /// Linear RGB -> XYZ converter for `working_space`, from the cache when
    /// it matches.
    pub(crate) fn linear_rgb_to_xyz(&self, working_space: RgbWorkingSpace) -> LinearRgbToXyz {
        let hit = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .filter(|cached| *cached.working_space() == working_space)
            .map(|cached| **cached);
        if let Some(converter) = hit {
            return converter;
        }

        trace!(working_space = working_space.name, "rebuilding linear RGB cache");
        let fresh = Arc::new(LinearRgbToXyz::new(working_space));
        *self.cache.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&fresh));
        *fresh
    }

    /// Working space currently held by the linear RGB cache.
    pub fn cached_working_space(&self) -> Option<RgbWorkingSpace> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|cached| *cached.working_space())
    }

    // ------------------------------------------------------------------------
    // Adaptation
    // ------------------------------------------------------------------------

    #[inline]
    fn adapts(&self) -> bool {
        self.options.adaptation.is_some()
    }

    /// Adapts `xyz` from `source_white` to `target_white` with the configured
    /// strategy. Returns `xyz` unchanged when adaptation is disabled.
    ///
    /// ```rust
    /// use chroma_convert::ColorSpaceConverter;
    /// use chroma_core::{illuminant, CieXyz};
    ///
    /// let conv = ColorSpaceConverter::default();
    /// let c = CieXyz::new(0.2, 0.3, 0.4);
    /// assert_eq!(conv.adapt(c, illuminant::D65, illuminant::D65), c);
    /// ```
    #[inline]
    pub fn adapt(&self, xyz: CieXyz, source_white: CieXyz, target_white: CieXyz) -> CieXyz {
        match &self.options.adaptation {
            Some(strategy) => strategy.adapt(xyz, source_white, target_white),
            None => xyz,
        }
    }

    /// Re-expresses a Lab value relative to the target Lab white.
    pub fn adapt_cie_lab(&self, lab: CieLab) -> CieLab {
        let target = self.options.target_lab_white_point;
        if !self.adapts() || lab.white_point == target {
            return lab;
        }
        let xyz = self.adapt(lab_to_xyz(lab), lab.white_point, target);
        xyz_to_lab(xyz, target)
    }

    /// Re-expresses an LCh(ab) value relative to the target Lab white.
    pub fn adapt_cie_lch(&self, lch: CieLch) -> CieLch {
        if !self.adapts() || lch.white_point == self.options.target_lab_white_point {
            return lch;
        }
        CieLch::from_lab(self.adapt_cie_lab(CieLab::from_lch(lch)))
    }

    /// Re-expresses a Luv value relative to the target Luv white.
    pub fn adapt_cie_luv(&self, luv: CieLuv) -> CieLuv {
        let target = self.options.target_luv_white_point;
        if !self.adapts() || luv.white_point == target {
            return luv;
        }
        let xyz = self.adapt(luv_to_xyz(luv), luv.white_point, target);
        xyz_to_luv(xyz, target)
    }

    /// Re-expresses an LCh(uv) value relative to the target Luv white.
    pub fn adapt_cie_lchuv(&self, lch: CieLchuv) -> CieLchuv {
        if !self.adapts() || lch.white_point == self.options.target_luv_white_point {
            return lch;
        }
        CieLchuv::from_luv(self.adapt_cie_luv(CieLuv::from_lchuv(lch)))
    }

    /// Re-expresses a Hunter Lab value relative to the target Hunter white.
    pub fn adapt_hunter_lab(&self, hunter: HunterLab) -> HunterLab {
        let target = self.options.target_hunter_lab_white_point;
        if !self.adapts() || hunter.white_point == target {
            return hunter;
        }
        let xyz = self.adapt(hunter_lab_to_xyz(hunter), hunter.white_point, target);
        xyz_to_hunter_lab(xyz, target)
    }

    /// Re-expresses linear RGB in the target working space.
    ///
    /// Values already in the target space, or any value when adaptation is
    /// disabled, are returned unchanged.
    pub fn adapt_linear_rgb(&self, lin: LinearRgb) -> LinearRgb {
        let target = self.options.target_rgb_working_space;
        if !self.adapts() || lin.working_space == target {
            return lin;
        }
        let xyz = self.linear_rgb_to_xyz(lin.working_space).convert(lin);
        let xyz = self.adapt(
            xyz,
            CieXyz::from_vec3(lin.working_space.white),
            CieXyz::from_vec3(target.white),
        );
        self.xyz_to_target_rgb.convert(xyz)
    }

    /// Re-expresses companded RGB in the target working space.
    pub fn adapt_rgb(&self, rgb: Rgb) -> Rgb {
        if !self.adapts() || rgb.working_space == self.options.target_rgb_working_space {
            return rgb;
        }
        linear_to_rgb(self.adapt_linear_rgb(rgb_to_linear(rgb)))
    }

    // ------------------------------------------------------------------------
    // Pairwise conversions
    // ------------------------------------------------------------------------

    /// Converts `source` to `T`.
    ///
    /// ```rust
    /// use chroma_convert::ColorSpaceConverter;
    /// use chroma_core::{Hsv, Rgb};
    ///
    /// let conv = ColorSpaceConverter::default();
    /// let hsv: Hsv = conv.convert(Rgb::new(0.0, 0.0, 1.0));
    /// assert_eq!(hsv.h, 240.0);
    /// ```
    #[inline]
    pub fn convert<S, T>(&self, source: S) -> T
    where
        T: FromColor<S>,
    {
        T::from_color(self, source)
    }
}

macro_rules! named_conversions {
    ($($(#[$doc:meta])* $name:ident => $dst:ty;)+) => {
        impl ColorSpaceConverter {
            $(
                $(#[$doc])*
                #[inline]
                pub fn $name<S>(&self, source: S) -> $dst
                where
                    $dst: FromColor<S>,
                {
                    <$dst>::from_color(self, source)
                }
            )+
        }
    };
}

named_conversions! {
    /// Converts any supported value to CIE XYZ relative to `white_point`.
    to_cie_xyz => CieXyz;
    /// Converts any supported value to CIE xyY relative to `white_point`.
    to_cie_xyy => CieXyy;
    /// Converts any supported value to CIE Lab relative to the target Lab white.
    to_cie_lab => CieLab;
    /// Converts any supported value to CIE LCh(ab) relative to the target Lab white.
    to_cie_lch => CieLch;
    /// Converts any supported value to CIE Luv relative to the target Luv white.
    to_cie_luv => CieLuv;
    /// Converts any supported value to CIE LCh(uv) relative to the target Luv white.
    to_cie_lchuv => CieLchuv;
    /// Converts any supported value to Hunter Lab relative to the target Hunter white.
    to_hunter_lab => HunterLab;
    /// Converts any supported value to LMS with the configured matrix.
    to_lms => Lms;
    /// Converts any supported value to linear RGB in the target working space.
    to_linear_rgb => LinearRgb;
    /// Converts any supported value to companded RGB in the target working space.
    to_rgb => Rgb;
    /// Converts any supported value to HSL over the target working space.
    to_hsl => Hsl;
    /// Converts any supported value to HSV over the target working space.
    to_hsv => Hsv;
    /// Converts any supported value to CMYK over the target working space.
    to_cmyk => Cmyk;
    /// Converts any supported value to JFIF YCbCr over the target working space.
    to_ycbcr => YCbCr;
}

impl Default for ColorSpaceConverter {
    fn default() -> Self {
        Self::build(ConverterOptions::default(), CieXyzAndLmsConverter::bradford())
    }
}
