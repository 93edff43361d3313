//! Output selection.
//!
//! Each output of a measurement is opt-in; work feeding only unrequested
//! outputs is skipped.

/// Which results [`measure_hdr`](crate::measure_hdr) should produce.
///
/// ```rust
/// use hilux_analyze::Outputs;
///
/// let outputs = Outputs::none().with_stats().with_percentiles();
/// assert!(outputs.stats && outputs.percentiles);
/// assert!(!outputs.image);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outputs {
    /// False-color preview image.
    pub image: bool,
    /// Aggregate statistics.
    pub stats: bool,
    /// One record per pixel.
    pub pixel_info: bool,
    /// Percentile table.
    pub percentiles: bool,
}

impl Outputs {
    /// Every output.
    pub const fn all() -> Self {
        Self { image: true, stats: true, pixel_info: true, percentiles: true }
    }

    /// No outputs.
    pub const fn none() -> Self {
        Self { image: false, stats: false, pixel_info: false, percentiles: false }
    }

    /// Adds the preview image.
    pub const fn with_image(mut self) -> Self {
        self.image = true;
        self
    }

    /// Adds aggregate statistics.
    pub const fn with_stats(mut self) -> Self {
        self.stats = true;
        self
    }

    /// Adds per-pixel records.
    pub const fn with_pixel_info(mut self) -> Self {
        self.pixel_info = true;
        self
    }

    /// Adds the percentile table.
    pub const fn with_percentiles(mut self) -> Self {
        self.percentiles = true;
        self
    }

    /// Returns `true` if nothing is requested.
    pub const fn is_empty(&self) -> bool {
        !(self.image || self.stats || self.pixel_info || self.percentiles)
    }

    /// Overbright ratios and luminance ceilings are needed.
    pub(crate) const fn needs_overbright(&self) -> bool {
        self.image || self.stats || self.pixel_info
    }

    /// Classification counters are needed.
    pub(crate) const fn needs_counts(&self) -> bool {
        self.image || self.stats
    }
}
