use crate::constants::{FFT_SIZE_MAX, FFT_SIZE_MIN};
use crate::error::ConfigError;

/// Byte magnitudes of the current frequency analysis frame.
///
/// The length is fixed at construction (half the analyser window) and the
/// contents are overwritten in place every frame; no history is kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Spectrum {
    bins: Vec<u8>,
}

impl Spectrum {
    /// Silent spectrum sized for an analyser with the given FFT window.
    pub fn for_fft_size(fft_size: u32) -> Result<Self, ConfigError> {
        if !fft_size.is_power_of_two() || !(FFT_SIZE_MIN..=FFT_SIZE_MAX).contains(&fft_size) {
            return Err(ConfigError::InvalidFftSize(fft_size));
        }
        Ok(Self::with_bin_count(fft_size as usize / 2))
    }

    /// Silent spectrum with an explicit bin count (at least one bin).
    pub fn with_bin_count(bins: usize) -> Self {
        Self {
            bins: vec![0; bins.max(1)],
        }
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Buffer handed to the analyser to be filled for this frame.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bins
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bins
    }

    /// Overwrite from a slice; extra input is ignored and missing bins are zeroed.
    pub fn fill_from(&mut self, values: &[u8]) {
        let n = values.len().min(self.bins.len());
        self.bins[..n].copy_from_slice(&values[..n]);
        self.bins[n..].fill(0);
    }

    /// Slot read by the particle with the given index.
    #[inline]
    pub fn slot_for(&self, particle_index: usize) -> usize {
        particle_index % self.bins.len()
    }

    /// Normalized amplitude in \[0, 1\] for a particle index.
    #[inline]
    pub fn amplitude(&self, particle_index: usize) -> f32 {
        self.bins[self.slot_for(particle_index)] as f32 / 255.0
    }
}
