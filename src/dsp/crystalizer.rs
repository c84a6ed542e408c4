/// Default intensity a freshly opened filter starts with. A settings UI may
/// suggest a different prefill; see `plugin::INTENSITY_CONTROL`.
pub const DEFAULT_INTENSITY: f32 = 0.1;

/// Per-channel high-frequency enhancement filter.
///
/// Each output sample is the input plus the difference to the previous input
/// on the same channel, scaled by `intensity`:
///
/// `out = x + (x - prev) * intensity`
///
/// The memory is the raw input, not the output, so the emphasis is always
/// relative to the true previous sample and never compounds.
pub struct Crystalizer {
  intensity: f32,
  channels: usize,
  prev: Vec<f32>,
}

impl Crystalizer {
  pub fn new() -> Self {
    Self { intensity: DEFAULT_INTENSITY, channels: 0, prev: Vec::new() }
  }

  pub fn intensity(&self) -> f32 { self.intensity }

  /// No clamping here; a host UI may restrict the range it offers.
  pub fn set_intensity(&mut self, v: f32) { self.intensity = v; }

  /// Channel count resolved by the last `process` call (0 until first use).
  pub fn channels(&self) -> usize { self.channels }

  /// Zero the per-channel memory. Intensity and channel count are untouched.
  pub fn reset(&mut self) {
    for p in self.prev.iter_mut() { *p = 0.0; }
  }

  fn set_channels(&mut self, channels: usize) {
    if channels == 0 {
      self.channels = 0;
      self.prev.clear();
      return;
    }
    let grow = channels.saturating_sub(self.prev.len());
    if self.prev.try_reserve(grow).is_ok() {
      // New lanes start from silence.
      self.prev.resize(channels, 0.0);
      self.channels = channels;
    } else {
      // Out of memory: degrade to zero channels instead of glitching the
      // stream. Retried on the next call.
      self.channels = 0;
    }
  }

  /// Transform one interleaved block in place and return `nframes`.
  ///
  /// `samples` must hold at least `nframes * channels` values laid out
  /// frame-major, channel-minor. A `channels` value that differs from the
  /// previous call re-sizes the per-channel memory first. If that resize
  /// fails, the block is left unmodified for this call; the return value is
  /// still `nframes`.
  pub fn process(&mut self, samples: &mut [f32], nframes: usize, channels: usize) -> usize {
    if channels != self.channels {
      self.set_channels(channels);
    }
    debug_assert!(samples.len() >= nframes * channels);
    for i in 0..nframes {
      let base = i * channels;
      for c in 0..self.channels {
        let current = samples[base + c];
        samples[base + c] = current + (current - self.prev[c]) * self.intensity;
        self.prev[c] = current;
      }
    }
    nframes
  }
}

impl Default for Crystalizer {
  fn default() -> Self { Self::new() }
}
