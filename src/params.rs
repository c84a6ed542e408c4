use log::warn;
use thiserror::Error;

use crate::dsp::crystalizer::Crystalizer;

pub const PARAM_INTENSITY: usize = 0;
pub const PARAM_COUNT: usize = 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamError {
  #[error("invalid param index ({0})")]
  InvalidIndex(usize),
}

pub fn num_params() -> usize { PARAM_COUNT }

/// Display name of a parameter. Out-of-range indices are logged and rejected,
/// never fatal.
pub fn param_name(index: usize) -> Result<&'static str, ParamError> {
  match index {
    PARAM_INTENSITY => Ok("Intensity"),
    _ => {
      warn!("param_name: invalid param index ({index})");
      Err(ParamError::InvalidIndex(index))
    }
  }
}

impl Crystalizer {
  /// Set a parameter from its text form, as received from a host's settings
  /// layer. Text that does not parse as a float keeps the previous value.
  pub fn set_param(&mut self, index: usize, value: &str) -> Result<(), ParamError> {
    match index {
      PARAM_INTENSITY => {
        match value.trim().parse::<f32>() {
          Ok(v) => self.set_intensity(v),
          Err(_) => warn!("set_param: unparseable intensity {value:?}, keeping {}", self.intensity()),
        }
        Ok(())
      }
      _ => {
        warn!("set_param: invalid param index ({index})");
        Err(ParamError::InvalidIndex(index))
      }
    }
  }

  /// Current parameter value in text form, six decimal places.
  pub fn get_param(&self, index: usize) -> Result<String, ParamError> {
    match index {
      PARAM_INTENSITY => Ok(format!("{:.6}", self.intensity())),
      _ => {
        warn!("get_param: invalid param index ({index})");
        Err(ParamError::InvalidIndex(index))
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn names_and_count() {
    assert_eq!(num_params(), 1);
    assert_eq!(param_name(PARAM_INTENSITY), Ok("Intensity"));
    assert_eq!(param_name(7), Err(ParamError::InvalidIndex(7)));
  }

  #[test]
  fn set_and_get_roundtrip() {
    let mut f = Crystalizer::new();
    f.set_param(PARAM_INTENSITY, "0.25").unwrap();
    assert_eq!(f.intensity(), 0.25);
    assert_eq!(f.get_param(PARAM_INTENSITY).unwrap(), "0.250000");
  }

  #[test]
  fn default_formats_like_printf() {
    let f = Crystalizer::new();
    assert_eq!(f.get_param(PARAM_INTENSITY).unwrap(), "0.100000");
  }

  #[test]
  fn malformed_text_keeps_previous_value() {
    let mut f = Crystalizer::new();
    f.set_param(PARAM_INTENSITY, "2.0").unwrap();
    f.set_param(PARAM_INTENSITY, "not a number").unwrap();
    assert_eq!(f.intensity(), 2.0);
  }

  #[test]
  fn out_of_range_index_is_rejected() {
    let mut f = Crystalizer::new();
    assert_eq!(f.set_param(3, "1.0"), Err(ParamError::InvalidIndex(3)));
    assert_eq!(f.get_param(3), Err(ParamError::InvalidIndex(3)));
    // The filter is untouched by the failed set.
    assert_eq!(f.intensity(), crate::dsp::crystalizer::DEFAULT_INTENSITY);
  }
}
