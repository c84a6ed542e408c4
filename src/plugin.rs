use serde::Serialize;

use crate::dsp::crystalizer::Crystalizer;
use crate::params::PARAM_INTENSITY;

/// Discovery metadata a host reads before opening the filter. Built once as a
/// constant; nothing here mutates at runtime.
#[derive(Clone, Debug, Serialize)]
pub struct PluginInfo {
  pub id: &'static str,
  pub name: &'static str,
  pub descr: &'static str,
  pub version_major: u32,
  pub version_minor: u32,
}

/// Declarative hint for one numeric settings control.
#[derive(Clone, Debug, Serialize)]
pub struct ControlHint {
  pub label: &'static str,
  pub min: f32,
  pub max: f32,
  pub step: f32,
  pub default: f32,
}

pub const PLUGIN_INFO: PluginInfo = PluginInfo {
  id: "crystalizer",
  name: "Crystalizer",
  descr: "Crystalizer DSP Plugin",
  version_major: 0,
  version_minor: 1,
};

/// Settings-dialog hint for the Intensity control. Note the dialog prefill
/// (0.5) differs from the runtime default (0.1); the mismatch is
/// long-standing and kept as-is.
pub const INTENSITY_CONTROL: ControlHint = ControlHint {
  label: "Intensity",
  min: 0.0,
  max: 10.0,
  step: 0.1,
  default: 0.5,
};

pub fn plugin_info() -> &'static PluginInfo { &PLUGIN_INFO }

/// The settings dialog in the host's declarative control syntax.
pub fn config_dialog() -> String {
  let c = &INTENSITY_CONTROL;
  format!(
    "property \"{}\" spinbtn[{},{},{}] {} {};\n",
    c.label, c.min, c.max, c.step, PARAM_INTENSITY, c.default
  )
}

/// Factory a host calls after descriptor lookup.
pub fn open() -> Crystalizer {
  Crystalizer::new()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::dsp::crystalizer::DEFAULT_INTENSITY;

  #[test]
  fn descriptor_is_stable() {
    let info = plugin_info();
    assert_eq!(info.id, "crystalizer");
    assert_eq!(info.name, "Crystalizer");
    assert_eq!((info.version_major, info.version_minor), (0, 1));
  }

  #[test]
  fn dialog_text_matches_control_hint() {
    assert_eq!(config_dialog(), "property \"Intensity\" spinbtn[0,10,0.1] 0 0.5;\n");
  }

  #[test]
  fn descriptor_serializes_for_host_discovery() {
    let json = serde_json::to_value(plugin_info()).unwrap();
    assert_eq!(json["id"], "crystalizer");
    assert_eq!(json["descr"], "Crystalizer DSP Plugin");
  }

  #[test]
  fn open_yields_fresh_state() {
    let f = open();
    assert_eq!(f.intensity(), DEFAULT_INTENSITY);
    assert_eq!(f.channels(), 0);
  }
}
