//! Offline demo host: read a WAV, run the crystalizer over it, write a WAV.
//!
//! Usage: crystalize <input.wav> <output.wav> [intensity]
//!
//! Processes in fixed-size blocks so the filter's cross-call state is
//! exercised the same way a real-time host would.

use anyhow::{bail, Context, Result};
use crystalizer::Crystalizer;
use std::env;

const BLOCK_FRAMES: usize = 2048;

fn main() -> Result<()> {
  let args: Vec<String> = env::args().collect();
  if args.len() < 3 {
    eprintln!("Usage: crystalize <input.wav> <output.wav> [intensity]");
    std::process::exit(1);
  }
  let input_path = &args[1];
  let output_path = &args[2];

  let mut filter: Crystalizer = crystalizer::plugin::open();
  if let Some(raw) = args.get(3) {
    let v: f32 = raw.parse().with_context(|| format!("bad intensity {raw:?}"))?;
    filter.set_intensity(v);
  }

  let reader = hound::WavReader::open(input_path)
    .with_context(|| format!("failed to open {input_path}"))?;
  let spec = reader.spec();
  let channels = spec.channels as usize;
  if channels == 0 {
    bail!("{input_path} declares zero channels");
  }
  eprintln!(
    "Input: {} ch, {} Hz, {}-bit, intensity {}",
    channels, spec.sample_rate, spec.bits_per_sample, filter.intensity()
  );

  let samples = read_samples(reader, &spec).context("failed to decode samples")?;

  let out_spec = hound::WavSpec {
    channels: spec.channels,
    sample_rate: spec.sample_rate,
    bits_per_sample: 32,
    sample_format: hound::SampleFormat::Float,
  };
  let mut writer = hound::WavWriter::create(output_path, out_spec)
    .with_context(|| format!("failed to create {output_path}"))?;

  let mut buf = samples;
  for block in buf.chunks_mut(BLOCK_FRAMES * channels) {
    let nframes = block.len() / channels;
    filter.process(block, nframes, channels);
    for &s in block.iter() {
      writer.write_sample(s)?;
    }
  }
  writer.finalize().context("failed to finalize output")?;
  eprintln!("Written {} ({} frames)", output_path, buf.len() / channels);
  Ok(())
}

fn read_samples(reader: hound::WavReader<std::io::BufReader<std::fs::File>>, spec: &hound::WavSpec) -> Result<Vec<f32>> {
  let samples = match spec.sample_format {
    hound::SampleFormat::Int => {
      let max_val = (1_i64 << (spec.bits_per_sample - 1)) as f32;
      reader
        .into_samples::<i32>()
        .map(|s| Ok(s? as f32 / max_val))
        .collect::<Result<Vec<f32>>>()?
    }
    hound::SampleFormat::Float => reader
      .into_samples::<f32>()
      .map(|s| Ok(s?))
      .collect::<Result<Vec<f32>>>()?,
  };
  Ok(samples)
}
