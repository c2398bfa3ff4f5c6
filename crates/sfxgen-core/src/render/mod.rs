//! The per-sample render loop.
//!
//! Each call builds fresh oscillator, envelope and effects state, runs it for
//! `round(sample_rate * duration)` samples and hands the result to the
//! post-processor. Nothing is shared between calls.

mod buffer;
mod options;
mod voice;


use rand::Rng;

use crate::effects::{EffectsChain, SampleContext};
use crate::envelope::Envelope;
use crate::error::SynthResult;
use crate::noise::generate_noise;
use crate::params::{ParameterSet, WaveType};
use crate::post::post_process;
use crate::rng::create_component_rng;

pub use buffer::RenderedBuffer;
pub use options::{
    RenderOptions, DEFAULT_DURATION, DEFAULT_SAMPLE_RATE, MAX_DURATION, MAX_SAMPLE_RATE,
    MIN_DURATION, MIN_SAMPLE_RATE,
};
pub use voice::{Voice, VoiceOutput, MAX_FREQ_HZ, MIN_FREQ_HZ};

/// Renders a parameter set.
///
/// `rng` supplies the noise buffer and the arpeggiator draws. Parameters are
/// validated first, so any finite or non-finite input produces a buffer;
/// only an invalid duration or sample rate fails.
///
/// # Arguments
/// * `params` - Sound description
/// * `options` - Duration, engine rate and lo-fi targets
/// * `rng` - Source of uniform randomness
///
/// # Returns
/// The rendered and post-processed buffer
pub fn render<R: Rng + ?Sized>(
    params: &ParameterSet,
    options: &RenderOptions,
    rng: &mut R,
) -> SynthResult<RenderedBuffer> {
    let num_samples = options.num_samples()?;
    let params = params.validated();
    let noise = noise_buffer(&params, num_samples, rng);
    Ok(synthesize(&params, options, num_samples, noise, rng))
}

/// Renders with a seed, drawing noise and arpeggio values from separate
/// derived streams.
///
/// The same seed and inputs always produce the same samples.
pub fn render_seeded(
    params: &ParameterSet,
    options: &RenderOptions,
    seed: u32,
) -> SynthResult<RenderedBuffer> {
    let num_samples = options.num_samples()?;
    let params = params.validated();

    let mut noise_rng = create_component_rng(seed, "noise");
    let mut arp_rng = create_component_rng(seed, "arpeggio");

    let noise = noise_buffer(&params, num_samples, &mut noise_rng);
    Ok(synthesize(&params, options, num_samples, noise, &mut arp_rng))
}

/// Pre-generates noise when the noise waveform is selected.
fn noise_buffer<R: Rng + ?Sized>(params: &ParameterSet, num_samples: usize, rng: &mut R) -> Vec<f64> {
    if params.wave_type == WaveType::Noise {
        generate_noise(params.noise_type, num_samples, rng)
    } else {
        Vec::new()
    }
}

/// Runs the sample loop. `params` must already be validated and `options`
/// checked.
fn synthesize<R: Rng + ?Sized>(
    params: &ParameterSet,
    options: &RenderOptions,
    num_samples: usize,
    noise: Vec<f64>,
    rng: &mut R,
) -> RenderedBuffer {
    let sample_rate = f64::from(options.sample_rate);

    let envelope = Envelope::from_params(params, sample_rate);
    let mut voice = Voice::new(params, sample_rate, noise);
    let mut chain = EffectsChain::from_params(params, sample_rate);

    let mut samples = Vec::with_capacity(num_samples);
    for i in 0..num_samples {
        let time = i as f64 / sample_rate;
        let osc = voice.next_sample(i, time, rng);
        let wet = chain.process(osc.sample, SampleContext { freq: osc.freq, time });
        samples.push(chain.finish(wet, envelope.level(i)));
    }

    post_process(RenderedBuffer::new(options.sample_rate, samples), options)
}
