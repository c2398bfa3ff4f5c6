//! sfxgen synthesis engine
//!
//! Renders short procedural sound effects ("coin pickup", "explosion", ...)
//! from a compact [`ParameterSet`], in the tradition of sfxr.
//!
//! # Overview
//!
//! - **Parameters** - a plain record of ~45 controls, 19 preset generators,
//!   morphing and mutation
//! - **Renderer** - oscillator, envelope, arpeggiator and frequency
//!   modulation run one sample at a time
//! - **Effects** - sub-bass, ring modulation, one-pole filters, distortion,
//!   bit-crush, chorus, echo and flanger inside the same loop
//! - **Post-processing** - sample-rate and bit-depth reduction
//! - **WAV** - deterministic 8/16-bit mono encoding and decoding
//! - **Codec** - URL-safe share codes
//!
//! # Determinism
//!
//! All randomness comes from a caller-supplied [`rand::Rng`]. With
//! [`render_seeded`] the output is byte-identical across runs for the same
//! parameters and seed: noise and arpeggio draws use PCG32 streams derived
//! from the seed with BLAKE3.
//!
//! # Example
//!
//! ```
//! use sfxgen_core::{render_seeded, wav, Preset, RenderOptions};
//! use sfxgen_core::rng::create_rng;
//!
//! let params = Preset::PickupCoin.generate(&mut create_rng(7));
//! let buffer = render_seeded(&params, &RenderOptions::default(), 7).unwrap();
//! let encoded = wav::encode_wav(&buffer);
//! assert_eq!(encoded.num_samples, 66150);
//! ```

pub mod codec;
pub mod effects;
pub mod envelope;
pub mod error;
pub mod noise;
pub mod params;
pub mod post;
pub mod render;
pub mod rng;
pub mod wav;

// Re-export main types at crate root
pub use error::{CodecError, SynthError, SynthResult};
pub use params::presets::preset;
pub use params::{NoiseType, ParameterSet, Preset, WaveType};
pub use render::{render, render_seeded, RenderOptions, RenderedBuffer};
pub use wav::{decode_wav, encode_wav, WavResult};
