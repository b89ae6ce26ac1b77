//! Transformation chains
//!
//! A chain is an ordered list of transformations applied one after another,
//! index 0 first. Chains serialize to JSON so they can be stored alongside a
//! sound and replayed later.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::dsp::effects;
use crate::engine::Sound;
use crate::error::Result;

/// A single transformation step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Transform {
    /// Scale every sample
    Volume { factor: f64 },
    /// Play backwards
    Reverse,
    /// Swap the two halves
    Flipflop,
    /// Replace samples with random static
    Static { probability: f64 },
    /// Mix with a delayed copy
    Echo { delay_secs: f64 },
    /// Relabel the sample rate
    ChangeSpeed { rate: u32 },
}

impl Transform {
    /// Short identifier used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Volume { .. } => "volume",
            Transform::Reverse => "reverse",
            Transform::Flipflop => "flipflop",
            Transform::Static { .. } => "static",
            Transform::Echo { .. } => "echo",
            Transform::ChangeSpeed { .. } => "change_speed",
        }
    }

    /// Apply this step, drawing any randomness from `rng`
    pub fn apply_with_rng<R: Rng + ?Sized>(&self, sound: &Sound, rng: &mut R) -> Sound {
        match *self {
            Transform::Volume { factor } => effects::volume(sound, factor),
            Transform::Reverse => effects::reverse(sound),
            Transform::Flipflop => effects::flipflop(sound),
            Transform::Static { probability } => {
                effects::static_noise_with_rng(sound, probability, rng)
            }
            Transform::Echo { delay_secs } => effects::echo(sound, delay_secs),
            Transform::ChangeSpeed { rate } => effects::change_speed(sound, rate),
        }
    }

    /// Apply this step using the thread-local generator
    pub fn apply(&self, sound: &Sound) -> Sound {
        self.apply_with_rng(sound, &mut rand::thread_rng())
    }
}

/// Ordered list of transformations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformChain {
    transforms: Vec<Transform>,
}

impl TransformChain {
    /// Create a new empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step to the end of the chain
    pub fn push(&mut self, transform: Transform) {
        self.transforms.push(transform);
    }

    /// Builder-style [`push`](Self::push)
    pub fn then(mut self, transform: Transform) -> Self {
        self.push(transform);
        self
    }

    /// Get the number of steps in the chain
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Check if the chain is empty
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Iterate over steps in application order
    pub fn iter(&self) -> impl Iterator<Item = &Transform> {
        self.transforms.iter()
    }

    /// Run the whole chain, drawing any randomness from `rng`
    pub fn apply_with_rng<R: Rng + ?Sized>(&self, sound: &Sound, rng: &mut R) -> Sound {
        let mut current = sound.clone();
        for transform in &self.transforms {
            debug!("Applying {} to {} samples", transform.name(), current.len());
            current = transform.apply_with_rng(&current, rng);
        }
        current
    }

    /// Run the whole chain using the thread-local generator
    pub fn apply(&self, sound: &Sound) -> Sound {
        self.apply_with_rng(sound, &mut rand::thread_rng())
    }

    /// Serialize the chain to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a chain from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl FromIterator<Transform> for TransformChain {
    fn from_iter<I: IntoIterator<Item = Transform>>(iter: I) -> Self {
        Self {
            transforms: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::seeded_rng;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_chain_new() {
        let chain = TransformChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
    }

    #[test]
    fn test_empty_chain_passthrough() {
        let sound = Sound::new(vec![1.0, 2.0, 3.0], 8000);
        assert_eq!(TransformChain::new().apply(&sound), sound);
    }

    #[test]
    fn test_chain_applies_in_order() {
        let sound = Sound::new(vec![1.0, 2.0, 3.0, 4.0], 4);
        let chain = TransformChain::new()
            .then(Transform::Reverse)
            .then(Transform::Flipflop)
            .then(Transform::Volume { factor: 10.0 })
            .then(Transform::ChangeSpeed { rate: 8 });

        let out = chain.apply(&sound);
        assert_eq!(out.samples(), &[20.0, 10.0, 40.0, 30.0]);
        assert_eq!(out.rate(), 8);
    }

    #[test]
    fn test_chain_with_static_is_reproducible() {
        let sound = Sound::new(vec![0.0; 128], 8000);
        let chain: TransformChain = vec![
            Transform::Static { probability: 0.5 },
            Transform::Echo { delay_secs: 0.001 },
        ]
        .into_iter()
        .collect();

        let a = chain.apply_with_rng(&sound, &mut seeded_rng(11));
        let b = chain.apply_with_rng(&sound, &mut seeded_rng(11));
        assert_eq!(a, b);
    }

    #[test]
    fn test_json_tagging() {
        let chain = TransformChain::new()
            .then(Transform::Echo { delay_secs: 0.25 })
            .then(Transform::Reverse);

        let value: serde_json::Value = serde_json::from_str(&chain.to_json().unwrap()).unwrap();
        assert_eq!(value["transforms"][0]["type"], "echo");
        assert_eq!(value["transforms"][0]["delay_secs"], 0.25);
        assert_eq!(value["transforms"][1]["type"], "reverse");
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "transforms": [
                { "type": "volume", "factor": 0.5 },
                { "type": "change_speed", "rate": 22050 }
            ]
        }"#;

        let chain = TransformChain::from_json(json).unwrap();
        let steps: Vec<&str> = chain.iter().map(Transform::name).collect();
        assert_eq!(steps, vec!["volume", "change_speed"]);
    }

    #[test]
    fn test_from_json_rejects_unknown_type() {
        let err = TransformChain::from_json(r#"{ "transforms": [ { "type": "warp" } ] }"#)
            .unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
