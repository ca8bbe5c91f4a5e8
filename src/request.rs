//! # Request Documents
//!
//! YAML request files for the command line and batch use.
//!
//! A request names the chord plus the optional playing context:
//!
//! ```yaml
//! chord: Am7/G
//! tuning: drop-d
//! capo: 2
//! max-voicings: 5
//! ```
//!
//! Every field is optional; command-line flags override file values.

use serde::Deserialize;

use crate::error::VoicingError;
use crate::pitch::parse_note;
use crate::tuning::Tuning;
use crate::VoicingOptions;

/// Raw request for YAML deserialization.
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawRequest {
    pub chord: Option<String>,
    pub tuning: Option<String>,
    pub capo: Option<u8>,
    pub bass: Option<String>,
    pub max_voicings: Option<usize>,
}

impl RawRequest {
    /// Parse a YAML request document.
    pub fn from_yaml(source: &str) -> Result<Self, VoicingError> {
        serde_yaml::from_str(source).map_err(|e| VoicingError::RequestError(e.to_string()))
    }

    /// Resolve the playing context into engine options.
    ///
    /// The chord symbol itself stays separate: a request's `bass` field, when
    /// present, overrides any slash bass in the symbol and is returned
    /// alongside.
    pub fn to_options(&self) -> Result<(VoicingOptions, Option<u8>), VoicingError> {
        let tuning = match &self.tuning {
            Some(text) => Tuning::parse(text)?,
            None => Tuning::standard(),
        };
        let bass = match &self.bass {
            Some(name) => Some(parse_note(name)?),
            None => None,
        };
        let options = VoicingOptions {
            tuning,
            capo: self.capo.unwrap_or(0),
            ..VoicingOptions::default()
        };
        Ok((options, bass))
    }
}
