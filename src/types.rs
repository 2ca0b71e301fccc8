// src/types.rs

//! Closed enumerations accepted by aerender's `-v`, `-close` and `-sound`
//! flags.
//!
//! Each type can be parsed from its aerender spelling (`FromStr`, serde and
//! clap all go through the same rules) and renders back to that spelling via
//! `Display`. Anything outside the set is rejected with
//! [`AerenderError::InvalidOption`] before a command line is ever built.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::errors::AerenderError;

/// Which messages aerender reports (`-v`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum VerboseFlag {
    /// Only fatal and problem errors.
    Errors,
    /// Errors plus render progress. aerender's default.
    ErrorsAndProgress,
}

/// Whether to close the project when done, and whether to save it (`-close`).
///
/// `DoNotClose` only has an effect with `-reuse`: fresh instances of After
/// Effects always close and quit when done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum CloseFlag {
    DoNotSaveChanges,
    SaveChanges,
    DoNotClose,
}

/// Whether to play a sound when rendering completes (`-sound`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum SoundFlag {
    On,
    Off,
}

impl VerboseFlag {
    pub const ALL: [VerboseFlag; 2] = [VerboseFlag::Errors, VerboseFlag::ErrorsAndProgress];

    pub fn as_str(self) -> &'static str {
        match self {
            VerboseFlag::Errors => "ERRORS",
            VerboseFlag::ErrorsAndProgress => "ERRORS_AND_PROGRESS",
        }
    }
}

impl CloseFlag {
    pub const ALL: [CloseFlag; 3] = [
        CloseFlag::DoNotSaveChanges,
        CloseFlag::SaveChanges,
        CloseFlag::DoNotClose,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CloseFlag::DoNotSaveChanges => "DO_NOT_SAVE_CHANGES",
            CloseFlag::SaveChanges => "SAVE_CHANGES",
            CloseFlag::DoNotClose => "DO_NOT_CLOSE",
        }
    }
}

impl SoundFlag {
    pub const ALL: [SoundFlag; 2] = [SoundFlag::On, SoundFlag::Off];

    pub fn as_str(self) -> &'static str {
        match self {
            SoundFlag::On => "ON",
            SoundFlag::Off => "OFF",
        }
    }
}

/// Shared parsing for the flag enums: match case-insensitively against the
/// aerender spelling of every variant.
fn parse_flag<T: Copy>(
    option: &str,
    input: &str,
    all: &[T],
    as_str: impl Fn(T) -> &'static str,
) -> Result<T, AerenderError> {
    let wanted = input.trim().to_uppercase();
    all.iter()
        .copied()
        .find(|v| as_str(*v) == wanted)
        .ok_or_else(|| {
            let expected: Vec<&str> = all.iter().map(|v| as_str(*v)).collect();
            AerenderError::InvalidOption(format!(
                "invalid {option}: {input:?} (expected one of {})",
                expected.join(", ")
            ))
        })
}

impl FromStr for VerboseFlag {
    type Err = AerenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_flag("verbose flag", s, &Self::ALL, Self::as_str)
    }
}

impl FromStr for CloseFlag {
    type Err = AerenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_flag("close flag", s, &Self::ALL, Self::as_str)
    }
}

impl FromStr for SoundFlag {
    type Err = AerenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_flag("sound flag", s, &Self::ALL, Self::as_str)
    }
}

impl TryFrom<String> for VerboseFlag {
    type Error = AerenderError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for CloseFlag {
    type Error = AerenderError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for SoundFlag {
    type Error = AerenderError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for VerboseFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CloseFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SoundFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aerender_spelling() {
        assert_eq!(
            "ERRORS_AND_PROGRESS".parse::<VerboseFlag>().unwrap(),
            VerboseFlag::ErrorsAndProgress
        );
        assert_eq!(
            "do_not_close".parse::<CloseFlag>().unwrap(),
            CloseFlag::DoNotClose
        );
        assert_eq!(" on ".parse::<SoundFlag>().unwrap(), SoundFlag::On);
    }

    #[test]
    fn rejects_values_outside_the_set() {
        for bad in ["", "LOUD", "ERRORS_ONLY", "CLOSE"] {
            assert!(bad.parse::<VerboseFlag>().is_err(), "{bad} parsed as verbose");
            assert!(bad.parse::<CloseFlag>().is_err(), "{bad} parsed as close");
            assert!(bad.parse::<SoundFlag>().is_err(), "{bad} parsed as sound");
        }

        match "LOUD".parse::<SoundFlag>() {
            Err(AerenderError::InvalidOption(msg)) => {
                assert!(msg.contains("LOUD"));
                assert!(msg.contains("ON, OFF"));
            }
            other => panic!("expected InvalidOption, got {other:?}"),
        }
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for v in CloseFlag::ALL {
            assert_eq!(v.to_string().parse::<CloseFlag>().unwrap(), v);
        }
    }
}
