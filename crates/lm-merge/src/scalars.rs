//! Scalar field resolution: the most specific change wins.

use lm_types::{MusicFlags, Variant};

use crate::config::{AbsentPolicy, MergeConfig};

/// Resolved scalar fields of a merged record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalarFields {
    pub flags: MusicFlags,
    pub fade_duration: f32,
    pub priority: u16,
    pub ducking_decibel: f32,
}

impl ScalarFields {
    /// The origin's values, with absent values read as zero.
    pub fn from_origin(origin: &Variant) -> Self {
        Self {
            flags: origin.flags,
            fade_duration: origin.fade_duration.unwrap_or(0.0),
            priority: origin.priority.unwrap_or(0),
            ducking_decibel: origin.ducking_decibel.unwrap_or(0.0),
        }
    }
}

fn changed<T: PartialEq>(value: &Option<T>, origin: &Option<T>, policy: AbsentPolicy) -> bool {
    match policy {
        AbsentPolicy::MatchesOrigin => value != origin,
        AbsentPolicy::Overrides => value.is_none() || value != origin,
    }
}

/// Fold the extent overrides (ascending specificity) over the origin.
///
/// A field is overwritten whenever the override's value differs from the
/// origin's, so later overrides win. An override that differs by leaving a
/// value out writes the configured default.
pub fn resolve_scalars<'a, I>(origin: &Variant, overrides: I, config: &MergeConfig) -> ScalarFields
where
    I: IntoIterator<Item = &'a Variant>,
{
    let policy = config.absent_policy;

    overrides
        .into_iter()
        .fold(ScalarFields::from_origin(origin), |mut target, variant| {
            if variant.flags != origin.flags {
                target.flags = variant.flags;
            }
            if changed(&variant.fade_duration, &origin.fade_duration, policy) {
                target.fade_duration = variant.fade_duration.unwrap_or(config.default_fade_duration);
            }
            if changed(&variant.priority, &origin.priority, policy) {
                target.priority = variant.priority.unwrap_or(config.default_priority);
            }
            if changed(&variant.ducking_decibel, &origin.ducking_decibel, policy) {
                target.ducking_decibel = variant
                    .ducking_decibel
                    .unwrap_or(config.default_ducking_decibel);
            }
            target
        })
}
