use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identity::{RecordKey, SourceId, TrackRef};

/// Playback flags of a music type record.
///
/// The merger never interprets individual bits; two flag sets are either
/// equal or the more specific one wins.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MusicFlags(u32);

impl MusicFlags {
    pub const PLAYS_ONE_SELECTION: Self = Self(0x01);
    pub const ABRUPT_TRANSITION: Self = Self(0x02);
    pub const CYCLE_TRACKS: Self = Self(0x04);
    pub const MAINTAIN_TRACK_ORDER: Self = Self(0x08);
    pub const DUCKS_CURRENT_TRACK: Self = Self(0x20);
    pub const DOES_NOT_QUEUE: Self = Self(0x40);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl fmt::Debug for MusicFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MusicFlags({:#06x})", self.0)
    }
}

/// One source's version of a record.
///
/// Variants are immutable snapshots handed over by the host. Absent optional
/// values mean the source did not author the subrecord at all.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub key: RecordKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_id: Option<String>,
    #[serde(default)]
    pub flags: MusicFlags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_duration: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ducking_decibel: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<TrackRef>>,
    /// Bookkeeping stamp written by editing tools. Never part of a content
    /// comparison.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<u32>,
}

impl Variant {
    /// A variant with no authored values.
    pub fn new(key: RecordKey) -> Self {
        Self {
            key,
            editor_id: None,
            flags: MusicFlags::empty(),
            fade_duration: None,
            priority: None,
            ducking_decibel: None,
            tracks: None,
            revision: None,
        }
    }

    pub fn with_editor_id(mut self, editor_id: impl Into<String>) -> Self {
        self.editor_id = Some(editor_id.into());
        self
    }

    pub fn with_flags(mut self, flags: MusicFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_fade_duration(mut self, seconds: f32) -> Self {
        self.fade_duration = Some(seconds);
        self
    }

    pub fn with_priority(mut self, priority: u16) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_ducking_decibel(mut self, decibel: f32) -> Self {
        self.ducking_decibel = Some(decibel);
        self
    }

    pub fn with_tracks<I, T>(mut self, tracks: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TrackRef>,
    {
        self.tracks = Some(tracks.into_iter().map(Into::into).collect());
        self
    }

    /// The track list, with an absent list read as empty.
    pub fn tracks(&self) -> &[TrackRef] {
        self.tracks.as_deref().unwrap_or(&[])
    }

    /// Compare authored content, ignoring `revision`. An absent track list
    /// equals an empty one.
    pub fn same_content(&self, other: &Variant) -> bool {
        self.key == other.key
            && self.editor_id == other.editor_id
            && self.flags == other.flags
            && self.fade_duration == other.fade_duration
            && self.priority == other.priority
            && self.ducking_decibel == other.ducking_decibel
            && self.tracks() == other.tracks()
    }
}

/// The single record produced by merging a chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MergedRecord {
    pub key: RecordKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_id: Option<String>,
    pub flags: MusicFlags,
    pub fade_duration: f32,
    pub priority: u16,
    pub ducking_decibel: f32,
    pub tracks: Vec<TrackRef>,
    /// The extent sources whose overrides were folded in, in chain order.
    pub sources: Vec<SourceId>,
}

impl MergedRecord {
    /// Express the merged record as a fully-authored variant.
    pub fn to_variant(&self) -> Variant {
        Variant {
            key: self.key.clone(),
            editor_id: self.editor_id.clone(),
            flags: self.flags,
            fade_duration: Some(self.fade_duration),
            priority: Some(self.priority),
            ducking_decibel: Some(self.ducking_decibel),
            tracks: Some(self.tracks.clone()),
            revision: None,
        }
    }

    /// Returns `true` if writing this record would not change `variant`.
    pub fn matches_variant(&self, variant: &Variant) -> bool {
        self.to_variant().same_content(variant)
    }
}
