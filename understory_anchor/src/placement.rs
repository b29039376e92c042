// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement names and the anchor rules they map to.
//!
//! ## Naming
//!
//! A placement is written `<side>-<align>`: the side of the trigger the layer sits on,
//! then where it lines up along that side.
//! For `top`/`bottom`, alignment is `left`, `center`, or `right`.
//! For `left`/`right`, alignment is `top`, `center`, or `bottom`.
//! The lone `center` placement puts the layer over the middle of the trigger.
//!
//! ## Anchors
//!
//! Each placement fixes one point on the trigger and the matching point on the layer.
//! For `top-left`, the trigger anchor is the trigger's top-left corner and the layer
//! anchor is the layer's bottom-left corner; the layer is then pushed away from the
//! trigger along the side's normal by the trigger offset.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Rect, Size, Vec2};

use crate::error::ParsePlacementError;

/// Side of the trigger a layer occupies.
///
/// Reported back as the resolved `layer_side`; useful for arrow direction and
/// for side-dependent layer dimensions.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Side {
    /// Above the trigger.
    Top,
    /// Below the trigger.
    Bottom,
    /// Left of the trigger.
    Left,
    /// Right of the trigger.
    Right,
    /// Over the trigger.
    Center,
}

impl Side {
    /// Unit vector pointing away from the trigger for this side.
    ///
    /// `Center` has no normal and returns zero.
    pub const fn normal(self) -> Vec2 {
        match self {
            Self::Top => Vec2::new(0.0, -1.0),
            Self::Bottom => Vec2::new(0.0, 1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
            Self::Center => Vec2::ZERO,
        }
    }

    /// The opposite side. `Center` is its own opposite.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Center => Self::Center,
        }
    }

    /// True for `Top` and `Bottom`, where layers slide horizontally.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// True for `Left` and `Right`, where layers slide vertically.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Lowercase name of the side.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Alignment of the layer along the side it occupies.
///
/// `Start` is left (for `top`/`bottom`) or top (for `left`/`right`).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Align {
    /// Left or top edges line up.
    Start,
    /// Centers line up.
    Center,
    /// Right or bottom edges line up.
    End,
}

impl Align {
    /// Position along a span `[lo, hi]` selected by this alignment.
    #[inline]
    fn pick(self, lo: f64, hi: f64) -> f64 {
        match self {
            Self::Start => lo,
            Self::Center => (lo + hi) * 0.5,
            Self::End => hi,
        }
    }
}

/// A named placement of a layer relative to its trigger.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Placement {
    /// Above, left edges aligned.
    TopLeft,
    /// Above, centered.
    TopCenter,
    /// Above, right edges aligned.
    TopRight,
    /// Below, left edges aligned.
    BottomLeft,
    /// Below, centered.
    BottomCenter,
    /// Below, right edges aligned.
    BottomRight,
    /// To the left, top edges aligned.
    LeftTop,
    /// To the left, centered.
    LeftCenter,
    /// To the left, bottom edges aligned.
    LeftBottom,
    /// To the right, top edges aligned.
    RightTop,
    /// To the right, centered.
    RightCenter,
    /// To the right, bottom edges aligned.
    RightBottom,
    /// Centered over the trigger.
    Center,
}

impl Placement {
    /// Every placement, in the default priority order used by [`PlacementSet::All`].
    pub const ALL: [Self; 13] = [
        Self::TopCenter,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomCenter,
        Self::BottomLeft,
        Self::BottomRight,
        Self::LeftCenter,
        Self::LeftTop,
        Self::LeftBottom,
        Self::RightCenter,
        Self::RightTop,
        Self::RightBottom,
        Self::Center,
    ];

    /// Side of the trigger this placement occupies.
    pub const fn side(self) -> Side {
        match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => Side::Top,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => Side::Bottom,
            Self::LeftTop | Self::LeftCenter | Self::LeftBottom => Side::Left,
            Self::RightTop | Self::RightCenter | Self::RightBottom => Side::Right,
            Self::Center => Side::Center,
        }
    }

    /// Alignment along the occupied side.
    pub const fn align(self) -> Align {
        match self {
            Self::TopLeft | Self::BottomLeft | Self::LeftTop | Self::RightTop => Align::Start,
            Self::TopRight | Self::BottomRight | Self::LeftBottom | Self::RightBottom => {
                Align::End
            }
            Self::TopCenter
            | Self::BottomCenter
            | Self::LeftCenter
            | Self::RightCenter
            | Self::Center => Align::Center,
        }
    }

    /// Compose a placement from a side and an alignment.
    ///
    /// `Side::Center` ignores the alignment.
    pub const fn from_parts(side: Side, align: Align) -> Self {
        match (side, align) {
            (Side::Top, Align::Start) => Self::TopLeft,
            (Side::Top, Align::Center) => Self::TopCenter,
            (Side::Top, Align::End) => Self::TopRight,
            (Side::Bottom, Align::Start) => Self::BottomLeft,
            (Side::Bottom, Align::Center) => Self::BottomCenter,
            (Side::Bottom, Align::End) => Self::BottomRight,
            (Side::Left, Align::Start) => Self::LeftTop,
            (Side::Left, Align::Center) => Self::LeftCenter,
            (Side::Left, Align::End) => Self::LeftBottom,
            (Side::Right, Align::Start) => Self::RightTop,
            (Side::Right, Align::Center) => Self::RightCenter,
            (Side::Right, Align::End) => Self::RightBottom,
            (Side::Center, _) => Self::Center,
        }
    }

    /// The same alignment on the opposite side.
    pub const fn flipped(self) -> Self {
        Self::from_parts(self.side().opposite(), self.align())
    }

    /// Kebab-case name, e.g. `"top-center"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopCenter => "top-center",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomCenter => "bottom-center",
            Self::BottomRight => "bottom-right",
            Self::LeftTop => "left-top",
            Self::LeftCenter => "left-center",
            Self::LeftBottom => "left-bottom",
            Self::RightTop => "right-top",
            Self::RightCenter => "right-center",
            Self::RightBottom => "right-bottom",
            Self::Center => "center",
        }
    }

    /// Point on the trigger this placement attaches to.
    pub fn trigger_anchor(self, trigger: Rect) -> Point {
        let align = self.align();
        match self.side() {
            Side::Top => Point::new(align.pick(trigger.x0, trigger.x1), trigger.y0),
            Side::Bottom => Point::new(align.pick(trigger.x0, trigger.x1), trigger.y1),
            Side::Left => Point::new(trigger.x0, align.pick(trigger.y0, trigger.y1)),
            Side::Right => Point::new(trigger.x1, align.pick(trigger.y0, trigger.y1)),
            Side::Center => trigger.center(),
        }
    }

    /// Offset of the layer's anchor point from the layer's top-left corner.
    ///
    /// The layer anchor sits on the layer edge facing the trigger.
    pub fn layer_anchor_offset(self, layer: Size) -> Vec2 {
        let align = self.align();
        match self.side() {
            Side::Top => Vec2::new(align.pick(0.0, layer.width), layer.height),
            Side::Bottom => Vec2::new(align.pick(0.0, layer.width), 0.0),
            Side::Left => Vec2::new(layer.width, align.pick(0.0, layer.height)),
            Side::Right => Vec2::new(0.0, align.pick(0.0, layer.height)),
            Side::Center => Vec2::new(layer.width * 0.5, layer.height * 0.5),
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParsePlacementError::new(name.to_string()))
    }
}

/// Candidate placements considered by an `auto` search.
///
/// The order of an explicit list is its priority: when two candidates fit equally
/// well, the one listed first wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PlacementSet {
    /// All twelve side placements plus `center`, in [`Placement::ALL`] order.
    #[default]
    All,
    /// An explicit, ordered list.
    List(Vec<Placement>),
}

impl PlacementSet {
    /// Placements in priority order.
    pub fn as_slice(&self) -> &[Placement] {
        match self {
            Self::All => &Placement::ALL,
            Self::List(list) => list,
        }
    }

    /// True if no placement is listed.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl From<Vec<Placement>> for PlacementSet {
    fn from(list: Vec<Placement>) -> Self {
        Self::List(list)
    }
}

impl<const N: usize> From<[Placement; N]> for PlacementSet {
    fn from(list: [Placement; N]) -> Self {
        Self::List(list.to_vec())
    }
}

impl FromStr for PlacementSet {
    type Err = ParsePlacementError;

    /// Parse `"auto"` as [`PlacementSet::All`], otherwise a comma-separated list of names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Self::All);
        }
        if s.is_empty() {
            return Ok(Self::List(Vec::new()));
        }
        s.split(',')
            .map(str::parse)
            .collect::<Result<Vec<Placement>, _>>()
            .map(Self::List)
    }
}

impl fmt::Display for PlacementSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("auto"),
            Self::List(list) => {
                for (i, p) in list.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    f.write_str(p.name())?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn names_round_trip_through_from_str() {
        for p in Placement::ALL {
            assert_eq!(p.name().parse::<Placement>(), Ok(p));
        }
        assert_eq!(" Bottom-Center ".parse::<Placement>(), Ok(Placement::BottomCenter));
        assert!("middle".parse::<Placement>().is_err());
    }

    #[test]
    fn sides_and_alignments_compose() {
        for p in Placement::ALL {
            assert_eq!(Placement::from_parts(p.side(), p.align()), p);
        }
        assert_eq!(Placement::TopLeft.flipped(), Placement::BottomLeft);
        assert_eq!(Placement::RightCenter.flipped(), Placement::LeftCenter);
        assert_eq!(Placement::Center.flipped(), Placement::Center);
    }

    #[test]
    fn trigger_anchors_follow_side_and_align() {
        let t = Rect::new(100.0, 100.0, 150.0, 120.0);
        assert_eq!(Placement::TopLeft.trigger_anchor(t), Point::new(100.0, 100.0));
        assert_eq!(Placement::BottomCenter.trigger_anchor(t), Point::new(125.0, 120.0));
        assert_eq!(Placement::LeftBottom.trigger_anchor(t), Point::new(100.0, 120.0));
        assert_eq!(Placement::RightTop.trigger_anchor(t), Point::new(150.0, 100.0));
        assert_eq!(Placement::Center.trigger_anchor(t), Point::new(125.0, 110.0));
    }

    #[test]
    fn layer_anchor_faces_trigger() {
        let s = Size::new(40.0, 10.0);
        assert_eq!(Placement::TopCenter.layer_anchor_offset(s), Vec2::new(20.0, 10.0));
        assert_eq!(Placement::BottomRight.layer_anchor_offset(s), Vec2::new(40.0, 0.0));
        assert_eq!(Placement::LeftTop.layer_anchor_offset(s), Vec2::new(40.0, 0.0));
        assert_eq!(Placement::RightCenter.layer_anchor_offset(s), Vec2::new(0.0, 5.0));
        assert_eq!(Placement::Center.layer_anchor_offset(s), Vec2::new(20.0, 5.0));
    }

    #[test]
    fn placement_set_parsing() {
        assert_eq!("auto".parse::<PlacementSet>(), Ok(PlacementSet::All));
        assert_eq!(
            "right-center, left-center".parse::<PlacementSet>(),
            Ok(PlacementSet::List(vec![
                Placement::RightCenter,
                Placement::LeftCenter
            ]))
        );
        assert_eq!("".parse::<PlacementSet>(), Ok(PlacementSet::List(vec![])));
        assert!("top-center,sideways".parse::<PlacementSet>().is_err());
        assert_eq!(PlacementSet::All.as_slice().len(), 13);
    }

    #[test]
    fn placement_set_display() {
        let set = PlacementSet::from([Placement::TopLeft, Placement::Center]);
        assert_eq!(set.to_string(), "top-left,center");
        assert_eq!(PlacementSet::All.to_string(), "auto");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_names_match_display() {
        assert_eq!(
            serde_json::to_string(&Placement::BottomCenter).unwrap(),
            r#""bottom-center""#
        );
        assert_eq!(
            serde_json::from_str::<Placement>(r#""bottom-center""#).unwrap(),
            Placement::BottomCenter
        );
        for p in Placement::ALL {
            let json = serde_json::to_string(&p).unwrap();
            assert_eq!(json.trim_matches('"'), p.name());
        }
        assert_eq!(serde_json::to_string(&Side::Left).unwrap(), r#""left""#);
        assert_eq!(serde_json::to_string(&Align::End).unwrap(), r#""end""#);
        assert!(serde_json::from_str::<Placement>(r#""BottomCenter""#).is_err());
    }
}
