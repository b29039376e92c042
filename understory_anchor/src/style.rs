// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline style emitted for a positioned layer.

use kurbo::{Point, Rect, Size};

/// Absolute-position style for the layer element, in whole pixels.
///
/// This is the only place coordinates are rounded.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerStyle {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width, when the layer's size is dictated by the resolver.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub width: Option<f64>,
    /// Height, when the layer's size is dictated by the resolver.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub height: Option<f64>,
}

impl LayerStyle {
    /// Round a layer rectangle into a style.
    pub fn from_rect(rect: Rect, with_size: bool) -> Self {
        let origin = Point::new(rect.x0, rect.y0).round();
        let size = with_size.then(|| Size::new(rect.width(), rect.height()).round());
        Self {
            left: origin.x,
            top: origin.y,
            width: size.map(|s| s.width),
            height: size.map(|s| s.height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_whole_pixels() {
        let s = LayerStyle::from_rect(Rect::new(10.4, 20.6, 110.9, 40.2), false);
        assert_eq!((s.left, s.top), (10.0, 21.0));
        assert_eq!(s.width, None);
        assert_eq!(s.height, None);

        let s = LayerStyle::from_rect(Rect::new(10.4, 20.6, 110.9, 40.2), true);
        assert_eq!(s.width, Some(101.0));
        assert_eq!(s.height, Some(20.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn absent_size_is_omitted_on_the_wire() {
        let s = LayerStyle {
            left: 10.0,
            top: 20.0,
            width: None,
            height: Some(30.0),
        };
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"left":10.0,"top":20.0,"height":30.0}"#);
        assert_eq!(serde_json::from_str::<LayerStyle>(&json).unwrap(), s);

        let bare: LayerStyle = serde_json::from_str(r#"{"left":1.0,"top":2.0}"#).unwrap();
        assert_eq!((bare.width, bare.height), (None, None));
    }
}
