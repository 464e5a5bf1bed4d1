// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Vec2};

/// Placement of one card, relative to its centred position on the stage.
///
/// Applied in order: scale about the card centre, rotate, then translate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CardTransform {
    /// Translation in pixels.
    pub translate: Vec2,
    /// Rotation in degrees, clockwise on screen.
    pub rotate_deg: f64,
    /// Uniform scale.
    pub scale: f64,
}

impl CardTransform {
    /// The transform as an affine map from card-local to stage coordinates
    /// (both centred on the card's rest position).
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translate)
            * Affine::rotate(self.rotate_deg.to_radians())
            * Affine::scale(self.scale)
    }
}

impl Default for CardTransform {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            rotate_deg: 0.0,
            scale: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::*;

    #[test]
    fn identity_by_default() {
        let a = CardTransform::default().to_affine();
        assert_eq!(a * Point::new(3.0, 4.0), Point::new(3.0, 4.0));
    }

    #[test]
    fn translate_applies_after_scale() {
        let t = CardTransform {
            translate: Vec2::new(10.0, -5.0),
            rotate_deg: 0.0,
            scale: 2.0,
        };
        assert_eq!(t.to_affine() * Point::new(1.0, 1.0), Point::new(12.0, -3.0));
    }

    #[test]
    fn rotation_is_in_degrees() {
        let t = CardTransform {
            translate: Vec2::ZERO,
            rotate_deg: 90.0,
            scale: 1.0,
        };
        let p = t.to_affine() * Point::new(1.0, 0.0);
        assert!(p.x.abs() < 1e-9, "x = {}", p.x);
        assert!((p.y - 1.0).abs() < 1e-9, "y = {}", p.y);
    }
}
