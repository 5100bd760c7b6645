//! Pixel ↔ Kurvenraum-Abbildung einer Graph-Zeichenfläche.

use crate::core::{BezierCurve, SpeedCurve};
use glam::Vec2;

/// Layout einer Graph-Zeichenfläche (lokale Pixelkoordinaten, y nach unten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphLayout {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub handle_radius: f32,
}

impl GraphLayout {
    /// Breite des Plot-Bereichs (ohne Padding).
    pub fn plot_width(&self) -> f32 {
        (self.width - 2.0 * self.padding).max(1.0)
    }

    /// Höhe des Plot-Bereichs (ohne Padding).
    pub fn plot_height(&self) -> f32 {
        (self.height - 2.0 * self.padding).max(1.0)
    }

    pub fn plot_left(&self) -> f32 {
        self.padding
    }

    pub fn plot_right(&self) -> f32 {
        self.padding + self.plot_width()
    }

    /// Pixel-y der Kurvenwert-Linie 0.
    pub fn plot_bottom(&self) -> f32 {
        self.padding + self.plot_height()
    }

    pub fn plot_top(&self) -> f32 {
        self.padding
    }

    /// Kurvenraum (x,y in [0,1] nominell) → Pixel.
    pub fn to_pixel(&self, curve: Vec2) -> Vec2 {
        Vec2::new(
            self.plot_left() + curve.x * self.plot_width(),
            self.plot_bottom() - curve.y * self.plot_height(),
        )
    }

    /// Pixel → Kurvenraum, linear über den gepaddeten Plot-Bereich.
    pub fn to_curve(&self, pixel: Vec2) -> Vec2 {
        Vec2::new(
            (pixel.x - self.plot_left()) / self.plot_width(),
            (self.plot_bottom() - pixel.y) / self.plot_height(),
        )
    }

    /// Hält eine Handle-Position innerhalb der Zeichenfläche erreichbar.
    pub fn clamp_to_surface(&self, pixel: Vec2) -> Vec2 {
        let r = self.handle_radius;
        Vec2::new(
            pixel.x.clamp(r, (self.width - r).max(r)),
            pixel.y.clamp(r, (self.height - r).max(r)),
        )
    }

    /// Pixel-x der Plot-Mitte (Grenze zwischen ausgehendem und eingehendem Speed-Handle).
    pub fn plot_mid_x(&self) -> f32 {
        self.plot_left() + self.plot_width() * 0.5
    }

    /// Gezeichnete Positionen der beiden Value-Handles (cp1, cp2), auf die Fläche geklemmt.
    pub fn value_handle_positions(&self, curve: &BezierCurve) -> [Vec2; 2] {
        [
            self.clamp_to_surface(self.to_pixel(curve.cp1())),
            self.clamp_to_surface(self.to_pixel(curve.cp2())),
        ]
    }

    /// Gezeichnete Positionen der Speed-Handles (out, in).
    ///
    /// Horizontal bleibt das ausgehende Handle in der linken, das eingehende
    /// in der rechten Plot-Hälfte. Vertikal wird nicht geklemmt.
    pub fn speed_handle_positions(&self, speed: &SpeedCurve) -> [Vec2; 2] {
        let half = self.plot_width() * 0.5;
        let mid = self.plot_mid_x();
        let out_x =
            (self.plot_left() + speed.out_influence / 100.0 * half).clamp(self.plot_left(), mid);
        let in_x =
            (self.plot_right() - speed.in_influence / 100.0 * half).clamp(mid, self.plot_right());
        [
            Vec2::new(out_x, self.speed_to_pixel_y(speed.out_speed_y)),
            Vec2::new(in_x, self.speed_to_pixel_y(speed.in_speed_y)),
        ]
    }

    /// Pixel-y einer Speed-Intensität (0 = Plot-Unterkante, 1 = Oberkante).
    pub fn speed_to_pixel_y(&self, speed_y: f32) -> f32 {
        self.plot_bottom() - speed_y * self.plot_height()
    }

    /// Umkehrung von [`Self::speed_to_pixel_y`].
    pub fn pixel_to_speed_y(&self, pixel_y: f32) -> f32 {
        (self.plot_bottom() - pixel_y) / self.plot_height()
    }

    /// Influence (0..100) des ausgehenden Handles aus einer Pixel-x-Position.
    pub fn out_influence_at(&self, pixel_x: f32) -> f32 {
        ((pixel_x - self.plot_left()) / (self.plot_width() * 0.5) * 100.0).clamp(0.0, 100.0)
    }

    /// Influence (0..100) des eingehenden Handles aus einer Pixel-x-Position.
    pub fn in_influence_at(&self, pixel_x: f32) -> f32 {
        ((self.plot_right() - pixel_x) / (self.plot_width() * 0.5) * 100.0).clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn layout() -> GraphLayout {
        GraphLayout {
            width: 200.0,
            height: 100.0,
            padding: 10.0,
            handle_radius: 5.0,
        }
    }

    #[test]
    fn test_pixel_curve_mapping_is_inverse() {
        let layout = layout();
        let p = Vec2::new(0.25, 0.75);
        let back = layout.to_curve(layout.to_pixel(p));
        assert_relative_eq!(back.x, p.x, epsilon = 1e-6);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-6);
    }

    #[test]
    fn test_origin_maps_to_bottom_left_of_plot() {
        let layout = layout();
        assert_eq!(layout.to_pixel(Vec2::ZERO), Vec2::new(10.0, 90.0));
        assert_eq!(layout.to_pixel(Vec2::ONE), Vec2::new(190.0, 10.0));
    }

    #[test]
    fn test_clamp_keeps_handles_on_surface() {
        let layout = layout();
        assert_eq!(
            layout.clamp_to_surface(Vec2::new(-50.0, 500.0)),
            Vec2::new(5.0, 95.0)
        );
    }

    #[test]
    fn test_speed_handles_stay_in_their_half() {
        let layout = layout();
        let [out, inc] = layout.speed_handle_positions(&SpeedCurve::new(150.0, 150.0, 0.5, 2.0));
        assert_eq!(out.x, layout.plot_mid_x());
        assert_eq!(inc.x, layout.plot_mid_x());
        // vertikal ungeklemmt
        assert!(inc.y < 0.0);
    }

    #[test]
    fn test_influence_from_pixel_is_clamped() {
        let layout = layout();
        assert_relative_eq!(layout.out_influence_at(55.0), 50.0, epsilon = 1e-4);
        assert_relative_eq!(layout.in_influence_at(145.0), 50.0, epsilon = 1e-4);
        assert_eq!(layout.out_influence_at(-20.0), 0.0);
        assert_eq!(layout.in_influence_at(-20.0), 100.0);
    }

    #[test]
    fn test_value_handles_clamped_to_surface() {
        let layout = layout();
        let [cp1, cp2] = layout.value_handle_positions(&BezierCurve::new(0.5, 5.0, 0.5, -5.0));
        assert_eq!(cp1.y, 5.0);
        assert_eq!(cp2.y, 95.0);
    }
}
