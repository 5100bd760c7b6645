use super::{Canvas, ThemeColor};
use crate::shared::EditorOptions;

const GRID_LINE_WIDTH: f32 = 1.0;
const GUIDE_LINE_WIDTH: f32 = 1.0;
const CURVE_LINE_WIDTH: f32 = 2.0;

/// Farben und Linienbreiten eines Graphen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphStyle {
    pub grid: [f32; 4],
    pub guide: [f32; 4],
    pub curve: [f32; 4],
    pub handle_out: [f32; 4],
    pub handle_in: [f32; 4],
    pub grid_width: f32,
    pub guide_width: f32,
    pub curve_width: f32,
}

impl GraphStyle {
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            grid: options.grid_color,
            guide: options.guide_color,
            curve: options.curve_color,
            handle_out: options.handle_out_color,
            handle_in: options.handle_in_color,
            grid_width: GRID_LINE_WIDTH,
            guide_width: GUIDE_LINE_WIDTH,
            curve_width: CURVE_LINE_WIDTH,
        }
    }

    /// Ersetzt Grid- und Guide-Farbe durch Theme-Farben, falls der Host welche liefert.
    pub fn themed(mut self, canvas: &dyn Canvas) -> Self {
        if let Some(color) = canvas.theme_color(ThemeColor::Grid) {
            self.grid = color;
        }
        if let Some(color) = canvas.theme_color(ThemeColor::Guide) {
            self.guide = color;
        }
        self
    }
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}
