//! Responsive Layout
//!
//! Geometry of the file cabinet as a pure function of the viewport width.

/// Widths below this use the compact profile
pub const COMPACT_BREAKPOINT: u32 = 600;

pub const CORNER_RADIUS: f64 = 20.0;
pub const PANEL_HEIGHT: f64 = 500.0;
pub const PANEL_TOP: f64 = 60.0;
/// Offset of the folder body below the panel top, clear of the tallest tab
pub const BODY_TOP: f64 = 60.0;
/// Static scale of the open panel
pub const OPEN_SCALE: f64 = 1.05;
/// Closed tabs are drawn this much shorter than the open tab
pub const CLOSED_SCALE: f64 = 0.8;
pub const CLOSED_GAP: f64 = 12.0;

const BASE_TAB_FONT: f64 = 20.0;
const BASE_BODY_FONT: f64 = 18.0;
const CLOSED_FONT_SCALE: f64 = 0.85;
const OPEN_FONT_SCALE: f64 = 1.05;

pub const HERO_BASE_FONT: f64 = 64.0;

pub fn is_compact(width: u32) -> bool {
    width < COMPACT_BREAKPOINT
}

/// Scale for hero text. Steeper than the cabinet profile.
pub fn hero_font_scale(width: u32) -> f64 {
    match width {
        w if w < 350 => 0.4,
        w if w < 450 => 0.5,
        w if w < 700 => 0.8,
        _ => 1.0,
    }
}

pub fn hero_font_size(width: u32) -> f64 {
    HERO_BASE_FONT * hero_font_scale(width)
}

/// Cabinet geometry for one viewport width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CabinetLayout {
    pub viewport_width: f64,
    pub tab_width: f64,
    pub tab_height: f64,
    pub font_scale: f64,
    pub panel_width: f64,
    pub edge_margin: f64,
}

impl CabinetLayout {
    pub fn for_width(width: u32) -> Self {
        let compact = is_compact(width);
        let viewport_width = f64::from(width);
        Self {
            viewport_width,
            tab_width: if compact { 160.0 } else { 200.0 },
            tab_height: if compact { 40.0 } else { 50.0 },
            font_scale: if compact { 0.85 } else { 1.0 },
            panel_width: viewport_width / 1.5,
            edge_margin: if compact { 30.0 } else { 100.0 },
        }
    }

    /// Length of a closed tab along the stacking axis
    pub fn closed_tab_length(&self) -> f64 {
        self.tab_width * CLOSED_SCALE + 10.0
    }

    /// Thickness of a closed tab across the stacking axis
    pub fn closed_tab_thickness(&self) -> f64 {
        self.tab_height + 10.0
    }

    /// Offset of a closed tab from the top of the stack
    pub fn closed_tab_offset(&self, rank: usize) -> f64 {
        rank as f64 * (self.closed_tab_length() + CLOSED_GAP)
    }

    /// Panel x at open progress 0: parked off-screen with only the tab edge showing
    pub fn panel_left_closed(&self) -> f64 {
        -(self.panel_width - self.tab_height)
    }

    /// Panel x at open progress 1
    pub fn panel_left_open(&self) -> f64 {
        self.viewport_width - self.edge_margin - self.panel_width
    }

    pub fn panel_left(&self, progress: f64) -> f64 {
        let t = progress.clamp(0.0, 1.0);
        let from = self.panel_left_closed();
        from + (self.panel_left_open() - from) * t
    }

    pub fn closed_font_size(&self) -> f64 {
        BASE_TAB_FONT * CLOSED_FONT_SCALE * self.font_scale - 1.0
    }

    pub fn title_font_size(&self) -> f64 {
        BASE_TAB_FONT * OPEN_FONT_SCALE * self.font_scale
    }

    pub fn body_font_size(&self) -> f64 {
        BASE_BODY_FONT * self.font_scale
    }

    pub fn tech_font_size(&self) -> f64 {
        self.body_font_size() - 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_is_inclusive_on_wide_side() {
        let narrow = CabinetLayout::for_width(599);
        assert_eq!(narrow.tab_width, 160.0);
        assert_eq!(narrow.tab_height, 40.0);
        assert_eq!(narrow.font_scale, 0.85);
        assert_eq!(narrow.edge_margin, 30.0);

        let wide = CabinetLayout::for_width(600);
        assert_eq!(wide.tab_width, 200.0);
        assert_eq!(wide.tab_height, 50.0);
        assert_eq!(wide.font_scale, 1.0);
        assert_eq!(wide.edge_margin, 100.0);
    }

    #[test]
    fn test_panel_width_ignores_breakpoint() {
        assert_eq!(CabinetLayout::for_width(300).panel_width, 200.0);
        assert_eq!(CabinetLayout::for_width(1200).panel_width, 800.0);
    }

    #[test]
    fn test_closed_stack_offsets() {
        let layout = CabinetLayout::for_width(1200);
        assert_eq!(layout.closed_tab_length(), 170.0);
        assert_eq!(layout.closed_tab_offset(0), 0.0);
        assert_eq!(layout.closed_tab_offset(3), 3.0 * 182.0);
        assert_eq!(layout.closed_tab_thickness(), 60.0);
    }

    #[test]
    fn test_panel_slides_between_parked_and_open() {
        let layout = CabinetLayout::for_width(1200);
        assert_eq!(layout.panel_left(0.0), -750.0);
        assert_eq!(layout.panel_left(1.0), 300.0);
        assert_eq!(layout.panel_left(0.5), -225.0);
        // Out-of-range progress is clamped
        assert_eq!(layout.panel_left(1.5), 300.0);

        let compact = CabinetLayout::for_width(450);
        assert_eq!(compact.panel_left(1.0), 450.0 - 30.0 - 300.0);
    }

    #[test]
    fn test_body_clears_tab_on_every_profile() {
        for width in [320, 599, 600, 1920] {
            let layout = CabinetLayout::for_width(width);
            assert!(BODY_TOP >= layout.tab_height);
        }
        assert_eq!(BODY_TOP, 60.0);
    }

    #[test]
    fn test_hero_scale_table() {
        assert_eq!(hero_font_scale(349), 0.4);
        assert_eq!(hero_font_scale(350), 0.5);
        assert_eq!(hero_font_scale(449), 0.5);
        assert_eq!(hero_font_scale(450), 0.8);
        assert_eq!(hero_font_scale(699), 0.8);
        assert_eq!(hero_font_scale(700), 1.0);
        assert_eq!(hero_font_size(1920), 64.0);
    }

    #[test]
    fn test_font_sizes_follow_profile() {
        let wide = CabinetLayout::for_width(1000);
        assert_eq!(wide.body_font_size(), 18.0);
        assert_eq!(wide.tech_font_size(), 16.0);
        assert!((wide.title_font_size() - 21.0).abs() < 1e-9);
        assert!((wide.closed_font_size() - 16.0).abs() < 1e-9);

        let narrow = CabinetLayout::for_width(500);
        assert!((narrow.body_font_size() - 15.3).abs() < 1e-9);
    }
}
