//! SVG rendering of a validated navigation map.
//!
//! Renders the map bounds, obstacle rectangles and the start/goal markers
//! to SVG. The output is an audit file for eyeballing a scene before any
//! pathfinding work: obstacles as filled rectangles, the navigable area
//! framed by a border, start and goal as triangle markers.
//!
//! The renderer is an explicit object built from the map and points it
//! draws; there is no process-wide drawing state. It performs no
//! validation: the shell only hands it points that already passed
//! [`PointValidator`](crate::validate::PointValidator).

use std::fmt::Write;
use std::path::Path;

use crate::core::Point2D;
use crate::map::ObstacleMap;

/// SVG color scheme for visualization.
#[derive(Clone, Debug)]
pub struct SvgColorScheme {
    /// Page background color.
    pub background: &'static str,
    /// Map border color.
    pub border: &'static str,
    /// Obstacle fill color.
    pub obstacle: &'static str,
    /// Start marker color.
    pub start: &'static str,
    /// Goal marker color.
    pub goal: &'static str,
}

impl Default for SvgColorScheme {
    fn default() -> Self {
        Self {
            background: "#F8F8F8",
            border: "#333333",
            obstacle: "#333333",
            start: "#CC2222",
            goal: "#22AAAA",
        }
    }
}

/// Configuration for SVG rendering.
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Pixels per map unit.
    pub scale: f32,
    /// Padding around the map in pixels.
    pub padding: f32,
    /// Marker circumradius in pixels.
    pub marker_size: f32,
    /// Border stroke width in pixels.
    pub border_width: f32,
    /// Color scheme.
    pub colors: SvgColorScheme,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            scale: 10.0,
            padding: 20.0,
            marker_size: 8.0,
            border_width: 3.0,
            colors: SvgColorScheme::default(),
        }
    }
}

/// SVG visualization builder.
pub struct SvgVisualizer {
    config: SvgConfig,
    map: ObstacleMap,
    start: Option<Point2D>,
    goal: Option<Point2D>,
    title: Option<String>,
}

impl SvgVisualizer {
    /// Create a new visualizer for a map.
    pub fn new(map: ObstacleMap, config: SvgConfig) -> Self {
        Self {
            config,
            map,
            start: None,
            goal: None,
            title: None,
        }
    }

    /// Set a title to display above the map.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add the validated start point marker.
    pub fn with_start(mut self, point: Point2D) -> Self {
        self.start = Some(point);
        self
    }

    /// Add the validated goal point marker.
    pub fn with_goal(mut self, point: Point2D) -> Self {
        self.goal = Some(point);
        self
    }

    /// Render to an SVG string.
    pub fn render(&self) -> String {
        let mut svg = String::new();

        let bounds = self.map.bounds();
        let map_width_px = bounds.width() * self.config.scale;
        let map_height_px = bounds.height() * self.config.scale;

        let padding = self.config.padding;
        let title_height = if self.title.is_some() { 30.0 } else { 0.0 };
        let legend_height = self.legend_height();

        let width = map_width_px + 2.0 * padding;
        let height = map_height_px + 2.0 * padding + title_height + legend_height;

        // SVG header
        writeln!(&mut svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#).unwrap();
        writeln!(
            &mut svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            width, height, width, height
        )
        .unwrap();

        // Background
        writeln!(
            &mut svg,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            self.config.colors.background
        )
        .unwrap();

        // Title
        if let Some(ref title) = self.title {
            writeln!(
                &mut svg,
                r##"  <text x="{:.0}" y="22" font-family="sans-serif" font-size="16" font-weight="bold" text-anchor="middle" fill="#333">{}</text>"##,
                width / 2.0,
                title
            )
            .unwrap();
        }

        // Map group with translation
        writeln!(
            &mut svg,
            r#"  <g transform="translate({:.0}, {:.0})">"#,
            padding,
            padding + title_height
        )
        .unwrap();

        self.render_obstacles(&mut svg, map_height_px);
        self.render_border(&mut svg, map_width_px, map_height_px);

        // Markers on top of everything inside the map
        if let Some(start) = self.start {
            self.render_marker(&mut svg, "start", start, self.config.colors.start, map_height_px);
        }
        if let Some(goal) = self.goal {
            self.render_marker(&mut svg, "goal", goal, self.config.colors.goal, map_height_px);
        }

        writeln!(&mut svg, "  </g>").unwrap();

        // Legend below the map
        let legend_y = padding + title_height + map_height_px + 10.0;
        self.render_legend(&mut svg, width, legend_y);

        // SVG footer
        writeln!(&mut svg, "</svg>").unwrap();

        svg
    }

    /// Convert a world point to pixel coordinates inside the map group.
    ///
    /// SVG Y-axis is flipped (0 at top), world Y grows upward.
    fn to_px(&self, point: Point2D, map_height_px: f32) -> (f32, f32) {
        let bounds = self.map.bounds();
        let px = (point.x - bounds.min.x) * self.config.scale;
        let py = map_height_px - (point.y - bounds.min.y) * self.config.scale;
        (px, py)
    }

    /// Render obstacles as filled rectangles.
    fn render_obstacles(&self, svg: &mut String, map_height_px: f32) {
        writeln!(svg, r#"    <g id="obstacles">"#).unwrap();

        for obstacle in self.map.obstacles() {
            // Pixel origin is the obstacle's upper-left corner after Y flip.
            let (px, py) = self.to_px(obstacle.max_corner(), map_height_px);
            let px = px - obstacle.width * self.config.scale;

            writeln!(
                svg,
                r#"      <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
                px,
                py,
                obstacle.width * self.config.scale,
                obstacle.height * self.config.scale,
                self.config.colors.obstacle
            )
            .unwrap();
        }

        writeln!(svg, "    </g>").unwrap();
    }

    /// Render the navigable-area border.
    fn render_border(&self, svg: &mut String, map_width_px: f32, map_height_px: f32) {
        writeln!(
            svg,
            r#"    <rect id="border" x="0" y="0" width="{:.1}" height="{:.1}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            map_width_px, map_height_px, self.config.colors.border, self.config.border_width
        )
        .unwrap();
    }

    /// Render a point marker as an upward triangle.
    fn render_marker(
        &self,
        svg: &mut String,
        id: &str,
        point: Point2D,
        color: &str,
        map_height_px: f32,
    ) {
        let (px, py) = self.to_px(point, map_height_px);
        let size = self.config.marker_size;

        // Upward triangle with circumradius `size`, centered on the point.
        let half_width = size * 0.866;
        let half_height = size * 0.5;

        writeln!(
            svg,
            r#"    <path id="marker-{}" d="M {:.1} {:.1} L {:.1} {:.1} L {:.1} {:.1} Z" fill="{}" stroke="white" stroke-width="1"/>"#,
            id,
            px,
            py - size,
            px + half_width,
            py + half_height,
            px - half_width,
            py + half_height,
            color
        )
        .unwrap();
    }

    fn legend_height(&self) -> f32 {
        let mut entries = 1; // Obstacles entry is always present
        if self.start.is_some() {
            entries += 1;
        }
        if self.goal.is_some() {
            entries += 1;
        }
        (entries * 20 + 25) as f32 + 10.0
    }

    /// Render legend.
    fn render_legend(&self, svg: &mut String, svg_width: f32, y_offset: f32) {
        writeln!(
            svg,
            r#"  <g id="legend" font-family="sans-serif" font-size="12" transform="translate(0, {:.0})">"#,
            y_offset
        )
        .unwrap();

        writeln!(
            svg,
            r##"    <rect x="10" y="0" width="{:.0}" height="{:.0}" fill="white" stroke="#CCC" stroke-width="1" rx="4"/>"##,
            svg_width - 20.0,
            self.legend_height() - 10.0
        )
        .unwrap();

        let mut entry_y = 20.0;

        // Obstacle swatch
        writeln!(
            svg,
            r#"    <rect x="22" y="{:.0}" width="15" height="15" fill="{}"/>"#,
            entry_y - 10.0,
            self.config.colors.obstacle
        )
        .unwrap();
        writeln!(
            svg,
            r##"    <text x="45" y="{:.0}" fill="#333">Obstacles</text>"##,
            entry_y + 2.0
        )
        .unwrap();
        entry_y += 20.0;

        let marker_entries = [
            (self.start.is_some(), "Start", self.config.colors.start),
            (self.goal.is_some(), "Goal", self.config.colors.goal),
        ];

        for (present, label, color) in marker_entries {
            if !present {
                continue;
            }
            writeln!(
                svg,
                r#"    <path d="M 30 {:.0} L 37 {:.0} L 23 {:.0} Z" fill="{}" stroke="white" stroke-width="1"/>"#,
                entry_y - 9.0,
                entry_y + 3.0,
                entry_y + 3.0,
                color
            )
            .unwrap();
            writeln!(
                svg,
                r##"    <text x="45" y="{:.0}" fill="#333">{}</text>"##,
                entry_y + 2.0,
                label
            )
            .unwrap();
            entry_y += 20.0;
        }

        writeln!(svg, "  </g>").unwrap();
    }

    /// Save to file.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let svg_content = self.render();
        std::fs::write(path, svg_content)
    }
}
