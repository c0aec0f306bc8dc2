use std::fmt::Write;

use tracing::debug;

use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, Color, LayerPrimitives, LinePrimitive, PathCommand, PathPrimitive,
    RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub layers_written: usize,
    pub rects_drawn: usize,
    pub paths_drawn: usize,
    pub circles_drawn: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderer that serializes a frame into a standalone SVG document.
///
/// Every primitive maps to exactly one SVG element; layers become `<g>`
/// groups tagged with `data-layer`. Empty layers are skipped.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
    background: Option<Color>,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Paints a full-viewport rectangle behind every layer.
    pub fn with_background(mut self, color: Color) -> ChartResult<Self> {
        color.validate()?;
        self.background = Some(color);
        Ok(self)
    }

    /// Markup produced by the last successful render.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    /// Renders `frame` and returns the resulting markup.
    pub fn render_to_string(frame: &RenderFrame) -> ChartResult<String> {
        let mut renderer = Self::new();
        renderer.render(frame)?;
        Ok(renderer.into_document())
    }

    fn write_document(
        &self,
        frame: &RenderFrame,
        out: &mut String,
    ) -> ChartResult<SvgRenderStats> {
        let width = frame.viewport.width;
        let height = frame.viewport.height;
        write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        out.push('\n');

        if let Some(color) = self.background {
            write!(out, r#"<rect x="0" y="0" width="{width}" height="{height}""#)?;
            write_paint_attr(out, "fill", color)?;
            out.push_str("/>\n");
        }

        let mut stats = SvgRenderStats::default();
        for layer in frame.layers.iter().filter(|layer| !layer.is_empty()) {
            write_layer(out, layer, &mut stats)?;
            stats.layers_written += 1;
        }

        out.push_str("</svg>\n");
        Ok(stats)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let mut out = String::new();
        let stats = self.write_document(frame, &mut out)?;
        debug!(
            width = frame.viewport.width,
            height = frame.viewport.height,
            layers = stats.layers_written,
            rects = stats.rects_drawn,
            paths = stats.paths_drawn,
            circles = stats.circles_drawn,
            lines = stats.lines_drawn,
            texts = stats.texts_drawn,
            "rendered svg document"
        );

        self.document = out;
        self.last_stats = stats;
        Ok(())
    }
}

fn write_layer(
    out: &mut String,
    layer: &LayerPrimitives,
    stats: &mut SvgRenderStats,
) -> ChartResult<()> {
    writeln!(out, r#"<g data-layer="{}">"#, layer.kind.name())?;
    for rect in &layer.rects {
        write_rect(out, rect)?;
        stats.rects_drawn += 1;
    }
    for path in &layer.paths {
        write_path(out, path)?;
        stats.paths_drawn += 1;
    }
    for circle in &layer.circles {
        write_circle(out, circle)?;
        stats.circles_drawn += 1;
    }
    for line in &layer.lines {
        write_line(out, line)?;
        stats.lines_drawn += 1;
    }
    for text in &layer.texts {
        write_text(out, text)?;
        stats.texts_drawn += 1;
    }
    out.push_str("</g>\n");
    Ok(())
}

fn write_rect(out: &mut String, rect: &RectPrimitive) -> ChartResult<()> {
    write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
        rect.x, rect.y, rect.width, rect.height
    )?;
    if rect.corner_radius > 0.0 {
        write!(out, r#" rx="{}""#, rect.corner_radius)?;
    }
    write_paint_attr(out, "fill", rect.fill_color)?;
    if rect.border_width > 0.0 {
        write_paint_attr(out, "stroke", rect.border_color)?;
        write!(out, r#" stroke-width="{}""#, rect.border_width)?;
    }
    out.push_str("/>\n");
    Ok(())
}

fn write_path(out: &mut String, path: &PathPrimitive) -> ChartResult<()> {
    write!(out, r#"<path d="{}""#, path_data(&path.commands))?;
    match path.fill_color {
        Some(fill) => write_paint_attr(out, "fill", fill)?,
        None => out.push_str(r#" fill="none""#),
    }
    if let Some(stroke) = path.stroke_color {
        write_paint_attr(out, "stroke", stroke)?;
        write!(out, r#" stroke-width="{}""#, path.stroke_width)?;
    }
    out.push_str("/>\n");
    Ok(())
}

fn write_circle(out: &mut String, circle: &CirclePrimitive) -> ChartResult<()> {
    write!(
        out,
        r#"<circle cx="{}" cy="{}" r="{}""#,
        circle.cx, circle.cy, circle.radius
    )?;
    write_paint_attr(out, "fill", circle.fill_color)?;
    if circle.stroke_width > 0.0 {
        write_paint_attr(out, "stroke", circle.stroke_color)?;
        write!(out, r#" stroke-width="{}""#, circle.stroke_width)?;
    }
    out.push_str("/>\n");
    Ok(())
}

fn write_line(out: &mut String, line: &LinePrimitive) -> ChartResult<()> {
    write!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
        line.x1, line.y1, line.x2, line.y2
    )?;
    write_paint_attr(out, "stroke", line.color)?;
    write!(out, r#" stroke-width="{}""#, line.stroke_width)?;
    out.push_str("/>\n");
    Ok(())
}

fn write_text(out: &mut String, text: &TextPrimitive) -> ChartResult<()> {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    write!(
        out,
        r#"<text x="{}" y="{}" font-size="{}" text-anchor="{anchor}""#,
        text.x, text.y, text.font_size_px
    )?;
    write_paint_attr(out, "fill", text.color)?;
    out.push('>');
    out.push_str(&escape_xml(&text.text));
    out.push_str("</text>\n");
    Ok(())
}

/// Serializes path commands using the SVG path grammar.
#[must_use]
pub fn path_data(commands: &[PathCommand]) -> String {
    let mut data = String::new();
    for command in commands {
        if !data.is_empty() {
            data.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = match *command {
            PathCommand::MoveTo { x, y } => write!(data, "M {x},{y}"),
            PathCommand::LineTo { x, y } => write!(data, "L {x},{y}"),
            PathCommand::QuadTo { cx, cy, x, y } => write!(data, "Q {cx},{cy} {x},{y}"),
            PathCommand::SmoothQuadTo { x, y } => write!(data, "T {x},{y}"),
            PathCommand::ArcTo {
                rx,
                ry,
                large_arc,
                sweep,
                x,
                y,
            } => write!(
                data,
                "A {rx},{ry} 0 {},{} {x},{y}",
                u8::from(large_arc),
                u8::from(sweep)
            ),
            PathCommand::Close => write!(data, "Z"),
        };
    }
    data
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) -> ChartResult<()> {
    write!(out, r#" {name}="{}""#, color.to_hex())?;
    if color.alpha < 1.0 {
        write!(out, r#" {name}-opacity="{}""#, color.alpha)?;
    }
    Ok(())
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
