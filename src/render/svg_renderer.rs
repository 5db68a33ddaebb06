use std::fmt::Write;

use crate::error::{ChartError, ChartResult};
use crate::render::{CursorFrame, ElementRole, PathElement, Renderer};

/// Renders cursor frames into standalone SVG group markup.
///
/// The latest output is kept in [`SvgRenderer::output`]; each render
/// replaces it.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    output: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Wraps the latest group in an `<svg>` document of the given size.
    #[must_use]
    pub fn document(&self, width: f64, height: f64) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\">{}</svg>",
            self.output
        )
    }
}

fn role_class(role: ElementRole) -> &'static str {
    match role {
        ElementRole::LineX => "cursor-line-x",
        ElementRole::LineY => "cursor-line-y",
        ElementRole::Selection => "cursor-selection",
    }
}

fn write_element(out: &mut String, role: ElementRole, element: &PathElement) -> std::fmt::Result {
    let style = element.style();
    write!(
        out,
        "<path class=\"{}\" d=\"{}\" transform=\"translate({},{})\"",
        role_class(role),
        element.path().trim(),
        element.x(),
        element.y()
    )?;
    if element.opacity() < 1.0 {
        write!(out, " opacity=\"{}\"", element.opacity())?;
    }
    match style.fill {
        Some(fill) => write!(
            out,
            " fill=\"{}\" fill-opacity=\"{}\"",
            fill.to_css(),
            style.fill_opacity
        )?,
        None => out.push_str(" fill=\"none\""),
    }
    if let Some(stroke) = style.stroke {
        write!(
            out,
            " stroke=\"{}\" stroke-width=\"{}\" stroke-opacity=\"{}\"",
            stroke.to_css(),
            style.stroke_width,
            style.stroke_opacity
        )?;
        if let Some(dash) = &style.stroke_dasharray {
            write!(out, " stroke-dasharray=\"{dash}\"")?;
        }
    }
    out.push_str("/>");
    Ok(())
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &CursorFrame) -> ChartResult<()> {
        frame.validate()?;
        let mut out = String::new();
        let origin = frame.frame.origin;
        let write_result = (|| -> std::fmt::Result {
            write!(
                out,
                "<g class=\"cursor\" transform=\"translate({},{})\"",
                origin.x, origin.y
            )?;
            if frame.opacity < 1.0 {
                write!(out, " opacity=\"{}\"", frame.opacity)?;
            }
            out.push('>');
            for (role, element) in &frame.elements {
                write_element(&mut out, *role, element)?;
            }
            out.push_str("</g>");
            Ok(())
        })();
        write_result.map_err(|err| ChartError::Render(err.to_string()))?;
        self.output = out;
        Ok(())
    }
}
