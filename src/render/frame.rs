use serde::{Deserialize, Serialize};

use crate::core::PlotFrame;
use crate::error::{ChartError, ChartResult};
use crate::render::PathElement;

/// Which cursor part an element draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementRole {
    LineX,
    LineY,
    Selection,
}

/// Backend-agnostic scene for one cursor draw pass.
///
/// Element positions are relative to `frame.origin`.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorFrame {
    pub frame: PlotFrame,
    pub opacity: f64,
    pub elements: Vec<(ElementRole, PathElement)>,
}

impl CursorFrame {
    #[must_use]
    pub fn new(frame: PlotFrame) -> Self {
        Self {
            frame,
            opacity: 1.0,
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_element(mut self, role: ElementRole, element: PathElement) -> Self {
        self.elements.push((role, element));
        self
    }

    #[must_use]
    pub fn element(&self, role: ElementRole) -> Option<&PathElement> {
        self.elements
            .iter()
            .find(|(entry_role, _)| *entry_role == role)
            .map(|(_, element)| element)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.frame.size.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.frame.size.width,
                height: self.frame.size.height,
            });
        }
        if !self.frame.origin.is_finite() {
            return Err(ChartError::InvalidData(
                "frame origin must be finite".to_owned(),
            ));
        }
        for (_, element) in &self.elements {
            element.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
