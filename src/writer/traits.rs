/// Indentation state for writing an outline
#[derive(Debug, Clone, Copy)]
pub struct WriteContext {
    pub depth: usize,
}

impl WriteContext {
    pub fn new() -> Self {
        Self { depth: 0 }
    }

    pub fn with_depth(&self, depth: usize) -> Self {
        Self { depth }
    }

    pub fn nested(&self) -> Self {
        self.with_depth(self.depth + 1)
    }

    pub fn indent(&self) -> String {
        "  ".repeat(self.depth)
    }
}

impl Default for WriteContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain-text outline of an output node
pub trait Outline {
    fn outline(&self, context: &WriteContext) -> String;
}
