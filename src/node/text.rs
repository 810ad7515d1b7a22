//! Text node type

// =============================================================================
// Text
// =============================================================================

/// Text content node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    /// Text content, entities already decoded
    pub content: String,
}

impl Text {
    /// Create a new text node
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Check if text content is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Get text length in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_node() {
        let text = Text::new("cell");
        assert!(!text.is_empty());
        assert_eq!(text.len(), 4);
        assert!(Text::new("").is_empty());
    }
}
