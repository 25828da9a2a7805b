/// The four measurements that make up one board-footage entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Length,
    Width,
    Thickness,
    Quantity,
}

impl Dimension {
    /// All dimensions in form order.
    pub const ALL: [Dimension; 4] = [
        Dimension::Length,
        Dimension::Width,
        Dimension::Thickness,
        Dimension::Quantity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Length => "Length",
            Self::Width => "Width",
            Self::Thickness => "Thickness",
            Self::Quantity => "Quantity",
        }
    }

    /// Placeholder text shown in an empty input field.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Quantity => "1",
            _ => "0",
        }
    }

    /// Position of the dimension inside a `[_; 4]` input array.
    pub fn index(&self) -> usize {
        match self {
            Self::Length => 0,
            Self::Width => 1,
            Self::Thickness => 2,
            Self::Quantity => 3,
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
