use crate::domain::triangle::is_triangle;
use std::fmt;
use std::ops::Add;

/// Three side lengths, in the order they were supplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sides<T> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T> Sides<T>
where
    T: Copy + Add<Output = T> + PartialOrd,
{
    pub fn new(a: T, b: T, c: T) -> Self {
        Self { a, b, c }
    }

    pub fn is_triangle(&self) -> bool {
        is_triangle(self.a, self.b, self.c)
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from(self.is_triangle())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Triangle,
    NotTriangle,
}

impl From<bool> for Verdict {
    fn from(valid: bool) -> Self {
        if valid {
            Verdict::Triangle
        } else {
            Verdict::NotTriangle
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Triangle => f.write_str("This is a triangle."),
            Verdict::NotTriangle => f.write_str("This is not a triangle."),
        }
    }
}

/// 1-based position of the side currently being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SideLabel(u8);

impl SideLabel {
    pub const ALL: [SideLabel; 3] = [SideLabel(1), SideLabel(2), SideLabel(3)];

    pub fn prompt(self) -> String {
        format!("Enter side {}: ", self.0)
    }
}

impl fmt::Display for SideLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "side {}", self.0)
    }
}
