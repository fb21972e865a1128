// cell.rs - The two kinds of tile a grid is made of

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellType {
    Cow,
    Grass,
}

impl CellType {
    pub fn is_cow(self) -> bool {
        matches!(self, CellType::Cow)
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellType::Cow => write!(f, "cow"),
            CellType::Grass => write!(f, "grass"),
        }
    }
}
