use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

use super::error::{PredictorError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content {
    Safe,
    Bomb
}

impl Content {
    pub fn is_safe(&self) -> bool {
        match *self {
            Content::Safe => true,
            Content::Bomb => false
        }
    }

    fn to_str(&self) -> &'static str {
        match *self {
            Content::Safe => "□",
            Content::Bomb => "■"
        }
    }
}

/// Zero-based (row, column) coordinate.
#[derive(Debug, Eq, PartialEq, Clone, Hash, Copy)]
pub struct Point(pub usize, pub usize);

impl Point {
    pub const ORIGIN: Point = Point(0, 0);

    pub fn row(&self) -> usize {
        self.0
    }

    pub fn col(&self) -> usize {
        self.1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSize {
    pub width: usize,
    pub height: usize
}

impl BoardSize {
    pub fn square(side: usize) -> BoardSize {
        BoardSize{width: side, height: side}
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, point: &Point) -> bool {
        point.0 < self.height && point.1 < self.width
    }

    pub fn points(&self) -> Vec<Point> {
        (0..self.area()).filter_map(|x| self.point_from_integer(x)).collect()
    }

    pub fn point_from_integer(&self, x: usize) -> Option<Point> {
        if x >= self.area() {
            return None
        }
        Some(Point(x/self.width, x%self.width))
    }
}

/// Square field of bombs and safe cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: BoardSize,
    field: Vec<Vec<Content>>,
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.field.iter() {
            for cell in row {
                write!(f, "{}", cell.to_str())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Grid {
    /// Lay out `grid_size² - bombs_count` safe cells followed by the bombs,
    /// shuffle them with `rng` and cut the result into rows.
    pub fn generate<R: Rng + ?Sized>(grid_size: usize, bombs_count: usize, rng: &mut R) -> Result<Grid> {
        if grid_size == 0 {
            return Err(PredictorError::InvalidGridSize)
        }
        let cells = grid_size.checked_mul(grid_size)
            .ok_or(PredictorError::GridTooLarge(grid_size))?;
        let size = BoardSize::square(grid_size);
        if bombs_count > cells {
            return Err(PredictorError::TooManyBombs{bombs: bombs_count, cells})
        }

        let mut flat = vec![Content::Safe; cells - bombs_count];
        flat.extend(std::iter::repeat(Content::Bomb).take(bombs_count));
        flat.shuffle(rng);
        debug!("generated {}x{} grid with {} bombs", grid_size, grid_size, bombs_count);

        let field = flat.chunks(size.width).map(|row| row.to_vec()).collect();
        Ok(Grid{size, field})
    }

    /// Build a grid from explicit rows. Rows must all be as long as there are rows.
    pub fn from_rows(field: Vec<Vec<Content>>) -> Result<Grid> {
        let side = field.len();
        if side == 0 || field.iter().any(|row| row.len() != side) {
            return Err(PredictorError::InvalidGridSize)
        }
        Ok(Grid{size: BoardSize::square(side), field})
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn rows(&self) -> &[Vec<Content>] {
        &self.field
    }

    pub fn get(&self, point: &Point) -> Option<Content> {
        self.field.get(point.0).and_then(|row| row.get(point.1)).copied()
    }

    pub fn is_safe(&self, point: &Point) -> bool {
        self.get(point).map_or(false, |content| content.is_safe())
    }

    pub fn bomb_count(&self) -> usize {
        self.field.iter().flatten()
            .filter(|content| !content.is_safe())
            .count()
    }

    pub fn safe_count(&self) -> usize {
        self.size.area() - self.bomb_count()
    }
}

#[cfg(test)]
use proptest::prelude::*;
