//! Loshu 3x3 grid and its eight planes.
//!
//! Fixed layout (row, col):
//!
//! ```text
//! 4 9 2
//! 3 5 7
//! 8 1 6
//! ```
//!
//! The grid is filled from the digits of the date of birth plus three
//! derived numbers (Mulank, life path, Kua). Zero has no cell and is dropped.
//! Digits outside 1..=9 among the derived numbers (a master life path, say)
//! are likewise dropped.

use chrono::NaiveDate;
use serde::Serialize;

use crate::profile::date_digits;

/// Layout of the grid by (row, col).
pub const LOSHU_LAYOUT: [[u32; 3]; 3] = [[4, 9, 2], [3, 5, 7], [8, 1, 6]];

/// (row, col) of digit `d` in 1..=9, indexed by `d - 1`.
const POSITIONS: [(usize, usize); 9] = [
    (2, 1), // 1
    (0, 2), // 2
    (1, 0), // 3
    (0, 0), // 4
    (1, 1), // 5
    (2, 2), // 6
    (1, 2), // 7
    (2, 0), // 8
    (0, 1), // 9
];

/// Position of a digit in the grid, `None` outside 1..=9.
pub const fn position_of(digit: u32) -> Option<(usize, usize)> {
    if matches!(digit, 1..=9) {
        Some(POSITIONS[(digit - 1) as usize])
    } else {
        None
    }
}

/// A populated Loshu grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoshuGrid {
    /// Cell text: the digit repeated once per occurrence, `None` if absent.
    pub grid: [[Option<String>; 3]; 3],
    /// Digits 1..=9 with no occurrence, ascending.
    pub missing_numbers: Vec<u32>,
    /// Digits 1..=9 occurring at least twice, ascending.
    pub overloaded_numbers: Vec<u32>,
    #[serde(skip)]
    counts: [u32; 9],
}

impl LoshuGrid {
    /// Build the grid from a multiset of digits. Values outside 1..=9 are ignored.
    pub fn from_digits(digits: impl IntoIterator<Item = u32>) -> Self {
        let mut counts = [0u32; 9];
        for d in digits {
            if (1..=9).contains(&d) {
                counts[(d - 1) as usize] += 1;
            }
        }

        let mut grid: [[Option<String>; 3]; 3] = Default::default();
        let mut missing_numbers = Vec::new();
        let mut overloaded_numbers = Vec::new();
        for (i, &count) in counts.iter().enumerate() {
            let digit = i as u32 + 1;
            let (row, col) = POSITIONS[i];
            match count {
                0 => missing_numbers.push(digit),
                n => {
                    grid[row][col] = Some(digit.to_string().repeat(n as usize));
                    if n >= 2 {
                        overloaded_numbers.push(digit);
                    }
                }
            }
        }

        Self {
            grid,
            missing_numbers,
            overloaded_numbers,
            counts,
        }
    }

    /// Occurrences of `digit`; 0 outside 1..=9.
    pub fn count(&self, digit: u32) -> u32 {
        if (1..=9).contains(&digit) {
            self.counts[(digit - 1) as usize]
        } else {
            0
        }
    }

    /// Cell text at (row, col), `None` when empty or out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.grid.get(row)?.get(col)?.as_deref()
    }

    /// Digits occurring at least once, ascending.
    pub fn present_numbers(&self) -> Vec<u32> {
        (1..=9).filter(|&d| self.count(d) > 0).collect()
    }

    /// Planes whose three digits are all present.
    pub fn complete_planes(&self) -> Vec<Plane> {
        let present = self.present_numbers();
        ALL_PLANES
            .into_iter()
            .filter(|p| is_plane_complete(*p, &present))
            .collect()
    }

    /// Planes with at least one digit missing.
    pub fn incomplete_planes(&self) -> Vec<Plane> {
        let present = self.present_numbers();
        ALL_PLANES
            .into_iter()
            .filter(|p| !is_plane_complete(*p, &present))
            .collect()
    }
}

/// Populate the grid for a birth date and its three special numbers.
pub fn loshu_grid(date_of_birth: NaiveDate, mulank: u32, life_path: u32, kua: u32) -> LoshuGrid {
    let digits = date_digits(date_of_birth);
    LoshuGrid::from_digits(digits.into_iter().chain([mulank, life_path, kua]))
}

/// The eight three-cell lines of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Plane {
    /// Top row 4-9-2.
    Mental,
    /// Middle row 3-5-7.
    Emotional,
    /// Bottom row 8-1-6.
    Practical,
    /// Left column 4-3-8.
    Thought,
    /// Middle column 9-5-1.
    Will,
    /// Right column 2-7-6.
    Action,
    /// Diagonal 4-5-6.
    Golden,
    /// Diagonal 2-5-8.
    Silver,
}

/// All eight planes: rows, then columns, then diagonals.
pub const ALL_PLANES: [Plane; 8] = [
    Plane::Mental,
    Plane::Emotional,
    Plane::Practical,
    Plane::Thought,
    Plane::Will,
    Plane::Action,
    Plane::Golden,
    Plane::Silver,
];

impl Plane {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mental => "Mental Plane",
            Self::Emotional => "Emotional Plane",
            Self::Practical => "Practical Plane",
            Self::Thought => "Thought Plane",
            Self::Will => "Will Plane",
            Self::Action => "Action Plane",
            Self::Golden => "Golden Yog",
            Self::Silver => "Silver Yog",
        }
    }

    /// The three digits on the plane.
    pub const fn digits(self) -> [u32; 3] {
        match self {
            Self::Mental => [4, 9, 2],
            Self::Emotional => [3, 5, 7],
            Self::Practical => [8, 1, 6],
            Self::Thought => [4, 3, 8],
            Self::Will => [9, 5, 1],
            Self::Action => [2, 7, 6],
            Self::Golden => [4, 5, 6],
            Self::Silver => [2, 5, 8],
        }
    }
}

/// A plane is complete iff each of its digits is present.
pub fn is_plane_complete(plane: Plane, present: &[u32]) -> bool {
    plane.digits().iter().all(|d| present.contains(d))
}
