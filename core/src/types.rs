/// Single axis used for row/column indices and for the row/column counts.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Shifts `coords` by `offset`, returning a value only when it stays inside `bounds`.
fn shifted(coords: Coord2, offset: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let row = coords.0.checked_add_signed(offset.0)?;
    let col = coords.1.checked_add_signed(offset.1)?;
    (row < bounds.0 && col < bounds.1).then_some((row, col))
}

/// Iterator over the 8-connected neighbors of a cell, clipped to the grid.
///
/// Corner cells have 3 neighbors, edge cells 5 and interior cells 8.
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Coord2,
    bounds: Coord2,
    next: usize,
}

impl Neighbors {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            next: 0,
        }
    }
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&offset) = OFFSETS.get(self.next) {
            self.next += 1;
            if let Some(coords) = shifted(self.center, offset, self.bounds) {
                return Some(coords);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(OFFSETS.len() - self.next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let found: Vec<_> = Neighbors::new((0, 0), (8, 8)).collect();

        assert_eq!(found, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn edge_has_five_neighbors() {
        assert_eq!(Neighbors::new((0, 3), (8, 8)).count(), 5);
        assert_eq!(Neighbors::new((7, 3), (8, 8)).count(), 5);
        assert_eq!(Neighbors::new((4, 7), (8, 8)).count(), 5);
    }

    #[test]
    fn interior_has_eight_neighbors() {
        let found: Vec<_> = Neighbors::new((1, 1), (3, 3)).collect();

        assert_eq!(found.len(), 8);
        assert!(!found.contains(&(1, 1)));
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert_eq!(Neighbors::new((0, 0), (1, 1)).next(), None);
    }

    #[test]
    fn area_saturates() {
        assert_eq!(mult(8, 8), 64);
        assert_eq!(mult(Coord::MAX, Coord::MAX), 65025);
    }
}
