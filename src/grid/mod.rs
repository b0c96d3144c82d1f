/*!
Coordinates and the bounded grid they live on.

The knowledge base reasons about a fixed `width` × `height` grid, known at
construction. [Dimensions] is the sole authority on which coordinates are
valid, how a coordinate maps to a cell index, and in which order cells and
neighbors are enumerated.

Enumeration order is load-bearing: classification passes and
safe-neighbor listings must be reproducible for identical percept histories,
so every iterator here yields coordinates in scan order — row by row from
`y = 0`, left to right within a row.

```rust
# use wumpus_kb::grid::{Coordinate, Dimensions};
let grid = Dimensions::new(3, 3);
let center = Coordinate::new(1, 1);

assert!(grid.contains(center));
assert_eq!(grid.index_of(center), 4);

let neighbors = grid.neighbors(center);
assert_eq!(
    neighbors,
    vec![
        Coordinate::new(1, 0),
        Coordinate::new(0, 1),
        Coordinate::new(2, 1),
        Coordinate::new(1, 2)
    ]
);
```
*/

use serde::Serialize;

/// A cell coordinate: `x` counts columns, `y` counts rows, both from zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Coordinate {
    /// The column of the cell.
    pub x: usize,

    /// The row of the cell.
    pub y: usize,
}

impl Coordinate {
    /// The coordinate of column `x` in row `y`.
    pub fn new(x: usize, y: usize) -> Self {
        Coordinate { x, y }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The dimensions of a bounded grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    /// Columns in the grid.
    pub width: usize,

    /// Rows in the grid.
    pub height: usize,
}

impl Dimensions {
    /// A `width` × `height` grid.
    pub fn new(width: usize, height: usize) -> Self {
        Dimensions { width, height }
    }

    /// Whether `coordinate` lies on the grid.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.x < self.width && coordinate.y < self.height
    }

    /// The number of cells on the grid.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// The scan-order index of an in-bounds coordinate.
    pub fn index_of(&self, coordinate: Coordinate) -> usize {
        coordinate.y * self.width + coordinate.x
    }

    /// Every coordinate of the grid, in scan order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Coordinate { x, y }))
    }

    /// The valid orthogonal neighbors of `coordinate`, in scan order.
    pub fn neighbors(&self, coordinate: Coordinate) -> Vec<Coordinate> {
        let Coordinate { x, y } = coordinate;
        let mut adjacent = Vec::with_capacity(4);

        if y > 0 {
            adjacent.push(Coordinate::new(x, y - 1));
        }
        if x > 0 {
            adjacent.push(Coordinate::new(x - 1, y));
        }
        if x + 1 < self.width {
            adjacent.push(Coordinate::new(x + 1, y));
        }
        if y + 1 < self.height {
            adjacent.push(Coordinate::new(x, y + 1));
        }

        adjacent
    }
}
