/// A pixel-aligned grid position. Coordinates are always multiples of the
/// configured cell size; equality is by value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Pixel position of the top-left corner of a grid cell.
    pub fn from_cell(cell_x: i32, cell_y: i32, cell_size: u32) -> Self {
        Self {
            x: cell_x * cell_size as i32,
            y: cell_y * cell_size as i32,
        }
    }

    pub fn to_cell(self, cell_size: u32) -> (i32, i32) {
        (self.x / cell_size as i32, self.y / cell_size as i32)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    /// Unit vector in screen coordinates (y grows downward).
    pub fn offset(self) -> (i32, i32) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_mapping_round_trips() {
        let p = Pos::from_cell(3, 7, 20);
        assert_eq!(p, Pos::new(60, 140));
        assert_eq!(p.to_cell(20), (3, 7));
    }

    #[test]
    fn offsets_are_unit_vectors() {
        for d in [Dir::Up, Dir::Down, Dir::Left, Dir::Right] {
            let (dx, dy) = d.offset();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn opposite_is_an_involution() {
        for d in [Dir::Up, Dir::Down, Dir::Left, Dir::Right] {
            assert_ne!(d.opposite(), d);
            assert_eq!(d.opposite().opposite(), d);
        }
    }
}
