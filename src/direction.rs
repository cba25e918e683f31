/// The two headings an ant can face on the stick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    Left = 0,
    Right = 1,
}

impl Direction {
    /// Both possible directions
    pub const ALL: [Direction; 2] = [Direction::Left, Direction::Right];

    /// Derive a direction from a velocity sign
    #[inline]
    pub fn from_velocity(v: f64) -> Self {
        if v < 0.0 {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    /// Get direction name as string
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}
