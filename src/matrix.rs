// Copyright (C) 2020-2026 Andy Kurnia.

// A lane is one row (across) or one column (down) of a row-major grid.
#[derive(Clone, Copy, Debug)]
pub struct Strider {
    base: i16,
    step: i8,
    len: i8,
}

impl Strider {
    #[inline(always)]
    pub fn len(&self) -> i8 {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn at(&self, idx: i8) -> usize {
        ((self.base as isize) + (idx as isize) * (self.step as isize)) as usize
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dim {
    pub rows: i8,
    pub cols: i8,
}

impl Dim {
    #[inline(always)]
    pub fn across(&self, row: i8) -> Strider {
        Strider {
            base: (row as i16) * (self.cols as i16),
            step: 1,
            len: self.cols,
        }
    }

    #[inline(always)]
    pub fn down(&self, col: i8) -> Strider {
        Strider {
            base: col as i16,
            step: self.cols,
            len: self.rows,
        }
    }

    #[inline(always)]
    pub fn lane(&self, down: bool, lane: i8) -> Strider {
        if down {
            self.down(lane)
        } else {
            self.across(lane)
        }
    }

    // number of lanes running in the given direction
    #[inline(always)]
    pub fn num_lanes(&self, down: bool) -> i8 {
        if down { self.cols } else { self.rows }
    }

    #[inline(always)]
    pub fn at_row_col(&self, row: i8, col: i8) -> usize {
        (((row as isize) * (self.cols as isize)) + (col as isize)) as usize
    }

    #[inline(always)]
    pub fn area(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn striders_walk_rows_and_columns() {
        let dim = Dim { rows: 15, cols: 15 };
        let across = dim.across(2);
        assert_eq!(across.at(0), 30);
        assert_eq!(across.at(14), 44);
        let down = dim.down(3);
        assert_eq!(down.at(0), 3);
        assert_eq!(down.at(1), 18);
        assert_eq!(down.len(), 15);
        assert_eq!(dim.lane(true, 3).at(4), dim.at_row_col(4, 3));
        assert_eq!(dim.lane(false, 4).at(3), dim.at_row_col(4, 3));
    }
}
