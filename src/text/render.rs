//! Board rendering.
//!
//! ```text
//!   H G F E D C B A
//! 8 . b . b . b . b 8
//! ...
//! 1 w . w . w . w . 1
//!   H G F E D C B A
//! ```

use std::fmt;

use crate::board::Board;
use crate::core::{Square, BOARD_SIZE};

fn write_files(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(" ")?;
    for col in 0..BOARD_SIZE {
        if let Some(square) = Square::new(0, col) {
            write!(f, " {}", square.file_letter())?;
        }
    }
    writeln!(f)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_files(f)?;
        for (row, cells) in self.rows().enumerate() {
            let label = usize::from(BOARD_SIZE) - row;
            write!(f, "{label}")?;
            for cell in cells {
                write!(f, " {}", cell.glyph())?;
            }
            writeln!(f, " {label}")?;
        }
        write_files(f)
    }
}
