/// A board coordinate as `(file, rank)`, both `0..=7` when on the board.
/// Values outside that range are representable on purpose: `step` returns
/// them freely and every consumer rejects them through `is_valid` or the
/// occupancy classifier.
pub type Square = (i8, i8);

/// The four traversal axes. Each axis is walked in both signed senses, so
/// four variants cover all eight compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalRising,
    DiagonalFalling,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalRising,
        Direction::DiagonalFalling,
    ];
}

/// Pure coordinate arithmetic; the result may be off the board.
pub fn step(from: Square, direction: Direction, distance: i8) -> Square {
    let (file, rank) = from;
    match direction {
        Direction::Horizontal => (file + distance, rank),
        Direction::Vertical => (file, rank + distance),
        Direction::DiagonalRising => (file + distance, rank + distance),
        Direction::DiagonalFalling => (file + distance, rank - distance),
    }
}

#[inline]
pub fn is_valid(square: Square) -> bool {
    let (file, rank) = square;
    (0..8).contains(&file) && (0..8).contains(&rank)
}

/// Canonical grid index: rank 8 occupies the first row so a flat array
/// prints top-to-bottom like a board diagram. Callers must pass a valid
/// square.
#[inline]
pub fn square_to_index(square: Square) -> usize {
    let (file, rank) = square;
    (7 - rank) as usize * 8 + file as usize
}

#[inline]
pub fn index_to_square(index: usize) -> Square {
    let file = (index % 8) as i8;
    let rank = 7 - (index / 8) as i8;
    (file, rank)
}

/// Convert a coordinate (for example: "e4") to a square.
pub fn algebraic_to_square(text: &str) -> Result<Square, String> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {text}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    Ok(((file - b'a') as i8, (rank - b'1') as i8))
}

/// Convert a square to its coordinate name (for example: "e4").
pub fn square_to_algebraic(square: Square) -> Result<String, String> {
    if !is_valid(square) {
        return Err(format!("Square out of bounds: {square:?}"));
    }

    let (file, rank) = square;
    let file_char = char::from(b'a' + file as u8);
    let rank_char = char::from(b'1' + rank as u8);
    Ok(format!("{file_char}{rank_char}"))
}
