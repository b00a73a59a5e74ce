//! Fixed-layout save blob
//!
//! Layout: `i32[BRICK_LINES * BRICKS_PER_LINE]` brick flags (1 active,
//! 0 destroyed) in row-major order, followed by one `i32` life count. Values
//! are in native byte order.

use thiserror::Error;

use crate::consts::{BRICK_LINES, BRICKS_PER_LINE, LIVES};
use crate::sim::GameState;

const WORD: usize = std::mem::size_of::<i32>();

/// Total blob size in bytes
pub const BLOB_LEN: usize = (BRICK_LINES * BRICKS_PER_LINE + 1) * WORD;

/// Ways a save blob can fail to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CorruptSave {
    #[error("blob is {len} bytes, ran out reading at offset {offset}")]
    Truncated { offset: usize, len: usize },
    #[error("{extra} unexpected bytes after the life count")]
    TrailingBytes { extra: usize },
    #[error("brick ({row}, {col}) has flag {value}, expected 0 or 1")]
    InvalidBrickFlag { row: usize, col: usize, value: i32 },
    #[error("life count {0} is out of range")]
    InvalidLives(i32),
}

/// Sequential reader over a borrowed blob
#[derive(Debug)]
pub struct BlobReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> BlobReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    /// Read the next native-endian `i32`
    pub fn read_i32(&mut self) -> Result<i32, CorruptSave> {
        let end = self.offset + WORD;
        let chunk = self
            .bytes
            .get(self.offset..end)
            .ok_or(CorruptSave::Truncated {
                offset: self.offset,
                len: self.bytes.len(),
            })?;
        self.offset = end;
        Ok(bytemuck::pod_read_unaligned(chunk))
    }

    /// Succeed only if every byte was consumed
    pub fn finish(self) -> Result<(), CorruptSave> {
        match self.remaining() {
            0 => Ok(()),
            extra => Err(CorruptSave::TrailingBytes { extra }),
        }
    }
}

/// Snapshot of the persisted part of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveBlob {
    pub bricks: [[bool; BRICKS_PER_LINE]; BRICK_LINES],
    pub lives: u32,
}

impl SaveBlob {
    pub fn capture(state: &GameState) -> Self {
        Self {
            bricks: state.bricks.active_flags(),
            lives: state.paddle.lives,
        }
    }

    /// Overwrite brick flags and lives in `state`
    pub fn apply(&self, state: &mut GameState) {
        state.bricks.set_active_flags(&self.bricks);
        state.paddle.lives = self.lives;
    }

    pub fn active_bricks(&self) -> usize {
        self.bricks.iter().flatten().filter(|&&active| active).count()
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut words: Vec<i32> = Vec::with_capacity(BLOB_LEN / WORD);
        words.extend(self.bricks.iter().flatten().map(|&active| i32::from(active)));
        words.push(i32::try_from(self.lives).unwrap_or(i32::MAX));
        bytemuck::cast_slice::<i32, u8>(&words).to_vec()
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, CorruptSave> {
        let mut reader = BlobReader::new(bytes);

        let mut bricks = [[false; BRICKS_PER_LINE]; BRICK_LINES];
        for (row, line) in bricks.iter_mut().enumerate() {
            for (col, flag) in line.iter_mut().enumerate() {
                *flag = match reader.read_i32()? {
                    0 => false,
                    1 => true,
                    value => return Err(CorruptSave::InvalidBrickFlag { row, col, value }),
                };
            }
        }

        let raw_lives = reader.read_i32()?;
        let lives = u32::try_from(raw_lives)
            .ok()
            .filter(|lives| (1..=LIVES).contains(lives))
            .ok_or(CorruptSave::InvalidLives(raw_lives))?;

        reader.finish()?;
        Ok(Self { bricks, lives })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words_to_bytes(words: &[i32]) -> Vec<u8> {
        words.iter().flat_map(|w| w.to_ne_bytes()).collect()
    }

    fn valid_words() -> Vec<i32> {
        let mut words = vec![1; BRICK_LINES * BRICKS_PER_LINE];
        words.push(3);
        words
    }

    #[test]
    fn test_blob_size() {
        assert_eq!(BLOB_LEN, 204);
        let blob = SaveBlob::capture(&GameState::new());
        assert_eq!(blob.encode().len(), BLOB_LEN);
    }

    #[test]
    fn test_layout_is_row_major_then_lives() {
        let mut state = GameState::new();
        state.bricks.get_mut(0, 1).unwrap().active = false;
        state.bricks.get_mut(1, 0).unwrap().active = false;
        state.paddle.lives = 2;

        let bytes = SaveBlob::capture(&state).encode();
        let mut reader = BlobReader::new(&bytes);
        let words: Vec<i32> = (0..BLOB_LEN / WORD)
            .map(|_| reader.read_i32().unwrap())
            .collect();
        assert_eq!(words[0], 1);
        assert_eq!(words[1], 0);
        assert_eq!(words[BRICKS_PER_LINE], 0);
        assert_eq!(words[BRICKS_PER_LINE + 1], 1);
        assert_eq!(*words.last().unwrap(), 2);
        assert!(reader.finish().is_ok());
    }

    #[test]
    fn test_decode_valid() {
        let mut words = valid_words();
        words[7] = 0;
        let blob = SaveBlob::decode(&words_to_bytes(&words)).unwrap();
        assert!(!blob.bricks[0][7]);
        assert_eq!(blob.active_bricks(), BRICK_LINES * BRICKS_PER_LINE - 1);
        assert_eq!(blob.lives, 3);
    }

    #[test]
    fn test_decode_truncated() {
        let bytes = words_to_bytes(&valid_words());
        let err = SaveBlob::decode(&bytes[..BLOB_LEN - 2]).unwrap_err();
        assert_eq!(
            err,
            CorruptSave::Truncated {
                offset: BLOB_LEN - WORD,
                len: BLOB_LEN - 2
            }
        );
        assert!(matches!(
            SaveBlob::decode(&[]),
            Err(CorruptSave::Truncated { offset: 0, len: 0 })
        ));
    }

    #[test]
    fn test_decode_trailing_bytes() {
        let mut bytes = words_to_bytes(&valid_words());
        bytes.extend_from_slice(&[0, 0]);
        assert_eq!(
            SaveBlob::decode(&bytes),
            Err(CorruptSave::TrailingBytes { extra: 2 })
        );
    }

    #[test]
    fn test_decode_bad_flag() {
        let mut words = valid_words();
        words[13] = 7;
        assert_eq!(
            SaveBlob::decode(&words_to_bytes(&words)),
            Err(CorruptSave::InvalidBrickFlag {
                row: 1,
                col: 3,
                value: 7
            })
        );
    }

    #[test]
    fn test_decode_bad_lives() {
        for lives in [0, -1, LIVES as i32 + 1] {
            let mut words = valid_words();
            *words.last_mut().unwrap() = lives;
            assert_eq!(
                SaveBlob::decode(&words_to_bytes(&words)),
                Err(CorruptSave::InvalidLives(lives))
            );
        }
    }

    #[test]
    fn test_apply_keeps_ball_docked() {
        let mut words = valid_words();
        words[0] = 0;
        *words.last_mut().unwrap() = 1;
        let blob = SaveBlob::decode(&words_to_bytes(&words)).unwrap();

        let mut state = GameState::new();
        blob.apply(&mut state);
        assert!(!state.bricks.get(0, 0).unwrap().active);
        assert_eq!(state.paddle.lives, 1);
        assert!(!state.ball.active);
    }
}
