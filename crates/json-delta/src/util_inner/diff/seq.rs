//! Myers' diff over abstract sequences, in linear space.
//!
//! The two sequences are never materialized: the engine only sees their
//! lengths and an equality callback `eq(i, j)` comparing element `i` of the
//! old sequence with element `j` of the new one. Output is a lazy stream of
//! [`Block`]s that, consumed to the end, partitions both index ranges into
//! alternating matching and non-matching runs.
//!
//! The search is the bidirectional middle-snake variant: forward and reverse
//! furthest-reaching frontiers are kept in one buffer of `2 * (min(N, M) + 1)`
//! entries per half, indexed modulo their size, and sub-problems are handled
//! with an explicit stack instead of recursion.

use std::ops::Range;

/// One aligned run of the two sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `old` and `new` have the same length and match element by element.
    Same { old: Range<usize>, new: Range<usize> },
    /// Elements in `old` are removed and elements in `new` inserted. Either
    /// range may be empty, never both.
    Changed { old: Range<usize>, new: Range<usize> },
}

impl Block {
    pub fn old_range(&self) -> &Range<usize> {
        match self {
            Block::Same { old, .. } | Block::Changed { old, .. } => old,
        }
    }

    pub fn new_range(&self) -> &Range<usize> {
        match self {
            Block::Same { new, .. } | Block::Changed { new, .. } => new,
        }
    }

    pub fn is_same(&self) -> bool {
        matches!(self, Block::Same { .. })
    }
}

/// A sub-problem: `(old_start, old_len, new_start, new_len)`.
type Frame = (usize, usize, usize, usize);

/// Outcome of a middle-snake search.
enum Split {
    /// Solve `first` then `second`; the snake between them is common.
    At { first: Frame, second: Frame },
    /// No useful split; the whole frame is one changed run.
    Whole,
}

/// Lazy block iterator returned by [`diff_blocks`].
pub struct Blocks<F> {
    eq: F,
    old_len: usize,
    new_len: usize,
    stack: Vec<Frame>,
    buf: Vec<isize>,
    /// Position up to which blocks have been emitted.
    pos: (usize, usize),
    /// Last change found, held back so adjacent changes can be merged.
    pending: Option<(Range<usize>, Range<usize>)>,
    queued: Option<Block>,
}

/// Diff two sequences of length `old_len` and `new_len`.
///
/// `eq(i, j)` must report whether old element `i` equals new element `j`.
///
/// # Examples
///
/// ```
/// use json_delta::util_inner::diff::seq::{diff_blocks, Block};
///
/// let old = [1, 2, 3, 4];
/// let new = [1, 3, 4, 5];
/// let blocks: Vec<Block> = diff_blocks(old.len(), new.len(), |i, j| old[i] == new[j]).collect();
/// assert_eq!(
///     blocks,
///     vec![
///         Block::Same { old: 0..1, new: 0..1 },
///         Block::Changed { old: 1..2, new: 1..1 },
///         Block::Same { old: 2..4, new: 1..3 },
///         Block::Changed { old: 4..4, new: 3..4 },
///     ]
/// );
/// ```
pub fn diff_blocks<F>(old_len: usize, new_len: usize, eq: F) -> Blocks<F>
where
    F: FnMut(usize, usize) -> bool,
{
    let mut stack = Vec::new();
    if old_len + new_len > 0 {
        stack.push((0, old_len, 0, new_len));
    }
    Blocks {
        eq,
        old_len,
        new_len,
        stack,
        buf: Vec::new(),
        pos: (0, 0),
        pending: None,
        queued: None,
    }
}

impl<F> Blocks<F>
where
    F: FnMut(usize, usize) -> bool,
{
    /// Only the non-matching runs, as `(old_range, new_range)` pairs.
    pub fn changes(self) -> impl Iterator<Item = (Range<usize>, Range<usize>)> {
        self.filter_map(|block| match block {
            Block::Changed { old, new } => Some((old, new)),
            Block::Same { .. } => None,
        })
    }

    fn emit(&mut self, (old, new): (Range<usize>, Range<usize>)) -> Block {
        let (x, y) = self.pos;
        self.pos = (old.end, new.end);
        let changed = Block::Changed { old: old.clone(), new: new.clone() };
        if x < old.start {
            self.queued = Some(changed);
            Block::Same { old: x..old.start, new: y..new.start }
        } else {
            changed
        }
    }

    /// Run the engine until it yields the next raw change, in sequence order.
    fn next_change(&mut self) -> Option<(Range<usize>, Range<usize>)> {
        while let Some((mut i, mut n, mut j, mut m)) = self.stack.pop() {
            while n > 0 && m > 0 && (self.eq)(i, j) {
                i += 1;
                j += 1;
                n -= 1;
                m -= 1;
            }
            while n > 0 && m > 0 && (self.eq)(i + n - 1, j + m - 1) {
                n -= 1;
                m -= 1;
            }
            if n == 0 && m == 0 {
                continue;
            }
            if n == 0 || m == 0 {
                return Some((i..i + n, j..j + m));
            }
            match self.middle_snake(i, n, j, m) {
                Split::At { first, second } => {
                    self.stack.push(second);
                    self.stack.push(first);
                }
                Split::Whole => return Some((i..i + n, j..j + m)),
            }
        }
        None
    }

    fn middle_snake(&mut self, i: usize, n: usize, j: usize, m: usize) -> Split {
        let (ni, mi) = (n as isize, m as isize);
        let total = ni + mi;
        let parity = total & 1;
        let delta = ni - mi;
        let span = 2 * (n.min(m) as isize + 1);
        let hmax = (total + parity) / 2;

        self.buf.clear();
        self.buf.resize(2 * span as usize, 0);
        let fwd = |k: isize| k.rem_euclid(span) as usize;
        let rev = |k: isize| (span + k.rem_euclid(span)) as usize;

        for h in 0..=hmax {
            let kmin = 2 * (h - mi).max(0) - h;
            let kmax = h - 2 * (h - ni).max(0);

            let mut k = kmin;
            while k <= kmax {
                let u = if k == -h || (k != h && self.buf[fwd(k - 1)] < self.buf[fwd(k + 1)]) {
                    self.buf[fwd(k + 1)]
                } else {
                    self.buf[fwd(k - 1)] + 1
                };
                let v = u - k;
                let (mut x, mut y) = (u, v);
                while x < ni && y < mi && (self.eq)(i + x as usize, j + y as usize) {
                    x += 1;
                    y += 1;
                }
                self.buf[fwd(k)] = x;
                let z = delta - k;
                if parity == 1 && z >= 1 - h && z < h && x + self.buf[rev(z)] >= ni {
                    if h > 1 || x != u {
                        return Split::At {
                            first: (i, u as usize, j, v as usize),
                            second: (
                                i + x as usize,
                                n - x as usize,
                                j + y as usize,
                                m - y as usize,
                            ),
                        };
                    }
                    return Split::Whole;
                }
                k += 2;
            }

            let mut k = kmin;
            while k <= kmax {
                let u = if k == -h || (k != h && self.buf[rev(k - 1)] < self.buf[rev(k + 1)]) {
                    self.buf[rev(k + 1)]
                } else {
                    self.buf[rev(k - 1)] + 1
                };
                let v = u - k;
                let (mut x, mut y) = (u, v);
                while x < ni
                    && y < mi
                    && (self.eq)(i + n - 1 - x as usize, j + m - 1 - y as usize)
                {
                    x += 1;
                    y += 1;
                }
                self.buf[rev(k)] = x;
                let z = delta - k;
                if parity == 0 && z >= -h && z <= h && x + self.buf[fwd(z)] >= ni {
                    if h > 0 || x != u {
                        return Split::At {
                            first: (i, n - x as usize, j, m - y as usize),
                            second: (
                                i + n - u as usize,
                                u as usize,
                                j + m - v as usize,
                                v as usize,
                            ),
                        };
                    }
                    return Split::Whole;
                }
                k += 2;
            }
        }
        Split::Whole
    }
}

impl<F> Iterator for Blocks<F>
where
    F: FnMut(usize, usize) -> bool,
{
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        if let Some(block) = self.queued.take() {
            return Some(block);
        }
        loop {
            match self.next_change() {
                Some((old, new)) => match self.pending.take() {
                    Some(mut prev) if prev.0.end == old.start && prev.1.end == new.start => {
                        prev.0.end = old.end;
                        prev.1.end = new.end;
                        self.pending = Some(prev);
                    }
                    Some(prev) => {
                        self.pending = Some((old, new));
                        return Some(self.emit(prev));
                    }
                    None => self.pending = Some((old, new)),
                },
                None => {
                    if let Some(prev) = self.pending.take() {
                        return Some(self.emit(prev));
                    }
                    let (x, y) = self.pos;
                    if x < self.old_len {
                        self.pos = (self.old_len, self.new_len);
                        return Some(Block::Same { old: x..self.old_len, new: y..self.new_len });
                    }
                    return None;
                }
            }
        }
    }
}
