use crate::error::{Error, Result};

#[inline(always)]
#[cold]
pub const fn cold() {}

#[inline(always)]
pub const fn unlikely(b: bool) -> bool {
    if b {
        cold();
    }
    b
}

/// Forward-only cursor over an input slice.
pub struct Bytes<'a>(&'a [u8]);

impl<'a> Bytes<'a> {
    #[inline]
    pub const fn new(buf: &'a [u8]) -> Self {
        Self(buf)
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        match self.0.split_first() {
            Some((&v, tail)) => {
                self.0 = tail;
                Ok(v)
            }
            None => {
                cold();
                Err(Error::UnexpectedBufferEnd)
            }
        }
    }

    #[inline]
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        if unlikely(self.0.len() < N) {
            return Err(Error::UnexpectedBufferEnd);
        }
        let (head, tail) = self.0.split_at(N);
        self.0 = tail;
        let mut out = [0; N];
        out.copy_from_slice(head);
        Ok(out)
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
