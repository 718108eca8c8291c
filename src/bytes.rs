use crate::error::{Error, Result};

/// Flips byte order, little-endian to big-endian and back.
pub fn reverse(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().rev().copied().collect()
}

/// Copies `src[start..end]` into the front of `dst` and zero-fills the rest.
pub fn slice_into(dst: &mut [u8], src: &[u8], start: usize, end: usize) -> Result<()> {
    if start > end || end > src.len() || end - start > dst.len() {
        return Err(Error::SliceOutOfBounds {
            start,
            end,
            len: src.len(),
            dst_len: dst.len(),
        });
    }

    let (head, tail) = dst.split_at_mut(end - start);
    head.copy_from_slice(&src[start..end]);
    tail.fill(0);
    Ok(())
}

/// Fixed-size form of [`slice_into`].
pub fn slice<const M: usize>(src: &[u8], start: usize, end: usize) -> Result<[u8; M]> {
    let mut out = [0u8; M];
    slice_into(&mut out, src, start, end)?;
    Ok(out)
}
