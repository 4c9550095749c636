//! Channel order conversion between ARGB and RGBA pixel buffers

/// Reorder an ARGB buffer into RGBA
#[must_use]
pub fn argb_to_rgba(argb: &[u8]) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(argb.len());
    for chunk in argb.chunks_exact(4) {
        rgba.push(chunk[1]); // R
        rgba.push(chunk[2]); // G
        rgba.push(chunk[3]); // B
        rgba.push(chunk[0]); // A
    }
    rgba
}

/// Reorder an RGBA buffer into ARGB
#[must_use]
pub fn rgba_to_argb(rgba: &[u8]) -> Vec<u8> {
    let mut argb = Vec::with_capacity(rgba.len());
    for chunk in rgba.chunks_exact(4) {
        argb.push(chunk[3]); // A
        argb.push(chunk[0]); // R
        argb.push(chunk[1]); // G
        argb.push(chunk[2]); // B
    }
    argb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_swaps() {
        let argb = [0x11, 0x22, 0x33, 0x44, 0xAA, 0xBB, 0xCC, 0xDD];
        let rgba = argb_to_rgba(&argb);
        assert_eq!(rgba, vec![0x22, 0x33, 0x44, 0x11, 0xBB, 0xCC, 0xDD, 0xAA]);
        assert_eq!(rgba_to_argb(&rgba), argb.to_vec());
    }
}
